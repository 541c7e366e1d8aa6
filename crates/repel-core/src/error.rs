use thiserror::Error;

/// Rejected [`crate::EvadeParams`] configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("panic speed {panic} is below base speed {base}")]
    PanicBelowBase { base: f32, panic: f32 },
    #[error("min scale must lie in (0, 1], got {0}")]
    MinScaleOutOfRange(f32),
}
