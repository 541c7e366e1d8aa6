use crate::constants::*;
use crate::error::ParamsError;

/// Tunable evasion policy.
///
/// `Default` yields the values in [`crate::constants`]. Front-ends may
/// override individual fields and should call [`EvadeParams::validate`] once
/// before handing the params to a [`crate::FrameLoop`].
#[derive(Clone, Debug, PartialEq)]
pub struct EvadeParams {
    pub proximity: f32,
    pub base_speed: f32,
    pub panic_speed: f32,
    pub threat_speed_share: f32,
    pub wall_margin: f32,
    pub wall_repel_dist: f32,
    pub corner_threshold: f32,
    pub away_weight_base: f32,
    pub away_weight_threat: f32,
    pub wall_weight: f32,
    pub damping_calm: f32,
    pub damping_cornered: f32,
    pub max_frame_dt: f32,
    pub min_scale: f32,
    pub scale_radius: f32,
}

impl Default for EvadeParams {
    fn default() -> Self {
        Self {
            proximity: PROXIMITY,
            base_speed: BASE_SPEED,
            panic_speed: PANIC_SPEED,
            threat_speed_share: THREAT_SPEED_SHARE,
            wall_margin: WALL_MARGIN,
            wall_repel_dist: WALL_REPEL_DIST,
            corner_threshold: CORNER_THRESHOLD,
            away_weight_base: AWAY_WEIGHT_BASE,
            away_weight_threat: AWAY_WEIGHT_THREAT,
            wall_weight: WALL_WEIGHT,
            damping_calm: DAMPING_CALM,
            damping_cornered: DAMPING_CORNERED,
            max_frame_dt: MAX_FRAME_DT,
            min_scale: MIN_SCALE,
            scale_radius: SCALE_RADIUS,
        }
    }
}

impl EvadeParams {
    pub fn with_speeds(mut self, base_speed: f32, panic_speed: f32) -> Self {
        self.base_speed = base_speed;
        self.panic_speed = panic_speed;
        self
    }

    pub fn with_wall_margin(mut self, wall_margin: f32) -> Self {
        self.wall_margin = wall_margin;
        self
    }

    /// Damping rate for the current panic state.
    #[inline]
    pub fn damping_rate(&self, cornered: bool) -> f32 {
        if cornered {
            self.damping_cornered
        } else {
            self.damping_calm
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        let fields = [
            ("proximity", self.proximity),
            ("base_speed", self.base_speed),
            ("panic_speed", self.panic_speed),
            ("threat_speed_share", self.threat_speed_share),
            ("wall_margin", self.wall_margin),
            ("wall_repel_dist", self.wall_repel_dist),
            ("corner_threshold", self.corner_threshold),
            ("away_weight_base", self.away_weight_base),
            ("away_weight_threat", self.away_weight_threat),
            ("wall_weight", self.wall_weight),
            ("damping_calm", self.damping_calm),
            ("damping_cornered", self.damping_cornered),
            ("max_frame_dt", self.max_frame_dt),
            ("min_scale", self.min_scale),
            ("scale_radius", self.scale_radius),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { name, value });
            }
        }

        let positive = [
            ("proximity", self.proximity),
            ("base_speed", self.base_speed),
            ("wall_repel_dist", self.wall_repel_dist),
            ("damping_calm", self.damping_calm),
            ("damping_cornered", self.damping_cornered),
            ("max_frame_dt", self.max_frame_dt),
            ("scale_radius", self.scale_radius),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ParamsError::NotPositive { name, value });
            }
        }

        if self.wall_margin < 0.0 {
            return Err(ParamsError::NotPositive {
                name: "wall_margin",
                value: self.wall_margin,
            });
        }
        if self.panic_speed < self.base_speed {
            return Err(ParamsError::PanicBelowBase {
                base: self.base_speed,
                panic: self.panic_speed,
            });
        }
        if self.min_scale <= 0.0 || self.min_scale > 1.0 {
            return Err(ParamsError::MinScaleOutOfRange(self.min_scale));
        }
        Ok(())
    }
}
