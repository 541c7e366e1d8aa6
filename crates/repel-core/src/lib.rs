pub mod analyzer;
pub mod constants;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod motion;
pub mod params;
pub mod pointer;
pub mod scale;
pub mod state;
pub mod steering;
pub static BUTTON_WGSL: &str = include_str!("../shaders/button.wgsl");

pub use analyzer::*;
pub use constants::*;
pub use error::*;
pub use frame_loop::*;
pub use geometry::*;
pub use motion::*;
pub use params::*;
pub use pointer::*;
pub use scale::*;
pub use state::*;
pub use steering::*;
