//! Core library for a toroidal Game of Life with an optional clock overlay.

pub mod config;
pub mod engine;
pub mod error;
pub mod life;
pub mod pos;
pub mod render;

pub use config::{Config, Layout};
pub use engine::{Grid, Stepper};
pub use error::ConfigError;
pub use life::Life;
pub use pos::Pos;
pub use render::{ClockTime, Frame, Rect};
