pub mod config;
pub mod connect;
pub mod constants;
pub mod error;
pub mod field;
pub mod frame;
pub mod pointer;
pub mod schedule;
pub mod sim;
pub mod theme;

pub use config::FieldConfig;
pub use connect::{connections_brute, link_alpha, Link, SpatialIndex};
pub use constants::*;
pub use error::{ConfigError, UnknownTheme};
pub use field::{capped_grid, grid_steps, Particle, ParticleField, Viewport};
pub use frame::{Frame, Glow, Shape, Surface};
pub use pointer::{PointerState, Trail};
pub use schedule::{Scheduler, StopHandle};
pub use sim::Simulation;
pub use theme::{Palette, Rgb, Rgba, Theme};

pub use glam::Vec2;
