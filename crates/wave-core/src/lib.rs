pub mod arc;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod displace;
pub mod ease;
pub mod engine;
pub mod interp;
pub mod layout;
pub mod morph;
pub mod noise;
pub mod presets;
pub mod view;

pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use arc::{ArcEvent, ArcField};
pub use clock::SimClock;
pub use config::{BlendMode, Config, ConfigPatch};
pub use constants::*;
pub use displace::{displace_points, Lanes, RenderPoint};
pub use engine::WaveEngine;
pub use interp::interpolate;
pub use layout::PointLayout;
pub use morph::{MorphDriver, MorphHooks, MorphStatus, TransitionSpec};
pub use noise::ValueNoise;
pub use presets::{preset, presets, PRESET_NAMES};
pub use view::{Camera, Viewport};
