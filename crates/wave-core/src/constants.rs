// Shared tuning constants for the wavesphere engine.

// Arcs
pub const MAX_ARCS: usize = 8; // global cap on concurrent arc events
pub const ARC_FADE_FRACTION: f32 = 0.2; // share of lifetime spent ramping in / out
pub const ARC_MIN_DURATION: f32 = 0.05; // floor applied to the duration knob at spawn

// Radial displacement
pub const NOISE_FACTOR_MAX: f32 = 2.5; // upper clamp on the radial noise factor
pub const ARC_ALPHA_BOOST_MAX: f32 = 3.0; // upper clamp on the min(3, 1 + boost) alpha term

// Presentation
pub const MIN_DEPTH: f32 = 1e-3; // floor on view depth used by perspective sizing

// Defaults shared by the engine and the demo frontend
pub const DEFAULT_POINT_COUNT: u32 = 2400;
pub const DEFAULT_LAYOUT_SEED: u32 = 7;
