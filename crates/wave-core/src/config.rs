//! The flat visual configuration record and its partial morph target.
//!
//! A [`Config`] fully describes one look of the point sphere. Numeric and
//! color fields are interpolable; enable flags, the blend mode and the debug
//! clock fields are pass-through (see the interpolation rules in
//! `interp.rs`). A [`ConfigPatch`] is the partial "to" side of a morph:
//! `None` means "hold the current value".

use crate::constants::{DEFAULT_LAYOUT_SEED, DEFAULT_POINT_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Normal,
    Additive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    // geometry and global presentation
    pub point_count: u32,
    pub layout_seed: u32,
    pub radius: f32,
    pub point_size: f32,
    pub scale: f32,
    pub opacity: f32,
    pub size_randomness: f32,
    pub volume: f32,

    // colors
    pub point_color: String,
    pub glow_color: String,
    pub gradient_color: String,

    // spin
    pub spin_enabled: bool,
    pub spin_speed: f32,
    pub spin_axis_pitch: f32,
    pub spin_axis_yaw: f32,

    // radial value noise
    pub noise_enabled: bool,
    pub noise_amount: f32,
    pub noise_speed: f32,
    pub noise_scale: f32,

    // per-point pulse
    pub pulse_enabled: bool,
    pub pulse_amount: f32,
    pub pulse_speed: f32,

    // traveling longitude wave
    pub wave_enabled: bool,
    pub wave_amount: f32,
    pub wave_speed: f32,
    pub wave_count: f32,

    // tangential surface ripple
    pub ripple_enabled: bool,
    pub ripple_amount: f32,
    pub ripple_speed: f32,
    pub ripple_frequency: f32,

    // transient arcs
    pub arcs_enabled: bool,
    pub arc_spawn_rate: f32,
    pub arc_duration: f32,
    pub arc_speed: f32,
    pub arc_span: f32,
    pub arc_thickness: f32,
    pub arc_feather: f32,
    pub arc_brightness: f32,
    pub arc_altitude: f32,

    // glow halo
    pub glow_strength: f32,
    pub glow_radius_factor: f32,

    // two-color gradient
    pub gradient_enabled: bool,
    pub gradient_angle: f32,

    // screen-space mask
    pub mask_enabled: bool,
    pub mask_invert: bool,
    pub mask_radius: f32,
    pub mask_feather: f32,

    // blending and debug clock
    pub blend_mode: BlendMode,
    pub freeze: bool,
    pub step_count: u32,
    pub step_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            layout_seed: DEFAULT_LAYOUT_SEED,
            radius: 1.0,
            point_size: 0.035,
            scale: 1.0,
            opacity: 0.85,
            size_randomness: 0.35,
            volume: 0.6,
            point_color: "#9ad1ff".to_string(),
            glow_color: "#3d6fb8".to_string(),
            gradient_color: "#ff7ad9".to_string(),
            spin_enabled: true,
            spin_speed: 0.12,
            spin_axis_pitch: 0.35,
            spin_axis_yaw: 0.0,
            noise_enabled: true,
            noise_amount: 0.35,
            noise_speed: 0.25,
            noise_scale: 2.2,
            pulse_enabled: true,
            pulse_amount: 0.12,
            pulse_speed: 1.4,
            wave_enabled: true,
            wave_amount: 0.08,
            wave_speed: 0.9,
            wave_count: 5.0,
            ripple_enabled: false,
            ripple_amount: 0.15,
            ripple_speed: 0.8,
            ripple_frequency: 9.0,
            arcs_enabled: true,
            arc_spawn_rate: 0.6,
            arc_duration: 1.8,
            arc_speed: 2.4,
            arc_span: 1.1,
            arc_thickness: 0.045,
            arc_feather: 0.08,
            arc_brightness: 1.6,
            arc_altitude: 0.06,
            glow_strength: 0.55,
            glow_radius_factor: 1.8,
            gradient_enabled: true,
            gradient_angle: 0.7,
            mask_enabled: false,
            mask_invert: false,
            mask_radius: 0.65,
            mask_feather: 0.25,
            blend_mode: BlendMode::Normal,
            freeze: false,
            step_count: 0,
            step_size: 1.0 / 60.0,
        }
    }
}

impl Config {
    /// Resolve a patch against this configuration, i.e. the morph target at
    /// full progress. Fields the patch omits keep their current value.
    pub fn apply(&self, patch: &ConfigPatch) -> Config {
        let mut out = self.clone();
        if let Some(v) = patch.radius {
            out.radius = v;
        }
        if let Some(v) = patch.point_size {
            out.point_size = v;
        }
        if let Some(v) = patch.scale {
            out.scale = v;
        }
        if let Some(v) = patch.opacity {
            out.opacity = v;
        }
        if let Some(v) = patch.size_randomness {
            out.size_randomness = v;
        }
        if let Some(v) = patch.volume {
            out.volume = v;
        }
        if let Some(v) = &patch.point_color {
            out.point_color = v.clone();
        }
        if let Some(v) = &patch.glow_color {
            out.glow_color = v.clone();
        }
        if let Some(v) = &patch.gradient_color {
            out.gradient_color = v.clone();
        }
        if let Some(v) = patch.spin_enabled {
            out.spin_enabled = v;
        }
        if let Some(v) = patch.spin_speed {
            out.spin_speed = v;
        }
        if let Some(v) = patch.spin_axis_pitch {
            out.spin_axis_pitch = v;
        }
        if let Some(v) = patch.spin_axis_yaw {
            out.spin_axis_yaw = v;
        }
        if let Some(v) = patch.noise_enabled {
            out.noise_enabled = v;
        }
        if let Some(v) = patch.noise_amount {
            out.noise_amount = v;
        }
        if let Some(v) = patch.noise_speed {
            out.noise_speed = v;
        }
        if let Some(v) = patch.noise_scale {
            out.noise_scale = v;
        }
        if let Some(v) = patch.pulse_enabled {
            out.pulse_enabled = v;
        }
        if let Some(v) = patch.pulse_amount {
            out.pulse_amount = v;
        }
        if let Some(v) = patch.pulse_speed {
            out.pulse_speed = v;
        }
        if let Some(v) = patch.wave_enabled {
            out.wave_enabled = v;
        }
        if let Some(v) = patch.wave_amount {
            out.wave_amount = v;
        }
        if let Some(v) = patch.wave_speed {
            out.wave_speed = v;
        }
        if let Some(v) = patch.wave_count {
            out.wave_count = v;
        }
        if let Some(v) = patch.ripple_enabled {
            out.ripple_enabled = v;
        }
        if let Some(v) = patch.ripple_amount {
            out.ripple_amount = v;
        }
        if let Some(v) = patch.ripple_speed {
            out.ripple_speed = v;
        }
        if let Some(v) = patch.ripple_frequency {
            out.ripple_frequency = v;
        }
        if let Some(v) = patch.arcs_enabled {
            out.arcs_enabled = v;
        }
        if let Some(v) = patch.arc_spawn_rate {
            out.arc_spawn_rate = v;
        }
        if let Some(v) = patch.arc_duration {
            out.arc_duration = v;
        }
        if let Some(v) = patch.arc_speed {
            out.arc_speed = v;
        }
        if let Some(v) = patch.arc_span {
            out.arc_span = v;
        }
        if let Some(v) = patch.arc_thickness {
            out.arc_thickness = v;
        }
        if let Some(v) = patch.arc_feather {
            out.arc_feather = v;
        }
        if let Some(v) = patch.arc_brightness {
            out.arc_brightness = v;
        }
        if let Some(v) = patch.arc_altitude {
            out.arc_altitude = v;
        }
        if let Some(v) = patch.glow_strength {
            out.glow_strength = v;
        }
        if let Some(v) = patch.glow_radius_factor {
            out.glow_radius_factor = v;
        }
        if let Some(v) = patch.gradient_enabled {
            out.gradient_enabled = v;
        }
        if let Some(v) = patch.gradient_angle {
            out.gradient_angle = v;
        }
        if let Some(v) = patch.mask_enabled {
            out.mask_enabled = v;
        }
        if let Some(v) = patch.mask_invert {
            out.mask_invert = v;
        }
        if let Some(v) = patch.mask_radius {
            out.mask_radius = v;
        }
        if let Some(v) = patch.mask_feather {
            out.mask_feather = v;
        }
        if let Some(v) = patch.blend_mode {
            out.blend_mode = v;
        }
        out
    }

    /// Structural equality over the interpolable fields only. Hosts use this
    /// to detect visual changes without being tripped up by the debug clock
    /// counters.
    pub fn interpolable_eq(&self, other: &Config) -> bool {
        self.radius == other.radius
            && self.point_size == other.point_size
            && self.scale == other.scale
            && self.opacity == other.opacity
            && self.size_randomness == other.size_randomness
            && self.volume == other.volume
            && self.point_color == other.point_color
            && self.glow_color == other.glow_color
            && self.gradient_color == other.gradient_color
            && self.spin_speed == other.spin_speed
            && self.spin_axis_pitch == other.spin_axis_pitch
            && self.spin_axis_yaw == other.spin_axis_yaw
            && self.noise_amount == other.noise_amount
            && self.noise_speed == other.noise_speed
            && self.noise_scale == other.noise_scale
            && self.pulse_amount == other.pulse_amount
            && self.pulse_speed == other.pulse_speed
            && self.wave_amount == other.wave_amount
            && self.wave_speed == other.wave_speed
            && self.wave_count == other.wave_count
            && self.ripple_amount == other.ripple_amount
            && self.ripple_speed == other.ripple_speed
            && self.ripple_frequency == other.ripple_frequency
            && self.arc_spawn_rate == other.arc_spawn_rate
            && self.arc_duration == other.arc_duration
            && self.arc_speed == other.arc_speed
            && self.arc_span == other.arc_span
            && self.arc_thickness == other.arc_thickness
            && self.arc_feather == other.arc_feather
            && self.arc_brightness == other.arc_brightness
            && self.arc_altitude == other.arc_altitude
            && self.glow_strength == other.glow_strength
            && self.glow_radius_factor == other.glow_radius_factor
            && self.gradient_angle == other.gradient_angle
            && self.mask_radius == other.mask_radius
            && self.mask_feather == other.mask_feather
    }
}

/// Partial morph target. The debug clock fields and the layout inputs
/// (`point_count`, `layout_seed`) are deliberately absent: they are never
/// morph targets and always stay with the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigPatch {
    pub radius: Option<f32>,
    pub point_size: Option<f32>,
    pub scale: Option<f32>,
    pub opacity: Option<f32>,
    pub size_randomness: Option<f32>,
    pub volume: Option<f32>,

    pub point_color: Option<String>,
    pub glow_color: Option<String>,
    pub gradient_color: Option<String>,

    pub spin_enabled: Option<bool>,
    pub spin_speed: Option<f32>,
    pub spin_axis_pitch: Option<f32>,
    pub spin_axis_yaw: Option<f32>,

    pub noise_enabled: Option<bool>,
    pub noise_amount: Option<f32>,
    pub noise_speed: Option<f32>,
    pub noise_scale: Option<f32>,

    pub pulse_enabled: Option<bool>,
    pub pulse_amount: Option<f32>,
    pub pulse_speed: Option<f32>,

    pub wave_enabled: Option<bool>,
    pub wave_amount: Option<f32>,
    pub wave_speed: Option<f32>,
    pub wave_count: Option<f32>,

    pub ripple_enabled: Option<bool>,
    pub ripple_amount: Option<f32>,
    pub ripple_speed: Option<f32>,
    pub ripple_frequency: Option<f32>,

    pub arcs_enabled: Option<bool>,
    pub arc_spawn_rate: Option<f32>,
    pub arc_duration: Option<f32>,
    pub arc_speed: Option<f32>,
    pub arc_span: Option<f32>,
    pub arc_thickness: Option<f32>,
    pub arc_feather: Option<f32>,
    pub arc_brightness: Option<f32>,
    pub arc_altitude: Option<f32>,

    pub glow_strength: Option<f32>,
    pub glow_radius_factor: Option<f32>,

    pub gradient_enabled: Option<bool>,
    pub gradient_angle: Option<f32>,

    pub mask_enabled: Option<bool>,
    pub mask_invert: Option<bool>,
    pub mask_radius: Option<f32>,
    pub mask_feather: Option<f32>,

    pub blend_mode: Option<BlendMode>,
}

impl ConfigPatch {
    /// A full patch targeting every patchable field of `config`. Morphing to
    /// a named preset goes through this.
    pub fn from_config(config: &Config) -> Self {
        Self {
            radius: Some(config.radius),
            point_size: Some(config.point_size),
            scale: Some(config.scale),
            opacity: Some(config.opacity),
            size_randomness: Some(config.size_randomness),
            volume: Some(config.volume),
            point_color: Some(config.point_color.clone()),
            glow_color: Some(config.glow_color.clone()),
            gradient_color: Some(config.gradient_color.clone()),
            spin_enabled: Some(config.spin_enabled),
            spin_speed: Some(config.spin_speed),
            spin_axis_pitch: Some(config.spin_axis_pitch),
            spin_axis_yaw: Some(config.spin_axis_yaw),
            noise_enabled: Some(config.noise_enabled),
            noise_amount: Some(config.noise_amount),
            noise_speed: Some(config.noise_speed),
            noise_scale: Some(config.noise_scale),
            pulse_enabled: Some(config.pulse_enabled),
            pulse_amount: Some(config.pulse_amount),
            pulse_speed: Some(config.pulse_speed),
            wave_enabled: Some(config.wave_enabled),
            wave_amount: Some(config.wave_amount),
            wave_speed: Some(config.wave_speed),
            wave_count: Some(config.wave_count),
            ripple_enabled: Some(config.ripple_enabled),
            ripple_amount: Some(config.ripple_amount),
            ripple_speed: Some(config.ripple_speed),
            ripple_frequency: Some(config.ripple_frequency),
            arcs_enabled: Some(config.arcs_enabled),
            arc_spawn_rate: Some(config.arc_spawn_rate),
            arc_duration: Some(config.arc_duration),
            arc_speed: Some(config.arc_speed),
            arc_span: Some(config.arc_span),
            arc_thickness: Some(config.arc_thickness),
            arc_feather: Some(config.arc_feather),
            arc_brightness: Some(config.arc_brightness),
            arc_altitude: Some(config.arc_altitude),
            glow_strength: Some(config.glow_strength),
            glow_radius_factor: Some(config.glow_radius_factor),
            gradient_enabled: Some(config.gradient_enabled),
            gradient_angle: Some(config.gradient_angle),
            mask_enabled: Some(config.mask_enabled),
            mask_invert: Some(config.mask_invert),
            mask_radius: Some(config.mask_radius),
            mask_feather: Some(config.mask_feather),
            blend_mode: Some(config.blend_mode),
        }
    }
}
