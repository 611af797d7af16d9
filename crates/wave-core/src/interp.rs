//! Configuration interpolation.
//!
//! `interpolate` blends a full source configuration toward a partial target:
//! numeric fields lerp, colors blend in linear RGB (with a discrete fallback
//! when an endpoint fails to parse), and booleans follow the pass-through
//! rules below. The progress value is the *eased* progress and may lie
//! outside \[0, 1\] for overshooting curves; numeric fields extrapolate in
//! that case rather than clamping.
//!
//! Boolean policy: effect enable flags are forced on while a morph is in
//! flight so amount-driven fades render smoothly through zero. At full
//! progress the result is exactly `from.apply(to)`. The mask invert flag,
//! blend mode and debug clock fields are never interpolated.

use crate::color;
use crate::config::{Config, ConfigPatch};

#[inline]
fn lerp(from: f32, to: Option<f32>, t: f32) -> f32 {
    match to {
        Some(to) => from + (to - from) * t,
        None => from,
    }
}

fn lerp_color(from: &str, to: Option<&String>, t: f32) -> String {
    match to {
        // at the start of a transition the source string passes through
        // untouched instead of being re-encoded
        Some(to) if t != 0.0 => color::lerp_hex(from, to, t),
        _ => from.to_string(),
    }
}

pub fn interpolate(from: &Config, to: &ConfigPatch, t: f32) -> Config {
    // Exactly at full progress the result is the resolved target; eased
    // progress beyond 1 keeps blending so overshoot curves stay visible.
    if t == 1.0 {
        return from.apply(to);
    }

    let mut out = from.clone();

    out.radius = lerp(from.radius, to.radius, t);
    out.point_size = lerp(from.point_size, to.point_size, t);
    out.scale = lerp(from.scale, to.scale, t);
    out.opacity = lerp(from.opacity, to.opacity, t);
    out.size_randomness = lerp(from.size_randomness, to.size_randomness, t);
    out.volume = lerp(from.volume, to.volume, t);
    out.spin_speed = lerp(from.spin_speed, to.spin_speed, t);
    out.spin_axis_pitch = lerp(from.spin_axis_pitch, to.spin_axis_pitch, t);
    out.spin_axis_yaw = lerp(from.spin_axis_yaw, to.spin_axis_yaw, t);
    out.noise_amount = lerp(from.noise_amount, to.noise_amount, t);
    out.noise_speed = lerp(from.noise_speed, to.noise_speed, t);
    out.noise_scale = lerp(from.noise_scale, to.noise_scale, t);
    out.pulse_amount = lerp(from.pulse_amount, to.pulse_amount, t);
    out.pulse_speed = lerp(from.pulse_speed, to.pulse_speed, t);
    out.wave_amount = lerp(from.wave_amount, to.wave_amount, t);
    out.wave_speed = lerp(from.wave_speed, to.wave_speed, t);
    out.wave_count = lerp(from.wave_count, to.wave_count, t);
    out.ripple_amount = lerp(from.ripple_amount, to.ripple_amount, t);
    out.ripple_speed = lerp(from.ripple_speed, to.ripple_speed, t);
    out.ripple_frequency = lerp(from.ripple_frequency, to.ripple_frequency, t);
    out.arc_spawn_rate = lerp(from.arc_spawn_rate, to.arc_spawn_rate, t);
    out.arc_duration = lerp(from.arc_duration, to.arc_duration, t);
    out.arc_speed = lerp(from.arc_speed, to.arc_speed, t);
    out.arc_span = lerp(from.arc_span, to.arc_span, t);
    out.arc_thickness = lerp(from.arc_thickness, to.arc_thickness, t);
    out.arc_feather = lerp(from.arc_feather, to.arc_feather, t);
    out.arc_brightness = lerp(from.arc_brightness, to.arc_brightness, t);
    out.arc_altitude = lerp(from.arc_altitude, to.arc_altitude, t);
    out.glow_strength = lerp(from.glow_strength, to.glow_strength, t);
    out.glow_radius_factor = lerp(from.glow_radius_factor, to.glow_radius_factor, t);
    out.gradient_angle = lerp(from.gradient_angle, to.gradient_angle, t);
    out.mask_radius = lerp(from.mask_radius, to.mask_radius, t);
    out.mask_feather = lerp(from.mask_feather, to.mask_feather, t);

    out.point_color = lerp_color(&from.point_color, to.point_color.as_ref(), t);
    out.glow_color = lerp_color(&from.glow_color, to.glow_color.as_ref(), t);
    out.gradient_color = lerp_color(&from.gradient_color, to.gradient_color.as_ref(), t);

    // Forced-enable policy: with all flags on, an effect whose amount fades
    // through zero stays continuous for the whole transition.
    out.spin_enabled = true;
    out.noise_enabled = true;
    out.pulse_enabled = true;
    out.wave_enabled = true;
    out.ripple_enabled = true;
    out.arcs_enabled = true;
    out.gradient_enabled = true;
    out.mask_enabled = true;

    // mask_invert, blend_mode and the debug fields were cloned from `from`
    // and stay there until full progress.
    out
}
