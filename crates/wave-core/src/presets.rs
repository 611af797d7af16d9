//! Named preset configurations.
//!
//! Four switchable looks the demo frontend morphs between. Each is a full
//! [`Config`]; morph to one via `ConfigPatch::from_config`.

use crate::config::{BlendMode, Config};
use fnv::FnvHashMap;

pub const PRESET_NAMES: [&str; 4] = ["calm", "bloom", "storm", "ember"];

/// The full preset table.
pub fn presets() -> FnvHashMap<&'static str, Config> {
    let mut table = FnvHashMap::default();
    table.insert("calm", calm());
    table.insert("bloom", bloom());
    table.insert("storm", storm());
    table.insert("ember", ember());
    table
}

pub fn preset(name: &str) -> Option<Config> {
    presets().remove(name)
}

fn calm() -> Config {
    Config {
        point_color: "#9ad1ff".to_string(),
        glow_color: "#3d6fb8".to_string(),
        gradient_color: "#b0fff2".to_string(),
        spin_speed: 0.08,
        noise_amount: 0.22,
        noise_speed: 0.15,
        pulse_amount: 0.06,
        wave_amount: 0.04,
        arc_spawn_rate: 0.25,
        arc_brightness: 1.1,
        glow_strength: 0.4,
        ..Config::default()
    }
}

fn bloom() -> Config {
    Config {
        point_color: "#ffd7f4".to_string(),
        glow_color: "#c45ad1".to_string(),
        gradient_color: "#7a5cff".to_string(),
        radius: 1.15,
        point_size: 0.042,
        opacity: 0.9,
        spin_speed: 0.18,
        spin_axis_pitch: 0.9,
        noise_amount: 0.5,
        noise_scale: 1.4,
        pulse_amount: 0.2,
        pulse_speed: 0.9,
        ripple_enabled: true,
        ripple_amount: 0.1,
        glow_strength: 0.8,
        glow_radius_factor: 2.4,
        gradient_angle: 1.9,
        ..Config::default()
    }
}

fn storm() -> Config {
    Config {
        point_color: "#cfe8ff".to_string(),
        glow_color: "#5a8bd1".to_string(),
        gradient_color: "#274a8c".to_string(),
        volume: 0.9,
        spin_speed: 0.45,
        noise_amount: 0.75,
        noise_speed: 0.8,
        noise_scale: 3.4,
        wave_amount: 0.22,
        wave_speed: 2.2,
        wave_count: 9.0,
        ripple_enabled: true,
        ripple_amount: 0.28,
        ripple_speed: 1.6,
        arc_spawn_rate: 2.4,
        arc_duration: 0.9,
        arc_speed: 5.0,
        arc_brightness: 2.2,
        size_randomness: 0.6,
        blend_mode: BlendMode::Additive,
        ..Config::default()
    }
}

fn ember() -> Config {
    Config {
        point_color: "#ffb36b".to_string(),
        glow_color: "#d14a1e".to_string(),
        gradient_color: "#661111".to_string(),
        radius: 0.85,
        opacity: 0.75,
        volume: 0.45,
        spin_speed: 0.05,
        spin_axis_pitch: -0.4,
        noise_amount: 0.3,
        noise_speed: 0.1,
        pulse_amount: 0.16,
        pulse_speed: 2.2,
        wave_amount: 0.0,
        arcs_enabled: true,
        arc_spawn_rate: 0.9,
        arc_duration: 2.6,
        arc_speed: 1.2,
        arc_brightness: 1.8,
        arc_altitude: 0.1,
        glow_strength: 0.7,
        gradient_angle: -1.2,
        mask_enabled: true,
        mask_radius: 0.8,
        mask_feather: 0.35,
        blend_mode: BlendMode::Additive,
        ..Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn every_named_preset_resolves() {
        for name in PRESET_NAMES {
            assert!(preset(name).is_some(), "missing preset {name}");
        }
        assert!(preset("nope").is_none());
    }

    #[test]
    fn preset_colors_parse() {
        for (name, cfg) in presets() {
            for hex in [&cfg.point_color, &cfg.glow_color, &cfg.gradient_color] {
                assert!(
                    color::parse_hex(hex).is_ok(),
                    "preset {name} has bad color {hex}"
                );
            }
        }
    }
}
