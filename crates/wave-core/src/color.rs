//! Hex color parsing and blending.
//!
//! Configuration colors are `#rrggbb` (or `#rgb`) sRGB strings. Blending
//! happens channel-wise in linear RGB and the result is re-encoded to hex.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
}

/// An sRGB-encoded color with channels in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Decode the sRGB transfer function, yielding linear channels.
    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }

    pub fn from_linear(lin: [f32; 3]) -> Self {
        Self {
            r: linear_to_srgb(lin[0]),
            g: linear_to_srgb(lin[1]),
            b: linear_to_srgb(lin[2]),
        }
    }
}

/// Parse `#rrggbb` or shorthand `#rgb`.
pub fn parse_hex(s: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidHex(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    let v = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    let (r, g, b) = match hex.len() {
        3 => {
            // expand each nibble: 0xf -> 0xff
            let r = (v >> 8) & 0xf;
            let g = (v >> 4) & 0xf;
            let b = v & 0xf;
            (r * 17, g * 17, b * 17)
        }
        6 => ((v >> 16) & 0xff, (v >> 8) & 0xff, v & 0xff),
        _ => return Err(invalid()),
    };
    Ok(Rgb {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
    })
}

/// Encode as lowercase `#rrggbb`, clamping channels to \[0, 1\].
pub fn encode_hex(c: Rgb) -> String {
    let to_byte = |ch: f32| (ch.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", to_byte(c.r), to_byte(c.g), to_byte(c.b))
}

/// Blend two parsed colors in linear RGB space.
pub fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let la = a.to_linear();
    let lb = b.to_linear();
    Rgb::from_linear([
        la[0] + (lb[0] - la[0]) * t,
        la[1] + (lb[1] - la[1]) * t,
        la[2] + (lb[2] - la[2]) * t,
    ])
}

/// Blend two hex strings. If either endpoint fails to parse, fall back to a
/// discrete pick instead of erroring: the source below the midpoint, the
/// target at or above it.
pub fn lerp_hex(from: &str, to: &str, t: f32) -> String {
    match (parse_hex(from), parse_hex(to)) {
        (Ok(a), Ok(b)) => encode_hex(mix(a, b, t)),
        _ if t < 0.5 => from.to_string(),
        _ => to.to_string(),
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
