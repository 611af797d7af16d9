//! Easing curve library.
//!
//! Every timed transition remaps normalized progress through one of 28 named
//! closed-form curves: `linear` plus `power1`..`power4`, `sine`, `expo`,
//! `back`, `elastic` and `bounce`, each in `in` / `out` / `inOut` variants.
//! Curves are evaluated on t in \[0, 1\]; `back` and `elastic` may return
//! values outside \[0, 1\].

use std::f32::consts::{FRAC_PI_2, PI};

pub type EaseFn = fn(f32) -> f32;

/// All recognized curve names, as accepted by [`resolve`].
pub const CURVE_NAMES: [&str; 28] = [
    "linear",
    "power1.in",
    "power1.out",
    "power1.inOut",
    "power2.in",
    "power2.out",
    "power2.inOut",
    "power3.in",
    "power3.out",
    "power3.inOut",
    "power4.in",
    "power4.out",
    "power4.inOut",
    "sine.in",
    "sine.out",
    "sine.inOut",
    "expo.in",
    "expo.out",
    "expo.inOut",
    "back.in",
    "back.out",
    "back.inOut",
    "elastic.in",
    "elastic.out",
    "elastic.inOut",
    "bounce.in",
    "bounce.out",
    "bounce.inOut",
];

/// Look up a curve by name. Unknown names are recovered locally: a warning is
/// logged and the identity curve is returned, never an error.
pub fn resolve(name: &str) -> EaseFn {
    match name {
        "linear" => linear,
        "power1.in" => power1_in,
        "power1.out" => power1_out,
        "power1.inOut" => power1_in_out,
        "power2.in" => power2_in,
        "power2.out" => power2_out,
        "power2.inOut" => power2_in_out,
        "power3.in" => power3_in,
        "power3.out" => power3_out,
        "power3.inOut" => power3_in_out,
        "power4.in" => power4_in,
        "power4.out" => power4_out,
        "power4.inOut" => power4_in_out,
        "sine.in" => sine_in,
        "sine.out" => sine_out,
        "sine.inOut" => sine_in_out,
        "expo.in" => expo_in,
        "expo.out" => expo_out,
        "expo.inOut" => expo_in_out,
        "back.in" => back_in,
        "back.out" => back_out,
        "back.inOut" => back_in_out,
        "elastic.in" => elastic_in,
        "elastic.out" => elastic_out,
        "elastic.inOut" => elastic_in_out,
        "bounce.in" => bounce_in,
        "bounce.out" => bounce_out,
        "bounce.inOut" => bounce_in_out,
        other => {
            log::warn!("unknown easing curve {other:?}, falling back to linear");
            linear
        }
    }
}

pub fn linear(t: f32) -> f32 {
    t
}

// Polynomial family. `power1` is quadratic through `power4` quintic.

#[inline]
fn pow_in(t: f32, n: i32) -> f32 {
    t.powi(n)
}

#[inline]
fn pow_out(t: f32, n: i32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

#[inline]
fn pow_in_out(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        2.0_f32.powi(n - 1) * t.powi(n)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(n) / 2.0
    }
}

pub fn power1_in(t: f32) -> f32 {
    pow_in(t, 2)
}
pub fn power1_out(t: f32) -> f32 {
    pow_out(t, 2)
}
pub fn power1_in_out(t: f32) -> f32 {
    pow_in_out(t, 2)
}
pub fn power2_in(t: f32) -> f32 {
    pow_in(t, 3)
}
pub fn power2_out(t: f32) -> f32 {
    pow_out(t, 3)
}
pub fn power2_in_out(t: f32) -> f32 {
    pow_in_out(t, 3)
}
pub fn power3_in(t: f32) -> f32 {
    pow_in(t, 4)
}
pub fn power3_out(t: f32) -> f32 {
    pow_out(t, 4)
}
pub fn power3_in_out(t: f32) -> f32 {
    pow_in_out(t, 4)
}
pub fn power4_in(t: f32) -> f32 {
    pow_in(t, 5)
}
pub fn power4_out(t: f32) -> f32 {
    pow_out(t, 5)
}
pub fn power4_in_out(t: f32) -> f32 {
    pow_in_out(t, 5)
}

pub fn sine_in(t: f32) -> f32 {
    1.0 - (t * FRAC_PI_2).cos()
}
pub fn sine_out(t: f32) -> f32 {
    (t * FRAC_PI_2).sin()
}
pub fn sine_in_out(t: f32) -> f32 {
    -((PI * t).cos() - 1.0) / 2.0
}

pub fn expo_in(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        2.0_f32.powf(10.0 * t - 10.0)
    }
}
pub fn expo_out(t: f32) -> f32 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}
pub fn expo_in_out(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        2.0_f32.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
    }
}

// Overshoot constants shared by the back family.
const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;

pub fn back_in(t: f32) -> f32 {
    BACK_C3 * t * t * t - BACK_C1 * t * t
}
pub fn back_out(t: f32) -> f32 {
    let u = t - 1.0;
    1.0 + BACK_C3 * u * u * u + BACK_C1 * u * u
}
pub fn back_in_out(t: f32) -> f32 {
    if t < 0.5 {
        let u = 2.0 * t;
        (u * u * ((BACK_C2 + 1.0) * u - BACK_C2)) / 2.0
    } else {
        let u = 2.0 * t - 2.0;
        (u * u * ((BACK_C2 + 1.0) * u + BACK_C2) + 2.0) / 2.0
    }
}

const ELASTIC_C4: f32 = 2.0 * PI / 3.0;
const ELASTIC_C5: f32 = 2.0 * PI / 4.5;

pub fn elastic_in(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
    }
}
pub fn elastic_out(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
    }
}
pub fn elastic_in_out(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        -(2.0_f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0
    } else {
        2.0_f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin() / 2.0 + 1.0
    }
}

// The bounce family is anchored on `bounce.out`; the other two variants are
// reflections of it.

pub fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let u = t - 1.5 / D1;
        N1 * u * u + 0.75
    } else if t < 2.5 / D1 {
        let u = t - 2.25 / D1;
        N1 * u * u + 0.9375
    } else {
        let u = t - 2.625 / D1;
        N1 * u * u + 0.984375
    }
}
pub fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}
pub fn bounce_in_out(t: f32) -> f32 {
    if t < 0.5 {
        (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
    } else {
        (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_boundaries(name: &str, f: EaseFn) {
        assert!(f(0.0).abs() < 1e-4, "{name}(0) = {}, expected 0", f(0.0));
        assert!(
            (f(1.0) - 1.0).abs() < 1e-4,
            "{name}(1) = {}, expected 1",
            f(1.0)
        );
    }

    fn assert_monotonic(name: &str, f: EaseFn) {
        let mut prev = f(0.0);
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let val = f(t);
            assert!(
                val >= prev - 1e-5,
                "{name} non-monotonic at t={t}: {prev} > {val}"
            );
            prev = val;
        }
    }

    #[test]
    fn every_named_curve_hits_both_boundaries() {
        for name in CURVE_NAMES {
            assert_boundaries(name, resolve(name));
        }
    }

    #[test]
    fn monotonic_families_are_monotonic() {
        for name in CURVE_NAMES {
            // back/elastic overshoot and bounce rebounds, on purpose
            if name.starts_with("back")
                || name.starts_with("elastic")
                || name.starts_with("bounce")
            {
                continue;
            }
            assert_monotonic(name, resolve(name));
        }
    }

    #[test]
    fn back_out_overshoots_above_one() {
        let peak = (1..100)
            .map(|i| back_out(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "back.out never exceeded 1 (peak {peak})");
    }

    #[test]
    fn unknown_name_is_identity() {
        let f = resolve("wobble.inOut");
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_eq!(f(t), t);
        }
    }

    #[test]
    fn in_out_pairs_are_reflections() {
        for (inn, out) in [
            ("power2.in", "power2.out"),
            ("sine.in", "sine.out"),
            ("bounce.in", "bounce.out"),
        ] {
            let (fi, fo) = (resolve(inn), resolve(out));
            for i in 0..=20 {
                let t = i as f32 / 20.0;
                assert!(
                    (fi(t) - (1.0 - fo(1.0 - t))).abs() < 1e-4,
                    "{inn}/{out} asymmetric at t={t}"
                );
            }
        }
    }

    #[test]
    fn in_out_midpoint_is_half() {
        for name in CURVE_NAMES {
            if !name.ends_with("inOut") {
                continue;
            }
            let f = resolve(name);
            assert!(
                (f(0.5) - 0.5).abs() < 1e-4,
                "{name}(0.5) = {}, expected 0.5",
                f(0.5)
            );
        }
    }
}
