//! The per-point displacement pipeline.
//!
//! Each point's static unit direction runs through spin, radial noise,
//! tangential ripple and arc highlighting for one or two configuration
//! "lanes". While a morph is in flight the two lane directions are blended
//! with a spherical lerp (so points never cut through the sphere's center)
//! while the scalar radii and arc boosts mix linearly. The presentation
//! stage then derives screen-space size, gradient tint, mask attenuation
//! and the final alpha.
//!
//! Every inverse-trig input is clamped and every degenerate frame falls
//! back to an arbitrary orthogonal construction; the output is never NaN
//! or infinite for finite configurations.

use crate::arc::ArcEvent;
use crate::color;
use crate::config::Config;
use crate::constants::{ARC_ALPHA_BOOST_MAX, MIN_DEPTH, NOISE_FACTOR_MAX};
use crate::layout::PointLayout;
use crate::noise::ValueNoise;
use crate::view::Viewport;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Packed per-point output, uploaded verbatim as a GPU instance.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderPoint {
    pub pos: [f32; 3],
    /// Billboard quad edge in physical pixels, halo included.
    pub size: f32,
    /// Linear RGB plus straight alpha.
    pub color: [f32; 4],
    pub glow: f32,
}

/// Displacement lane selection for one frame.
pub enum Lanes<'a> {
    Single(&'a Config),
    Morph {
        from: &'a Config,
        to: &'a Config,
        progress: f32,
    },
}

struct LaneSample {
    dir: Vec3,
    radius: f32,
    boost: f32,
}

/// Per-frame precomputed lane state.
struct LaneCtx<'a> {
    cfg: &'a Config,
    spin_axis: Vec3,
    spin_angle: f32,
    ripple_center: Vec3,
}

impl<'a> LaneCtx<'a> {
    fn new(cfg: &'a Config, time: f32) -> Self {
        Self {
            cfg,
            spin_axis: axis_from_angles(cfg.spin_axis_pitch, cfg.spin_axis_yaw),
            spin_angle: time * cfg.spin_speed,
            ripple_center: ripple_center(cfg, time),
        }
    }

    fn eval(
        &self,
        base_dir: Vec3,
        point_seed: f32,
        time: f32,
        noise: &ValueNoise,
        arcs: &[ArcEvent],
        now: f64,
    ) -> LaneSample {
        let cfg = self.cfg;
        let mut dir = base_dir;

        if cfg.spin_enabled && cfg.spin_speed != 0.0 {
            dir = rotate_about_axis(dir, self.spin_axis, self.spin_angle);
        }

        // Radial field: value noise, a seeded pulse and a traveling
        // longitude wave, summed and scaled by the volume gate.
        let mut n = 0.0;
        if cfg.noise_enabled && cfg.noise_amount != 0.0 {
            let p = dir * cfg.noise_scale + Vec3::splat(time * cfg.noise_speed);
            n += noise.sample(p) * cfg.noise_amount;
        }
        if cfg.pulse_enabled && cfg.pulse_amount != 0.0 {
            n += (time * cfg.pulse_speed + point_seed * TAU).sin() * cfg.pulse_amount;
        }
        if cfg.wave_enabled && cfg.wave_amount != 0.0 {
            let longitude = dir.z.atan2(dir.x);
            n += (longitude * cfg.wave_count - time * cfg.wave_speed).sin() * cfg.wave_amount;
        }
        let factor = (1.0 + n * cfg.volume.clamp(0.0, 1.0)).clamp(0.0, NOISE_FACTOR_MAX);

        // Ripple displaces along the tangent plane, away from a moving
        // surface center; renormalizing keeps the radius intact.
        if cfg.ripple_enabled && cfg.ripple_amount != 0.0 {
            let cos_g = dir.dot(self.ripple_center).clamp(-1.0, 1.0);
            let geodesic = cos_g.acos();
            let wave = (geodesic * cfg.ripple_frequency - time * cfg.ripple_speed * TAU).sin()
                * cfg.ripple_amount;
            let away = (dir - self.ripple_center * cos_g)
                .try_normalize()
                .unwrap_or_else(|| any_orthogonal(dir));
            dir = (dir + away * wave).try_normalize().unwrap_or(base_dir);
        }

        let mut boost = 0.0;
        let mut puff = 0.0;
        for ev in arcs {
            let (b, p) = arc_contribution(ev, dir, now);
            boost += b;
            puff += p;
        }

        let radius = cfg.radius * cfg.scale * factor + puff;
        LaneSample {
            dir,
            radius: radius.max(0.0),
            boost,
        }
    }
}

/// Run the full pipeline for one frame, writing one [`RenderPoint`] per
/// layout point into `out`. `present` is the (possibly morph-blended)
/// configuration driving colors, sizing, mask and opacity; `lanes` selects
/// the geometry endpoints.
#[allow(clippy::too_many_arguments)]
pub fn displace_points(
    layout: &PointLayout,
    present: &Config,
    lanes: Lanes<'_>,
    arcs: &[ArcEvent],
    noise: &ValueNoise,
    now: f64,
    viewport: &Viewport,
    out: &mut Vec<RenderPoint>,
) {
    let time = now as f32;

    let point_rgb = linear_of(&present.point_color);
    let gradient_rgb = linear_of(&present.gradient_color);
    let gradient_axis = {
        let (s, c) = present.gradient_angle.sin_cos();
        Vec3::new(c, s, 0.0)
    };
    let focal = viewport.focal_px();
    let view = viewport.camera.view_matrix();
    let mask_anchor = viewport.project(Vec3::ZERO);
    let half_min = 0.5 * viewport.physical_width().min(viewport.physical_height());

    let (lane_a, lane_b) = match lanes {
        Lanes::Single(cfg) => (LaneCtx::new(cfg, time), None),
        Lanes::Morph { from, to, progress } => (
            LaneCtx::new(from, time),
            Some((LaneCtx::new(to, time), progress)),
        ),
    };

    out.clear();
    out.reserve(layout.len());
    for (base, &seed) in layout.positions.iter().zip(&layout.seeds) {
        let base_dir = base.try_normalize().unwrap_or(Vec3::Y);
        let a = lane_a.eval(base_dir, seed, time, noise, arcs, now);
        let (dir, radius, boost) = match &lane_b {
            Some((ctx_b, t)) => {
                let b = ctx_b.eval(base_dir, seed, time, noise, arcs, now);
                (
                    slerp(a.dir, b.dir, *t),
                    a.radius + (b.radius - a.radius) * *t,
                    a.boost + (b.boost - a.boost) * *t,
                )
            }
            None => (a.dir, a.radius, a.boost),
        };
        let world = dir * radius;

        let view_pos = view * world.extend(1.0);
        let depth = (-view_pos.z).max(MIN_DEPTH);
        let mut size = present.point_size * viewport.pixel_ratio * focal / depth;
        size *= (1.0 + (seed - 0.5) * 2.0 * present.size_randomness).max(0.0);
        let quad = size * (1.0 + present.glow_radius_factor.max(0.0));

        // Gradient tint keys off the original undisplaced direction so the
        // color assignment stays stable while points move.
        let rgb = if present.gradient_enabled {
            let k = 0.5 * (base_dir.dot(gradient_axis) + 1.0);
            mix3(point_rgb, gradient_rgb, k)
        } else {
            point_rgb
        };

        let mut mask = 1.0;
        if present.mask_enabled {
            if let (Some(anchor), Some(screen)) = (mask_anchor, viewport.project(world)) {
                let d = (screen - anchor).length() / half_min.max(1.0);
                let inside = 1.0
                    - smoothstep01(
                        ((d - present.mask_radius) / present.mask_feather.max(1e-4))
                            .clamp(0.0, 1.0),
                    );
                mask = if present.mask_invert { 1.0 - inside } else { inside };
            }
        }

        let alpha =
            (present.opacity * mask * (1.0 + boost).min(ARC_ALPHA_BOOST_MAX)).clamp(0.0, 1.0);

        out.push(RenderPoint {
            pos: world.to_array(),
            size: quad,
            color: [rgb[0], rgb[1], rgb[2], alpha],
            glow: present.glow_strength.max(0.0),
        });
    }
}

/// One arc's (brightness boost, radial puff) contribution at `dir`.
fn arc_contribution(ev: &ArcEvent, dir: Vec3, now: f64) -> (f32, f32) {
    let fade = ev.fade(now);
    if fade <= 0.0 {
        return (0.0, 0.0);
    }

    let normal = ev
        .center
        .cross(ev.tangent)
        .try_normalize()
        .unwrap_or_else(|| any_orthogonal(ev.center));
    let planar = dir.dot(normal).abs();
    let lateral = 1.0 - smoothstep01(((planar - ev.thickness) / ev.feather).clamp(0.0, 1.0));
    if lateral <= 0.0 {
        return (0.0, 0.0);
    }

    // Angular distance behind the moving leading edge, around the great
    // circle spanned by (center, tangent).
    let u = dir.dot(ev.center);
    let v = dir.dot(ev.tangent);
    let ang = v.atan2(u);
    let edge = ev.age(now) * ev.angular_speed;
    let behind = (edge - ang).rem_euclid(TAU);
    if behind > ev.angular_span {
        return (0.0, 0.0);
    }

    let along = (PI * behind / ev.angular_span).sin();
    let c = fade * lateral * along;
    (c * ev.brightness, c * ev.altitude)
}

/// Spherical linear interpolation along the shorter great-circle arc.
/// Extrapolates for t outside \[0, 1\].
pub fn slerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let dot = a.dot(b).clamp(-1.0, 1.0);
    let theta = dot.acos();
    if theta < 1e-4 {
        return a;
    }
    if PI - theta < 1e-4 {
        // antipodal endpoints have no unique arc; rotate around any
        // orthogonal axis instead
        return rotate_about_axis(a, any_orthogonal(a), theta * t);
    }
    let sin_theta = theta.sin();
    (a * ((1.0 - t) * theta).sin() + b * (t * theta).sin()) / sin_theta
}

/// Rodrigues' rotation of `v` about a unit `axis`.
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    v * c + axis.cross(v) * s + axis * (axis.dot(v) * (1.0 - c))
}

/// Any unit vector orthogonal to `v`.
pub(crate) fn any_orthogonal(v: Vec3) -> Vec3 {
    let pick = if v.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    v.cross(pick).try_normalize().unwrap_or(Vec3::Z)
}

#[inline]
pub(crate) fn smoothstep01(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn axis_from_angles(pitch: f32, yaw: f32) -> Vec3 {
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    Vec3::new(cy * cp, sp, sy * cp)
}

fn ripple_center(cfg: &Config, time: f32) -> Vec3 {
    let polar = (time * cfg.ripple_speed * 0.37).sin() * 0.9;
    let azimuth = time * cfg.ripple_speed * 0.61;
    let (sp, cp) = polar.sin_cos();
    let (sa, ca) = azimuth.sin_cos();
    Vec3::new(ca * cp, sp, sa * cp)
}

fn linear_of(hex: &str) -> [f32; 3] {
    color::parse_hex(hex).unwrap_or(color::Rgb::WHITE).to_linear()
}

#[inline]
fn mix3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
