//! Transient great-circle arc events.
//!
//! While armed, arcs spawn stochastically at the configured rate, up to a
//! global cap. Every knob is snapshotted from the configuration at spawn
//! time, so an in-flight arc ignores later config changes. An arc expires
//! once its age exceeds its duration; its visual weight ramps in over the
//! first fifth of the lifetime and out over the last fifth.

use crate::config::Config;
use crate::constants::{ARC_FADE_FRACTION, ARC_MIN_DURATION, MAX_ARCS};
use crate::displace::{any_orthogonal, smoothstep01};
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct ArcEvent {
    /// Unit direction at the arc's great-circle origin.
    pub center: Vec3,
    /// Unit travel direction, orthogonal to `center`.
    pub tangent: Vec3,
    pub spawn_time: f64,
    pub duration: f32,
    pub angular_speed: f32,
    pub angular_span: f32,
    pub thickness: f32,
    pub feather: f32,
    pub brightness: f32,
    pub altitude: f32,
}

impl ArcEvent {
    pub fn age(&self, now: f64) -> f32 {
        (now - self.spawn_time) as f32
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.age(now) >= self.duration
    }

    /// Temporal fade weight in \[0, 1\].
    pub fn fade(&self, now: f64) -> f32 {
        let life = (self.age(now) / self.duration).clamp(0.0, 1.0);
        let ramp_in = (life / ARC_FADE_FRACTION).clamp(0.0, 1.0);
        let ramp_out = ((1.0 - life) / ARC_FADE_FRACTION).clamp(0.0, 1.0);
        smoothstep01(ramp_in) * smoothstep01(ramp_out)
    }
}

pub struct ArcField {
    rng: StdRng,
    live: SmallVec<[ArcEvent; MAX_ARCS]>,
}

impl ArcField {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            live: SmallVec::new(),
        }
    }

    pub fn live(&self) -> &[ArcEvent] {
        &self.live
    }

    /// Retire expired arcs, then roll one Bernoulli spawn trial for this
    /// tick with probability `spawn_rate * dt`, respecting the cap.
    pub fn update(&mut self, config: &Config, now: f64, dt: f32) {
        let mut i = 0;
        while i < self.live.len() {
            if self.live[i].is_expired(now) {
                self.live.swap_remove(i);
                continue;
            }
            i += 1;
        }

        if !config.arcs_enabled || self.live.len() >= MAX_ARCS {
            return;
        }
        let prob = (config.arc_spawn_rate * dt.max(0.0)).clamp(0.0, 1.0);
        if self.rng.gen::<f32>() < prob {
            self.spawn(config, now);
        }
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    fn spawn(&mut self, config: &Config, now: f64) {
        let center = self.random_unit();
        // random tangent in the plane orthogonal to center
        let probe = self.random_unit();
        let tangent = (probe - center * probe.dot(center))
            .try_normalize()
            .unwrap_or_else(|| any_orthogonal(center));

        self.live.push(ArcEvent {
            center,
            tangent,
            spawn_time: now,
            duration: config.arc_duration.max(ARC_MIN_DURATION),
            angular_speed: config.arc_speed,
            angular_span: config.arc_span.max(1e-3),
            thickness: config.arc_thickness.max(0.0),
            feather: config.arc_feather.max(1e-4),
            brightness: config.arc_brightness.max(0.0),
            altitude: config.arc_altitude,
        });
        log::trace!("arc spawned, {} live", self.live.len());
    }

    fn random_unit(&mut self) -> Vec3 {
        let y = self.rng.gen::<f32>() * 2.0 - 1.0;
        let azimuth = self.rng.gen::<f32>() * TAU;
        let ring = (1.0 - y * y).max(0.0).sqrt();
        Vec3::new(azimuth.cos() * ring, y, azimuth.sin() * ring)
    }
}
