//! The frame engine.
//!
//! Owns the committed configuration, the cached point layout, the
//! simulation clock, the morph driver and the arc field, and turns them
//! into one `Vec<RenderPoint>` per frame. Hosts call [`WaveEngine::advance`]
//! once per rendered frame and draw the returned points.

use crate::arc::ArcField;
use crate::clock::SimClock;
use crate::config::Config;
use crate::displace::{self, Lanes, RenderPoint};
use crate::layout::PointLayout;
use crate::morph::{MorphDriver, MorphHooks, MorphStatus, TransitionSpec};
use crate::noise::ValueNoise;
use crate::view::Viewport;

pub struct WaveEngine {
    config: Config,
    /// The configuration the displacement model saw last frame: the morph
    /// blend while one is running, the committed config otherwise.
    current: Config,
    layout: PointLayout,
    layout_key: (u32, u32),
    noise: ValueNoise,
    clock: SimClock,
    sim_time: f64,
    wall_seconds: f64,
    driver: MorphDriver,
    arcs: ArcField,
    points: Vec<RenderPoint>,
}

impl WaveEngine {
    pub fn new(config: Config) -> Self {
        let layout = PointLayout::generate(config.point_count, 1.0, config.layout_seed);
        let layout_key = (config.point_count, config.layout_seed);
        let noise = ValueNoise::new(config.layout_seed);
        let arcs = ArcField::new(arc_seed(config.layout_seed));
        Self {
            current: config.clone(),
            config,
            layout,
            layout_key,
            noise,
            clock: SimClock::new(),
            sim_time: 0.0,
            wall_seconds: 0.0,
            driver: MorphDriver::new(),
            arcs,
            points: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Host-side edits to the committed configuration. Takes effect on the
    /// next frame; while a morph is running the blend still wins for
    /// interpolable fields.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The configuration the displacement model consumed last frame.
    pub fn current(&self) -> &Config {
        &self.current
    }

    pub fn points(&self) -> &[RenderPoint] {
        &self.points
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn status(&self) -> MorphStatus {
        self.driver.status()
    }

    pub fn is_morphing(&self) -> bool {
        self.driver.is_running()
    }

    /// Start a morph from the *current blended* configuration, so a
    /// restart mid-flight continues from where the sphere visually is, not
    /// from the older snapshot.
    pub fn play(&mut self, spec: TransitionSpec, hooks: MorphHooks) {
        let from = self.current.clone();
        self.driver.play(spec, &from, self.wall_seconds, hooks);
    }

    pub fn cancel(&mut self) {
        self.driver.cancel();
    }

    /// Advance one frame by `dt` wall seconds and rebuild the point buffer.
    pub fn advance(&mut self, dt: f32, viewport: &Viewport) -> &[RenderPoint] {
        let dt = dt.max(0.0);
        self.wall_seconds += dt as f64;

        // The morph runs on wall time; the freeze/manual mode governs
        // simulation (displacement) time only.
        let prev_sim = self.sim_time;
        self.sim_time = self.clock.advance(
            dt as f64,
            self.config.freeze,
            self.config.step_count,
            self.config.step_size,
        );
        let sim_dt = (self.sim_time - prev_sim) as f32;

        let was_running = self.driver.is_running();
        match self.driver.tick(self.wall_seconds) {
            Some(blended) => {
                if was_running && !self.driver.is_running() {
                    self.commit(blended.clone());
                }
                self.current = blended;
            }
            None => {
                self.current = self.config.clone();
            }
        }

        self.refresh_layout();
        self.arcs.update(&self.current, self.sim_time, sim_dt);

        let lanes = match self.driver.lanes() {
            Some((from, to, progress)) => Lanes::Morph { from, to, progress },
            None => Lanes::Single(&self.current),
        };
        displace::displace_points(
            &self.layout,
            &self.current,
            lanes,
            self.arcs.live(),
            &self.noise,
            self.sim_time,
            viewport,
            &mut self.points,
        );
        &self.points
    }

    /// Adopt a completed morph's resolved target. Layout inputs and the
    /// debug clock fields stay host-owned across a morph.
    fn commit(&mut self, mut resolved: Config) {
        resolved.point_count = self.config.point_count;
        resolved.layout_seed = self.config.layout_seed;
        resolved.freeze = self.config.freeze;
        resolved.step_count = self.config.step_count;
        resolved.step_size = self.config.step_size;
        self.config = resolved;
    }

    fn refresh_layout(&mut self) {
        let key = (self.config.point_count, self.config.layout_seed);
        if key != self.layout_key {
            self.layout = PointLayout::generate(key.0, 1.0, key.1);
            self.layout_key = key;
            self.noise = ValueNoise::new(key.1);
            self.arcs = ArcField::new(arc_seed(key.1));
        }
    }
}

fn arc_seed(layout_seed: u32) -> u64 {
    (layout_seed as u64) ^ 0x9E37_79B9_7F4A_7C15
}
