//! The morph/transition driver.
//!
//! A small explicit state machine: Idle (no active morph) or Running (one
//! active morph, advanced once per frame tick). Starting a new morph while
//! one is running cancels the old one silently; cancellation is synchronous
//! and suppresses every further callback for that morph.

use crate::config::{Config, ConfigPatch};
use crate::ease::{self, EaseFn};
use crate::interp;

/// A host's request to morph toward a partial target.
#[derive(Clone, Debug)]
pub struct TransitionSpec {
    pub to: ConfigPatch,
    pub duration_seconds: f32,
    pub ease: String,
}

/// Lifecycle callbacks for one morph. `on_start` fires synchronously inside
/// `play`, before the first tick; `on_update` fires once per tick with the
/// eased progress and the blended configuration; `on_complete` fires exactly
/// once, on the tick that reaches full raw progress, and never after a
/// cancel.
#[derive(Default)]
pub struct MorphHooks {
    pub on_start: Option<Box<dyn FnOnce(&Config)>>,
    pub on_update: Option<Box<dyn FnMut(f32, &Config)>>,
    pub on_complete: Option<Box<dyn FnOnce(&Config)>>,
}

/// Observable driver state for host UI reflection.
#[derive(Clone, Debug, Default)]
pub struct MorphStatus {
    pub enabled: bool,
    pub progress: f32,
    pub to: Option<ConfigPatch>,
}

struct ActiveMorph {
    from: Config,
    to: ConfigPatch,
    /// Target resolved at play time, used as the second displacement lane.
    target: Config,
    start_seconds: f64,
    duration_ms: f64,
    ease: EaseFn,
    /// Eased progress as of the last tick; may overshoot \[0, 1\].
    progress: f32,
    on_update: Option<Box<dyn FnMut(f32, &Config)>>,
    on_complete: Option<Box<dyn FnOnce(&Config)>>,
}

#[derive(Default)]
pub struct MorphDriver {
    active: Option<ActiveMorph>,
}

impl MorphDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a morph from a snapshot of `from`. An already-running morph is
    /// cancelled first and its completion callback never fires.
    pub fn play(&mut self, spec: TransitionSpec, from: &Config, now_seconds: f64, hooks: MorphHooks) {
        if self.active.take().is_some() {
            log::trace!("morph restarted mid-flight");
        }
        let from = from.clone();
        let target = from.apply(&spec.to);
        if let Some(on_start) = hooks.on_start {
            on_start(&from);
        }
        self.active = Some(ActiveMorph {
            target,
            to: spec.to,
            start_seconds: now_seconds,
            duration_ms: (spec.duration_seconds.max(0.0) as f64) * 1000.0,
            ease: ease::resolve(&spec.ease),
            progress: 0.0,
            on_update: hooks.on_update,
            on_complete: hooks.on_complete,
            from,
        });
    }

    /// Advance the active morph to `now_seconds` and return the blended
    /// configuration, or `None` when idle. Raw progress is clamped to
    /// \[0, 1\] before easing; the eased value is published unclamped. On
    /// the completing tick the fully-resolved target is returned, the
    /// completion callback fires and the driver goes back to idle.
    pub fn tick(&mut self, now_seconds: f64) -> Option<Config> {
        let active = self.active.as_mut()?;
        let raw = if active.duration_ms <= 0.0 {
            1.0
        } else {
            let elapsed_ms = (now_seconds - active.start_seconds) * 1000.0;
            (elapsed_ms / active.duration_ms).clamp(0.0, 1.0) as f32
        };
        let eased = (active.ease)(raw);
        active.progress = eased;

        if raw >= 1.0 {
            let mut done = self.active.take()?;
            let resolved = interp::interpolate(&done.from, &done.to, 1.0);
            if let Some(on_update) = done.on_update.as_mut() {
                on_update(eased, &resolved);
            }
            if let Some(on_complete) = done.on_complete.take() {
                on_complete(&resolved);
            }
            log::trace!("morph complete");
            Some(resolved)
        } else {
            let blended = interp::interpolate(&active.from, &active.to, eased);
            if let Some(on_update) = active.on_update.as_mut() {
                on_update(eased, &blended);
            }
            Some(blended)
        }
    }

    /// Halt the active morph without firing its completion callback.
    /// Idempotent: cancelling an idle driver is a no-op.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            log::trace!("morph cancelled");
        }
    }

    /// The two displacement lane endpoints and the eased progress, while
    /// running.
    pub fn lanes(&self) -> Option<(&Config, &Config, f32)> {
        self.active
            .as_ref()
            .map(|a| (&a.from, &a.target, a.progress))
    }

    pub fn status(&self) -> MorphStatus {
        match &self.active {
            Some(a) => MorphStatus {
                enabled: true,
                progress: a.progress,
                to: Some(a.to.clone()),
            },
            None => MorphStatus::default(),
        }
    }
}
