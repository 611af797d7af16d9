//! Simulation time accounting.
//!
//! Time advances in one of two mutually exclusive modes: live (wall-clock
//! deltas accumulate every tick) or frozen/manual (time only moves when an
//! external step counter increments, by a fixed increment per step). Both
//! the last wall instant and the last counter value are refreshed on every
//! tick regardless of mode, so switching modes never introduces a jump.

use instant::Instant;

#[derive(Debug, Default)]
pub struct SimClock {
    time_seconds: f64,
    last_step_count: u32,
    last_instant: Option<Instant>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated simulation time in seconds.
    pub fn time(&self) -> f64 {
        self.time_seconds
    }

    /// Advance by an externally measured wall delta. Returns the new
    /// simulation time. A counter that moved backwards (host reset)
    /// contributes nothing rather than jumping.
    pub fn advance(&mut self, dt_seconds: f64, freeze: bool, step_count: u32, step_size: f32) -> f64 {
        let steps = step_count.saturating_sub(self.last_step_count);
        self.last_step_count = step_count;
        if freeze {
            self.time_seconds += steps as f64 * step_size.max(0.0) as f64;
        } else {
            self.time_seconds += dt_seconds.max(0.0);
        }
        self.time_seconds
    }

    /// Like [`SimClock::advance`] but measuring the wall delta internally,
    /// for hosts without their own frame clock.
    pub fn tick_live(&mut self, freeze: bool, step_count: u32, step_size: f32) -> f64 {
        let now = Instant::now();
        let dt = match self.last_instant {
            Some(prev) => (now - prev).as_secs_f64(),
            None => 0.0,
        };
        self.last_instant = Some(now);
        self.advance(dt, freeze, step_count, step_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_mode_accumulates_wall_deltas() {
        let mut clock = SimClock::new();
        clock.advance(0.016, false, 0, 0.1);
        clock.advance(0.016, false, 0, 0.1);
        assert!((clock.time() - 0.032).abs() < 1e-9);
    }

    #[test]
    fn frozen_mode_only_follows_the_counter() {
        let mut clock = SimClock::new();
        clock.advance(1.0, true, 0, 0.1);
        assert_eq!(clock.time(), 0.0, "wall time must not leak while frozen");
        clock.advance(1.0, true, 3, 0.1);
        assert!((clock.time() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn mode_switch_does_not_jump() {
        let mut clock = SimClock::new();
        // counter moves while live: tracked but not applied
        clock.advance(0.5, false, 5, 0.1);
        assert!((clock.time() - 0.5).abs() < 1e-9);
        // freeze with the same counter: no retroactive steps
        clock.advance(0.5, true, 5, 0.1);
        assert!((clock.time() - 0.5).abs() < 1e-9);
        // one new step applies exactly one increment
        clock.advance(0.5, true, 6, 0.1);
        assert!((clock.time() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn counter_reset_is_ignored() {
        let mut clock = SimClock::new();
        clock.advance(0.0, true, 10, 0.1);
        clock.advance(0.0, true, 0, 0.1);
        assert!((clock.time() - 1.0).abs() < 1e-9);
    }
}
