// Integration tests for the morph driver state machine.

use std::cell::RefCell;
use std::rc::Rc;

use wave_core::{Config, ConfigPatch, MorphDriver, MorphHooks, TransitionSpec};

fn fade_out_spec(duration_seconds: f32, ease: &str) -> TransitionSpec {
    TransitionSpec {
        to: ConfigPatch {
            opacity: Some(0.0),
            ..ConfigPatch::default()
        },
        duration_seconds,
        ease: ease.to_string(),
    }
}

fn opaque() -> Config {
    Config {
        opacity: 1.0,
        ..Config::default()
    }
}

#[test]
fn linear_fade_hits_midpoint_and_completes_once() {
    let mut driver = MorphDriver::new();
    let completions: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));
    let completions_cb = completions.clone();

    driver.play(
        fade_out_spec(1.0, "linear"),
        &opaque(),
        0.0,
        MorphHooks {
            on_complete: Some(Box::new(move |cfg| {
                completions_cb.borrow_mut().push(cfg.opacity);
            })),
            ..MorphHooks::default()
        },
    );

    let mid = driver.tick(0.5).expect("running");
    assert!((mid.opacity - 0.5).abs() < 1e-6);
    let status = driver.status();
    assert!(status.enabled);
    assert!((status.progress - 0.5).abs() < 1e-6);
    assert!(completions.borrow().is_empty(), "completed too early");

    let done = driver.tick(1.0).expect("completing tick");
    assert_eq!(done.opacity, 0.0);
    assert_eq!(completions.borrow().as_slice(), &[0.0]);
    assert!(!driver.is_running());

    // further ticks are inert
    assert!(driver.tick(1.5).is_none());
    assert_eq!(completions.borrow().len(), 1);
}

#[test]
fn start_fires_synchronously_before_the_first_update() {
    let mut driver = MorphDriver::new();
    let events: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let start_log = events.clone();
    let update_log = events.clone();

    driver.play(
        fade_out_spec(1.0, "linear"),
        &opaque(),
        0.0,
        MorphHooks {
            on_start: Some(Box::new(move |_| start_log.borrow_mut().push("start"))),
            on_update: Some(Box::new(move |_, _| update_log.borrow_mut().push("update"))),
            ..MorphHooks::default()
        },
    );
    assert_eq!(events.borrow().as_slice(), &["start"]);

    driver.tick(0.25);
    assert_eq!(events.borrow().as_slice(), &["start", "update"]);
}

#[test]
fn cancel_is_idempotent_and_suppresses_completion() {
    let mut driver = MorphDriver::new();
    driver.cancel(); // idle cancel is a no-op

    let completed = Rc::new(RefCell::new(false));
    let completed_cb = completed.clone();
    driver.play(
        fade_out_spec(1.0, "linear"),
        &opaque(),
        0.0,
        MorphHooks {
            on_complete: Some(Box::new(move |_| *completed_cb.borrow_mut() = true)),
            ..MorphHooks::default()
        },
    );
    driver.tick(0.5);
    driver.cancel();
    driver.cancel();

    assert!(!driver.is_running());
    assert!(driver.tick(2.0).is_none());
    assert!(!*completed.borrow(), "cancelled morph must not complete");
}

#[test]
fn replay_while_running_cancels_the_first_silently() {
    let mut driver = MorphDriver::new();
    let first_completed = Rc::new(RefCell::new(false));
    let first_cb = first_completed.clone();
    driver.play(
        fade_out_spec(1.0, "linear"),
        &opaque(),
        0.0,
        MorphHooks {
            on_complete: Some(Box::new(move |_| *first_cb.borrow_mut() = true)),
            ..MorphHooks::default()
        },
    );
    let blended = driver.tick(0.5).expect("running");

    // restart from the blended value, the way the engine does
    let second_completed = Rc::new(RefCell::new(false));
    let second_cb = second_completed.clone();
    driver.play(
        TransitionSpec {
            to: ConfigPatch {
                radius: Some(2.0),
                ..ConfigPatch::default()
            },
            duration_seconds: 1.0,
            ease: "linear".to_string(),
        },
        &blended,
        0.5,
        MorphHooks {
            on_complete: Some(Box::new(move |_| *second_cb.borrow_mut() = true)),
            ..MorphHooks::default()
        },
    );

    // the fresh morph starts from the interpolated opacity, not the snapshot
    let restarted = driver.tick(0.5).expect("running");
    assert!((restarted.opacity - 0.5).abs() < 1e-6);

    driver.tick(10.0);
    assert!(!*first_completed.borrow(), "first morph completed after replace");
    assert!(*second_completed.borrow());
}

#[test]
fn zero_duration_completes_on_the_first_tick() {
    let mut driver = MorphDriver::new();
    let completed = Rc::new(RefCell::new(false));
    let completed_cb = completed.clone();
    driver.play(
        fade_out_spec(0.0, "linear"),
        &opaque(),
        0.0,
        MorphHooks {
            on_complete: Some(Box::new(move |_| *completed_cb.borrow_mut() = true)),
            ..MorphHooks::default()
        },
    );
    let done = driver.tick(0.0).expect("completing tick");
    assert_eq!(done.opacity, 0.0);
    assert!(*completed.borrow());
    assert!(!driver.is_running());
}

#[test]
fn negative_duration_is_treated_as_zero() {
    let mut driver = MorphDriver::new();
    driver.play(fade_out_spec(-3.0, "linear"), &opaque(), 0.0, MorphHooks::default());
    let done = driver.tick(0.0).expect("completing tick");
    assert_eq!(done.opacity, 0.0);
    assert!(!driver.is_running());
}

#[test]
fn unknown_ease_behaves_as_identity() {
    let mut driver = MorphDriver::new();
    driver.play(
        fade_out_spec(1.0, "no-such-curve"),
        &opaque(),
        0.0,
        MorphHooks::default(),
    );
    driver.tick(0.3);
    assert!((driver.status().progress - 0.3).abs() < 1e-6);
}

#[test]
fn overshooting_ease_reports_progress_beyond_one() {
    let mut driver = MorphDriver::new();
    driver.play(fade_out_spec(1.0, "back.out"), &opaque(), 0.0, MorphHooks::default());
    driver.tick(0.6);
    let progress = driver.status().progress;
    assert!(
        progress > 1.0,
        "back.out should overshoot mid-flight, got {progress}"
    );
}

#[test]
fn eased_progress_is_published_through_updates() {
    let mut driver = MorphDriver::new();
    let seen: Rc<RefCell<Vec<f32>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    driver.play(
        fade_out_spec(1.0, "power2.in"),
        &opaque(),
        0.0,
        MorphHooks {
            on_update: Some(Box::new(move |p, _| seen_cb.borrow_mut().push(p))),
            ..MorphHooks::default()
        },
    );
    driver.tick(0.5);
    assert_eq!(seen.borrow().len(), 1);
    let p = seen.borrow()[0];
    assert!((p - 0.125).abs() < 1e-6, "power2.in(0.5) = {p}, expected 0.125");
}
