// Integration tests for the frame engine, the arc field and the simulation
// clock working together.

use std::cell::RefCell;
use std::rc::Rc;

use wave_core::{
    ArcField, Config, ConfigPatch, MorphHooks, TransitionSpec, Viewport, WaveEngine,
};

fn viewport() -> Viewport {
    Viewport::new(640, 480)
}

fn arcy_config(spawn_rate: f32) -> Config {
    Config {
        arcs_enabled: true,
        arc_spawn_rate: spawn_rate,
        arc_duration: 1.0,
        ..Config::default()
    }
}

#[test]
fn arc_lives_through_its_duration_and_no_longer() {
    let mut field = ArcField::new(1);
    // spawn probability clamps to 1, so the first update always spawns
    field.update(&arcy_config(1000.0), 0.0, 0.1);
    assert_eq!(field.live().len(), 1, "expected a guaranteed spawn");

    let quiet = arcy_config(0.0);
    field.update(&quiet, 0.5, 0.1);
    assert_eq!(field.live().len(), 1, "arc gone at half its duration");

    field.update(&quiet, 1.01, 0.1);
    assert!(field.live().is_empty(), "arc survived past its duration");
}

#[test]
fn live_arcs_never_exceed_the_cap() {
    let mut field = ArcField::new(2);
    let config = Config {
        arc_duration: 100.0,
        ..arcy_config(1000.0)
    };
    for i in 0..32 {
        field.update(&config, i as f64 * 0.05, 0.05);
    }
    assert!(field.live().len() <= 8, "cap breached: {}", field.live().len());
    assert_eq!(field.live().len(), 8, "spawning should saturate the cap");
}

#[test]
fn arc_knobs_are_snapshotted_at_spawn() {
    let mut field = ArcField::new(3);
    let mut config = arcy_config(1000.0);
    config.arc_duration = 2.0;
    config.arc_brightness = 5.0;
    field.update(&config, 0.0, 1.0);

    // later config changes must not affect the in-flight arc
    config.arc_duration = 0.1;
    config.arc_brightness = 0.0;
    config.arc_spawn_rate = 0.0;
    field.update(&config, 0.5, 0.1);

    let arc = &field.live()[0];
    assert_eq!(arc.duration, 2.0);
    assert_eq!(arc.brightness, 5.0);
}

#[test]
fn arc_frames_are_orthonormal() {
    let mut field = ArcField::new(4);
    let config = Config {
        arc_duration: 100.0,
        ..arcy_config(1000.0)
    };
    for i in 0..8 {
        field.update(&config, i as f64 * 0.1, 0.1);
    }
    for arc in field.live() {
        assert!((arc.center.length() - 1.0).abs() < 1e-4);
        assert!((arc.tangent.length() - 1.0).abs() < 1e-4);
        assert!(arc.center.dot(arc.tangent).abs() < 1e-4);
    }
}

#[test]
fn disabled_arcs_do_not_spawn() {
    let mut field = ArcField::new(5);
    let config = Config {
        arcs_enabled: false,
        ..arcy_config(1000.0)
    };
    for i in 0..10 {
        field.update(&config, i as f64 * 0.1, 0.1);
    }
    assert!(field.live().is_empty());
}

#[test]
fn engine_emits_one_render_point_per_layout_point() {
    let config = Config {
        point_count: 321,
        ..Config::default()
    };
    let mut engine = WaveEngine::new(config);
    let points = engine.advance(1.0 / 60.0, &viewport());
    assert_eq!(points.len(), 321);
}

#[test]
fn frozen_simulation_only_moves_with_the_step_counter() {
    let mut config = Config::default();
    config.freeze = true;
    config.step_size = 0.25;
    let mut engine = WaveEngine::new(config);

    engine.advance(1.0, &viewport());
    engine.advance(1.0, &viewport());
    assert_eq!(engine.sim_time(), 0.0, "wall time leaked into frozen sim");

    engine.config_mut().step_count = 2;
    engine.advance(1.0, &viewport());
    assert!((engine.sim_time() - 0.5).abs() < 1e-9);
}

#[test]
fn morphs_run_on_wall_time_even_while_frozen() {
    let mut config = Config::default();
    config.freeze = true;
    config.opacity = 1.0;
    let mut engine = WaveEngine::new(config);

    engine.play(
        TransitionSpec {
            to: ConfigPatch {
                opacity: Some(0.0),
                ..ConfigPatch::default()
            },
            duration_seconds: 1.0,
            ease: "linear".to_string(),
        },
        MorphHooks::default(),
    );
    engine.advance(0.5, &viewport());
    assert_eq!(engine.sim_time(), 0.0);
    assert!((engine.status().progress - 0.5).abs() < 1e-6);
    assert!((engine.current().opacity - 0.5).abs() < 1e-6);
}

#[test]
fn completed_morph_commits_the_resolved_target() {
    let mut engine = WaveEngine::new(Config {
        opacity: 1.0,
        ..Config::default()
    });
    let completions = Rc::new(RefCell::new(0u32));
    let completions_cb = completions.clone();
    engine.play(
        TransitionSpec {
            to: ConfigPatch {
                opacity: Some(0.0),
                ..ConfigPatch::default()
            },
            duration_seconds: 1.0,
            ease: "linear".to_string(),
        },
        MorphHooks {
            on_complete: Some(Box::new(move |_| *completions_cb.borrow_mut() += 1)),
            ..MorphHooks::default()
        },
    );
    for _ in 0..30 {
        engine.advance(0.05, &viewport());
    }
    assert_eq!(*completions.borrow(), 1);
    assert!(!engine.is_morphing());
    assert_eq!(engine.config().opacity, 0.0);
}

#[test]
fn replaying_mid_flight_restarts_from_the_blended_state() {
    let mut engine = WaveEngine::new(Config {
        opacity: 1.0,
        ..Config::default()
    });
    let first_completed = Rc::new(RefCell::new(false));
    let first_cb = first_completed.clone();
    engine.play(
        TransitionSpec {
            to: ConfigPatch {
                opacity: Some(0.0),
                ..ConfigPatch::default()
            },
            duration_seconds: 1.0,
            ease: "linear".to_string(),
        },
        MorphHooks {
            on_complete: Some(Box::new(move |_| *first_cb.borrow_mut() = true)),
            ..MorphHooks::default()
        },
    );
    engine.advance(0.5, &viewport());
    assert!((engine.current().opacity - 0.5).abs() < 1e-6);

    // the second morph does not touch opacity, so it must hold the blended
    // 0.5 rather than rewinding to the original snapshot
    engine.play(
        TransitionSpec {
            to: ConfigPatch {
                radius: Some(2.0),
                ..ConfigPatch::default()
            },
            duration_seconds: 1.0,
            ease: "linear".to_string(),
        },
        MorphHooks::default(),
    );
    engine.advance(0.0, &viewport());
    assert!((engine.current().opacity - 0.5).abs() < 1e-6);

    for _ in 0..30 {
        engine.advance(0.05, &viewport());
    }
    assert!(!*first_completed.borrow(), "replaced morph must stay silent");
    assert!((engine.config().radius - 2.0).abs() < 1e-6);
    assert!((engine.config().opacity - 0.5).abs() < 1e-6);
}

#[test]
fn cancel_freezes_the_blend_without_completing() {
    let mut engine = WaveEngine::new(Config {
        opacity: 1.0,
        ..Config::default()
    });
    let completed = Rc::new(RefCell::new(false));
    let completed_cb = completed.clone();
    engine.play(
        TransitionSpec {
            to: ConfigPatch {
                opacity: Some(0.0),
                ..ConfigPatch::default()
            },
            duration_seconds: 1.0,
            ease: "linear".to_string(),
        },
        MorphHooks {
            on_complete: Some(Box::new(move |_| *completed_cb.borrow_mut() = true)),
            ..MorphHooks::default()
        },
    );
    engine.advance(0.5, &viewport());
    engine.cancel();
    engine.advance(1.0, &viewport());

    assert!(!*completed.borrow());
    assert!(!engine.is_morphing());
    // the committed config was never overwritten
    assert_eq!(engine.config().opacity, 1.0);
}

#[test]
fn degenerate_configs_never_produce_nan_points() {
    let config = Config {
        radius: 0.0,
        scale: 0.0,
        volume: 5.0,
        point_size: 0.0,
        size_randomness: 10.0,
        ripple_enabled: true,
        ripple_amount: 50.0,
        ripple_frequency: 0.0,
        mask_enabled: true,
        mask_radius: 0.0,
        mask_feather: 0.0,
        arc_spawn_rate: 1000.0,
        arc_thickness: 0.0,
        arc_feather: 0.0,
        arc_span: 0.0,
        point_color: "not-a-color".to_string(),
        point_count: 64,
        ..Config::default()
    };
    let mut engine = WaveEngine::new(config);
    for _ in 0..10 {
        for p in engine.advance(0.1, &viewport()) {
            assert!(
                p.pos.iter().all(|c| c.is_finite()),
                "non-finite position {:?}",
                p.pos
            );
            assert!(p.size.is_finite());
            assert!(p.color.iter().all(|c| c.is_finite()));
        }
    }
}

#[test]
fn layout_is_rebuilt_when_count_or_seed_changes() {
    let mut engine = WaveEngine::new(Config {
        point_count: 100,
        ..Config::default()
    });
    assert_eq!(engine.advance(0.016, &viewport()).len(), 100);
    engine.config_mut().point_count = 200;
    assert_eq!(engine.advance(0.016, &viewport()).len(), 200);
}
