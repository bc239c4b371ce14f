use std::fs;
use std::path::PathBuf;

use fireflies::config::{AppConfig, SimulationConfig, SweepConfig};
use fireflies::life::population::Population;

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "fireflies_config_restore_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

fn assert_close(a: f64, b: f64, label: &str) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-12, "{label} mismatch: {a} vs {b}");
}

#[test]
fn custom_config_survives_a_round_trip() {
    let path = unique_path("custom.toml");
    let custom = AppConfig {
        simulation: SimulationConfig {
            count: 80,
            radius: 0.35,
            horizon: 1200,
            cycle_length: 40,
            window: 30,
            seed: 77,
        },
        sweep: SweepConfig {
            radius_start: 0.1,
            radius_stop: 0.9,
            radius_step: 0.2,
            replicas: 8,
        },
    };
    fs::write(&path, toml::to_string_pretty(&custom).unwrap()).unwrap();

    let restored = AppConfig::load_or_default(&path.to_string_lossy());
    assert_eq!(restored.simulation.count, 80);
    assert_close(restored.simulation.radius, 0.35, "simulation.radius");
    assert_eq!(restored.simulation.horizon, 1200);
    assert_eq!(restored.simulation.cycle_length, 40);
    assert_eq!(restored.simulation.window, 30);
    assert_eq!(restored.simulation.seed, 77);
    assert_close(restored.sweep.radius_start, 0.1, "sweep.radius_start");
    assert_close(restored.sweep.radius_stop, 0.9, "sweep.radius_stop");
    assert_close(restored.sweep.radius_step, 0.2, "sweep.radius_step");
    assert_eq!(restored.sweep.replicas, 8);

    let _ = fs::remove_file(&path);
}

#[test]
fn restored_config_builds_the_same_population() {
    let path = unique_path("population.toml");
    fs::write(&path, "[simulation]\ncount = 12\nradius = 0.4\nseed = 5\n").unwrap();
    let cfg = AppConfig::load_or_default(&path.to_string_lossy());

    let a = Population::new(cfg.simulation.population_params()).unwrap();
    let b = Population::new(cfg.simulation.population_params()).unwrap();
    assert_eq!(a.len(), 12);
    assert_eq!(a.oscillators(), b.oscillators());

    let _ = fs::remove_file(&path);
}

#[test]
fn zero_count_in_config_is_rejected_at_construction() {
    let cfg = AppConfig {
        simulation: SimulationConfig {
            count: 0,
            ..SimulationConfig::default()
        },
        ..AppConfig::default()
    };
    let err = Population::new(cfg.simulation.population_params())
        .err()
        .expect("count 0 must fail");
    assert!(err.to_string().contains("count"), "message: {err}");
}
