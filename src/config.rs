use crate::life::metrics::DEFAULT_WINDOW;
use crate::life::oscillator::DEFAULT_CYCLE_LENGTH;
use crate::life::population::PopulationParams;
use crate::sweep::SweepParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "SimulationConfig::default_count")]
    pub count: usize,
    #[serde(default = "SimulationConfig::default_radius")]
    pub radius: f64,
    #[serde(default = "SimulationConfig::default_horizon")]
    pub horizon: usize,
    #[serde(default = "SimulationConfig::default_cycle_length")]
    pub cycle_length: u32,
    #[serde(default = "SimulationConfig::default_window")]
    pub window: usize,
    #[serde(default)]
    pub seed: u64,
}

impl SimulationConfig {
    fn default_count() -> usize {
        150
    }
    fn default_radius() -> f64 {
        0.45
    }
    fn default_horizon() -> usize {
        5000
    }
    fn default_cycle_length() -> u32 {
        DEFAULT_CYCLE_LENGTH
    }
    fn default_window() -> usize {
        DEFAULT_WINDOW
    }

    pub fn population_params(&self) -> PopulationParams {
        PopulationParams {
            count: self.count,
            radius: self.radius,
            horizon: self.horizon,
            cycle_length: self.cycle_length,
            seed: self.seed,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: Self::default_count(),
            radius: Self::default_radius(),
            horizon: Self::default_horizon(),
            cycle_length: Self::default_cycle_length(),
            window: Self::default_window(),
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepConfig {
    #[serde(default = "SweepConfig::default_radius_start")]
    pub radius_start: f64,
    #[serde(default = "SweepConfig::default_radius_stop")]
    pub radius_stop: f64,
    #[serde(default = "SweepConfig::default_radius_step")]
    pub radius_step: f64,
    #[serde(default = "SweepConfig::default_replicas")]
    pub replicas: usize,
}

impl SweepConfig {
    fn default_radius_start() -> f64 {
        0.0
    }
    fn default_radius_stop() -> f64 {
        1.4
    }
    fn default_radius_step() -> f64 {
        0.05
    }
    fn default_replicas() -> usize {
        50
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            radius_start: Self::default_radius_start(),
            radius_stop: Self::default_radius_stop(),
            radius_step: Self::default_radius_step(),
            replicas: Self::default_replicas(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

impl AppConfig {
    fn format_f64_compact(x: f64) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() { "0".to_string() } else { s }
    }

    /// The sweep reuses the population shape of `[simulation]`; only the radius varies.
    pub fn sweep_params(&self) -> SweepParams {
        SweepParams {
            radius_start: self.sweep.radius_start,
            radius_stop: self.sweep.radius_stop,
            radius_step: self.sweep.radius_step,
            replicas: self.sweep.replicas,
            window: self.simulation.window,
            count: self.simulation.count,
            horizon: self.simulation.horizon,
            cycle_length: self.simulation.cycle_length,
            seed: self.simulation.seed,
        }
    }

    /// Defaults rendered as TOML with every value commented out.
    fn commented_template(&self) -> Option<String> {
        let text = toml::to_string_pretty(self).ok()?;
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                commented.push('\n');
            } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                commented.push_str(line);
                commented.push('\n');
            } else {
                let mut out_line = line.to_string();
                if let Some((lhs, rhs)) = line.split_once('=') {
                    let rhs_trim = rhs.trim();
                    if rhs_trim.contains('.') {
                        if let Ok(val) = rhs_trim.parse::<f64>() {
                            let mut formatted = Self::format_f64_compact(val);
                            if !formatted.contains('.') {
                                formatted.push_str(".0");
                            }
                            out_line = format!("{} = {}", lhs.trim(), formatted);
                        }
                    }
                }
                commented.push_str("# ");
                commented.push_str(&out_line);
                commented.push('\n');
            }
        }
        Some(commented)
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match default_cfg.commented_template() {
            Some(commented) => {
                if let Err(err) = fs::write(path_obj, commented) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            None => warn!("Failed to serialize default config; continuing with defaults"),
        }
        default_cfg
    }
}
