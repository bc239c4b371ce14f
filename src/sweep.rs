//! Radius sweep: how strongly does the population synchronize as the
//! neighborhood grows?
//!
//! For every radius on the grid, fresh populations are run to the horizon and
//! the trailing window of the on-count is reduced to an amplitude
//! `(max - min) / 2`. Replicas are independent and run in parallel.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::life::PopulationError;
use crate::life::metrics::{CollectionMode, DEFAULT_WINDOW};
use crate::life::oscillator::DEFAULT_CYCLE_LENGTH;
use crate::life::population::{Population, PopulationParams};

/// Upper bound on radii per sweep.
pub const MAX_GRID_POINTS: usize = 100_000;

#[derive(Clone, Debug, PartialEq)]
pub struct SweepParams {
    pub radius_start: f64,
    /// Exclusive.
    pub radius_stop: f64,
    pub radius_step: f64,
    pub replicas: usize,
    pub window: usize,
    pub count: usize,
    pub horizon: usize,
    pub cycle_length: u32,
    pub seed: u64,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            radius_start: 0.0,
            radius_stop: 1.4,
            radius_step: 0.05,
            replicas: 50,
            window: DEFAULT_WINDOW,
            count: 150,
            horizon: 5000,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            seed: 0,
        }
    }
}

impl SweepParams {
    /// `start + k * step` for every `k` that stays below `stop`.
    pub fn radius_grid(&self) -> Result<Vec<f64>, PopulationError> {
        if !(self.radius_step.is_finite() && self.radius_step > 0.0) {
            return Err(PopulationError::invalid(
                "radius_step",
                format!("must be positive, got {}", self.radius_step),
            ));
        }
        if !self.radius_start.is_finite() || !self.radius_stop.is_finite() {
            return Err(PopulationError::invalid(
                "radius_start/radius_stop",
                "must be finite",
            ));
        }
        let span = self.radius_stop - self.radius_start;
        if span / self.radius_step > MAX_GRID_POINTS as f64 {
            return Err(PopulationError::invalid(
                "radius_step",
                format!(
                    "{} over [{}, {}) exceeds {MAX_GRID_POINTS} grid points",
                    self.radius_step, self.radius_start, self.radius_stop
                ),
            ));
        }
        // Guard against k * step landing a hair below stop.
        let limit = self.radius_stop - self.radius_step * 1e-9;
        let mut grid = Vec::new();
        for k in 0..=MAX_GRID_POINTS {
            let radius = self.radius_start + k as f64 * self.radius_step;
            if radius >= limit {
                break;
            }
            grid.push(radius);
        }
        Ok(grid)
    }

    fn population_params(&self, radius: f64, seed: u64) -> PopulationParams {
        PopulationParams {
            count: self.count,
            radius,
            horizon: self.horizon,
            cycle_length: self.cycle_length,
            seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SweepPoint {
    pub radius: f64,
    pub mean_amplitude: f64,
    pub amplitudes: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepReport {
    pub points: Vec<SweepPoint>,
}

impl SweepReport {
    /// Radius with the largest mean amplitude; the first one wins ties.
    pub fn best(&self) -> Option<&SweepPoint> {
        self.points.iter().fold(None, |best, p| match best {
            Some(b) if b.mean_amplitude >= p.mean_amplitude => Some(b),
            _ => Some(p),
        })
    }
}

/// Mixes the base seed with the grid and replica index (splitmix64 finalizer).
pub fn replica_seed(base: u64, radius_idx: usize, replica: usize) -> u64 {
    let mut z = base ^ (((radius_idx as u64) << 32) | replica as u64);
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Steady-state amplitude of one fresh population.
pub fn run_replica(params: &SweepParams, radius: f64, seed: u64) -> Result<f64, PopulationError> {
    let mut pop = Population::new(params.population_params(radius, seed))?;
    let series = pop.run_to_horizon(CollectionMode::LastWindow(params.window))?;
    Ok(series.amplitude().unwrap_or(0.0))
}

pub fn run_sweep(params: &SweepParams) -> Result<SweepReport, PopulationError> {
    if params.replicas == 0 {
        return Err(PopulationError::invalid("replicas", "must be at least 1"));
    }
    CollectionMode::LastWindow(params.window).sample_count(params.horizon)?;
    let grid = params.radius_grid()?;
    debug!(
        "Sweeping {} radii x {} replicas (count={} horizon={})",
        grid.len(),
        params.replicas,
        params.count,
        params.horizon
    );

    let mut points = Vec::with_capacity(grid.len());
    for (idx, &radius) in grid.iter().enumerate() {
        let amplitudes: Vec<f64> = (0..params.replicas)
            .into_par_iter()
            .map(|replica| run_replica(params, radius, replica_seed(params.seed, idx, replica)))
            .collect::<Result<_, _>>()?;
        let mean_amplitude = amplitudes.iter().sum::<f64>() / amplitudes.len() as f64;
        info!("radius={radius:.2} mean_amplitude={mean_amplitude:.3}");
        points.push(SweepPoint {
            radius,
            mean_amplitude,
            amplitudes,
        });
    }
    Ok(SweepReport { points })
}
