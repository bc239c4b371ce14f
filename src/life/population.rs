use super::PopulationError;
use super::metrics::{CollectionMode, OnCountSeries, Tick};
use super::neighbor_graph::NeighborGraph;
use super::oscillator::{DEFAULT_CYCLE_LENGTH, Oscillator};
use crate::core::geometry::Position;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct PopulationParams {
    pub count: usize,
    pub radius: f64,
    pub horizon: usize,
    pub cycle_length: u32,
    pub seed: u64,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            count: 150,
            radius: 0.45,
            horizon: 5000,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            seed: 0,
        }
    }
}

impl PopulationParams {
    fn validate(&self) -> Result<(), PopulationError> {
        if self.count == 0 {
            return Err(PopulationError::invalid("count", "must be at least 1"));
        }
        if self.cycle_length < 2 {
            return Err(PopulationError::invalid(
                "cycle_length",
                format!("must be at least 2, got {}", self.cycle_length),
            ));
        }
        Ok(())
    }
}

pub struct Population {
    oscillators: Vec<Oscillator>,
    radius: f64,
    cycle_length: u32,
    horizon: usize,
    seed: u64,
    tick: Tick,
    total_boosts: u64,
    snapshot: Vec<bool>,
}

impl Population {
    /// Scatter `count` fireflies uniformly in the unit square with uniform
    /// random phases, all drawn from a generator seeded with `p.seed`.
    pub fn new(p: PopulationParams) -> Result<Self, PopulationError> {
        p.validate()?;
        let mut rng = StdRng::seed_from_u64(p.seed);
        let positions: Vec<Position> = (0..p.count)
            .map(|_| Position::sample(&mut rng))
            .collect();
        let phases: Vec<u32> = (0..p.count)
            .map(|_| rng.random_range(0..p.cycle_length))
            .collect();
        Ok(Self::assemble(positions, phases, &p))
    }

    /// Explicit placement. `p.count` is ignored in favor of `positions.len()`.
    pub fn from_parts(
        positions: Vec<Position>,
        phases: Vec<u32>,
        p: PopulationParams,
    ) -> Result<Self, PopulationError> {
        let p = PopulationParams {
            count: positions.len(),
            ..p
        };
        p.validate()?;
        if phases.len() != positions.len() {
            return Err(PopulationError::invalid(
                "phases",
                format!(
                    "has {} entries for {} positions",
                    phases.len(),
                    positions.len()
                ),
            ));
        }
        if let Some(&bad) = phases.iter().find(|&&ph| ph >= p.cycle_length) {
            return Err(PopulationError::invalid(
                "phases",
                format!("entry {bad} is outside [0, {})", p.cycle_length),
            ));
        }
        Ok(Self::assemble(positions, phases, &p))
    }

    fn assemble(
        positions: Vec<Position>,
        phases: Vec<u32>,
        p: &PopulationParams,
    ) -> Self {
        let graph = NeighborGraph::build(&positions, p.radius);
        debug!(
            "Built neighbor graph: n={} radius={} edges={} mean_degree={:.2} isolated={}",
            graph.len(),
            p.radius,
            graph.edge_count(),
            graph.mean_degree(),
            graph.isolated_count()
        );
        if graph.is_fully_isolated() {
            warn!(
                "radius={} leaves all {} oscillators without neighbors; no coupling will occur",
                p.radius,
                graph.len()
            );
        }

        let oscillators: Vec<Oscillator> = positions
            .into_iter()
            .zip(phases)
            .zip(graph.into_rows())
            .map(|((pos, phase), neighbors)| {
                Oscillator::new(pos, phase, p.cycle_length, neighbors)
            })
            .collect();
        let n = oscillators.len();

        Self {
            oscillators,
            radius: p.radius,
            cycle_length: p.cycle_length,
            horizon: p.horizon,
            seed: p.seed,
            tick: 0,
            total_boosts: 0,
            snapshot: Vec::with_capacity(n),
        }
    }

    /// Read-only view for renderers.
    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn total_boosts(&self) -> u64 {
        self.total_boosts
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.horizon as Tick
    }

    pub fn on_count(&self) -> usize {
        self.oscillators.iter().filter(|o| o.is_on()).count()
    }

    /// One tick: every oscillator advances against the on states committed by
    /// the previous tick, then all states are committed together.
    pub fn step(&mut self) {
        self.snapshot.clear();
        self.snapshot.extend(self.oscillators.iter().map(Oscillator::is_on));

        for osc in self.oscillators.iter_mut() {
            if osc.advance(&self.snapshot) {
                self.total_boosts += 1;
            }
        }
        for osc in self.oscillators.iter_mut() {
            osc.refresh();
        }
        self.tick += 1;
    }

    /// Step `horizon` ticks, sampling the on-count before each step.
    pub fn run(
        &mut self,
        horizon: usize,
        mode: CollectionMode,
    ) -> Result<OnCountSeries, PopulationError> {
        let keep = mode.sample_count(horizon)?;
        let first_kept = horizon - keep;
        let mut series = OnCountSeries {
            start_tick: self.tick + first_kept as Tick,
            counts: Vec::with_capacity(keep),
        };
        for n in 0..horizon {
            if n >= first_kept {
                series.counts.push(self.on_count());
            }
            self.step();
        }
        debug!(
            "Run finished: tick={} samples={} boosts={}",
            self.tick,
            series.len(),
            self.total_boosts
        );
        Ok(series)
    }

    /// Run the ticks left until the configured horizon.
    pub fn run_to_horizon(
        &mut self,
        mode: CollectionMode,
    ) -> Result<OnCountSeries, PopulationError> {
        let remaining = (self.horizon as Tick).saturating_sub(self.tick) as usize;
        self.run(remaining, mode)
    }
}
