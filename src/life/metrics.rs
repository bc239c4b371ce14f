use super::PopulationError;

pub type Tick = u64;

pub const DEFAULT_WINDOW: usize = 50;

/// Which pre-step on-count samples `Population::run` keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionMode {
    /// Every tick of the run.
    All,
    /// The final `w + 1` samples.
    LastWindow(usize),
}

impl CollectionMode {
    pub fn last_window() -> Self {
        Self::LastWindow(DEFAULT_WINDOW)
    }

    /// Number of samples a run of `horizon` ticks yields.
    pub fn sample_count(&self, horizon: usize) -> Result<usize, PopulationError> {
        match *self {
            Self::All => Ok(horizon),
            Self::LastWindow(window) => match window.checked_add(1) {
                Some(len) if len <= horizon => Ok(len),
                _ => Err(PopulationError::WindowExceedsHorizon { window, horizon }),
            },
        }
    }
}

/// On-count samples in recording order.
///
/// `start_tick` is the population tick of the first sample; `ticks()` yields
/// 0-based indices for plotting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnCountSeries {
    pub start_tick: Tick,
    pub counts: Vec<usize>,
}

impl OnCountSeries {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn ticks(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.counts.len()
    }

    pub fn absolute_ticks(&self) -> impl Iterator<Item = Tick> + '_ {
        (0..self.counts.len() as Tick).map(move |i| self.start_tick + i)
    }

    /// `(tick, count)` pairs, the plotter contract.
    pub fn points(&self) -> Vec<(usize, usize)> {
        self.counts.iter().copied().enumerate().collect()
    }

    pub fn min(&self) -> Option<usize> {
        self.counts.iter().copied().min()
    }

    pub fn max(&self) -> Option<usize> {
        self.counts.iter().copied().max()
    }

    pub fn amplitude(&self) -> Option<f64> {
        amplitude(&self.counts)
    }

    /// The trailing `len` samples as their own series.
    pub fn tail(&self, len: usize) -> OnCountSeries {
        let skip = self.counts.len().saturating_sub(len);
        OnCountSeries {
            start_tick: self.start_tick + skip as Tick,
            counts: self.counts[skip..].to_vec(),
        }
    }
}

/// `(max - min) / 2`, the steady-state synchronization amplitude.
pub fn amplitude(samples: &[usize]) -> Option<f64> {
    let max = samples.iter().copied().max()?;
    let min = samples.iter().copied().min()?;
    Some((max - min) as f64 / 2.0)
}
