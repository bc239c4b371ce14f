//! Firefly population: oscillators, their neighbor graph and the tick driver.

pub mod metrics;
pub mod neighbor_graph;
pub mod oscillator;
pub mod population;

use thiserror::Error;

/// Errors returned when building or running a population.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopulationError {
    /// A construction parameter is out of its valid domain.
    #[error("invalid configuration: {param} {reason}")]
    InvalidConfiguration {
        param: &'static str,
        reason: String,
    },
    /// `LastWindow(window)` needs `window + 1` samples but the run is shorter.
    #[error("window of {window} (+1 samples) does not fit in a horizon of {horizon} ticks")]
    WindowExceedsHorizon { window: usize, horizon: usize },
}

impl PopulationError {
    pub fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            param,
            reason: reason.into(),
        }
    }
}
