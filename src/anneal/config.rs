//! Annealing run configuration.

use super::schedule::{AnnealError, Schedule};

/// Configuration for an annealing run.
///
/// Bundles the temperature schedule with the random seed. One config is
/// constructed per run and passed by reference; nothing is read from
/// ambient state.
///
/// # Examples
///
/// ```
/// use anneal_tsp::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(1e6)
///     .with_alpha(0.95)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Temperature schedule for the run.
    pub schedule: Schedule,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            schedule: Schedule::default(),
            seed: None,
        }
    }
}

impl AnnealConfig {
    /// Sets the schedule.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets the schedule's initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.schedule.initial_temperature = t;
        self
    }

    /// Sets the schedule's decay rate.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.schedule.alpha = alpha;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AnnealError> {
        self.schedule.validate()
    }
}
