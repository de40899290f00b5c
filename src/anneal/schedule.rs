//! Geometric temperature schedule.

use thiserror::Error;

/// Temperature floor below which the search is considered converged.
pub const CONVERGENCE_EPSILON: f64 = 1e-10;

/// Configuration errors for the annealing driver.
///
/// All variants belong to the invalid-configuration class: they are
/// detectable before (or, for [`ScheduleStalled`](AnnealError::ScheduleStalled),
/// instead of) running the search, and never occur mid-run over valid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnnealError {
    /// The initial temperature was zero, negative, or non-finite.
    #[error("initial temperature must be finite and positive, got {0}")]
    InvalidInitialTemperature(f64),

    /// The decay rate was outside the open interval (0, 1).
    ///
    /// `alpha >= 1` would never decay below the convergence threshold and
    /// is rejected rather than allowed to loop unboundedly.
    #[error("decay rate alpha must lie in (0, 1), got {0}")]
    InvalidAlpha(f64),

    /// The driver exhausted its step cap without the temperature crossing
    /// the convergence threshold.
    ///
    /// Unreachable for a validated schedule; kept as a defensive bound so a
    /// misconfigured schedule surfaces as an error instead of a hang.
    #[error("temperature failed to cross the convergence threshold within {steps} steps")]
    ScheduleStalled {
        /// The step cap that was exhausted.
        steps: u64,
    },
}

/// Geometric cooling schedule: `T(t) = T0 * alpha^t`.
///
/// A pure function of the step index, parameterized per run. Constructing
/// one schedule per run (rather than reading shared mutable parameters)
/// guarantees successive runs cannot inherit each other's configuration.
///
/// # Examples
///
/// ```
/// use anneal_tsp::anneal::Schedule;
///
/// let schedule = Schedule::new(1e4, 0.95);
/// assert_eq!(schedule.temperature(0), 1e4);
/// assert!(schedule.temperature(100) < schedule.temperature(99));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Initial temperature `T0`. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Decay rate in (0, 1). Higher = slower cooling.
    ///
    /// Typical range: 0.95–0.99.
    pub alpha: f64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            initial_temperature: 1e4,
            alpha: 0.95,
        }
    }
}

impl Schedule {
    /// Creates a schedule with the given initial temperature and decay rate.
    ///
    /// Parameters are checked by [`validate`](Schedule::validate), not here,
    /// so configs can be assembled freely before use.
    pub fn new(initial_temperature: f64, alpha: f64) -> Self {
        Self {
            initial_temperature,
            alpha,
        }
    }

    /// Temperature at step `t`: `T0 * alpha^t`.
    ///
    /// Monotonically non-increasing in `t` for any valid configuration,
    /// approaching zero as `t` grows.
    pub fn temperature(&self, step: u64) -> f64 {
        self.initial_temperature * self.alpha.powf(step as f64)
    }

    /// Step cap guaranteeing the temperature has crossed
    /// [`CONVERGENCE_EPSILON`] for a validated schedule.
    ///
    /// The analytic crossing point is `ln(eps / T0) / ln(alpha)`; a small
    /// slack absorbs floating-point rounding in [`temperature`](Schedule::temperature).
    pub fn horizon(&self) -> u64 {
        if self.initial_temperature < CONVERGENCE_EPSILON {
            return 0;
        }
        let crossing =
            (CONVERGENCE_EPSILON / self.initial_temperature).ln() / self.alpha.ln();
        crossing.ceil() as u64 + 16
    }

    /// Validates the schedule parameters.
    pub fn validate(&self) -> Result<(), AnnealError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(AnnealError::InvalidInitialTemperature(
                self.initial_temperature,
            ));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(AnnealError::InvalidAlpha(self.alpha));
        }
        Ok(())
    }
}
