//! Annealing execution loop.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::AnnealConfig;
use super::schedule::{AnnealError, Schedule, CONVERGENCE_EPSILON};
use super::types::AnnealProblem;

/// Result of an annealing run.
///
/// `solution` is the last *accepted* state at convergence, not the best
/// state visited during the run: the driver tracks no incumbent optimum.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealResult<S> {
    /// The state held when the search halted.
    pub solution: S,

    /// Fitness of the final state.
    pub value: f64,

    /// Number of steps executed (neighbor samples) before halting.
    pub steps: u64,

    /// Temperature at the step the search halted.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: u64,

    /// Number of strictly improving moves.
    pub improving_moves: u64,
}

/// Executes the annealing algorithm.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs annealing from `initial` under `config`.
    ///
    /// Seeds a dedicated generator from `config.seed` (or randomly when
    /// unset) and delegates to [`run_with_rng`](AnnealRunner::run_with_rng).
    pub fn run<P: AnnealProblem>(
        initial: P,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<P>, AnnealError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(initial, &config.schedule, &mut rng)
    }

    /// Runs annealing with a caller-supplied generator.
    ///
    /// At each step `t` the driver queries the schedule; once the
    /// temperature drops below [`CONVERGENCE_EPSILON`] it halts and
    /// returns the current state. Otherwise it samples one successor
    /// uniformly at random and applies the Metropolis criterion: strict
    /// improvements are always accepted, worsening moves with probability
    /// `exp(delta / T)`.
    ///
    /// An empty successor set halts the search gracefully. The loop is
    /// bounded by [`Schedule::horizon`]; exhausting the bound without
    /// converging reports [`AnnealError::ScheduleStalled`].
    pub fn run_with_rng<P, R>(
        initial: P,
        schedule: &Schedule,
        rng: &mut R,
    ) -> Result<AnnealResult<P>, AnnealError>
    where
        P: AnnealProblem,
        R: Rng,
    {
        schedule.validate()?;

        let max_steps = schedule.horizon();
        let mut current = initial;
        let mut current_value = current.value();
        let mut accepted_moves = 0u64;
        let mut improving_moves = 0u64;

        for step in 0..=max_steps {
            let temperature = schedule.temperature(step);
            if temperature < CONVERGENCE_EPSILON {
                return Ok(AnnealResult {
                    solution: current,
                    value: current_value,
                    steps: step,
                    final_temperature: temperature,
                    accepted_moves,
                    improving_moves,
                });
            }

            let mut neighbors = current.successors();
            if neighbors.is_empty() {
                return Ok(AnnealResult {
                    solution: current,
                    value: current_value,
                    steps: step,
                    final_temperature: temperature,
                    accepted_moves,
                    improving_moves,
                });
            }

            let candidate = neighbors.swap_remove(rng.random_range(0..neighbors.len()));
            let candidate_value = candidate.value();
            let delta = candidate_value - current_value;

            // Metropolis acceptance criterion: delta <= 0 here puts the
            // probability in (0, 1].
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                (delta / temperature).exp() > rng.random_range(0.0..1.0)
            };

            if accept {
                current = candidate;
                current_value = candidate_value;
                accepted_moves += 1;
            }
        }

        Err(AnnealError::ScheduleStalled { steps: max_steps })
    }
}
