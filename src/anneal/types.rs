//! Core trait for the annealing driver.

/// Defines an annealing problem state.
///
/// The user implements neighbor enumeration and fitness scoring. The
/// driver handles temperature management, neighbor sampling, and the
/// acceptance criterion.
///
/// Implementors are *states*, not problem definitions: every successor is
/// itself a complete, independently owned state, and the driver replaces
/// its current state wholesale on acceptance. No state is ever mutated in
/// place.
///
/// # Maximization
///
/// The driver maximizes [`value`](AnnealProblem::value). For cost
/// minimization, return the negated cost.
///
/// # Examples
///
/// ```
/// use anneal_tsp::anneal::AnnealProblem;
///
/// /// Walks an integer line toward the origin.
/// #[derive(Clone, PartialEq)]
/// struct Point(i64);
///
/// impl AnnealProblem for Point {
///     fn successors(&self) -> Vec<Point> {
///         vec![Point(self.0 - 1), Point(self.0 + 1)]
///     }
///
///     fn value(&self) -> f64 {
///         -((self.0 * self.0) as f64)
///     }
/// }
/// ```
pub trait AnnealProblem: Sized {
    /// Enumerates all direct neighbors of this state.
    ///
    /// Must be deterministic in the *set* of states produced; the order is
    /// unspecified. Returns an empty vector only when no valid
    /// transformation exists, which terminates the search gracefully.
    fn successors(&self) -> Vec<Self>;

    /// Computes the fitness of this state. Higher is better.
    ///
    /// Must be a pure function of the state: no side effects, no hidden
    /// mutable inputs. The driver caches the current state's value between
    /// steps on the strength of this contract.
    fn value(&self) -> f64;
}
