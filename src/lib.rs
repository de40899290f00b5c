//! Simulated annealing for the traveling salesman problem.
//!
//! Pairs a problem-agnostic annealing driver with a concrete TSP state:
//!
//! - **Annealing (`anneal`)**: Single-solution trajectory optimization using
//!   the Metropolis acceptance criterion over a geometric temperature
//!   schedule. The driver is generic over the [`anneal::AnnealProblem`]
//!   trait — any state that can enumerate its neighbors and score itself
//!   can be annealed.
//! - **TSP (`tsp`)**: Closed-cycle tours over labeled 2D cities, with the
//!   adjacent-swap neighborhood and Euclidean cost. [`tsp::Tour`] is the
//!   crate's reference `AnnealProblem` implementation.
//!
//! # Architecture
//!
//! The `anneal` module contains no TSP concepts; the `tsp` module contains
//! no search logic. Data loading and rendering are left to consumers — the
//! crate's boundary is an initial state in, a final state (ordered city
//! sequence plus cost) out.
//!
//! # Reproducibility
//!
//! All randomness flows through an explicit, seedable generator. A run
//! configured with the same seed over the same input produces an identical
//! trajectory and final state.

pub mod anneal;
pub mod tsp;
