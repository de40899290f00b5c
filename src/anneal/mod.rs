//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The driver is a stochastic hill-climber: at each step it samples a
//! single neighbor uniformly from the current state's successor set and
//! applies the Metropolis criterion against the current temperature. It
//! halts when the geometric schedule decays below the convergence
//! threshold, returning the last accepted state.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 4
//!   (local search and optimization)

mod config;
mod runner;
mod schedule;
mod types;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use schedule::{AnnealError, Schedule, CONVERGENCE_EPSILON};
pub use types::AnnealProblem;
