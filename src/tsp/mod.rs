//! Traveling salesman problem state.
//!
//! A [`Tour`] is an ordered, cyclic visiting sequence over a fixed set of
//! [`City`] values: the edge from the last city back to the first is
//! implicit and always included in the cost. Tours implement
//! [`AnnealProblem`](crate::anneal::AnnealProblem) with the adjacent-swap
//! neighborhood and negated closed-cycle Euclidean length as fitness.
//!
//! City data comes from the caller as an ordered (label, coordinates)
//! sequence; the solved tour exposes the same shape back for rendering.

mod city;
mod tour;

pub use city::City;
pub use tour::{Tour, TourError};
