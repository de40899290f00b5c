//! Closed-cycle tours and the adjacent-swap neighborhood.

use std::collections::HashSet;

use thiserror::Error;

use super::city::City;
use crate::anneal::AnnealProblem;

/// Data-validation errors raised at tour construction.
///
/// Malformed instances are rejected here, never discovered mid-search:
/// once a `Tour` exists, every search operation over it is total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// Fewer than two cities were supplied.
    #[error("a tour needs at least two cities, got {0}")]
    TooFewCities(usize),

    /// Two cities share the same name.
    #[error("duplicate city name: {0}")]
    DuplicateCity(String),

    /// A city has a NaN or infinite coordinate.
    #[error("non-finite coordinates for city: {0}")]
    NonFiniteCoordinate(String),
}

/// An ordered, cyclic visiting sequence over a fixed set of cities.
///
/// The sequence is interpreted as a closed cycle: the edge from the last
/// city back to the first is always part of the tour. Construction copies
/// its input, so two tours never alias each other's storage, and every
/// neighbor produced by [`successors`](AnnealProblem::successors) is an
/// independently owned tour.
///
/// # Examples
///
/// ```
/// use anneal_tsp::tsp::{City, Tour};
///
/// let square = [
///     City::new("a", 0.0, 0.0),
///     City::new("b", 0.0, 1.0),
///     City::new("c", 1.0, 1.0),
///     City::new("d", 1.0, 0.0),
/// ];
/// let tour = Tour::new(&square)?;
/// assert!((tour.length() - 4.0).abs() < 1e-12);
/// # Ok::<(), anneal_tsp::tsp::TourError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<City>,
}

impl Tour {
    /// Builds a tour visiting `cities` in the given order.
    ///
    /// Rejects instances with fewer than two cities, duplicate city names,
    /// or non-finite coordinates.
    pub fn new(cities: &[City]) -> Result<Self, TourError> {
        if cities.len() < 2 {
            return Err(TourError::TooFewCities(cities.len()));
        }
        let mut seen = HashSet::with_capacity(cities.len());
        for city in cities {
            if !city.x().is_finite() || !city.y().is_finite() {
                return Err(TourError::NonFiniteCoordinate(city.name().to_string()));
            }
            if !seen.insert(city.name()) {
                return Err(TourError::DuplicateCity(city.name().to_string()));
            }
        }
        Ok(Self {
            cities: cities.to_vec(),
        })
    }

    /// The cities in visiting order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// City labels in visiting order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(City::name)
    }

    /// City coordinates in visiting order.
    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cities.iter().map(City::position)
    }

    /// Total closed-cycle length: the sum of distances between consecutive
    /// cities plus the closing edge from the last city back to the first.
    ///
    /// Invariant under cyclic rotation of the sequence and under full
    /// reversal of traversal direction.
    pub fn length(&self) -> f64 {
        let mut dist: f64 = self
            .cities
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum();
        dist += self.cities[self.cities.len() - 1].distance_to(&self.cities[0]);
        dist
    }

    /// A copy of this tour with positions `i` and `j` exchanged.
    fn swapped(&self, i: usize, j: usize) -> Tour {
        let mut cities = self.cities.clone();
        cities.swap(i, j);
        Tour { cities }
    }
}

impl AnnealProblem for Tour {
    /// Exactly N neighbors for an N-city tour: one per adjacent
    /// transposition (i, i+1), plus the wrap-around swap of the first and
    /// last positions. The receiver is never mutated.
    fn successors(&self) -> Vec<Tour> {
        let n = self.cities.len();
        let mut neighbors = Vec::with_capacity(n);
        for i in 0..n - 1 {
            neighbors.push(self.swapped(i, i + 1));
        }
        neighbors.push(self.swapped(0, n - 1));
        neighbors
    }

    /// Negated tour length, so that shorter tours score higher.
    fn value(&self) -> f64 {
        -self.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<City> {
        vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 0.0, 1.0),
            City::new("c", 1.0, 1.0),
            City::new("d", 1.0, 0.0),
        ]
    }

    #[test]
    fn test_unit_square_length() {
        let tour = Tour::new(&unit_square()).unwrap();
        assert!((tour.length() - 4.0).abs() < 1e-12);
        assert!((tour.value() + 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_adjacent_swap_changes_length() {
        // Swapping the first two corners crosses the square's diagonals:
        // 2 + 2 * sqrt(2).
        let tour = Tour::new(&unit_square()).unwrap();
        let swapped = tour.swapped(0, 1);
        let expected = 2.0 + 2.0 * 2.0_f64.sqrt();
        assert!((swapped.length() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_successor_count_equals_city_count() {
        let tour = Tour::new(&unit_square()).unwrap();
        assert_eq!(tour.successors().len(), 4);

        let pair = [City::new("a", 0.0, 0.0), City::new("b", 1.0, 0.0)];
        let tour = Tour::new(&pair).unwrap();
        assert_eq!(tour.successors().len(), 2);
    }

    #[test]
    fn test_successor_set_for_square() {
        let tour = Tour::new(&unit_square()).unwrap();
        let mut orders: Vec<String> = tour
            .successors()
            .iter()
            .map(|t| t.names().collect::<Vec<_>>().join(""))
            .collect();
        orders.sort();

        let mut expected = vec!["bacd", "acbd", "abdc", "dbca"];
        expected.sort();
        assert_eq!(orders, expected);
    }

    #[test]
    fn test_successors_leave_receiver_untouched() {
        let tour = Tour::new(&unit_square()).unwrap();
        let before: Vec<String> = tour.names().map(str::to_string).collect();
        let _ = tour.successors();
        let after: Vec<String> = tour.names().map(str::to_string).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_successors_preserve_city_set() {
        let tour = Tour::new(&unit_square()).unwrap();
        let mut expected: Vec<&str> = tour.names().collect();
        expected.sort_unstable();

        for neighbor in tour.successors() {
            let mut names: Vec<&str> = neighbor.names().collect();
            names.sort_unstable();
            assert_eq!(names, expected, "a neighbor lost or duplicated a city");
        }
    }

    #[test]
    fn test_length_invariant_under_rotation() {
        let cities = unit_square();
        let tour = Tour::new(&cities).unwrap();

        for k in 1..cities.len() {
            let mut rotated = cities.clone();
            rotated.rotate_left(k);
            let rotated = Tour::new(&rotated).unwrap();
            assert!(
                (rotated.length() - tour.length()).abs() < 1e-9,
                "rotation by {k} changed the cycle length"
            );
        }
    }

    #[test]
    fn test_length_invariant_under_reversal() {
        let mut cities = unit_square();
        let tour = Tour::new(&cities).unwrap();
        cities.reverse();
        let reversed = Tour::new(&cities).unwrap();
        assert!((reversed.length() - tour.length()).abs() < 1e-9);
    }

    #[test]
    fn test_construction_copies_input() {
        let mut cities = unit_square();
        let tour = Tour::new(&cities).unwrap();
        cities[0] = City::new("elsewhere", 99.0, 99.0);
        assert_eq!(tour.cities()[0].name(), "a");
    }

    #[test]
    fn test_rejects_too_few_cities() {
        assert_eq!(Tour::new(&[]), Err(TourError::TooFewCities(0)));

        let one = [City::new("a", 0.0, 0.0)];
        assert_eq!(Tour::new(&one), Err(TourError::TooFewCities(1)));
    }

    #[test]
    fn test_rejects_duplicate_city_names() {
        let cities = [
            City::new("a", 0.0, 0.0),
            City::new("b", 1.0, 0.0),
            City::new("a", 2.0, 0.0),
        ];
        assert_eq!(
            Tour::new(&cities),
            Err(TourError::DuplicateCity("a".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_finite_coordinates() {
        let nan = [City::new("a", f64::NAN, 0.0), City::new("b", 1.0, 0.0)];
        assert_eq!(
            Tour::new(&nan),
            Err(TourError::NonFiniteCoordinate("a".to_string()))
        );

        let inf = [City::new("a", 0.0, 0.0), City::new("b", f64::INFINITY, 0.0)];
        assert_eq!(
            Tour::new(&inf),
            Err(TourError::NonFiniteCoordinate("b".to_string()))
        );
    }

    #[test]
    fn test_projections_follow_visiting_order() {
        let tour = Tour::new(&unit_square()).unwrap();
        let names: Vec<&str> = tour.names().collect();
        assert_eq!(names, ["a", "b", "c", "d"]);

        let positions: Vec<(f64, f64)> = tour.positions().collect();
        assert_eq!(positions[1], (0.0, 1.0));
    }
}
