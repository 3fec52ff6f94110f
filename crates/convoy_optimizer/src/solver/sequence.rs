use fxhash::FxHashSet;

use crate::problem::{booking::Booking, distance::DistanceEstimator};

/// An ordered visiting sequence over a cluster's locations, with the summed
/// leg distance. A bounded-time approximation, not a shortest tour.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedRoute {
    pub stops: Vec<String>,
    pub total_distance_km: f64,
}

impl SequencedRoute {
    pub fn empty() -> Self {
        SequencedRoute {
            stops: Vec::new(),
            total_distance_km: 0.0,
        }
    }
}

/// Nearest-neighbor sequencing over the unique pickup and delivery
/// locations of the given bookings, starting at the first booking's pickup.
/// Ties keep the earlier candidate, where candidates are ordered by first
/// appearance in the booking list.
pub fn sequence_route(bookings: &[Booking], estimator: &dyn DistanceEstimator) -> SequencedRoute {
    let Some(first) = bookings.first() else {
        return SequencedRoute::empty();
    };

    let mut candidates: Vec<&str> = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for booking in bookings {
        for location in [booking.pickup_location(), booking.delivery_location()] {
            if seen.insert(location) {
                candidates.push(location);
            }
        }
    }

    let start = first.pickup_location();
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(start);

    let mut stops = vec![start.to_owned()];
    let mut total_distance_km = 0.0;
    let mut current = start;

    while visited.len() < candidates.len() {
        let mut nearest: Option<(&str, f64)> = None;
        for &candidate in &candidates {
            if visited.contains(candidate) {
                continue;
            }
            let distance = estimator.distance_km(current, candidate);
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((candidate, distance));
            }
        }

        let Some((next, distance)) = nearest else {
            break;
        };

        total_distance_km += distance;
        stops.push(next.to_owned());
        visited.insert(next);
        current = next;
    }

    SequencedRoute {
        stops,
        total_distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::distance::PseudoDistance;
    use crate::test_utils;

    #[test]
    fn test_empty_cluster_yields_empty_route() {
        let route = sequence_route(&[], &PseudoDistance);
        assert!(route.stops.is_empty());
        assert_eq!(route.total_distance_km, 0.0);
    }

    #[test]
    fn test_starts_at_first_pickup_and_visits_every_location() {
        let bookings = vec![
            test_utils::create_booking("BK-001", "Connaught Place", "Khan Market", 100.0, 10.0),
            test_utils::create_booking("BK-002", "Saket", "Hauz Khas", 100.0, 10.0),
        ];

        let route = sequence_route(&bookings, &PseudoDistance);

        assert_eq!(route.stops[0], "Connaught Place");
        assert_eq!(route.stops.len(), 4);
        for location in ["Khan Market", "Saket", "Hauz Khas"] {
            assert!(route.stops.iter().any(|stop| stop == location));
        }
        assert!(route.total_distance_km > 0.0);
    }

    #[test]
    fn test_duplicate_locations_are_visited_once() {
        let bookings = vec![
            test_utils::create_booking("BK-001", "Connaught Place", "Khan Market", 100.0, 10.0),
            test_utils::create_booking("BK-002", "Khan Market", "Connaught Place", 100.0, 10.0),
        ];

        let route = sequence_route(&bookings, &PseudoDistance);

        assert_eq!(route.stops.len(), 2);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let bookings = vec![
            test_utils::create_booking("BK-001", "Connaught Place", "Khan Market", 100.0, 10.0),
            test_utils::create_booking("BK-002", "Saket", "Hauz Khas", 100.0, 10.0),
            test_utils::create_booking("BK-003", "Lajpat Nagar", "Karol Bagh", 100.0, 10.0),
        ];

        let first = sequence_route(&bookings, &PseudoDistance);
        let second = sequence_route(&bookings, &PseudoDistance);

        assert_eq!(first, second);
    }
}
