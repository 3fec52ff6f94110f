use crate::problem::{booking::Booking, vehicle::Vehicle};
use crate::solver::assignment::VehicleAssignment;

/// First-fit-decreasing load packing: bookings sorted by descending weight,
/// vehicles by descending effective capacity, each vehicle greedily filled
/// from the heaviest remaining booking down. Deterministic given the input
/// order (both sorts are stable), O(n·m). Vehicles left empty are dropped
/// from the result.
pub fn pack_loads(bookings: &[Booking], vehicles: &[Vehicle]) -> Vec<VehicleAssignment> {
    let mut remaining: Vec<Booking> = bookings.to_vec();
    remaining.sort_by(|a, b| b.load_weight_kg().total_cmp(&a.load_weight_kg()));

    let mut pool: Vec<Vehicle> = vehicles.to_vec();
    pool.sort_by(|a, b| {
        b.effective_capacity_kg()
            .total_cmp(&a.effective_capacity_kg())
    });

    let mut assignments = Vec::new();

    for vehicle in pool {
        if remaining.is_empty() {
            break;
        }

        let mut spare_kg = vehicle.effective_capacity_kg();
        let mut assigned = Vec::new();
        let mut unassigned = Vec::with_capacity(remaining.len());

        for booking in remaining {
            if booking.load_weight_kg() <= spare_kg {
                spare_kg -= booking.load_weight_kg();
                assigned.push(booking);
            } else {
                unassigned.push(booking);
            }
        }
        remaining = unassigned;

        if !assigned.is_empty() {
            assignments.push(VehicleAssignment::packed(vehicle, assigned));
        }
    }

    assignments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_largest_booking_goes_to_largest_vehicle() {
        let vehicles = vec![
            test_utils::create_vehicle("V1", "Cargo Van", 1500.0),
            test_utils::create_vehicle("V2", "Heavy Truck", 3000.0),
        ];
        let bookings = vec![
            test_utils::create_booking("B1", "Connaught Place", "Khan Market", 1200.0, 10.0),
            test_utils::create_booking("B2", "Saket", "Hauz Khas", 2800.0, 15.0),
        ];

        let assignments = pack_loads(&bookings, &vehicles);

        assert_eq!(assignments.len(), 2);

        assert_eq!(assignments[0].vehicle().vehicle_id(), "V2");
        assert_eq!(assignments[0].assigned_bookings()[0].booking_id(), "B2");
        assert!((assignments[0].utilization() - 2800.0 / 3000.0 * 100.0).abs() < 1e-9);

        assert_eq!(assignments[1].vehicle().vehicle_id(), "V1");
        assert_eq!(assignments[1].assigned_bookings()[0].booking_id(), "B1");
        assert_eq!(assignments[1].utilization(), 80.0);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let vehicles = vec![
            test_utils::create_vehicle("V1", "Cargo Van", 900.0),
            test_utils::create_vehicle("V2", "Cargo Van", 1100.0),
        ];
        let bookings: Vec<_> = (0..8)
            .map(|i| {
                test_utils::create_booking(
                    format!("BK-{i:03}"),
                    "Connaught Place",
                    "Khan Market",
                    150.0 + 100.0 * i as f64,
                    10.0,
                )
            })
            .collect();

        let assignments = pack_loads(&bookings, &vehicles);

        for assignment in &assignments {
            assert!(assignment.total_load_kg() <= assignment.vehicle().effective_capacity_kg());
        }
    }

    #[test]
    fn test_each_booking_assigned_at_most_once() {
        let vehicles = vec![
            test_utils::create_vehicle("V1", "Cargo Van", 2000.0),
            test_utils::create_vehicle("V2", "Cargo Van", 2000.0),
        ];
        let bookings: Vec<_> = (0..6)
            .map(|i| {
                test_utils::create_booking(
                    format!("BK-{i:03}"),
                    "Connaught Place",
                    "Khan Market",
                    600.0,
                    10.0,
                )
            })
            .collect();

        let assignments = pack_loads(&bookings, &vehicles);

        let mut seen = std::collections::HashSet::new();
        for assignment in &assignments {
            for booking in assignment.assigned_bookings() {
                assert!(seen.insert(booking.booking_id().to_owned()));
            }
        }
    }

    #[test]
    fn test_oversized_booking_is_never_assigned() {
        let vehicles = vec![test_utils::create_vehicle("V1", "Cargo Van", 1000.0)];
        let bookings = vec![
            test_utils::create_booking("BK-001", "Connaught Place", "Khan Market", 5000.0, 10.0),
            test_utils::create_booking("BK-002", "Saket", "Hauz Khas", 400.0, 10.0),
        ];

        let assignments = pack_loads(&bookings, &vehicles);

        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].assigned_bookings().len(), 1);
        assert_eq!(assignments[0].assigned_bookings()[0].booking_id(), "BK-002");
    }

    #[test]
    fn test_empty_inputs_yield_no_assignments() {
        let vehicles = vec![test_utils::create_vehicle("V1", "Cargo Van", 1000.0)];
        assert!(pack_loads(&[], &vehicles).is_empty());

        let bookings = vec![test_utils::create_booking(
            "BK-001",
            "Connaught Place",
            "Khan Market",
            100.0,
            10.0,
        )];
        assert!(pack_loads(&bookings, &[]).is_empty());
    }

    #[test]
    fn test_deterministic_given_input_order() {
        let vehicles = vec![
            test_utils::create_vehicle("V1", "Cargo Van", 1500.0),
            test_utils::create_vehicle("V2", "Cargo Van", 1500.0),
        ];
        let bookings: Vec<_> = (0..5)
            .map(|i| {
                test_utils::create_booking(
                    format!("BK-{i:03}"),
                    "Connaught Place",
                    "Khan Market",
                    500.0,
                    10.0,
                )
            })
            .collect();

        assert_eq!(
            pack_loads(&bookings, &vehicles),
            pack_loads(&bookings, &vehicles)
        );
    }
}
