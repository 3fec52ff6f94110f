use serde::Serialize;

use crate::solver::assignment::VehicleAssignment;

const FUEL_SAVINGS_RATE: f64 = 0.15;
const TIME_SAVINGS_RATE: f64 = 0.2;
const COST_PER_KM: f64 = 12.5;

/// Aggregate figures over one optimization run's assignments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationMetrics {
    pub total_distance_km: f64,
    pub fuel_savings: f64,
    pub time_savings_minutes: i64,
    pub cost_reduction: f64,
    pub average_utilization: f64,
    pub vehicles_used: usize,
    pub algorithm: &'static str,
}

pub fn compute_metrics(
    assignments: &[VehicleAssignment],
    algorithm: &'static str,
) -> OptimizationMetrics {
    let total_distance_km: f64 = assignments
        .iter()
        .map(VehicleAssignment::total_distance_km)
        .sum();

    let average_utilization = if assignments.is_empty() {
        0.0
    } else {
        assignments
            .iter()
            .map(VehicleAssignment::utilization)
            .sum::<f64>()
            / assignments.len() as f64
    };

    OptimizationMetrics {
        total_distance_km,
        fuel_savings: total_distance_km * FUEL_SAVINGS_RATE,
        time_savings_minutes: (total_distance_km * TIME_SAVINGS_RATE) as i64,
        cost_reduction: total_distance_km * COST_PER_KM,
        average_utilization,
        vehicles_used: assignments.len(),
        algorithm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_empty_assignments_zero_out() {
        let metrics = compute_metrics(&[], "FIRST_FIT_DECREASING");

        assert_eq!(metrics.total_distance_km, 0.0);
        assert_eq!(metrics.fuel_savings, 0.0);
        assert_eq!(metrics.time_savings_minutes, 0);
        assert_eq!(metrics.cost_reduction, 0.0);
        assert_eq!(metrics.average_utilization, 0.0);
        assert_eq!(metrics.vehicles_used, 0);
    }

    #[test]
    fn test_savings_track_total_distance() {
        let vehicle = test_utils::create_vehicle("VH-001", "Cargo Van", 1000.0);
        let bookings = vec![test_utils::create_booking(
            "BK-001",
            "Connaught Place",
            "Khan Market",
            500.0,
            100.0,
        )];
        let assignment = VehicleAssignment::packed(vehicle, bookings);

        let metrics = compute_metrics(std::slice::from_ref(&assignment), "FIRST_FIT_DECREASING");

        assert_eq!(metrics.total_distance_km, 100.0);
        assert_eq!(metrics.fuel_savings, 15.0);
        assert_eq!(metrics.time_savings_minutes, 20);
        assert_eq!(metrics.cost_reduction, 1250.0);
        assert_eq!(metrics.average_utilization, 50.0);
        assert_eq!(metrics.vehicles_used, 1);
    }
}
