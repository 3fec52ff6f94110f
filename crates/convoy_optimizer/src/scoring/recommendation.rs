use serde::Serialize;
use tracing::debug;

use crate::problem::{booking::BookingRequest, distance::DistanceEstimator, vehicle::Vehicle};
use crate::scoring::suitability::{SuitabilityScore, score_vehicle};

/// Vehicles scoring at or below this never surface as recommendations.
const MIN_MATCH_SCORE: f64 = 0.3;
const MAX_RECOMMENDATIONS: usize = 5;

const RATE_PER_KM: f64 = 15.0;
const RATE_PER_KG: f64 = 2.0;
const SERVICE_FEE_RATE: f64 = 0.1;
const MINUTES_PER_KM: f64 = 2.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRecommendation {
    pub vehicle: Vehicle,
    pub match_score: f64,
    pub reason: String,
    pub estimated_cost: f64,
    pub estimated_minutes: i64,
}

/// Ranks the given vehicles for a prospective delivery: every vehicle is
/// scored, weak matches are discarded, and at most the top five survive,
/// best first.
pub fn recommend_vehicles(
    vehicles: &[Vehicle],
    request: &BookingRequest,
    estimator: &dyn DistanceEstimator,
) -> Vec<VehicleRecommendation> {
    let trip_km = estimator.distance_km(&request.pickup_location, &request.delivery_location);

    let mut recommendations: Vec<VehicleRecommendation> = vehicles
        .iter()
        .map(|vehicle| {
            let SuitabilityScore { score, reason } = score_vehicle(
                vehicle,
                request.load_weight_kg,
                Some(&request.pickup_location),
                estimator,
            );

            VehicleRecommendation {
                vehicle: vehicle.clone(),
                match_score: score,
                reason,
                estimated_cost: estimate_cost(trip_km, request.load_weight_kg),
                estimated_minutes: (trip_km * MINUTES_PER_KM) as i64,
            }
        })
        .filter(|recommendation| recommendation.match_score > MIN_MATCH_SCORE)
        .collect();

    recommendations.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    recommendations.truncate(MAX_RECOMMENDATIONS);

    debug!(
        candidates = vehicles.len(),
        recommended = recommendations.len(),
        "ranked vehicles for booking request"
    );

    recommendations
}

/// Base rate per km plus a per-kg handling charge, topped with a service fee.
pub fn estimate_cost(distance_km: f64, load_weight_kg: f64) -> f64 {
    let base_cost = distance_km * RATE_PER_KM + load_weight_kg * RATE_PER_KG;
    base_cost * (1.0 + SERVICE_FEE_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::distance::PseudoDistance;
    use crate::test_utils;

    fn light_request() -> BookingRequest {
        BookingRequest {
            pickup_location: "Connaught Place".to_owned(),
            delivery_location: "Khan Market".to_owned(),
            load_weight_kg: 400.0,
            scheduled_at: None,
        }
    }

    #[test]
    fn test_weak_matches_are_discarded() {
        // Too small for the load: hard-rejected, scores 0
        let undersized = test_utils::create_vehicle("VH-001", "Mini Van", 100.0);
        let capable = test_utils::create_vehicle("VH-002", "Cargo Van", 1500.0);

        let recommendations =
            recommend_vehicles(&[undersized, capable], &light_request(), &PseudoDistance);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].vehicle.vehicle_id(), "VH-002");
    }

    #[test]
    fn test_sorted_descending_and_capped_at_five() {
        let mut vehicles = Vec::new();
        for i in 0..8 {
            let mut builder =
                test_utils::vehicle_builder(format!("VH-{i:03}"), "Cargo Van", 1500.0);
            // Spread energy levels so scores differ
            builder.set_energy_level(30.0 + 10.0 * i as f64);
            vehicles.push(builder.build());
        }

        let recommendations = recommend_vehicles(&vehicles, &light_request(), &PseudoDistance);

        assert_eq!(recommendations.len(), 5);
        for pair in recommendations.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_cost_estimate_includes_service_fee() {
        let cost = estimate_cost(10.0, 100.0);
        // (10 * 15 + 100 * 2) * 1.1
        assert!((cost - 385.0).abs() < 1e-9);
    }
}
