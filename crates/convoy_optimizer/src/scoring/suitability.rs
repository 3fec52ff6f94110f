use serde::Serialize;

use crate::problem::{distance::DistanceEstimator, vehicle::Vehicle};

pub const INSUFFICIENT_CAPACITY: &str = "Insufficient capacity";

/// Loads above this ratio of capacity stop earning headroom reward.
const COMFORTABLE_LOAD_RATIO: f64 = 0.8;
/// Loads above this are "heavy" and prefer trucks; at or below
/// `LIGHT_LOAD_KG` they prefer vans.
const HEAVY_LOAD_KG: f64 = 2000.0;
const LIGHT_LOAD_KG: f64 = 1000.0;
/// Pickup closer than this to the vehicle earns the proximity bonus.
const PROXIMITY_KM: f64 = 10.0;

/// Normalized suitability of one vehicle for one load, with a
/// human-readable explanation of how the score came together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitabilityScore {
    pub score: f64,
    pub reason: String,
}

impl SuitabilityScore {
    fn rejected(reason: &str) -> Self {
        SuitabilityScore {
            score: 0.0,
            reason: reason.to_owned(),
        }
    }
}

/// Scores a vehicle against a prospective load in [0, 1].
///
/// A vehicle that cannot carry the load at all is rejected outright with
/// score 0; everything else is additive: capacity headroom (up to 0.4),
/// type suitability (up to 0.25), energy level (up to 0.2), an electric
/// bonus (0.1) and a proximity bonus (0.05), capped at 1.0.
///
/// `pickup_location` is optional so the same scoring applies to a cluster
/// aggregate, where a pickup point may not exist; without one the proximity
/// bonus is simply never earned.
pub fn score_vehicle(
    vehicle: &Vehicle,
    load_kg: f64,
    pickup_location: Option<&str>,
    estimator: &dyn DistanceEstimator,
) -> SuitabilityScore {
    let capacity_kg = vehicle.effective_capacity_kg();

    if capacity_kg < load_kg {
        return SuitabilityScore::rejected(INSUFFICIENT_CAPACITY);
    }

    let mut score = 0.0;
    let mut reasons: Vec<&str> = Vec::new();

    // Capacity fit (40%)
    let load_ratio = if capacity_kg > 0.0 {
        load_kg / capacity_kg
    } else {
        0.0
    };
    if load_ratio <= COMFORTABLE_LOAD_RATIO {
        score += 0.4 * (1.0 - load_ratio);
        reasons.push("Optimal capacity utilization.");
    } else {
        score += 0.2;
        reasons.push("Near capacity limit.");
    }

    // Type suitability (25%)
    if load_kg > HEAVY_LOAD_KG && vehicle.is_truck_class() {
        score += 0.25;
        reasons.push("Heavy-duty vehicle for large load.");
    } else if load_kg <= LIGHT_LOAD_KG && vehicle.is_van_class() {
        score += 0.25;
        reasons.push("Efficient vehicle for light load.");
    } else {
        score += 0.15;
        reasons.push("Suitable vehicle type.");
    }

    // Energy level (20%), tiered
    if let Some(energy) = vehicle.energy_level() {
        if energy > 80.0 {
            score += 0.2;
            reasons.push("Excellent battery level.");
        } else if energy > 50.0 {
            score += 0.15;
            reasons.push("Good battery level.");
        } else {
            score += 0.05;
            reasons.push("Low battery level.");
        }
    }

    // Electric bonus (10%)
    if vehicle.is_electric() {
        score += 0.1;
        reasons.push("Eco-friendly electric vehicle.");
    }

    // Proximity bonus (5%)
    if let (Some(current), Some(pickup)) = (vehicle.current_location(), pickup_location) {
        if estimator.distance_km(current, pickup) < PROXIMITY_KM {
            score += 0.05;
            reasons.push("Close to pickup location.");
        }
    }

    SuitabilityScore {
        score: score.min(1.0),
        reason: reasons.join(" "),
    }
}
