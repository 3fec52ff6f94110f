use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use crate::problem::{booking::Booking, vehicle::Vehicle};
use crate::solver::sequence::SequencedRoute;

const AVERAGE_SPEED_KMH: f64 = 40.0;

/// One vehicle paired with the bookings the engine assigned to it.
/// Ephemeral output: persisting it is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleAssignment {
    vehicle: Vehicle,
    assigned_bookings: Vec<Booking>,
    total_distance_km: f64,
    total_load_kg: f64,
    /// Percent of effective capacity in use, capped at 100.
    utilization: f64,
    estimated_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<Vec<String>>,
}

impl VehicleAssignment {
    /// Assignment from load packing: the travel estimate is the sum of the
    /// bookings' own trip distances.
    pub fn packed(vehicle: Vehicle, bookings: Vec<Booking>) -> Self {
        let total_distance_km = bookings.iter().map(Booking::distance_km).sum();
        Self::build(vehicle, bookings, total_distance_km, None)
    }

    /// Assignment from route planning: the travel estimate comes from the
    /// sequenced route's legs, and the stop order is carried along.
    pub fn routed(vehicle: Vehicle, bookings: Vec<Booking>, route: SequencedRoute) -> Self {
        Self::build(
            vehicle,
            bookings,
            route.total_distance_km,
            Some(route.stops),
        )
    }

    fn build(
        vehicle: Vehicle,
        bookings: Vec<Booking>,
        total_distance_km: f64,
        route: Option<Vec<String>>,
    ) -> Self {
        let total_load_kg: f64 = bookings.iter().map(Booking::load_weight_kg).sum();
        let capacity_kg = vehicle.effective_capacity_kg();
        let utilization = if capacity_kg > 0.0 {
            (total_load_kg / capacity_kg).min(1.0) * 100.0
        } else {
            0.0
        };

        VehicleAssignment {
            vehicle,
            assigned_bookings: bookings,
            total_distance_km,
            total_load_kg,
            utilization,
            estimated_minutes: estimated_minutes(total_distance_km),
            route,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn assigned_bookings(&self) -> &[Booking] {
        &self.assigned_bookings
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn total_load_kg(&self) -> f64 {
        self.total_load_kg
    }

    pub fn utilization(&self) -> f64 {
        self.utilization
    }

    pub fn estimated_minutes(&self) -> i64 {
        self.estimated_minutes
    }

    pub fn route(&self) -> Option<&[String]> {
        self.route.as_deref()
    }

    /// Earliest scheduled pickup plus the travel estimate.
    pub fn estimated_completion(&self) -> Option<Timestamp> {
        self.assigned_bookings
            .iter()
            .map(Booking::scheduled_at)
            .min()
            .map(|start| start + SignedDuration::from_mins(self.estimated_minutes))
    }
}

fn estimated_minutes(distance_km: f64) -> i64 {
    (distance_km / AVERAGE_SPEED_KMH * 60.0).ceil() as i64
}
