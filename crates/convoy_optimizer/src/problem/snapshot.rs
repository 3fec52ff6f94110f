use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::problem::{
    booking::Booking,
    vehicle::{Vehicle, VehicleStatus},
};

/// Read-only lookup of bookings by their external identifier.
pub trait BookingDirectory {
    fn booking_by_id(&self, booking_id: &str) -> Option<Booking>;
}

/// Read-only lookup of vehicles filtered by operational status.
pub trait VehicleDirectory {
    fn vehicles_with_status(&self, status: VehicleStatus) -> Vec<Vehicle>;
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The immutable input snapshot the engine operates on: all bookings and
/// vehicles known to the caller at the time of the run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FleetSnapshot {
    bookings: Vec<Booking>,
    vehicles: Vec<Vehicle>,
}

impl FleetSnapshot {
    pub fn new(bookings: Vec<Booking>, vehicles: Vec<Vehicle>) -> Self {
        FleetSnapshot { bookings, vehicles }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}

impl BookingDirectory for FleetSnapshot {
    fn booking_by_id(&self, booking_id: &str) -> Option<Booking> {
        self.bookings
            .iter()
            .find(|booking| booking.booking_id() == booking_id)
            .cloned()
    }
}

impl VehicleDirectory for FleetSnapshot {
    fn vehicles_with_status(&self, status: VehicleStatus) -> Vec<Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.status() == status)
            .cloned()
            .collect()
    }
}
