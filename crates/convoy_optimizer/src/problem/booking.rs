use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Scheduled,
    InTransit,
    Delivered,
    Cancelled,
}

/// A delivery booking as handed over by the persistence layer. The engine
/// treats it as a read-only snapshot and never mutates its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    booking_id: String,
    pickup_location: String,
    delivery_location: String,
    distance_km: f64,
    load_weight_kg: f64,
    scheduled_at: Timestamp,
    status: BookingStatus,
}

impl Booking {
    pub fn booking_id(&self) -> &str {
        &self.booking_id
    }

    pub fn pickup_location(&self) -> &str {
        &self.pickup_location
    }

    pub fn delivery_location(&self) -> &str {
        &self.delivery_location
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn load_weight_kg(&self) -> f64 {
        self.load_weight_kg
    }

    pub fn scheduled_at(&self) -> Timestamp {
        self.scheduled_at
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }
}

/// A prospective delivery that has not been booked yet. Input to the
/// recommendation scorer and the cost estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingRequest {
    pub pickup_location: String,
    pub delivery_location: String,
    pub load_weight_kg: f64,
    pub scheduled_at: Option<Timestamp>,
}

#[derive(Default)]
pub struct BookingBuilder {
    booking_id: Option<String>,
    pickup_location: Option<String>,
    delivery_location: Option<String>,
    distance_km: Option<f64>,
    load_weight_kg: Option<f64>,
    scheduled_at: Option<Timestamp>,
    status: Option<BookingStatus>,
}

impl BookingBuilder {
    pub fn set_booking_id(&mut self, booking_id: impl Into<String>) -> &mut BookingBuilder {
        self.booking_id = Some(booking_id.into());
        self
    }

    pub fn set_pickup_location(&mut self, pickup: impl Into<String>) -> &mut BookingBuilder {
        self.pickup_location = Some(pickup.into());
        self
    }

    pub fn set_delivery_location(&mut self, delivery: impl Into<String>) -> &mut BookingBuilder {
        self.delivery_location = Some(delivery.into());
        self
    }

    pub fn set_distance_km(&mut self, distance_km: f64) -> &mut BookingBuilder {
        self.distance_km = Some(distance_km);
        self
    }

    pub fn set_load_weight_kg(&mut self, load_weight_kg: f64) -> &mut BookingBuilder {
        self.load_weight_kg = Some(load_weight_kg);
        self
    }

    pub fn set_scheduled_at(&mut self, scheduled_at: Timestamp) -> &mut BookingBuilder {
        self.scheduled_at = Some(scheduled_at);
        self
    }

    pub fn set_status(&mut self, status: BookingStatus) -> &mut BookingBuilder {
        self.status = Some(status);
        self
    }

    pub fn build(self) -> Booking {
        Booking {
            booking_id: self.booking_id.expect("Booking ID is required"),
            pickup_location: self.pickup_location.expect("Pickup location is required"),
            delivery_location: self
                .delivery_location
                .expect("Delivery location is required"),
            distance_km: self.distance_km.unwrap_or(0.0),
            load_weight_kg: self.load_weight_kg.unwrap_or(0.0),
            scheduled_at: self.scheduled_at.unwrap_or(Timestamp::UNIX_EPOCH),
            status: self.status.unwrap_or(BookingStatus::Scheduled),
        }
    }
}
