use jiff::Timestamp;

use crate::problem::{
    booking::{Booking, BookingBuilder},
    snapshot::FleetSnapshot,
    vehicle::{Vehicle, VehicleBuilder, VehicleStatus},
};

pub fn booking_builder(
    booking_id: impl Into<String>,
    pickup: impl Into<String>,
    delivery: impl Into<String>,
) -> BookingBuilder {
    let mut builder = BookingBuilder::default();
    builder
        .set_booking_id(booking_id)
        .set_pickup_location(pickup)
        .set_delivery_location(delivery)
        .set_scheduled_at("2025-06-01T09:00:00Z".parse::<Timestamp>().unwrap());
    builder
}

pub fn create_booking(
    booking_id: impl Into<String>,
    pickup: impl Into<String>,
    delivery: impl Into<String>,
    load_weight_kg: f64,
    distance_km: f64,
) -> Booking {
    let mut builder = booking_builder(booking_id, pickup, delivery);
    builder
        .set_load_weight_kg(load_weight_kg)
        .set_distance_km(distance_km);
    builder.build()
}

pub fn create_booking_at(
    booking_id: impl Into<String>,
    load_weight_kg: f64,
    distance_km: f64,
    scheduled_at: Timestamp,
) -> Booking {
    let mut builder = booking_builder(booking_id, "Connaught Place", "Khan Market");
    builder
        .set_load_weight_kg(load_weight_kg)
        .set_distance_km(distance_km)
        .set_scheduled_at(scheduled_at);
    builder.build()
}

pub fn vehicle_builder(
    vehicle_id: impl Into<String>,
    vehicle_type: impl Into<String>,
    max_load_capacity_kg: f64,
) -> VehicleBuilder {
    let mut builder = VehicleBuilder::default();
    builder
        .set_vehicle_id(vehicle_id)
        .set_vehicle_type(vehicle_type)
        .set_max_load_capacity_kg(max_load_capacity_kg);
    builder
}

pub fn create_vehicle(
    vehicle_id: impl Into<String>,
    vehicle_type: impl Into<String>,
    max_load_capacity_kg: f64,
) -> Vehicle {
    vehicle_builder(vehicle_id, vehicle_type, max_load_capacity_kg).build()
}

pub fn create_test_snapshot() -> FleetSnapshot {
    let bookings = vec![
        create_booking("BK-001", "Connaught Place", "Khan Market", 400.0, 12.0),
        create_booking("BK-002", "Cyber City", "Udyog Vihar", 900.0, 18.0),
        create_booking("BK-003", "Whitefield", "Indiranagar", 1600.0, 25.0),
    ];

    let mut van = vehicle_builder("VH-001", "Cargo Van", 1200.0);
    van.set_energy_level(90.0);

    let truck = create_vehicle("VH-002", "Heavy Truck", 4000.0);

    let mut in_service = vehicle_builder("VH-003", "Mini Van", 600.0);
    in_service.set_status(VehicleStatus::Maintenance);

    FleetSnapshot::new(bookings, vec![van.build(), truck, in_service.build()])
}
