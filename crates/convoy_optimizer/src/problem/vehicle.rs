use serde::{Deserialize, Serialize};

/// Fallback capacity when a vehicle declares neither a max load nor a
/// generic capacity.
pub const DEFAULT_CAPACITY_KG: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    EnRoute,
    Loading,
    Maintenance,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    vehicle_id: String,
    vehicle_type: String,
    max_load_capacity_kg: Option<f64>,
    capacity: Option<u32>,
    energy_level: Option<f64>,
    is_electric: bool,
    current_location: Option<String>,
    status: VehicleStatus,
}

impl Vehicle {
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Battery charge or fuel, as a percentage in [0, 100].
    pub fn energy_level(&self) -> Option<f64> {
        self.energy_level
    }

    pub fn is_electric(&self) -> bool {
        self.is_electric
    }

    pub fn current_location(&self) -> Option<&str> {
        self.current_location.as_deref()
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    /// Max load capacity if declared, else the generic capacity field,
    /// else [`DEFAULT_CAPACITY_KG`].
    pub fn effective_capacity_kg(&self) -> f64 {
        self.max_load_capacity_kg
            .or(self.capacity.map(f64::from))
            .unwrap_or(DEFAULT_CAPACITY_KG)
    }

    pub fn is_truck_class(&self) -> bool {
        self.vehicle_type.to_lowercase().contains("truck")
    }

    pub fn is_van_class(&self) -> bool {
        self.vehicle_type.to_lowercase().contains("van")
    }
}

#[derive(Default)]
pub struct VehicleBuilder {
    vehicle_id: Option<String>,
    vehicle_type: Option<String>,
    max_load_capacity_kg: Option<f64>,
    capacity: Option<u32>,
    energy_level: Option<f64>,
    is_electric: Option<bool>,
    current_location: Option<String>,
    status: Option<VehicleStatus>,
}

impl VehicleBuilder {
    pub fn set_vehicle_id(&mut self, vehicle_id: impl Into<String>) -> &mut VehicleBuilder {
        self.vehicle_id = Some(vehicle_id.into());
        self
    }

    pub fn set_vehicle_type(&mut self, vehicle_type: impl Into<String>) -> &mut VehicleBuilder {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn set_max_load_capacity_kg(&mut self, capacity_kg: f64) -> &mut VehicleBuilder {
        self.max_load_capacity_kg = Some(capacity_kg);
        self
    }

    pub fn set_capacity(&mut self, capacity: u32) -> &mut VehicleBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn set_energy_level(&mut self, energy_level: f64) -> &mut VehicleBuilder {
        self.energy_level = Some(energy_level);
        self
    }

    pub fn set_electric(&mut self, is_electric: bool) -> &mut VehicleBuilder {
        self.is_electric = Some(is_electric);
        self
    }

    pub fn set_current_location(&mut self, location: impl Into<String>) -> &mut VehicleBuilder {
        self.current_location = Some(location.into());
        self
    }

    pub fn set_status(&mut self, status: VehicleStatus) -> &mut VehicleBuilder {
        self.status = Some(status);
        self
    }

    pub fn build(self) -> Vehicle {
        Vehicle {
            vehicle_id: self.vehicle_id.expect("Vehicle ID is required"),
            vehicle_type: self.vehicle_type.expect("Vehicle type is required"),
            max_load_capacity_kg: self.max_load_capacity_kg,
            capacity: self.capacity,
            energy_level: self.energy_level,
            is_electric: self.is_electric.unwrap_or(false),
            current_location: self.current_location,
            status: self.status.unwrap_or(VehicleStatus::Available),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> VehicleBuilder {
        let mut builder = VehicleBuilder::default();
        builder
            .set_vehicle_id("VH-001")
            .set_vehicle_type("Cargo Van");
        builder
    }

    #[test]
    fn test_effective_capacity_prefers_max_load() {
        let mut builder = base_builder();
        builder.set_max_load_capacity_kg(2500.0).set_capacity(4);
        assert_eq!(builder.build().effective_capacity_kg(), 2500.0);
    }

    #[test]
    fn test_effective_capacity_falls_back_to_generic() {
        let mut builder = base_builder();
        builder.set_capacity(800);
        assert_eq!(builder.build().effective_capacity_kg(), 800.0);
    }

    #[test]
    fn test_effective_capacity_default() {
        assert_eq!(
            base_builder().build().effective_capacity_kg(),
            DEFAULT_CAPACITY_KG
        );
    }

    #[test]
    fn test_type_class_matching() {
        let mut builder = base_builder();
        builder.set_vehicle_type("Heavy Truck");
        let truck = builder.build();
        assert!(truck.is_truck_class());
        assert!(!truck.is_van_class());

        let van = base_builder().build();
        assert!(van.is_van_class());
    }
}
