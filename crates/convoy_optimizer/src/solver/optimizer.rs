use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::problem::{
    booking::{Booking, BookingRequest},
    distance::{DistanceEstimator, PseudoDistance},
    snapshot::{BookingDirectory, VehicleDirectory},
    vehicle::{Vehicle, VehicleStatus},
};
use crate::scoring::{
    recommendation::{VehicleRecommendation, recommend_vehicles},
    suitability::score_vehicle,
};
use crate::solver::{
    assignment::VehicleAssignment,
    cluster::{Clusterer, KeywordClusterer},
    metrics::{OptimizationMetrics, compute_metrics},
    packing::pack_loads,
    search::{EvolutionarySearch, ShufflePack},
    sequence::sequence_route,
};

const ROUTE_ALGORITHM: &str = "NEAREST_NEIGHBOR_ROUTE";
const LOAD_ALGORITHM: &str = "FIRST_FIT_DECREASING";
const COMBINED_ALGORITHM: &str = "GENETIC_ALGORITHM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationMode {
    Route,
    Load,
    Combined,
}

impl OptimizationMode {
    /// Case-insensitive; absent or unrecognized flags fall back to combined.
    pub fn parse(flag: Option<&str>) -> Self {
        match flag {
            Some(flag) if flag.eq_ignore_ascii_case("ROUTE") => OptimizationMode::Route,
            Some(flag) if flag.eq_ignore_ascii_case("LOAD") => OptimizationMode::Load,
            _ => OptimizationMode::Combined,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizationMode::Route => "ROUTE",
            OptimizationMode::Load => "LOAD",
            OptimizationMode::Combined => "COMBINED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizationRequest {
    pub booking_ids: Vec<String>,
    pub optimization_type: Option<String>,
    /// Accepted for wire compatibility; no semantics are attached to it.
    pub max_distance_km: Option<f64>,
    pub max_vehicles: Option<usize>,
    pub prioritize_electric: Option<bool>,
}

impl OptimizationRequest {
    pub fn new(booking_ids: Vec<String>) -> Self {
        OptimizationRequest {
            booking_ids,
            optimization_type: None,
            max_distance_km: None,
            max_vehicles: None,
            prioritize_electric: None,
        }
    }

    pub fn mode(&self) -> OptimizationMode {
        OptimizationMode::parse(self.optimization_type.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub assignments: Vec<VehicleAssignment>,
    pub metrics: OptimizationMetrics,
    pub optimization_type: &'static str,
}

#[derive(Debug, Clone)]
pub struct OptimizerParams {
    pub search: EvolutionarySearch,
    /// Master seed for the run's RNG; a fixed default keeps identical runs
    /// byte-identical.
    pub seed: u64,
}

impl Default for OptimizerParams {
    fn default() -> Self {
        OptimizerParams {
            search: EvolutionarySearch::default(),
            seed: 1_794_213,
        }
    }
}

/// The engine façade: dispatches a request to route, load, or combined
/// optimization over a read-only fleet snapshot. A pure function of
/// (snapshot, request, seed) — nothing is persisted, and infeasible or
/// partial input degrades to an empty result instead of failing.
pub struct Optimizer<D = PseudoDistance, C = KeywordClusterer> {
    distance: D,
    clusterer: C,
    params: OptimizerParams,
}

impl Optimizer {
    pub fn new(params: OptimizerParams) -> Self {
        Optimizer {
            distance: PseudoDistance,
            clusterer: KeywordClusterer,
            params,
        }
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Optimizer::new(OptimizerParams::default())
    }
}

impl<D: DistanceEstimator, C: Clusterer> Optimizer<D, C> {
    /// Swap in a different distance provider or clustering strategy.
    pub fn with_components(distance: D, clusterer: C, params: OptimizerParams) -> Self {
        Optimizer {
            distance,
            clusterer,
            params,
        }
    }

    pub fn optimize<F>(&self, request: &OptimizationRequest, fleet: &F) -> OptimizationResult
    where
        F: BookingDirectory + VehicleDirectory,
    {
        let mode = request.mode();
        let bookings = self.resolve_bookings(request, fleet);
        let vehicles = self.candidate_vehicles(request, fleet);

        info!(
            mode = mode.as_str(),
            bookings = bookings.len(),
            vehicles = vehicles.len(),
            "running fleet optimization"
        );

        let (assignments, algorithm) = match mode {
            OptimizationMode::Route => (self.optimize_routes(&bookings, vehicles), ROUTE_ALGORITHM),
            OptimizationMode::Load => (pack_loads(&bookings, &vehicles), LOAD_ALGORITHM),
            OptimizationMode::Combined => {
                (self.optimize_combined(&bookings, &vehicles), COMBINED_ALGORITHM)
            }
        };

        let metrics = compute_metrics(&assignments, algorithm);

        OptimizationResult {
            assignments,
            metrics,
            optimization_type: mode.as_str(),
        }
    }

    /// Top-ranked vehicles for a prospective delivery, drawn from the
    /// currently available pool.
    pub fn recommend(
        &self,
        request: &BookingRequest,
        fleet: &impl VehicleDirectory,
    ) -> Vec<VehicleRecommendation> {
        let vehicles = fleet.vehicles_with_status(VehicleStatus::Available);
        recommend_vehicles(&vehicles, request, &self.distance)
    }

    /// Unresolvable booking ids are dropped from the working set; they are
    /// reported by absence, never as a run failure.
    fn resolve_bookings<F: BookingDirectory>(
        &self,
        request: &OptimizationRequest,
        fleet: &F,
    ) -> Vec<Booking> {
        let bookings: Vec<Booking> = request
            .booking_ids
            .iter()
            .filter_map(|booking_id| fleet.booking_by_id(booking_id))
            .collect();

        if bookings.len() < request.booking_ids.len() {
            warn!(
                requested = request.booking_ids.len(),
                resolved = bookings.len(),
                "dropped booking ids with no matching record"
            );
        }

        bookings
    }

    fn candidate_vehicles<F: VehicleDirectory>(
        &self,
        request: &OptimizationRequest,
        fleet: &F,
    ) -> Vec<Vehicle> {
        let mut vehicles = fleet.vehicles_with_status(VehicleStatus::Available);

        if request.prioritize_electric.unwrap_or(false) {
            // Stable: electric vehicles first, relative order preserved
            vehicles.sort_by_key(|vehicle| !vehicle.is_electric());
        }

        if let Some(max_vehicles) = request.max_vehicles {
            vehicles.truncate(max_vehicles);
        }

        vehicles
    }

    /// Route mode: one vehicle per location cluster, chosen by composite
    /// suitability against the cluster's aggregate load, then sequenced with
    /// the nearest-neighbor heuristic. Advisory only — capacity is scored,
    /// not enforced.
    fn optimize_routes(
        &self,
        bookings: &[Booking],
        mut pool: Vec<Vehicle>,
    ) -> Vec<VehicleAssignment> {
        let mut assignments = Vec::new();

        for cluster in self.clusterer.cluster(bookings) {
            if pool.is_empty() {
                break;
            }

            let mut best_index = 0;
            let mut best_score = f64::NEG_INFINITY;
            for (index, vehicle) in pool.iter().enumerate() {
                let score = score_vehicle(
                    vehicle,
                    cluster.total_load_kg(),
                    cluster.first_pickup(),
                    &self.distance,
                )
                .score;
                if score > best_score {
                    best_score = score;
                    best_index = index;
                }
            }

            let vehicle = pool.remove(best_index);
            let route = sequence_route(&cluster.bookings, &self.distance);
            assignments.push(VehicleAssignment::routed(vehicle, cluster.bookings, route));
        }

        assignments
    }

    fn optimize_combined(
        &self,
        bookings: &[Booking],
        vehicles: &[Vehicle],
    ) -> Vec<VehicleAssignment> {
        let mut rng = SmallRng::seed_from_u64(self.params.seed);
        self.params
            .search
            .run(&ShufflePack, bookings, vehicles, &mut rng)
    }
}
