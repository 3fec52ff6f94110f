use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use convoy_optimizer::{
    problem::{booking::Booking, snapshot::FleetSnapshot},
    solver::optimizer::{OptimizationRequest, Optimizer, OptimizerParams},
};
use tracing::info;

#[derive(Args)]
pub struct OptimizeArgs {
    /// Fleet snapshot (bookings + vehicles) as JSON
    #[arg(short, long)]
    input: PathBuf,

    /// Booking ids to optimize; defaults to every booking in the snapshot
    #[arg(short, long)]
    booking_ids: Vec<String>,

    /// ROUTE, LOAD or COMBINED (default)
    #[arg(short, long)]
    mode: Option<String>,

    #[arg(long)]
    max_vehicles: Option<usize>,

    /// Sort electric vehicles to the front of the candidate pool
    #[arg(long)]
    prioritize_electric: bool,

    /// Master seed for the search RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Print the raw result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: OptimizeArgs) -> Result<(), anyhow::Error> {
    let snapshot = FleetSnapshot::from_json_file(&args.input)?;
    info!(
        bookings = snapshot.bookings().len(),
        vehicles = snapshot.vehicles().len(),
        "loaded fleet snapshot"
    );

    let booking_ids = if args.booking_ids.is_empty() {
        snapshot
            .bookings()
            .iter()
            .map(|booking| booking.booking_id().to_owned())
            .collect()
    } else {
        args.booking_ids
    };

    let mut request = OptimizationRequest::new(booking_ids);
    request.optimization_type = args.mode;
    request.max_vehicles = args.max_vehicles;
    request.prioritize_electric = args.prioritize_electric.then_some(true);

    let mut params = OptimizerParams::default();
    if let Some(seed) = args.seed {
        params.seed = seed;
    }

    let result = Optimizer::new(params).optimize(&request, &snapshot);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Vehicle",
        "Type",
        "Bookings",
        "Load (kg)",
        "Utilization",
        "Distance (km)",
        "ETA (min)",
    ]);
    for assignment in &result.assignments {
        table.add_row(vec![
            assignment.vehicle().vehicle_id().to_owned(),
            assignment.vehicle().vehicle_type().to_owned(),
            assignment
                .assigned_bookings()
                .iter()
                .map(Booking::booking_id)
                .collect::<Vec<_>>()
                .join(", "),
            format!("{:.0}", assignment.total_load_kg()),
            format!("{:.1}%", assignment.utilization()),
            format!("{:.1}", assignment.total_distance_km()),
            assignment.estimated_minutes().to_string(),
        ]);
    }
    println!("{table}");

    let metrics = &result.metrics;
    println!(
        "{}: {:.1} km total | avg utilization {:.1}% | {} vehicle(s) | est. savings: fuel {:.1}, time {} min, cost {:.2}",
        metrics.algorithm,
        metrics.total_distance_km,
        metrics.average_utilization,
        metrics.vehicles_used,
        metrics.fuel_savings,
        metrics.time_savings_minutes,
        metrics.cost_reduction,
    );

    Ok(())
}
