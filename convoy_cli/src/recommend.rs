use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use convoy_optimizer::{
    problem::{booking::BookingRequest, snapshot::FleetSnapshot},
    solver::optimizer::Optimizer,
};
use tracing::info;

#[derive(Args)]
pub struct RecommendArgs {
    /// Fleet snapshot (bookings + vehicles) as JSON
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long)]
    pickup: String,

    #[arg(long)]
    delivery: String,

    /// Load weight in kg
    #[arg(short, long)]
    load: f64,
}

pub fn run(args: RecommendArgs) -> Result<(), anyhow::Error> {
    let snapshot = FleetSnapshot::from_json_file(&args.input)?;

    let request = BookingRequest {
        pickup_location: args.pickup,
        delivery_location: args.delivery,
        load_weight_kg: args.load,
        scheduled_at: None,
    };

    let recommendations = Optimizer::default().recommend(&request, &snapshot);

    if recommendations.is_empty() {
        info!("no suitable vehicles for this delivery");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Vehicle",
        "Type",
        "Score",
        "Est. cost",
        "ETA (min)",
        "Why",
    ]);
    for recommendation in &recommendations {
        table.add_row(vec![
            recommendation.vehicle.vehicle_id().to_owned(),
            recommendation.vehicle.vehicle_type().to_owned(),
            format!("{:.2}", recommendation.match_score),
            format!("{:.2}", recommendation.estimated_cost),
            recommendation.estimated_minutes.to_string(),
            recommendation.reason.clone(),
        ]);
    }
    println!("{table}");

    Ok(())
}
