use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{optimize::OptimizeArgs, recommend::RecommendArgs};

mod optimize;
mod recommend;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign bookings to vehicles and sequence their routes
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Rank available vehicles for a prospective delivery
    Recommend {
        #[command(flatten)]
        args: RecommendArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args),
        Commands::Recommend { args } => recommend::run(args),
    }
}
