use clap::Parser;
use manet_core::{SimConfig, SimulationController};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "manet-sim")]
#[command(about = "Round-based MANET simulation: random mobility, energy-aware routing, node pruning")]
struct Cli {
    #[command(flatten)]
    config: SimConfig,

    /// PRNG seed; when omitted one is drawn from OS entropy and logged
    #[arg(long)]
    seed: Option<u64>,

    /// Emit round records as JSON lines instead of the plain format
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, config = ?cli.config, "starting simulation");

    let mut controller = SimulationController::new(cli.config, seed)?;
    let history = controller.run();

    for record in history {
        if cli.json {
            println!("{}", serde_json::to_string(record)?);
        } else {
            println!("{record}");
        }
    }

    info!(
        state = ?controller.state(),
        rounds_recorded = controller.history().len(),
        survivors = controller.network().node_count(),
        "simulation finished"
    );
    Ok(())
}

fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}
