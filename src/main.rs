use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gesture_engine::commands::replay::{load_config, replay_file};
use gesture_engine::manager::ManagerConfig;

#[derive(Debug, Parser)]
#[command(name = "gesture-replay")]
#[command(about = "Replay a recorded touch sample stream through the gesture engine")]
struct Cli {
    /// JSON recording of raw samples
    input: PathBuf,
    /// Where to write the computed inputs
    #[arg(long, short, default_value = "computed-inputs.json")]
    output: PathBuf,
    /// Optional manager configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "gesture_engine=info")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    gesture_engine::init_tracing(&cli.log);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ManagerConfig::default(),
    };

    let summary = replay_file(&cli.input, &cli.output, config)?;
    println!(
        "{} samples, {} dispatched -> {}",
        summary.samples,
        summary.dispatched,
        cli.output.display()
    );
    Ok(())
}
