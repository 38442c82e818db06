//! Replay command
//!
//! Runs a recorded sample stream through a fresh `Manager` and writes the
//! computed inputs as JSON.

use crate::manager::{Manager, ManagerConfig};
use crate::processing::ComputedInput;
use crate::recorder::SampleRecording;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Counts reported after a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    pub samples: usize,
    pub dispatched: usize,
}

/// Replay the recording at `input`, writing the dispatched inputs to `output`
pub fn replay_file(input: &Path, output: &Path, config: ManagerConfig) -> Result<ReplaySummary> {
    let recording = SampleRecording::load(input)
        .with_context(|| format!("Failed to load recording {}", input.display()))?;

    let mut manager = Manager::with_config(config).context("Invalid manager configuration")?;
    let inputs = manager.replay(&recording);

    write_inputs(output, &inputs)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let summary = ReplaySummary {
        samples: recording.len(),
        dispatched: inputs.len(),
    };
    tracing::info!(
        "Replayed {} samples from {} ({} dispatched) -> {}",
        summary.samples,
        input.display(),
        summary.dispatched,
        output.display()
    );
    Ok(summary)
}

/// Load a manager configuration from a JSON file
pub fn load_config(path: &Path) -> Result<ManagerConfig> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    ManagerConfig::from_json_str(&data)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

fn write_inputs(path: &Path, inputs: &[ComputedInput]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_vec_pretty(inputs)?;
    std::fs::write(path, data)?;
    Ok(())
}
