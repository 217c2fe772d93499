use anyhow::{Context, Result};
use std::path::PathBuf;
use twilight_sim::simulation::SimulationConfig;

use crate::utils::write_output;

pub fn write_default_config(output: Option<&PathBuf>) -> Result<()> {
    let json = SimulationConfig::default()
        .to_json_string()
        .context("Failed to serialize configuration")?;
    write_output(&format!("{json}\n"), output)
}
