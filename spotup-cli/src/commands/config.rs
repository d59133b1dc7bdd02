use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::SpotupConfig;

/// Show the config file path and the effective values.
pub fn run(config: &SpotupConfig) -> Result<()> {
    let path = SpotupConfig::config_path()?;
    println!("{}", path.display().to_string().dimmed());

    let rendered = toml::to_string_pretty(config).context("Could not render config")?;
    if rendered.is_empty() {
        println!("{}", "(all defaults)".dimmed());
    } else {
        print!("{rendered}");
    }

    let (lat, lng) = config.center();
    println!(
        "{}",
        format!(
            "map: {}x{} cells centered on ({lat:.4}, {lng:.4})",
            config.map_width, config.map_height
        )
        .dimmed()
    );
    Ok(())
}
