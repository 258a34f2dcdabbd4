use std::{io, path::Path};

use anyhow::{Context, Result};
use mawaqit_mockup::{generate, Config, Fonts};
use tracing::Level;

const CONFIG_FILE: &str = "mockup.toml";

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_max_level(Level::INFO)
		.with_writer(io::stderr)
		.init();

	let config = Config::load(Path::new(CONFIG_FILE)).with_context(|| format!("failed to load {CONFIG_FILE}"))?;
	let fonts = Fonts::load(&config.font_paths);
	generate(&config, &fonts).context("failed to generate screenshots")?;
	Ok(())
}
