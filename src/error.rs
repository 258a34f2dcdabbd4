use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{}: {source}", path.display())]
	Io { path: PathBuf, source: io::Error },
	#[error("failed to write {}: {source}", path.display())]
	Image { path: PathBuf, source: image::ImageError },
	#[error("{}: {source}", path.display())]
	Font { path: PathBuf, source: ab_glyph::InvalidFont },
	#[error("invalid config: {0}")]
	Config(#[from] toml::de::Error),
	#[error("invalid time of day {input:?}: {source}")]
	Time { input: String, source: time::error::Parse },
	#[error("seconds out of range: {0}")]
	Seconds(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
