use std::{
	fs, io,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use time::Time;
use tracing::debug;

use crate::{schedule::parse_time, theme::ThemeName, Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Created if missing.
	pub output_dir: PathBuf,
	/// Time of day all images show, `HH:MM`.
	pub time: String,
	/// Simulated seconds, the schedule has minute resolution only.
	pub seconds: u8,
	/// Theme of `display_main.png` and the showcase.
	pub showcase_theme: ThemeName,
	/// TrueType fonts to try in order before using the built-in font.
	pub font_paths: Vec<PathBuf>,
	pub labels: Labels,
	pub panel: PanelConfig,
}

/// Static strings painted onto the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
	pub location: String,
	pub date: String,
	pub hint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
	/// Save images at the 16 bit colour depth of the real panel.
	pub rgb565: bool,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			output_dir: PathBuf::from("screenshots"),
			time: "14:30".to_owned(),
			seconds: 30,
			showcase_theme: ThemeName::Green,
			font_paths: vec![
				PathBuf::from("arial.ttf"),
				PathBuf::from("/usr/share/fonts/truetype/msttcorefonts/Arial.ttf"),
				PathBuf::from("/Library/Fonts/Arial.ttf"),
				PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
			],
			labels: Labels::default(),
			panel: PanelConfig::default(),
		}
	}
}

impl Default for Labels {
	fn default() -> Self {
		Labels {
			location: "Moschee Hamburg".to_owned(),
			date: "Mon, 28. Jan".to_owned(),
			hint: "Tap: Modes".to_owned(),
		}
	}
}

impl Config {
	/// Read `path`, or use the defaults if it does not exist.
	pub fn load(path: &Path) -> Result<Config> {
		let config = match fs::read_to_string(path) {
			Ok(data) => toml::from_str(&data)?,
			Err(e) if e.kind() == io::ErrorKind::NotFound => {
				debug!("{} not found, using defaults", path.display());
				Config::default()
			},
			Err(source) => {
				return Err(Error::Io {
					path: path.to_owned(),
					source,
				})
			},
		};
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		if self.seconds > 59 {
			return Err(Error::Seconds(self.seconds));
		}
		self.now().map(|_| ())
	}

	pub fn now(&self) -> Result<Time> {
		parse_time(&self.time)
	}
}

#[cfg(test)]
mod tests {
	use time::macros::time;

	use super::*;

	#[test]
	fn missing_file_gives_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let config = Config::load(&dir.path().join("mockup.toml")).unwrap();
		assert_eq!(config, Config::default());
		assert_eq!(config.now().unwrap(), time!(14:30));
		assert_eq!(config.output_dir, PathBuf::from("screenshots"));
	}

	#[test]
	fn partial_file_keeps_other_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("mockup.toml");
		fs::write(
			&path,
			r#"
time = "06:00"
showcase_theme = "purple"

[labels]
location = "Moschee Berlin"

[panel]
rgb565 = true
"#,
		)
		.unwrap();
		let config = Config::load(&path).unwrap();
		assert_eq!(config.now().unwrap(), time!(6:00));
		assert_eq!(config.showcase_theme, ThemeName::Purple);
		assert_eq!(config.labels.location, "Moschee Berlin");
		assert_eq!(config.labels.hint, "Tap: Modes");
		assert!(config.panel.rgb565);
		assert_eq!(config.seconds, 30);
	}

	#[test]
	fn rejects_bad_values() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("mockup.toml");
		for bad in ["showcase_theme = \"red\"", "time = \"2:30pm\"", "seconds = 75", "time = 1430"] {
			fs::write(&path, bad).unwrap();
			assert!(Config::load(&path).is_err(), "{bad}");
		}
	}
}
