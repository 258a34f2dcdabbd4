use std::fmt;

use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};

/// The four colours one rendering is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub background: Rgb888,
	pub header: Rgb888,
	pub accent: Rgb888,
	pub text: Rgb888,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
	Green,
	Blue,
	Purple,
	Dark,
}

impl ThemeName {
	pub const ALL: [ThemeName; 4] = [ThemeName::Green, ThemeName::Blue, ThemeName::Purple, ThemeName::Dark];

	pub fn as_str(&self) -> &'static str {
		match self {
			ThemeName::Green => "green",
			ThemeName::Blue => "blue",
			ThemeName::Purple => "purple",
			ThemeName::Dark => "dark",
		}
	}

	pub fn theme(&self) -> &'static Theme {
		match self {
			ThemeName::Green => &GREEN,
			ThemeName::Blue => &BLUE,
			ThemeName::Purple => &PURPLE,
			ThemeName::Dark => &DARK,
		}
	}
}

impl fmt::Display for ThemeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

static GREEN: Theme = Theme {
	background: Rgb888::new(0, 16, 0),
	header: Rgb888::new(0, 32, 0),
	accent: Rgb888::new(0, 255, 0),
	text: Rgb888::new(255, 255, 255),
};

static BLUE: Theme = Theme {
	background: Rgb888::new(0, 0, 32),
	header: Rgb888::new(24, 48, 96),
	accent: Rgb888::new(90, 180, 255),
	text: Rgb888::new(255, 255, 255),
};

static PURPLE: Theme = Theme {
	background: Rgb888::new(32, 0, 32),
	header: Rgb888::new(64, 0, 64),
	accent: Rgb888::new(180, 120, 255),
	text: Rgb888::new(255, 255, 255),
};

// true black, for night use
static DARK: Theme = Theme {
	background: Rgb888::new(0, 0, 0),
	header: Rgb888::new(24, 24, 24),
	accent: Rgb888::new(80, 80, 80),
	text: Rgb888::new(200, 200, 200),
};

// shared by every theme
pub const BLACK: Rgb888 = Rgb888::new(0, 0, 0);
pub const YELLOW: Rgb888 = Rgb888::new(255, 255, 0);
pub const PASSED_FILL: Rgb888 = Rgb888::new(30, 30, 30);
pub const PASSED_TEXT: Rgb888 = Rgb888::new(100, 100, 100);
pub const SUNRISE_FILL: Rgb888 = Rgb888::new(60, 40, 10);
pub const SUNRISE_TEXT: Rgb888 = Rgb888::new(255, 165, 0);
pub const SUNRISE_PASSED_FILL: Rgb888 = Rgb888::new(36, 26, 8);
pub const SUNRISE_PASSED_TEXT: Rgb888 = Rgb888::new(100, 70, 0);
pub const CAPTION: Rgb888 = Rgb888::new(150, 150, 150);
pub const FOOTER: Rgb888 = Rgb888::new(80, 80, 80);
pub const SHOWCASE_BACKGROUND: Rgb888 = Rgb888::new(30, 30, 30);
pub const SHOWCASE_CAPTION: Rgb888 = Rgb888::new(200, 200, 200);
