//! Mock-up screenshots of the prayer time display, for documentation.

mod config;
mod driver;
mod error;
mod font;
mod schedule;
mod theme;
mod view;

pub use config::{Config, Labels, PanelConfig};
pub use driver::{generate, showcase};
pub use error::{Error, Result};
pub use font::{Font, Fonts};
pub use schedule::{
	classify, format_clock, format_countdown, format_hours_minutes, format_short, next_prayer, parse_time, Filter,
	NextPrayer, PrayerEntry, PrayerKind, RowStatus, SCHEDULE,
};
pub use theme::{Theme, ThemeName};
pub use view::{
	hour_hand_angle, minute_hand_angle, render, second_hand_angle, views, ClockView, CountdownView, ListView, Scene,
	View,
};

pub use frame_output::FrameOutput;

/// Panel size of the simulated display.
pub const WIDTH: u32 = 480;
pub const HEIGHT: u32 = 272;
