use embedded_graphics::{
	pixelcolor::Rgb888,
	prelude::{DrawTarget, Point},
};

use super::{fill, line, rect, rounded, Scene, View};
use crate::{
	schedule::{classify, format_clock, format_hours_minutes, next_prayer, Filter, RowStatus},
	theme::{self, Theme},
	HEIGHT, WIDTH,
};

const HEADER_HEIGHT: i32 = 40;
const FOOTER_HEIGHT: i32 = 28;
const COLUMN_WIDTH: i32 = WIDTH as i32 / 2 - 15;
const ROW_HEIGHT: i32 = 35;
const ROW_GAP: i32 = 8;
const ROWS_TOP: i32 = 50;
const ROWS_PER_COLUMN: usize = 3;

/// Two columns of prayer rows between a clock header and a status footer.
pub struct ListView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowStyle {
	fill: Rgb888,
	text: Rgb888,
	/// Marker along the left edge.
	bar: Option<Rgb888>,
}

fn row_style(status: RowStatus, sunrise: bool, theme: &Theme) -> RowStyle {
	let (fill, text, bar) = match (status, sunrise) {
		(RowStatus::Next, false) => (theme.accent, theme::BLACK, Some(theme.text)),
		(RowStatus::Next, true) => (theme::SUNRISE_FILL, theme::SUNRISE_TEXT, Some(theme.accent)),
		(RowStatus::Passed, false) => (theme::PASSED_FILL, theme::PASSED_TEXT, None),
		(RowStatus::Passed, true) => (theme::SUNRISE_PASSED_FILL, theme::SUNRISE_PASSED_TEXT, None),
		(RowStatus::Upcoming, false) => (theme.header, theme.text, None),
		(RowStatus::Upcoming, true) => (theme::SUNRISE_FILL, theme::SUNRISE_TEXT, None),
	};
	RowStyle { fill, text, bar }
}

/// Top left corner of row `index`: first column top to bottom, then the second.
fn row_origin(index: usize) -> Point {
	let column = (index / ROWS_PER_COLUMN) as i32;
	let row = (index % ROWS_PER_COLUMN) as i32;
	Point::new(10 + column * (COLUMN_WIDTH + 15), ROWS_TOP + row * (ROW_HEIGHT + ROW_GAP))
}

impl<D: DrawTarget<Color = Rgb888>> View<D> for ListView {
	fn id(&self) -> &'static str {
		"list"
	}

	fn title(&self) -> &'static str {
		"List View"
	}

	fn draw(&self, disp: &mut D, scene: &Scene) -> Result<(), D::Error> {
		let theme = scene.theme;
		let width = WIDTH as i32;
		let height = HEIGHT as i32;
		let large = scene.fonts.sized(24);
		let medium = scene.fonts.sized(18);
		let small = scene.fonts.sized(14);

		fill(disp, rect(0, 0, width, HEADER_HEIGHT), theme.header)?;
		line(
			disp,
			Point::new(0, HEADER_HEIGHT),
			Point::new(width, HEADER_HEIGHT),
			theme.accent,
			2,
		)?;
		large.draw(disp, &format_clock(scene.now), Point::new(10, 10), theme::YELLOW)?;
		medium.draw(disp, &scene.labels.location, Point::new(width - 200, 12), theme.text)?;

		let next = next_prayer(scene.schedule, scene.now, Filter::All);
		for (i, entry) in scene.schedule.iter().enumerate() {
			let status = classify(i, entry, scene.now, next.map(|n| n.index));
			let style = row_style(status, entry.is_sunrise(), theme);
			let Point { x, y } = row_origin(i);
			rounded(disp, rect(x, y, x + COLUMN_WIDTH, y + ROW_HEIGHT), 6, style.fill, None)?;
			if let Some(bar) = style.bar {
				fill(disp, rect(x, y, x + 4, y + ROW_HEIGHT), bar)?;
			}
			medium.draw(disp, entry.name, Point::new(x + 12, y + 8), style.text)?;
			medium.draw(
				disp,
				&format_clock(entry.time),
				Point::new(x + COLUMN_WIDTH - 60, y + 8),
				style.text,
			)?;
		}

		let footer = height - FOOTER_HEIGHT;
		fill(disp, rect(0, footer, width, height), theme.header)?;
		line(disp, Point::new(0, footer), Point::new(width, footer), theme.accent, 1)?;
		if let Some(next) = next {
			let info = format!("Next: {} in {}", next.entry.name, format_hours_minutes(next.remaining));
			small.draw(disp, &info, Point::new(10, footer + 8), theme.text)?;
		}
		small.draw(disp, &scene.labels.hint, Point::new(width - 100, footer + 8), theme.accent)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		config::Labels,
		font::Fonts,
		theme::ThemeName,
		view::{render, tests::scene},
	};

	#[test]
	fn grid_positions() {
		assert_eq!(row_origin(0), Point::new(10, 50));
		assert_eq!(row_origin(2), Point::new(10, 136));
		assert_eq!(row_origin(3), Point::new(250, 50));
		assert_eq!(row_origin(5), Point::new(250, 136));
	}

	#[test]
	fn sunrise_is_always_warm() {
		let theme = ThemeName::Purple.theme();
		for status in [RowStatus::Next, RowStatus::Passed, RowStatus::Upcoming] {
			let style = row_style(status, true, theme);
			assert_ne!(style.fill, theme.header);
			assert_ne!(style.fill, theme.accent);
			assert_ne!(style.fill, theme::PASSED_FILL);
		}
	}

	#[test]
	fn rows_at_sample_time() {
		let fonts = Fonts::builtin();
		let labels = Labels::default();
		for name in ThemeName::ALL {
			let theme = name.theme();
			let frame = render(&ListView, &scene(name, &fonts, &labels));
			// sampled 3px below each row's top edge, above the text
			let at = |index: usize| {
				let origin = row_origin(index);
				frame.pixel(origin.x as u32 + 100, origin.y as u32 + 3)
			};
			assert_eq!(at(0), theme::PASSED_FILL, "Fajr {name}");
			assert_eq!(at(1), theme::SUNRISE_PASSED_FILL, "Shuruk {name}");
			assert_eq!(at(2), theme::PASSED_FILL, "Dhuhr {name}");
			assert_eq!(at(3), theme.accent, "Asr {name}");
			assert_eq!(at(4), theme.header, "Maghrib {name}");
			assert_eq!(at(5), theme.header, "Isha {name}");
			// accent bar on the next row
			assert_eq!(frame.pixel(252, 70), theme.text);
			// header and footer bars
			assert_eq!(frame.pixel(470, 2), theme.header);
			assert_eq!(frame.pixel(470, 270), theme.header);
		}
	}
}
