use embedded_graphics::{
	pixelcolor::Rgb888,
	prelude::{DrawTarget, Point},
};

use super::{rect, rounded, Scene, View};
use crate::{
	schedule::{format_clock, format_countdown, next_prayer, Filter},
	theme, HEIGHT, WIDTH,
};

const BOX_WIDTH: i32 = 200;
const BOX_HEIGHT: i32 = 60;
const BOX_TOP: i32 = 155;

/// The next prayer in large type with a countdown box. Sunrise is skipped.
pub struct CountdownView;

impl<D: DrawTarget<Color = Rgb888>> View<D> for CountdownView {
	fn id(&self) -> &'static str {
		"countdown"
	}

	fn title(&self) -> &'static str {
		"Countdown"
	}

	fn draw(&self, disp: &mut D, scene: &Scene) -> Result<(), D::Error> {
		let colors = scene.theme;
		let center = WIDTH as i32 / 2;
		let huge = scene.fonts.sized(48);
		let large = scene.fonts.sized(32);
		let medium = scene.fonts.sized(20);
		let small = scene.fonts.sized(14);

		let next = next_prayer(scene.schedule, scene.now, Filter::Canonical);
		let (name, time, countdown) = match next {
			Some(next) => (
				next.entry.name,
				format_clock(next.entry.time),
				format_countdown(next.remaining, scene.seconds),
			),
			None => ("-", "--:--".to_owned(), "--:--:--".to_owned()),
		};

		medium.draw_centered(disp, "NEXT", center, 20, theme::CAPTION)?;
		huge.draw_centered(disp, name, center, 55, colors.accent)?;
		large.draw_centered(disp, &time, center, 115, colors.text)?;

		let left = center - BOX_WIDTH / 2;
		rounded(
			disp,
			rect(left, BOX_TOP, left + BOX_WIDTH, BOX_TOP + BOX_HEIGHT),
			10,
			colors.header,
			Some((colors.accent, 2)),
		)?;
		large.draw_centered(disp, &countdown, center, BOX_TOP + 12, colors.text)?;
		small.draw_centered(disp, "remaining", center, BOX_TOP + BOX_HEIGHT + 5, theme::CAPTION)?;

		let bottom = HEIGHT as i32;
		medium.draw(
			disp,
			&format!("{}:{:02}", format_clock(scene.now), scene.seconds),
			Point::new(10, bottom - 25),
			theme::FOOTER,
		)?;
		small.draw(disp, &scene.labels.location, Point::new(WIDTH as i32 - 150, bottom - 20), theme::FOOTER)?;
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
	fn countdown_box() {
		let fonts = Fonts::builtin();
		let labels = Labels::default();
		for name in ThemeName::ALL {
			let colors = name.theme();
			let frame = render(&CountdownView, &scene(name, &fonts, &labels));
			// border, inside, outside
			assert_eq!(frame.pixel(140, 185), colors.accent, "{name}");
			assert_eq!(frame.pixel(240, 160), colors.header, "{name}");
			assert_eq!(frame.pixel(135, 185), colors.background, "{name}");
		}
	}

	#[test]
	fn big_name_uses_accent() {
		let fonts = Fonts::builtin();
		let labels = Labels::default();
		let colors = ThemeName::Blue.theme();
		let frame = render(&CountdownView, &scene(ThemeName::Blue, &fonts, &labels));
		let accent = (0..frame.width())
			.flat_map(|x| (55..110).map(move |y| (x, y)))
			.filter(|&(x, y)| frame.pixel(x, y) == colors.accent)
			.map(|(x, _)| x)
			.collect::<Vec<_>>();
		assert!(!accent.is_empty());
		// "Asr" in 10x20 cells around the middle
		assert!(accent.iter().all(|&x| (225..255).contains(&x)), "{accent:?}");
	}
}
