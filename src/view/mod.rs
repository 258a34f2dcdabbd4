use std::convert::Infallible;

use embedded_graphics::{
	pixelcolor::Rgb888,
	prelude::{DrawTarget, Point, Primitive, Size},
	primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment},
	Drawable,
};
use frame_output::FrameOutput;
use time::Time;

use crate::{config::Labels, font::Fonts, schedule::PrayerEntry, theme::Theme, HEIGHT, WIDTH};

mod clock;
mod countdown;
mod list;

pub use clock::{hour_hand_angle, minute_hand_angle, second_hand_angle, ClockView};
pub use countdown::CountdownView;
pub use list::ListView;

/// Everything one rendering depends on.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
	pub theme: &'a Theme,
	pub now: Time,
	/// Shown wherever the panel would show seconds.
	pub seconds: u8,
	pub schedule: &'a [PrayerEntry],
	pub fonts: &'a Fonts,
	pub labels: &'a Labels,
}

pub trait View<D: DrawTarget<Color = Rgb888>> {
	/// Used in file names.
	fn id(&self) -> &'static str;
	/// Caption on the showcase image.
	fn title(&self) -> &'static str;
	/// Draw onto a display already cleared to the theme background.
	fn draw(&self, disp: &mut D, scene: &Scene) -> Result<(), D::Error>;
}

pub fn views<D: DrawTarget<Color = Rgb888>>() -> Vec<Box<dyn View<D>>> {
	vec![Box::new(ListView), Box::new(ClockView), Box::new(CountdownView)]
}

pub fn render(view: &dyn View<FrameOutput>, scene: &Scene) -> FrameOutput {
	let mut frame = FrameOutput::filled(WIDTH, HEIGHT, scene.theme.background);
	infallible(view.draw(&mut frame, scene));
	frame
}

pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
	match result {
		Ok(value) => value,
		Err(never) => match never {},
	}
}

/// Rectangle spanning both corners, inclusive.
fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rectangle {
	Rectangle::with_corners(Point::new(x0, y0), Point::new(x1, y1))
}

fn fill<D: DrawTarget<Color = Rgb888>>(disp: &mut D, area: Rectangle, color: Rgb888) -> Result<(), D::Error> {
	area.into_styled(PrimitiveStyle::with_fill(color)).draw(disp)
}

fn rounded<D: DrawTarget<Color = Rgb888>>(
	disp: &mut D,
	area: Rectangle,
	radius: u32,
	fill: Rgb888,
	border: Option<(Rgb888, u32)>,
) -> Result<(), D::Error> {
	let mut style = PrimitiveStyleBuilder::new().fill_color(fill);
	if let Some((color, width)) = border {
		style = style
			.stroke_color(color)
			.stroke_width(width)
			.stroke_alignment(StrokeAlignment::Inside);
	}
	RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
		.into_styled(style.build())
		.draw(disp)
}

fn line<D: DrawTarget<Color = Rgb888>>(
	disp: &mut D,
	start: Point,
	end: Point,
	color: Rgb888,
	width: u32,
) -> Result<(), D::Error> {
	Line::new(start, end)
		.into_styled(PrimitiveStyle::with_stroke(color, width))
		.draw(disp)
}

#[cfg(test)]
pub(crate) mod tests {
	use time::macros::time;

	use super::*;
	use crate::{schedule::SCHEDULE, theme::ThemeName};

	pub(crate) fn scene<'a>(theme: ThemeName, fonts: &'a Fonts, labels: &'a Labels) -> Scene<'a> {
		Scene {
			theme: theme.theme(),
			now: time!(14:30),
			seconds: 30,
			schedule: &SCHEDULE,
			fonts,
			labels,
		}
	}

	#[test]
	fn every_view_fills_the_panel() {
		let fonts = Fonts::builtin();
		let labels = Labels::default();
		for view in views::<FrameOutput>() {
			for theme in ThemeName::ALL {
				let frame = render(view.as_ref(), &scene(theme, &fonts, &labels));
				assert_eq!((frame.width(), frame.height()), (WIDTH, HEIGHT), "{} {}", view.id(), theme);
			}
		}
	}

	#[test]
	fn view_ids() {
		let ids: Vec<_> = views::<FrameOutput>().iter().map(|v| v.id()).collect();
		assert_eq!(ids, ["list", "clock", "countdown"]);
	}

	#[test]
	fn empty_schedule_still_renders() {
		let fonts = Fonts::builtin();
		let labels = Labels::default();
		for view in views::<FrameOutput>() {
			let mut scene = scene(ThemeName::Blue, &fonts, &labels);
			scene.schedule = &[];
			let frame = render(view.as_ref(), &scene);
			assert_eq!(frame.width(), WIDTH);
		}
	}
}
