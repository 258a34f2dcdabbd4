use embedded_graphics::{
	pixelcolor::Rgb888,
	prelude::{DrawTarget, Point, Primitive},
	primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment},
	Drawable,
};
use time::Time;

use super::{line, rect, rounded, Scene, View};
use crate::{
	schedule::{classify, format_clock, format_short, next_prayer, Filter, RowStatus},
	theme, HEIGHT,
};

const CENTER: Point = Point::new(130, HEIGHT as i32 / 2);
const RADIUS: i32 = 100;
const HOUR_HAND: f32 = 50.0;
const MINUTE_HAND: f32 = 70.0;
const SECOND_HAND: f32 = 80.0;
const RIGHT: i32 = 260;
const LIST_TOP: i32 = 65;
const ROW_HEIGHT: i32 = 30;

/// Analog clock on the left, digital time and the day's prayers on the right.
pub struct ClockView;

// All angles in degrees, clockwise, 0 pointing at three o'clock.

pub fn hour_hand_angle(time: Time) -> f32 {
	((time.hour() % 12) as f32 + time.minute() as f32 / 60.0) * 30.0 - 90.0
}

pub fn minute_hand_angle(time: Time) -> f32 {
	time.minute() as f32 * 6.0 - 90.0
}

pub fn second_hand_angle(seconds: u8) -> f32 {
	seconds as f32 * 6.0 - 90.0
}

fn polar(radius: f32, degrees: f32) -> Point {
	let (sin, cos) = degrees.to_radians().sin_cos();
	CENTER + Point::new((radius * cos).round() as i32, (radius * sin).round() as i32)
}

fn circle(radius: i32) -> Circle {
	Circle::with_center(CENTER, (2 * radius + 1) as u32)
}

impl<D: DrawTarget<Color = Rgb888>> View<D> for ClockView {
	fn id(&self) -> &'static str {
		"clock"
	}

	fn title(&self) -> &'static str {
		"Clock View"
	}

	fn draw(&self, disp: &mut D, scene: &Scene) -> Result<(), D::Error> {
		let colors = scene.theme;
		let large = scene.fonts.sized(28);
		let medium = scene.fonts.sized(18);
		let small = scene.fonts.sized(12);

		// face
		circle(RADIUS)
			.into_styled(
				PrimitiveStyleBuilder::new()
					.stroke_color(colors.accent)
					.stroke_width(3)
					.stroke_alignment(StrokeAlignment::Inside)
					.build(),
			)
			.draw(disp)?;
		circle(RADIUS - 5)
			.into_styled(PrimitiveStyle::with_fill(colors.header))
			.draw(disp)?;
		for hour in 0..12 {
			let angle = hour as f32 * 30.0 - 90.0;
			let inner = polar((RADIUS - 15) as f32, angle);
			let outer = polar((RADIUS - 8) as f32, angle);
			line(disp, inner, outer, colors.text, 2)?;
		}

		// hands, seconds on top
		line(disp, CENTER, polar(HOUR_HAND, hour_hand_angle(scene.now)), colors.text, 4)?;
		line(disp, CENTER, polar(MINUTE_HAND, minute_hand_angle(scene.now)), colors.accent, 3)?;
		line(disp, CENTER, polar(SECOND_HAND, second_hand_angle(scene.seconds)), theme::YELLOW, 1)?;
		circle(6).into_styled(PrimitiveStyle::with_fill(colors.accent)).draw(disp)?;

		large.draw(disp, &format_clock(scene.now), Point::new(RIGHT, 8), colors.text)?;
		medium.draw(
			disp,
			&format!(":{:02}", scene.seconds),
			Point::new(RIGHT + 90, 15),
			colors.accent,
		)?;
		small.draw(disp, &scene.labels.date, Point::new(RIGHT, 45), colors.text)?;

		let next = next_prayer(scene.schedule, scene.now, Filter::All);
		for (i, entry) in scene.schedule.iter().enumerate() {
			let y = LIST_TOP + i as i32 * ROW_HEIGHT;
			let status = classify(i, entry, scene.now, next.map(|n| n.index));
			if status == RowStatus::Next {
				rounded(disp, rect(RIGHT - 5, y, RIGHT + 200, y + ROW_HEIGHT - 4), 4, colors.header, None)?;
			}
			let color = match (status, entry.is_sunrise()) {
				(RowStatus::Passed, true) => theme::SUNRISE_PASSED_TEXT,
				(_, true) => theme::SUNRISE_TEXT,
				(RowStatus::Passed, false) => theme::PASSED_TEXT,
				(RowStatus::Next, false) => colors.accent,
				(RowStatus::Upcoming, false) => colors.text,
			};
			let name: String = entry.name.chars().take(5).collect();
			medium.draw(disp, &name, Point::new(RIGHT, y + 3), color)?;
			medium.draw(disp, &format_clock(entry.time), Point::new(RIGHT + 70, y + 3), color)?;
			if let Some(next) = next.filter(|n| n.index == i) {
				medium.draw(
					disp,
					&format_short(next.remaining),
					Point::new(RIGHT + 140, y + 3),
					colors.accent,
				)?;
			}
		}
		Ok(())
	}
}
