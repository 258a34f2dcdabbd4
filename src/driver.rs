use std::{fs, path::PathBuf};

use frame_output::FrameOutput;
use time::Time;
use tracing::info;

use crate::{
	config::Config,
	font::Fonts,
	schedule::SCHEDULE,
	theme::{self, ThemeName},
	view::{infallible, render, views, ListView, Scene},
	Error, Result, HEIGHT, WIDTH,
};

const SHOWCASE_MARGIN: u32 = 5;
const SHOWCASE_TOP: u32 = 30;

fn scene<'a>(config: &'a Config, fonts: &'a Fonts, theme: ThemeName, now: Time) -> Scene<'a> {
	Scene {
		theme: theme.theme(),
		now,
		seconds: config.seconds,
		schedule: &SCHEDULE,
		fonts,
		labels: &config.labels,
	}
}

/// Render every view in every theme plus the main and showcase images into
/// the output directory. Returns the written paths in order.
pub fn generate(config: &Config, fonts: &Fonts) -> Result<Vec<PathBuf>> {
	let now = config.now()?;
	fs::create_dir_all(&config.output_dir).map_err(|source| Error::Io {
		path: config.output_dir.clone(),
		source,
	})?;

	let mut written = Vec::new();
	for view in views::<FrameOutput>() {
		for theme in ThemeName::ALL {
			let frame = render(view.as_ref(), &scene(config, fonts, theme, now));
			written.push(save(config, frame, &format!("display_{}_{}.png", view.id(), theme))?);
		}
	}

	let main = render(&ListView, &scene(config, fonts, config.showcase_theme, now));
	written.push(save(config, main, "display_main.png")?);
	written.push(save(config, showcase(config, fonts, now), "display_showcase.png")?);
	Ok(written)
}

/// All views side by side, each with a caption above it.
pub fn showcase(config: &Config, fonts: &Fonts, now: Time) -> FrameOutput {
	let views = views::<FrameOutput>();
	let count = views.len() as u32;
	let mut canvas = FrameOutput::filled(
		WIDTH * count + SHOWCASE_MARGIN * (count + 1),
		HEIGHT + SHOWCASE_TOP + 10,
		theme::SHOWCASE_BACKGROUND,
	);
	let caption = fonts.sized(16);
	for (i, view) in views.iter().enumerate() {
		let x = SHOWCASE_MARGIN + i as u32 * (WIDTH + SHOWCASE_MARGIN);
		let panel = render(view.as_ref(), &scene(config, fonts, config.showcase_theme, now));
		canvas.copy_from(&panel, x, SHOWCASE_TOP);
		infallible(caption.draw_centered(
			&mut canvas,
			view.title(),
			(x + WIDTH / 2) as i32,
			8,
			theme::SHOWCASE_CAPTION,
		));
	}
	canvas
}

fn save(config: &Config, mut frame: FrameOutput, name: &str) -> Result<PathBuf> {
	if config.panel.rgb565 {
		frame.quantize_rgb565();
	}
	let path = config.output_dir.join(name);
	frame.save(&path).map_err(|source| Error::Image {
		path: path.clone(),
		source,
	})?;
	info!("Created: {}", path.display());
	Ok(path)
}

#[cfg(test)]
mod tests {
	use time::macros::time;

	use super::*;

	#[test]
	fn showcase_layout() {
		let config = Config::default();
		let fonts = Fonts::builtin();
		let canvas = showcase(&config, &fonts, time!(14:30));
		assert_eq!((canvas.width(), canvas.height()), (WIDTH * 3 + 20, HEIGHT + 40));
		assert_eq!(canvas.pixel(2, 100), theme::SHOWCASE_BACKGROUND);
		assert_eq!(canvas.pixel(487, 100), theme::SHOWCASE_BACKGROUND);
		// panel corners carry the header colour of the list and the background
		// of the other two
		let green = ThemeName::Green.theme();
		assert_eq!(canvas.pixel(5, 30), green.header);
		assert_eq!(canvas.pixel(490, 30), green.background);
		assert_eq!(canvas.pixel(975 + WIDTH - 1, 30), green.background);
		assert_eq!(canvas.pixel(975 + WIDTH, 30), theme::SHOWCASE_BACKGROUND);
	}

	#[test]
	fn showcase_captions_are_drawn() {
		let canvas = showcase(&Config::default(), &Fonts::builtin(), time!(14:30));
		for panel in 0..3 {
			let x0 = 5 + panel * (WIDTH + 5);
			let lit = (x0..x0 + WIDTH)
				.flat_map(|x| (0..30).map(move |y| (x, y)))
				.any(|(x, y)| canvas.pixel(x, y) == theme::SHOWCASE_CAPTION);
			assert!(lit, "panel {panel}");
		}
	}

	#[test]
	fn unwritable_output_dir_fails() {
		let dir = tempfile::tempdir().unwrap();
		let blocker = dir.path().join("file");
		fs::write(&blocker, b"").unwrap();
		let config = Config {
			output_dir: blocker.join("screenshots"),
			..Config::default()
		};
		assert!(matches!(generate(&config, &Fonts::builtin()), Err(Error::Io { .. })));
	}
}
