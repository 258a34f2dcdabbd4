use std::{fs, path::Path};

use ab_glyph::{point, Font as _, FontArc, PxScale, ScaleFont as _};
use embedded_graphics::{
	mono_font::{
		ascii::{FONT_10X20, FONT_6X10, FONT_7X13, FONT_9X15},
		MonoFont, MonoTextStyle,
	},
	pixelcolor::Rgb888,
	prelude::{DrawTarget, Point},
	text::{renderer::TextRenderer, Baseline, Text},
	Drawable, Pixel,
};
use tracing::debug;

use crate::Error;

/// The typeface all views draw with: a TrueType file if one could be loaded,
/// otherwise the mono fonts compiled into embedded-graphics.
#[derive(Clone)]
pub struct Fonts {
	face: Option<FontArc>,
}

impl Fonts {
	pub fn builtin() -> Self {
		Fonts { face: None }
	}

	/// Try each candidate in order. Never fails: if none of them loads, the
	/// built-in fonts are used.
	pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Self {
		for path in candidates {
			let path = path.as_ref();
			match load_face(path) {
				Ok(face) => {
					debug!("using font {}", path.display());
					return Fonts { face: Some(face) };
				},
				Err(e) => debug!("font not usable: {}", e),
			}
		}
		debug!("no TrueType font available, falling back to built-in font");
		Self::builtin()
	}

	pub fn is_builtin(&self) -> bool {
		self.face.is_none()
	}

	/// A handle drawing at roughly `px` pixels per em.
	pub fn sized(&self, px: u32) -> Font {
		match &self.face {
			Some(face) => {
				let px = px as f32;
				let scale = match face.units_per_em() {
					Some(units) => PxScale::from(px * face.height_unscaled() / units),
					None => PxScale::from(px),
				};
				Font::TrueType {
					face: face.clone(),
					scale,
				}
			},
			None => Font::Mono(builtin_for(px)),
		}
	}
}

fn load_face(path: &Path) -> crate::Result<FontArc> {
	let data = fs::read(path).map_err(|source| Error::Io {
		path: path.to_owned(),
		source,
	})?;
	FontArc::try_from_vec(data).map_err(|source| Error::Font {
		path: path.to_owned(),
		source,
	})
}

fn builtin_for(px: u32) -> &'static MonoFont<'static> {
	match px {
		px if px >= 24 => &FONT_10X20,
		px if px >= 18 => &FONT_9X15,
		px if px >= 14 => &FONT_7X13,
		_ => &FONT_6X10,
	}
}

#[derive(Clone)]
pub enum Font {
	TrueType { face: FontArc, scale: PxScale },
	Mono(&'static MonoFont<'static>),
}

impl Font {
	/// Horizontal extent of `text` in pixels.
	pub fn measure(&self, text: &str) -> u32 {
		match self {
			Font::TrueType { face, scale } => {
				let scaled = face.as_scaled(*scale);
				let mut width = 0.0;
				let mut prev = None;
				for c in text.chars() {
					let id = scaled.glyph_id(c);
					if let Some(prev) = prev {
						width += scaled.kern(prev, id);
					}
					width += scaled.h_advance(id);
					prev = Some(id);
				}
				width.ceil() as u32
			},
			Font::Mono(font) => {
				MonoTextStyle::new(*font, Rgb888::new(0, 0, 0))
					.measure_string(text, Point::zero(), Baseline::Top)
					.bounding_box
					.size
					.width
			},
		}
	}

	/// Draw `text` with its top left corner (ascender line) at `top_left`.
	pub fn draw<D>(&self, disp: &mut D, text: &str, top_left: Point, color: Rgb888) -> Result<(), D::Error>
	where
		D: DrawTarget<Color = Rgb888>,
	{
		match self {
			Font::TrueType { face, scale } => {
				let scaled = face.as_scaled(*scale);
				let baseline = top_left.y as f32 + scaled.ascent();
				let mut caret = top_left.x as f32;
				let mut prev = None;
				let mut pixels = Vec::new();
				for c in text.chars() {
					let id = scaled.glyph_id(c);
					if let Some(prev) = prev {
						caret += scaled.kern(prev, id);
					}
					prev = Some(id);
					let glyph = id.with_scale_and_position(*scale, point(caret, baseline));
					caret += scaled.h_advance(id);
					let Some(outline) = face.outline_glyph(glyph) else {
						continue;
					};
					let bounds = outline.px_bounds();
					// no blending: coverage is cut at one half
					outline.draw(|x, y, coverage| {
						if coverage >= 0.5 {
							pixels.push(Pixel(
								Point::new(bounds.min.x as i32 + x as i32, bounds.min.y as i32 + y as i32),
								color,
							));
						}
					});
				}
				disp.draw_iter(pixels)
			},
			Font::Mono(font) => {
				Text::with_baseline(text, top_left, MonoTextStyle::new(*font, color), Baseline::Top).draw(disp)?;
				Ok(())
			},
		}
	}

	/// Draw `text` horizontally centered on `center_x`.
	pub fn draw_centered<D>(&self, disp: &mut D, text: &str, center_x: i32, y: i32, color: Rgb888) -> Result<(), D::Error>
	where
		D: DrawTarget<Color = Rgb888>,
	{
		let x = center_x - self.measure(text) as i32 / 2;
		self.draw(disp, text, Point::new(x, y), color)
	}
}
