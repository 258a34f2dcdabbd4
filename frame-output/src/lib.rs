use std::{convert::Infallible, path::Path};

use embedded_graphics::{
	Pixel,
	pixelcolor::Rgb888,
	prelude::{Dimensions, DrawTarget, Point, RgbColor},
	primitives::Rectangle,
};
use image::{GenericImage, GenericImageView, ImageBuffer, ImageResult, Rgb, RgbImage};

/// In-memory stand-in for the panel: everything drawn ends up in `buffer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutput {
	pub buffer: RgbImage,
}

impl FrameOutput {
	pub fn new(width: u32, height: u32) -> Self {
		FrameOutput {
			buffer: ImageBuffer::new(width, height),
		}
	}

	pub fn filled(width: u32, height: u32, color: Rgb888) -> Self {
		FrameOutput {
			buffer: ImageBuffer::from_pixel(width, height, to_rgb(color)),
		}
	}

	pub fn width(&self) -> u32 {
		self.buffer.width()
	}

	pub fn height(&self) -> u32 {
		self.buffer.height()
	}

	pub fn pixel(&self, x: u32, y: u32) -> Rgb888 {
		let Rgb([r, g, b]) = *self.buffer.get_pixel(x, y);
		Rgb888::new(r, g, b)
	}

	/// Paste `other` with its top left corner at (x, y), clipping whatever
	/// does not fit.
	pub fn copy_from(&mut self, other: &FrameOutput, x: u32, y: u32) {
		if x >= self.width() || y >= self.height() {
			return;
		}
		let w = other.width().min(self.width() - x);
		let h = other.height().min(self.height() - y);
		let src = other.buffer.view(0, 0, w, h);
		let _ = self.buffer.copy_from(&*src, x, y);
	}

	/// Reduce every pixel to 5-6-5 bits and expand it again, which is what the
	/// real panel shows.
	pub fn quantize_rgb565(&mut self) {
		for Rgb([r, g, b]) in self.buffer.pixels_mut() {
			*r = expand(*r >> 3, 5);
			*g = expand(*g >> 2, 6);
			*b = expand(*b >> 3, 5);
		}
	}

	pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
		self.buffer.save(path)
	}
}

fn to_rgb(color: Rgb888) -> Rgb<u8> {
	Rgb([color.r(), color.g(), color.b()])
}

// replicate the top bits into the freed low bits so white stays white
fn expand(value: u8, bits: u32) -> u8 {
	let v = value << (8 - bits);
	v | (v >> bits)
}

impl DrawTarget for FrameOutput {
	type Color = Rgb888;

	type Error = Infallible;

	fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
	where
		I: IntoIterator<Item = Pixel<Self::Color>>,
	{
		for Pixel(pos, color) in pixels {
			if pos.x < 0 || pos.y < 0 || pos.x as u32 >= self.buffer.width() || pos.y as u32 >= self.buffer.height() {
				continue;
			}
			self.buffer.put_pixel(pos.x as u32, pos.y as u32, to_rgb(color));
		}
		Ok(())
	}

	fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
		let area = area.intersection(&self.bounding_box());
		let Some(bottom_right) = area.bottom_right() else {
			return Ok(());
		};
		let Point { x: x0, y: y0 } = area.top_left;
		let rgb = to_rgb(color);
		for y in y0..=bottom_right.y {
			for x in x0..=bottom_right.x {
				self.buffer.put_pixel(x as u32, y as u32, rgb);
			}
		}
		Ok(())
	}
}

impl Dimensions for FrameOutput {
	fn bounding_box(&self) -> Rectangle {
		Rectangle::new((0, 0).into(), (self.buffer.width(), self.buffer.height()).into())
	}
}

#[cfg(test)]
mod tests {
	use embedded_graphics::{
		Drawable,
		prelude::{Primitive, Size},
		primitives::PrimitiveStyle,
	};

	use super::*;

	#[test]
	fn filled_frame_has_size_and_color() {
		let frame = FrameOutput::filled(48, 27, Rgb888::new(0, 16, 0));
		assert_eq!((frame.width(), frame.height()), (48, 27));
		assert_eq!(frame.pixel(47, 26), Rgb888::new(0, 16, 0));
	}

	#[test]
	fn drawing_outside_is_clipped() {
		let mut frame = FrameOutput::new(10, 10);
		Rectangle::new(Point::new(-5, -5), Size::new(30, 8))
			.into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
			.draw(&mut frame)
			.unwrap();
		assert_eq!(frame.pixel(0, 0), Rgb888::WHITE);
		assert_eq!(frame.pixel(9, 2), Rgb888::WHITE);
		assert_eq!(frame.pixel(9, 3), Rgb888::BLACK);

		frame.fill_solid(&Rectangle::new(Point::new(8, 8), Size::new(5, 5)), Rgb888::RED).unwrap();
		assert_eq!(frame.pixel(9, 9), Rgb888::RED);
		assert_eq!(frame.pixel(7, 7), Rgb888::BLACK);
	}

	#[test]
	fn copy_from_pastes_and_clips() {
		let mut canvas = FrameOutput::filled(20, 10, Rgb888::new(30, 30, 30));
		let panel = FrameOutput::filled(8, 8, Rgb888::BLUE);
		canvas.copy_from(&panel, 15, 5);
		assert_eq!(canvas.pixel(15, 5), Rgb888::BLUE);
		assert_eq!(canvas.pixel(19, 9), Rgb888::BLUE);
		assert_eq!(canvas.pixel(14, 5), Rgb888::new(30, 30, 30));
	}

	#[test]
	fn rgb565_keeps_extremes() {
		let mut frame = FrameOutput::filled(2, 1, Rgb888::WHITE);
		frame.buffer.put_pixel(1, 0, Rgb([90, 180, 255]));
		frame.quantize_rgb565();
		assert_eq!(frame.pixel(0, 0), Rgb888::WHITE);
		// 90 -> 0b01011 -> 90, 180 -> 0b101101 -> 182
		assert_eq!(frame.pixel(1, 0), Rgb888::new(90, 182, 255));
	}
}
