//! Visual styling for the falling hearts.
//!
//! Holds the attribute ranges new hearts are drawn from and the fixed drop
//! shadow painted behind each glyph.

use std::ops::Range;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Soft shadow drawn under every glyph so hearts stay visible on light backgrounds.
#[derive(Clone, Debug)]
pub struct ShadowStyle {
	pub color: Color,
	pub blur: f64,
	pub offset_x: f64,
	pub offset_y: f64,
}

/// Uniform ranges each freshly spawned heart samples its attributes from.
///
/// All ranges are half-open, matching `Rng::gen_range`.
#[derive(Clone, Debug)]
pub struct HeartRanges {
	/// Glyph size in pixels.
	pub size: Range<f64>,
	/// Vertical pixels per tick.
	pub fall_speed: Range<f64>,
	/// Radians per tick.
	pub rotation_speed: Range<f64>,
	pub opacity: Range<f64>,
	/// Horizontal sway magnitude.
	pub sway_amplitude: Range<f64>,
	/// Sway rate, coupled to vertical position.
	pub sway_frequency: Range<f64>,
}

impl Default for HeartRanges {
	fn default() -> Self {
		Self {
			size: 20.0..40.0,
			fall_speed: 3.0..7.0,
			rotation_speed: -0.05..0.05,
			opacity: 0.7..1.0,
			sway_amplitude: 1.0..3.0,
			sway_frequency: 0.02..0.05,
		}
	}
}

/// Complete visual theme for the heart canvas.
#[derive(Clone, Debug)]
pub struct HeartTheme {
	/// Font family used for the emoji glyphs.
	pub font_family: &'static str,
	pub shadow: ShadowStyle,
	pub ranges: HeartRanges,
}

impl HeartTheme {
	/// CSS font shorthand for a glyph of the given pixel size.
	pub fn glyph_font(&self, size: f64) -> String {
		format!("{}px {}", size, self.font_family)
	}
}

impl Default for HeartTheme {
	fn default() -> Self {
		Self {
			font_family: "Arial",
			shadow: ShadowStyle {
				color: Color::rgba(0, 0, 0, 0.3),
				blur: 3.0,
				offset_x: 1.0,
				offset_y: 1.0,
			},
			ranges: HeartRanges::default(),
		}
	}
}
