//! Small value types shared by the heart field and its component.

/// Dimensions of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Whether the field is currently driven by the animation loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
	#[default]
	Stopped,
	Running,
}
