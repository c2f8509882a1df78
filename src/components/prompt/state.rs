//! Behaviour of the evasive "No" button.

use rand::Rng;

/// Gap kept between an escaping button and the edges of its container.
pub const ESCAPE_PADDING: f64 = 20.0;

/// Width and height of a laid-out element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

/// What the page should do after a click on "No".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoResponse {
	/// Swap the question for the plea and flash the screen.
	Plead,
	/// Treat the click as a "Yes".
	Accept,
	/// Move the button somewhere else.
	Escape,
}

/// Click counter and escape flag for the "No" button.
#[derive(Clone, Debug, Default)]
pub struct NoButton {
	clicks: u32,
	escaping: bool,
}

impl NoButton {
	pub fn click(&mut self) -> NoResponse {
		self.clicks = self.clicks.saturating_add(1);
		match self.clicks {
			1 => NoResponse::Plead,
			2 => NoResponse::Accept,
			_ => NoResponse::Escape,
		}
	}

	pub fn clicks(&self) -> u32 {
		self.clicks
	}

	/// Hover and touch only move the button after the third click.
	pub fn should_escape_on_hover(&self) -> bool {
		self.clicks >= 3
	}

	/// Switch into escaping mode. Returns `true` only the first time.
	pub fn begin_escape(&mut self) -> bool {
		!std::mem::replace(&mut self.escaping, true)
	}

	pub fn is_escaping(&self) -> bool {
		self.escaping
	}
}

/// Pick a random top-left offset for the button inside its container.
///
/// Both coordinates are at least `padding`; the far edge keeps `padding` of
/// room when the container is large enough.
pub fn escape_position<R: Rng>(container: Size, button: Size, padding: f64, rng: &mut R) -> (f64, f64) {
	let max_x = container.width - button.width - padding;
	let max_y = container.height - button.height - padding;
	let x = padding.max(rng.gen_range(0.0..1.0) * max_x);
	let y = padding.max(rng.gen_range(0.0..1.0) * max_y);
	(x, y)
}
