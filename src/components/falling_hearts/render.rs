//! Canvas rendering for the heart field.
//!
//! Each frame clears the full surface, then draws every live heart as a
//! rotated emoji glyph with its own opacity and a shared drop shadow.

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

use super::particles::{Heart, HeartField};
use super::theme::HeartTheme;

/// Renders the current heart set onto the canvas.
pub fn render<R: Rng>(field: &HeartField<R>, ctx: &CanvasRenderingContext2d, theme: &HeartTheme) {
	let viewport = field.viewport();
	ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

	let shadow_color = theme.shadow.color.to_css();
	for heart in &field.hearts {
		draw_heart(ctx, theme, &shadow_color, heart, field.glyph(heart));
	}
}

fn draw_heart(
	ctx: &CanvasRenderingContext2d,
	theme: &HeartTheme,
	shadow_color: &str,
	heart: &Heart,
	glyph: &str,
) {
	ctx.save();

	ctx.set_global_alpha(heart.opacity);
	let _ = ctx.translate(heart.x, heart.y);
	let _ = ctx.rotate(heart.rotation);

	ctx.set_font(&theme.glyph_font(heart.size));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	ctx.set_shadow_color(shadow_color);
	ctx.set_shadow_blur(theme.shadow.blur);
	ctx.set_shadow_offset_x(theme.shadow.offset_x);
	ctx.set_shadow_offset_y(theme.shadow.offset_y);

	let _ = ctx.fill_text(glyph, 0.0, 0.0);

	ctx.restore();
}
