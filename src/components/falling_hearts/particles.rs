//! Falling heart particles.
//!
//! Hearts enter above the viewport, fall a fixed distance per tick while
//! swaying and spinning, and are dropped once they pass the bottom margin.
//! Motion is per tick rather than per elapsed second, and the sway is driven
//! by each heart's own height, not by wall-clock time.

use std::f64::consts::TAU;
use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::theme::HeartRanges;
use super::types::{FieldState, Viewport};
use crate::config::FieldConfig;

/// A single falling heart.
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub fall_speed: f64,
	/// Index into the field's glyph list.
	pub glyph: usize,
	pub rotation: f64,
	pub rotation_speed: f64,
	pub opacity: f64,
	pub sway_amplitude: f64,
	pub sway_frequency: f64,
}

impl Heart {
	/// Advance by one tick. Returns `false` once the heart has reached `floor`.
	pub fn advance(&mut self, floor: f64) -> bool {
		self.y += self.fall_speed;
		self.x += (self.y * self.sway_frequency).sin() * self.sway_amplitude;
		self.rotation += self.rotation_speed;
		self.y < floor
	}
}

/// Uniform sample from a half-open range; an empty range yields its start.
fn sample<R: Rng>(rng: &mut R, range: &Range<f64>) -> f64 {
	if range.is_empty() {
		range.start
	} else {
		rng.gen_range(range.clone())
	}
}

/// Owns the live hearts and advances them once per animation tick.
pub struct HeartField<R = SmallRng> {
	pub hearts: Vec<Heart>,
	config: FieldConfig,
	ranges: HeartRanges,
	viewport: Viewport,
	state: FieldState,
	rng: R,
}

impl HeartField<SmallRng> {
	/// Create a stopped, empty field seeded with `seed`.
	pub fn new(config: FieldConfig, ranges: HeartRanges, viewport: Viewport, seed: u64) -> Self {
		Self::with_rng(config, ranges, viewport, SmallRng::seed_from_u64(seed))
	}
}

impl<R: Rng> HeartField<R> {
	pub fn with_rng(config: FieldConfig, ranges: HeartRanges, viewport: Viewport, rng: R) -> Self {
		let config = config.sanitized();
		Self {
			hearts: Vec::with_capacity(config.max_hearts.min(1024)),
			config,
			ranges,
			viewport,
			state: FieldState::Stopped,
			rng,
		}
	}

	/// Add one heart just above the viewport at a random horizontal position.
	pub fn spawn(&mut self) {
		let heart = self.random_heart();
		self.hearts.push(heart);
	}

	fn random_heart(&mut self) -> Heart {
		let width = self.viewport.width;
		let x = if width > 0.0 {
			self.rng.gen_range(0.0..width)
		} else {
			0.0
		};
		let ranges = &self.ranges;
		let rng = &mut self.rng;

		Heart {
			x,
			y: -self.config.cull_margin,
			size: sample(rng, &ranges.size),
			fall_speed: sample(rng, &ranges.fall_speed),
			glyph: rng.gen_range(0..self.config.glyphs.len()),
			rotation: rng.gen_range(0.0..TAU),
			rotation_speed: sample(rng, &ranges.rotation_speed),
			opacity: sample(rng, &ranges.opacity),
			sway_amplitude: sample(rng, &ranges.sway_amplitude),
			sway_frequency: sample(rng, &ranges.sway_frequency),
		}
	}

	/// Advance every heart, drop the ones that left the viewport, then maybe spawn a burst.
	pub fn tick(&mut self) {
		let floor = self.viewport.height + self.config.cull_margin;
		self.hearts.retain_mut(|heart| heart.advance(floor));

		let max = self.config.max_hearts;
		if self.hearts.len() < max && self.rng.gen_bool(self.config.spawn_chance) {
			let burst = self
				.rng
				.gen_range(self.config.burst_min..=self.config.burst_max)
				.min(max - self.hearts.len());
			for _ in 0..burst {
				self.spawn();
			}
		}
	}

	/// Begin running. Returns `true` if the field was stopped.
	pub fn start(&mut self) -> bool {
		let was_stopped = self.state == FieldState::Stopped;
		self.state = FieldState::Running;
		was_stopped
	}

	/// Stop running, keeping the live hearts. Returns `true` if the field was running.
	pub fn stop(&mut self) -> bool {
		let was_running = self.state == FieldState::Running;
		self.state = FieldState::Stopped;
		was_running
	}

	pub fn state(&self) -> FieldState {
		self.state
	}

	pub fn is_running(&self) -> bool {
		self.state == FieldState::Running
	}

	/// Update the bounds used for spawning and culling. Live hearts are not moved.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport = Viewport::new(width, height);
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Glyph text for a heart spawned by this field.
	pub fn glyph(&self, heart: &Heart) -> &str {
		self.config
			.glyphs
			.get(heart.glyph)
			.map(String::as_str)
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(config: FieldConfig, width: f64, height: f64) -> HeartField {
		HeartField::new(config, HeartRanges::default(), Viewport::new(width, height), 7)
	}

	fn no_spawn() -> FieldConfig {
		FieldConfig {
			spawn_chance: 0.0,
			..FieldConfig::default()
		}
	}

	fn heart_at(y: f64, fall_speed: f64) -> Heart {
		Heart {
			x: 400.0,
			y,
			size: 30.0,
			fall_speed,
			glyph: 0,
			rotation: 0.0,
			rotation_speed: 0.01,
			opacity: 0.9,
			sway_amplitude: 2.0,
			sway_frequency: 0.03,
		}
	}

	#[test]
	fn spawned_hearts_stay_within_ranges() {
		let mut f = field(FieldConfig::default(), 800.0, 600.0);
		for _ in 0..2000 {
			f.spawn();
		}

		for h in &f.hearts {
			assert!((20.0..=40.0).contains(&h.size), "size {}", h.size);
			assert!((3.0..=7.0).contains(&h.fall_speed), "fall_speed {}", h.fall_speed);
			assert!((0.7..=1.0).contains(&h.opacity), "opacity {}", h.opacity);
			assert!((1.0..=3.0).contains(&h.sway_amplitude));
			assert!((0.02..=0.05).contains(&h.sway_frequency));
			assert!((-0.05..=0.05).contains(&h.rotation_speed));
			assert!((0.0..TAU).contains(&h.rotation));
			assert!((0.0..800.0).contains(&h.x));
			assert!(h.glyph < 8);
			assert_eq!(h.y, -50.0);
		}
	}

	#[test]
	fn spawning_reaches_every_glyph() {
		let mut f = field(FieldConfig::default(), 800.0, 600.0);
		for _ in 0..500 {
			f.spawn();
		}
		for glyph in 0..8 {
			assert!(f.hearts.iter().any(|h| h.glyph == glyph), "glyph {glyph} never drawn");
		}
	}

	#[test]
	fn forced_single_spawn_on_empty_field() {
		let config = FieldConfig {
			spawn_chance: 1.0,
			burst_min: 1,
			burst_max: 1,
			..FieldConfig::default()
		};
		let mut f = field(config, 800.0, 600.0);
		f.tick();

		assert_eq!(f.hearts.len(), 1);
		assert_eq!(f.hearts[0].y, -50.0);
		assert!((0.0..800.0).contains(&f.hearts[0].x));
	}

	#[test]
	fn burst_size_stays_within_bounds() {
		let config = FieldConfig {
			spawn_chance: 1.0,
			..FieldConfig::default()
		};
		for seed in 0..50 {
			let mut f = HeartField::new(
				config.clone(),
				HeartRanges::default(),
				Viewport::new(800.0, 600.0),
				seed,
			);
			f.tick();
			assert!((1..=3).contains(&f.hearts.len()));
		}
	}

	#[test]
	fn heart_reaching_floor_is_removed_that_tick() {
		let mut f = field(no_spawn(), 800.0, 600.0);
		f.hearts.push(heart_at(646.0, 5.0));
		f.tick();
		assert!(f.hearts.is_empty());
	}

	#[test]
	fn heart_short_of_floor_survives() {
		let mut f = field(no_spawn(), 800.0, 600.0);
		f.hearts.push(heart_at(640.0, 5.0));
		f.tick();
		assert_eq!(f.hearts.len(), 1);
		assert_eq!(f.hearts[0].y, 645.0);
	}

	#[test]
	fn heart_landing_exactly_on_floor_is_removed() {
		let mut f = field(no_spawn(), 800.0, 600.0);
		f.hearts.push(heart_at(645.0, 5.0));
		f.tick();
		assert!(f.hearts.is_empty());
	}

	#[test]
	fn removal_happens_exactly_once_floor_is_reached() {
		let mut f = field(no_spawn(), 800.0, 600.0);
		f.hearts.push(heart_at(-50.0, 4.0));
		let mut ticks = 0;
		while !f.hearts.is_empty() {
			let before = f.hearts[0].y;
			f.tick();
			ticks += 1;
			if before + 4.0 < 650.0 {
				assert_eq!(f.hearts.len(), 1, "removed early at y {}", before + 4.0);
			}
		}
		// -50 + 4 * 175 == 650
		assert_eq!(ticks, 175);
		f.tick();
		assert!(f.hearts.is_empty());
	}

	#[test]
	fn vertical_position_never_decreases() {
		let mut f = field(no_spawn(), 800.0, 600.0);
		for _ in 0..20 {
			f.spawn();
		}
		let mut last: Vec<f64> = f.hearts.iter().map(|h| h.y).collect();
		for _ in 0..50 {
			f.tick();
			let current: Vec<f64> = f.hearts.iter().map(|h| h.y).collect();
			if current.len() == last.len() {
				for (a, b) in last.iter().zip(&current) {
					assert!(b >= a);
				}
			}
			last = current;
		}
	}

	#[test]
	fn advance_applies_sway_and_rotation() {
		let mut h = heart_at(100.0, 5.0);
		assert!(h.advance(650.0));
		assert_eq!(h.y, 105.0);
		assert!((h.x - (400.0 + (105.0f64 * 0.03).sin() * 2.0)).abs() < 1e-12);
		assert!((h.rotation - 0.01).abs() < 1e-12);
		assert_eq!(h.size, 30.0);
		assert_eq!(h.opacity, 0.9);
	}

	#[test]
	fn population_never_exceeds_cap() {
		let config = FieldConfig {
			spawn_chance: 1.0,
			..FieldConfig::default()
		};
		let mut f = field(config, 800.0, 100_000.0);
		for _ in 0..500 {
			f.tick();
			assert!(f.hearts.len() <= 200);
		}
		assert_eq!(f.hearts.len(), 200);
	}

	#[test]
	fn spawning_pauses_at_cap() {
		let config = FieldConfig {
			spawn_chance: 1.0,
			max_hearts: 3,
			..FieldConfig::default()
		};
		let mut f = field(config, 800.0, 100_000.0);
		for _ in 0..3 {
			f.spawn();
		}
		f.tick();
		assert_eq!(f.hearts.len(), 3);
	}

	#[test]
	fn start_and_stop_transitions() {
		let mut f = field(FieldConfig::default(), 800.0, 600.0);
		assert_eq!(f.state(), FieldState::Stopped);

		assert!(f.start());
		assert!(!f.start());
		assert!(f.is_running());

		assert!(f.stop());
		assert_eq!(f.state(), FieldState::Stopped);
	}

	#[test]
	fn repeated_stop_keeps_hearts() {
		let mut f = field(FieldConfig::default(), 800.0, 600.0);
		f.start();
		for _ in 0..10 {
			f.tick();
		}
		let snapshot = f.hearts.clone();

		assert!(f.stop());
		assert!(!f.stop());
		assert_eq!(f.hearts, snapshot);
		assert!(!f.is_running());

		assert!(f.start());
		assert_eq!(f.hearts, snapshot);
	}

	#[test]
	fn resize_moves_bounds_not_hearts() {
		let mut f = field(no_spawn(), 800.0, 600.0);
		f.hearts.push(heart_at(646.0, 5.0));
		f.resize(1024.0, 900.0);

		assert_eq!(f.viewport(), Viewport::new(1024.0, 900.0));
		assert_eq!(f.hearts[0].y, 646.0);
		f.tick();
		assert_eq!(f.hearts.len(), 1);
	}

	#[test]
	fn zero_width_viewport_spawns_at_left_edge() {
		let mut f = field(FieldConfig::default(), 0.0, 600.0);
		f.spawn();
		assert_eq!(f.hearts[0].x, 0.0);
	}

	#[test]
	fn glyph_resolves_configured_text() {
		let config = FieldConfig {
			glyphs: vec!["<3".to_string()],
			..FieldConfig::default()
		};
		let mut f = field(config, 800.0, 600.0);
		f.spawn();
		let heart = f.hearts[0].clone();
		assert_eq!(f.glyph(&heart), "<3");
		assert_eq!(f.glyph(&heart_at(0.0, 3.0)), "<3");
	}

	#[test]
	fn same_seed_gives_same_field() {
		let mut a = field(FieldConfig::default(), 800.0, 600.0);
		let mut b = field(FieldConfig::default(), 800.0, 600.0);
		for _ in 0..30 {
			a.tick();
			b.tick();
		}
		assert_eq!(a.hearts, b.hearts);
	}
}
