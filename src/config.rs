//! Page configuration loaded from the DOM.
//!
//! The host page may embed a `<script id="valentine-config" type="application/json">`
//! element. Every field is optional; anything missing keeps its default.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "valentine-config";

/// Glyphs drawn by the heart field when none are configured.
pub const DEFAULT_GLYPHS: [&str; 8] = ["💖", "💗", "💓", "💞", "💘", "💝", "💕", "🌹"];

/// Tuning for the falling heart field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Spawning pauses while this many hearts are alive.
	pub max_hearts: usize,
	/// Probability that a tick spawns a burst.
	pub spawn_chance: f64,
	pub burst_min: usize,
	pub burst_max: usize,
	/// Distance above the viewport where hearts appear and below it where they are culled.
	pub cull_margin: f64,
	pub glyphs: Vec<String>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			max_hearts: 200,
			spawn_chance: 0.8,
			burst_min: 1,
			burst_max: 3,
			cull_margin: 50.0,
			glyphs: DEFAULT_GLYPHS.iter().map(|g| g.to_string()).collect(),
		}
	}
}

impl FieldConfig {
	/// Clamp values so that sampling from them can never panic.
	pub fn sanitized(mut self) -> Self {
		self.spawn_chance = if self.spawn_chance.is_nan() {
			0.0
		} else {
			self.spawn_chance.clamp(0.0, 1.0)
		};
		if self.burst_min > self.burst_max {
			std::mem::swap(&mut self.burst_min, &mut self.burst_max);
		}
		if self.cull_margin.is_nan() || self.cull_margin < 0.0 {
			self.cull_margin = 0.0;
		}
		self.glyphs.retain(|g| !g.is_empty());
		if self.glyphs.is_empty() {
			self.glyphs = Self::default().glyphs;
		}
		self
	}
}

/// Texts and timings for the whole page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
	pub question: String,
	/// Replaces the question after the first "No".
	pub plea: String,
	/// How long the flash overlay stays visible, in milliseconds.
	pub flash_ms: u64,
	pub hearts: FieldConfig,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			question: "Will you be my Valentine? 💖".to_string(),
			plea: "😢 please ek bar soch lo — mar jayega bechara tumhare bina...".to_string(),
			flash_ms: 600,
			hearts: FieldConfig::default(),
		}
	}
}

/// Parse a JSON configuration, returning `None` (and logging) when it is malformed.
pub fn parse_config(json_text: &str) -> Option<PageConfig> {
	match serde_json::from_str::<PageConfig>(json_text) {
		Ok(config) => Some(PageConfig {
			hearts: config.hearts.sanitized(),
			..config
		}),
		Err(e) => {
			warn!("valentine: failed to parse page config: {}", e);
			None
		}
	}
}

/// Load the page configuration from the script element with id `valentine-config`.
pub fn load_page_config() -> Option<PageConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let config = parse_config(&json_text)?;
	info!(
		"valentine: loaded config ({} glyphs, max {} hearts)",
		config.hearts.glyphs.len(),
		config.hearts.max_hearts
	);
	Some(config)
}
