//! valentine-hearts: a valentine prompt with an evasive "No" button.
//!
//! This crate provides a WASM single-page app that asks the question, flashes
//! and pleads on the first "No", and celebrates an answer of "Yes" with a
//! canvas full of falling hearts.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;

pub use components::falling_hearts::FallingHeartsCanvas;
pub use components::prompt::ValentinePrompt;
pub use config::{FieldConfig, PageConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("valentine: logging initialized");
}

/// Random seed taken from the browser's `Math.random`.
pub(crate) fn browser_seed() -> u64 {
	(js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// Shown once the visitor has said yes.
#[component]
fn Celebration(hearts: FieldConfig) -> impl IntoView {
	view! {
		<FallingHeartsCanvas config=hearts />
		<main class="celebration">
			<h1>"Yay! 🎉"</h1>
			<p class="subtitle">"Best. Valentine. Ever. 💕"</p>
		</main>
	}
}

/// Main application component.
/// Loads page configuration from the DOM and swaps the prompt for the
/// celebration once the question is answered.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = config::load_page_config().unwrap_or_default();
	let (accepted, set_accepted) = signal(false);
	let PageConfig {
		question,
		plea,
		flash_ms,
		hearts,
	} = config;

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Will you be my Valentine?" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Show
			when=move || accepted.get()
			fallback=move || {
				view! {
					<ValentinePrompt
						question=question.clone()
						plea=plea.clone()
						flash_ms=flash_ms
						accepted=set_accepted
					/>
				}
			}
		>
			<Celebration hearts=hearts.clone() />
		</Show>
	}
}
