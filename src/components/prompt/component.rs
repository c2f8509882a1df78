//! The valentine question with its "Yes" and evasive "No" buttons.
//!
//! "No" first swaps the question for a plea and flashes the screen, then
//! counts as a "Yes", and from the third click on it jumps away from the
//! pointer (on click, hover, touch, and window resize).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{MouseEvent, TouchEvent};

use super::state::{ESCAPE_PADDING, NoButton, NoResponse, Size, escape_position};
use crate::browser_seed;

/// Renders the question, the two buttons, and the flash overlay.
///
/// Sets `accepted` to `true` once the visitor says yes, directly or through
/// the second "No".
#[component]
pub fn ValentinePrompt(
	#[prop(into)] question: String,
	#[prop(into)] plea: String,
	#[prop(default = 600)] flash_ms: u64,
	accepted: WriteSignal<bool>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let no_ref = NodeRef::<leptos::html::Button>::new();

	let text = RwSignal::new(question);
	let flashing = RwSignal::new(false);
	let escape_pos = RwSignal::new(None::<(f64, f64)>);

	let no_button = Rc::new(RefCell::new(NoButton::default()));
	let rng = Rc::new(RefCell::new(SmallRng::seed_from_u64(browser_seed())));

	let move_no_button = {
		let (no_button, rng) = (no_button.clone(), rng.clone());
		move || {
			let (Some(container), Some(button)) = (container_ref.get(), no_ref.get()) else {
				return;
			};
			if no_button.borrow_mut().begin_escape() {
				debug!("valentine: no button started escaping");
			}
			let (container_rect, button_rect) = (
				container.get_bounding_client_rect(),
				button.get_bounding_client_rect(),
			);
			let pos = escape_position(
				Size {
					width: container_rect.width(),
					height: container_rect.height(),
				},
				Size {
					width: button_rect.width(),
					height: button_rect.height(),
				},
				ESCAPE_PADDING,
				&mut *rng.borrow_mut(),
			);
			escape_pos.set(Some(pos));
		}
	};

	let on_no_click = {
		let (no_button, move_no_button) = (no_button.clone(), move_no_button.clone());
		move |ev: MouseEvent| {
			ev.prevent_default();
			let response = no_button.borrow_mut().click();
			match response {
				NoResponse::Plead => {
					text.set(plea.clone());
					flashing.set(true);
					set_timeout(
						move || flashing.set(false),
						Duration::from_millis(flash_ms),
					);
				}
				NoResponse::Accept => accepted.set(true),
				NoResponse::Escape => move_no_button(),
			}
		}
	};

	let on_no_hover = {
		let (no_button, move_no_button) = (no_button.clone(), move_no_button.clone());
		move |_: MouseEvent| {
			if no_button.borrow().should_escape_on_hover() {
				move_no_button();
			}
		}
	};

	let on_no_touch = {
		let (no_button, move_no_button) = (no_button.clone(), move_no_button.clone());
		move |ev: TouchEvent| {
			if no_button.borrow().should_escape_on_hover() {
				ev.prevent_default();
				move_no_button();
			}
		}
	};

	let on_no_contextmenu = {
		let no_button = no_button.clone();
		move |ev: MouseEvent| {
			if no_button.borrow().should_escape_on_hover() {
				ev.prevent_default();
			}
		}
	};

	let resize_handle = window_event_listener(leptos::ev::resize, {
		let no_button = no_button.clone();
		move |_| {
			if no_button.borrow().is_escaping() {
				move_no_button();
			}
		}
	});
	on_cleanup(move || resize_handle.remove());

	view! {
		<div class="flash-overlay" class:active=move || flashing.get()></div>
		<main class="prompt">
			<h1 class="question">{move || text.get()}</h1>
			<div
				node_ref=container_ref
				class="buttons"
				style=move || {
					if escape_pos.get().is_some() { "position: relative; min-height: 150px;" } else { "" }
				}
			>
				<button class="yes" on:click=move |_| accepted.set(true)>
					"Yes 💖"
				</button>
				<button
					node_ref=no_ref
					class="no"
					class:escaping=move || escape_pos.get().is_some()
					style=move || {
						escape_pos
							.get()
							.map(|(x, y)| format!("position: absolute; left: {x}px; top: {y}px;"))
							.unwrap_or_default()
					}
					on:click=on_no_click
					on:mouseenter=on_no_hover
					on:touchstart=on_no_touch
					on:contextmenu=on_no_contextmenu
				>
					"No"
				</button>
			</div>
		</main>
	}
}
