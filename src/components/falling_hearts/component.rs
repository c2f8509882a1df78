//! Leptos component wrapping the falling hearts canvas.
//!
//! The component creates a fixed, full-viewport canvas and drives the heart
//! field from a `requestAnimationFrame` loop. Each callback ticks and renders
//! the field, then requests the next frame only while the field is running.
//! Document visibility starts and stops the loop; window resizes update the
//! canvas and the field's bounds.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::HeartField;
use super::render;
use super::theme::HeartTheme;
use super::types::Viewport;
use crate::browser_seed;
use crate::config::FieldConfig;

type JsCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Heart field plus everything needed to draw it.
struct HeartsContext {
	field: HeartField,
	ctx: CanvasRenderingContext2d,
	theme: HeartTheme,
	/// Pending animation frame, if one is scheduled.
	frame: Option<i32>,
}

fn viewport_size(window: &Window) -> Option<Viewport> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some(Viewport::new(width, height))
}

fn acquire_surface(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn request_frame(animate: &JsCallback) -> Option<i32> {
	let window = web_sys::window()?;
	let cb = animate.borrow();
	window
		.request_animation_frame(cb.as_ref()?.as_ref().unchecked_ref())
		.ok()
}

fn cancel_frame(id: i32) {
	if let Some(window) = web_sys::window() {
		let _ = window.cancel_animation_frame(id);
	}
}

/// Renders decorative falling hearts over the whole viewport.
///
/// The canvas ignores pointer events so it can sit above page content. If the
/// browser cannot provide a 2D context the component stays inert.
#[component]
pub fn FallingHeartsCanvas(#[prop(optional)] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<HeartsContext>>> = Rc::new(RefCell::new(None));
	let animate: JsCallback = Rc::new(RefCell::new(None));
	let resize_cb: JsCallback = Rc::new(RefCell::new(None));
	let visibility_cb: JsCallback = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let viewport = viewport_size(&window).unwrap_or(Viewport::new(800.0, 600.0));

		let Some(ctx) = acquire_surface(&canvas) else {
			warn!("valentine: no 2d context available, falling hearts disabled");
			return;
		};
		canvas.set_width(viewport.width as u32);
		canvas.set_height(viewport.height as u32);

		let theme = HeartTheme::default();
		let mut field = HeartField::new(
			config.clone(),
			theme.ranges.clone(),
			viewport,
			browser_seed(),
		);
		field.start();
		*context.borrow_mut() = Some(HeartsContext {
			field,
			ctx,
			theme,
			frame: None,
		});

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(viewport) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(viewport.width as u32);
			canvas_resize.set_height(viewport.height as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.field.resize(viewport.width, viewport.height);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.frame = None;
				if !c.field.is_running() {
					return;
				}
				c.field.tick();
				render::render(&c.field, &c.ctx, &c.theme);
				c.frame = request_frame(&animate_inner);
			}
		}));

		let (context_vis, animate_vis) = (context.clone(), animate.clone());
		*visibility_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(document) = web_sys::window().and_then(|w| w.document()) else {
				return;
			};
			if let Some(ref mut c) = *context_vis.borrow_mut() {
				if document.hidden() {
					if c.field.stop() {
						debug!("valentine: page hidden, hearts paused");
					}
					if let Some(id) = c.frame.take() {
						cancel_frame(id);
					}
				} else if c.field.start() {
					debug!("valentine: page visible, hearts resumed");
					if c.frame.is_none() {
						c.frame = request_frame(&animate_vis);
					}
				}
			}
		}));
		if let Some(document) = window.document() {
			if let Some(ref cb) = *visibility_cb.borrow() {
				let _ = document
					.add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref());
			}
		}

		if let Some(ref mut c) = *context.borrow_mut() {
			c.frame = request_frame(&animate);
		}
		info!(
			"valentine: falling hearts running on {}x{} canvas",
			viewport.width, viewport.height
		);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="hearts-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
