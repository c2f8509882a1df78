//! Falling hearts animation.
//!
//! Draws a steady shower of emoji hearts on a full-viewport canvas:
//! - Hearts spawn above the viewport in small random bursts, up to a cap
//! - Each heart falls, sways, and spins at its own fixed rates
//! - Hearts are culled once they fall past the bottom margin
//! - The loop pauses while the page is hidden
//!
//! # Example
//!
//! ```ignore
//! use valentine_hearts::FallingHeartsCanvas;
//!
//! view! { <FallingHeartsCanvas /> }
//! ```

mod component;
mod particles;
mod render;
pub mod theme;
mod types;

pub use component::FallingHeartsCanvas;
pub use particles::{Heart, HeartField};
pub use theme::HeartTheme;
pub use types::{FieldState, Viewport};
