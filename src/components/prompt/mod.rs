//! Valentine prompt: the question, a "Yes" button, and a "No" button that
//! refuses to be clicked for long.

mod component;
pub mod state;

pub use component::ValentinePrompt;
pub use state::{NoButton, NoResponse};
