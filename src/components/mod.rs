//! UI components.

pub mod falling_hearts;
pub mod prompt;
