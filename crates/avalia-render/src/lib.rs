//! avalia-render
//!
//! Turns analysis replies written in a small markdown subset into escaped
//! HTML for display.

pub mod html;
pub mod markup;
pub mod styles;

pub use html::{render, render_with};
