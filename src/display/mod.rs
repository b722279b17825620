//! Display module for rotary-indexer.
//!
//! The render contract the controller draws through, and a character-buffer
//! implementation of it.

mod surface;
mod text;

pub use surface::DisplaySurface;
pub use text::TextScreen;
