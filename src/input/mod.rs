//! Input module for rotary-indexer.
//!
//! Decodes the rotary encoder into detent deltas and debounced button presses.

mod button;
mod decoder;
mod quadrature;

pub use button::Debouncer;
pub use decoder::{EncoderPins, InputDecoder, InputEvent, RawInput};
pub use quadrature::QuadratureDecoder;
