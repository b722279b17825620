//! Rotary encoder configuration from TOML.

use serde::Deserialize;

/// Quadrature and push-button decoding parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Raw clock-line transitions that make up one mechanical detent.
    pub pulses_per_detent: u8,

    /// Time the button level must hold still before it is accepted.
    pub debounce_ms: u32,

    /// Button reads low when pressed (pull-up wiring).
    pub button_active_low: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            pulses_per_detent: 4,
            debounce_ms: 50,
            button_active_low: true,
        }
    }
}
