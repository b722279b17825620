//! Input decoder: raw encoder lines in, one-shot events out.

use embedded_hal::digital::InputPin;

use crate::config::units::Millis;
use crate::config::EncoderConfig;
use crate::error::{HardwareError, Result};

use super::button::Debouncer;
use super::quadrature::QuadratureDecoder;

/// Raw encoder line reads, sampled on demand.
pub trait RawInput {
    /// Level of the encoder clock (A) line.
    fn read_clock_line(&mut self) -> Result<bool>;
    /// Level of the encoder data (B) line.
    fn read_data_line(&mut self) -> Result<bool>;
    /// Level of the push-button line.
    fn read_button_line(&mut self) -> Result<bool>;
}

/// Encoder lines backed by `embedded-hal` input pins.
pub struct EncoderPins<CLK, DT, SW>
where
    CLK: InputPin,
    DT: InputPin,
    SW: InputPin,
{
    clock: CLK,
    data: DT,
    button: SW,
}

impl<CLK, DT, SW> EncoderPins<CLK, DT, SW>
where
    CLK: InputPin,
    DT: InputPin,
    SW: InputPin,
{
    /// Wrap the CLK, DT and SW pins.
    pub fn new(clock: CLK, data: DT, button: SW) -> Self {
        Self { clock, data, button }
    }

    /// Release the pins.
    pub fn release(self) -> (CLK, DT, SW) {
        (self.clock, self.data, self.button)
    }
}

impl<CLK, DT, SW> RawInput for EncoderPins<CLK, DT, SW>
where
    CLK: InputPin,
    DT: InputPin,
    SW: InputPin,
{
    fn read_clock_line(&mut self) -> Result<bool> {
        Ok(self.clock.is_high().map_err(|_| HardwareError::EncoderPin)?)
    }

    fn read_data_line(&mut self) -> Result<bool> {
        Ok(self.data.is_high().map_err(|_| HardwareError::EncoderPin)?)
    }

    fn read_button_line(&mut self) -> Result<bool> {
        Ok(self.button.is_high().map_err(|_| HardwareError::ButtonPin)?)
    }
}

/// Input gathered since the previous [`InputDecoder::take_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    /// Signed detent count, positive clockwise.
    pub rotation: i32,
    /// A debounced press happened.
    pub button_edge: bool,
}

impl InputEvent {
    /// Nothing happened.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.rotation == 0 && !self.button_edge
    }
}

/// Samples a [`RawInput`] once per tick and buffers rotation and presses
/// until they are consumed.
pub struct InputDecoder<I: RawInput> {
    raw: I,
    quadrature: QuadratureDecoder,
    button: Debouncer,
}

impl<I: RawInput> InputDecoder<I> {
    /// Create a decoder over `raw` with the given encoder parameters.
    pub fn new(raw: I, config: &EncoderConfig) -> Self {
        Self {
            raw,
            quadrature: QuadratureDecoder::new(config.pulses_per_detent),
            button: Debouncer::new(config.debounce_ms, config.button_active_low),
        }
    }

    /// Sample all three lines. Call once per scheduler tick before any handler runs.
    pub fn poll(&mut self, now: Millis) -> Result<()> {
        let clock = self.raw.read_clock_line()?;
        let data = self.raw.read_data_line()?;
        self.quadrature.sample(clock, data);

        let button = self.raw.read_button_line()?;
        self.button.sample(button, now);
        Ok(())
    }

    /// Return and clear the accumulated directional delta.
    #[inline]
    pub fn consume_direction(&mut self) -> i32 {
        self.quadrature.take()
    }

    /// Return and clear the press flag.
    #[inline]
    pub fn consume_press(&mut self) -> bool {
        self.button.take()
    }

    /// Consume both rotation and press at once.
    pub fn take_event(&mut self) -> InputEvent {
        InputEvent {
            rotation: self.consume_direction(),
            button_edge: self.consume_press(),
        }
    }

    /// Access the quadrature decoder, e.g. to feed it from a pin-change interrupt.
    #[inline]
    pub fn quadrature_mut(&mut self) -> &mut QuadratureDecoder {
        &mut self.quadrature
    }

    /// Access the raw input source.
    #[inline]
    pub fn raw(&self) -> &I {
        &self.raw
    }

    /// Mutable access to the raw input source.
    #[inline]
    pub fn raw_mut(&mut self) -> &mut I {
        &mut self.raw
    }
}
