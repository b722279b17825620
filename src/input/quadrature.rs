//! Quadrature detent integration.

use crate::fmt::debug;

/// Turns clock-line transitions into whole detents.
///
/// Every change of the clock line is classified by the data line: data
/// differing from the new clock level is a clockwise pulse, equal is
/// counter-clockwise. Pulses accumulate until their magnitude reaches
/// `pulses_per_detent`, which yields one ±1 detent and restarts the count.
/// A detent therefore costs exactly `pulses_per_detent` pulses no matter how
/// the contacts chatter inside it.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    pulses_per_detent: i16,
    last_clock: Option<bool>,
    pulse_counter: i16,
    detents: i32,
}

impl QuadratureDecoder {
    /// Create a decoder. A threshold of zero is treated as one.
    pub fn new(pulses_per_detent: u8) -> Self {
        Self {
            pulses_per_detent: pulses_per_detent.max(1) as i16,
            last_clock: None,
            pulse_counter: 0,
            detents: 0,
        }
    }

    /// Feed one sample of both lines.
    ///
    /// The first sample only latches the clock level. Call at least once per
    /// minimum encoder pulse width when polling.
    pub fn sample(&mut self, clock: bool, data: bool) {
        match self.last_clock {
            Some(last) if last != clock => self.clock_edge(clock, data),
            Some(_) => {}
            None => self.last_clock = Some(clock),
        }
    }

    /// Record a clock transition to `clock`, e.g. from a pin-change interrupt.
    pub fn clock_edge(&mut self, clock: bool, data: bool) {
        self.last_clock = Some(clock);

        if data != clock {
            self.pulse_counter += 1;
        } else {
            self.pulse_counter -= 1;
        }

        if self.pulse_counter.abs() >= self.pulses_per_detent {
            let step = self.pulse_counter.signum() as i32;
            self.detents = self.detents.saturating_add(step);
            self.pulse_counter = 0;
            debug!("encoder detent {}", step);
        }
    }

    /// Detents not yet taken, without clearing them.
    #[inline]
    pub fn pending(&self) -> i32 {
        self.detents
    }

    /// Return and clear accumulated detents.
    #[inline]
    pub fn take(&mut self) -> i32 {
        core::mem::take(&mut self.detents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive `edges` clock transitions with the data line chosen for `cw`.
    fn turn(decoder: &mut QuadratureDecoder, clock: &mut bool, edges: usize, cw: bool) {
        for _ in 0..edges {
            *clock = !*clock;
            let data = if cw { !*clock } else { *clock };
            decoder.sample(*clock, data);
        }
    }

    #[test]
    fn test_first_sample_only_latches() {
        let mut decoder = QuadratureDecoder::new(1);
        decoder.sample(true, false);
        assert_eq!(decoder.take(), 0);
    }

    #[test]
    fn test_one_detent_per_threshold() {
        let mut decoder = QuadratureDecoder::new(4);
        let mut clock = true;
        decoder.sample(clock, true);

        turn(&mut decoder, &mut clock, 3, true);
        assert_eq!(decoder.pending(), 0);

        turn(&mut decoder, &mut clock, 1, true);
        assert_eq!(decoder.take(), 1);
        assert_eq!(decoder.take(), 0);
    }

    #[test]
    fn test_counter_clockwise_and_accumulation() {
        let mut decoder = QuadratureDecoder::new(4);
        let mut clock = true;
        decoder.sample(clock, true);

        turn(&mut decoder, &mut clock, 8, false);
        assert_eq!(decoder.take(), -2);
    }

    #[test]
    fn test_chatter_inside_detent_cancels() {
        let mut decoder = QuadratureDecoder::new(4);
        let mut clock = true;
        decoder.sample(clock, true);

        // Two forward, two back: net zero, no detent.
        turn(&mut decoder, &mut clock, 2, true);
        turn(&mut decoder, &mut clock, 2, false);
        assert_eq!(decoder.take(), 0);

        turn(&mut decoder, &mut clock, 4, true);
        assert_eq!(decoder.take(), 1);
    }

    #[test]
    fn test_steady_clock_is_ignored() {
        let mut decoder = QuadratureDecoder::new(1);
        decoder.sample(false, false);
        for _ in 0..10 {
            decoder.sample(false, true);
        }
        assert_eq!(decoder.take(), 0);
    }
}
