//! Recording fakes and a tick-driven test bench for the controller.

#![allow(dead_code)]

use rotary_indexer::config::units::{Microsteps, Millis};
use rotary_indexer::error::Result;
use rotary_indexer::{
    Controller, ControllerBuilder, FixtureConfig, RawInput, Relay, StepperDriver, TextScreen,
};

/// Driver that counts pulses per direction.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub enabled: bool,
    pub clockwise: bool,
    pub pulses_cw: u32,
    pub pulses_ccw: u32,
    pub pauses: u32,
    pub microsteps: Option<Microsteps>,
}

impl RecordingDriver {
    pub fn pulses(&self) -> u32 {
        self.pulses_cw + self.pulses_ccw
    }
}

impl StepperDriver for RecordingDriver {
    fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        self.enabled = enabled;
        Ok(())
    }

    fn set_direction(&mut self, clockwise: bool) -> Result<()> {
        self.clockwise = clockwise;
        Ok(())
    }

    fn pulse_step(&mut self) -> Result<()> {
        if self.clockwise {
            self.pulses_cw += 1;
        } else {
            self.pulses_ccw += 1;
        }
        Ok(())
    }

    fn pause_between_steps(&mut self) {
        self.pauses += 1;
    }

    fn set_microsteps(&mut self, microsteps: Microsteps) -> Result<()> {
        self.microsteps = Some(microsteps);
        Ok(())
    }
}

/// Relay that remembers its level and counts activations.
#[derive(Debug, Default)]
pub struct RecordingRelay {
    pub active: bool,
    pub activations: u32,
}

impl Relay for RecordingRelay {
    fn set_active(&mut self, active: bool) -> Result<()> {
        if active && !self.active {
            self.activations += 1;
        }
        self.active = active;
        Ok(())
    }
}

/// Encoder lines set directly by the test. The button is active low.
#[derive(Debug)]
pub struct ScriptedInput {
    pub clock: bool,
    pub data: bool,
    pub button: bool,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            clock: true,
            data: true,
            button: true,
        }
    }
}

impl RawInput for ScriptedInput {
    fn read_clock_line(&mut self) -> Result<bool> {
        Ok(self.clock)
    }

    fn read_data_line(&mut self) -> Result<bool> {
        Ok(self.data)
    }

    fn read_button_line(&mut self) -> Result<bool> {
        Ok(self.button)
    }
}

pub type TestController = Controller<RecordingDriver, RecordingRelay, ScriptedInput, TextScreen>;

pub const TICK_MS: u32 = 10;

/// Controller plus a simulated millisecond clock.
pub struct Bench {
    pub ctl: TestController,
    pub now: u32,
}

impl Bench {
    /// Started controller with the splash dismissed by timeout.
    pub fn new(config: FixtureConfig) -> Self {
        let ctl = ControllerBuilder::new()
            .driver(RecordingDriver::default())
            .relay(RecordingRelay::default())
            .input(ScriptedInput::default())
            .display(TextScreen::new())
            .config(config)
            .build()
            .expect("valid bench config");

        let mut bench = Self { ctl, now: 0 };
        bench.ctl.start(Millis(0)).expect("start");
        bench.idle(3000);
        assert!(!bench.ctl.is_holding());
        bench
    }

    /// Default fixture: 200 steps, 1 s relay and settle.
    pub fn stock() -> Self {
        Self::new(FixtureConfig::default())
    }

    pub fn tick(&mut self) {
        self.now += TICK_MS;
        self.ctl.tick(Millis(self.now)).expect("tick");
    }

    /// Tick without input for at least `ms`.
    pub fn idle(&mut self, ms: u32) {
        for _ in 0..(ms + TICK_MS - 1) / TICK_MS {
            self.tick();
        }
    }

    /// Hold the button past the debounce window, then release it.
    pub fn press(&mut self) {
        self.ctl.input_mut().button = false;
        self.idle(60);
        self.ctl.input_mut().button = true;
        self.idle(60);
    }

    /// Turn the encoder by whole detents, one clock edge per tick.
    pub fn turn(&mut self, detents: i32) {
        let pulses_per_detent = 4;
        let clockwise = detents > 0;
        for _ in 0..detents.unsigned_abs() * pulses_per_detent {
            let input = self.ctl.input_mut();
            input.clock = !input.clock;
            input.data = if clockwise { !input.clock } else { input.clock };
            self.tick();
        }
    }

    /// Move the menu cursor from the top to `index` and select it.
    pub fn select(&mut self, index: i32) {
        assert_eq!(self.ctl.navigator().selected(), 0);
        self.turn(index);
        self.press();
    }

    pub fn driver(&self) -> &RecordingDriver {
        self.ctl.actuator().driver()
    }

    pub fn relay(&self) -> &RecordingRelay {
        self.ctl.relay()
    }

    pub fn screen(&self) -> &TextScreen {
        self.ctl.display()
    }
}
