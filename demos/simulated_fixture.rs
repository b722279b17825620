//! Simulated fixture session.
//!
//! Wires the controller to in-memory pins, then plays an operator session:
//! a direct move to step 6, a full cycle, and a cancelled cycle. The screen is
//! printed after each action.
//!
//! Time is simulated, so the session runs instantly.

use std::cell::Cell;
use std::rc::Rc;

use rotary_indexer::{
    parse_config, Controller, ControllerBuilder, EncoderPins, Millis, PinDriver, RelayPin,
    TextScreen,
};

const CONFIG: &str = r#"
[motor]
base_steps_per_revolution = 8

[relay]
on_ms = 100
settle_ms = 150

[ui]
notice_ms = 500
splash_ms = 300
"#;

/// Delay provider that returns immediately.
struct NoDelay;

impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Output pin that counts its edges.
#[derive(Clone, Default)]
struct CountingPin {
    level: Rc<Cell<bool>>,
    rising: Rc<Cell<u32>>,
    falling: Rc<Cell<u32>>,
}

impl embedded_hal::digital::ErrorType for CountingPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for CountingPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.level.get() {
            self.rising.set(self.rising.get() + 1);
        }
        self.level.set(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.level.get() {
            self.falling.set(self.falling.get() + 1);
        }
        self.level.set(false);
        Ok(())
    }
}

/// Input pin whose level is set by the session script.
#[derive(Clone)]
struct ScriptedLine(Rc<Cell<bool>>);

impl ScriptedLine {
    fn new(level: bool) -> Self {
        Self(Rc::new(Cell::new(level)))
    }
}

impl embedded_hal::digital::ErrorType for ScriptedLine {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::InputPin for ScriptedLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

type SimController = Controller<
    PinDriver<CountingPin, CountingPin, CountingPin, NoDelay>,
    RelayPin<CountingPin>,
    EncoderPins<ScriptedLine, ScriptedLine, ScriptedLine>,
    TextScreen,
>;

/// Controller, operator lines and simulated time.
struct Session {
    controller: SimController,
    clock: ScriptedLine,
    data: ScriptedLine,
    button: ScriptedLine,
    now: u32,
}

impl Session {
    const TICK_MS: u32 = 10;

    /// Tick for `ms` of simulated time.
    fn run(&mut self, ms: u32) -> rotary_indexer::Result<()> {
        for _ in 0..ms / Self::TICK_MS {
            self.now += Self::TICK_MS;
            self.controller.tick(Millis(self.now))?;
        }
        Ok(())
    }

    /// Turn the encoder by whole detents, one clock edge per tick.
    fn rotate(&mut self, detents: i32) -> rotary_indexer::Result<()> {
        let clockwise = detents > 0;
        for _ in 0..detents.unsigned_abs() * 4 {
            let next = !self.clock.0.get();
            self.clock.0.set(next);
            self.data.0.set(if clockwise { !next } else { next });
            self.run(Self::TICK_MS)?;
        }
        Ok(())
    }

    /// Hold the button past the debounce window, then release it.
    fn press(&mut self) -> rotary_indexer::Result<()> {
        self.button.0.set(false);
        self.run(60)?;
        self.button.0.set(true);
        self.run(60)
    }

    fn screen(&self) -> &TextScreen {
        self.controller.display()
    }
}

fn main() -> rotary_indexer::Result<()> {
    println!("=== Simulated Rotary Indexer ===\n");

    let config = parse_config(CONFIG)?;

    let step = CountingPin::default();
    let relay_pin = CountingPin::default();
    let clock = ScriptedLine::new(true);
    let data = ScriptedLine::new(true);
    let button = ScriptedLine::new(true);

    let mut controller = ControllerBuilder::new()
        .driver(PinDriver::new(
            step.clone(),
            CountingPin::default(),
            CountingPin::default(),
            NoDelay,
            &config.motor,
        ))
        .relay(RelayPin::new(relay_pin.clone(), config.relay.active_low))
        .input(EncoderPins::new(clock.clone(), data.clone(), button.clone()))
        .display(TextScreen::new())
        .config(config)
        .build()?;
    controller.start(Millis(0))?;

    let mut session = Session {
        controller,
        clock,
        data,
        button,
        now: 0,
    };

    session.run(400)?;
    println!("Menu:\n{}", session.screen());

    // Positioning: one detent down, press, six detents, press.
    session.rotate(1)?;
    session.press()?;
    session.rotate(6)?;
    println!("Positioning setup:\n{}", session.screen());
    session.press()?;
    println!("After move ({} pulses):\n{}", step.rising.get(), session.screen());
    session.run(600)?;

    // Full cycle from the top entry.
    session.press()?;
    session.run(600)?;
    println!("Cycle running:\n{}", session.screen());
    session.run(1500)?;
    // The relay module is active low: every falling edge is one actuation.
    println!(
        "Cycle done: position {}, relay fired {} times\n{}",
        session.controller.position().current(),
        relay_pin.falling.get(),
        session.screen()
    );
    session.run(600)?;

    // Start another cycle and cancel it.
    session.press()?;
    session.run(500)?;
    session.press()?;
    println!(
        "Cancelled at position {} in mode {:?}\n{}",
        session.controller.position().current(),
        session.controller.mode(),
        session.screen()
    );

    Ok(())
}
