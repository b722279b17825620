//! Top-level controller: one input poll and one mode handler per tick.

use core::convert::Infallible;
use core::fmt::{self, Write};

use embedded_hal::delay::DelayNs;

use crate::config::units::{Microsteps, Millis};
use crate::config::{FixtureConfig, TimingConfig, UiConfig};
use crate::cycle::{CycleEngine, CycleStatus};
use crate::display::DisplaySurface;
use crate::error::{InitError, Result};
use crate::fmt::{debug, error, info};
use crate::input::{InputDecoder, InputEvent, RawInput};
use crate::menu::{Adjustment, MenuItem, Navigator};
use crate::motor::{MotionActuator, PositionModel, StepperDriver};
use crate::relay::Relay;

use super::clock::Clock;
use super::mode::SystemMode;

const TARGET_LABEL: &str = "Target step";
const MICROSTEP_LABEL: &str = "Microstep (x)";
const RELAY_ON_LABEL: &str = "Relay on (ms)";
const RELAY_OFF_LABEL: &str = "Relay off (ms)";

/// A screen that stays up until it times out or any input arrives.
#[derive(Debug, Clone, Copy)]
struct Hold {
    since: Millis,
    duration_ms: u32,
}

/// Owns every collaborator and all model state of the fixture.
///
/// Generic over:
/// - `D`: motor driver
/// - `R`: relay output
/// - `I`: raw encoder lines
/// - `S`: display surface
///
/// Drive it with [`Controller::start`] once and then [`Controller::tick`]
/// forever, or let [`Controller::run`] do both.
pub struct Controller<D, R, I, S>
where
    D: StepperDriver,
    R: Relay,
    I: RawInput,
    S: DisplaySurface,
{
    mode: SystemMode,
    actuator: MotionActuator<D>,
    relay: R,
    input: InputDecoder<I>,
    display: S,
    position: PositionModel,
    timing: TimingConfig,
    navigator: Navigator,
    cycle: Option<CycleEngine>,
    adjustment: Option<Adjustment>,
    hold: Option<Hold>,
    ui: UiConfig,
}

impl<D, R, I, S> Controller<D, R, I, S>
where
    D: StepperDriver,
    R: Relay,
    I: RawInput,
    S: DisplaySurface,
{
    /// Assemble a controller. The configuration is assumed valid; use
    /// [`ControllerBuilder`](super::ControllerBuilder) to have it checked.
    ///
    /// The menu window is limited to what the display can show.
    pub fn new(driver: D, relay: R, input: I, display: S, config: &FixtureConfig) -> Self {
        let visible = (config.ui.visible_menu_items as usize).min(display.menu_rows());
        Self {
            mode: SystemMode::MainMenu,
            actuator: MotionActuator::new(driver),
            relay,
            input: InputDecoder::new(input, &config.encoder),
            display,
            position: PositionModel::new(
                config.motor.base_steps_per_revolution,
                config.motor.microsteps,
            ),
            timing: config.timing(),
            navigator: Navigator::new(MenuItem::COUNT, visible),
            cycle: None,
            adjustment: None,
            hold: None,
            ui: config.ui.clone(),
        }
    }

    /// Bring up the display, put the driver and relay in their idle state and
    /// show the splash screen.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] for the collaborator that failed. There is no
    /// degraded mode; the caller should halt.
    pub fn start(&mut self, now: Millis) -> Result<()> {
        self.display.init().map_err(|_| {
            error!("display init failed");
            InitError::Display
        })?;
        self.actuator
            .init(self.position.microsteps())
            .map_err(|_| InitError::Driver)?;
        self.relay.set_active(false).map_err(|_| InitError::Relay)?;

        info!(
            "rotary indexer ready: {} steps/rev",
            self.position.steps_per_revolution()
        );
        self.set_mode(SystemMode::MainMenu);
        self.display.render_status("Rotary indexer\nStarting...");
        self.hold_for(now, self.ui.splash_ms);
        Ok(())
    }

    /// Run one scheduler tick: sample the inputs once, then dispatch to the
    /// handler of the current mode.
    pub fn tick(&mut self, now: Millis) -> Result<()> {
        self.input.poll(now)?;
        let event = self.input.take_event();
        if !event.is_idle() {
            debug!(
                "input rotation {} press {} in {}",
                event.rotation,
                event.button_edge,
                self.mode.name()
            );
        }

        match self.mode {
            SystemMode::MainMenu => self.handle_main_menu(now, event),
            SystemMode::RunningCycle => self.handle_cycle(now, event),
            SystemMode::PositioningSetup => self.handle_positioning_setup(now, event),
            SystemMode::Positioning => self.handle_positioning(now),
            SystemMode::MotorDisabled => self.handle_motor_disabled(event),
            SystemMode::MicrostepSetup => self.handle_microstep_setup(event),
            SystemMode::RelayOnTimeSetup | SystemMode::RelayOffTimeSetup => {
                self.handle_timing_setup(event)
            }
        }
    }

    /// Start, then tick forever with a fixed delay between ticks.
    ///
    /// Only returns on error.
    pub fn run<C, DL>(&mut self, clock: &mut C, delay: &mut DL) -> Result<Infallible>
    where
        C: Clock,
        DL: DelayNs,
    {
        self.start(clock.now())?;
        loop {
            self.tick(clock.now())?;
            delay.delay_ms(self.ui.tick_ms);
        }
    }

    fn handle_main_menu(&mut self, now: Millis, event: InputEvent) -> Result<()> {
        if let Some(hold) = self.hold {
            // Any input dismisses the hold and is consumed by it.
            if !event.is_idle() || now.has_elapsed(hold.since, hold.duration_ms) {
                self.hold = None;
                self.render_menu();
            }
            return Ok(());
        }

        if self.navigator.navigate(event.rotation) {
            self.render_menu();
        }

        if event.button_edge {
            self.select(now)?;
        }
        Ok(())
    }

    fn select(&mut self, now: Millis) -> Result<()> {
        let Some(item) = MenuItem::from_index(self.navigator.selected()) else {
            return Ok(());
        };
        info!("menu select {}", item.label());

        match item {
            MenuItem::FullCycle => {
                let total = self.position.steps_per_revolution();
                let engine = CycleEngine::start(now, total, &mut self.actuator, &mut self.relay)?;
                self.cycle = Some(engine);
                self.display.render_progress(0, total);
                self.set_mode(SystemMode::RunningCycle);
            }
            MenuItem::Positioning => {
                let adjustment = Adjustment::wrapping(
                    self.position.current() as i32,
                    1,
                    self.position.steps_per_revolution() as i32,
                );
                self.begin_setup(SystemMode::PositioningSetup, adjustment);
            }
            MenuItem::Microstep => {
                let index = self.position.microsteps().index() as i32;
                let adjustment = Adjustment::wrapping(index, 1, Microsteps::COUNT as i32);
                self.begin_setup(SystemMode::MicrostepSetup, adjustment);
            }
            MenuItem::RelayOnTime => {
                let adjustment = Self::timing_adjustment(self.timing.relay_on_ms);
                self.begin_setup(SystemMode::RelayOnTimeSetup, adjustment);
            }
            MenuItem::RelayOffTime => {
                let adjustment = Self::timing_adjustment(self.timing.settle_ms);
                self.begin_setup(SystemMode::RelayOffTimeSetup, adjustment);
            }
            MenuItem::DisableMotor => {
                self.actuator.disable()?;
                self.display.render_status("Motor disabled\n\nPress to enable");
                self.set_mode(SystemMode::MotorDisabled);
            }
        }
        Ok(())
    }

    fn handle_cycle(&mut self, now: Millis, event: InputEvent) -> Result<()> {
        // Cancellation is evaluated before any phase work.
        if event.button_edge {
            if let Some(engine) = self.cycle.take() {
                engine.cancel(&mut self.relay)?;
            }
            return self.return_to_menu();
        }

        let Some(engine) = self.cycle.as_mut() else {
            return self.return_to_menu();
        };

        let status = engine.tick(
            now,
            &self.timing,
            &mut self.actuator,
            &mut self.relay,
            &mut self.position,
        )?;

        match status {
            CycleStatus::Waiting | CycleStatus::Actuated => {}
            CycleStatus::Stepped { done, total } => self.display.render_progress(done, total),
            CycleStatus::Complete => {
                self.cycle = None;
                self.display.render_status("Cycle\ncomplete!");
                self.finish_with_notice(now);
            }
        }
        Ok(())
    }

    fn handle_positioning_setup(&mut self, now: Millis, event: InputEvent) -> Result<()> {
        let Some(adjustment) = self.adjustment.as_mut() else {
            return self.return_to_menu();
        };

        if adjustment.apply(event.rotation) {
            self.display.render_setting(TARGET_LABEL, adjustment.value());
        }

        if event.button_edge {
            let target = adjustment.value() as u32;
            self.adjustment = None;
            self.position.set_target(target);
            self.set_mode(SystemMode::Positioning);
            return self.handle_positioning(now);
        }
        Ok(())
    }

    fn handle_positioning(&mut self, now: Millis) -> Result<()> {
        let Some(target) = self.position.take_target() else {
            return self.return_to_menu();
        };

        self.actuator.enable()?;
        let delta = self.position.delta_to(target);
        self.render_status(format_args!("Positioning\n\nTarget: {}\nMove: {}", target, delta));
        info!(
            "positioning {} -> {} ({} steps)",
            self.position.current(),
            target,
            delta
        );

        let moved = self.actuator.step_many(delta)?;
        if moved == delta.unsigned_abs() {
            self.position.move_steps(delta);
        }

        let current = self.position.current();
        self.render_status(format_args!("Positioned\n\nStep: {}", current));
        self.finish_with_notice(now);
        Ok(())
    }

    fn handle_motor_disabled(&mut self, event: InputEvent) -> Result<()> {
        if event.button_edge {
            self.actuator.enable()?;
            return self.return_to_menu();
        }
        Ok(())
    }

    fn handle_microstep_setup(&mut self, event: InputEvent) -> Result<()> {
        let Some(adjustment) = self.adjustment.as_mut() else {
            return self.return_to_menu();
        };

        if adjustment.apply(event.rotation) {
            let microsteps = Microsteps::from_index(adjustment.value() as usize);
            self.display
                .render_setting(MICROSTEP_LABEL, microsteps.value() as i32);
        }

        if event.button_edge {
            let microsteps = Microsteps::from_index(adjustment.value() as usize);
            self.adjustment = None;
            self.actuator.select_microsteps(microsteps)?;
            self.position.set_microsteps(microsteps);
            info!(
                "microsteps set to {}: {} steps/rev",
                microsteps.label(),
                self.position.steps_per_revolution()
            );
            return self.return_to_menu();
        }
        Ok(())
    }

    fn handle_timing_setup(&mut self, event: InputEvent) -> Result<()> {
        let label = match self.mode {
            SystemMode::RelayOnTimeSetup => RELAY_ON_LABEL,
            _ => RELAY_OFF_LABEL,
        };
        let Some(adjustment) = self.adjustment.as_mut() else {
            return self.return_to_menu();
        };

        if adjustment.apply(event.rotation) {
            self.display.render_setting(label, adjustment.value());
        }

        if event.button_edge {
            let ms = TimingConfig::clamp(adjustment.value() as u32);
            self.adjustment = None;
            match self.mode {
                SystemMode::RelayOnTimeSetup => self.timing.relay_on_ms = ms,
                _ => self.timing.settle_ms = ms,
            }
            info!(
                "timing set: relay on {} ms, settle {} ms",
                self.timing.relay_on_ms,
                self.timing.settle_ms
            );
            return self.return_to_menu();
        }
        Ok(())
    }

    fn timing_adjustment(current_ms: u32) -> Adjustment {
        Adjustment::clamped(
            current_ms as i32,
            TimingConfig::STEP_MS as i32,
            TimingConfig::MIN_MS as i32,
            TimingConfig::MAX_MS as i32,
        )
    }

    fn begin_setup(&mut self, mode: SystemMode, adjustment: Adjustment) {
        let label = match mode {
            SystemMode::PositioningSetup => TARGET_LABEL,
            SystemMode::MicrostepSetup => MICROSTEP_LABEL,
            SystemMode::RelayOnTimeSetup => RELAY_ON_LABEL,
            _ => RELAY_OFF_LABEL,
        };
        let shown = match mode {
            SystemMode::MicrostepSetup => {
                Microsteps::from_index(adjustment.value() as usize).value() as i32
            }
            _ => adjustment.value(),
        };

        self.adjustment = Some(adjustment);
        self.display.render_setting(label, shown);
        self.set_mode(mode);
    }

    fn return_to_menu(&mut self) -> Result<()> {
        self.adjustment = None;
        self.hold = None;
        self.navigator.reset();
        self.set_mode(SystemMode::MainMenu);
        self.render_menu();
        Ok(())
    }

    fn finish_with_notice(&mut self, now: Millis) {
        self.navigator.reset();
        self.set_mode(SystemMode::MainMenu);
        self.hold_for(now, self.ui.notice_ms);
    }

    fn hold_for(&mut self, now: Millis, duration_ms: u32) {
        self.hold = Some(Hold {
            since: now,
            duration_ms,
        });
    }

    fn set_mode(&mut self, mode: SystemMode) {
        if self.mode != mode {
            info!("mode {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
    }

    fn render_menu(&mut self) {
        self.display.render_menu(
            &MenuItem::LABELS,
            self.navigator.selected(),
            self.navigator.window_start(),
            self.navigator.visible(),
        );
    }

    fn render_status(&mut self, args: fmt::Arguments<'_>) {
        let mut text: heapless::String<64> = heapless::String::new();
        let _ = text.write_fmt(args);
        self.display.render_status(&text);
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> SystemMode {
        self.mode
    }

    /// Position model.
    #[inline]
    pub fn position(&self) -> &PositionModel {
        &self.position
    }

    /// Active cycle timing.
    #[inline]
    pub fn timing(&self) -> TimingConfig {
        self.timing
    }

    /// Main menu cursor.
    #[inline]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Running cycle, if any.
    #[inline]
    pub fn cycle(&self) -> Option<&CycleEngine> {
        self.cycle.as_ref()
    }

    /// Value being edited in a setup mode.
    #[inline]
    pub fn adjustment(&self) -> Option<&Adjustment> {
        self.adjustment.as_ref()
    }

    /// Whether a splash or notice screen is currently held.
    #[inline]
    pub fn is_holding(&self) -> bool {
        self.hold.is_some()
    }

    /// Motion actuator.
    #[inline]
    pub fn actuator(&self) -> &MotionActuator<D> {
        &self.actuator
    }

    /// Relay output.
    #[inline]
    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Display surface.
    #[inline]
    pub fn display(&self) -> &S {
        &self.display
    }

    /// Raw input source, e.g. to inject levels in a simulation.
    #[inline]
    pub fn input_mut(&mut self) -> &mut I {
        self.input.raw_mut()
    }
}
