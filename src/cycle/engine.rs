//! Non-blocking full-revolution sequencer.
//!
//! Each iteration is relay on, wait `relay_on_ms`, relay off, one step, wait
//! `settle_ms`. A tick does constant work: one timestamp comparison and at most
//! one pin transition group. Nothing here sleeps.

use crate::config::units::Millis;
use crate::config::TimingConfig;
use crate::error::Result;
use crate::fmt::{debug, info};
use crate::motor::{Direction, MotionActuator, PositionModel, StepperDriver};
use crate::relay::Relay;

use super::phase::{CyclePhase, CycleStatus};

/// Progress of one running cycle. Created by [`CycleEngine::start`] and
/// dropped on completion or cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleEngine {
    phase: CyclePhase,
    phase_started: Millis,
    steps_completed: u32,
    steps_total: u32,
}

impl CycleEngine {
    /// Begin a cycle of `steps_total` iterations: enable the motor, energize
    /// the relay and start timing the first actuation.
    pub fn start<D, R>(
        now: Millis,
        steps_total: u32,
        actuator: &mut MotionActuator<D>,
        relay: &mut R,
    ) -> Result<Self>
    where
        D: StepperDriver,
        R: Relay,
    {
        actuator.enable()?;
        relay.set_active(true)?;
        info!("cycle started: {} steps", steps_total);

        Ok(Self {
            phase: CyclePhase::RelayActuating,
            phase_started: now,
            steps_completed: 0,
            steps_total,
        })
    }

    /// Advance the sequence if the current phase has elapsed.
    pub fn tick<D, R>(
        &mut self,
        now: Millis,
        timing: &TimingConfig,
        actuator: &mut MotionActuator<D>,
        relay: &mut R,
        position: &mut PositionModel,
    ) -> Result<CycleStatus>
    where
        D: StepperDriver,
        R: Relay,
    {
        match self.phase {
            CyclePhase::RelayActuating => {
                if !now.has_elapsed(self.phase_started, timing.relay_on_ms) {
                    return Ok(CycleStatus::Waiting);
                }

                relay.set_active(false)?;
                if actuator.step_once(Direction::Clockwise)? {
                    position.advance();
                }
                self.steps_completed += 1;
                self.enter(CyclePhase::Settling, now);
                debug!("cycle step {}/{}", self.steps_completed, self.steps_total);

                Ok(CycleStatus::Stepped {
                    done: self.steps_completed,
                    total: self.steps_total,
                })
            }
            CyclePhase::Settling => {
                if !now.has_elapsed(self.phase_started, timing.settle_ms) {
                    return Ok(CycleStatus::Waiting);
                }

                if self.is_finished() {
                    info!("cycle complete after {} steps", self.steps_completed);
                    return Ok(CycleStatus::Complete);
                }

                relay.set_active(true)?;
                self.enter(CyclePhase::RelayActuating, now);
                Ok(CycleStatus::Actuated)
            }
        }
    }

    /// Abort the sequence: the relay is released immediately and no further
    /// steps are issued.
    pub fn cancel<R: Relay>(self, relay: &mut R) -> Result<()> {
        relay.set_active(false)?;
        info!(
            "cycle cancelled at {}/{} in {} phase",
            self.steps_completed,
            self.steps_total,
            self.phase.name()
        );
        Ok(())
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Steps issued so far.
    #[inline]
    pub fn steps_completed(&self) -> u32 {
        self.steps_completed
    }

    /// Steps in the full cycle.
    #[inline]
    pub fn steps_total(&self) -> u32 {
        self.steps_total
    }

    /// Check whether every step of the revolution has been issued.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.steps_completed >= self.steps_total
    }

    fn enter(&mut self, phase: CyclePhase, now: Millis) {
        self.phase = phase;
        self.phase_started = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Microsteps;

    #[derive(Default)]
    struct CountingDriver {
        enabled: bool,
        pulses: u32,
    }

    impl StepperDriver for CountingDriver {
        fn set_enabled(&mut self, enabled: bool) -> Result<()> {
            self.enabled = enabled;
            Ok(())
        }

        fn set_direction(&mut self, _clockwise: bool) -> Result<()> {
            Ok(())
        }

        fn pulse_step(&mut self) -> Result<()> {
            self.pulses += 1;
            Ok(())
        }

        fn pause_between_steps(&mut self) {}
    }

    #[derive(Default)]
    struct FlagRelay {
        active: bool,
        writes: u32,
    }

    impl Relay for FlagRelay {
        fn set_active(&mut self, active: bool) -> Result<()> {
            self.active = active;
            self.writes += 1;
            Ok(())
        }
    }

    fn timing() -> TimingConfig {
        TimingConfig::new(100, 200)
    }

    #[test]
    fn test_start_energizes_relay() {
        let mut actuator = MotionActuator::new(CountingDriver::default());
        let mut relay = FlagRelay::default();

        let engine = CycleEngine::start(Millis(0), 4, &mut actuator, &mut relay).unwrap();

        assert!(actuator.is_enabled());
        assert!(relay.active);
        assert_eq!(engine.phase(), CyclePhase::RelayActuating);
        assert_eq!(engine.steps_completed(), 0);
    }

    #[test]
    fn test_phase_waits_for_duration() {
        let mut actuator = MotionActuator::new(CountingDriver::default());
        let mut relay = FlagRelay::default();
        let mut position = PositionModel::new(4, Microsteps::FULL);
        let timing = timing();

        let mut engine = CycleEngine::start(Millis(0), 4, &mut actuator, &mut relay).unwrap();

        let status = engine
            .tick(Millis(99), &timing, &mut actuator, &mut relay, &mut position)
            .unwrap();
        assert_eq!(status, CycleStatus::Waiting);
        assert_eq!(actuator.driver().pulses, 0);

        let status = engine
            .tick(Millis(100), &timing, &mut actuator, &mut relay, &mut position)
            .unwrap();
        assert_eq!(status, CycleStatus::Stepped { done: 1, total: 4 });
        assert!(!relay.active);
        assert_eq!(position.current(), 1);

        // Settle is timed from the step, not from the start.
        let status = engine
            .tick(Millis(299), &timing, &mut actuator, &mut relay, &mut position)
            .unwrap();
        assert_eq!(status, CycleStatus::Waiting);

        let status = engine
            .tick(Millis(300), &timing, &mut actuator, &mut relay, &mut position)
            .unwrap();
        assert_eq!(status, CycleStatus::Actuated);
        assert!(relay.active);
    }

    #[test]
    fn test_full_revolution() {
        let mut actuator = MotionActuator::new(CountingDriver::default());
        let mut relay = FlagRelay::default();
        let mut position = PositionModel::new(3, Microsteps::FULL);
        let timing = timing();

        let mut engine = CycleEngine::start(Millis(0), 3, &mut actuator, &mut relay).unwrap();

        let mut now = 0u32;
        let mut complete = false;
        for _ in 0..1000 {
            now += 50;
            if engine
                .tick(Millis(now), &timing, &mut actuator, &mut relay, &mut position)
                .unwrap()
                .is_complete()
            {
                complete = true;
                break;
            }
        }

        assert!(complete);
        assert_eq!(actuator.driver().pulses, 3);
        assert_eq!(position.current(), 0);
        assert!(!relay.active);
    }

    #[test]
    fn test_cancel_releases_relay() {
        let mut actuator = MotionActuator::new(CountingDriver::default());
        let mut relay = FlagRelay::default();

        let engine = CycleEngine::start(Millis(0), 10, &mut actuator, &mut relay).unwrap();
        engine.cancel(&mut relay).unwrap();

        assert!(!relay.active);
        assert_eq!(relay.writes, 2);
    }

    #[test]
    fn test_phase_survives_counter_rollover() {
        let mut actuator = MotionActuator::new(CountingDriver::default());
        let mut relay = FlagRelay::default();
        let mut position = PositionModel::new(4, Microsteps::FULL);
        let timing = timing();

        let start = Millis(u32::MAX - 20);
        let mut engine = CycleEngine::start(start, 4, &mut actuator, &mut relay).unwrap();

        let status = engine
            .tick(start + 100, &timing, &mut actuator, &mut relay, &mut position)
            .unwrap();
        assert_eq!(status, CycleStatus::Stepped { done: 1, total: 4 });
    }
}
