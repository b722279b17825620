//! Cycle phases and per-tick outcomes.

/// Which timed wait the cycle is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclePhase {
    /// Relay energized, waiting out the relay-on duration.
    RelayActuating,
    /// Step issued, waiting out the settle duration.
    Settling,
}

impl CyclePhase {
    /// Get phase name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            CyclePhase::RelayActuating => "relay",
            CyclePhase::Settling => "settle",
        }
    }
}

/// What a single [`CycleEngine::tick`](super::CycleEngine::tick) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleStatus {
    /// The current phase has not elapsed yet.
    Waiting,
    /// One step was issued; progress should be redrawn.
    Stepped {
        /// Steps completed so far, including this one.
        done: u32,
        /// Steps in the full cycle.
        total: u32,
    },
    /// The relay was re-energized for the next iteration.
    Actuated,
    /// The last settle elapsed; the revolution is done.
    Complete,
}

impl CycleStatus {
    /// Check if the cycle has finished.
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, CycleStatus::Complete)
    }
}
