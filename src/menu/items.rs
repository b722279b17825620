//! Main menu entries.

/// One entry of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    /// Run a relay/step cycle over one full revolution.
    FullCycle,
    /// Move to an arbitrary step index by the shortest path.
    Positioning,
    /// Choose the microstep resolution.
    Microstep,
    /// Adjust how long the relay stays on.
    RelayOnTime,
    /// Adjust the settle time after each step.
    RelayOffTime,
    /// Release the coils so the platform turns freely.
    DisableMotor,
}

impl MenuItem {
    /// Every entry in display order.
    pub const ALL: [MenuItem; 6] = [
        MenuItem::FullCycle,
        MenuItem::Positioning,
        MenuItem::Microstep,
        MenuItem::RelayOnTime,
        MenuItem::RelayOffTime,
        MenuItem::DisableMotor,
    ];

    /// Labels of every entry in display order.
    pub const LABELS: [&'static str; 6] = [
        "1. Full cycle",
        "2. Positioning",
        "3. Microstep",
        "4. Relay on time",
        "5. Relay off time",
        "6. Disable motor",
    ];

    /// Number of entries.
    pub const COUNT: usize = Self::ALL.len();

    /// Look up the entry at a menu index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_order() {
        for (index, item) in MenuItem::ALL.iter().enumerate() {
            assert_eq!(MenuItem::from_index(index), Some(*item));
            assert!(item.label().starts_with(char::from(b'1' + index as u8)));
        }
        assert_eq!(MenuItem::from_index(MenuItem::COUNT), None);
    }
}
