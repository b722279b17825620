//! Operator interface and scheduler configuration from TOML.

use serde::Deserialize;

/// Menu layout and scheduler pacing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Menu rows shown at once; the list scrolls to keep the selection inside.
    pub visible_menu_items: u8,

    /// Fixed delay at the end of each scheduler tick.
    pub tick_ms: u32,

    /// How long completion and position notices stay up before the menu returns.
    pub notice_ms: u32,

    /// How long the startup status stays up before the menu is drawn.
    pub splash_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            visible_menu_items: 3,
            tick_ms: 10,
            notice_ms: 2000,
            splash_ms: 2500,
        }
    }
}
