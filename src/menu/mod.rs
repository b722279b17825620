//! Menu module for rotary-indexer.
//!
//! Scrolling main-menu navigation and the adjustable values of the setup screens.

mod adjust;
mod items;
mod navigator;

pub use adjust::{Adjustment, Bounds};
pub use items::MenuItem;
pub use navigator::Navigator;
