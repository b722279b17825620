//! Selection index with a minimally shifting visible window.

use crate::fmt::trace;

/// Main-menu cursor.
///
/// Invariants after every update:
/// `window_start <= selected < window_start + visible` and
/// `window_start + visible <= item_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    selected: usize,
    window_start: usize,
    item_count: usize,
    visible: usize,
}

impl Navigator {
    /// Create a cursor over `item_count` entries showing `visible` at a time.
    ///
    /// `visible` is clamped to `1..=item_count`.
    pub fn new(item_count: usize, visible: usize) -> Self {
        let item_count = item_count.max(1);
        Self {
            selected: 0,
            window_start: 0,
            item_count,
            visible: visible.clamp(1, item_count),
        }
    }

    /// Move the selection by `delta` entries, wrapping at both ends, and
    /// scroll the window only as far as needed to keep it visible.
    ///
    /// Returns `true` if the selection changed.
    pub fn navigate(&mut self, delta: i32) -> bool {
        if delta == 0 {
            return false;
        }

        let previous = self.selected;
        let count = self.item_count as i64;
        self.selected = (self.selected as i64 + delta as i64).rem_euclid(count) as usize;

        if self.selected < self.window_start {
            self.window_start = self.selected;
        } else if self.selected >= self.window_start + self.visible {
            self.window_start = self.selected + 1 - self.visible;
        }

        trace!("menu selection {} window {}", self.selected, self.window_start);
        self.selected != previous
    }

    /// Back to the first entry with the window at the top.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.window_start = 0;
    }

    /// Index of the highlighted entry.
    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first visible entry.
    #[inline]
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Number of rows shown at once.
    #[inline]
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Number of entries.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Indices of the visible entries.
    pub fn visible_range(&self) -> core::ops::Range<usize> {
        self.window_start..self.window_start + self.visible
    }
}
