//! 21 × 8 character screen, the text grid of a 128 × 64 panel with a 6 × 8 font.

use core::fmt::{self, Write};

use heapless::String;

use crate::error::Result;

use super::surface::DisplaySurface;

/// Characters per row.
pub const COLUMNS: usize = 21;
/// Rows on the screen.
pub const ROWS: usize = 8;

/// First row of the menu list; row 0 is the title.
const MENU_FIRST_ROW: usize = 1;
/// Rows 6 and 7 hold the help text.
const MENU_MAX_ROWS: usize = 5;
/// Width of the progress bar between its brackets.
const BAR_WIDTH: u32 = (COLUMNS - 2) as u32;

/// Writes into a fixed row, silently dropping what does not fit.
struct RowWriter<'a>(&'a mut String<COLUMNS>);

impl Write for RowWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Character-buffer [`DisplaySurface`].
///
/// Used on text panels and as a host-side stand-in for the real panel. Every
/// render replaces the whole frame.
#[derive(Debug, Clone, Default)]
pub struct TextScreen {
    rows: [String<COLUMNS>; ROWS],
    initialized: bool,
    frames: u32,
}

impl TextScreen {
    /// Create a blank screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of one row, without trailing padding.
    pub fn row(&self, index: usize) -> &str {
        self.rows.get(index).map(|r| r.trim_end()).unwrap_or("")
    }

    /// All rows.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.trim_end())
    }

    /// Check whether any row contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.rows.iter().any(|r| r.contains(needle))
    }

    /// Whether [`DisplaySurface::init`] has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of frames drawn since creation.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    fn begin_frame(&mut self) {
        for row in self.rows.iter_mut() {
            row.clear();
        }
        self.frames = self.frames.wrapping_add(1);
    }

    fn write_row(&mut self, index: usize, args: fmt::Arguments<'_>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.clear();
            let _ = RowWriter(row).write_fmt(args);
        }
    }
}

impl DisplaySurface for TextScreen {
    fn init(&mut self) -> Result<()> {
        self.begin_frame();
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) {
        self.begin_frame();
    }

    fn menu_rows(&self) -> usize {
        MENU_MAX_ROWS
    }

    fn render_menu(&mut self, items: &[&str], selected: usize, window_start: usize, visible: usize) {
        self.begin_frame();
        self.write_row(0, format_args!("===== MAIN MENU ====="));

        let rows = visible.min(MENU_MAX_ROWS);
        let end = (window_start + rows).min(items.len());
        for (offset, index) in (window_start..end).enumerate() {
            let cursor = if index == selected { '>' } else { ' ' };
            let marker = if offset == 0 && window_start > 0 {
                '^'
            } else if index + 1 == end && end < items.len() {
                'v'
            } else {
                ' '
            };
            self.write_row(
                MENU_FIRST_ROW + offset,
                format_args!("{} {:<18.18}{}", cursor, items[index], marker),
            );
        }

        self.write_row(6, format_args!("Turn: navigate"));
        self.write_row(7, format_args!("Press: select"));
    }

    fn render_progress(&mut self, steps_done: u32, steps_total: u32) {
        self.begin_frame();
        self.write_row(0, format_args!("=== CYCLE RUNNING ==="));
        self.write_row(2, format_args!("Step: {}/{}", steps_done, steps_total));

        let total = steps_total.max(1) as u64;
        let done = (steps_done as u64).min(total);
        let permille = done * 1000 / total;
        self.write_row(3, format_args!("Progress: {}.{}%", permille / 10, permille % 10));

        let filled = (done * BAR_WIDTH as u64 / total) as usize;
        let mut bar: String<COLUMNS> = String::new();
        let _ = bar.push('[');
        for i in 0..BAR_WIDTH as usize {
            let _ = bar.push(if i < filled { '#' } else { '-' });
        }
        let _ = bar.push(']');
        self.write_row(4, format_args!("{}", bar));

        self.write_row(7, format_args!("Press: cancel"));
    }

    fn render_setting(&mut self, label: &str, value: i32) {
        self.begin_frame();
        self.write_row(0, format_args!("{}", label));
        self.write_row(3, format_args!("  {}", value));
        self.write_row(6, format_args!("Turn: adjust"));
        self.write_row(7, format_args!("Press: confirm"));
    }

    fn render_status(&mut self, label: &str) {
        self.begin_frame();
        for (offset, line) in label.split('\n').take(ROWS - 2).enumerate() {
            self.write_row(2 + offset, format_args!("{}", line));
        }
    }
}

impl fmt::Display for TextScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "|{:<21}|", row.as_str())?;
        }
        Ok(())
    }
}
