//! Render contract.

use crate::error::Result;

/// A dumb screen. All calls after [`DisplaySurface::init`] are
/// fire-and-forget; the controller never reads display state back.
pub trait DisplaySurface {
    /// Bring up the panel. Failure here is fatal for the controller.
    fn init(&mut self) -> Result<()>;

    /// Blank the screen.
    fn clear(&mut self);

    /// Menu entries this surface can show at once. The controller never
    /// asks for a wider window than this.
    fn menu_rows(&self) -> usize {
        usize::MAX
    }

    /// Draw the visible window of a menu with the cursor on `selected`.
    fn render_menu(&mut self, items: &[&str], selected: usize, window_start: usize, visible: usize);

    /// Draw cycle progress.
    fn render_progress(&mut self, steps_done: u32, steps_total: u32);

    /// Draw a numeric value being adjusted.
    fn render_setting(&mut self, label: &str, value: i32);

    /// Draw a short status message. Lines are separated by `'\n'`.
    fn render_status(&mut self, label: &str);
}
