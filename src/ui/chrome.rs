//! Nav bar state owned by the shell
//!
//! Both flags are purely visual and start cleared whenever a new route is
//! shown.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl ChromeState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Record the current vertical scroll offset
    pub fn on_scroll(&mut self, offset_y: f32, threshold: f32) {
        self.scrolled = offset_y > threshold;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
