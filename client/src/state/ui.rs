#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page-shell UI state: theme, sidebar and mobile menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    pub mobile_menu_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Following a link closes the mobile menu; the desktop sidebar keeps its state.
    pub fn on_navigate(&mut self) {
        self.mobile_menu_open = false;
    }
}
