use std::time::Duration;

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub show_help: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            show_help: true,
        }
    }
}

impl UiOptions {
    /// Toggles the key hint row under the toolbar.
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }
}
