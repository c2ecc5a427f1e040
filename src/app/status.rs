pub const SAVE_FAILED_MESSAGE: &str = "Failed to update the cluster.";

/// Form level status; holds the one user facing error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    error: Option<String>,
}

impl FormStatus {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.error = None;
    }
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to save the configuration.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub fn saving(&mut self) {
        self.message = "Saving configuration...".to_string();
    }

    pub fn saved(&mut self) {
        self.message = "Configuration saved".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
