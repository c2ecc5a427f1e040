use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    Cancel,
    Back,
    Save,
    Deploy,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 4] = [
        ToolbarAction::Cancel,
        ToolbarAction::Back,
        ToolbarAction::Save,
        ToolbarAction::Deploy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolbarAction::Cancel => "Cancel",
            ToolbarAction::Back => "Back",
            ToolbarAction::Save => "Save Configuration",
            ToolbarAction::Deploy => "Deploy cluster",
        }
    }

    pub fn is_primary(self) -> bool {
        matches!(self, ToolbarAction::Deploy)
    }
}

impl fmt::Display for ToolbarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot the toolbar renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarState {
    pub submitting: bool,
    pub valid: bool,
}

impl ToolbarState {
    pub fn is_enabled(&self, action: ToolbarAction) -> bool {
        match action {
            ToolbarAction::Cancel | ToolbarAction::Back => true,
            ToolbarAction::Save => !self.submitting && self.valid,
            ToolbarAction::Deploy => false,
        }
    }

    pub fn show_saving(&self) -> bool {
        self.submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_requires_valid_idle_form() {
        let idle = ToolbarState {
            submitting: false,
            valid: true,
        };
        assert!(idle.is_enabled(ToolbarAction::Save));
        assert!(!idle.show_saving());

        let invalid = ToolbarState {
            submitting: false,
            valid: false,
        };
        assert!(!invalid.is_enabled(ToolbarAction::Save));

        let busy = ToolbarState {
            submitting: true,
            valid: true,
        };
        assert!(!busy.is_enabled(ToolbarAction::Save));
        assert!(busy.show_saving());
    }

    #[test]
    fn navigation_always_enabled_and_deploy_never() {
        for state in [
            ToolbarState {
                submitting: true,
                valid: false,
            },
            ToolbarState {
                submitting: false,
                valid: true,
            },
        ] {
            assert!(state.is_enabled(ToolbarAction::Cancel));
            assert!(state.is_enabled(ToolbarAction::Back));
            assert!(!state.is_enabled(ToolbarAction::Deploy));
        }
    }
}
