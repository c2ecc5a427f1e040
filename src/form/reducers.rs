use crate::validation::{ClusterValidator, FieldErrors};

use super::{actions::FormCommand, state::FormState};

/// Result of one whole-record validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: FieldErrors,
    pub form_errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn apply_command(state: &mut FormState, command: FormCommand) {
    match command {
        FormCommand::FocusNextField => state.focus_next_field(),
        FormCommand::FocusPrevField => state.focus_prev_field(),
        FormCommand::FocusNextSection(delta) => state.focus_next_section(delta),
        FormCommand::FieldEdited { .. } | FormCommand::Validate => {}
    }
}

pub struct FormEngine<'a> {
    state: &'a mut FormState,
    validator: &'a ClusterValidator,
}

impl<'a> FormEngine<'a> {
    pub fn new(state: &'a mut FormState, validator: &'a ClusterValidator) -> Self {
        Self { state, validator }
    }

    /// Focus commands return `None`; edits and explicit validation re-check
    /// the whole record.
    pub fn dispatch(&mut self, command: FormCommand) -> Option<ValidationReport> {
        match command {
            FormCommand::FieldEdited { field } => {
                if let Some(state) = self.state.field_mut(field) {
                    state.touch();
                }
                tracing::debug!(%field, "field edited");
                Some(self.validate())
            }
            FormCommand::Validate => Some(self.validate()),
            other => {
                apply_command(self.state, other);
                None
            }
        }
    }

    pub fn validate(&mut self) -> ValidationReport {
        let errors = self
            .validator
            .validate_value(&self.state.to_value())
            .into_errors();
        let form_errors = self.state.apply_errors(&errors);
        ValidationReport {
            errors,
            form_errors,
        }
    }
}
