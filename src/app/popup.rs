use crate::{domain::FieldId, form::FieldState, presentation::PopupRender};

/// Option list opened over a select field.
pub(crate) struct PopupState {
    field: FieldId,
    title: String,
    options: Vec<String>,
    selected: usize,
}

impl PopupState {
    pub(crate) fn from_field(field: &FieldState) -> Option<Self> {
        let (options, selected) = field.select_options()?;
        Some(Self {
            field: field.schema.id,
            title: field.schema.title.clone(),
            options: options.iter().map(|option| option.label.clone()).collect(),
            selected,
        })
    }

    pub(crate) fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.options.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub(crate) fn selection(&self) -> usize {
        self.selected
    }

    pub(crate) fn field(&self) -> FieldId {
        self.field
    }

    pub(crate) fn as_render(&self) -> PopupRender<'_> {
        PopupRender {
            title: &self.title,
            options: &self.options,
            selected: self.selected,
        }
    }
}
