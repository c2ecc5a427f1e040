use crate::domain::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    FocusNextField,
    FocusPrevField,
    FocusNextSection(i32),
    FieldEdited { field: FieldId },
    Validate,
}
