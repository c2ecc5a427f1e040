mod actions;
mod error;
mod field;
mod initial;
mod reducers;
mod section;
mod state;

pub use actions::FormCommand;
pub use error::FieldCoercionError;
pub use field::{FieldState, FieldValue};
pub use initial::{DEFAULT_OPENSHIFT_VERSION, initial_values};
pub use reducers::{FormEngine, ValidationReport};
pub use section::SectionState;
pub use state::FormState;
