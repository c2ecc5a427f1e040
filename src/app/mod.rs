mod controller;
mod events;
mod input;
mod options;
mod popup;
mod runtime;
mod status;
mod submit;
mod terminal;
mod toolbar;
mod wizard;

pub use controller::{ClusterForm, SubmitStart};
pub use events::{WizardEvent, WizardStep};
pub use options::UiOptions;
pub use status::{FormStatus, READY_STATUS, SAVE_FAILED_MESSAGE, StatusLine};
pub use toolbar::{ToolbarAction, ToolbarState};
pub use wizard::ClusterWizard;
