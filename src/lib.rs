#![deny(rust_2018_idioms)]

pub mod api;
mod app;
pub mod config;
pub mod domain;
pub mod form;
pub mod io;
mod presentation;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use api::{ApiError, Cluster, ClusterApi, ClusterUpdateParams, HttpClusterApi};
pub use app::{
    ClusterForm, ClusterWizard, FormStatus, READY_STATUS, SAVE_FAILED_MESSAGE, StatusLine,
    SubmitStart, ToolbarAction, ToolbarState, UiOptions, WizardEvent, WizardStep,
};
pub use config::ClientConfig;
pub use form::initial_values;
pub use validation::{ClusterValidator, FieldErrors, ValidationOutcome};

pub mod prelude {
    pub use super::{
        Cluster, ClusterApi, ClusterForm, ClusterWizard, ClusterUpdateParams, HttpClusterApi,
        UiOptions, WizardEvent,
    };
}
