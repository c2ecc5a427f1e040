use serde::{Deserialize, Serialize};

use crate::api::Cluster;

/// Steps of the cluster creation flow this page takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    BaremetalInventory,
    ClusterConfiguration,
    /// Not reachable yet; the toolbar keeps its action disabled.
    Deploy,
}

/// Messages for the parent that owns application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum WizardEvent {
    /// Leave the wizard for the cluster list.
    Cancelled,
    StepChanged(WizardStep),
    /// The inventory accepted the update and returned this record.
    ClusterUpdated(Cluster),
}

impl WizardEvent {
    /// Whether the page should close after emitting this event.
    pub fn leaves_page(&self) -> bool {
        matches!(self, WizardEvent::Cancelled | WizardEvent::StepChanged(_))
    }
}
