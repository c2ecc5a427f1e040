use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Handle;

use crate::api::{Cluster, ClusterApi};

use super::{controller::ClusterForm, events::WizardEvent, options::UiOptions, runtime::App};

/// Terminal front end for the cluster configuration page.
pub struct ClusterWizard {
    cluster: Cluster,
    api: Arc<dyn ClusterApi>,
    options: UiOptions,
}

impl ClusterWizard {
    pub fn new(cluster: Cluster, api: Arc<dyn ClusterApi>) -> Self {
        Self {
            cluster,
            api,
            options: UiOptions::default(),
        }
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Blocks on the terminal until the user leaves the page. Saves run on
    /// `runtime`, so call this from outside any async context.
    pub fn run(self, runtime: Handle) -> Result<Vec<WizardEvent>> {
        let ClusterWizard {
            cluster,
            api,
            options,
        } = self;

        let form = ClusterForm::new(&cluster, api, runtime)?;
        let mut app = App::new(form, options);
        app.run()
    }
}
