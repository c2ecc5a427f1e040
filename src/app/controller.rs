use std::{collections::VecDeque, sync::Arc};

use anyhow::Result;
use tokio::runtime::Handle;

use crate::{
    api::{ApiError, Cluster, ClusterApi, ClusterUpdateParams},
    domain::{FieldId, cluster_form_schema},
    form::{
        FieldCoercionError, FormCommand, FormEngine, FormState, ValidationReport, initial_values,
    },
    validation::{ClusterValidator, FieldErrors},
};

use super::{
    events::{WizardEvent, WizardStep},
    status::{FormStatus, SAVE_FAILED_MESSAGE, StatusLine},
    submit::{PendingSubmit, SubmitPoll, SubmitResult},
    toolbar::{ToolbarAction, ToolbarState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStart {
    Started,
    /// Validation failed; every field is now touched so errors show inline.
    Invalid,
    /// A save is already running.
    InFlight,
}

/// Headless controller behind the cluster configuration page.
///
/// Owns the edit buffer, the latest validation report, the status alert and
/// the in-flight save. Cross-page effects are queued as [`WizardEvent`]s and
/// drained by the owner through [`ClusterForm::take_events`].
pub struct ClusterForm {
    cluster_id: String,
    form_state: FormState,
    validator: ClusterValidator,
    api: Arc<dyn ClusterApi>,
    runtime: Handle,
    status: FormStatus,
    status_line: StatusLine,
    report: ValidationReport,
    pending: Option<PendingSubmit>,
    events: VecDeque<WizardEvent>,
}

impl ClusterForm {
    pub fn new(cluster: &Cluster, api: Arc<dyn ClusterApi>, runtime: Handle) -> Result<Self> {
        let validator = ClusterValidator::new()?;
        let form_state = FormState::from_params(&cluster_form_schema(), &initial_values(cluster));
        let mut form = Self {
            cluster_id: cluster.id.clone(),
            form_state,
            validator,
            api,
            runtime,
            status: FormStatus::default(),
            status_line: StatusLine::new(),
            report: ValidationReport::default(),
            pending: None,
            events: VecDeque::new(),
        };
        form.validate();
        tracing::debug!(cluster_id = %form.cluster_id, valid = form.is_valid(), "cluster form mounted");
        Ok(form)
    }

    pub fn cluster_id(&self) -> &str {
        &self.cluster_id
    }

    pub fn form_state(&self) -> &FormState {
        &self.form_state
    }

    pub(crate) fn form_state_mut(&mut self) -> &mut FormState {
        &mut self.form_state
    }

    pub fn values(&self) -> Result<ClusterUpdateParams, FieldCoercionError> {
        self.form_state.try_build_params()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.report.errors
    }

    pub fn form_errors(&self) -> &[String] {
        &self.report.form_errors
    }

    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub(crate) fn status_line_mut(&mut self) -> &mut StatusLine {
        &mut self.status_line
    }

    pub fn toolbar(&self) -> ToolbarState {
        ToolbarState {
            submitting: self.is_submitting(),
            valid: self.is_valid(),
        }
    }

    /// Sets a field as if typed and re-validates. Returns `false` for a
    /// field the page does not show.
    pub fn set_field(&mut self, id: FieldId, text: &str) -> bool {
        let Some(field) = self.form_state.field_mut(id) else {
            return false;
        };
        field.set_text(text);
        self.dispatch(FormCommand::FieldEdited { field: id });
        true
    }

    pub fn dispatch(&mut self, command: FormCommand) {
        let mut engine = FormEngine::new(&mut self.form_state, &self.validator);
        if let Some(report) = engine.dispatch(command) {
            self.report = report;
        }
    }

    pub fn validate(&mut self) -> bool {
        self.dispatch(FormCommand::Validate);
        self.is_valid()
    }

    pub fn submit(&mut self) -> SubmitStart {
        if self.pending.is_some() {
            tracing::debug!(cluster_id = %self.cluster_id, "save already in flight");
            return SubmitStart::InFlight;
        }

        self.form_state.touch_all();
        if !self.validate() {
            self.status_line.issues_remaining(self.report.errors.len());
            return SubmitStart::Invalid;
        }
        let params = match self.form_state.try_build_params() {
            Ok(params) => params,
            Err(err) => {
                self.report.errors.insert(err.field.clone(), err.message.clone());
                self.form_state.apply_errors(&self.report.errors);
                self.status_line.set_raw(err.to_string());
                return SubmitStart::Invalid;
            }
        };

        tracing::info!(cluster_id = %self.cluster_id, "saving cluster configuration");
        self.pending = Some(PendingSubmit::spawn(
            &self.runtime,
            Arc::clone(&self.api),
            self.cluster_id.clone(),
            params,
        ));
        self.status_line.saving();
        SubmitStart::Started
    }

    /// Collects a finished save, if any. Returns `true` when state changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        match pending.poll() {
            SubmitPoll::Pending => false,
            SubmitPoll::Finished(result) => {
                self.pending = None;
                self.finish(result);
                true
            }
            SubmitPoll::Lost => {
                self.pending = None;
                tracing::error!(cluster_id = %self.cluster_id, "save task ended without a result");
                self.status.set_error(SAVE_FAILED_MESSAGE);
                self.status_line.set_raw(SAVE_FAILED_MESSAGE);
                true
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.status.dismiss();
    }

    /// Runs a toolbar action. Returns `false` when the action is disabled
    /// or did not start.
    pub fn activate(&mut self, action: ToolbarAction) -> bool {
        tracing::debug!(%action, "toolbar action");
        match action {
            ToolbarAction::Cancel => {
                self.events.push_back(WizardEvent::Cancelled);
                true
            }
            ToolbarAction::Back => {
                self.events
                    .push_back(WizardEvent::StepChanged(WizardStep::BaremetalInventory));
                true
            }
            ToolbarAction::Save => self.submit() == SubmitStart::Started,
            ToolbarAction::Deploy => {
                self.status_line
                    .set_raw("Deploying the cluster is not available yet");
                false
            }
        }
    }

    pub fn take_events(&mut self) -> Vec<WizardEvent> {
        self.events.drain(..).collect()
    }

    fn finish(&mut self, result: SubmitResult) {
        match result {
            Ok(cluster) => {
                tracing::info!(cluster_id = %self.cluster_id, "cluster configuration saved");
                self.form_state.mark_clean();
                self.status_line.saved();
                self.events.push_back(WizardEvent::ClusterUpdated(cluster));
            }
            Err(err) => self.fail(&err),
        }
    }

    fn fail(&mut self, err: &ApiError) {
        tracing::error!(
            cluster_id = %self.cluster_id,
            error = %err,
            status = ?err.status(),
            response = err.response_body().unwrap_or("<none>"),
            "failed to update the cluster"
        );
        self.status.set_error(SAVE_FAILED_MESSAGE);
        self.status_line.set_raw(SAVE_FAILED_MESSAGE);
    }
}

impl Drop for ClusterForm {
    fn drop(&mut self) {
        if self.pending.is_some() {
            tracing::debug!(
                cluster_id = %self.cluster_id,
                "form closed with a save in flight; aborting"
            );
        }
    }
}
