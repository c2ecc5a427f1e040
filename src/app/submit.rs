use std::sync::Arc;

use tokio::{
    runtime::Handle,
    sync::oneshot::{self, error::TryRecvError},
    task::JoinHandle,
};

use crate::api::{ApiError, Cluster, ClusterApi, ClusterUpdateParams};

pub(crate) type SubmitResult = Result<Cluster, ApiError>;

pub(crate) enum SubmitPoll {
    Pending,
    Finished(SubmitResult),
    /// The task ended without reporting, e.g. it panicked.
    Lost,
}

/// One in-flight PATCH. Dropping it aborts the request, so a form that goes
/// away never sees a late result.
pub(crate) struct PendingSubmit {
    receiver: oneshot::Receiver<SubmitResult>,
    task: JoinHandle<()>,
}

impl PendingSubmit {
    pub(crate) fn spawn(
        runtime: &Handle,
        api: Arc<dyn ClusterApi>,
        cluster_id: String,
        params: ClusterUpdateParams,
    ) -> Self {
        let (sender, receiver) = oneshot::channel();
        let task = runtime.spawn(async move {
            let result = api.patch_cluster(&cluster_id, &params).await;
            // the receiver is gone when the form was dropped first
            let _ = sender.send(result);
        });
        Self { receiver, task }
    }

    pub(crate) fn poll(&mut self) -> SubmitPoll {
        match self.receiver.try_recv() {
            Ok(result) => SubmitPoll::Finished(result),
            Err(TryRecvError::Empty) => SubmitPoll::Pending,
            Err(TryRecvError::Closed) => SubmitPoll::Lost,
        }
    }
}

impl Drop for PendingSubmit {
    fn drop(&mut self) {
        self.task.abort();
    }
}
