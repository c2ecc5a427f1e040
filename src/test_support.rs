use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::runtime::Runtime;

use crate::{
    api::{ApiError, Cluster, ClusterApi, ClusterUpdateParams, Host},
    app::ClusterForm,
};

#[derive(Clone, Copy)]
pub(crate) enum Behaviour {
    Succeed,
    Fail,
    Hang,
}

pub(crate) struct FakeApi {
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn new(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClusterApi for FakeApi {
    async fn get_cluster(&self, id: &str) -> Result<Cluster, ApiError> {
        Ok(Cluster {
            id: id.to_string(),
            ..Cluster::default()
        })
    }

    async fn patch_cluster(
        &self,
        id: &str,
        params: &ClusterUpdateParams,
    ) -> Result<Cluster, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Succeed => Ok(Cluster {
                id: id.to_string(),
                name: Some(params.name.clone()),
                ..Cluster::default()
            }),
            Behaviour::Fail => Err(ApiError::Status {
                url: format!("http://inventory/clusters/{id}"),
                status: 400,
                body: Some(r#"{"reason":"bad vip"}"#.to_string()),
            }),
            Behaviour::Hang => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Err(ApiError::Status {
                    url: format!("http://inventory/clusters/{id}"),
                    status: 504,
                    body: None,
                })
            }
        }
    }
}

pub(crate) fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("runtime")
}

/// `{id: "c1", name: "demo", hosts: [{id: "h1", role: "worker"}]}`
pub(crate) fn demo_cluster() -> Cluster {
    Cluster {
        id: "c1".to_string(),
        name: Some("demo".to_string()),
        hosts: Some(vec![Host {
            id: "h1".to_string(),
            role: Some("worker".to_string()),
            ..Host::default()
        }]),
        ..Cluster::default()
    }
}

/// A snapshot that passes validation as is.
pub(crate) fn complete_cluster() -> Cluster {
    Cluster {
        id: "c1".to_string(),
        name: Some("demo".to_string()),
        openshift_version: Some("4.5".to_string()),
        base_dns_domain: Some("example.com".to_string()),
        cluster_network_cidr: Some("10.128.0.0/14".to_string()),
        cluster_network_host_prefix: Some(23),
        service_network_cidr: Some("172.30.0.0/16".to_string()),
        api_vip: Some("192.168.126.100".to_string()),
        dns_vip: Some("192.168.126.101".to_string()),
        ingress_vip: Some("192.168.126.102".to_string()),
        pull_secret: Some(r#"{"auths":{}}"#.to_string()),
        ssh_public_key: Some("ssh-rsa AAAAB3NzaC1yc2E admin@example.com".to_string()),
        status: Some("insufficient".to_string()),
        hosts: Some(vec![Host {
            id: "h1".to_string(),
            role: Some("master".to_string()),
            ..Host::default()
        }]),
    }
}

pub(crate) fn form(cluster: &Cluster, api: Arc<FakeApi>, runtime: &Runtime) -> ClusterForm {
    ClusterForm::new(cluster, api, runtime.handle().clone()).expect("form")
}

/// Polls until the in-flight save resolves.
pub(crate) fn settle(form: &mut ClusterForm) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while form.is_submitting() && Instant::now() < deadline {
        form.poll();
        thread::sleep(Duration::from_millis(5));
    }
    assert!(!form.is_submitting(), "save did not settle");
}
