use std::fmt;

use serde::{Deserialize, Serialize};

/// Cluster snapshot as returned by the inventory API.
///
/// Everything except the identifier is optional: a freshly registered
/// cluster carries little more than its id and name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openshift_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dns_domain: Option<String>,
    #[serde(
        rename = "clusterNetworkCIDR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cluster_network_cidr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_network_host_prefix: Option<i64>,
    #[serde(
        rename = "serviceNetworkCIDR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_network_cidr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_vip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_vip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress_vip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<Host>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostRole {
    Master,
    Worker,
}

impl HostRole {
    pub fn as_str(self) -> &'static str {
        match self {
            HostRole::Master => "master",
            HostRole::Worker => "worker",
        }
    }
}

impl fmt::Display for HostRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role assignment for one host.
///
/// The role travels as its wire string so that a value the inventory sent
/// but this client does not know survives untouched until validation
/// rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRoleAssignment {
    pub id: String,
    pub role: String,
}

impl HostRoleAssignment {
    pub fn new(id: impl Into<String>, role: HostRole) -> Self {
        Self {
            id: id.into(),
            role: role.as_str().to_string(),
        }
    }
}

/// Edit buffer sent with `PATCH /clusters/{id}`. Every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterUpdateParams {
    pub name: String,
    pub openshift_version: String,
    pub base_dns_domain: String,
    #[serde(rename = "clusterNetworkCIDR")]
    pub cluster_network_cidr: String,
    pub cluster_network_host_prefix: i64,
    #[serde(rename = "serviceNetworkCIDR")]
    pub service_network_cidr: String,
    pub api_vip: String,
    pub dns_vip: String,
    pub ingress_vip: String,
    pub pull_secret: String,
    pub ssh_public_key: String,
    pub hosts_roles: Vec<HostRoleAssignment>,
}
