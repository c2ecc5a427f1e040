mod client;
mod error;
mod types;

pub use client::{ClusterApi, HttpClusterApi};
pub use error::ApiError;
pub use types::{Cluster, ClusterUpdateParams, Host, HostRole, HostRoleAssignment};
