use crate::{
    api::{Cluster, ClusterUpdateParams, HostRoleAssignment},
    domain::FieldId,
};

pub const DEFAULT_OPENSHIFT_VERSION: &str = "4.4";

/// Derives the edit buffer from a cluster snapshot. Absent attributes fall
/// back to an empty string, `0` for the host prefix and
/// [`DEFAULT_OPENSHIFT_VERSION`] for the release.
pub fn initial_values(cluster: &Cluster) -> ClusterUpdateParams {
    ClusterUpdateParams {
        name: text_or_empty(&cluster.name),
        openshift_version: cluster
            .openshift_version
            .clone()
            .filter(|version| !version.is_empty())
            .unwrap_or_else(|| DEFAULT_OPENSHIFT_VERSION.to_string()),
        base_dns_domain: text_or_empty(&cluster.base_dns_domain),
        cluster_network_cidr: text_or_empty(&cluster.cluster_network_cidr),
        cluster_network_host_prefix: cluster.cluster_network_host_prefix.unwrap_or(0),
        service_network_cidr: text_or_empty(&cluster.service_network_cidr),
        api_vip: text_or_empty(&cluster.api_vip),
        dns_vip: text_or_empty(&cluster.dns_vip),
        ingress_vip: text_or_empty(&cluster.ingress_vip),
        pull_secret: text_or_empty(&cluster.pull_secret),
        ssh_public_key: text_or_empty(&cluster.ssh_public_key),
        hosts_roles: cluster
            .hosts
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|host| HostRoleAssignment {
                id: host.id.clone(),
                role: host.role.clone().unwrap_or_default(),
            })
            .collect(),
    }
}

/// Text shown in the widget bound to `id`.
pub(crate) fn field_text(params: &ClusterUpdateParams, id: FieldId) -> String {
    match id {
        FieldId::Name => params.name.clone(),
        FieldId::OpenshiftVersion => params.openshift_version.clone(),
        FieldId::BaseDnsDomain => params.base_dns_domain.clone(),
        FieldId::ClusterNetworkCidr => params.cluster_network_cidr.clone(),
        FieldId::ClusterNetworkHostPrefix => params.cluster_network_host_prefix.to_string(),
        FieldId::ServiceNetworkCidr => params.service_network_cidr.clone(),
        FieldId::ApiVip => params.api_vip.clone(),
        FieldId::DnsVip => params.dns_vip.clone(),
        FieldId::IngressVip => params.ingress_vip.clone(),
        FieldId::PullSecret => params.pull_secret.clone(),
        FieldId::SshPublicKey => params.ssh_public_key.clone(),
    }
}

pub(crate) fn assign_text(params: &mut ClusterUpdateParams, id: FieldId, text: String) {
    let slot = match id {
        FieldId::Name => &mut params.name,
        FieldId::OpenshiftVersion => &mut params.openshift_version,
        FieldId::BaseDnsDomain => &mut params.base_dns_domain,
        FieldId::ClusterNetworkCidr => &mut params.cluster_network_cidr,
        FieldId::ServiceNetworkCidr => &mut params.service_network_cidr,
        FieldId::ApiVip => &mut params.api_vip,
        FieldId::DnsVip => &mut params.dns_vip,
        FieldId::IngressVip => &mut params.ingress_vip,
        FieldId::PullSecret => &mut params.pull_secret,
        FieldId::SshPublicKey => &mut params.ssh_public_key,
        FieldId::ClusterNetworkHostPrefix => return,
    };
    *slot = text;
}

fn text_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Host;

    #[test]
    fn absent_attributes_take_documented_defaults() {
        let params = initial_values(&Cluster {
            id: "c1".to_string(),
            ..Cluster::default()
        });
        assert_eq!(params.name, "");
        assert_eq!(params.openshift_version, DEFAULT_OPENSHIFT_VERSION);
        assert_eq!(params.cluster_network_cidr, "");
        assert_eq!(params.cluster_network_host_prefix, 0);
        assert_eq!(params.pull_secret, "");
        assert!(params.hosts_roles.is_empty());
    }

    #[test]
    fn present_attributes_are_copied() {
        let params = initial_values(&Cluster {
            id: "c1".to_string(),
            openshift_version: Some("4.6".to_string()),
            cluster_network_cidr: Some("10.128.0.0/14".to_string()),
            cluster_network_host_prefix: Some(23),
            ..Cluster::default()
        });
        assert_eq!(params.openshift_version, "4.6");
        assert_eq!(params.cluster_network_cidr, "10.128.0.0/14");
        assert_eq!(params.cluster_network_host_prefix, 23);
    }

    #[test]
    fn host_roles_keep_order_and_values() {
        let hosts = ["h3", "h1", "h2"]
            .into_iter()
            .zip(["master", "worker", "bootstrap"])
            .map(|(id, role)| Host {
                id: id.to_string(),
                role: Some(role.to_string()),
                ..Host::default()
            })
            .collect();
        let params = initial_values(&Cluster {
            id: "c1".to_string(),
            hosts: Some(hosts),
            ..Cluster::default()
        });
        let pairs: Vec<(&str, &str)> = params
            .hosts_roles
            .iter()
            .map(|assignment| (assignment.id.as_str(), assignment.role.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("h3", "master"), ("h1", "worker"), ("h2", "bootstrap")]
        );
    }

    #[test]
    fn field_text_round_trips_through_assign() {
        let mut params = ClusterUpdateParams::default();
        assign_text(&mut params, FieldId::ApiVip, "10.0.0.1".to_string());
        assert_eq!(field_text(&params, FieldId::ApiVip), "10.0.0.1");
    }
}
