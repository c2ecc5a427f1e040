use super::schema::{FieldId, FieldKind, FieldSchema, FormSchema, FormSection, SelectOption};

pub const FORM_TITLE: &str = "Configure a bare metal OpenShift cluster";

pub const OPENSHIFT_VERSIONS: [&str; 3] = ["4.4", "4.5", "4.6"];

pub const PULL_SECRET_URL: &str = "https://cloud.redhat.com/openshift/install/metal/user-provisioned";

/// Layout of the cluster configuration page, in display order.
pub fn cluster_form_schema() -> FormSchema {
    FormSchema {
        title: FORM_TITLE.to_string(),
        sections: vec![general_section(), networking_section(), security_section()],
    }
}

fn general_section() -> FormSection {
    let versions = OPENSHIFT_VERSIONS
        .iter()
        .map(|version| SelectOption::new(format!("OpenShift {version}"), *version))
        .collect();
    FormSection {
        id: "general".to_string(),
        title: "General".to_string(),
        fields: vec![
            FieldSchema::new(FieldId::Name, "Cluster name", FieldKind::Text),
            FieldSchema::new(
                FieldId::OpenshiftVersion,
                "OpenShift Version",
                FieldKind::Select(versions),
            ),
            FieldSchema::new(FieldId::BaseDnsDomain, "Base DNS domain", FieldKind::Text)
                .with_help(
                    "The base domain of the cluster. All DNS records must be sub-domains of this base and include the cluster name.",
                ),
        ],
    }
}

fn networking_section() -> FormSection {
    FormSection {
        id: "networking".to_string(),
        title: "Networking".to_string(),
        fields: vec![
            FieldSchema::new(
                FieldId::ClusterNetworkCidr,
                "Cluster Network CIDR",
                FieldKind::Text,
            )
            .with_help(
                "IP address block from which Pod IPs are allocated. This block must not overlap with existing physical networks.",
            ),
            FieldSchema::new(
                FieldId::ClusterNetworkHostPrefix,
                "Cluster Network Host Prefix",
                FieldKind::Integer,
            )
            .with_help(
                "The subnet prefix length to assign to each individual node. A prefix of 23 gives each node a /23 out of the cluster network, which allows for 510 pod IPs.",
            ),
            FieldSchema::new(
                FieldId::ServiceNetworkCidr,
                "Service Network CIDR",
                FieldKind::Text,
            )
            .with_help("The IP address pool to use for service IP addresses. Only one pool is allowed."),
            FieldSchema::new(FieldId::ApiVip, "API Virtual IP", FieldKind::Text)
                .with_help("Virtual IP used to reach the OpenShift cluster API."),
            FieldSchema::new(FieldId::DnsVip, "Internal DNS Virtual IP", FieldKind::Text)
                .with_help(
                    "Virtual IP used internally by the cluster for automating internal DNS requirements.",
                ),
            FieldSchema::new(FieldId::IngressVip, "Ingress Virtual IP", FieldKind::Text)
                .with_help("Virtual IP used for cluster ingress traffic."),
        ],
    }
}

fn security_section() -> FormSection {
    FormSection {
        id: "security".to_string(),
        title: "Security".to_string(),
        fields: vec![
            FieldSchema::new(FieldId::PullSecret, "Pull Secret", FieldKind::TextArea).with_help(
                format!(
                    "The pull secret obtained from the Pull Secret page on the Red Hat OpenShift Cluster Manager site ({PULL_SECRET_URL})."
                ),
            ),
            FieldSchema::new(FieldId::SshPublicKey, "SSH Public Key", FieldKind::TextArea)
                .with_help("SSH public key for debugging OpenShift nodes."),
        ],
    }
}
