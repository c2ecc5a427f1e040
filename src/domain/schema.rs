use std::fmt;

#[derive(Debug, Clone)]
pub struct FormSchema {
    pub title: String,
    pub sections: Vec<FormSection>,
}

#[derive(Debug, Clone)]
pub struct FormSection {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldSchema>,
}

/// Every editable attribute of [`crate::api::ClusterUpdateParams`].
///
/// `hostsRoles` is carried by the form but has no widget, so it is not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    OpenshiftVersion,
    BaseDnsDomain,
    ClusterNetworkCidr,
    ClusterNetworkHostPrefix,
    ServiceNetworkCidr,
    ApiVip,
    DnsVip,
    IngressVip,
    PullSecret,
    SshPublicKey,
}

impl FieldId {
    pub const ALL: [FieldId; 11] = [
        FieldId::Name,
        FieldId::OpenshiftVersion,
        FieldId::BaseDnsDomain,
        FieldId::ClusterNetworkCidr,
        FieldId::ClusterNetworkHostPrefix,
        FieldId::ServiceNetworkCidr,
        FieldId::ApiVip,
        FieldId::DnsVip,
        FieldId::IngressVip,
        FieldId::PullSecret,
        FieldId::SshPublicKey,
    ];

    /// Wire name, identical to the JSON key sent to the API.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::OpenshiftVersion => "openshiftVersion",
            FieldId::BaseDnsDomain => "baseDnsDomain",
            FieldId::ClusterNetworkCidr => "clusterNetworkCIDR",
            FieldId::ClusterNetworkHostPrefix => "clusterNetworkHostPrefix",
            FieldId::ServiceNetworkCidr => "serviceNetworkCIDR",
            FieldId::ApiVip => "apiVip",
            FieldId::DnsVip => "dnsVip",
            FieldId::IngressVip => "ingressVip",
            FieldId::PullSecret => "pullSecret",
            FieldId::SshPublicKey => "sshPublicKey",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Select(Vec<SelectOption>),
    TextArea,
}

#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub id: FieldId,
    pub title: String,
    pub help: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSchema {
    pub fn new(id: FieldId, title: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            title: title.into(),
            help: None,
            kind,
            required: true,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn name(&self) -> &'static str {
        self.id.as_str()
    }

    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.title)
        } else {
            self.title.clone()
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::TextArea)
    }
}
