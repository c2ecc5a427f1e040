mod layout;
mod schema;

pub use layout::{FORM_TITLE, OPENSHIFT_VERSIONS, PULL_SECRET_URL, cluster_form_schema};
pub use schema::{FieldId, FieldKind, FieldSchema, FormSchema, FormSection, SelectOption};
