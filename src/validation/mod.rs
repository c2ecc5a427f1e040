//! Whole-record validation of the cluster edit buffer.
//!
//! Rules live in an embedded JSON Schema. Every violation is reported under
//! the dotted path of the offending field (`clusterNetworkCIDR`,
//! `hostsRoles.0.role`), keeping only the highest priority rule per field.
//! Human readable messages come from the schema's `x-messages` annotation.

use std::fmt;

use anyhow::{Context, Result, anyhow};
use indexmap::IndexMap;
use ipnet::IpNet;
use jsonschema::Validator;
use serde_json::Value;

use crate::api::ClusterUpdateParams;

const CLUSTER_SCHEMA: &str = include_str!("cluster.schema.json");

/// Key used for violations that do not belong to a single field.
pub const FORM_ERROR_KEY: &str = "";

/// Lower index wins when one field breaks several rules.
const KEYWORD_PRIORITY: [&str; 9] = [
    "type",
    "required",
    "minLength",
    "maxLength",
    "enum",
    "format",
    "pattern",
    "minimum",
    "maximum",
];

/// Field name to message of its first violated rule.
pub type FieldErrors = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(FieldErrors),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn into_errors(self) -> FieldErrors {
        match self {
            ValidationOutcome::Valid => FieldErrors::new(),
            ValidationOutcome::Invalid(errors) => errors,
        }
    }
}

pub struct ClusterValidator {
    schema: Value,
    validator: Validator,
}

impl fmt::Debug for ClusterValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterValidator")
            .field("schema", &self.schema.get("title"))
            .finish_non_exhaustive()
    }
}

impl ClusterValidator {
    /// Validator for the bundled cluster schema.
    pub fn new() -> Result<Self> {
        let schema: Value =
            serde_json::from_str(CLUSTER_SCHEMA).context("bundled cluster schema is not JSON")?;
        Self::from_schema(schema)
    }

    pub fn from_schema(schema: Value) -> Result<Self> {
        let validator = jsonschema::options()
            .should_validate_formats(true)
            .with_format("cidr", is_cidr)
            .build(&schema)
            .map_err(|err| anyhow!("failed to compile cluster schema: {err}"))?;
        Ok(Self { schema, validator })
    }

    pub fn schema(&self) -> &Value {
        &self.schema
    }

    pub fn validate(&self, params: &ClusterUpdateParams) -> ValidationOutcome {
        match serde_json::to_value(params) {
            Ok(value) => self.validate_value(&value),
            Err(err) => {
                let mut errors = FieldErrors::new();
                errors.insert(FORM_ERROR_KEY.to_string(), err.to_string());
                ValidationOutcome::Invalid(errors)
            }
        }
    }

    /// Validates a raw document; used for edit buffers that do not coerce
    /// into [`ClusterUpdateParams`] yet (a non-numeric host prefix, say).
    pub fn validate_value(&self, value: &Value) -> ValidationOutcome {
        let mut ranked: IndexMap<String, (usize, String)> = IndexMap::new();
        for error in self.validator.iter_errors(value) {
            let field = field_key(&error.instance_path.to_string());
            let schema_path = error.schema_path.to_string();
            let (parent, keyword) = split_keyword(&schema_path);
            let rank = keyword_rank(keyword);
            let message = self
                .message_for(parent, keyword)
                .unwrap_or_else(|| error.to_string());
            match ranked.get(&field) {
                Some((existing, _)) if *existing <= rank => {}
                _ => {
                    ranked.insert(field, (rank, message));
                }
            }
        }

        if ranked.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(
                ranked
                    .into_iter()
                    .map(|(field, (_, message))| (field, message))
                    .collect(),
            )
        }
    }

    fn message_for(&self, parent: &str, keyword: &str) -> Option<String> {
        self.schema
            .pointer(parent)?
            .get("x-messages")?
            .get(keyword)?
            .as_str()
            .map(str::to_string)
    }
}

/// Network address with prefix length, host bits cleared.
pub fn is_cidr(value: &str) -> bool {
    value
        .parse::<IpNet>()
        .map(|net| net.trunc() == net)
        .unwrap_or(false)
}

fn field_key(instance_path: &str) -> String {
    instance_path
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

fn split_keyword(schema_path: &str) -> (&str, &str) {
    schema_path.rsplit_once('/').unwrap_or(("", schema_path))
}

fn keyword_rank(keyword: &str) -> usize {
    KEYWORD_PRIORITY
        .iter()
        .position(|candidate| *candidate == keyword)
        .unwrap_or(KEYWORD_PRIORITY.len())
}
