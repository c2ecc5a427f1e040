use std::{fmt, fs, path::Path};

use anyhow::{Context, Result, anyhow};

use crate::api::Cluster;

/// Supported formats for cluster snapshot files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(DocumentFormat::Json)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml => write!(f, "yaml"),
        }
    }
}

pub fn parse_cluster_str(contents: &str, format: DocumentFormat) -> Result<Cluster> {
    let cluster: Cluster = match format {
        DocumentFormat::Json => {
            serde_json::from_str(contents).with_context(|| "failed to parse JSON cluster")?
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str(contents).with_context(|| "failed to parse YAML cluster")?
        }
    };
    if cluster.id.trim().is_empty() {
        return Err(anyhow!("cluster snapshot has no id"));
    }
    Ok(cluster)
}

/// Reads a cluster snapshot, picking the format from the file extension.
pub fn load_cluster_file(path: &Path) -> Result<Cluster> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_cluster_str(&contents, DocumentFormat::from_path(path))
        .with_context(|| format!("invalid cluster snapshot in {}", path.display()))
}
