use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, Method};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::ClientConfig;

use super::{
    error::ApiError,
    types::{Cluster, ClusterUpdateParams},
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Persistence seam used by the form. Implemented over HTTP by
/// [`HttpClusterApi`]; tests substitute their own.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn get_cluster(&self, id: &str) -> Result<Cluster, ApiError>;

    async fn patch_cluster(
        &self,
        id: &str,
        params: &ClusterUpdateParams,
    ) -> Result<Cluster, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpClusterApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClusterApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("cluster-wizard/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    pub fn cluster_url(&self, id: &str) -> String {
        format!(
            "{}/clusters/{}",
            self.base_url,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    async fn send<B, T>(&self, method: Method, url: String, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        tracing::debug!(%method, %url, "sending inventory request");
        let mut request = self.client.request(method, &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        let payload = response.text().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
                body: (!payload.is_empty()).then_some(payload),
            });
        }

        decode_payload(&url, &payload)
    }
}

#[async_trait]
impl ClusterApi for HttpClusterApi {
    async fn get_cluster(&self, id: &str) -> Result<Cluster, ApiError> {
        self.send::<(), _>(Method::GET, self.cluster_url(id), None)
            .await
    }

    async fn patch_cluster(
        &self,
        id: &str,
        params: &ClusterUpdateParams,
    ) -> Result<Cluster, ApiError> {
        self.send(Method::PATCH, self.cluster_url(id), Some(params))
            .await
    }
}

fn decode_payload<T: DeserializeOwned>(url: &str, payload: &str) -> Result<T, ApiError> {
    serde_json::from_str(payload).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
