// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Inventory service client.
//!
//! This module provides the [`InventoryClient`] trait over the consumed
//! virtualization-management API and an [`HttpInventoryClient`]
//! implementation speaking JSON over HTTP via `reqwest`. The client
//! performs no retries and no caching; every call is a live round-trip.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::common::config::AppConfig;
use crate::error::{Error, Result};
use crate::inventory::types::{DatastoreStorageInfo, DatastoreSummary};

/// Trait for querying datastore inventory on a virtualization host.
///
/// Implementations must be thread-safe (`Send + Sync`). Test code supplies
/// in-process mock implementations; production code uses
/// [`HttpInventoryClient`].
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// List the datastores attached to `host`, sizes in megabytes.
    async fn list_datastores(&self, host: &str) -> Result<Vec<DatastoreSummary>>;

    /// Force a storage-info refresh for one datastore and return the
    /// refreshed view, sizes in bytes.
    ///
    /// The refresh makes the host recompute thin-provisioning figures, so
    /// `uncommitted_bytes` is current rather than cached.
    async fn refresh_storage_info(
        &self,
        host: &str,
        datastore: &str,
    ) -> Result<DatastoreStorageInfo>;
}

/// Inventory client speaking JSON over HTTP.
pub struct HttpInventoryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpInventoryClient {
    /// Create a client for the inventory service at `endpoint`.
    ///
    /// A bare `host:port` endpoint gets an `http://` scheme prepended;
    /// trailing slashes are stripped.
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(AppConfig::CONNECTION_TIMEOUT_SECS))
            .pool_idle_timeout(Duration::from_secs(AppConfig::POOL_IDLE_TIMEOUT_SECS))
            .tcp_keepalive(Duration::from_secs(AppConfig::TCP_KEEPALIVE_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: normalize_endpoint(endpoint)?,
        })
    }

    fn check_status(url: String, response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::Status {
                url,
                status: response.status().as_u16(),
            })
        }
    }
}

#[async_trait]
impl InventoryClient for HttpInventoryClient {
    async fn list_datastores(&self, host: &str) -> Result<Vec<DatastoreSummary>> {
        let url = format!("{}/hosts/{host}/datastores", self.endpoint);
        tracing::debug!("listing datastores: GET {url}");
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(url, response)?;
        Ok(response.json().await?)
    }

    async fn refresh_storage_info(
        &self,
        host: &str,
        datastore: &str,
    ) -> Result<DatastoreStorageInfo> {
        let url = format!(
            "{}/hosts/{host}/datastores/{datastore}/refresh-storage-info",
            self.endpoint
        );
        tracing::debug!("refreshing storage info: POST {url}");
        let response = self.client.post(&url).send().await?;
        let response = Self::check_status(url, response)?;
        Ok(response.json().await?)
    }
}

fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let with_scheme = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    };

    // Validate early so a malformed endpoint fails before the host loop.
    Url::parse(&with_scheme)?;

    Ok(with_scheme.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_endpoint_adds_scheme() {
        assert_eq!(
            normalize_endpoint("vc01:9090").unwrap(),
            "http://vc01:9090"
        );
    }

    #[test]
    fn test_normalize_endpoint_keeps_scheme() {
        assert_eq!(
            normalize_endpoint("https://vc01:9090").unwrap(),
            "https://vc01:9090"
        );
    }

    #[test]
    fn test_normalize_endpoint_strips_trailing_slash() {
        assert_eq!(
            normalize_endpoint("http://vc01:9090/").unwrap(),
            "http://vc01:9090"
        );
    }

    #[test]
    fn test_normalize_endpoint_rejects_garbage() {
        assert!(normalize_endpoint("http://").is_err());
    }

    #[test]
    fn test_http_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpInventoryClient>();
    }
}
