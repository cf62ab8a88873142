use super::{decode_catalog, CatalogSource, CatalogSourceError};
use crate::config::{ApiConfig, CatalogConfig};
use crate::gateway::{error_message, RawResponse};
use crate::model::VariantRecord;
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, instrument};

/// Catalog source backed by the variant list endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    http: reqwest::Client,
    list_url: Url,
}

impl HttpCatalogSource {
    pub fn new(http: reqwest::Client, list_url: Url) -> Self {
        Self { http, list_url }
    }

    pub fn from_config(api: &ApiConfig, catalog: &CatalogConfig) -> Result<Self, CatalogSourceError> {
        Ok(Self::new(api.http_client()?, api.endpoint(&catalog.list_path)?))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    #[instrument(skip(self), fields(url = %self.list_url))]
    async fn list(&self) -> Result<Vec<VariantRecord>, CatalogSourceError> {
        let response = self.http.get(self.list_url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "Catalog response received");

        let raw = RawResponse { status, body };
        if !raw.is_success() {
            return Err(CatalogSourceError::Http {
                status,
                message: error_message(&raw),
            });
        }
        decode_catalog(&raw.body)
    }
}
