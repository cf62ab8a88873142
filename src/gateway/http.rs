use super::{GatewayError, RawResponse, VariantGateway};
use crate::config::ApiConfig;
use crate::model::VariantRecord;
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, instrument};

/// [`VariantGateway`] over HTTP: `POST` with a JSON body to the update endpoint.
#[derive(Debug, Clone)]
pub struct HttpVariantGateway {
    http: reqwest::Client,
    update_url: Url,
}

impl HttpVariantGateway {
    pub fn new(http: reqwest::Client, update_url: Url) -> Self {
        Self { http, update_url }
    }

    /// Builds the client (with the configured timeout, if any) and resolves the update URL.
    pub fn from_config(config: &ApiConfig) -> Result<Self, GatewayError> {
        let http = config.http_client()?;
        let update_url = config.update_url()?;
        Ok(Self::new(http, update_url))
    }

    pub fn update_url(&self) -> &Url {
        &self.update_url
    }
}

#[async_trait]
impl VariantGateway for HttpVariantGateway {
    #[instrument(skip(self, payload), fields(variant_id = %payload.id, url = %self.update_url))]
    async fn post_update(&self, payload: &VariantRecord) -> Result<RawResponse, GatewayError> {
        debug!(?payload, "Submitting data");
        // `.json()` also sets `Content-Type: application/json`.
        let response = self
            .http
            .post(self.update_url.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "Response received");
        Ok(RawResponse { status, body })
    }
}
