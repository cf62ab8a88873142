//! # Variant Client
//!
//! Provides a high-level API for the catalog actor.
//! It wraps a `ResourceClient<VariantRecord>` and exposes domain-specific methods.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{VariantId, VariantRecord, VariantUpdate};
use crate::variant_actor::VariantError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Variant actor.
#[derive(Clone)]
pub struct VariantClient {
    inner: ResourceClient<VariantRecord>,
}

impl VariantClient {
    pub fn new(inner: ResourceClient<VariantRecord>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<VariantRecord> for VariantClient {
    type Error = VariantError;

    fn inner(&self) -> &ResourceClient<VariantRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        VariantError::from(e)
    }
}

impl VariantClient {
    /// Seeds the catalog, replacing whatever it held.
    ///
    /// Returns the number of records stored. Fails without changing the catalog
    /// if two records share an id or a price is invalid.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn load_catalog(&self, records: Vec<VariantRecord>) -> Result<usize, VariantError> {
        debug!("Sending request");
        self.inner.load(records).await.map_err(Self::map_error)
    }

    /// Every variant in catalog order.
    pub async fn list_variants(&self) -> Result<Vec<VariantRecord>, VariantError> {
        self.list().await
    }

    /// Looks a variant up, treating a missing id as an error.
    #[instrument(skip(self))]
    pub async fn get_variant(&self, id: VariantId) -> Result<VariantRecord, VariantError> {
        self.get(id)
            .await?
            .ok_or_else(|| VariantError::NotFound(id.to_string()))
    }

    /// Applies a confirmed price/stock edit and returns the stored record.
    #[instrument(skip(self))]
    pub async fn apply_update(
        &self,
        id: VariantId,
        update: VariantUpdate,
    ) -> Result<VariantRecord, VariantError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_get, expect_update};

    #[tokio::test]
    async fn test_apply_update_sends_id_and_values() {
        let (client, mut receiver) = create_mock_client::<VariantRecord>(10);
        let variant_client = VariantClient::new(client);

        let task = tokio::spawn(async move {
            variant_client
                .apply_update(VariantId(1029), VariantUpdate::new(22.5, 3))
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, VariantId(1029));
        assert_eq!(update, VariantUpdate::new(22.5, 3));

        responder
            .send(Ok(VariantRecord::new(1029, "LARGE", 1023, 22.5, 3)))
            .unwrap();

        let record = task.await.unwrap().unwrap();
        assert_eq!(record.price, 22.5);
    }

    #[tokio::test]
    async fn test_get_variant_maps_missing_to_not_found() {
        let (client, mut receiver) = create_mock_client::<VariantRecord>(10);
        let variant_client = VariantClient::new(client);

        let task = tokio::spawn(async move { variant_client.get_variant(VariantId(7)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, VariantId(7));
        responder.send(Ok(None)).unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, VariantError::NotFound("7".to_string()));
    }

    #[tokio::test]
    async fn test_rejected_update_surfaces_entity_error() {
        let (client, mut receiver) = create_mock_client::<VariantRecord>(10);
        let variant_client = VariantClient::new(client);

        let task = tokio::spawn(async move {
            variant_client
                .apply_update(VariantId(1027), VariantUpdate::new(-1.0, 0))
                .await
        });

        let (_, _, responder) = expect_update(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(VariantError::InvalidPrice(-1.0)))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), VariantError::InvalidPrice(-1.0));
    }
}
