//! ActorEntity trait implementation for the VariantRecord domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`VariantRecord`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! Both hooks enforce the catalog invariant: a stored price is finite and non-negative.
//! Stock is a `u32`, so it cannot go negative in the first place.

use super::error::VariantError;
use crate::framework::ActorEntity;
use crate::model::{VariantId, VariantRecord, VariantUpdate};
use async_trait::async_trait;

fn check_price(price: f64) -> Result<(), VariantError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(VariantError::InvalidPrice(price))
    }
}

#[async_trait]
impl ActorEntity for VariantRecord {
    type Id = VariantId;
    type Update = VariantUpdate;
    type Error = VariantError;

    fn id(&self) -> &VariantId {
        &self.id
    }

    /// Rejects seeded records whose price breaks the invariant.
    async fn on_load(&self) -> Result<(), VariantError> {
        check_price(self.price)
    }

    /// Applies a confirmed price/stock edit.
    ///
    /// # Fields Updated
    /// - `price`: Unit price
    /// - `stock`: Units available
    async fn on_update(&mut self, update: VariantUpdate) -> Result<(), VariantError> {
        check_price(update.price)?;
        self.price = update.price;
        self.stock = update.stock;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_replaces_price_and_stock() {
        let mut record = VariantRecord::new(1028, "MEDIUM", 1023, 15.0, 11);
        record.on_update(VariantUpdate::new(15.0, 20)).await.unwrap();
        assert_eq!(record.stock, 20);
        assert_eq!(record.price, 15.0);
    }

    #[tokio::test]
    async fn negative_and_nan_prices_are_rejected() {
        let mut record = VariantRecord::new(1028, "MEDIUM", 1023, 15.0, 11);
        let err = record.on_update(VariantUpdate::new(-0.5, 1)).await.unwrap_err();
        assert_eq!(err, VariantError::InvalidPrice(-0.5));
        assert!(record.on_update(VariantUpdate::new(f64::NAN, 1)).await.is_err());
        assert_eq!(record.stock, 11);

        let bad = VariantRecord::new(1, "X", 1, f64::INFINITY, 0);
        assert!(bad.on_load().await.is_err());
    }
}
