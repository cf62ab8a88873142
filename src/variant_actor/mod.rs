//! Variant-specific resource logic: the actor that owns the in-memory catalog.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`VariantRecord`]
//! - [`error`] - [`VariantError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = variant_actor::new();
//! tokio::spawn(actor.run());
//!
//! client.load_catalog(records).await?;
//! let medium = client.get_variant(VariantId(1028)).await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::VariantClient;
use crate::framework::ResourceActor;
use crate::model::VariantRecord;

/// Request queue depth of the catalog actor.
pub const CHANNEL_CAPACITY: usize = 32;

/// Creates a new Variant actor and its client.
pub fn new() -> (ResourceActor<VariantRecord>, VariantClient) {
    let (actor, generic_client) = ResourceActor::new(CHANNEL_CAPACITY);
    (actor, VariantClient::new(generic_client))
}
