//! Pure data structures (DTOs) shared by the catalog, the workflow and the wire.
//!
//! [`VariantRecord`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait
//! so the catalog can be owned by a [`ResourceActor`](crate::framework::ResourceActor).

pub mod envelope;
pub mod variant;

pub use envelope::*;
pub use variant::*;
