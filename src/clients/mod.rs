//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod variant_client;

pub use actor_client::*;
pub use variant_client::*;
