//! Runtime orchestration and lifecycle management.
//!
//! - [`VariantSystem`] - Starts the catalog actor, seeds it and wires the workflow
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;
pub mod variant_system;

pub use self::tracing::*;
pub use variant_system::*;
