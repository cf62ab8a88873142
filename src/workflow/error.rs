//! Error types for the update workflow.

use crate::model::VariantId;
use crate::variant_actor::VariantError;
use thiserror::Error;

/// Calls the workflow refuses outright.
///
/// Failures of a submit that actually ran (validation, HTTP, rejection) are not
/// errors here: they end up in [`RequestStatus::Error`](super::RequestStatus::Error).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowError {
    #[error("No variant selected")]
    NoSelection,

    #[error("Variant {0} is not in the catalog")]
    UnknownVariant(VariantId),

    #[error("An update is already in flight")]
    SubmitInFlight,

    #[error(transparent)]
    Catalog(#[from] VariantError),
}
