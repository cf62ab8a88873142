//! # Update Workflow
//!
//! Select a variant, edit its price and stock, submit the edit to the remote
//! service, and keep the catalog in line with what the service confirmed.
//!
//! ```text
//! catalog ──select──▶ selection + form ──edit_field──▶ form
//!                                   │
//!                                submit
//!                                   ▼
//!        parse form ─▶ POST payload ─▶ decode response ─▶ status (+ catalog on success)
//! ```
//!
//! Every operation takes `&self`. Selection, form and status sit behind one async
//! mutex that is never held across the network call; submission is guarded by an
//! atomic in-flight flag, so a second submit fails fast with
//! [`WorkflowError::SubmitInFlight`] instead of queueing a duplicate request.

pub mod error;
pub mod form;
pub mod status;

pub use error::*;
pub use form::*;
pub use status::*;

use crate::clients::{ActorClient, VariantClient};
use crate::gateway::{decode_update_response, display_message, UpdateError, VariantGateway};
use crate::model::{VariantId, VariantRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
struct Selection {
    record: VariantRecord,
    form: EditForm,
}

#[derive(Debug, Default)]
struct WorkflowState {
    selection: Option<Selection>,
    status: RequestStatus,
}

/// Point-in-time copy of the workflow, for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowSnapshot {
    pub selected: Option<VariantRecord>,
    /// `None` until the first selection.
    pub form: Option<EditForm>,
    pub status: RequestStatus,
    pub loading: bool,
}

pub struct UpdateWorkflow<G: VariantGateway> {
    catalog: VariantClient,
    gateway: G,
    state: Mutex<WorkflowState>,
    in_flight: AtomicBool,
}

impl<G: VariantGateway> UpdateWorkflow<G> {
    pub fn new(catalog: VariantClient, gateway: G) -> Self {
        Self {
            catalog,
            gateway,
            state: Mutex::new(WorkflowState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn catalog(&self) -> &VariantClient {
        &self.catalog
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Makes `id` the active selection and seeds the form from its current values.
    ///
    /// Clears a finished status; a submit still in flight keeps `Loading`.
    #[instrument(skip(self))]
    pub async fn select(&self, id: VariantId) -> Result<VariantRecord, WorkflowError> {
        let record = self
            .catalog
            .get(id)
            .await?
            .ok_or(WorkflowError::UnknownVariant(id))?;

        let mut state = self.state.lock().await;
        state.selection = Some(Selection {
            form: EditForm::from_record(&record),
            record: record.clone(),
        });
        // A stale `Loading` can outlive a cancelled submit whose guard lost the lock race.
        if state.status.is_terminal() || !self.is_loading() {
            state.status = RequestStatus::Idle;
        }
        info!(variant_id = %id, name = %record.name, "Selected");
        Ok(record)
    }

    /// Stores `value` verbatim in the form field.
    #[instrument(skip(self, value))]
    pub async fn edit_field(&self, field: FormField, value: impl Into<String>) -> Result<(), WorkflowError> {
        let value = value.into();
        let mut state = self.state.lock().await;
        let selection = state.selection.as_mut().ok_or(WorkflowError::NoSelection)?;
        debug!(%field, %value, "Field edited");
        selection.form.set(field, value);
        Ok(())
    }

    /// Validates the form, pushes the edit to the remote service and records the outcome.
    ///
    /// Returns the final status. Validation, HTTP and rejection failures are
    /// reported through [`RequestStatus::Error`]; `Err` is reserved for calls that
    /// never started (no selection, submit already in flight) and for a catalog
    /// store that stopped answering.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<RequestStatus, WorkflowError> {
        let _in_flight = InFlight::claim(&self.in_flight, &self.state).ok_or_else(|| {
            warn!("Submit rejected: another update is in flight");
            WorkflowError::SubmitInFlight
        })?;

        let (record, form) = {
            let mut state = self.state.lock().await;
            let snapshot = state
                .selection
                .as_ref()
                .map(|s| (s.record.clone(), s.form.clone()))
                .ok_or(WorkflowError::NoSelection)?;
            state.status = RequestStatus::Loading;
            snapshot
        };

        let update = match form.parse() {
            Ok(update) => update,
            Err(e) => {
                warn!(variant_id = %record.id, error = %e, "Form rejected");
                return Ok(self.finish(RequestStatus::Error(e.to_string())).await);
            }
        };

        let payload = record.with_update(&update);
        let outcome = match self.gateway.post_update(&payload).await {
            Ok(response) => decode_update_response(&response),
            Err(e) => Err(UpdateError::from(e)),
        };

        let ack = match outcome {
            Ok(ack) => ack,
            Err(e) => {
                warn!(variant_id = %record.id, error = %e, "Update failed");
                return Ok(self.finish(RequestStatus::Error(display_message(&e))).await);
            }
        };

        let stored = match self.catalog.apply_update(record.id, update).await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(variant_id = %record.id, error = %e, "Catalog refused confirmed update");
                self.finish(RequestStatus::Error(e.to_string())).await;
                return Err(e.into());
            }
        };

        let mut state = self.state.lock().await;
        if let Some(selection) = state.selection.as_mut().filter(|s| s.record.id == stored.id) {
            selection.record = stored.clone();
        }
        state.status = RequestStatus::Success(ack.message);
        info!(variant_id = %stored.id, price = stored.price, stock = stored.stock, "Update confirmed");
        Ok(state.status.clone())
    }

    pub async fn status(&self) -> RequestStatus {
        self.state.lock().await.status.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn selected(&self) -> Option<VariantRecord> {
        self.state.lock().await.selection.as_ref().map(|s| s.record.clone())
    }

    pub async fn form(&self) -> Option<EditForm> {
        self.state.lock().await.selection.as_ref().map(|s| s.form.clone())
    }

    pub async fn snapshot(&self) -> WorkflowSnapshot {
        let state = self.state.lock().await;
        WorkflowSnapshot {
            selected: state.selection.as_ref().map(|s| s.record.clone()),
            form: state.selection.as_ref().map(|s| s.form.clone()),
            status: state.status.clone(),
            loading: self.is_loading(),
        }
    }

    async fn finish(&self, status: RequestStatus) -> RequestStatus {
        let mut state = self.state.lock().await;
        state.status = status;
        state.status.clone()
    }
}

/// Holds the in-flight flag for the duration of one submit.
///
/// Releasing also clears a leftover `Loading` status, which only happens when the
/// submit future was dropped before it finished.
struct InFlight<'a> {
    flag: &'a AtomicBool,
    state: &'a Mutex<WorkflowState>,
}

impl<'a> InFlight<'a> {
    fn claim(flag: &'a AtomicBool, state: &'a Mutex<WorkflowState>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag, state })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_lock() {
            if state.status.is_loading() {
                state.status = RequestStatus::Idle;
            }
        }
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayError, MockGateway, UPDATE_SUCCESS_MESSAGE};
    use serde_json::json;

    async fn workflow(gateway: MockGateway) -> UpdateWorkflow<MockGateway> {
        let (actor, client) = crate::variant_actor::new();
        tokio::spawn(actor.run());
        client
            .load_catalog(vec![
                VariantRecord::new(1027, "SMALL", 1023, 10.0, 6),
                VariantRecord::new(1028, "MEDIUM", 1023, 15.0, 11).with_tray_number(1),
            ])
            .await
            .unwrap();
        UpdateWorkflow::new(client, gateway)
    }

    #[tokio::test]
    async fn starts_with_no_selection_and_no_form() {
        let wf = workflow(MockGateway::new()).await;
        let snapshot = wf.snapshot().await;
        assert_eq!(snapshot, WorkflowSnapshot::default());
        assert_eq!(
            wf.edit_field(FormField::Price, "1").await,
            Err(WorkflowError::NoSelection)
        );
        assert_eq!(wf.submit().await, Err(WorkflowError::NoSelection));
        assert!(!wf.is_loading());
    }

    #[tokio::test]
    async fn select_unknown_variant_fails() {
        let wf = workflow(MockGateway::new()).await;
        assert_eq!(
            wf.select(VariantId(9999)).await,
            Err(WorkflowError::UnknownVariant(VariantId(9999)))
        );
        assert!(wf.selected().await.is_none());
    }

    #[tokio::test]
    async fn select_resets_form_and_status() {
        let gateway = MockGateway::new();
        gateway.respond_json(500, json!({ "message": "server down" }));
        let wf = workflow(gateway).await;

        wf.select(VariantId(1028)).await.unwrap();
        wf.edit_field(FormField::Stock, "99").await.unwrap();
        assert!(matches!(wf.submit().await.unwrap(), RequestStatus::Error(_)));

        wf.select(VariantId(1027)).await.unwrap();
        assert_eq!(wf.status().await, RequestStatus::Idle);
        assert_eq!(
            wf.form().await.unwrap(),
            EditForm { price: "10".into(), stock: "6".into() }
        );
    }

    #[tokio::test]
    async fn successful_submit_updates_catalog_and_selection() {
        let gateway = MockGateway::new();
        gateway.respond_json(200, json!({ "success": true }));
        let wf = workflow(gateway.clone()).await;

        wf.select(VariantId(1028)).await.unwrap();
        wf.edit_field(FormField::Price, "17.5").await.unwrap();
        wf.edit_field(FormField::Stock, "20").await.unwrap();

        let status = wf.submit().await.unwrap();
        assert_eq!(status, RequestStatus::Success(UPDATE_SUCCESS_MESSAGE.to_string()));
        assert!(!wf.is_loading());

        let sent = gateway.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].tray_number, 1);
        assert_eq!((sent[0].price, sent[0].stock), (17.5, 20));

        let stored = wf.catalog().get_variant(VariantId(1028)).await.unwrap();
        assert_eq!((stored.price, stored.stock), (17.5, 20));
        assert_eq!(wf.selected().await.unwrap(), stored);
        gateway.verify();
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_gateway() {
        let gateway = MockGateway::new();
        let wf = workflow(gateway.clone()).await;

        wf.select(VariantId(1027)).await.unwrap();
        wf.edit_field(FormField::Stock, "lots").await.unwrap();

        let status = wf.submit().await.unwrap();
        assert_eq!(
            status,
            RequestStatus::Error("Stock must be a non-negative whole number, got \"lots\"".to_string())
        );
        assert!(gateway.requests().is_empty());
        assert_eq!(wf.form().await.unwrap().stock, "lots");

        let stored = wf.catalog().get_variant(VariantId(1027)).await.unwrap();
        assert_eq!(stored.stock, 6);
    }

    #[tokio::test]
    async fn transport_failure_becomes_error_status() {
        let gateway = MockGateway::new();
        gateway.fail_with(GatewayError::Transport("connection refused".to_string()));
        let wf = workflow(gateway).await;

        wf.select(VariantId(1027)).await.unwrap();
        let status = wf.submit().await.unwrap();
        assert_eq!(status, RequestStatus::Error("connection refused".to_string()));
    }

    #[tokio::test]
    async fn cancelled_submit_releases_the_flag() {
        let gateway = MockGateway::new().with_delay(std::time::Duration::from_secs(60));
        gateway.respond_json(200, json!({ "success": true }));
        let wf = workflow(gateway).await;
        wf.select(VariantId(1027)).await.unwrap();

        let cancelled =
            tokio::time::timeout(std::time::Duration::from_millis(20), wf.submit()).await;
        assert!(cancelled.is_err());

        assert!(!wf.is_loading());
        assert_eq!(wf.status().await, RequestStatus::Idle);
        let stored = wf.catalog().get_variant(VariantId(1027)).await.unwrap();
        assert_eq!(stored.stock, 6);
    }

    #[tokio::test]
    async fn select_during_submit_keeps_loading() {
        let gateway = MockGateway::new().with_delay(std::time::Duration::from_millis(100));
        gateway.respond_json(200, json!({ "success": true }));
        let wf = workflow(gateway).await;
        wf.select(VariantId(1027)).await.unwrap();

        let (submitted, during) = tokio::join!(wf.submit(), async {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            wf.select(VariantId(1028)).await.unwrap();
            wf.status().await
        });

        assert_eq!(during, RequestStatus::Loading);
        assert!(matches!(submitted, Ok(RequestStatus::Success(_))));
        wf.select(VariantId(1028)).await.unwrap();
        assert_eq!(wf.status().await, RequestStatus::Idle);
    }
}
