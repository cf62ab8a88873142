//! # Mock Gateway
//!
//! A [`VariantGateway`] that replays scripted responses and records every payload
//! it was given, for testing the workflow without a server.
//!
//! ```ignore
//! let gateway = MockGateway::new();
//! gateway.respond_json(200, json!({ "success": true }));
//!
//! let system = VariantSystem::start(&source, gateway.clone()).await?;
//! // ... submit ...
//! assert_eq!(gateway.requests().len(), 1);
//! gateway.verify();
//! ```

use super::{GatewayError, RawResponse, VariantGateway};
use crate::model::VariantRecord;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted gateway. Clones share the same script and request log.
#[derive(Clone, Default)]
pub struct MockGateway {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, GatewayError>>>>,
    requests: Arc<Mutex<Vec<VariantRecord>>>,
    delay: Option<Duration>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds every response back for `delay`, to keep a submit in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queues a raw response.
    pub fn respond_with(&self, response: RawResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queues a response with a JSON body.
    pub fn respond_json(&self, status: u16, body: serde_json::Value) {
        self.respond_with(RawResponse::json(status, &body));
    }

    /// Queues a transport failure.
    pub fn fail_with(&self, error: GatewayError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every payload received so far, oldest first.
    pub fn requests(&self) -> Vec<VariantRecord> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that every scripted response was consumed.
    pub fn verify(&self) {
        let remaining = self.responses.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all scripted responses were used. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl VariantGateway for MockGateway {
    async fn post_update(&self, payload: &VariantRecord) -> Result<RawResponse, GatewayError> {
        self.requests.lock().unwrap().push(payload.clone());
        let next = self.responses.lock().unwrap().pop_front();
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match next {
            Some(response) => response,
            None => panic!("Unexpected update request for variant {}", payload.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn replays_in_order_and_records_payloads() {
        let gateway = MockGateway::new();
        gateway.respond_json(200, json!({ "success": true }));
        gateway.fail_with(GatewayError::Transport("connection refused".to_string()));

        let record = VariantRecord::new(1027, "SMALL", 1023, 10.0, 6);
        let first = gateway.post_update(&record).await.unwrap();
        assert_eq!(first.status, 200);
        let second = gateway.post_update(&record).await.unwrap_err();
        assert_eq!(second.to_string(), "connection refused");

        assert_eq!(gateway.requests(), vec![record.clone(), record]);
        gateway.verify();
    }
}
