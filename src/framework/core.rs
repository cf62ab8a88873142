//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the catalog store.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all resource types must implement.
//! - [`ResourceActor`]: The generic actor that owns a collection of entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks and DTOs)
// =============================================================================

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// The catalog never creates or deletes records: it is seeded in bulk and then
/// only updated. The trait therefore exposes a load hook (validation of seeded
/// records) and an update hook instead of the full CRUD set.
///
/// We use "Associated Types" (type Id, type Update, etc.) to enforce type safety.
/// A `VariantRecord` only accepts a `VariantUpdate`; the compiler rejects anything else.
///
/// # Provided Methods (Hooks)
/// - [`ActorEntity::on_load`] defaults to accepting the record.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Domain error returned by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier the store indexes this entity by.
    fn id(&self) -> &Self::Id;

    // --- Lifecycle Hooks (Async) ---

    /// Called for every entity handed to [`ResourceClient::load`], before it is stored.
    async fn on_load(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Load**: Replace the whole collection (seeding). Responds with the new size.
/// - **List**: Every entity, in load order.
/// - **Get**: One entity by ID.
/// - **Update**: Mutate one entity through [`ActorEntity::on_update`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Load {
        items: Vec<T>,
        respond_to: Response<usize>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so the `store` needs
/// no `Mutex` or `RwLock`. Exclusive ownership within the task is the guard.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "VariantRecord" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Load { items, respond_to } => {
                    debug!(entity_type, count = items.len(), "Load");
                    let result = self.load(items).await;
                    match &result {
                        Ok(size) => info!(entity_type, size, "Loaded"),
                        Err(e) => warn!(entity_type, error = %e, "Load failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Hooks mutate a scratch copy so a rejected update leaves the record intact.
                        let mut candidate = item.clone();
                        if let Err(e) = candidate.on_update(update).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        *item = candidate;
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Validates the whole batch before replacing the store, so a bad batch changes nothing.
    async fn load(&mut self, items: Vec<T>) -> Result<usize, FrameworkError> {
        let mut store = HashMap::with_capacity(items.len());
        let mut order = Vec::with_capacity(items.len());
        for item in items {
            item.on_load()
                .await
                .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
            let id = item.id().clone();
            if store.contains_key(&id) {
                return Err(FrameworkError::DuplicateId(id.to_string()));
            }
            order.push(id.clone());
            store.insert(id, item);
        }
        self.store = store;
        self.order = order;
        Ok(self.store.len())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn load(&self, items: Vec<T>) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Load { items, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, update, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Slot {
        id: u32,
        label: String,
        capacity: u32,
    }

    #[derive(Debug)]
    struct SlotUpdate {
        capacity: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("capacity {0} exceeds limit")]
    struct SlotError(u32);

    #[async_trait]
    impl ActorEntity for Slot {
        type Id = u32;
        type Update = SlotUpdate;
        type Error = SlotError;

        fn id(&self) -> &u32 {
            &self.id
        }

        async fn on_load(&self) -> Result<(), SlotError> {
            if self.capacity > 100 {
                return Err(SlotError(self.capacity));
            }
            Ok(())
        }

        async fn on_update(&mut self, update: SlotUpdate) -> Result<(), SlotError> {
            if update.capacity > 100 {
                return Err(SlotError(update.capacity));
            }
            self.capacity = update.capacity;
            Ok(())
        }
    }

    fn slot(id: u32, label: &str, capacity: u32) -> Slot {
        Slot { id, label: label.into(), capacity }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_resource_actor_load_list_update() {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run());

        // 1. Load keeps insertion order
        let size = client
            .load(vec![slot(7, "c", 1), slot(3, "a", 2), slot(5, "b", 3)])
            .await
            .unwrap();
        assert_eq!(size, 3);
        let ids: Vec<u32> = client.list().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);

        // 2. Update
        let updated = client.update(3, SlotUpdate { capacity: 9 }).await.unwrap();
        assert_eq!(updated.capacity, 9);
        assert_eq!(client.get(3).await.unwrap().unwrap().capacity, 9);

        // 3. Rejected update leaves the entity untouched
        let err = client.update(3, SlotUpdate { capacity: 500 }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert_eq!(client.get(3).await.unwrap().unwrap().capacity, 9);

        // 4. Unknown id
        let err = client.update(42, SlotUpdate { capacity: 1 }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(id) if id == "42"));
        assert!(client.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_rejects_duplicates_without_touching_store() {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run());

        client.load(vec![slot(1, "a", 1)]).await.unwrap();

        let err = client
            .load(vec![slot(2, "b", 1), slot(2, "b again", 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::DuplicateId(id) if id == "2"));

        let err = client.load(vec![slot(3, "c", 101)]).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        let remaining = client.list().await.unwrap();
        assert_eq!(remaining, vec![slot(1, "a", 1)]);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Slot>::new(1);
        drop(actor);
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}
