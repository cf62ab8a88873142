//! # Variant Updater
//!
//! > **Pick a product variant, change its price and stock, push the change to the vending API.**
//!
//! The catalog lives in a Tokio actor that owns the records; the update workflow talks
//! to it through a typed client and to the remote service through a [`gateway`].
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that owns a collection of entities and serializes
//! every read and update through one message loop.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Catalog ([`model`], [`variant_actor`], [`clients`], [`catalog`])
//! - [`VariantRecord`](model::VariantRecord) and its wire format.
//! - The actor instance for variants and the [`VariantClient`](clients::VariantClient) wrapper.
//! - [`CatalogSource`](catalog::CatalogSource): the built-in fixture or the list endpoint.
//!
//! ### 3. The Workflow ([`workflow`], [`gateway`])
//! - [`UpdateWorkflow`](workflow::UpdateWorkflow): select → edit → submit, with an
//!   atomic in-flight guard.
//! - [`VariantGateway`](gateway::VariantGateway): `reqwest` transport, scripted mock,
//!   and the single decoder for update responses.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - [`VariantSystem`](lifecycle::VariantSystem) spins the actor up, seeds it, and
//!   shuts it down.
//! - [`Config`](config::Config) holds endpoints, timeout and catalog source.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- list
//! RUST_LOG=info cargo run -- --base-url http://localhost:8585 update --id 1028 --stock 20
//! ```

pub mod catalog;
pub mod clients;
pub mod config;
pub mod framework;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod variant_actor;
pub mod workflow;
