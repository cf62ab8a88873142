use crate::catalog::{CatalogSource, CatalogSourceError, HttpCatalogSource, StaticCatalogSource};
use crate::clients::VariantClient;
use crate::config::{CatalogSourceKind, Config};
use crate::gateway::{GatewayError, HttpVariantGateway, VariantGateway};
use crate::variant_actor::VariantError;
use crate::workflow::UpdateWorkflow;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("failed to load catalog: {0}")]
    Source(#[from] CatalogSourceError),

    #[error("failed to seed catalog: {0}")]
    Catalog(#[from] VariantError),

    #[error("failed to set up gateway: {0}")]
    Gateway(#[from] GatewayError),

    #[error("actor task failed: {0}")]
    Shutdown(String),
}

/// The runtime orchestrator: one catalog actor plus the workflow that drives it.
///
/// # Example
///
/// ```ignore
/// let source = StaticCatalogSource::fixture()?;
/// let system = VariantSystem::start(&source, gateway).await?;
///
/// system.workflow.select(VariantId(1028)).await?;
/// system.workflow.edit_field(FormField::Stock, "20").await?;
/// let status = system.workflow.submit().await?;
///
/// system.shutdown().await?;
/// ```
pub struct VariantSystem<G: VariantGateway> {
    pub workflow: UpdateWorkflow<G>,

    /// Task handle of the catalog actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl<G: VariantGateway> VariantSystem<G> {
    /// Spawns the catalog actor, seeds it from `source` and builds the workflow.
    ///
    /// If seeding fails the actor is shut down before the error is returned.
    pub async fn start(source: &dyn CatalogSource, gateway: G) -> Result<Self, SystemError> {
        let (actor, client) = crate::variant_actor::new();
        let handle = tokio::spawn(actor.run());

        match Self::seed(source, &client).await {
            Ok(size) => info!(size, "Catalog seeded"),
            Err(e) => {
                error!(error = %e, "Catalog seeding failed");
                drop(client);
                let _ = handle.await;
                return Err(e);
            }
        }

        Ok(Self {
            workflow: UpdateWorkflow::new(client, gateway),
            handle,
        })
    }

    async fn seed(source: &dyn CatalogSource, client: &VariantClient) -> Result<usize, SystemError> {
        let records = source.list().await?;
        Ok(client.load_catalog(records).await?)
    }

    pub fn catalog(&self) -> &VariantClient {
        self.workflow.catalog()
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the workflow drops the last client, which closes the actor's
    /// channel; the actor then leaves its loop and the task completes.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.workflow);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::Shutdown(format!("{:?}", e)));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl VariantSystem<HttpVariantGateway> {
    /// Production wiring: catalog source and HTTP gateway chosen by `config`.
    pub async fn from_config(config: &Config) -> Result<Self, SystemError> {
        let gateway = HttpVariantGateway::from_config(&config.api)?;
        match config.catalog.source {
            CatalogSourceKind::Static => {
                let source = StaticCatalogSource::fixture()?;
                Self::start(&source, gateway).await
            }
            CatalogSourceKind::Http => {
                let source = HttpCatalogSource::from_config(&config.api, &config.catalog)?;
                Self::start(&source, gateway).await
            }
        }
    }
}
