//! Business logic services

pub mod catalog;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            repository,
        }
    }

    /// Database round-trip for the readiness probe
    pub async fn ping_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
