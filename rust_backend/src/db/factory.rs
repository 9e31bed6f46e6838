//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating repository instances and the
//! service layer on top of them, based on runtime configuration.

use std::sync::Arc;

use log::info;

use super::latency::LatencyProfile;
use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::FullRepository;
use super::services::ColdStoreApi;

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use coldroom_rust::db::{RepositoryConfig, RepositoryFactory};
///
/// let empty = RepositoryFactory::create_local();
/// let seeded = RepositoryFactory::create_seeded();
/// let configured = RepositoryFactory::from_config(&RepositoryConfig::default());
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory repository seeded with the fixture data set.
    pub fn create_seeded() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::seeded())
    }

    /// Create a repository as described by `config`.
    pub fn from_config(config: &RepositoryConfig) -> Arc<dyn FullRepository> {
        if config.repository.seed_fixtures {
            info!("Creating in-memory repository seeded with fixtures");
            Self::create_seeded()
        } else {
            info!("Creating empty in-memory repository");
            Self::create_local()
        }
    }
}

/// Builder for configuring the service layer.
///
/// # Example
/// ```
/// use coldroom_rust::db::{LatencyProfile, RepositoryBuilder};
///
/// let api = RepositoryBuilder::new()
///     .seed_fixtures(true)
///     .latency(LatencyProfile::disabled())
///     .build();
/// assert!(!api.latency().enabled);
/// ```
pub struct RepositoryBuilder {
    seed_fixtures: bool,
    latency: LatencyProfile,
    repository: Option<Arc<dyn FullRepository>>,
}

impl RepositoryBuilder {
    /// Create a new builder: seeded store, default latency.
    pub fn new() -> Self {
        Self {
            seed_fixtures: true,
            latency: LatencyProfile::default(),
            repository: None,
        }
    }

    /// Start from the settings in `config`, with the environment override applied.
    pub fn from_config(config: &RepositoryConfig) -> Self {
        Self {
            seed_fixtures: config.repository.seed_fixtures,
            latency: config.effective_latency(),
            repository: None,
        }
    }

    pub fn seed_fixtures(mut self, seed: bool) -> Self {
        self.seed_fixtures = seed;
        self
    }

    pub fn latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Use an existing repository instead of creating one.
    pub fn repository(mut self, repository: Arc<dyn FullRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(self) -> ColdStoreApi {
        let repo = match self.repository {
            Some(repo) => repo,
            None if self.seed_fixtures => RepositoryFactory::create_seeded(),
            None => RepositoryFactory::create_local(),
        };
        ColdStoreApi::from_shared(repo, self.latency)
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{ColdRoomRepository, UserRepository};

    #[tokio::test]
    async fn test_factory_seeded_vs_empty() {
        let seeded = RepositoryFactory::create_seeded();
        assert_eq!(seeded.list_cold_rooms().await.unwrap().len(), 2);

        let empty = RepositoryFactory::create_local();
        assert!(empty.list_cold_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_from_config_respects_seed_flag() {
        let mut config = RepositoryConfig::default();
        config.repository.seed_fixtures = false;
        let repo = RepositoryFactory::from_config(&config);
        assert!(repo.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_builder_shares_given_repository() {
        let repo = RepositoryFactory::create_seeded();
        let api = RepositoryBuilder::new()
            .repository(repo.clone())
            .latency(LatencyProfile::disabled())
            .build();

        api.auth()
            .register("new@example.com", "pw", "New", crate::models::UserRole::Viewer)
            .await
            .unwrap();
        assert_eq!(repo.list_users().await.unwrap().len(), 3);
    }
}
