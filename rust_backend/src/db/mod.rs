//! Store module for cold-room data.
//!
//! This module provides abstractions for store operations via the Repository
//! pattern, with the service layer on top.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (dashboard binary, session, tests)   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - latency + operation sets  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!          ┌──────────▼──────────────┐
//!          │  Local Repository       │
//!          │  (in-memory, fixtures)  │
//!          └─────────────────────────┘
//! ```
//!
//! The module includes:
//! - `services`: The operation sets callers use (auth, cold rooms, maintenance, reports)
//! - `repository`: Trait definitions for store operations
//! - `repositories::local`: In-memory implementation
//! - `fixtures`: The seeded data set
//! - `latency`: Artificial per-operation delay
//! - `factory` / `repo_config`: Construction from configuration
//!
//! There is no process-wide store: every [`services::ColdStoreApi`] owns (or
//! shares, via `Arc`) the repository it was built with.
//!
//! # Recommended Usage
//!
//! ```no_run
//! use coldroom_rust::db::{RepositoryBuilder, RepositoryConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RepositoryConfig::from_default_location().unwrap_or_default();
//!     let api = RepositoryBuilder::from_config(&config).build();
//!
//!     let rooms = api.cold_rooms().get_all().await?;
//!     Ok(())
//! }
//! ```

pub mod factory;
pub mod fixtures;
pub mod latency;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use factory::{RepositoryBuilder, RepositoryFactory};
pub use fixtures::Fixtures;
pub use latency::{LatencyProfile, OperationKind};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    ColdRoomRepository, FullRepository, MaintenanceRepository, ReportRepository,
    RepositoryError, RepositoryResult, UserRepository,
};
pub use services::ColdStoreApi;
