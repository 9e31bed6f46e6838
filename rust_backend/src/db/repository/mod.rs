//! Repository trait definitions for store operations.
//!
//! The store is split into focused traits, one per entity group:
//!
//! - [`error`]: Error types for repository operations
//! - [`users`]: User lookup and registration
//! - [`cold_rooms`]: Cold-room reads and partial updates
//! - [`maintenance`]: Maintenance record scheduling and status changes
//! - [`reports`]: Report descriptors
//!
//! # Convenience Trait Bound
//!
//! For code that needs every capability, use the [`FullRepository`] bound:
//!
//! ```ignore
//! async fn overview<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<usize> {
//!     let rooms = repo.list_cold_rooms().await?;
//!     let records = repo.list_maintenance().await?;
//!     Ok(rooms.len() + records.len())
//! }
//! ```

pub mod cold_rooms;
pub mod error;
pub mod maintenance;
pub mod reports;
pub mod users;

pub use error::{RepositoryError, RepositoryResult};

pub use cold_rooms::ColdRoomRepository;
pub use maintenance::MaintenanceRepository;
pub use reports::ReportRepository;
pub use users::UserRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements all four
/// repository traits.
pub trait FullRepository:
    UserRepository + ColdRoomRepository + MaintenanceRepository + ReportRepository
{
}

impl<T> FullRepository for T where
    T: UserRepository + ColdRoomRepository + MaintenanceRepository + ReportRepository
{
}
