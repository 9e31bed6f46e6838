use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{ColdRoom, ColdRoomId, ColdRoomPatch};

/// Repository trait for cold rooms.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ColdRoomRepository: Send + Sync {
    /// List all cold rooms in insertion order.
    async fn list_cold_rooms(&self) -> RepositoryResult<Vec<ColdRoom>>;

    /// Retrieve a cold room by id.
    ///
    /// # Returns
    /// * `Ok(ColdRoom)` - The stored record
    /// * `Err(RepositoryError::NotFound)` - If the id is unknown
    async fn get_cold_room(&self, id: &ColdRoomId) -> RepositoryResult<ColdRoom>;

    /// Shallow-merge `patch` into the stored cold room and return the result.
    ///
    /// The merge happens atomically with respect to other updates on the same
    /// store. `patch.updated_at` is never applied.
    ///
    /// # Returns
    /// * `Ok(ColdRoom)` - The record after the merge
    /// * `Err(RepositoryError::NotFound)` - If the id is unknown
    async fn update_cold_room(
        &self,
        id: &ColdRoomId,
        patch: ColdRoomPatch,
    ) -> RepositoryResult<ColdRoom>;
}
