use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{User, UserRole};

/// Repository trait for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the user registered under `email`.
    ///
    /// # Returns
    /// * `Ok(User)` - The matching user
    /// * `Err(RepositoryError::NotFound)` - If no user has that email
    async fn find_user_by_email(&self, email: &str) -> RepositoryResult<User>;

    /// Append a new user with the next sequential id and no permissions.
    async fn insert_user(&self, email: &str, name: &str, role: UserRole) -> RepositoryResult<User>;

    /// List all users in insertion order.
    async fn list_users(&self) -> RepositoryResult<Vec<User>>;
}
