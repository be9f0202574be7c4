use async_trait::async_trait;
use chrono::NaiveDate;

use crate::contract::{
    error::UsersRegistryError,
    model::{User, UserDraft},
};

/// Public API of the users_registry module for in-process consumers
#[async_trait]
pub trait UsersRegistryApi: Send + Sync {
    /// Get a user by id
    async fn get_user(&self, id: i64) -> Result<User, UsersRegistryError>;

    /// List all users ordered by id
    async fn list_users(&self) -> Result<Vec<User>, UsersRegistryError>;

    /// Create a new user from a fully populated draft
    async fn create_user(&self, draft: UserDraft) -> Result<User, UsersRegistryError>;

    /// Replace every mutable field of a user
    async fn replace_user(&self, id: i64, draft: UserDraft) -> Result<User, UsersRegistryError>;

    /// Update only the fields present in `patch`
    async fn patch_user(&self, id: i64, patch: UserDraft) -> Result<User, UsersRegistryError>;

    /// Delete a user by id
    async fn delete_user(&self, id: i64) -> Result<(), UsersRegistryError>;

    /// Users born within `[from, to]`, both ends inclusive
    async fn search_by_birth_date(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, UsersRegistryError>;
}
