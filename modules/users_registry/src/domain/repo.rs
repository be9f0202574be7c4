use async_trait::async_trait;
use chrono::NaiveDate;

use crate::contract::model::{NewUser, User};

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Load a user by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;
    /// All users ordered by id.
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
    /// Users with `from <= birth_date <= to`, ordered by birth date then id.
    async fn find_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<User>>;
    /// Insert a validated user; storage assigns the id.
    async fn insert(&self, u: NewUser) -> anyhow::Result<User>;
    /// Overwrite an existing user (by primary key in `u.id`).
    async fn update(&self, u: User) -> anyhow::Result<User>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
