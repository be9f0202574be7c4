use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::contract::model::{NewUser, User, UserDraft};
use crate::domain::error::DomainError;
use crate::domain::ports::Clock;
use crate::domain::repo::UsersRepository;
use crate::domain::validation::{is_adult, validate, ValidationProfile};

/// Storage failure carrying the whole context chain (`context: cause`).
fn storage_error(e: anyhow::Error) -> DomainError {
    DomainError::database(format!("{e:#}"))
}

/// Domain service with business rules for user management.
/// Depends only on the repository and clock ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Minimum age in whole years a user must have reached.
    pub min_age: u32,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn UsersRepository>, clock: Arc<dyn Clock>, config: ServiceConfig) -> Self {
        Self {
            repo,
            clock,
            config,
        }
    }

    #[instrument(name = "users_registry.service.get_user", skip(self), fields(user_id = id))]
    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        debug!("Getting user by id");
        let user = self.load(id).await?;
        debug!("Successfully retrieved user");
        Ok(user)
    }

    #[instrument(name = "users_registry.service.list_users", skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let users = self
            .repo
            .find_all()
            .await
            .map_err(storage_error)?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    #[instrument(
        name = "users_registry.service.create_user",
        skip(self, draft),
        fields(email = ?draft.email)
    )]
    pub async fn create_user(&self, draft: UserDraft) -> Result<User, DomainError> {
        info!("Creating new user");

        let new_user = self.admit(draft, ValidationProfile::Full)?;
        let user = self
            .repo
            .insert(new_user)
            .await
            .map_err(storage_error)?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    /// Overwrite every mutable field with the draft's values, absent ones included.
    #[instrument(
        name = "users_registry.service.replace_user",
        skip(self, draft),
        fields(user_id = id)
    )]
    pub async fn replace_user(&self, id: i64, draft: UserDraft) -> Result<User, DomainError> {
        info!("Replacing user");

        self.load(id).await?;
        let user = self.admit(draft, ValidationProfile::Full)?.with_id(id);
        let user = self.store(user).await?;

        info!("Successfully replaced user");
        Ok(user)
    }

    /// Overwrite only the fields present in `patch`.
    #[instrument(
        name = "users_registry.service.patch_user",
        skip(self, patch),
        fields(user_id = id)
    )]
    pub async fn patch_user(&self, id: i64, patch: UserDraft) -> Result<User, DomainError> {
        info!("Patching user");

        let mut merged = UserDraft::from(self.load(id).await?);
        merged.apply(patch);
        let user = self.admit(merged, ValidationProfile::Partial)?.with_id(id);
        let user = self.store(user).await?;

        info!("Successfully patched user");
        Ok(user)
    }

    #[instrument(name = "users_registry.service.delete_user", skip(self), fields(user_id = id))]
    pub async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        info!("Deleting user");

        self.load(id).await?;
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(storage_error)?;

        if !deleted {
            return Err(DomainError::user_not_found(id));
        }

        info!("Successfully deleted user");
        Ok(())
    }

    #[instrument(
        name = "users_registry.service.search_by_birth_date",
        skip(self),
        fields(from = %from, to = %to)
    )]
    pub async fn search_by_birth_date(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, DomainError> {
        debug!("Searching users by birth date range");
        if from > to {
            return Err(DomainError::incorrect_date_range(from, to));
        }

        let users = self
            .repo
            .find_by_birth_date_range(from, to)
            .await
            .map_err(storage_error)?;
        debug!("Found {} users in range", users.len());
        Ok(users)
    }

    // --- helpers ---

    async fn load(&self, id: i64) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    async fn store(&self, user: User) -> Result<User, DomainError> {
        self.repo
            .update(user)
            .await
            .map_err(storage_error)
    }

    /// Validate the final state of a write and apply the age rule.
    fn admit(&self, draft: UserDraft, profile: ValidationProfile) -> Result<NewUser, DomainError> {
        let today = self.clock.today();

        let errors = validate(&draft, profile, today);
        if !errors.is_empty() {
            debug!("Validation failed with {} errors", errors.len());
            return Err(DomainError::validation(errors));
        }

        let fallback = draft.clone();
        let new_user = draft.complete().ok_or_else(|| {
            DomainError::validation(validate(&fallback, ValidationProfile::Full, today))
        })?;

        if !is_adult(new_user.birth_date, self.config.min_age, today) {
            return Err(DomainError::not_adult());
        }
        Ok(new_user)
    }
}
