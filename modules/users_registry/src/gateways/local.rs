use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::contract::{
    client::UsersRegistryApi,
    error::UsersRegistryError,
    model::{User, UserDraft},
};
use crate::domain::service::Service;

/// Local implementation of the UsersRegistryApi trait that delegates to the domain service
pub struct UsersRegistryLocalClient {
    service: Arc<Service>,
}

impl UsersRegistryLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersRegistryApi for UsersRegistryLocalClient {
    async fn get_user(&self, id: i64) -> Result<User, UsersRegistryError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn list_users(&self) -> Result<Vec<User>, UsersRegistryError> {
        self.service.list_users().await.map_err(Into::into)
    }

    async fn create_user(&self, draft: UserDraft) -> Result<User, UsersRegistryError> {
        self.service.create_user(draft).await.map_err(Into::into)
    }

    async fn replace_user(&self, id: i64, draft: UserDraft) -> Result<User, UsersRegistryError> {
        self.service
            .replace_user(id, draft)
            .await
            .map_err(Into::into)
    }

    async fn patch_user(&self, id: i64, patch: UserDraft) -> Result<User, UsersRegistryError> {
        self.service.patch_user(id, patch).await.map_err(Into::into)
    }

    async fn delete_user(&self, id: i64) -> Result<(), UsersRegistryError> {
        self.service.delete_user(id).await.map_err(Into::into)
    }

    async fn search_by_birth_date(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, UsersRegistryError> {
        self.service
            .search_by_birth_date(from, to)
            .await
            .map_err(Into::into)
    }
}
