//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it can be built with a
//! `DatabaseConnection` or a transaction.

use anyhow::Context;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::contract::model::{NewUser, User};
use crate::domain::repo::UsersRepository;
use crate::infra::storage::entity::{ActiveModel as UserAM, Column, Entity as UserEntity};

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let rows = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<User>> {
        let rows = UserEntity::find()
            .filter(Column::BirthDate.between(from, to))
            .order_by_asc(Column::BirthDate)
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("find_by_birth_date_range failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, u: NewUser) -> anyhow::Result<User> {
        let stored = UserAM::from(u)
            .insert(&self.conn)
            .await
            .context("insert failed")?;
        Ok(stored.into())
    }

    async fn update(&self, u: User) -> anyhow::Result<User> {
        let stored = UserAM::from(u)
            .update(&self.conn)
            .await
            .context("update failed")?;
        Ok(stored.into())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = UserEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}
