use sea_orm::{ActiveValue::NotSet, Set};

use crate::contract::model::{NewUser, User};
use crate::infra::storage::entity::{ActiveModel, Model};

impl From<Model> for User {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            first_name: m.first_name,
            last_name: m.last_name,
            birth_date: m.birth_date,
            address: m.address,
            phone_number: m.phone_number,
        }
    }
}

/// Insert model: the id is left to the database.
impl From<NewUser> for ActiveModel {
    fn from(u: NewUser) -> Self {
        Self {
            id: NotSet,
            email: Set(u.email),
            first_name: Set(u.first_name),
            last_name: Set(u.last_name),
            birth_date: Set(u.birth_date),
            address: Set(u.address),
            phone_number: Set(u.phone_number),
        }
    }
}

/// Update model: every column is written.
impl From<User> for ActiveModel {
    fn from(u: User) -> Self {
        Self {
            id: Set(u.id),
            email: Set(u.email),
            first_name: Set(u.first_name),
            last_name: Set(u.last_name),
            birth_date: Set(u.birth_date),
            address: Set(u.address),
            phone_number: Set(u.phone_number),
        }
    }
}
