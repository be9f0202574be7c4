#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::NaiveDate;

use users_registry::contract::model::{NewUser, User, UserDraft};
use users_registry::domain::ports::FixedClock;
use users_registry::domain::repo::UsersRepository;
use users_registry::domain::service::{Service, ServiceConfig};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// "Today" for every test: 2024-01-01.
pub fn today() -> NaiveDate {
    date(2024, 1, 1)
}

pub fn valid_draft() -> UserDraft {
    UserDraft {
        email: Some("a@b.com".into()),
        first_name: Some("A".into()),
        last_name: Some("B".into()),
        birth_date: Some(date(2000, 1, 1)),
        address: Some("X".into()),
        phone_number: Some("Y".into()),
    }
}

/// In-memory repository that records which operations reached it.
#[derive(Default)]
pub struct InMemoryRepo {
    users: Mutex<Vec<User>>,
    calls: Mutex<Vec<&'static str>>,
    fail: bool,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the database were unreachable.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str) -> Result<()> {
        self.calls.lock().unwrap().push(op);
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UsersRepository for InMemoryRepo {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.record("find_by_id")?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        self.record("find_all")?;
        Ok(self.stored())
    }

    async fn find_by_birth_date_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<User>> {
        self.record("find_by_birth_date_range")?;
        Ok(self
            .stored()
            .into_iter()
            .filter(|u| u.birth_date >= from && u.birth_date <= to)
            .collect())
    }

    async fn insert(&self, u: NewUser) -> Result<User> {
        self.record("insert")?;
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = u.with_id(id);
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, u: User) -> Result<User> {
        self.record("update")?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|existing| existing.id == u.id) {
            Some(existing) => {
                *existing = u.clone();
                Ok(u)
            }
            None => anyhow::bail!("no row with id {}", u.id),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        self.record("delete")?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() != before)
    }
}

pub fn service_with(repo: Arc<InMemoryRepo>, min_age: u32) -> Service {
    Service::new(
        repo,
        Arc::new(FixedClock(today())),
        ServiceConfig { min_age },
    )
}

pub fn stored_user(id: i64) -> User {
    User {
        id,
        email: format!("user{id}@example.com"),
        first_name: "First".into(),
        last_name: "Last".into(),
        birth_date: date(1990, 6, 15),
        address: Some("Main st. 1".into()),
        phone_number: None,
    }
}
