use chrono::NaiveDate;

/// Stored user record (no serde; REST DTOs live in `api::rest::dto`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// A complete user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Sparse user payload used by create, replace and patch.
///
/// `None` means the field was omitted (or sent as `null`); `Some("")` means it
/// was sent blank. Which of the two is acceptable depends on the validation
/// profile the draft is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl NewUser {
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            address: self.address,
            phone_number: self.phone_number,
        }
    }
}

impl UserDraft {
    /// Overwrite the fields present in `patch`, keeping the rest.
    pub fn apply(&mut self, patch: UserDraft) {
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = Some(birth_date);
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = Some(phone_number);
        }
    }

    /// Returns the complete user, or `None` if a required field is absent.
    pub fn complete(self) -> Option<NewUser> {
        Some(NewUser {
            email: self.email?,
            first_name: self.first_name?,
            last_name: self.last_name?,
            birth_date: self.birth_date?,
            address: self.address,
            phone_number: self.phone_number,
        })
    }
}

impl From<User> for UserDraft {
    fn from(user: User) -> Self {
        Self {
            email: Some(user.email),
            first_name: Some(user.first_name),
            last_name: Some(user.last_name),
            birth_date: Some(user.birth_date),
            address: user.address,
            phone_number: user.phone_number,
        }
    }
}
