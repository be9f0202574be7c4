pub mod client;
pub mod error;
pub mod model;

pub use client::UsersRegistryApi;
pub use error::UsersRegistryError;
pub use model::{NewUser, User, UserDraft};
