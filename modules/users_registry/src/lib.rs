// === PUBLIC CONTRACT ===
// Only the contract module should be public for other modules to consume
pub mod contract;

// Re-export the public contract components
pub use contract::{client, error, model};

// === MODULE DEFINITION ===
pub mod config;
pub mod module;
pub use config::UsersRegistryConfig;
pub use module::{UsersRegistry, MODULE_NAME};

// === INTERNAL MODULES ===
// Exposed for integration tests and the server binary; only `contract` is a
// stable API for other modules.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
