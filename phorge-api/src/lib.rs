//! # phorge-api
//!
//! Typed async client for the [Laravel Forge](https://forge.laravel.com) API.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//! - **`test-utils`**: Export [`test_utils::MockTransport`] for downstream tests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use phorge_api::ForgeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ForgeClient::new("your-api-key")?;
//!
//!     for server in client.list_servers().await? {
//!         println!("{} ({:?})", server.name, server.ip_address);
//!         for site in client.list_sites(server.id).await? {
//!             println!("  {}", site.name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T>`](Result), i.e. `Result<T, ForgeError>`:
//!
//! | Status | Variant |
//! |--------|---------|
//! | 401 | [`ForgeError::Authentication`] |
//! | 404 | [`ForgeError::NotFound`] |
//! | 422 | [`ForgeError::Validation`] |
//! | 429 | [`ForgeError::RateLimited`] |
//! | other non-2xx | [`ForgeError::Api`] |
//!
//! Timeouts (30s total, 10s connect) surface as [`ForgeError::Timeout`].

mod client;
mod endpoints;
mod env;
mod error;
mod http_client;
mod models;
mod requests;
mod transport;
mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::ForgeClient;
pub use env::parse_env;
pub use error::{ForgeError, Result, validation_summary};
pub use http_client::{BASE_URL, HttpTransport};
pub use models::{
    Backup, BackupConfig, Certificate, Daemon, Database, DatabaseUser, Deployment, FirewallRule, ScheduledJob,
    Server, Site, SiteCommand, SshKey, User, Worker,
};
pub use requests::{
    CreateDaemon, CreateDatabase, CreateDatabaseUser, CreateFirewallRule, CreateScheduledJob, CreateSshKey,
    CreateWorker, FirewallRuleType, InstallRepository,
};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
