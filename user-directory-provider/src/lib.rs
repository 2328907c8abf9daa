//! # user-directory-provider
//!
//! Read-only HTTP clients for a remote user directory.
//!
//! The crate exposes a single seam, [`UserSource`], with two operations:
//!
//! | Operation | Endpoint | Failure on non-success status |
//! |-----------|----------|-------------------------------|
//! | [`UserSource::fetch_users`] | `GET {base}/users` | [`ProviderError::HttpStatus`] |
//! | [`UserSource::fetch_user`] | `GET {base}/users/{id}` | [`ProviderError::UserNotFound`] |
//!
//! Every request bypasses HTTP caches (`Cache-Control: no-cache, no-store`),
//! and no request is ever retried.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use user_directory_provider::{create_source, ProviderConfig, UserSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = create_source(&ProviderConfig::default())?;
//!
//!     for user in source.fetch_users().await? {
//!         println!("{} <{}>", user.name, user.email);
//!     }
//!
//!     let user = source.fetch_user("3").await?;
//!     println!("{} works at {}", user.name, user.company.name);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::HttpStatus`]: the collection endpoint answered with a non-success status
//! - [`ProviderError::UserNotFound`]: the detail endpoint answered with a non-success status
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: the request never completed
//! - [`ProviderError::ParseError`]: the body was not the expected JSON shape

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;

pub use error::{ProviderError, Result};

pub use factory::create_source;

pub use traits::UserSource;

pub use types::{Address, Company, Geo, ProviderConfig, UserRecord, DEFAULT_BASE_URL};

pub use providers::JsonPlaceholderProvider;
