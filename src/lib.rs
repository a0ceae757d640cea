//! Async client for the Uber Riders REST API.
//!
//! Two entry points:
//! - [`AuthClient`] runs the OAuth2 authorization-code exchange (and refresh)
//!   against the Uber login server, yielding [`Credentials`].
//! - [`UberClient`] issues authenticated GETs against the versioned API and
//!   deserializes responses into the typed records in [`models`], returning
//!   per-call rate-limit metadata alongside each payload.
//!
//! ```no_run
//! use uber_rides::{Config, TokenType, UberClient};
//!
//! # async fn demo() -> Result<(), uber_rides::Error> {
//! let client = UberClient::new(TokenType::Server, "my-server-token", Config::default())?;
//! let resp = client.products(37.7759, -122.4194).await?;
//! for product in resp.value.products {
//!     println!("{} ({})", product.display_name, product.product_id);
//! }
//! println!("rate limit remaining: {:?}", resp.meta.rate_limit_remaining);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod scope;
pub mod urls;

pub use auth::{AuthClient, Credentials};
pub use client::{TokenType, UberClient};
pub use config::Config;
pub use error::Error;
pub use http::{ApiResponse, ResponseMeta};
pub use scope::Scope;
