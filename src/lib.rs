//! # dx-client
//!
//! Rust client library for the DNAnexus platform API.
//!
//! Builds one authenticated HTTP request per call, sends it, and returns the
//! parsed JSON body. Configuration comes from the environment
//! (`DX_APISERVER_HOST`, `DX_APISERVER_PORT`, `DX_SECURITY_CONTEXT`) or from
//! the builder.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dx_client::{DxClient, Result};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Build a client from the environment
//!     let client = DxClient::from_env()?;
//!
//!     // Call an API route
//!     let results = client
//!         .request("/system/findDataObjects", &json!({"class": "record"}))
//!         .await?;
//!
//!     println!("{results}");
//!     Ok(())
//! }
//! ```
//!
//! Typed wrappers for common routes live in the [`api`] module:
//!
//! ```rust,no_run
//! # use dx_client::{api, DxClient};
//! # use serde_json::json;
//! # async fn example(client: &DxClient) -> dx_client::Result<()> {
//! let desc = api::data::record_describe(client, "record-9zQ8x1800Bv4KzjZ", &json!({})).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-exports for ergonomic usage
pub use auth::SecurityContext;
pub use client::{DxClient, DxClientBuilder};
pub use config::{ApiServerInfo, ExecContext};
pub use error::{Error, Result};
