//! HTTP transport: request dispatch and header construction.

pub mod headers;
pub mod http;

pub use http::DxHttpClient;
