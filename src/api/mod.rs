//! Per-route wrappers over [`DxClient::request`](crate::DxClient::request).
//!
//! The platform API has three route shapes: class routes
//! (`/system/findDataObjects`, `/record/new`), object routes
//! (`/{object-id}/{method}`), and app routes addressed by ID or by name
//! with an optional version alias (`/{app}[/{alias}]/{method}`). The
//! wrappers here cover the commonly used routes of each shape; anything
//! not covered goes through `DxClient::request` directly.

pub mod data;
pub mod exec;
pub mod system;

/// Route for a method on a single object, `/{object-id}/{method}`.
pub(crate) fn object_route(object_id: &str, method: &str) -> String {
    format!("/{}/{}", object_id, method)
}

/// Route for a method on an app, optionally pinned to a version alias.
pub(crate) fn app_route(app_name_or_id: &str, alias: Option<&str>, method: &str) -> String {
    match alias {
        Some(alias) => format!("/{}/{}/{}", app_name_or_id, alias, method),
        None => format!("/{}/{}", app_name_or_id, method),
    }
}
