//! Record, file, and project routes.

use crate::api::object_route;
use crate::client::DxClient;
use crate::error::Result;

// ── Records ──────────────────────────────────────────────────────────────────

/// Create a record (`/record/new`).
pub async fn record_new(client: &DxClient, input: &serde_json::Value) -> Result<serde_json::Value> {
    client.request("/record/new", input).await
}

/// Describe a record (`/{record-id}/describe`).
pub async fn record_describe(
    client: &DxClient,
    record_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(record_id, "describe"), input).await
}

/// Close a record (`/{record-id}/close`).
pub async fn record_close(
    client: &DxClient,
    record_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(record_id, "close"), input).await
}

/// Get the details of a record (`/{record-id}/getDetails`).
pub async fn record_get_details(
    client: &DxClient,
    record_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(record_id, "getDetails"), input).await
}

/// Set the details of a record (`/{record-id}/setDetails`).
pub async fn record_set_details(
    client: &DxClient,
    record_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(record_id, "setDetails"), input).await
}

// ── Files ────────────────────────────────────────────────────────────────────

/// Create a file (`/file/new`).
pub async fn file_new(client: &DxClient, input: &serde_json::Value) -> Result<serde_json::Value> {
    client.request("/file/new", input).await
}

/// Describe a file (`/{file-id}/describe`).
pub async fn file_describe(
    client: &DxClient,
    file_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(file_id, "describe"), input).await
}

/// Close a file (`/{file-id}/close`).
pub async fn file_close(
    client: &DxClient,
    file_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(file_id, "close"), input).await
}

// ── Projects ─────────────────────────────────────────────────────────────────

/// Create a project (`/project/new`).
pub async fn project_new(client: &DxClient, input: &serde_json::Value) -> Result<serde_json::Value> {
    client.request("/project/new", input).await
}

/// Describe a project (`/{project-id}/describe`).
pub async fn project_describe(
    client: &DxClient,
    project_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(project_id, "describe"), input).await
}

/// Invite a user to a project (`/{project-id}/invite`).
pub async fn project_invite(
    client: &DxClient,
    project_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(project_id, "invite"), input).await
}

/// List a folder in a project (`/{project-id}/listFolder`).
pub async fn project_list_folder(
    client: &DxClient,
    project_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(project_id, "listFolder"), input).await
}

/// Create a folder in a project (`/{project-id}/newFolder`).
pub async fn project_new_folder(
    client: &DxClient,
    project_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(project_id, "newFolder"), input).await
}
