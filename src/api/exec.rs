//! Job and app execution routes.

use crate::api::{app_route, object_route};
use crate::client::DxClient;
use crate::error::Result;

/// Describe a job (`/{job-id}/describe`).
pub async fn job_describe(
    client: &DxClient,
    job_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(job_id, "describe"), input).await
}

/// Terminate a job (`/{job-id}/terminate`).
pub async fn job_terminate(
    client: &DxClient,
    job_id: &str,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&object_route(job_id, "terminate"), input).await
}

/// Describe an app by ID or name, optionally pinned to a version alias
/// (`/{app}[/{alias}]/describe`).
pub async fn app_describe(
    client: &DxClient,
    app_name_or_id: &str,
    alias: Option<&str>,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&app_route(app_name_or_id, alias, "describe"), input).await
}

/// Run an app by ID or name, optionally pinned to a version alias
/// (`/{app}[/{alias}]/run`).
pub async fn app_run(
    client: &DxClient,
    app_name_or_id: &str,
    alias: Option<&str>,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request(&app_route(app_name_or_id, alias, "run"), input).await
}
