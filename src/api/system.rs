//! `/system/*` search routes.

use crate::client::DxClient;
use crate::error::Result;

/// Search data objects (`/system/findDataObjects`).
pub async fn system_find_data_objects(
    client: &DxClient,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request("/system/findDataObjects", input).await
}

/// Search projects (`/system/findProjects`).
pub async fn system_find_projects(
    client: &DxClient,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request("/system/findProjects", input).await
}

/// Search jobs (`/system/findJobs`).
pub async fn system_find_jobs(
    client: &DxClient,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request("/system/findJobs", input).await
}

/// Search apps (`/system/findApps`).
pub async fn system_find_apps(
    client: &DxClient,
    input: &serde_json::Value,
) -> Result<serde_json::Value> {
    client.request("/system/findApps", input).await
}
