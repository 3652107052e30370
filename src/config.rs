//! API server location, execution context, and protocol constants.

use std::time::Duration;

use tracing::warn;

/// Default API server host.
pub const DEFAULT_APISERVER_HOST: &str = "localhost";

/// Default API server port.
pub const DEFAULT_APISERVER_PORT: u16 = 8124;

/// Default API server protocol.
pub const DEFAULT_APISERVER_PROTOCOL: &str = "http";

/// Protocol version sent in the `DNAnexus-API` header on every request.
pub const API_VERSION: &str = "1.0.0";

/// Connect timeout for HTTP requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Request timeout. The platform allows long-running routes (e.g. waiting on
/// file closure), so this is deliberately generous.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3600);

/// Location of the API server: host, port, and protocol.
///
/// Derives the base URL every request is sent to. Last-write-wins: replacing
/// the server info on a client takes effect on the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiServerInfo {
    /// Host name or address of the API server.
    pub host: String,
    /// TCP port of the API server.
    pub port: u16,
    /// URL scheme, `http` or `https`.
    pub protocol: String,
}

impl ApiServerInfo {
    /// Create server info from explicit parts. No validation is performed.
    pub fn new(host: impl Into<String>, port: u16, protocol: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            protocol: protocol.into(),
        }
    }

    /// Read server info from `DX_APISERVER_HOST` / `DX_APISERVER_PORT`.
    ///
    /// Both variables must be set to take effect; otherwise the localhost
    /// default is used. The protocol comes from `DX_APISERVER_PROTOCOL` when
    /// present. An unparsable port falls back to the default port so that
    /// startup never fails.
    pub fn from_env() -> Self {
        let host = std::env::var("DX_APISERVER_HOST").ok().filter(|v| !v.is_empty());
        let port = std::env::var("DX_APISERVER_PORT").ok().filter(|v| !v.is_empty());

        match (host, port) {
            (Some(host), Some(port)) => {
                let port = port.parse().unwrap_or_else(|_| {
                    warn!(port = port.as_str(), "DX_APISERVER_PORT is not a valid port, using default");
                    DEFAULT_APISERVER_PORT
                });
                let protocol = std::env::var("DX_APISERVER_PROTOCOL")
                    .ok()
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_APISERVER_PROTOCOL.to_string());
                Self { host, port, protocol }
            }
            _ => Self::default(),
        }
    }

    /// Base URL of the API server, `{protocol}://{host}:{port}`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }

    /// Full URL for an API route, base URL plus the resource path.
    #[must_use]
    pub fn url_for(&self, resource: &str) -> String {
        format!("{}{}", self.base_url(), resource)
    }
}

impl Default for ApiServerInfo {
    fn default() -> Self {
        Self {
            host: DEFAULT_APISERVER_HOST.to_string(),
            port: DEFAULT_APISERVER_PORT,
            protocol: DEFAULT_APISERVER_PROTOCOL.to_string(),
        }
    }
}

/// Execution-environment context, populated when running inside a platform
/// job.
///
/// Informational only: routes that want a default project pick it up from
/// [`ExecContext::workspace_id`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecContext {
    /// ID of the running job, from `DX_JOB_ID`.
    pub job_id: Option<String>,
    /// Default workspace for object creation and modification.
    pub workspace_id: Option<String>,
    /// Project context of the running job, from `DX_PROJECT_CONTEXT_ID`.
    pub project_context_id: Option<String>,
}

impl ExecContext {
    /// Read the execution context from the environment.
    ///
    /// Inside a job (`DX_JOB_ID` set) the workspace comes from
    /// `DX_WORKSPACE_ID`; outside one, `DX_PROJECT_CONTEXT_ID` doubles as
    /// the workspace.
    pub fn from_env() -> Self {
        let get = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        match get("DX_JOB_ID") {
            Some(job_id) => Self {
                job_id: Some(job_id),
                workspace_id: get("DX_WORKSPACE_ID"),
                project_context_id: get("DX_PROJECT_CONTEXT_ID"),
            },
            None => {
                let project = get("DX_PROJECT_CONTEXT_ID");
                Self {
                    job_id: None,
                    workspace_id: project.clone(),
                    project_context_id: project,
                }
            }
        }
    }
}
