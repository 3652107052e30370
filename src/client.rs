//! Main client entry point.

use reqwest::header::HeaderMap;
use reqwest::Method;
use tracing::{debug, info};

use crate::auth::{credentials, SecurityContext};
use crate::config::{ApiServerInfo, ExecContext};
use crate::error::{Error, Result};
use crate::transport::headers;
use crate::transport::http::DxHttpClient;

/// DNAnexus API client.
///
/// Owns the server location and security context; every request is built
/// from the client's current state, so the setters take effect on the next
/// call. The client is not internally synchronized - share it behind a lock
/// if concurrent reconfiguration is needed.
///
/// # Examples
///
/// ```rust,no_run
/// use dx_client::DxClient;
/// use serde_json::json;
///
/// # async fn example() -> dx_client::Result<()> {
/// let client = DxClient::builder()
///     .host("api.dnanexus.com")
///     .port(443)
///     .protocol("https")
///     .security_context_json(r#"{"auth_token_type":"Bearer","auth_token":"abc123"}"#)
///     .build()?;
///
/// let results = client
///     .request("/system/findDataObjects", &json!({"class": "record"}))
///     .await?;
///
/// println!("{results}");
/// # Ok(())
/// # }
/// ```
pub struct DxClient {
    server: ApiServerInfo,
    security: Option<SecurityContext>,
    exec: ExecContext,
    http: DxHttpClient,
}

impl DxClient {
    /// Create a builder for configuring the client.
    pub fn builder() -> DxClientBuilder {
        DxClientBuilder::new()
    }

    /// Create a client from the environment, the way a process-start
    /// initialization would.
    ///
    /// Server info per [`ApiServerInfo::from_env`]; security context from
    /// `DX_SECURITY_CONTEXT` if present (malformed JSON is an error),
    /// otherwise left unset so that the first request fails instead.
    pub fn from_env() -> Result<Self> {
        DxClientBuilder::new().build()
    }

    /// Send a POST request to an API route and return the parsed response.
    ///
    /// Shorthand for [`DxClient::request_with`] with `POST` and no extra
    /// headers.
    pub async fn request(&self, resource: &str, data: &serde_json::Value) -> Result<serde_json::Value> {
        self.request_with(resource, data, Method::POST, HeaderMap::new()).await
    }

    /// Send a request to an API route with an explicit method and extra
    /// headers.
    ///
    /// `Authorization`, `Content-Type`, and `DNAnexus-API` are always
    /// overwritten from the client state; other caller headers pass through.
    /// Fails before any I/O when `resource` is empty or no security context
    /// is set. Success is exactly status 200, whose body is parsed as JSON;
    /// any other status is an [`Error::Api`] with the raw body text.
    pub async fn request_with(
        &self,
        resource: &str,
        data: &serde_json::Value,
        method: Method,
        headers: HeaderMap,
    ) -> Result<serde_json::Value> {
        if resource.is_empty() {
            return Err(Error::MissingResource);
        }
        let security = self.security.as_ref().ok_or(Error::MissingSecurityContext)?;

        let url = self.server.url_for(resource);
        let hdrs = headers::dx_api_headers(security, headers)?;

        debug!(resource, "Dispatching API call");
        self.http.request(method, &url, hdrs, data).await
    }

    /// Overwrite the server location. Takes effect on the next request.
    pub fn set_api_server_info(
        &mut self,
        host: impl Into<String>,
        port: u16,
        protocol: impl Into<String>,
    ) {
        self.server = ApiServerInfo::new(host, port, protocol);
    }

    /// Overwrite the security context. Takes effect on the next request.
    pub fn set_security_context(&mut self, security: SecurityContext) {
        self.security = Some(security);
    }

    /// Parse a JSON-encoded security context and store it.
    ///
    /// Malformed JSON fails here and leaves the previous context in place.
    pub fn set_security_context_json(&mut self, json: &str) -> Result<()> {
        self.security = Some(SecurityContext::from_json(json)?);
        Ok(())
    }

    /// The server location requests are currently sent to.
    pub fn server(&self) -> &ApiServerInfo {
        &self.server
    }

    /// The current security context, if one is set.
    pub fn security_context(&self) -> Option<&SecurityContext> {
        self.security.as_ref()
    }

    /// The execution-environment context read at construction.
    pub fn exec_context(&self) -> &ExecContext {
        &self.exec
    }

    /// Default workspace for object creation, when running with one.
    pub fn workspace_id(&self) -> Option<&str> {
        self.exec.workspace_id.as_deref()
    }
}

impl std::fmt::Debug for DxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DxClient")
            .field("server", &self.server)
            .field("security_set", &self.security.is_some())
            .field("exec", &self.exec)
            .finish()
    }
}

/// Builder for [`DxClient`].
pub struct DxClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    protocol: Option<String>,
    security_context: Option<SecurityContext>,
    security_context_json: Option<String>,
    credentials_file: Option<String>,
    reqwest_client: Option<reqwest::Client>,
}

impl DxClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            host: None,
            port: None,
            protocol: None,
            security_context: None,
            security_context_json: None,
            credentials_file: None,
            reqwest_client: None,
        }
    }

    /// Set the API server host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the API server port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the API server protocol.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Set the security context directly.
    pub fn security_context(mut self, security: SecurityContext) -> Self {
        self.security_context = Some(security);
        self
    }

    /// Set the security context from its JSON encoding. Parsed at build time.
    pub fn security_context_json(mut self, json: impl Into<String>) -> Self {
        self.security_context_json = Some(json.into());
        self
    }

    /// Load the security context from a JSON file.
    pub fn credentials_file(mut self, path: impl Into<String>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Set a custom reqwest client.
    pub fn reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.reqwest_client = Some(client);
        self
    }

    /// Build the client, resolving configuration and credentials.
    pub fn build(self) -> Result<DxClient> {
        let security = self.resolve_security_context()?;

        let mut server = ApiServerInfo::from_env();
        if let Some(host) = self.host {
            server.host = host;
        }
        if let Some(port) = self.port {
            server.port = port;
        }
        if let Some(protocol) = self.protocol {
            server.protocol = protocol;
        }

        let exec = ExecContext::from_env();

        let http = match self.reqwest_client {
            Some(client) => DxHttpClient::with_client(client),
            None => DxHttpClient::new(),
        };

        info!(server = %server.base_url(), security_set = security.is_some(), "DxClient initialized");
        Ok(DxClient {
            server,
            security,
            exec,
            http,
        })
    }

    fn resolve_security_context(&self) -> Result<Option<SecurityContext>> {
        // Priority: explicit context > JSON string > file > environment

        if let Some(ctx) = &self.security_context {
            return Ok(Some(ctx.clone()));
        }

        if let Some(json) = &self.security_context_json {
            return Ok(Some(SecurityContext::from_json(json)?));
        }

        if let Some(path) = &self.credentials_file {
            return Ok(Some(credentials::load_from_json_file(path)?));
        }

        credentials::load_from_env()
    }
}

impl Default for DxClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
