//! Startup initialization from environment variables.
//!
//! Kept to a single test function: these variables are process-global, so
//! splitting the assertions across parallel tests would race.

use dx_client::{ApiServerInfo, DxClient, ExecContext, SecurityContext};

#[test]
fn startup_reads_environment() {
    // Nothing set: localhost defaults, no security context.
    for var in [
        "DX_APISERVER_HOST",
        "DX_APISERVER_PORT",
        "DX_APISERVER_PROTOCOL",
        "DX_SECURITY_CONTEXT",
        "DX_JOB_ID",
        "DX_WORKSPACE_ID",
        "DX_PROJECT_CONTEXT_ID",
    ] {
        std::env::remove_var(var);
    }

    let client = DxClient::from_env().unwrap();
    assert_eq!(client.server().base_url(), "http://localhost:8124");
    assert!(client.security_context().is_none());
    assert!(client.workspace_id().is_none());

    // Host alone is not enough; both host and port must be present.
    std::env::set_var("DX_APISERVER_HOST", "api.dnanexus.com");
    assert_eq!(ApiServerInfo::from_env().base_url(), "http://localhost:8124");

    // Host + port, protocol defaulting to http.
    std::env::set_var("DX_APISERVER_PORT", "8443");
    assert_eq!(
        ApiServerInfo::from_env().base_url(),
        "http://api.dnanexus.com:8443"
    );

    // Explicit protocol override.
    std::env::set_var("DX_APISERVER_PROTOCOL", "https");
    assert_eq!(
        ApiServerInfo::from_env().base_url(),
        "https://api.dnanexus.com:8443"
    );

    // Unparsable port falls back to the default port.
    std::env::set_var("DX_APISERVER_PORT", "not-a-port");
    assert_eq!(
        ApiServerInfo::from_env().base_url(),
        "https://api.dnanexus.com:8124"
    );
    std::env::set_var("DX_APISERVER_PORT", "8443");

    // Security context from the environment.
    std::env::set_var(
        "DX_SECURITY_CONTEXT",
        r#"{"auth_token_type":"Bearer","auth_token":"env-token"}"#,
    );
    let client = DxClient::from_env().unwrap();
    assert_eq!(
        client.security_context(),
        Some(&SecurityContext::bearer("env-token"))
    );

    // Malformed security context fails at startup.
    std::env::set_var("DX_SECURITY_CONTEXT", "{broken");
    assert!(DxClient::from_env().is_err());
    std::env::remove_var("DX_SECURITY_CONTEXT");

    // Outside a job, the project context doubles as the workspace.
    std::env::set_var("DX_PROJECT_CONTEXT_ID", "project-ctx");
    let exec = ExecContext::from_env();
    assert_eq!(exec.job_id, None);
    assert_eq!(exec.workspace_id.as_deref(), Some("project-ctx"));
    assert_eq!(exec.project_context_id.as_deref(), Some("project-ctx"));

    // Inside a job, the workspace comes from DX_WORKSPACE_ID.
    std::env::set_var("DX_JOB_ID", "job-123");
    std::env::set_var("DX_WORKSPACE_ID", "container-456");
    let exec = ExecContext::from_env();
    assert_eq!(exec.job_id.as_deref(), Some("job-123"));
    assert_eq!(exec.workspace_id.as_deref(), Some("container-456"));
    assert_eq!(exec.project_context_id.as_deref(), Some("project-ctx"));
}
