//! Security-context loading from the environment and from JSON files.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::auth::SecurityContext;
use crate::error::{Error, Result};

/// Load the security context from `DX_SECURITY_CONTEXT`.
///
/// Returns `Ok(None)` when the variable is absent or empty; malformed JSON
/// in a present variable is a hard error.
pub fn load_from_env() -> Result<Option<SecurityContext>> {
    let raw = match std::env::var("DX_SECURITY_CONTEXT") {
        Ok(v) if !v.is_empty() => v,
        _ => return Ok(None),
    };

    let ctx = SecurityContext::from_json(&raw)?;
    info!("Security context loaded from environment");
    Ok(Some(ctx))
}

/// Load the security context from a JSON file.
///
/// The file holds the same JSON shape as `DX_SECURITY_CONTEXT`. A leading
/// `~/` is expanded against the home directory.
pub fn load_from_json_file(path: &str) -> Result<SecurityContext> {
    let path = expand_tilde(path);

    if !path.exists() {
        return Err(Error::credentials_io(&path, "Credentials file not found"));
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::credentials_io(&path, e.to_string()))?;
    let ctx = SecurityContext::from_json(&content)?;

    info!(path = %path.display(), "Security context loaded from file");
    Ok(ctx)
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    Path::new(path).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_json_file_missing() {
        let err = load_from_json_file("/nonexistent/security_context.json").unwrap_err();
        assert!(matches!(err, Error::CredentialsIo { .. }));
    }

    #[test]
    fn test_expand_tilde_absolute_path_untouched() {
        assert_eq!(
            expand_tilde("/etc/dx/security_context.json"),
            PathBuf::from("/etc/dx/security_context.json")
        );
    }
}
