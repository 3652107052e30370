//! API request header construction.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::auth::SecurityContext;
use crate::config::API_VERSION;
use crate::error::{Error, Result};

/// Header carrying the protocol version on every request.
pub const DNANEXUS_API_HEADER: &str = "dnanexus-api";

/// Build the headers for an API request.
///
/// Starts from the caller-supplied map and force-overwrites `Authorization`,
/// `Content-Type`, and `DNAnexus-API`. Caller values for those three keys
/// never reach the wire.
pub fn dx_api_headers(security: &SecurityContext, mut headers: HeaderMap) -> Result<HeaderMap> {
    let authorization = HeaderValue::from_str(&security.authorization_header())
        .map_err(|_| Error::Config("auth token contains characters not allowed in a header".into()))?;

    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(DNANEXUS_API_HEADER),
        HeaderValue::from_static(API_VERSION),
    );

    Ok(headers)
}
