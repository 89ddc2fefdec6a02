use serde::de::DeserializeOwned;
use serde::Serialize;
use url::form_urlencoded;

use crate::errors::{WitError, WitResult};

/// API version pinned by this client, sent with every request.
pub const API_VERSION: &str = "20151127";

/// Appends the version marker, continuing an existing query string when there is one.
pub fn with_version(resource: &str) -> String {
    let separator = if resource.contains('?') { '&' } else { '?' };
    format!("{}{}version={}", resource, separator, API_VERSION)
}

/// Form-style escaping for query values. Spaces become `+`.
pub fn escape_query(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Escaping for a single path segment. The service routes `+` literally in paths, so spaces
/// must travel as `%20`.
pub fn escape_segment(value: &str) -> String {
    escape_query(value).replace('+', "%20")
}

/// Escaped path segment for a caller-supplied key. Empty, `.` and `..` are refused: URL
/// parsing would collapse them (escaped or not) and the request would land on a parent
/// resource.
pub fn path_segment(value: &str) -> WitResult<String> {
    match value {
        "" | "." | ".." => Err(WitError::InvalidRequest(format!(
            "'{}' is not a valid path segment",
            value
        ))),
        _ => Ok(escape_segment(value)),
    }
}

/// Serialize a request body to compact JSON.
pub fn encode<T: Serialize>(value: &T) -> WitResult<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|e| WitError::InvalidRequest(format!("Failed to encode request body: {}", e)))
}

/// Parse a response body. Unknown keys are ignored by the target types.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> WitResult<T> {
    Ok(serde_json::from_slice(data)?)
}
