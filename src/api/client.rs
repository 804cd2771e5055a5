//! Patient Collection Client
//!
//! One authenticated GET against the records endpoint. A single attempt with
//! no retry; every failure is surfaced to the caller for display.

use gloo_net::http::Request;
use thiserror::Error;

use crate::config;
use crate::model::Patient;

/// Failure of the retrieval attempt.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport call itself failed.
    #[error("network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The body was not a JSON array of patient records.
    #[error("malformed response: {0}")]
    Parse(String),
}

/// Fetch the full patient collection.
pub async fn fetch_patients() -> Result<Vec<Patient>, FetchError> {
    let (username, password) = config::credentials();

    let response = Request::get(&config::api_url())
        .header("Authorization", &basic_auth(&username, &password))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Vec<Patient>>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

/// Basic authorization header value for a credential pair.
pub fn basic_auth(username: &str, password: &str) -> String {
    let pair = format!("{}:{}", username, password);
    format!("Basic {}", base64_encode(pair.as_bytes()))
}

/// Minimal base64 encoder for the credential pair.
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    for chunk in data.chunks(3) {
        let b0 = chunk[0] as usize;
        let b1 = chunk.get(1).copied().unwrap_or(0) as usize;
        let b2 = chunk.get(2).copied().unwrap_or(0) as usize;

        out.push(ALPHABET[b0 >> 2] as char);
        out.push(ALPHABET[((b0 & 0x03) << 4) | (b1 >> 4)] as char);

        if chunk.len() > 1 {
            out.push(ALPHABET[((b1 & 0x0f) << 2) | (b2 >> 6)] as char);
        } else {
            out.push('=');
        }

        if chunk.len() > 2 {
            out.push(ALPHABET[b2 & 0x3f] as char);
        } else {
            out.push('=');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_padding() {
        assert_eq!(base64_encode(b"a"), "YQ==");
        assert_eq!(base64_encode(b"ab"), "YWI=");
        assert_eq!(base64_encode(b"abc"), "YWJj");
        assert_eq!(base64_encode(b""), "");
    }

    #[test]
    fn test_basic_auth_header() {
        assert_eq!(
            basic_auth("coalition", "skills-test"),
            "Basic Y29hbGl0aW9uOnNraWxscy10ZXN0"
        );
    }
}
