// src/core/net.rs
//
// Single blocking HTTPS GET. Runs on the fetch worker, never on the UI thread.

use std::time::Duration;

use crate::config::consts::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::error::LoadError;

/// GET `url` and return the body as text. Any non-2xx status is an error.
pub fn http_get(url: &str) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            code: status.as_u16(),
            reason: s!(status.canonical_reason().unwrap_or("")),
        });
    }
    Ok(resp.text()?)
}
