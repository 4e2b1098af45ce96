// src/core/net.rs
//
// One blocking GET per resource. The orchestrator only sees `Transport`,
// so tests can swap in a fake and count calls.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use thiserror::Error;
use tracing::debug;

use crate::config::consts::{ACCEPT, ACCEPT_LANGUAGE};
use crate::config::options::FetchOptions;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {code} for url ({url})")]
    Status { code: u16, url: String },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}")]
    Other(String),
}

/// `fetch(url) -> bytes | error`. `timeout: None` means unbounded.
pub trait Transport {
    fn get(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError>;

    /// Body as text. The default assumes UTF-8 (lossy); HTTP transports
    /// decode by the response charset instead.
    fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<String, FetchError> {
        self.get(url, timeout)
            .map(|body| String::from_utf8_lossy(&body).into_owned())
    }
}

/// Browser-like defaults; listing sites tend to refuse bare clients.
fn build_headers(user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(ua) = HeaderValue::from_str(user_agent) {
        headers.insert(header::USER_AGENT, ua);
    }
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE));
    headers
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        // No client-wide timeout: the page GET sets its own, the image GET has none.
        let client = Client::builder()
            .default_headers(build_headers(&opts.user_agent))
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }

    fn send(&self, url: &str, timeout: Option<Duration>) -> Result<Response, FetchError> {
        let mut req = self.client.get(url);
        if let Some(t) = timeout {
            req = req.timeout(t);
        }

        let resp = req.send()?;
        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status { code: status.as_u16(), url: s!(url) });
        }
        Ok(resp)
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError> {
        let resp = self.send(url, timeout)?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?;
        debug!(url, status, bytes = body.len(), "GET ok");
        Ok(body.to_vec())
    }

    /// Decodes by the `Content-Type` charset, UTF-8 when none is given.
    fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<String, FetchError> {
        let resp = self.send(url, timeout)?;
        let status = resp.status().as_u16();
        let text = resp.text()?;
        debug!(url, status, bytes = text.len(), "GET text ok");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_carry_user_agent() {
        let h = build_headers("test-agent/1.0");
        assert_eq!(h.get(header::USER_AGENT).unwrap(), "test-agent/1.0");
        assert!(h.contains_key(header::ACCEPT));
        assert!(h.contains_key(header::ACCEPT_LANGUAGE));
    }

    #[test]
    fn invalid_user_agent_is_skipped() {
        let h = build_headers("bad\nagent");
        assert!(h.get(header::USER_AGENT).is_none());
    }

    #[test]
    fn status_error_message_names_code_and_url() {
        let e = FetchError::Status { code: 503, url: s!("https://example.com/dp/1") };
        assert_eq!(e.to_string(), "HTTP 503 for url (https://example.com/dp/1)");
    }
}
