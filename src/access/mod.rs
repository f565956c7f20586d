//! HTTP access layer
//!
//! Every API facade talks to the Freebox through the [`Access`] trait. The
//! production implementation, [`HttpAccess`], owns the base URL, the session
//! header and the unwrapping of the `{"success": .., "result": ..}` envelope.

use crate::{config::AccessConfig, error::FreeboxError};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;

/// Header carrying the session token on every authenticated request.
pub const AUTH_HEADER: &str = "X-Fbx-App-Auth";

/// Verb + path transport used by the API facades.
///
/// Paths are relative to the API root (e.g. `dhcp/config/`). Implementations
/// return the `result` member of a successful response.
#[async_trait]
pub trait Access: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, FreeboxError>;
    async fn post(&self, path: &str, payload: Value) -> Result<Value, FreeboxError>;
    async fn put(&self, path: &str, payload: Value) -> Result<Value, FreeboxError>;
    async fn delete(&self, path: &str) -> Result<Value, FreeboxError>;
}

#[derive(Deserialize, Debug)]
struct Envelope {
    success: bool,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
}

/// Unwraps a Freebox response body.
///
/// A successful envelope yields its `result` (JSON `null` when absent). A
/// failed one, or a non-JSON body on an error status, becomes
/// [`FreeboxError::Api`].
pub fn parse_envelope(status: StatusCode, body: &[u8]) -> Result<Value, FreeboxError> {
    let envelope: Envelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(FreeboxError::Api {
                status: status.as_u16(),
                error_code: "http_error".to_string(),
                msg: String::from_utf8_lossy(body).into_owned(),
            });
        }
        Err(e) => return Err(FreeboxError::Json(e)),
    };

    if envelope.success {
        return Ok(envelope.result.unwrap_or(Value::Null));
    }

    Err(FreeboxError::Api {
        status: status.as_u16(),
        error_code: envelope.error_code.unwrap_or_default(),
        msg: envelope.msg.unwrap_or_default(),
    })
}

/// Percent-encodes a caller-supplied id so it stays a single path segment.
///
/// Empty ids and the dot segments `.`/`..` are rejected since they would
/// resolve to a different endpoint.
pub fn path_segment(raw: &str) -> Result<String, FreeboxError> {
    if raw.is_empty() || raw == "." || raw == ".." {
        return Err(FreeboxError::InvalidPathSegment(raw.to_string()));
    }

    let mut segment = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b':' | b'@' => {
                segment.push(byte as char)
            }
            _ => segment.push_str(&format!("%{byte:02X}")),
        }
    }
    Ok(segment)
}

pub struct HttpAccess {
    client: Client,
    base_url: Url,
    session_token: String,
}

impl HttpAccess {
    pub fn new(config: &AccessConfig) -> Result<Self, FreeboxError> {
        let raw = config.base_url();
        let base_url = Url::parse(&raw).map_err(|e| FreeboxError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url,
            session_token: config.session_token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url, FreeboxError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| FreeboxError::InvalidUrl {
                url: path.to_string(),
                reason: e.to_string(),
            })
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<Value, FreeboxError> {
        let url = self.url_for(path)?;
        tracing::debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method.clone(), url)
            .header(AUTH_HEADER, &self.session_token);
        if let Some(payload) = payload {
            builder = builder.json(&payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!("{} {} -> {} ({} bytes)", method, path, status, body.len());

        parse_envelope(status, &body).inspect_err(|e| {
            tracing::warn!("{} {} failed: {}", method, path, e);
        })
    }
}

#[async_trait]
impl Access for HttpAccess {
    async fn get(&self, path: &str) -> Result<Value, FreeboxError> {
        self.request(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, payload: Value) -> Result<Value, FreeboxError> {
        self.request(Method::POST, path, Some(payload)).await
    }

    async fn put(&self, path: &str, payload: Value) -> Result<Value, FreeboxError> {
        self.request(Method::PUT, path, Some(payload)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, FreeboxError> {
        self.request(Method::DELETE, path, None).await
    }
}
