use crate::error::{Result, TransferError};
use crate::settings::ClientSettings;
use reqwest::{Client, Method, Response};
use tracing::warn;

/// Uploads files to and downloads files from the files API
///
/// Holds no mutable state: the transport is shared and the settings are
/// fixed at construction, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct TransferClient {
    pub(crate) http: Client,
    pub(crate) settings: ClientSettings,
}

impl TransferClient {
    /// Create a client with its own transport, honouring `timeout_secs`
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self::with_http_client(settings, http))
    }

    /// Create a client over an existing transport
    pub fn with_http_client(settings: ClientSettings, http: Client) -> Self {
        Self { http, settings }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

/// Turn a non-2xx response into `TransferError::Status`, keeping the body
pub(crate) async fn ensure_success(
    method: Method,
    url: &str,
    response: Response,
) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    warn!(%method, url = %url, %status, body = %body, "Request rejected by server");

    Err(TransferError::Status {
        method,
        url: url.to_string(),
        status,
        body,
    })
}
