//! Authenticated vCenter REST client.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use vtemplate_core::config::ConnectionConfig;
use vtemplate_util::errors::VtemplateError;

use crate::auth;

/// The legacy `/rest` API wraps every payload in `{"value": ...}`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    value: T,
}

/// Build the HTTP client used for every vCenter call.
pub fn build_client(conn: &ConnectionConfig) -> Result<Client, VtemplateError> {
    Client::builder()
        .timeout(Duration::from_secs(conn.timeout_secs))
        .user_agent(concat!("vtemplate/", env!("CARGO_PKG_VERSION")))
        .danger_accept_invalid_certs(conn.insecure_connection)
        .build()
        .map_err(|e| VtemplateError::Network {
            message: format!("Failed to create HTTP client: {e}"),
        })
}

/// A logged-in vCenter session.
///
/// Cloning is cheap and shares the underlying connection pool and session.
#[derive(Debug, Clone)]
pub struct VsphereClient {
    http: Client,
    base_url: String,
    session_id: String,
}

impl VsphereClient {
    /// Log in to vCenter and return a client bound to the new session.
    pub async fn connect(
        conn: &ConnectionConfig,
        password: &str,
        cancel: &CancellationToken,
    ) -> Result<Self, VtemplateError> {
        let http = build_client(conn)?;
        let base_url = conn.base_url();
        let url = format!("{base_url}{}", auth::SESSION_PATH);

        tracing::debug!("Logging in to {base_url} as {}", conn.username);
        let request = auth::apply_login(http.post(&url), &conn.username, password);
        let body = match send(request, &url, cancel).await {
            Ok(body) => body,
            Err(VtemplateError::Api { status, message }) => {
                return Err(VtemplateError::Authentication {
                    message: format!("HTTP {status} from {base_url}: {message}"),
                });
            }
            Err(e) => return Err(e),
        };
        let session: Envelope<String> = decode(&body, &url)?;

        Ok(Self {
            http,
            base_url,
            session_id: session.value,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// End the session on the server.
    pub async fn logout(&self, cancel: &CancellationToken) -> Result<(), VtemplateError> {
        let url = self.url(auth::SESSION_PATH);
        let request = auth::apply_session(self.http.delete(&url), &self.session_id);
        send(request, &url, cancel).await.map(|_| ())
    }

    /// `GET` a resource and unwrap its `value`.
    pub(crate) async fn get_value<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        cancel: &CancellationToken,
    ) -> Result<T, VtemplateError> {
        let url = self.url(path);
        tracing::debug!("GET {url} {query:?}");
        let request = auth::apply_session(self.http.get(&url).query(query), &self.session_id);
        let body = send(request, &url, cancel).await?;
        decode::<Envelope<T>>(&body, &url).map(|e| e.value)
    }

    /// `POST` a JSON body and unwrap the response `value`.
    pub(crate) async fn post_value<B, T>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<T, VtemplateError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {url}");
        let request = auth::apply_session(self.http.post(&url).json(body), &self.session_id);
        let body = send(request, &url, cancel).await?;
        decode::<Envelope<T>>(&body, &url).map(|e| e.value)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Send `request` and return the raw body of a successful response.
///
/// Cancellation wins over an in-flight request: the request future is
/// dropped, which aborts the connection.
async fn send(
    request: RequestBuilder,
    url: &str,
    cancel: &CancellationToken,
) -> Result<Vec<u8>, VtemplateError> {
    let exchange = async {
        let resp = request.send().await.map_err(|e| VtemplateError::Network {
            message: format!("Request to {url} failed: {e}"),
        })?;
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| VtemplateError::Network {
            message: format!("Failed to read response from {url}: {e}"),
        })?;
        if !status.is_success() {
            return Err(VtemplateError::Api {
                status: status.as_u16(),
                message: api_error_message(&bytes),
            });
        }
        Ok::<_, VtemplateError>(bytes.to_vec())
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::debug!("Request to {url} cancelled");
            Err(VtemplateError::Cancelled)
        }
        result = exchange => result,
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], url: &str) -> Result<T, VtemplateError> {
    serde_json::from_slice(body).map_err(|e| VtemplateError::Network {
        message: format!("Unexpected response from {url}: {e}"),
    })
}

#[derive(Debug, Deserialize)]
struct ErrorMessages {
    #[serde(default)]
    messages: Vec<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    default_message: String,
}

#[derive(Debug, Deserialize)]
struct LegacyError {
    value: ErrorMessages,
}

/// Human-readable text of a vSphere error body.
///
/// Understands both the `/rest` (`{"value": {"messages": ..}}`) and the
/// `/api` (`{"messages": ..}`) shapes, falling back to the raw body.
fn api_error_message(body: &[u8]) -> String {
    let messages = serde_json::from_slice::<LegacyError>(body)
        .map(|e| e.value.messages)
        .or_else(|_| serde_json::from_slice::<ErrorMessages>(body).map(|e| e.messages))
        .unwrap_or_default();

    if !messages.is_empty() {
        return messages
            .into_iter()
            .map(|m| m.default_message)
            .collect::<Vec<_>>()
            .join("; ");
    }

    let raw = String::from_utf8_lossy(body).trim().to_string();
    if raw.is_empty() {
        "empty response body".to_string()
    } else {
        raw
    }
}
