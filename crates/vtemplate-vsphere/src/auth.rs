//! vCenter session authentication.
//!
//! Login is a `POST` to the session endpoint with HTTP basic auth; the
//! response carries a session id that every later request sends back in the
//! `vmware-api-session-id` header.

use reqwest::RequestBuilder;

/// Header carrying the session id on authenticated requests.
pub const SESSION_HEADER: &str = "vmware-api-session-id";

/// REST path of the session resource.
pub const SESSION_PATH: &str = "/rest/com/vmware/cis/session";

/// Apply basic credentials to a login request.
pub fn apply_login(request: RequestBuilder, username: &str, password: &str) -> RequestBuilder {
    if password.is_empty() {
        request.basic_auth(username, None::<&str>)
    } else {
        request.basic_auth(username, Some(password))
    }
}

/// Attach the session id to an authenticated request.
pub fn apply_session(request: RequestBuilder, session_id: &str) -> RequestBuilder {
    request.header(SESSION_HEADER, session_id)
}
