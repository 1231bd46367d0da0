use tokio_util::sync::CancellationToken;
use vtemplate_core::config::ConnectionConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::auth;
use crate::client::VsphereClient;

/// Mount a session endpoint on `server` and log in against it.
pub(crate) async fn connected(server: &MockServer) -> VsphereClient {
    Mock::given(method("POST"))
        .and(path(auth::SESSION_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "value": "sess-1" })),
        )
        .mount(server)
        .await;

    let conn = ConnectionConfig {
        vcenter_server: server.uri(),
        username: "admin".to_string(),
        ..Default::default()
    };
    VsphereClient::connect(&conn, "secret", &CancellationToken::new())
        .await
        .unwrap()
}
