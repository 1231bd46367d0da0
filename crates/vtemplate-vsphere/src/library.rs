//! Content library lookup.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use vtemplate_util::errors::VtemplateError;

use crate::client::VsphereClient;

const FIND_LIBRARY_PATH: &str = "/rest/com/vmware/content/library?~action=find";

#[derive(Debug, Serialize)]
struct FindRequest<'a> {
    spec: FindSpec<'a>,
}

#[derive(Debug, Serialize)]
struct FindSpec<'a> {
    name: &'a str,
}

/// Resolve a content library name to its id.
///
/// If several libraries share the name, the first one vCenter returns wins.
pub async fn find_library_id(
    client: &VsphereClient,
    name: &str,
    cancel: &CancellationToken,
) -> Result<String, VtemplateError> {
    let request = FindRequest {
        spec: FindSpec { name },
    };
    let ids: Vec<String> = client
        .post_value(FIND_LIBRARY_PATH, &request, cancel)
        .await?;

    ids.into_iter().next().ok_or_else(|| VtemplateError::NotFound {
        kind: "Content library".to_string(),
        name: name.to_string(),
    })
}
