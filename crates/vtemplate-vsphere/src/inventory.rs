//! Inventory lookup: resolve object names to managed object ids.

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;
use vtemplate_util::errors::VtemplateError;

use crate::client::VsphereClient;

/// Kinds of inventory object the template import needs to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryKind {
    Vm,
    Cluster,
    Folder,
    Host,
    ResourcePool,
}

impl InventoryKind {
    /// REST collection path for this kind.
    pub fn path(self) -> &'static str {
        match self {
            Self::Vm => "/rest/vcenter/vm",
            Self::Cluster => "/rest/vcenter/cluster",
            Self::Folder => "/rest/vcenter/folder",
            Self::Host => "/rest/vcenter/host",
            Self::ResourcePool => "/rest/vcenter/resource-pool",
        }
    }

    /// Name of the id field in a summary returned by [`Self::path`].
    pub fn id_field(self) -> &'static str {
        match self {
            Self::Vm => "vm",
            Self::Cluster => "cluster",
            Self::Folder => "folder",
            Self::Host => "host",
            Self::ResourcePool => "resource_pool",
        }
    }

    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Vm => "Virtual machine",
            Self::Cluster => "Cluster",
            Self::Folder => "Folder",
            Self::Host => "Host",
            Self::ResourcePool => "Resource pool",
        }
    }
}

/// Resolve `name` to the id of the first matching object of `kind`.
///
/// Folders may be given as a path (`dc/vm/templates`); only the last segment
/// is matched, against VM folders.
pub async fn find_id(
    client: &VsphereClient,
    kind: InventoryKind,
    name: &str,
    cancel: &CancellationToken,
) -> Result<String, VtemplateError> {
    let mut query = Vec::new();
    match kind {
        InventoryKind::Folder => {
            query.push(("filter.names", folder_leaf(name)));
            query.push(("filter.type", "VIRTUAL_MACHINE"));
        }
        _ => query.push(("filter.names", name)),
    }
    lookup(client, kind, name, &query, cancel).await
}

/// Resolve a resource pool, scoped to a cluster or host id when one is known.
pub async fn find_resource_pool_id(
    client: &VsphereClient,
    name: &str,
    cluster_id: Option<&str>,
    host_id: Option<&str>,
    cancel: &CancellationToken,
) -> Result<String, VtemplateError> {
    let mut query = vec![("filter.names", name)];
    if let Some(cluster) = cluster_id {
        query.push(("filter.clusters", cluster));
    } else if let Some(host) = host_id {
        query.push(("filter.hosts", host));
    }
    lookup(client, InventoryKind::ResourcePool, name, &query, cancel).await
}

async fn lookup(
    client: &VsphereClient,
    kind: InventoryKind,
    name: &str,
    query: &[(&str, &str)],
    cancel: &CancellationToken,
) -> Result<String, VtemplateError> {
    let summaries: Vec<BTreeMap<String, serde_json::Value>> =
        client.get_value(kind.path(), query, cancel).await?;

    let first = summaries
        .into_iter()
        .next()
        .ok_or_else(|| VtemplateError::NotFound {
            kind: kind.label().to_string(),
            name: name.to_string(),
        })?;

    let id = first
        .get(kind.id_field())
        .and_then(|v| v.as_str())
        .ok_or_else(|| VtemplateError::Generic {
            message: format!(
                "{} summary for '{name}' has no '{}' field",
                kind.label(),
                kind.id_field()
            ),
        })?;

    tracing::debug!("{} '{name}' is {id}", kind.label());
    Ok(id.to_string())
}

fn folder_leaf(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}
