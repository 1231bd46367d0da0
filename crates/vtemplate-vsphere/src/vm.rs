//! Live virtual machine handle.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use vtemplate_util::errors::VtemplateError;

use crate::client::VsphereClient;
use crate::inventory::{self, InventoryKind};
use crate::library;
use crate::template::{
    CreateTemplateRequest, CreateTemplateSpec, Placement, Template, TEMPLATE_ITEMS_PATH,
};

/// A provisioned VM that can be published to a content library.
#[async_trait]
pub trait VmHandle: Send + Sync {
    /// Inventory name of the VM.
    fn name(&self) -> &str;

    /// Publish this VM as `template`.
    ///
    /// Either the template is fully created or an error is returned; the call
    /// is aborted if `cancel` fires first.
    async fn import_to_content_library(
        &self,
        template: &Template,
        cancel: &CancellationToken,
    ) -> Result<(), VtemplateError>;
}

/// A VM in a live vCenter inventory.
#[derive(Debug, Clone)]
pub struct VirtualMachine {
    client: VsphereClient,
    id: String,
    name: String,
}

impl VirtualMachine {
    /// Look up a VM by its inventory name.
    pub async fn find(
        client: &VsphereClient,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<Self, VtemplateError> {
        let id = inventory::find_id(client, InventoryKind::Vm, name, cancel).await?;
        Ok(Self {
            client: client.clone(),
            id,
            name: name.to_string(),
        })
    }

    /// Managed object id, e.g. `vm-42`.
    pub fn id(&self) -> &str {
        &self.id
    }

    async fn resolve_placement(
        &self,
        placement: &Placement,
        cancel: &CancellationToken,
    ) -> Result<Placement, VtemplateError> {
        let client = &self.client;
        let mut resolved = Placement::default();

        if !placement.cluster.is_empty() {
            resolved.cluster =
                inventory::find_id(client, InventoryKind::Cluster, &placement.cluster, cancel)
                    .await?;
        }
        if !placement.folder.is_empty() {
            resolved.folder =
                inventory::find_id(client, InventoryKind::Folder, &placement.folder, cancel)
                    .await?;
        }
        if !placement.host.is_empty() {
            resolved.host =
                inventory::find_id(client, InventoryKind::Host, &placement.host, cancel).await?;
        }
        if !placement.resource_pool.is_empty() {
            resolved.resource_pool = inventory::find_resource_pool_id(
                client,
                &placement.resource_pool,
                non_empty(&resolved.cluster),
                non_empty(&resolved.host),
                cancel,
            )
            .await?;
        }

        Ok(resolved)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

#[async_trait]
impl VmHandle for VirtualMachine {
    fn name(&self) -> &str {
        &self.name
    }

    async fn import_to_content_library(
        &self,
        template: &Template,
        cancel: &CancellationToken,
    ) -> Result<(), VtemplateError> {
        let library_id = library::find_library_id(&self.client, &template.library, cancel).await?;
        let placement = self.resolve_placement(&template.placement, cancel).await?;

        let request = CreateTemplateRequest {
            spec: CreateTemplateSpec {
                source_vm: &self.id,
                name: &template.name,
                description: &template.description,
                library: &library_id,
                placement: &placement,
            },
        };
        let item_id: String = self
            .client
            .post_value(TEMPLATE_ITEMS_PATH, &request, cancel)
            .await?;

        tracing::info!(
            "Created template '{}' (item {item_id}) in library '{}' from {}",
            template.name,
            template.library,
            self.id
        );
        Ok(())
    }
}
