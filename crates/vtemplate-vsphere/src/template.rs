//! VM template publish request.

use serde::Serialize;

/// REST path for creating a VM template library item.
pub const TEMPLATE_ITEMS_PATH: &str = "/rest/vcenter/vm-template/library-items";

/// A request to publish a VM as a template in a content library.
///
/// Library and placement are given by inventory *name*; the live VM handle
/// resolves them to managed object ids before calling vCenter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub description: String,
    pub library: String,
    pub placement: Placement,
}

/// Where the VMs deployed from the template land by default.
///
/// Empty fields are left out of the request so vSphere applies its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Placement {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cluster: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub folder: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_pool: String,
}

/// Wire body of `POST /rest/vcenter/vm-template/library-items`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateTemplateRequest<'a> {
    pub spec: CreateTemplateSpec<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateTemplateSpec<'a> {
    pub source_vm: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub library: &'a str,
    pub placement: &'a Placement,
}
