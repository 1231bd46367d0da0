//! vSphere Automation REST API: session handling, inventory and content
//! library lookup, and VM template import.

pub mod auth;
pub mod client;
pub mod inventory;
pub mod library;
pub mod template;
pub mod vm;

#[cfg(test)]
mod test_support;
