//! Core configuration types for vtemplate.
//!
//! This crate defines the build configuration document and the `prepare`
//! passes that validate it and fill in defaults before any remote work runs.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod config;
pub mod destination;
pub mod location;
