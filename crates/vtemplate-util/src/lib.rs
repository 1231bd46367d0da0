//! Shared utilities for vtemplate.
//!
//! This crate provides the cross-cutting pieces every other vtemplate crate
//! uses: the unified error type and the user-facing output sink.

pub mod errors;
pub mod progress;
