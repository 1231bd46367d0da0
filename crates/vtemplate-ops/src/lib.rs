//! Operations behind the vtemplate CLI commands, plus the step pipeline
//! they run on.

pub mod ops_check;
pub mod ops_import;
pub mod ops_publish;
pub mod pipeline;
