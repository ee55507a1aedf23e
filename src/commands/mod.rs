//! Command implementations for the plugreg CLI

pub mod completions;
pub mod update;
pub mod validate;
pub mod version;
