//! CLI command implementations

pub mod apply;
pub mod install;
pub mod list;
pub mod show;
pub mod validate;
