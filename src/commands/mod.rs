//! Command implementations for the mdlpack CLI

pub mod completions;
mod helpers;
pub mod list;
pub mod pack;
pub mod version;
