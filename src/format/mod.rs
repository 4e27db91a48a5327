//! Decoders for the two asset formats a model bundle is traced through:
//! - [`mdl`]: the binary model container
//! - [`vmt`]: the text material definition
//!
//! [`reader`] holds the low-level field reader used by the container decoder.

pub mod mdl;
pub mod reader;
pub mod vmt;

pub use mdl::ModelAsset;
pub use vmt::MaterialAsset;
