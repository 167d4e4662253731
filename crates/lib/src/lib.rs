//! assetlink-lib: Core types and logic for assetlink
//!
//! This crate links bundler output into static extension pages:
//! - `manifest`: the bundler's `asset-manifest.json`
//! - `substitute`: placeholder rules and their application
//! - `rewrite`: the in-place template rewrite that ties them together

pub mod consts;
pub mod manifest;
pub mod paths;
pub mod rewrite;
pub mod substitute;
