//! Bundler asset manifest.
//!
//! The bundler writes `asset-manifest.json` next to its output, mapping each
//! logical bundle name to the content-hashed path it was emitted under.

mod types;

pub use types::*;
