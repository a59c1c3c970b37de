//! Prehint library
//!
//! Injects `<link rel="preload">` / `<link rel="prefetch">` resource hints
//! into generated HTML, based on which build-output chunks are reachable
//! from the document.

pub mod config;
pub mod graph;
pub mod hints;
pub mod plugin;

pub use config::{HintConfig, HintOptions};
pub use graph::{Chunk, ChunkGraph, ChunkId};
pub use hints::BuildArtifacts;
pub use plugin::{HtmlPlugin, HtmlPluginManager, ResourceHintPlugin};
