//! Resource hint pipeline
//!
//! One synchronous pass per generated document: select candidate chunks,
//! keep the ones reachable from the document's root chunks, render `<link>`
//! fragments for their files, and splice them into the HTML text. Every
//! failure mode degrades to emitting fewer (or no) hints; nothing here can
//! fail a build.

mod reach;
mod render;
mod select;

use std::collections::HashSet;

use tracing::debug;

pub use reach::{filter_reachable, is_reachable};
pub use render::{apply_file_filters, build_fragments, collect_files, splice, SpliceOutcome};
pub use select::{select, Selection};

use crate::config::HintOptions;
use crate::graph::ChunkGraph;

/// Per-build inputs handed over by the build pipeline and the HTML
/// generation step.
#[derive(Debug)]
pub struct BuildArtifacts<'a> {
    /// The build's chunk graph
    pub graph: &'a ChunkGraph,

    /// All build output asset names, for `allAssets` mode
    pub assets: &'a [String],

    /// Rendered hashes of the chunks the document directly references
    pub roots: &'a HashSet<String>,

    /// URL prefix applied to every emitted href
    pub public_path: &'a str,
}

/// Run the full pipeline over one document and return the mutated HTML.
///
/// When no file survives selection and filtering, the input comes back
/// byte-identical.
pub fn inject(html: &str, artifacts: &BuildArtifacts<'_>, options: &HintOptions) -> String {
    let files = match select(artifacts.graph, &options.include) {
        Selection::Nothing => Vec::new(),
        // The pseudo-chunk of all assets is reachable by definition.
        Selection::AllAssets => artifacts.assets.to_vec(),
        Selection::Chunks(candidates) => {
            let reachable = filter_reachable(artifacts.graph, candidates, artifacts.roots);
            debug!(reachable = reachable.len(), "chunks connected to document");
            collect_files(artifacts.graph, &reachable)
        }
    };

    let files = apply_file_filters(files, options);
    if files.is_empty() {
        debug!("no files to hint; document unchanged");
        return html.to_string();
    }

    let fragments = build_fragments(&files, options, artifacts.public_path);
    let (out, outcome) = splice(html, &fragments);
    debug!(hints = fragments.len(), ?outcome, "resource hints spliced");
    out
}
