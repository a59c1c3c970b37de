//! Candidate chunk selection
//!
//! Turns the `include` policy into a concrete candidate set. Selection never
//! fails: unsupported classification degrades to the full chunk set, and an
//! unrecognized include keyword selects nothing.

use tracing::{debug, warn};

use crate::config::Include;
use crate::graph::{ChunkGraph, ChunkId};

/// Outcome of candidate selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Candidate chunks, in graph order
    Chunks(Vec<ChunkId>),
    /// Hint every build output asset, bypassing the chunk graph
    AllAssets,
    /// Nothing selected (unrecognized include keyword)
    Nothing,
}

/// Select candidate chunks according to the include policy
pub fn select(graph: &ChunkGraph, include: &Include) -> Selection {
    match include {
        Include::AsyncChunks => Selection::Chunks(by_initial_flag(graph, false)),
        Include::Initial => Selection::Chunks(by_initial_flag(graph, true)),
        Include::All => Selection::Chunks(graph.chunk_ids().collect()),
        Include::AllAssets => Selection::AllAssets,
        Include::Named(names) => {
            let ids = graph
                .iter()
                .filter(|(_, chunk)| {
                    chunk
                        .name
                        .as_ref()
                        .is_some_and(|name| !name.is_empty() && names.iter().any(|n| n == name))
                })
                .map(|(id, _)| id)
                .collect::<Vec<_>>();
            debug!(selected = ids.len(), "selected chunks by name");
            Selection::Chunks(ids)
        }
        Include::Unrecognized(word) => {
            warn!(include = %word, "unrecognized include value; no resource hints will be emitted");
            Selection::Nothing
        }
    }
}

/// Filter chunks by their initial-load flag. If the build pipeline did not
/// expose the flag on every chunk, the classification query is unsupported
/// and the full chunk set is kept instead.
fn by_initial_flag(graph: &ChunkGraph, want_initial: bool) -> Vec<ChunkId> {
    let flag_unavailable = graph.iter().any(|(_, chunk)| chunk.initial.is_none());
    if flag_unavailable {
        debug!("initial-load classification unavailable; keeping all chunks");
        return graph.chunk_ids().collect();
    }

    graph
        .iter()
        .filter(|(_, chunk)| chunk.initial == Some(want_initial))
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Chunk;

    fn graph_with_flags() -> (ChunkGraph, ChunkId, ChunkId, ChunkId) {
        let mut graph = ChunkGraph::new();
        let main = graph.add_chunk(
            Chunk::new("h-main", vec!["main.js".to_string()])
                .named("main")
                .initial(true),
        );
        let vendor = graph.add_chunk(
            Chunk::new("h-vendor", vec!["vendor.js".to_string()])
                .named("vendor")
                .initial(false),
        );
        let lazy = graph.add_chunk(Chunk::new("h-lazy", vec!["lazy.js".to_string()]).initial(false));
        (graph, main, vendor, lazy)
    }

    #[test]
    fn test_async_chunks_excludes_initial() {
        let (graph, _main, vendor, lazy) = graph_with_flags();

        let selection = select(&graph, &Include::AsyncChunks);
        assert_eq!(selection, Selection::Chunks(vec![vendor, lazy]));
    }

    #[test]
    fn test_initial_is_the_complement() {
        let (graph, main, _vendor, _lazy) = graph_with_flags();

        let selection = select(&graph, &Include::Initial);
        assert_eq!(selection, Selection::Chunks(vec![main]));
    }

    #[test]
    fn test_all_keeps_everything() {
        let (graph, main, vendor, lazy) = graph_with_flags();

        let selection = select(&graph, &Include::All);
        assert_eq!(selection, Selection::Chunks(vec![main, vendor, lazy]));
    }

    #[test]
    fn test_missing_flag_falls_back_to_all_chunks() {
        let mut graph = ChunkGraph::new();
        let a = graph.add_chunk(Chunk::new("a", vec![]).initial(true));
        // No initial flag on this one: the classification query is unsupported.
        let b = graph.add_chunk(Chunk::new("b", vec![]));

        assert_eq!(
            select(&graph, &Include::AsyncChunks),
            Selection::Chunks(vec![a, b])
        );
        assert_eq!(
            select(&graph, &Include::Initial),
            Selection::Chunks(vec![a, b])
        );
    }

    #[test]
    fn test_named_selection_skips_unnamed_chunks() {
        let (graph, _main, vendor, _lazy) = graph_with_flags();

        // "lazy" exists but is unnamed, so a list naming it selects nothing extra.
        let selection = select(
            &graph,
            &Include::Named(vec!["vendor".to_string(), "lazy".to_string()]),
        );
        assert_eq!(selection, Selection::Chunks(vec![vendor]));
    }

    #[test]
    fn test_all_assets_bypasses_the_graph() {
        let (graph, ..) = graph_with_flags();
        assert_eq!(select(&graph, &Include::AllAssets), Selection::AllAssets);
    }

    #[test]
    fn test_unrecognized_keyword_selects_nothing() {
        let (graph, ..) = graph_with_flags();

        let selection = select(&graph, &Include::Unrecognized("sometimes".to_string()));
        assert_eq!(selection, Selection::Nothing);
    }
}
