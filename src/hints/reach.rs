//! Chunk reachability
//!
//! Decides whether a candidate chunk is connected to the HTML document by
//! walking its parent links toward the document's root chunks.

use std::collections::HashSet;

use crate::graph::{ChunkGraph, ChunkId};

/// Depth-first search from `id` along parent edges, looking for a chunk whose
/// rendered hash matches a root.
///
/// The visited set is keyed by rendered hash and checked before anything
/// else: a chunk already seen on this traversal is reported unreachable,
/// which both breaks parent-link cycles and skips re-expansion. On
/// diamond-shaped graphs this can under-report reachability (a node first
/// reached on a rootless branch is never reconsidered); that approximation
/// is intentional and kept.
pub fn is_reachable(
    graph: &ChunkGraph,
    id: ChunkId,
    roots: &HashSet<String>,
    visited: &mut HashSet<String>,
) -> bool {
    let Some(chunk) = graph.chunk(id) else {
        return false;
    };
    if !visited.insert(chunk.rendered_hash.clone()) {
        return false;
    }
    if roots.contains(&chunk.rendered_hash) {
        return true;
    }
    graph
        .parents(id)
        .iter()
        .any(|&parent| is_reachable(graph, parent, roots, visited))
}

/// Keep only the candidates connected to the document.
///
/// Each candidate gets its own fresh visited set, so one candidate's
/// traversal never taints a sibling's.
pub fn filter_reachable(
    graph: &ChunkGraph,
    candidates: Vec<ChunkId>,
    roots: &HashSet<String>,
) -> Vec<ChunkId> {
    candidates
        .into_iter()
        .filter(|&id| {
            let mut visited = HashSet::new();
            is_reachable(graph, id, roots, &mut visited)
        })
        .collect()
}
