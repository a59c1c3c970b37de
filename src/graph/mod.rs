//! Chunk graph data structures
//!
//! A read-only view of the build's output chunks and their parent links,
//! as handed over by the build pipeline once compilation is done.

/// Unique identifier for a chunk within one build's graph
pub type ChunkId = usize;

/// A chunk is a unit of build output: one or more emitted files plus a
/// position in the dependency graph.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Content-derived identity hash
    pub rendered_hash: String,

    /// User-assigned chunk name, if any
    pub name: Option<String>,

    /// Whether the chunk is part of the initial page load. `None` means the
    /// build pipeline did not expose the classification for this chunk.
    pub initial: Option<bool>,

    /// Output file paths emitted for this chunk, in emission order
    pub files: Vec<String>,
}

impl Chunk {
    /// Create a chunk with just a hash and its files
    pub fn new(rendered_hash: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            rendered_hash: rendered_hash.into(),
            name: None,
            initial: None,
            files,
        }
    }

    /// Set the user-assigned name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial-load classification
    pub fn initial(mut self, initial: bool) -> Self {
        self.initial = Some(initial);
        self
    }
}

/// The chunk dependency graph
///
/// Chunks are stored by index; parent edges point from a chunk to the chunks
/// that depend on it. The parent relation may contain cycles.
#[derive(Debug, Default)]
pub struct ChunkGraph {
    /// All chunks, indexed by their ID
    chunks: Vec<Chunk>,

    /// Parent edges: chunk ID -> IDs of chunks that include it
    parents: Vec<Vec<ChunkId>>,
}

impl ChunkGraph {
    /// Create a new empty chunk graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chunk to the graph, returning its ID
    pub fn add_chunk(&mut self, chunk: Chunk) -> ChunkId {
        let id = self.chunks.len();
        self.chunks.push(chunk);
        self.parents.push(Vec::new());
        id
    }

    /// Record that `parent` depends on / includes `child`
    pub fn add_parent(&mut self, child: ChunkId, parent: ChunkId) {
        if let Some(edges) = self.parents.get_mut(child) {
            edges.push(parent);
        }
    }

    /// Get a chunk by ID
    pub fn chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(id)
    }

    /// Parent IDs of a chunk
    pub fn parents(&self, id: ChunkId) -> &[ChunkId] {
        self.parents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All chunk IDs in insertion order
    pub fn chunk_ids(&self) -> impl Iterator<Item = ChunkId> {
        0..self.chunks.len()
    }

    /// Iterate chunks with their IDs
    pub fn iter(&self) -> impl Iterator<Item = (ChunkId, &Chunk)> {
        self.chunks.iter().enumerate()
    }

    /// Total number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_graph_basic() {
        let mut graph = ChunkGraph::new();

        let id = graph.add_chunk(
            Chunk::new("abc123", vec!["main.js".to_string()])
                .named("main")
                .initial(true),
        );

        assert_eq!(graph.len(), 1);
        let chunk = graph.chunk(id).unwrap();
        assert_eq!(chunk.rendered_hash, "abc123");
        assert_eq!(chunk.name.as_deref(), Some("main"));
        assert_eq!(chunk.initial, Some(true));
        assert!(graph.parents(id).is_empty());
    }

    #[test]
    fn test_parent_edges() {
        let mut graph = ChunkGraph::new();
        let child = graph.add_chunk(Chunk::new("c", vec![]));
        let parent = graph.add_chunk(Chunk::new("p", vec![]));

        graph.add_parent(child, parent);

        assert_eq!(graph.parents(child), &[parent]);
        assert!(graph.parents(parent).is_empty());
    }

    #[test]
    fn test_parent_cycles_are_representable() {
        let mut graph = ChunkGraph::new();
        let a = graph.add_chunk(Chunk::new("a", vec![]));
        let b = graph.add_chunk(Chunk::new("b", vec![]));

        graph.add_parent(a, b);
        graph.add_parent(b, a);

        assert_eq!(graph.parents(a), &[b]);
        assert_eq!(graph.parents(b), &[a]);
    }
}
