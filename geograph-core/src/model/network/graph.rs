use indexmap::IndexMap;

use crate::util::hashing;

use super::{Edge, NetworkError, Vertex};

/// a container of vertices and edges, each keyed by `hash_or_id`.
///
/// the graph does not enforce structural consistency on insert: an undirected
/// connection is modeled by the caller adding one edge per direction (the
/// directions share a key, so the edge store keeps a single record for the
/// pair while each endpoint's adjacency carries its own direction). a routing
/// call borrows the graph for its whole duration, which keeps adjacency
/// fixed while a search runs.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    id: i64,
    vertices: IndexMap<i64, Vertex>,
    edges: IndexMap<i64, Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            id: -1,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// identity of the graph: the id when positive, otherwise a fold over the
    /// multiset of contained vertex and edge keys (insertion order does not
    /// matter).
    pub fn key(&self) -> i64 {
        hashing::hash_or_id(self.id, || {
            self.vertices
                .keys()
                .chain(self.edges.keys())
                .fold(31, |hash, key| hash ^ key)
        })
    }

    /// insert a vertex, replacing any existing vertex with the same key.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.insert(vertex.key(), vertex);
    }

    /// insert an edge record, replacing any existing edge with the same key.
    /// adjacency is carried by the endpoints, not by this store.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.insert(edge.key(), edge);
    }

    pub fn get_vertex(&self, key: i64) -> Result<&Vertex, NetworkError> {
        self.vertices
            .get(&key)
            .ok_or(NetworkError::VertexNotFound(key))
    }

    pub fn get_vertex_mut(&mut self, key: i64) -> Result<&mut Vertex, NetworkError> {
        self.vertices
            .get_mut(&key)
            .ok_or(NetworkError::VertexNotFound(key))
    }

    pub fn get_edge(&self, key: i64) -> Result<&Edge, NetworkError> {
        self.edges.get(&key).ok_or(NetworkError::EdgeNotFound(key))
    }

    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.vertices.contains_key(&vertex.key())
    }

    pub fn contains_vertex_key(&self, key: i64) -> bool {
        self.vertices.contains_key(&key)
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains_key(&edge.key())
    }

    /// remove a vertex record. edges referencing the vertex are left in
    /// place, consistent with the no-enforcement insert contract.
    pub fn remove_vertex(&mut self, key: i64) -> Option<Vertex> {
        self.vertices.swap_remove(&key)
    }

    pub fn remove_edge(&mut self, key: i64) -> Option<Edge> {
        self.edges.swap_remove(&key)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::Anchor;
    use crate::util::geo::Position;

    #[test]
    fn test_add_and_lookup() {
        let mut graph = Graph::new();
        let a = Vertex::new(Position::new(0.0, 0.0));
        let b = Vertex::new(Position::new(1.0, 0.0));
        let edge = Edge::new(a.anchor(), b.anchor());
        let (a_key, edge_key) = (a.key(), edge.key());

        graph.add_vertex(a);
        graph.add_vertex(b);
        graph.add_edge(edge);

        assert_eq!(graph.n_vertices(), 2);
        assert_eq!(graph.n_edges(), 1);
        assert!(graph.get_vertex(a_key).is_ok());
        assert!(graph.get_edge(edge_key).is_ok());
        assert!(graph.get_vertex(999).is_err());
    }

    #[test]
    fn test_equal_key_vertices_collapse() {
        let mut graph = Graph::new();
        graph.add_vertex(Vertex::new(Position::new(2.0, 2.0)));
        graph.add_vertex(Vertex::new(Position::new(2.0, 2.0)));
        assert_eq!(graph.n_vertices(), 1);
    }

    #[test]
    fn test_key_ignores_insertion_order() {
        let a = Vertex::new(Position::new(0.0, 0.0));
        let b = Vertex::new(Position::new(1.0, 1.0));

        let mut forward = Graph::new();
        forward.add_vertex(a.clone());
        forward.add_vertex(b.clone());

        let mut backward = Graph::new();
        backward.add_vertex(b);
        backward.add_vertex(a);

        assert_eq!(forward.key(), backward.key());
    }

    #[test]
    fn test_remove() {
        let mut graph = Graph::new();
        let vertex = Vertex::new(Position::new(0.0, 0.0));
        let key = vertex.key();
        graph.add_vertex(vertex);
        let edge = Edge::new(
            Anchor::new(Position::new(0.0, 0.0)),
            Anchor::new(Position::new(1.0, 0.0)),
        );
        let edge_key = edge.key();
        graph.add_edge(edge);

        assert!(graph.remove_vertex(key).is_some());
        assert!(graph.remove_edge(edge_key).is_some());
        assert!(graph.is_empty());
    }
}
