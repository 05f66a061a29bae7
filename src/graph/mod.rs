use derive_more::From;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod dot;

pub use dot::DotCollector;

/// Key of a node, dense and 0-based, assigned in insertion order.
#[derive(Hash, Eq, PartialEq, derive_more::Debug, Clone, Copy, PartialOrd, Ord, From)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[debug("n{_0}")]
pub struct NodeKey(pub u32);

/// Key of an edge, dense and 0-based, assigned in insertion order.
///
/// Edges have their own keys (rather than being keyed by endpoint pair)
/// because the graph is a multigraph: two nodes may be connected by any
/// number of parallel edges.
#[derive(Hash, Eq, PartialEq, derive_more::Debug, Clone, Copy, PartialOrd, Ord, From)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[debug("e{_0}")]
pub struct EdgeId(pub u32);

impl NodeKey {
    fn idx(self) -> NodeIndex {
        NodeIndex::new(self.0 as usize)
    }
}

impl EdgeId {
    fn idx(self) -> EdgeIndex {
        EdgeIndex::new(self.0 as usize)
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeAttribute<NodeAttr> {
    pub node_attr: NodeAttr,
    // Additional attributes can be added here
}

impl<NodeAttr> NodeAttribute<NodeAttr> {
    pub fn new(node_attr: NodeAttr) -> Self {
        NodeAttribute { node_attr }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeAttribute<EdgeAttr> {
    pub edge_attr: EdgeAttr,
    // Additional attributes can be added here
}

impl<EdgeAttr> EdgeAttribute<EdgeAttr> {
    pub fn new(edge_attr: EdgeAttr) -> Self {
        EdgeAttribute { edge_attr }
    }
}

/// A directed multigraph with arbitrary associated node and edge data.
///
/// Keys are never reused; enumeration order is insertion order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph<NodeAttr, EdgeAttr> {
    graph: StableDiGraph<NodeAttribute<NodeAttr>, EdgeAttribute<EdgeAttr>>,
}

impl<NodeAttr, EdgeAttr> Graph<NodeAttr, EdgeAttr> {
    pub fn new() -> Self {
        Graph {
            graph: StableDiGraph::new(),
        }
    }

    pub fn add_node(&mut self, node_attr: NodeAttr) -> NodeKey {
        let idx = self.graph.add_node(NodeAttribute::new(node_attr));
        NodeKey(idx.index() as u32)
    }

    /// Inserts a new edge between the two nodes and returns its key.
    ///
    /// A fresh edge is created even if the endpoint pair is already
    /// connected. Panics if either endpoint does not exist.
    pub fn add_edge(&mut self, source: NodeKey, target: NodeKey, edge_attr: EdgeAttr) -> EdgeId {
        let idx = self
            .graph
            .add_edge(source.idx(), target.idx(), EdgeAttribute::new(edge_attr));
        EdgeId(idx.index() as u32)
    }

    pub fn contains_node(&self, node_key: NodeKey) -> bool {
        self.graph.contains_node(node_key.idx())
    }

    pub fn get_node_attr(&self, node_key: NodeKey) -> Option<&NodeAttr> {
        self.graph
            .node_weight(node_key.idx())
            .map(|attr| &attr.node_attr)
    }

    pub fn get_mut_node_attr(&mut self, node_key: NodeKey) -> Option<&mut NodeAttr> {
        self.graph
            .node_weight_mut(node_key.idx())
            .map(|attr| &mut attr.node_attr)
    }

    pub fn get_edge_attr(&self, edge_id: EdgeId) -> Option<&EdgeAttr> {
        self.graph
            .edge_weight(edge_id.idx())
            .map(|attr| &attr.edge_attr)
    }

    pub fn get_mut_edge_attr(&mut self, edge_id: EdgeId) -> Option<&mut EdgeAttr> {
        self.graph
            .edge_weight_mut(edge_id.idx())
            .map(|attr| &mut attr.edge_attr)
    }

    pub fn endpoints(&self, edge_id: EdgeId) -> Option<(NodeKey, NodeKey)> {
        self.graph
            .edge_endpoints(edge_id.idx())
            .map(|(src, tgt)| (NodeKey(src.index() as u32), NodeKey(tgt.index() as u32)))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &NodeAttr)> {
        self.graph.node_indices().map(|idx| {
            (
                NodeKey(idx.index() as u32),
                &self.graph[idx].node_attr,
            )
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeAttr)> {
        self.graph.edge_indices().map(|idx| {
            (
                EdgeId(idx.index() as u32),
                &self.graph[idx].edge_attr,
            )
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn inner(&self) -> &StableDiGraph<NodeAttribute<NodeAttr>, EdgeAttribute<EdgeAttr>> {
        &self.graph
    }
}

impl<NodeAttr, EdgeAttr> Default for Graph<NodeAttr, EdgeAttr> {
    fn default() -> Self {
        Self::new()
    }
}
