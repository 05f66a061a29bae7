//! The general free diagram: a diagram of arbitrary shape, stored as a
//! directed multigraph with an object label per vertex and a morphism
//! label per edge.

use crate::category::Morphism;
use crate::diagram::{
    Cospan, DiscreteDiagram, Multicospan, Multispan, ParallelMorphisms, ParallelPair, Span,
    SquareDiagram,
};
use crate::graph::{EdgeId, Graph, NodeKey};
use crate::util::log;
use error_stack::bail;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// An explicit free-diagram construction supplied an edge whose endpoint
/// labels disagree with the connecting morphism, or referenced a vertex
/// that does not exist.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDiagram {
    #[error("edge {index} references vertex {vertex} but the diagram has {len} vertices")]
    VertexOutOfBounds {
        index: usize,
        vertex: usize,
        len: usize,
    },
    #[error("no vertex {vertex:?} in the diagram")]
    UnknownVertex { vertex: NodeKey },
    #[error("the morphism of edge {index} has a domain different from the object at its source")]
    SourceMismatch { index: usize },
    #[error("the morphism of edge {index} has a codomain different from the object at its target")]
    TargetMismatch { index: usize },
}

pub type DiagramResult<T> = error_stack::Result<T, InvalidDiagram>;

/// A diagram of arbitrary shape over objects `Ob` and morphisms `Hom`.
///
/// Vertices and edges carry dense, 0-based keys assigned in insertion
/// order. The labeling invariant holds for every edge `e` with morphism
/// `f`: `ob(src(e)) == domain(f)` and `ob(tgt(e)) == codomain(f)`; all
/// construction paths enforce it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreeDiagram<Ob, Hom> {
    graph: Graph<Ob, Hom>,
}

impl<Ob, Hom> FreeDiagram<Ob, Hom> {
    pub fn new() -> Self {
        FreeDiagram {
            graph: Graph::new(),
        }
    }

    pub fn add_vertex(&mut self, ob: Ob) -> NodeKey {
        self.graph.add_node(ob)
    }

    /// Bulk insert, preserving the iteration order of the input.
    pub fn add_vertices(&mut self, obs: impl IntoIterator<Item = Ob>) -> Vec<NodeKey> {
        obs.into_iter().map(|ob| self.graph.add_node(ob)).collect()
    }

    pub fn ob(&self, vertex: NodeKey) -> Option<&Ob> {
        self.graph.get_node_attr(vertex)
    }

    pub fn hom(&self, edge: EdgeId) -> Option<&Hom> {
        self.graph.get_edge_attr(edge)
    }

    pub fn src(&self, edge: EdgeId) -> Option<NodeKey> {
        self.graph.endpoints(edge).map(|(src, _)| src)
    }

    pub fn tgt(&self, edge: EdgeId) -> Option<NodeKey> {
        self.graph.endpoints(edge).map(|(_, tgt)| tgt)
    }

    /// Vertices with their object labels, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (NodeKey, &Ob)> {
        self.graph.nodes()
    }

    /// Edges with their morphism labels, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Hom)> {
        self.graph.edges()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    // Shape converters insert edges whose endpoint labels are correct by
    // the fixed shape's own invariant, so they skip the label check.
    fn push_edge(&mut self, src: NodeKey, tgt: NodeKey, hom: Hom) -> EdgeId {
        self.graph.add_edge(src, tgt, hom)
    }

    pub fn dot(&self) -> String
    where
        Ob: Debug,
        Hom: Debug,
    {
        self.graph.dot()
    }
}

impl<Ob, Hom> Default for FreeDiagram<Ob, Hom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ob: PartialEq + Debug, Hom: Morphism<Object = Ob>> FreeDiagram<Ob, Hom> {
    /// Inserts an edge after checking the labeling invariant against the
    /// two endpoint vertices.
    pub fn add_edge(&mut self, src: NodeKey, tgt: NodeKey, hom: Hom) -> DiagramResult<EdgeId> {
        let index = self.edge_count();
        let Some(src_ob) = self.ob(src) else {
            bail!(InvalidDiagram::UnknownVertex { vertex: src });
        };
        let Some(tgt_ob) = self.ob(tgt) else {
            bail!(InvalidDiagram::UnknownVertex { vertex: tgt });
        };
        if hom.domain() != *src_ob {
            log::debug!(
                "rejecting edge {index}: domain {:?} does not label source vertex {src:?}",
                hom.domain()
            );
            bail!(InvalidDiagram::SourceMismatch { index });
        }
        if hom.codomain() != *tgt_ob {
            log::debug!(
                "rejecting edge {index}: codomain {:?} does not label target vertex {tgt:?}",
                hom.codomain()
            );
            bail!(InvalidDiagram::TargetMismatch { index });
        }
        Ok(self.push_edge(src, tgt, hom))
    }

    /// Bulk edge insert, preserving order. Fails fast on the first bad
    /// triple; earlier edges of the same call remain inserted.
    pub fn add_edges(
        &mut self,
        triples: impl IntoIterator<Item = (NodeKey, NodeKey, Hom)>,
    ) -> DiagramResult<Vec<EdgeId>> {
        triples
            .into_iter()
            .map(|(src, tgt, hom)| self.add_edge(src, tgt, hom))
            .collect()
    }

    /// Builds a diagram from an explicit object list and a list of
    /// `(source, target, morphism)` triples over 0-based object indices.
    ///
    /// Fails without constructing anything if any triple references a
    /// missing vertex or carries a morphism whose endpoints disagree
    /// with the labeled vertices.
    pub fn from_parts(objects: Vec<Ob>, edges: Vec<(usize, usize, Hom)>) -> DiagramResult<Self> {
        let len = objects.len();
        for (index, (src, tgt, hom)) in edges.iter().enumerate() {
            for &vertex in [src, tgt] {
                if vertex >= len {
                    bail!(InvalidDiagram::VertexOutOfBounds { index, vertex, len });
                }
            }
            if hom.domain() != objects[*src] {
                log::debug!(
                    "rejecting edge {index}: domain {:?} does not label source vertex {src}",
                    hom.domain()
                );
                bail!(InvalidDiagram::SourceMismatch { index });
            }
            if hom.codomain() != objects[*tgt] {
                log::debug!(
                    "rejecting edge {index}: codomain {:?} does not label target vertex {tgt}",
                    hom.codomain()
                );
                bail!(InvalidDiagram::TargetMismatch { index });
            }
        }

        let mut diagram = Self::new();
        let keys = diagram.add_vertices(objects);
        for (src, tgt, hom) in edges {
            diagram.push_edge(keys[src], keys[tgt], hom);
        }
        Ok(diagram)
    }
}

/// One vertex per object, in order; no edges.
impl<Ob, Hom> From<DiscreteDiagram<Ob>> for FreeDiagram<Ob, Hom> {
    fn from(discrete: DiscreteDiagram<Ob>) -> Self {
        let mut diagram = FreeDiagram::new();
        diagram.add_vertices(discrete);
        diagram
    }
}

/// Vertex 0 is the apex; vertex `i + 1` is the codomain of leg `i`; edge
/// `i` connects the apex to vertex `i + 1` and is labeled with leg `i`.
impl<Hom: Morphism> From<Multispan<Hom>> for FreeDiagram<Hom::Object, Hom> {
    fn from(span: Multispan<Hom>) -> Self {
        let mut diagram = FreeDiagram::new();
        let (apex, legs) = span.into_parts();
        let apex_key = diagram.add_vertex(apex);
        for leg in legs {
            let foot = diagram.add_vertex(leg.codomain());
            diagram.push_edge(apex_key, foot, leg);
        }
        diagram
    }
}

impl<Hom: Morphism> From<Span<Hom>> for FreeDiagram<Hom::Object, Hom> {
    fn from(span: Span<Hom>) -> Self {
        Multispan::from(span).into()
    }
}

/// Vertices `0..n` are the domains of the `n` legs, in order; vertex `n`
/// is the base; edge `i` connects vertex `i` to the base.
impl<Hom: Morphism> From<Multicospan<Hom>> for FreeDiagram<Hom::Object, Hom> {
    fn from(cospan: Multicospan<Hom>) -> Self {
        let mut diagram = FreeDiagram::new();
        let (base, legs) = cospan.into_parts();
        let feet: Vec<NodeKey> = legs
            .iter()
            .map(|leg| diagram.add_vertex(leg.domain()))
            .collect();
        let base_key = diagram.add_vertex(base);
        for (foot, leg) in feet.into_iter().zip(legs) {
            diagram.push_edge(foot, base_key, leg);
        }
        diagram
    }
}

impl<Hom: Morphism> From<Cospan<Hom>> for FreeDiagram<Hom::Object, Hom> {
    fn from(cospan: Cospan<Hom>) -> Self {
        Multicospan::from(cospan).into()
    }
}

/// Vertex 0 is the shared domain and vertex 1 the shared codomain; one
/// parallel edge 0 → 1 per morphism, in order.
impl<Hom: Morphism> From<ParallelMorphisms<Hom>> for FreeDiagram<Hom::Object, Hom> {
    fn from(family: ParallelMorphisms<Hom>) -> Self {
        let mut diagram = FreeDiagram::new();
        let (dom, cod, homs) = family.into_parts();
        let dom_key = diagram.add_vertex(dom);
        let cod_key = diagram.add_vertex(cod);
        for hom in homs {
            diagram.push_edge(dom_key, cod_key, hom);
        }
        diagram
    }
}

impl<Hom: Morphism> From<ParallelPair<Hom>> for FreeDiagram<Hom::Object, Hom> {
    fn from(pair: ParallelPair<Hom>) -> Self {
        ParallelMorphisms::from(pair).into()
    }
}

/// Vertices are the corners `[dom(left), codom(left), dom(right),
/// codom(right)]`; edges are `[(0,2,top), (1,3,bottom), (0,1,left),
/// (2,3,right)]`, in that order.
impl<Hom: Morphism> From<SquareDiagram<Hom>> for FreeDiagram<Hom::Object, Hom> {
    fn from(square: SquareDiagram<Hom>) -> Self {
        let mut diagram = FreeDiagram::new();
        let corners = square.corners();
        let (top, bottom, left, right) = square.into_parts();
        let keys = diagram.add_vertices(corners);
        diagram.push_edge(keys[0], keys[2], top);
        diagram.push_edge(keys[1], keys[3], bottom);
        diagram.push_edge(keys[0], keys[1], left);
        diagram.push_edge(keys[2], keys[3], right);
        diagram
    }
}
