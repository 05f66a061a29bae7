//! Free diagrams for computational category theory.
//!
//! A free diagram is graph-shaped categorical data: objects sitting on
//! vertices and morphisms sitting on edges, with each edge's endpoints
//! labeled by the morphism's domain and codomain. This crate provides
//! the family of fixed-shape diagrams — [`DiscreteDiagram`],
//! [`Multispan`]/[`Span`], [`Multicospan`]/[`Cospan`],
//! [`ParallelMorphisms`]/[`ParallelPair`] and [`SquareDiagram`] — that
//! validate their shape at construction, plus the shape-agnostic
//! [`FreeDiagram`] they all convert into, backed by a directed
//! multigraph store.
//!
//! Diagrams are polymorphic over the category: anything implementing
//! [`Morphism`] (domain, codomain, composition, value equality) works.
//!
//! ```
//! use free_diagrams::{FreeDiagram, Morphism, NodeKey, Span};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Arrow {
//!     name: String,
//!     dom: &'static str,
//!     cod: &'static str,
//! }
//!
//! impl Morphism for Arrow {
//!     type Object = &'static str;
//!
//!     fn domain(&self) -> &'static str {
//!         self.dom
//!     }
//!
//!     fn codomain(&self) -> &'static str {
//!         self.cod
//!     }
//!
//!     fn compose(&self, other: &Self) -> Self {
//!         Arrow {
//!             name: format!("{};{}", self.name, other.name),
//!             dom: self.dom,
//!             cod: other.cod,
//!         }
//!     }
//! }
//!
//! let f = Arrow { name: "f".into(), dom: "A", cod: "B" };
//! let g = Arrow { name: "g".into(), dom: "A", cod: "C" };
//! let span = Span::new(f, g).unwrap();
//!
//! let diagram: FreeDiagram<&'static str, Arrow> = span.into();
//! assert_eq!(diagram.vertex_count(), 3);
//! assert_eq!(diagram.ob(NodeKey(0)), Some(&"A"));
//! ```

pub mod category;
pub mod diagram;
pub mod free_diagram;
pub mod graph;
#[cfg(feature = "serde")]
pub mod serde;
mod util;

pub use category::Morphism;
pub use diagram::{
    CompositionError, CompositionResult, Cospan, DiscreteDiagram, Multicospan, Multispan,
    ParallelMorphisms, ParallelPair, ShapeError, ShapeResult, Span, SquareDiagram,
};
pub use free_diagram::{DiagramResult, FreeDiagram, InvalidDiagram};
pub use graph::{DotCollector, EdgeId, Graph, NodeKey};
