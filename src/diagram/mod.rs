//! Fixed-shape diagrams: diagrams whose vertex/edge count and
//! connectivity pattern is fixed by their type.
//!
//! Every shape validates its structural invariants at construction and is
//! immutable afterwards, so a value of one of these types is well formed
//! by construction. The general, graph-shaped counterpart lives in
//! [`crate::free_diagram`].

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parallel;
pub mod span;
pub mod square;

pub use parallel::{ParallelMorphisms, ParallelPair};
pub use span::{Cospan, Multicospan, Multispan, Span};
pub use square::{CompositionError, CompositionResult, SquareDiagram};

/// A fixed-shape constructor's structural precondition failed.
///
/// Indices refer to positions in the constructor's input sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("cannot infer an apex or base from an empty leg list")]
    EmptyLegs,
    #[error("a parallel morphism family needs at least one morphism")]
    EmptyParallel,
    #[error("leg {index} does not start at the apex")]
    LegDomain { index: usize },
    #[error("leg {index} does not end at the base")]
    LegCodomain { index: usize },
    #[error("morphism {index} does not share the family's domain")]
    ParallelDomain { index: usize },
    #[error("morphism {index} does not share the family's codomain")]
    ParallelCodomain { index: usize },
    #[error("dom(top) does not match dom(left) at the top-left corner")]
    SquareTopLeft,
    #[error("codom(top) does not match dom(right) at the top-right corner")]
    SquareTopRight,
    #[error("codom(left) does not match dom(bottom) at the bottom-left corner")]
    SquareBottomLeft,
    #[error("codom(bottom) does not match codom(right) at the bottom-right corner")]
    SquareBottomRight,
}

pub type ShapeResult<T> = error_stack::Result<T, ShapeError>;

/// An ordered family of objects with no morphisms between them.
///
/// The empty diagram and the object pair are the length-0 and length-2
/// special cases; any length is legal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscreteDiagram<Ob> {
    objects: Vec<Ob>,
}

impl<Ob> DiscreteDiagram<Ob> {
    pub fn new(objects: Vec<Ob>) -> Self {
        DiscreteDiagram { objects }
    }

    /// The diagram with no objects at all.
    pub fn empty() -> Self {
        DiscreteDiagram {
            objects: Vec::new(),
        }
    }

    /// The discrete diagram on exactly two objects.
    pub fn pair(first: Ob, second: Ob) -> Self {
        DiscreteDiagram {
            objects: vec![first, second],
        }
    }

    pub fn objects(&self) -> &[Ob] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ob> {
        self.objects.iter()
    }
}

impl<Ob> Index<usize> for DiscreteDiagram<Ob> {
    type Output = Ob;

    fn index(&self, index: usize) -> &Ob {
        &self.objects[index]
    }
}

impl<Ob> IntoIterator for DiscreteDiagram<Ob> {
    type Item = Ob;
    type IntoIter = std::vec::IntoIter<Ob>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl<'a, Ob> IntoIterator for &'a DiscreteDiagram<Ob> {
    type Item = &'a Ob;
    type IntoIter = std::slice::Iter<'a, Ob>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl<Ob> FromIterator<Ob> for DiscreteDiagram<Ob> {
    fn from_iter<I: IntoIterator<Item = Ob>>(iter: I) -> Self {
        DiscreteDiagram {
            objects: iter.into_iter().collect(),
        }
    }
}
