//! Commuting squares and their horizontal/vertical composition algebra.

use crate::category::Morphism;
use crate::diagram::{ShapeError, ShapeResult};
use crate::util::log;
use error_stack::bail;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `hcompose`/`vcompose` was invoked on squares whose shared boundary
/// does not match exactly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionError {
    #[error(
        "horizontal composition: the right corners of the first square do not match the left corners of the second"
    )]
    HorizontalCorners,
    #[error("horizontal composition: the shared boundary must be the same morphism")]
    HorizontalBoundary,
    #[error(
        "vertical composition: the bottom corners of the first square do not match the top corners of the second"
    )]
    VerticalCorners,
    #[error("vertical composition: the shared boundary must be the same morphism")]
    VerticalBoundary,
}

pub type CompositionResult<T> = error_stack::Result<T, CompositionError>;

/// Four morphisms arranged as a square:
///
/// ```text
///    1 --top--> 3
///    |          |
///   left      right
///    |          |
///    v          v
///    2 -bottom> 4
/// ```
///
/// Construction checks that the four sides meet at the four corners; it
/// does *not* check that the two composite paths `top ; right` and
/// `left ; bottom` are equal. Commutativity is the caller's claim.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound = "Hom: crate::serde::MorphismSerde")
)]
pub struct SquareDiagram<Hom: Morphism> {
    top: Hom,
    bottom: Hom,
    left: Hom,
    right: Hom,
}

impl<Hom: Morphism> SquareDiagram<Hom> {
    /// Builds a square from its four sides, checking each corner in the
    /// order top-left, top-right, bottom-left, bottom-right.
    pub fn new(top: Hom, bottom: Hom, left: Hom, right: Hom) -> ShapeResult<Self> {
        if top.domain() != left.domain() {
            bail!(ShapeError::SquareTopLeft);
        }
        if top.codomain() != right.domain() {
            bail!(ShapeError::SquareTopRight);
        }
        if left.codomain() != bottom.domain() {
            bail!(ShapeError::SquareBottomLeft);
        }
        if bottom.codomain() != right.codomain() {
            bail!(ShapeError::SquareBottomRight);
        }
        Ok(SquareDiagram {
            top,
            bottom,
            left,
            right,
        })
    }

    pub fn top(&self) -> &Hom {
        &self.top
    }

    pub fn bottom(&self) -> &Hom {
        &self.bottom
    }

    pub fn left(&self) -> &Hom {
        &self.left
    }

    pub fn right(&self) -> &Hom {
        &self.right
    }

    /// The corner objects `[1, 2, 3, 4]`, derived from the sides.
    pub fn corners(&self) -> [Hom::Object; 4] {
        [
            self.left.domain(),
            self.left.codomain(),
            self.right.domain(),
            self.right.codomain(),
        ]
    }

    /// The four sides in `[top, bottom, left, right]` order.
    pub fn sides(&self) -> [&Hom; 4] {
        [&self.top, &self.bottom, &self.left, &self.right]
    }

    pub fn into_parts(self) -> (Hom, Hom, Hom, Hom) {
        (self.top, self.bottom, self.left, self.right)
    }

    /// Pastes `other` onto the right edge of `self`.
    ///
    /// Requires the right corners of `self` to equal the left corners of
    /// `other` and `self.right` to be literally the same morphism as
    /// `other.left`. The result composes the tops and bottoms and keeps
    /// the outer sides.
    pub fn hcompose(&self, other: &Self) -> CompositionResult<Self> {
        let [_, _, c3, c4] = self.corners();
        let [d1, d2, _, _] = other.corners();
        if c3 != d1 || c4 != d2 {
            log::debug!(
                "rejecting horizontal composition: corners {c3:?},{c4:?} vs {d1:?},{d2:?}"
            );
            bail!(CompositionError::HorizontalCorners);
        }
        if self.right != other.left {
            log::debug!(
                "rejecting horizontal composition: shared boundary {:?} vs {:?}",
                self.right,
                other.left
            );
            bail!(CompositionError::HorizontalBoundary);
        }
        // The corner checks above make these composites defined, and the
        // result meets at its corners whenever the category laws hold.
        Ok(SquareDiagram {
            top: self.top.compose(&other.top),
            bottom: self.bottom.compose(&other.bottom),
            left: self.left.clone(),
            right: other.right.clone(),
        })
    }

    /// Pastes `other` onto the bottom edge of `self`.
    ///
    /// Requires the bottom corners of `self` to equal the top corners of
    /// `other` and `self.bottom` to be literally the same morphism as
    /// `other.top`. The result composes the sides and keeps the outer
    /// top and bottom.
    pub fn vcompose(&self, other: &Self) -> CompositionResult<Self> {
        let [_, c2, _, c4] = self.corners();
        let [d1, _, d3, _] = other.corners();
        if c2 != d1 || c4 != d3 {
            log::debug!(
                "rejecting vertical composition: corners {c2:?},{c4:?} vs {d1:?},{d3:?}"
            );
            bail!(CompositionError::VerticalCorners);
        }
        if self.bottom != other.top {
            log::debug!(
                "rejecting vertical composition: shared boundary {:?} vs {:?}",
                self.bottom,
                other.top
            );
            bail!(CompositionError::VerticalBoundary);
        }
        Ok(SquareDiagram {
            top: self.top.clone(),
            bottom: other.bottom.clone(),
            left: self.left.compose(&other.left),
            right: self.right.compose(&other.right),
        })
    }
}
