//! Parallel morphism families: an ordered family of morphisms that all
//! share one domain and one codomain.

use crate::category::Morphism;
use crate::diagram::{ShapeError, ShapeResult};
use error_stack::bail;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Deref, Index};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound = "Hom: crate::serde::MorphismSerde")
)]
pub struct ParallelMorphisms<Hom: Morphism> {
    dom: Hom::Object,
    cod: Hom::Object,
    homs: Vec<Hom>,
}

impl<Hom: Morphism> ParallelMorphisms<Hom> {
    /// Builds a parallel family from a non-empty morphism list, taking
    /// the shared domain and codomain from the first morphism.
    ///
    /// Unlike spans and cospans there is no degenerate empty case: the
    /// endpoints cannot be inferred from nothing, and no explicit-domain
    /// constructor exists for the general family.
    pub fn new(homs: Vec<Hom>) -> ShapeResult<Self> {
        let Some(first) = homs.first() else {
            bail!(ShapeError::EmptyParallel);
        };
        let dom = first.domain();
        let cod = first.codomain();
        for (index, hom) in homs.iter().enumerate().skip(1) {
            if hom.domain() != dom {
                bail!(ShapeError::ParallelDomain { index });
            }
            if hom.codomain() != cod {
                bail!(ShapeError::ParallelCodomain { index });
            }
        }
        Ok(ParallelMorphisms { dom, cod, homs })
    }

    pub fn domain(&self) -> &Hom::Object {
        &self.dom
    }

    pub fn codomain(&self) -> &Hom::Object {
        &self.cod
    }

    pub fn homs(&self) -> &[Hom] {
        &self.homs
    }

    pub fn len(&self) -> usize {
        self.homs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.homs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hom> {
        self.homs.iter()
    }

    pub fn into_parts(self) -> (Hom::Object, Hom::Object, Vec<Hom>) {
        (self.dom, self.cod, self.homs)
    }
}

impl<Hom: Morphism> Index<usize> for ParallelMorphisms<Hom> {
    type Output = Hom;

    fn index(&self, index: usize) -> &Hom {
        &self.homs[index]
    }
}

impl<'a, Hom: Morphism> IntoIterator for &'a ParallelMorphisms<Hom> {
    type Item = &'a Hom;
    type IntoIter = std::slice::Iter<'a, Hom>;

    fn into_iter(self) -> Self::IntoIter {
        self.homs.iter()
    }
}

/// A parallel family of exactly two morphisms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound = "Hom: crate::serde::MorphismSerde")
)]
pub struct ParallelPair<Hom: Morphism>(ParallelMorphisms<Hom>);

impl<Hom: Morphism> ParallelPair<Hom> {
    /// Builds the pair, reporting domain and codomain disagreement
    /// independently of each other.
    pub fn new(first: Hom, last: Hom) -> ShapeResult<Self> {
        Ok(ParallelPair(ParallelMorphisms::new(vec![first, last])?))
    }

    pub fn first(&self) -> &Hom {
        &self.0.homs[0]
    }

    pub fn last(&self) -> &Hom {
        &self.0.homs[1]
    }
}

impl<Hom: Morphism> Deref for ParallelPair<Hom> {
    type Target = ParallelMorphisms<Hom>;

    fn deref(&self) -> &ParallelMorphisms<Hom> {
        &self.0
    }
}

impl<Hom: Morphism> From<ParallelPair<Hom>> for ParallelMorphisms<Hom> {
    fn from(pair: ParallelPair<Hom>) -> Self {
        pair.0
    }
}
