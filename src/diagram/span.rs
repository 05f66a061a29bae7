//! Multispans and multicospans: star-shaped diagrams of morphisms that
//! share a single domain (the apex) or a single codomain (the base).

use crate::category::Morphism;
use crate::diagram::{ShapeError, ShapeResult};
use error_stack::bail;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Deref, Index};

/// An apex object together with an ordered family of legs out of it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound = "Hom: crate::serde::MorphismSerde")
)]
pub struct Multispan<Hom: Morphism> {
    apex: Hom::Object,
    legs: Vec<Hom>,
}

impl<Hom: Morphism> Multispan<Hom> {
    /// Builds a multispan with an explicit apex. Zero legs is legal.
    pub fn new(apex: Hom::Object, legs: Vec<Hom>) -> ShapeResult<Self> {
        for (index, leg) in legs.iter().enumerate() {
            if leg.domain() != apex {
                bail!(ShapeError::LegDomain { index });
            }
        }
        Ok(Multispan { apex, legs })
    }

    /// Builds a multispan by inferring the apex from the legs' shared
    /// domain. Fails on an empty leg list, since there is nothing to
    /// infer the apex from.
    pub fn from_legs(legs: Vec<Hom>) -> ShapeResult<Self> {
        let Some(first) = legs.first() else {
            bail!(ShapeError::EmptyLegs);
        };
        let apex = first.domain();
        Self::new(apex, legs)
    }

    pub fn apex(&self) -> &Hom::Object {
        &self.apex
    }

    pub fn legs(&self) -> &[Hom] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hom> {
        self.legs.iter()
    }

    pub fn into_parts(self) -> (Hom::Object, Vec<Hom>) {
        (self.apex, self.legs)
    }
}

impl<Hom: Morphism> Index<usize> for Multispan<Hom> {
    type Output = Hom;

    fn index(&self, index: usize) -> &Hom {
        &self.legs[index]
    }
}

impl<'a, Hom: Morphism> IntoIterator for &'a Multispan<Hom> {
    type Item = &'a Hom;
    type IntoIter = std::slice::Iter<'a, Hom>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}

/// A multispan with exactly two legs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound = "Hom: crate::serde::MorphismSerde")
)]
pub struct Span<Hom: Morphism>(Multispan<Hom>);

impl<Hom: Morphism> Span<Hom> {
    pub fn new(left: Hom, right: Hom) -> ShapeResult<Self> {
        Ok(Span(Multispan::from_legs(vec![left, right])?))
    }

    pub fn left(&self) -> &Hom {
        &self.0.legs[0]
    }

    pub fn right(&self) -> &Hom {
        &self.0.legs[1]
    }
}

impl<Hom: Morphism> Deref for Span<Hom> {
    type Target = Multispan<Hom>;

    fn deref(&self) -> &Multispan<Hom> {
        &self.0
    }
}

impl<Hom: Morphism> From<Span<Hom>> for Multispan<Hom> {
    fn from(span: Span<Hom>) -> Self {
        span.0
    }
}

/// A base object together with an ordered family of legs into it.
///
/// The dual of [`Multispan`]: every leg's codomain is the base.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound = "Hom: crate::serde::MorphismSerde")
)]
pub struct Multicospan<Hom: Morphism> {
    base: Hom::Object,
    legs: Vec<Hom>,
}

impl<Hom: Morphism> Multicospan<Hom> {
    /// Builds a multicospan with an explicit base. Zero legs is legal.
    pub fn new(base: Hom::Object, legs: Vec<Hom>) -> ShapeResult<Self> {
        for (index, leg) in legs.iter().enumerate() {
            if leg.codomain() != base {
                bail!(ShapeError::LegCodomain { index });
            }
        }
        Ok(Multicospan { base, legs })
    }

    /// Builds a multicospan by inferring the base from the legs' shared
    /// codomain. Fails on an empty leg list.
    pub fn from_legs(legs: Vec<Hom>) -> ShapeResult<Self> {
        let Some(first) = legs.first() else {
            bail!(ShapeError::EmptyLegs);
        };
        let base = first.codomain();
        Self::new(base, legs)
    }

    pub fn base(&self) -> &Hom::Object {
        &self.base
    }

    pub fn legs(&self) -> &[Hom] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hom> {
        self.legs.iter()
    }

    pub fn into_parts(self) -> (Hom::Object, Vec<Hom>) {
        (self.base, self.legs)
    }
}

impl<Hom: Morphism> Index<usize> for Multicospan<Hom> {
    type Output = Hom;

    fn index(&self, index: usize) -> &Hom {
        &self.legs[index]
    }
}

impl<'a, Hom: Morphism> IntoIterator for &'a Multicospan<Hom> {
    type Item = &'a Hom;
    type IntoIter = std::slice::Iter<'a, Hom>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}

/// A multicospan with exactly two legs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound = "Hom: crate::serde::MorphismSerde")
)]
pub struct Cospan<Hom: Morphism>(Multicospan<Hom>);

impl<Hom: Morphism> Cospan<Hom> {
    pub fn new(left: Hom, right: Hom) -> ShapeResult<Self> {
        Ok(Cospan(Multicospan::from_legs(vec![left, right])?))
    }

    pub fn left(&self) -> &Hom {
        &self.0.legs[0]
    }

    pub fn right(&self) -> &Hom {
        &self.0.legs[1]
    }
}

impl<Hom: Morphism> Deref for Cospan<Hom> {
    type Target = Multicospan<Hom>;

    fn deref(&self) -> &Multicospan<Hom> {
        &self.0
    }
}

impl<Hom: Morphism> From<Cospan<Hom>> for Multicospan<Hom> {
    fn from(cospan: Cospan<Hom>) -> Self {
        cospan.0
    }
}
