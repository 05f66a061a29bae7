use std::fmt::Debug;

/// A morphism of some category, together with its endpoint objects.
///
/// This is the entire interface the diagram types ask of a category:
/// endpoint accessors, composition, and value equality. Objects and
/// morphisms are otherwise opaque.
pub trait Morphism: Clone + PartialEq + Debug {
    /// The object representation of the morphism's category.
    type Object: Clone + PartialEq + Debug;

    fn domain(&self) -> Self::Object;

    fn codomain(&self) -> Self::Object;

    /// The diagrammatic composite `self ; other`.
    ///
    /// Defined exactly when `self.codomain() == other.domain()`; callers
    /// are expected to have checked that equality. Associativity is the
    /// implementor's obligation and is not re-verified by the diagram
    /// layer.
    fn compose(&self, other: &Self) -> Self;
}
