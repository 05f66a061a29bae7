use crate::category::Morphism;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Bound alias for morphism types whose objects and morphisms both
/// round-trip through serde; used in `serde(bound = ...)` attributes on
/// the generic diagram types.
pub trait MorphismSerde:
    Morphism<Object: Serialize + DeserializeOwned> + Serialize + DeserializeOwned
{
}

impl<M> MorphismSerde for M where
    M: Morphism<Object: Serialize + DeserializeOwned> + Serialize + DeserializeOwned
{
}
