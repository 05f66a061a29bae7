#![allow(dead_code)]

use free_diagrams::Morphism;

/// A morphism in the free category of paths over named objects.
///
/// Composition concatenates the generator names, so composites can be
/// compared by plain equality in assertions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    dom: String,
    cod: String,
    steps: Vec<String>,
}

impl Path {
    pub fn generator(
        name: impl Into<String>,
        dom: impl Into<String>,
        cod: impl Into<String>,
    ) -> Self {
        Path {
            dom: dom.into(),
            cod: cod.into(),
            steps: vec![name.into()],
        }
    }

    pub fn identity(ob: impl Into<String>) -> Self {
        let ob = ob.into();
        Path {
            dom: ob.clone(),
            cod: ob,
            steps: Vec::new(),
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}

impl Morphism for Path {
    type Object = String;

    fn domain(&self) -> String {
        self.dom.clone()
    }

    fn codomain(&self) -> String {
        self.cod.clone()
    }

    fn compose(&self, other: &Self) -> Self {
        debug_assert_eq!(self.cod, other.dom, "composition endpoints must meet");
        Path {
            dom: self.dom.clone(),
            cod: other.cod.clone(),
            steps: self.steps.iter().chain(&other.steps).cloned().collect(),
        }
    }
}
