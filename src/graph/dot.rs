use crate::graph::Graph;
use petgraph::dot;
use petgraph::dot::Dot;
use std::fmt::Debug;

impl<NA: Debug, EA: Debug> Graph<NA, EA> {
    pub fn dot(&self) -> String {
        format!(
            "{:?}",
            Dot::with_attr_getters(
                self.inner(),
                &[dot::Config::EdgeNoLabel, dot::Config::NodeNoLabel],
                &|_, edge| {
                    let dbg_attr_format = format!("{:?}", edge.weight().edge_attr);
                    let dbg_attr_replaced = dbg_attr_format.escape_debug();
                    format!("label = \"{dbg_attr_replaced}\"")
                },
                &|_, (node, attr)| {
                    let dbg_attr_format = format!("{:?}", attr.node_attr);
                    let dbg_attr_replaced = dbg_attr_format.escape_debug();
                    format!("label = \"{}|{dbg_attr_replaced}\"", node.index())
                }
            )
        )
    }
}

pub struct DotCollector {
    dot: String,
}

impl DotCollector {
    pub fn new() -> Self {
        DotCollector { dot: String::new() }
    }

    pub fn collect<NA: Debug, EA: Debug>(&mut self, graph: &Graph<NA, EA>) {
        if !self.dot.is_empty() {
            self.dot.push_str("\n---\n");
        }
        self.dot.push_str(&graph.dot());
    }

    pub fn finalize(&self) -> String {
        self.dot.clone()
    }
}

impl Default for DotCollector {
    fn default() -> Self {
        Self::new()
    }
}
