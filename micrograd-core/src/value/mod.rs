// src/value/mod.rs
use crate::arena::Graph;
use crate::node::{Node, NodeId};
use std::cell::{Ref, RefMut};

pub mod accessors;
pub mod autograd_methods;
pub mod debug;
pub mod math_methods;
pub mod traits;

pub use traits::{Exponent, IntoValue};

/// Handle to one scalar node of a [`Graph`].
///
/// A `Value` is a cheap `Copy` pair of a graph reference and a node id. Arithmetic on
/// values (`+ - * /`, unary `-`, [`pow`](Value::pow), activations) appends new nodes
/// to the same graph and returns handles to them. Raw `f64` operands on either side
/// are promoted to leaf nodes.
///
/// Equality and hashing are by node identity, never by `data`.
///
/// # Panics
/// Every accessor panics if the node was dropped by [`Graph::rewind`].
#[derive(Clone, Copy)]
pub struct Value<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) id: NodeId,
    pub(crate) generation: u32,
}

impl<'g> Value<'g> {
    /// Handle to a node currently in `graph`.
    pub(crate) fn from_id(graph: &'g Graph, id: NodeId) -> Self {
        let generation = graph.nodes()[id.0].generation;
        Value {
            graph,
            id,
            generation,
        }
    }

    pub(crate) fn node(&self) -> Ref<'g, Node> {
        let nodes = self.graph.nodes();
        self.check_live(&nodes);
        Ref::map(nodes, |nodes| &nodes[self.id.0])
    }

    pub(crate) fn node_mut(&self) -> RefMut<'g, Node> {
        let nodes = self.graph.nodes_mut();
        self.check_live(&nodes);
        RefMut::map(nodes, |nodes| &mut nodes[self.id.0])
    }

    /// `true` while the node this handle points to is still in the graph.
    pub(crate) fn is_live(&self, nodes: &[Node]) -> bool {
        nodes
            .get(self.id.0)
            .map_or(false, |node| node.generation == self.generation)
    }

    /// # Panics
    /// If the node was dropped by [`Graph::rewind`].
    pub(crate) fn ensure_live(&self) {
        self.check_live(&self.graph.nodes());
    }

    fn check_live(&self, nodes: &[Node]) {
        assert!(
            self.is_live(nodes),
            "Value {} was dropped by Graph::rewind",
            self.id
        );
    }
}

#[cfg(test)]
mod tests;
