use crate::autograd::BackwardOp;
use crate::node::{Node, NodeId};
use crate::value::Value;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;

/// Arena holding every node of a computation graph.
///
/// Nodes are only appended, so an operand always has a lower index than the node
/// consuming it. [`Value`] handles borrow the graph and address nodes by index,
/// which lets fan-out (one node feeding several consumers) work without any
/// reference counting.
///
/// The graph is single-threaded: it uses interior mutability through `RefCell`.
#[derive(Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
    // Incremented by every rewind; stamped on each pushed node.
    generation: Cell<u32>,
}

/// Marker returned by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: RefCell::new(Vec::new()),
            generation: Cell::new(0),
        }
    }

    /// Creates a leaf node holding `data`, with zero gradient and no operands.
    pub fn value(&self, data: f64) -> Value<'_> {
        let id = self.push(Node::new(data, BackwardOp::Leaf));
        Value::from_id(self, id)
    }

    /// Creates a labelled leaf node.
    pub fn labeled(&self, data: f64, label: impl Into<String>) -> Value<'_> {
        let mut node = Node::new(data, BackwardOp::Leaf);
        node.label = Some(label.into());
        let id = self.push(node);
        Value::from_id(self, id)
    }

    /// Creates one leaf per element of `data`, in order.
    pub fn values(&self, data: &[f64]) -> Vec<Value<'_>> {
        data.iter().map(|&d| self.value(d)).collect()
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the gradient of every node to 0.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Remembers the current size of the arena.
    ///
    /// Typical use is to take a checkpoint after creating the model parameters and
    /// [`rewind`](Self::rewind) to it at the end of each training iteration, so the
    /// per-iteration expression nodes do not pile up.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.len())
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Handles to dropped nodes must not be used afterwards; accessing them panics,
    /// even once new nodes have taken their slots. Handles to nodes created before
    /// the checkpoint stay valid.
    pub fn rewind(&self, checkpoint: Checkpoint) {
        let mut nodes = self.nodes.borrow_mut();
        let before = nodes.len();
        nodes.truncate(checkpoint.0);
        self.generation.set(self.generation.get().wrapping_add(1));
        log::trace!(
            "Graph::rewind: dropped {} nodes, generation {}",
            before - nodes.len(),
            self.generation.get()
        );
    }

    pub(crate) fn push(&self, mut node: Node) -> NodeId {
        node.generation = self.generation.get();
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        NodeId(nodes.len() - 1)
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<Node>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.nodes.borrow_mut()
    }

    pub(crate) fn nodes_try_borrow(&self) -> Option<Ref<'_, Vec<Node>>> {
        self.nodes.try_borrow().ok()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nodes_try_borrow() {
            Some(nodes) => write!(f, "Graph(nodes={})", nodes.len()),
            None => write!(f, "Graph(<borrowed>)"),
        }
    }
}
