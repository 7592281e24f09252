use crate::autograd::BackwardOp;
use std::fmt;

/// Stable identity of a node inside its [`Graph`](crate::Graph).
///
/// Two nodes with equal `data` are still distinct nodes; identity is the arena index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One record of the computation graph.
///
/// `data` and `op` are fixed once the node is pushed. Only `grad` changes, during a
/// backward pass or a reset. The exception is `data` on leaves, which an optimizer
/// may overwrite between passes.
///
/// `generation` is the graph's rewind count when the node was pushed; a handle whose
/// generation differs from its slot's refers to a node that was dropped.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: BackwardOp,
    pub(crate) label: Option<String>,
    pub(crate) generation: u32,
}

impl Node {
    pub(crate) fn new(data: f64, op: BackwardOp) -> Self {
        Node {
            data,
            grad: 0.0,
            op,
            label: None,
            generation: 0,
        }
    }
}
