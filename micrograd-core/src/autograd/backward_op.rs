use crate::node::{Node, NodeId};

/// The operation that produced a node, together with the ids of its operands.
///
/// This is both the diagnostic tag of a node and the description of its local
/// backward rule. Gradient propagation is a single `match` in
/// [`BackwardOp::propagate`] instead of a closure stored on every node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Input node; propagation is a no-op.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Power by a literal exponent. The exponent is never a node.
    Pow(NodeId, f64),
    Exp(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
}

impl BackwardOp {
    /// Deduplicated operand ids (`a + a` has a single operand).
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add(a, b) | BackwardOp::Mul(a, b) => {
                if a == b {
                    vec![a]
                } else {
                    vec![a, b]
                }
            }
            BackwardOp::Pow(a, _)
            | BackwardOp::Exp(a)
            | BackwardOp::Tanh(a)
            | BackwardOp::Relu(a) => vec![a],
        }
    }

    /// Short label used when printing graphs. Empty for leaves.
    pub fn tag(&self) -> String {
        match *self {
            BackwardOp::Leaf => String::new(),
            BackwardOp::Add(..) => "+".to_string(),
            BackwardOp::Mul(..) => "*".to_string(),
            BackwardOp::Pow(_, p) => format!("**{}", p),
            BackwardOp::Exp(_) => "exp".to_string(),
            BackwardOp::Tanh(_) => "tanh".to_string(),
            BackwardOp::Relu(_) => "relu".to_string(),
        }
    }

    /// Applies the chain rule from node `out` to its operands.
    ///
    /// `out`'s gradient must already hold the contributions of every consumer, which
    /// the reverse topological order guarantees. Every rule accumulates (`+=`) into
    /// the operand gradients, so a node used several times (including twice by the
    /// same consumer, as in `a * a`) receives the sum over all paths.
    pub(crate) fn propagate(&self, nodes: &mut [Node], out: NodeId) {
        let g = nodes[out.0].grad;
        let out_data = nodes[out.0].data;
        match *self {
            BackwardOp::Leaf => {}
            BackwardOp::Add(a, b) => {
                nodes[a.0].grad += g;
                nodes[b.0].grad += g;
            }
            BackwardOp::Mul(a, b) => {
                let (a_data, b_data) = (nodes[a.0].data, nodes[b.0].data);
                nodes[a.0].grad += b_data * g;
                nodes[b.0].grad += a_data * g;
            }
            BackwardOp::Pow(a, p) => {
                let a_data = nodes[a.0].data;
                nodes[a.0].grad += p * a_data.powf(p - 1.0) * g;
            }
            BackwardOp::Exp(a) => {
                nodes[a.0].grad += out_data * g;
            }
            BackwardOp::Tanh(a) => {
                nodes[a.0].grad += (1.0 - out_data * out_data) * g;
            }
            BackwardOp::Relu(a) => {
                // Sub-gradient 0 at the kink.
                if nodes[a.0].data > 0.0 {
                    nodes[a.0].grad += g;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
