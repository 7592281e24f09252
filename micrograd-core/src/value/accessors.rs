use crate::arena::Graph;
use crate::autograd::BackwardOp;
use crate::error::MicrogradError;
use crate::node::NodeId;
use crate::value::Value;

impl<'g> Value<'g> {
    /// The graph this node lives in.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward-computed scalar.
    pub fn data(&self) -> f64 {
        self.node().data
    }

    /// Accumulated derivative of the last backward root with respect to this node.
    pub fn grad(&self) -> f64 {
        self.node().grad
    }

    pub fn label(&self) -> Option<String> {
        self.node().label.clone()
    }

    /// Attaches a display label and returns the same handle.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.node_mut().label = Some(label.into());
        self
    }

    /// The producing operation.
    pub fn op(&self) -> BackwardOp {
        self.node().op
    }

    /// Diagnostic tag of the producing operation, e.g. `"+"` or `"relu"`.
    pub fn op_tag(&self) -> String {
        self.op().tag()
    }

    /// Distinct operand nodes; empty for leaves.
    pub fn operands(&self) -> Vec<Value<'g>> {
        self.op()
            .operands()
            .into_iter()
            .map(|id| Value::from_id(self.graph, id))
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op(), BackwardOp::Leaf)
    }

    /// Overwrites the forward value of a leaf.
    ///
    /// Meant for optimizers updating parameters between passes. Nodes computed from
    /// this one earlier keep their old values.
    ///
    /// # Errors
    /// `InvalidOperand` if this node was computed by an operation.
    pub fn set_data(&self, data: f64) -> Result<(), MicrogradError> {
        let mut node = self.node_mut();
        if !matches!(node.op, BackwardOp::Leaf) {
            return Err(MicrogradError::InvalidOperand {
                operation: "set_data".to_string(),
                reason: format!("node {} is not a leaf ({:?})", self.id, node.op),
            });
        }
        node.data = data;
        Ok(())
    }
}
