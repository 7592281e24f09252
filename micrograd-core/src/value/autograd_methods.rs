use crate::autograd::graph;
use crate::value::Value;

impl<'g> Value<'g> {
    /// Populates `grad` on every node this value depends on.
    ///
    /// The gradient of `self` is set to 1 and the chain rule is applied in reverse
    /// topological order. Gradients add up across calls; use
    /// [`zero_grad`](Self::zero_grad) or [`Graph::zero_grad`](crate::Graph::zero_grad)
    /// between passes.
    pub fn backward(&self) {
        self.ensure_live();
        graph::backward(self.graph, self.id);
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) {
        self.node_mut().grad = 0.0;
    }

    /// Every ancestor of this node (itself included), operands before consumers.
    pub fn topological_order(&self) -> Vec<Value<'g>> {
        self.ensure_live();
        graph::topological_order(self.graph, self.id)
            .into_iter()
            .map(|id| Value::from_id(self.graph, id))
            .collect()
    }
}
