// src/ops/mod.rs
// Forward functions for every differentiable operation on scalar values.

pub mod activation;
pub mod arithmetic;

pub use activation::{exp_op, relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, powf_op, sub_op};

use crate::arena::Graph;
use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::value::Value;

/// Appends the result of an operation to `graph`.
pub(crate) fn record<'g>(graph: &'g Graph, data: f64, op: BackwardOp) -> Value<'g> {
    let id = graph.push(Node::new(data, op));
    Value::from_id(graph, id)
}

/// # Panics
/// If `a` and `b` live in different graphs.
pub(crate) fn check_same_graph(a: &Value<'_>, b: &Value<'_>, operation: &str) {
    assert!(
        std::ptr::eq(a.graph, b.graph),
        "{}: operands belong to different graphs",
        operation
    );
}
