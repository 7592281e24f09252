// micrograd-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::ops::{check_same_graph, record};
use crate::value::Value;

/// Adds two values. Both operands receive the output gradient unchanged.
pub fn add_op<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    check_same_graph(&a, &b, "add");
    record(a.graph, a.data() + b.data(), BackwardOp::Add(a.id, b.id))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
