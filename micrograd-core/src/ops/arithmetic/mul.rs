// micrograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::ops::{check_same_graph, record};
use crate::value::Value;

/// Multiplies two values. Each operand's gradient is scaled by the other operand.
pub fn mul_op<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    check_same_graph(&a, &b, "mul");
    record(a.graph, a.data() * b.data(), BackwardOp::Mul(a.id, b.id))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
