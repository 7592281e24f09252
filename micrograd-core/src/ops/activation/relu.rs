use crate::autograd::BackwardOp;
use crate::ops::record;
use crate::value::Value;

/// Rectified linear unit, `max(0, a)`.
pub fn relu_op(a: Value<'_>) -> Value<'_> {
    let x = a.data();
    let data = if x < 0.0 { 0.0 } else { x };
    record(a.graph, data, BackwardOp::Relu(a.id))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
