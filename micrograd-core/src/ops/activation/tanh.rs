use crate::autograd::BackwardOp;
use crate::ops::record;
use crate::value::Value;

/// Hyperbolic tangent, `(e^2x - 1) / (e^2x + 1)`.
///
/// Computed with `f64::tanh`, which stays finite where the quotient form overflows.
pub fn tanh_op(a: Value<'_>) -> Value<'_> {
    record(a.graph, a.data().tanh(), BackwardOp::Tanh(a.id))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
