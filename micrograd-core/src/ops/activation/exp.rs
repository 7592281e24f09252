use crate::autograd::BackwardOp;
use crate::ops::record;
use crate::value::Value;

/// `e ** a`. The local derivative is the output itself.
pub fn exp_op(a: Value<'_>) -> Value<'_> {
    record(a.graph, a.data().exp(), BackwardOp::Exp(a.id))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
