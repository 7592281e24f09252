// micrograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::MicrogradError;
use crate::ops::record;
use crate::value::{Exponent, Value};

/// Raises `base` to a literal exponent.
///
/// The exponent must be a plain number. Passing a [`Value`] fails with
/// `InvalidOperand`, since no gradient flows into the exponent.
pub fn pow_op<'g>(
    base: Value<'g>,
    exponent: impl Into<Exponent<'g>>,
) -> Result<Value<'g>, MicrogradError> {
    match exponent.into() {
        Exponent::Literal(p) => Ok(powf_op(base, p)),
        Exponent::Node(node) => Err(MicrogradError::InvalidOperand {
            operation: "pow".to_string(),
            reason: format!(
                "exponent must be an int or float literal, got node {}",
                node.id
            ),
        }),
    }
}

/// `base ** p` for a literal `p`.
///
/// Negative bases with fractional exponents follow `f64::powf` and yield NaN.
pub fn powf_op(base: Value<'_>, p: f64) -> Value<'_> {
    record(base.graph, base.data().powf(p), BackwardOp::Pow(base.id, p))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
