// micrograd-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul_op, powf_op};
use crate::value::Value;

/// `a / b`, built as `a * b**-1`.
///
/// Division by a zero-valued node yields an infinite result, as `f64` does.
pub fn div_op<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    mul_op(a, powf_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
