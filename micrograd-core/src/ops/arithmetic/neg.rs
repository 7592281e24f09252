// micrograd-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// `-a`, built as `a * -1`.
pub fn neg_op(a: Value<'_>) -> Value<'_> {
    let minus_one = a.graph.value(-1.0);
    mul_op(a, minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
