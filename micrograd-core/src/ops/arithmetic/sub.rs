// micrograd-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// `a - b`, built as `a + (-b)`.
pub fn sub_op<'g>(a: Value<'g>, b: Value<'g>) -> Value<'g> {
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
