// src/value/traits.rs
use crate::arena::Graph;
use crate::ops::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Conversion of an operand into a node of a given graph.
///
/// Raw numbers become fresh leaves; values are passed through unchanged.
pub trait IntoValue<'g> {
    fn into_value(self, graph: &'g Graph) -> Value<'g>;
}

impl<'g> IntoValue<'g> for Value<'g> {
    /// # Panics
    /// If `self` belongs to a different graph.
    fn into_value(self, graph: &'g Graph) -> Value<'g> {
        assert!(
            std::ptr::eq(self.graph, graph),
            "cannot combine values from different graphs"
        );
        self
    }
}

impl<'g> IntoValue<'g> for f64 {
    fn into_value(self, graph: &'g Graph) -> Value<'g> {
        graph.value(self)
    }
}

impl<'g> IntoValue<'g> for i32 {
    fn into_value(self, graph: &'g Graph) -> Value<'g> {
        graph.value(f64::from(self))
    }
}

/// Right-hand side of [`Value::pow`].
///
/// Only literal exponents are differentiable here; a node exponent is rejected
/// with `InvalidOperand`.
#[derive(Debug, Clone, Copy)]
pub enum Exponent<'g> {
    Literal(f64),
    Node(Value<'g>),
}

impl From<f64> for Exponent<'_> {
    fn from(p: f64) -> Self {
        Exponent::Literal(p)
    }
}

impl From<i32> for Exponent<'_> {
    fn from(p: i32) -> Self {
        Exponent::Literal(f64::from(p))
    }
}

impl<'g> From<Value<'g>> for Exponent<'g> {
    fn from(v: Value<'g>) -> Self {
        Exponent::Node(v)
    }
}

// Identity semantics: same graph, same slot, same generation.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph)
            && self.id == other.id
            && self.generation == other.generation
    }
}

impl Eq for Value<'_> {}

impl Hash for Value<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.graph, state);
        self.id.hash(state);
        self.generation.hash(state);
    }
}

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        neg_op(self)
    }
}

impl<'g, R: IntoValue<'g>> Add<R> for Value<'g> {
    type Output = Value<'g>;

    fn add(self, rhs: R) -> Value<'g> {
        add_op(self, rhs.into_value(self.graph))
    }
}

impl<'g, R: IntoValue<'g>> Sub<R> for Value<'g> {
    type Output = Value<'g>;

    fn sub(self, rhs: R) -> Value<'g> {
        sub_op(self, rhs.into_value(self.graph))
    }
}

impl<'g, R: IntoValue<'g>> Mul<R> for Value<'g> {
    type Output = Value<'g>;

    fn mul(self, rhs: R) -> Value<'g> {
        mul_op(self, rhs.into_value(self.graph))
    }
}

impl<'g, R: IntoValue<'g>> Div<R> for Value<'g> {
    type Output = Value<'g>;

    fn div(self, rhs: R) -> Value<'g> {
        div_op(self, rhs.into_value(self.graph))
    }
}

// Reflected forms: `3.0 + v`, `2 * v`, `1.0 - v`, `10 / v`.
macro_rules! impl_reflected_ops {
    ($($t:ty),*) => {$(
        impl<'g> Add<Value<'g>> for $t {
            type Output = Value<'g>;

            fn add(self, rhs: Value<'g>) -> Value<'g> {
                add_op(rhs, self.into_value(rhs.graph))
            }
        }

        impl<'g> Mul<Value<'g>> for $t {
            type Output = Value<'g>;

            fn mul(self, rhs: Value<'g>) -> Value<'g> {
                mul_op(rhs, self.into_value(rhs.graph))
            }
        }

        impl<'g> Sub<Value<'g>> for $t {
            type Output = Value<'g>;

            fn sub(self, rhs: Value<'g>) -> Value<'g> {
                add_op(neg_op(rhs), self.into_value(rhs.graph))
            }
        }

        impl<'g> Div<Value<'g>> for $t {
            type Output = Value<'g>;

            fn div(self, rhs: Value<'g>) -> Value<'g> {
                div_op(self.into_value(rhs.graph), rhs)
            }
        }
    )*};
}

impl_reflected_ops!(f64, i32);

// Compound assignment rebinds the handle to the new node.

impl<'g, R: IntoValue<'g>> AddAssign<R> for Value<'g> {
    fn add_assign(&mut self, rhs: R) {
        *self = *self + rhs;
    }
}

impl<'g, R: IntoValue<'g>> SubAssign<R> for Value<'g> {
    fn sub_assign(&mut self, rhs: R) {
        *self = *self - rhs;
    }
}

impl<'g, R: IntoValue<'g>> MulAssign<R> for Value<'g> {
    fn mul_assign(&mut self, rhs: R) {
        *self = *self * rhs;
    }
}

impl<'g, R: IntoValue<'g>> DivAssign<R> for Value<'g> {
    fn div_assign(&mut self, rhs: R) {
        *self = *self / rhs;
    }
}
