use crate::error::MicrogradError;
use crate::ops::{exp_op, pow_op, powf_op, relu_op, tanh_op};
use crate::value::{Exponent, Value};

impl<'g> Value<'g> {
    /// Raises this value to a literal exponent.
    ///
    /// # Errors
    /// `InvalidOperand` if the exponent is another [`Value`].
    pub fn pow(self, exponent: impl Into<Exponent<'g>>) -> Result<Value<'g>, MicrogradError> {
        pow_op(self, exponent)
    }

    /// Infallible form of [`pow`](Self::pow) for an `f64` exponent.
    pub fn powf(self, exponent: f64) -> Value<'g> {
        powf_op(self, exponent)
    }

    pub fn exp(self) -> Value<'g> {
        exp_op(self)
    }

    pub fn tanh(self) -> Value<'g> {
        tanh_op(self)
    }

    pub fn relu(self) -> Value<'g> {
        relu_op(self)
    }
}
