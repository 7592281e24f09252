use crate::error::MicrogradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use log::debug;

/// Implements the Stochastic Gradient Descent (SGD) optimizer, with optional momentum.
///
/// Update rule, per parameter `p` with velocity `v`:
/// `v = momentum * v + grad(p)`, then `p = p - lr * v`.
/// With zero momentum this is plain `p -= lr * grad(p)`.
#[derive(Debug)]
pub struct Sgd<'g> {
    params: Vec<Value<'g>>,
    lr: f64,
    momentum: f64,
    velocity: Vec<f64>,
}

impl<'g> Sgd<'g> {
    /// Creates a new `Sgd` over `params` with learning rate `lr`.
    ///
    /// # Errors
    /// `InvalidArgument` if `lr` is not positive and finite, or if a parameter is
    /// not a leaf.
    pub fn new(
        params: impl IntoIterator<Item = Value<'g>>,
        lr: f64,
    ) -> Result<Self, MicrogradError> {
        check_lr(lr)?;
        let params: Vec<Value<'g>> = params.into_iter().collect();
        if let Some(index) = params.iter().position(|p| !p.is_leaf()) {
            return Err(MicrogradError::InvalidArgument(format!(
                "parameter {} is not a leaf node",
                index
            )));
        }
        let velocity = vec![0.0; params.len()];
        Ok(Sgd {
            params,
            lr,
            momentum: 0.0,
            velocity,
        })
    }

    /// Sets the momentum factor, which must lie in `[0, 1)`.
    pub fn with_momentum(mut self, momentum: f64) -> Result<Self, MicrogradError> {
        if !(0.0..1.0).contains(&momentum) {
            return Err(MicrogradError::InvalidArgument(format!(
                "momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        self.momentum = momentum;
        Ok(self)
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate, e.g. for a decay schedule.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), MicrogradError> {
        check_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[Value<'g>] {
        &self.params
    }
}

fn check_lr(lr: f64) -> Result<(), MicrogradError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(MicrogradError::InvalidArgument(format!(
            "learning rate must be positive and finite, got {}",
            lr
        )))
    }
}

impl Optimizer for Sgd<'_> {
    /// Fails without touching any parameter if a gradient is NaN or infinite.
    fn step(&mut self) -> Result<(), MicrogradError> {
        debug!("Sgd: step() called on {} params, lr = {}", self.params.len(), self.lr);
        let grads: Vec<f64> = self.params.iter().map(|p| p.grad()).collect();
        if let Some(index) = grads.iter().position(|g| !g.is_finite()) {
            return Err(MicrogradError::NonFiniteGradient { index });
        }
        for ((param, grad), v) in self.params.iter().zip(grads).zip(self.velocity.iter_mut()) {
            *v = self.momentum * *v + grad;
            param.set_data(param.data() - self.lr * *v)?;
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for p in &self.params {
            p.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
