use crate::arena::Graph;
use crate::error::MicrogradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity; used for output layers.
    Linear,
    #[default]
    Relu,
    Tanh,
}

impl Activation {
    pub fn apply<'g>(&self, x: Value<'g>) -> Value<'g> {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.relu(),
            Activation::Tanh => x.tanh(),
        }
    }

    fn display_prefix(&self) -> &'static str {
        match self {
            Activation::Linear => "Linear",
            Activation::Relu => "ReLU",
            Activation::Tanh => "Tanh",
        }
    }
}

/// A single neuron: `activation(w · x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron<'g> {
    weights: Vec<Value<'g>>,
    bias: Value<'g>,
    activation: Activation,
}

impl<'g> Neuron<'g> {
    /// Creates a neuron with `n_in` weights and a bias drawn from `Uniform(-1, 1)`.
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        n_in: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        Self::with_init(graph, n_in, activation, Init::default(), rng)
    }

    /// Creates a neuron drawing its parameters from `init`.
    pub fn with_init<R: Rng + ?Sized>(
        graph: &'g Graph,
        n_in: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        if n_in == 0 {
            return Err(MicrogradError::InvalidArgument(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights = init.leaves(graph, n_in, rng)?;
        let bias = init.leaves(graph, 1, rng)?[0];
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    pub fn n_in(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[Value<'g>] {
        &self.weights
    }

    pub fn bias(&self) -> Value<'g> {
        self.bias
    }

    /// Computes the neuron's output for `inputs`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len() != n_in`.
    pub fn forward(&self, inputs: &[Value<'g>]) -> Result<Value<'g>, MicrogradError> {
        if inputs.len() != self.weights.len() {
            return Err(MicrogradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias, |acc, (&w, &x)| acc + w * x);
        Ok(self.activation.apply(pre_activation))
    }
}

impl<'g> Module<'g> for Neuron<'g> {
    fn parameters(&self) -> Vec<Value<'g>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

impl fmt::Display for Neuron<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Neuron({})", self.activation.display_prefix(), self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
