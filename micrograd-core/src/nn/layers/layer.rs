use crate::arena::Graph;
use crate::error::MicrogradError;
use crate::nn::init::Init;
use crate::nn::layers::neuron::{Activation, Neuron};
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `n_out` independent neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer<'g> {
    neurons: Vec<Neuron<'g>>,
}

impl<'g> Layer<'g> {
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        n_in: usize,
        n_out: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        Self::with_init(graph, n_in, n_out, activation, Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &'g Graph,
        n_in: usize,
        n_out: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        if n_out == 0 {
            return Err(MicrogradError::InvalidArgument(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..n_out)
            .map(|_| Neuron::with_init(graph, n_in, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron<'g>] {
        &self.neurons
    }

    pub fn n_in(&self) -> usize {
        self.neurons[0].n_in()
    }

    pub fn n_out(&self) -> usize {
        self.neurons.len()
    }

    /// One output per neuron.
    pub fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, MicrogradError> {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }
}

impl<'g> Module<'g> for Layer<'g> {
    fn parameters(&self) -> Vec<Value<'g>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

impl fmt::Display for Layer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
