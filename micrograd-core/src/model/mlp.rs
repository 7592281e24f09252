use crate::arena::Graph;
use crate::error::MicrogradError;
use crate::nn::init::Init;
use crate::nn::layers::{Activation, Layer};
use crate::nn::module::Module;
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Multi-layer perceptron: a stack of fully connected [`Layer`]s.
#[derive(Debug, Clone)]
pub struct Mlp<'g> {
    layers: Vec<Layer<'g>>,
}

impl<'g> Mlp<'g> {
    /// Builds an MLP with `n_in` inputs and one layer per entry of `n_outs`.
    ///
    /// Hidden layers use ReLU, the last layer is linear. Parameters are drawn from
    /// `Uniform(-1, 1)` using `rng`.
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        n_in: usize,
        n_outs: &[usize],
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        Self::build(
            graph,
            n_in,
            n_outs,
            Activation::Relu,
            Activation::Linear,
            Init::default(),
            rng,
        )
    }

    fn build<R: Rng + ?Sized>(
        graph: &'g Graph,
        n_in: usize,
        n_outs: &[usize],
        hidden: Activation,
        output: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        if n_outs.is_empty() {
            return Err(MicrogradError::InvalidArgument(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let sizes: Vec<usize> = std::iter::once(n_in).chain(n_outs.iter().copied()).collect();
        let last = n_outs.len() - 1;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let activation = if i == last { output } else { hidden };
                Layer::with_init(graph, pair[0], pair[1], activation, init, &mut *rng)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mlp = Mlp { layers };
        log::debug!("Mlp::build: {} with {} parameters", mlp, mlp.num_parameters());
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer<'g>] {
        &self.layers
    }

    /// Feeds `inputs` through every layer.
    pub fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, MicrogradError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    /// Convenience for raw numeric inputs: promotes them to leaves first.
    pub fn forward_f64(&self, graph: &'g Graph, inputs: &[f64]) -> Result<Vec<Value<'g>>, MicrogradError> {
        self.forward(&graph.values(inputs))
    }
}

impl<'g> Module<'g> for Mlp<'g> {
    fn parameters(&self) -> Vec<Value<'g>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

impl fmt::Display for Mlp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

/// Construction settings for an [`Mlp`].
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    pub n_in: usize,
    /// Width of each layer, the last entry being the output width.
    pub layer_sizes: Vec<usize>,
    pub hidden_activation: Activation,
    pub output_activation: Activation,
    pub init: Init,
    /// Seed for the parameter RNG.
    pub seed: u64,
}

impl Default for MlpConfig {
    fn default() -> Self {
        MlpConfig {
            n_in: 3,
            layer_sizes: vec![4, 4, 1],
            hidden_activation: Activation::Relu,
            output_activation: Activation::Linear,
            init: Init::default(),
            seed: 1337,
        }
    }
}

impl MlpConfig {
    pub fn new(n_in: usize, layer_sizes: Vec<usize>) -> Self {
        MlpConfig {
            n_in,
            layer_sizes,
            ..Default::default()
        }
    }

    pub fn with_hidden_activation(mut self, activation: Activation) -> Self {
        self.hidden_activation = activation;
        self
    }

    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = activation;
        self
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Creates the model in `graph` from a `StdRng` seeded with `self.seed`.
    pub fn build<'g>(&self, graph: &'g Graph) -> Result<Mlp<'g>, MicrogradError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        Mlp::build(
            graph,
            self.n_in,
            &self.layer_sizes,
            self.hidden_activation,
            self.output_activation,
            self.init,
            &mut rng,
        )
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
