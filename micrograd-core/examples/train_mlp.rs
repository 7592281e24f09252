//! # Training a small MLP on scalar values
//!
//! Fits a 3-4-4-1 perceptron to four hand-written samples using the scalar
//! autodiff engine.
//!
//! Steps shown:
//! 1.  Building the model from an `MlpConfig` (seeded, so runs are reproducible).
//! 2.  Forward pass over the dataset and an MSE loss node.
//! 3.  `backward()` on the loss, then an `Sgd` step.
//! 4.  `zero_grad()` and `Graph::rewind` so each iteration starts clean.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp`

use log::info;
use micrograd_core::model::MlpConfig;
use micrograd_core::nn::losses::mse_loss;
use micrograd_core::nn::{Activation, Module};
use micrograd_core::optim::{Optimizer, Sgd};
use micrograd_core::{Graph, MicrogradError};

fn main() -> Result<(), MicrogradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let graph = Graph::new();
    let mlp = MlpConfig::new(3, vec![4, 4, 1])
        .with_hidden_activation(Activation::Tanh)
        .build(&graph)?;
    info!("{} ({} parameters)", mlp, mlp.num_parameters());

    let mut optimizer = Sgd::new(mlp.parameters(), 0.05)?;
    let checkpoint = graph.checkpoint();

    for epoch in 0..100 {
        optimizer.zero_grad();

        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            preds.extend(mlp.forward_f64(&graph, x)?);
        }
        let loss = mse_loss(&preds, &graph.values(&ys))?;
        loss.backward();
        optimizer.step()?;

        if epoch % 10 == 0 {
            info!("epoch {:3}: loss = {:.6}", epoch, loss.data());
        }
        graph.rewind(checkpoint);
    }

    for (x, y) in xs.iter().zip(ys) {
        let pred = mlp.forward_f64(&graph, x)?;
        println!("input {:?} target {:5.2} prediction {:8.4}", x, y, pred[0].data());
    }
    Ok(())
}
