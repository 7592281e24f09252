// src/nn/mod.rs
// Neural network building blocks on top of scalar values.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use init::Init;
pub use layers::{Activation, Layer, Neuron};
pub use losses::mse_loss;
pub use module::Module;
