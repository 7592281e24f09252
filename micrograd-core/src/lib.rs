//! A scalar reverse-mode automatic differentiation engine, and a small
//! multilayer perceptron built on it.
//!
//! Expressions over [`Value`]s record a computation graph in a [`Graph`] arena.
//! Calling [`Value::backward`] fills in the gradient of every ancestor.
//!
//! ```
//! use micrograd_core::Graph;
//!
//! let g = Graph::new();
//! let x = g.labeled(-4.0, "x");
//! let z = 2.0 * x + 2.0 + x;
//! let q = z.relu() + z * x;
//! let h = (z * z).relu();
//! let y = h + q + q * x;
//! y.backward();
//! assert_eq!(y.data(), -20.0);
//! assert_eq!(x.grad(), 46.0);
//! ```

pub mod arena;
pub mod autograd;
pub mod error;
pub mod node;
pub mod ops;
pub mod value;

pub mod model;
pub mod nn;
pub mod optim;
pub mod utils;

pub use arena::{Checkpoint, Graph};
pub use error::MicrogradError;
pub use node::NodeId;
pub use value::{Exponent, IntoValue, Value};
