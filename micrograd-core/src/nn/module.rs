use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, models).
///
/// Parameters are leaf [`Value`]s living in the graph the module was built in. The
/// forward pass is not part of the trait because its shape differs per module
/// (a neuron yields one value, a layer a vector).
pub trait Module<'g>: std::fmt::Debug {
    /// Returns all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Value<'g>>;

    /// Sets the gradient of every parameter back to 0.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
