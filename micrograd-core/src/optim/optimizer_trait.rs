use crate::error::MicrogradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers read the `grad` of each parameter after a backward pass and update
/// its `data` in place.
pub trait Optimizer {
    /// Performs a single optimization step.
    fn step(&mut self) -> Result<(), MicrogradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it between iterations, since backward passes accumulate.
    fn zero_grad(&mut self);
}
