use crate::arena::Graph;
use crate::error::MicrogradError;
use crate::value::Value;
use approx::abs_diff_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicrogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check setting: {0}")]
    InvalidSetting(String),
}

impl From<MicrogradError> for GradCheckError {
    fn from(err: MicrogradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds an expression from one leaf per entry of `inputs`. It is run once
/// with a backward pass to collect analytical gradients, then twice per input with
/// that input shifted by `±epsilon`. Every evaluation uses a fresh [`Graph`].
///
/// Input `i` passes when `|analytical - numerical| <= abs_tol + rel_tol * |numerical|`.
pub fn check_grad<F>(
    inputs: &[f64],
    func: F,
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&[Value<'g>]) -> Result<Value<'g>, MicrogradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidSetting(format!(
            "epsilon must be positive and finite, got {}",
            epsilon
        )));
    }

    // --- 1. Analytical gradients ---
    let analytical: Vec<f64> = {
        let graph = Graph::new();
        let leaves = graph.values(inputs);
        let output = func(&leaves)?;
        output.backward();
        leaves.iter().map(|leaf| leaf.grad()).collect()
    };

    // --- 2. Numerical gradients, one input at a time ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_shifted(inputs, i, epsilon, &func)?;
        let loss_minus = evaluate_shifted(inputs, i, -epsilon, &func)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        log::trace!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            i,
            analytical_grad,
            numerical_grad,
            difference
        );
        let tolerance = abs_tol + rel_tol * numerical_grad.abs();
        if !abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

fn evaluate_shifted<F>(inputs: &[f64], index: usize, shift: f64, func: &F) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&[Value<'g>]) -> Result<Value<'g>, MicrogradError>,
{
    let graph = Graph::new();
    let mut shifted = inputs.to_vec();
    shifted[index] += shift;
    let leaves = graph.values(&shifted);
    let output = func(&leaves)?;
    Ok(output.data())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
