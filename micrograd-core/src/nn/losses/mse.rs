// micrograd-core/src/nn/losses/mse.rs

use crate::error::MicrogradError;
use crate::value::Value;

/// Specifies the reduction to apply to the per-sample squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl Reduction {
    pub fn from_str(s: &str) -> Result<Self, MicrogradError> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(MicrogradError::InvalidArgument(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean squared error between predictions and targets.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node `reduce((pred_i - target_i)^2)`.
    ///
    /// # Errors
    /// `DimensionMismatch` when the slices differ in length, `EmptyInput` when they
    /// are empty.
    pub fn calculate<'g>(
        &self,
        predictions: &[Value<'g>],
        targets: &[Value<'g>],
    ) -> Result<Value<'g>, MicrogradError> {
        if predictions.len() != targets.len() {
            return Err(MicrogradError::DimensionMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss".to_string(),
            });
        }
        let (first, rest) = match predictions.split_first() {
            Some(split) => split,
            None => {
                return Err(MicrogradError::EmptyInput {
                    operation: "MSELoss".to_string(),
                })
            }
        };
        let sq = |p: Value<'g>, t: Value<'g>| (p - t).powf(2.0);
        let total = rest
            .iter()
            .zip(&targets[1..])
            .fold(sq(*first, targets[0]), |acc, (&p, &t)| acc + sq(p, t));
        Ok(match self.reduction {
            Reduction::Mean => total / predictions.len() as f64,
            Reduction::Sum => total,
        })
    }
}

/// Shorthand for `MSELoss::new(Reduction::Mean).calculate(..)`.
pub fn mse_loss<'g>(
    predictions: &[Value<'g>],
    targets: &[Value<'g>],
) -> Result<Value<'g>, MicrogradError> {
    MSELoss::new(Reduction::Mean).calculate(predictions, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
