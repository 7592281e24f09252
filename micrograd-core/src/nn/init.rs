use crate::arena::Graph;
use crate::error::MicrogradError;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Parameter initialisation scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
}

impl Default for Init {
    /// `Uniform(-1, 1)`.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks the distribution parameters.
    pub fn validate(&self) -> Result<(), MicrogradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(MicrogradError::InvalidArgument(format!(
                        "uniform init requires finite low < high, got [{}, {})",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !(mean.is_finite() && std.is_finite() && std >= 0.0) {
                    return Err(MicrogradError::InvalidArgument(format!(
                        "normal init requires finite mean and std >= 0, got mean={} std={}",
                        mean, std
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws `n` samples.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, MicrogradError> {
        self.validate()?;
        let samples = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std)
                    .map_err(|e| MicrogradError::InvalidArgument(e.to_string()))?;
                (0..n).map(|_| dist.sample(rng)).collect()
            }
        };
        Ok(samples)
    }

    /// Creates `n` fresh leaves in `graph` filled from this distribution.
    pub fn leaves<'g, R: Rng + ?Sized>(
        &self,
        graph: &'g Graph,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Value<'g>>, MicrogradError> {
        Ok(graph.values(&self.sample(n, rng)?))
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
