use thiserror::Error;

/// Custom error type for the micrograd engine and its neural-network layer.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicrogradError {
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Dimension mismatch: expected {expected}, got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} received an empty input")]
    EmptyInput { operation: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Gradient of parameter {index} is NaN or infinite")]
    NonFiniteGradient { index: usize },
}
