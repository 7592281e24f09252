use crate::value::Value;

/// Checks that a value's forward data is within `tolerance` of `expected`.
/// Panics with both numbers otherwise.
pub fn check_value_near(actual: &Value<'_>, expected: f64, tolerance: f64) {
    check_f64_near(actual.data(), expected, tolerance, "data");
}

/// Checks that a value's gradient is within `tolerance` of `expected`.
pub fn check_grad_near(actual: &Value<'_>, expected: f64, tolerance: f64) {
    check_f64_near(actual.grad(), expected, tolerance, "grad");
}

fn check_f64_near(actual: f64, expected: f64, tolerance: f64, what: &str) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "{} mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            what, actual, expected, diff, tolerance
        );
    }
}
