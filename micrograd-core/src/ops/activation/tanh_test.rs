use crate::arena::Graph;
use crate::autograd::check_grad;
use crate::ops::activation::tanh_op;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward() {
    let g = Graph::new();
    for x in [-2.0_f64, -0.5, 0.0, 0.8, 3.0] {
        let t = tanh_op(g.value(x));
        let expected = ((2.0 * x).exp() - 1.0) / ((2.0 * x).exp() + 1.0);
        assert_relative_eq!(t.data(), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_tanh_large_input_stays_finite() {
    let g = Graph::new();
    let t = tanh_op(g.value(1000.0));
    assert_relative_eq!(t.data(), 1.0);
}

#[test]
fn test_tanh_backward() {
    let g = Graph::new();
    let a = g.value(0.8814);
    let t = tanh_op(a);
    t.backward();
    assert_relative_eq!(a.grad(), 1.0 - t.data() * t.data());
}

#[test]
fn test_tanh_backward_grad_check() {
    let result = check_grad(&[0.4], |xs| Ok(tanh_op(xs[0])), 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Tanh grad check failed: {:?}", result.err());
}
