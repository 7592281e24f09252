use crate::arena::Graph;
use crate::autograd::check_grad;
use crate::ops::activation::exp_op;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward_backward() {
    let g = Graph::new();
    let a = g.value(1.0);
    let e = exp_op(a);
    assert_relative_eq!(e.data(), std::f64::consts::E);
    e.backward();
    assert_relative_eq!(a.grad(), std::f64::consts::E);
}

#[test]
fn test_exp_operand_with_two_consumers() {
    // a feeds both exp(a) and 3*a: the exp rule must add to, not overwrite,
    // the contribution coming from the other consumer.
    let g = Graph::new();
    let a = g.value(0.5);
    let y = exp_op(a) + a * 3.0;
    y.backward();
    assert_relative_eq!(a.grad(), 0.5_f64.exp() + 3.0, epsilon = 1e-12);
}

#[test]
fn test_exp_backward_grad_check() {
    let result = check_grad(&[-0.3], |xs| Ok(exp_op(xs[0] * xs[0])), 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Exp grad check failed: {:?}", result.err());
}
