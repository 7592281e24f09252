use crate::arena::Graph;
use crate::autograd::check_grad;
use crate::ops::arithmetic::sub_op;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward_backward() {
    let g = Graph::new();
    let a = g.value(1.0);
    let b = g.value(4.0);
    let c = sub_op(a, b);
    assert_relative_eq!(c.data(), -3.0);
    c.backward();
    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero() {
    let g = Graph::new();
    let a = g.value(7.0);
    let c = sub_op(a, a);
    assert_relative_eq!(c.data(), 0.0);
    c.backward();
    assert_relative_eq!(a.grad(), 0.0);
}

#[test]
fn test_sub_backward_grad_check() {
    let result = check_grad(&[0.1, 2.0], |xs| Ok(sub_op(xs[0], xs[1])), 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Sub grad check failed: {:?}", result.err());
}
