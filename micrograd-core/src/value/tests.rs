use crate::arena::Graph;
use crate::autograd::BackwardOp;
use crate::error::MicrogradError;
use crate::value::Value;
use approx::assert_relative_eq;
use std::collections::{HashMap, HashSet};

#[test]
fn test_leaf_defaults() {
    let g = Graph::new();
    let a = g.value(3.0);
    assert_eq!(a.data(), 3.0);
    assert_eq!(a.grad(), 0.0);
    assert!(a.is_leaf());
    assert!(a.operands().is_empty());
    assert_eq!(a.op_tag(), "");
    assert_eq!(a.label(), None);
}

#[test]
fn test_labels_and_display() {
    let g = Graph::new();
    let a = g.labeled(2.0, "a");
    let b = (a * 3.0).with_label("b");
    assert_eq!(a.label().as_deref(), Some("a"));
    assert_eq!(b.label().as_deref(), Some("b"));
    b.backward();
    assert_eq!(a.to_string(), "Value(label='a', data=2, grad=3)");
    assert_eq!(g.value(0.5).to_string(), "Value(label='', data=0.5, grad=0)");
}

#[test]
fn test_identity_not_value_equality() {
    let g = Graph::new();
    let a = g.value(1.0);
    let b = g.value(1.0);
    assert_ne!(a, b);
    assert_eq!(a, a);
    let set: HashSet<_> = [a, b, a].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_literal_round_trip() {
    let g = Graph::new();
    let x = g.value(5.0);
    let left = x + 3.0;
    assert_eq!(left.data(), 8.0);
    left.backward();
    let left_grad = x.grad();

    x.zero_grad();
    let right = 3.0 + x;
    assert_eq!(right.data(), 8.0);
    right.backward();
    assert_eq!(x.grad(), left_grad);
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_reflected_operators_match_forward_ones() {
    let g = Graph::new();
    let x = g.value(4.0);
    assert_relative_eq!((2.0 * x).data(), (x * 2.0).data());
    assert_relative_eq!((10.0 / x).data(), 2.5);
    assert_relative_eq!((x / 10.0).data(), 0.4);
    assert_relative_eq!((1.0 - x).data(), -3.0);
    assert_relative_eq!((x - 1.0).data(), 3.0);
    assert_relative_eq!((-x).data(), -4.0);
}

#[test]
fn test_reflected_sub_and_div_gradients() {
    let g = Graph::new();
    let x = g.value(2.0);
    let y = (1.0 - x) + 8.0 / x;
    y.backward();
    // d/dx (1 - x + 8/x) = -1 - 8/x^2
    assert_relative_eq!(x.grad(), -3.0, epsilon = 1e-12);
}

#[test]
fn test_diamond_sums_paths() {
    let g = Graph::new();
    let a = g.value(-2.0);
    let b = a + a;
    b.backward();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_fan_out_through_intermediate() {
    // b feeds c and d, both feed e.
    let g = Graph::new();
    let a = g.value(3.0);
    let b = a * 2.0;
    let c = b + 1.0;
    let d = b * b;
    let e = c * d;
    e.backward();
    // e = (2a + 1) * 4a^2 = 8a^3 + 4a^2; de/da = 24a^2 + 8a
    assert_relative_eq!(e.data(), 8.0 * 27.0 + 4.0 * 9.0);
    assert_relative_eq!(a.grad(), 24.0 * 9.0 + 24.0);
}

#[test]
fn test_topological_order_puts_operands_first() {
    let g = Graph::new();
    let x = g.value(1.5);
    let y = g.value(-0.5);
    let s = x + y;
    let p = s * x;
    let q = (p + s).tanh();
    let r = q * p + y.exp();

    let order = r.topological_order();
    let position: HashMap<_, _> = order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
    assert_eq!(order.len(), position.len(), "a node appears more than once");
    assert_eq!(order.last(), Some(&r));
    for node in &order {
        for operand in node.operands() {
            assert!(
                position[&operand] < position[node],
                "operand {:?} placed after its consumer {:?}",
                operand,
                node
            );
        }
    }
    for leaf in [x, y] {
        assert!(position.contains_key(&leaf));
    }
}

#[test]
fn test_gradients_final_after_consumers_processed() {
    // Depth >= 3 with a diamond on `s`: processing any node again after the pass
    // would change the answer, so an exact match shows each rule ran once.
    let g = Graph::new();
    let x = g.value(0.5);
    let s = x * x;
    let u = s + 1.0;
    let v = s * 3.0;
    let w = u * v;
    w.backward();
    // w = (x^2 + 1) * 3x^2 = 3x^4 + 3x^2; dw/dx = 12x^3 + 6x
    assert_relative_eq!(x.grad(), 12.0 * 0.125 + 3.0, epsilon = 1e-12);
    // dw/ds = v + 3u
    assert_relative_eq!(s.grad(), v.data() + 3.0 * u.data(), epsilon = 1e-12);
}

#[test]
fn test_backward_accumulates_until_reset() {
    let g = Graph::new();
    let a = g.value(2.0);
    let y = a * 3.0;
    y.backward();
    y.backward();
    assert_eq!(a.grad(), 6.0);
    g.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(y.grad(), 0.0);
    y.backward();
    assert_eq!(a.grad(), 3.0);
}

#[test]
fn test_compound_assignment_rebinds() {
    let g = Graph::new();
    let a = g.value(1.0);
    let mut c = a + 1.0;
    let first = c;
    c += c + 1.0;
    assert_ne!(c, first);
    assert_eq!(c.data(), 5.0);
    c -= 1.0;
    c *= 2.0;
    c /= 4.0;
    assert_eq!(c.data(), 2.0);
}

#[test]
fn test_pow_rejects_node_exponent() {
    let g = Graph::new();
    let a = g.value(2.0);
    let b = g.value(2.0);
    assert!(matches!(a.pow(b), Err(MicrogradError::InvalidOperand { .. })));
    assert_relative_eq!(a.pow(2.0).map(|v| v.data()).unwrap_or(f64::NAN), 4.0);
}

#[test]
fn test_operands_and_op() {
    let g = Graph::new();
    let a = g.value(1.0);
    let b = g.value(2.0);
    let c = a * b;
    assert_eq!(c.op(), BackwardOp::Mul(a.id(), b.id()));
    assert_eq!(c.operands(), vec![a, b]);
    assert!(!c.is_leaf());
}

#[test]
fn test_set_data_updates_leaf() -> Result<(), MicrogradError> {
    let g = Graph::new();
    let w = g.value(1.0);
    w.set_data(0.25)?;
    assert_eq!(w.data(), 0.25);
    assert_eq!((w * 4.0).data(), 1.0);
    Ok(())
}

#[test]
fn test_set_data_rejects_computed_node() {
    let g = Graph::new();
    let w = g.value(1.0);
    let y = w * 4.0;
    assert!(matches!(
        y.set_data(0.0),
        Err(MicrogradError::InvalidOperand { .. })
    ));
    assert_eq!(y.data(), 4.0);
}

#[test]
fn test_checkpoint_rewind_discards_scratch_nodes() {
    let g = Graph::new();
    let w = g.value(1.0);
    let cp = g.checkpoint();
    for _ in 0..3 {
        // d/dw (2w - 1)^2 = 4 * (2w - 1) = 4
        let loss = (w * 2.0 - 1.0).powf(2.0);
        loss.backward();
        g.rewind(cp);
        assert_eq!(g.len(), 1);
    }
    assert_relative_eq!(w.grad(), 12.0);
}

#[test]
fn test_long_chain_does_not_overflow_stack() {
    let g = Graph::new();
    let x = g.value(1.0);
    let mut acc = x;
    for _ in 0..200_000 {
        acc = acc + x;
    }
    acc.backward();
    assert_eq!(x.grad(), 200_001.0);
}

// Nodes pushed after a rewind reuse the dropped slots.
fn rewound_handle(g: &Graph) -> (Value<'_>, Value<'_>) {
    let w = g.value(1.0);
    let cp = g.checkpoint();
    let stale = w * 10.0;
    g.rewind(cp);
    let fresh = g.value(123.0);
    let _ = fresh * 2.0;
    (w, stale)
}

#[test]
#[should_panic(expected = "dropped by Graph::rewind")]
fn test_stale_handle_data_panics_after_slot_reuse() {
    let g = Graph::new();
    let (_, stale) = rewound_handle(&g);
    stale.data();
}

#[test]
#[should_panic(expected = "dropped by Graph::rewind")]
fn test_stale_handle_backward_panics_after_slot_reuse() {
    let g = Graph::new();
    let (_, stale) = rewound_handle(&g);
    stale.backward();
}

#[test]
#[should_panic(expected = "dropped by Graph::rewind")]
fn test_stale_handle_panics_when_slot_is_gone() {
    let g = Graph::new();
    let w = g.value(1.0);
    let cp = g.checkpoint();
    let stale = w + 1.0;
    g.rewind(cp);
    stale.grad();
}

#[test]
fn test_handles_before_checkpoint_survive_rewind() {
    let g = Graph::new();
    let (w, stale) = rewound_handle(&g);
    assert_eq!(w.data(), 1.0);
    (w * 3.0).backward();
    assert_eq!(w.grad(), 3.0);
    assert_eq!(format!("{:?}", stale), format!("Value(id={}, <dropped>)", stale.id()));
}

#[test]
fn test_stale_handle_differs_from_slot_successor() {
    let g = Graph::new();
    let w = g.value(1.0);
    let cp = g.checkpoint();
    let stale = w * 10.0;
    g.rewind(cp);
    let fresh = w * 10.0;
    assert_eq!(stale.id(), fresh.id());
    assert_ne!(stale, fresh);
}

#[test]
fn test_integer_operands() {
    let g = Graph::new();
    let x = g.value(4.0);
    assert_eq!((x + 3).data(), 7.0);
    assert_eq!((x * 2).data(), 8.0);
    assert_eq!((x - 1).data(), 3.0);
    assert_eq!((x / 8).data(), 0.5);
    assert_eq!((2 * x).data(), 8.0);
    assert_eq!((1 - x).data(), -3.0);

    let y = 10 / x + x * 3;
    y.backward();
    // d/dx (10/x + 3x) = -10/x^2 + 3
    assert_relative_eq!(x.grad(), 3.0 - 10.0 / 16.0, epsilon = 1e-12);
}
