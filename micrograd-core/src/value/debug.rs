// src/value/debug.rs
use crate::value::Value;
use std::fmt;

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        write!(
            f,
            "Value(label='{}', data={}, grad={})",
            node.label.as_deref().unwrap_or(""),
            node.data,
            node.grad
        )
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.graph.nodes_try_borrow() {
            Some(nodes) if self.is_live(&nodes) => {
                let node = &nodes[self.id.0];
                write!(
                    f,
                    "Value(id={}, data={}, grad={}, op={:?})",
                    self.id, node.data, node.grad, node.op
                )
            }
            Some(_) => write!(f, "Value(id={}, <dropped>)", self.id),
            None => write!(f, "Value(id={}, <graph borrowed>)", self.id),
        }
    }
}
