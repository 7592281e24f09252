use crate::arena::Graph;
use crate::node::{Node, NodeId};

/// Builds a topological sort of the operand graph reachable from `root`.
///
/// Depth-first post-order: a node is marked visited before its operands are
/// explored and is appended only once, after all of its operands. Reading
/// `sorted_list` backwards therefore visits every consumer before its operands.
///
/// The traversal keeps its own stack instead of recursing, so long chains do not
/// exhaust the thread stack. `visited` is indexed by `NodeId` and must cover every
/// node reachable from `root`.
pub(crate) fn build_topo(
    nodes: &[Node],
    root: NodeId,
    visited: &mut [bool],
    sorted_list: &mut Vec<NodeId>,
) {
    // (node, operands already pushed)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];
    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            log::trace!("[build_topo] Adding node {} to sorted_list", id);
            sorted_list.push(id);
            continue;
        }
        if visited[id.0] {
            log::trace!("[build_topo] Node {} already visited.", id);
            continue;
        }
        visited[id.0] = true;
        stack.push((id, true));
        // Reversed so operands are explored in declaration order.
        for operand in nodes[id.0].op.operands().into_iter().rev() {
            debug_assert!(operand < id, "operand {} does not precede {}", operand, id);
            if !visited[operand.0] {
                stack.push((operand, false));
            }
        }
    }
}

/// Returns the topological order (operands first, `root` last) of `root`'s ancestry.
pub(crate) fn topological_order(graph: &Graph, root: NodeId) -> Vec<NodeId> {
    let nodes = graph.nodes();
    let mut visited = vec![false; nodes.len()];
    let mut sorted_list = Vec::new();
    build_topo(&nodes, root, &mut visited, &mut sorted_list);
    sorted_list
}

/// Runs reverse-mode differentiation from `root`.
///
/// Seeds `root`'s gradient with 1, then applies each node's local rule exactly once,
/// walking the topological order backwards. Gradients accumulate into whatever is
/// already stored; reset them between passes if that is not wanted.
pub(crate) fn backward(graph: &Graph, root: NodeId) {
    let mut nodes = graph.nodes_mut();
    let mut visited = vec![false; nodes.len()];
    let mut sorted_list = Vec::with_capacity(root.0 + 1);
    build_topo(&nodes, root, &mut visited, &mut sorted_list);
    log::debug!(
        "backward: root {} reaches {} of {} nodes",
        root,
        sorted_list.len(),
        nodes.len()
    );

    nodes[root.0].grad = 1.0;
    for &id in sorted_list.iter().rev() {
        let op = nodes[id.0].op;
        op.propagate(&mut nodes, id);
    }
}
