use crate::models::{Path, Step};
use super::node::Node;

/// Walks parent links from `goal` back to the root and returns the edges in source→target order.
/// The root's own `(action, state)` is not part of the path.
pub fn reconstruct<S: Clone>(goal: &Node<S>) -> Path<S> {
    let mut steps: Vec<Step<S>> = goal
        .ancestors()
        .take_while(|n| !n.is_root())
        .map(|n| Step { label: n.action().to_string(), state: n.state().clone() })
        .collect();
    steps.reverse();
    Path::from_steps(steps)
}
