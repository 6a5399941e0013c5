//! Depth-first traversal over the generic node contract

use crate::node::Node;

/// Callbacks invoked by [`walk`]
pub trait Visitor {
    /// Called before the node's children are visited
    fn enter(&mut self, _node: &Node) {}

    /// Called after all of the node's children were visited
    fn leave(&mut self, _node: &Node) {}
}

/// Visits `node` and everything below it, children in `sub_node_names` order
pub fn walk<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    visitor.enter(node);
    for child in node.children() {
        walk(child, visitor);
    }
    visitor.leave(node);
}

pub fn walk_all<V: Visitor + ?Sized>(nodes: &[Node], visitor: &mut V) {
    for node in nodes {
        walk(node, visitor);
    }
}

struct ForEach<F>(F);

impl<F: FnMut(&Node)> Visitor for ForEach<F> {
    fn enter(&mut self, node: &Node) {
        (self.0)(node);
    }
}

/// Calls `f` on every node in pre-order
pub fn for_each_node(node: &Node, f: impl FnMut(&Node)) {
    walk(node, &mut ForEach(f));
}
