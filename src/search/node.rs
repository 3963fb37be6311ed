//! Search-tree nodes stored in an arena.
//!
//! Nodes refer to each other by [`NodeId`]. A parent id is a navigation aid
//! for walking back to the root; the [`SearchTree`] owns every node and drops
//! them all together when the search that built it is finished with it.

use std::ops::{Index, IndexMut};

use crate::state::{State, Successor};

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

/// A node in the search tree
#[derive(Debug, Clone)]
pub struct Node<S> {
    pub state: S,
    /// Parent node id (None for root)
    pub parent: Option<NodeId>,
    /// Transition that produced this node (None for root)
    pub successor: Option<Successor<S>>,
    /// Accumulated path cost, or the backed-up game value in adversarial search.
    pub cost: f64,
    pub depth: u32,
    pub on_solution_path: bool,
    pub children: Vec<NodeId>,
}

impl<S> Node<S> {
    fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            successor: None,
            cost: 0.0,
            depth: 0,
            on_solution_path: false,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena holding every node created by one search invocation.
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    nodes: Vec<Node<S>>,
}

impl<S: State> SearchTree<S> {
    /// Create a tree containing only the root for `state`.
    #[must_use]
    pub fn new(state: S) -> Self {
        Self {
            nodes: vec![Node::root(state)],
        }
    }

    #[must_use]
    pub fn root(&self) -> &Node<S> {
        &self.nodes[NodeId::ROOT.0]
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id.0)
    }

    /// Add a child reached through `successor`, accumulating its cost onto the parent's.
    pub fn add_child(&mut self, parent: NodeId, successor: Successor<S>) -> NodeId {
        let cost = self.nodes[parent.0].cost + successor.cost;
        self.add_child_with_cost(parent, successor, cost)
    }

    /// Add a child with an explicit `cost` instead of the accumulated path cost.
    pub fn add_child_with_cost(
        &mut self,
        parent: NodeId,
        successor: Successor<S>,
        cost: f64,
    ) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            state: successor.state.clone(),
            parent: Some(parent),
            successor: Some(successor),
            cost,
            depth,
            on_solution_path: false,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Number of nodes in the tree, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids from the root down to `id`, inclusive.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self.nodes[id.0].depth as usize + 1);
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.nodes[node_id.0].parent;
        }
        path.reverse();
        path
    }

    /// The transitions leading from the root to `id`, in start-to-goal order.
    #[must_use]
    pub fn solution(&self, id: NodeId) -> Vec<Successor<S>> {
        self.path_to(id)
            .into_iter()
            .filter_map(|node_id| self.nodes[node_id.0].successor.clone())
            .collect()
    }

    /// Flag every node from the root to `id` as lying on the solution path.
    pub fn mark_path(&mut self, id: NodeId) {
        for node_id in self.path_to(id) {
            self.nodes[node_id.0].on_solution_path = true;
        }
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}

impl<S> Index<NodeId> for SearchTree<S> {
    type Output = Node<S>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl<S> IndexMut<NodeId> for SearchTree<S> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}
