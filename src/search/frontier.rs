//! Frontier strategies: which open node gets expanded next.

use std::{collections::VecDeque, fmt};

use super::{
    node::{Node, NodeId},
    priority_queue::PriorityQueue,
};
use crate::{Error, Result, state::State};

/// Open-node container consulted by [`crate::search::Search`].
///
/// Implementations decide the expansion order and may refuse nodes
/// (see [`DepthLimited`]); a refused node is neither stored nor counted.
pub trait Frontier<S: State> {
    /// Offer a freshly created node.
    fn add(&mut self, id: NodeId, node: &Node<S>);

    /// Take the next node to expand.
    fn remove(&mut self) -> Option<NodeId>;

    /// Number of nodes waiting.
    fn count(&self) -> usize;

    /// Drop every waiting node so the frontier can seed a new search.
    fn clear(&mut self);

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}

/// First in, first out: expands shallowest nodes first.
#[derive(Debug, Default)]
pub struct BreadthFirst {
    queue: VecDeque<NodeId>,
}

impl BreadthFirst {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: State> Frontier<S> for BreadthFirst {
    fn add(&mut self, id: NodeId, _node: &Node<S>) {
        self.queue.push_back(id);
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn count(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn name(&self) -> &'static str {
        "breadth-first"
    }
}

/// Last in, first out: follows the newest branch first.
#[derive(Debug, Default)]
pub struct DepthFirst {
    stack: Vec<NodeId>,
}

impl DepthFirst {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: State> Frontier<S> for DepthFirst {
    fn add(&mut self, id: NodeId, _node: &Node<S>) {
        self.stack.push(id);
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn count(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn name(&self) -> &'static str {
        "depth-first"
    }
}

/// Depth-first, silently discarding nodes deeper than `limit`.
#[derive(Debug)]
pub struct DepthLimited {
    stack: Vec<NodeId>,
    limit: u32,
}

impl DepthLimited {
    pub fn new(limit: u32) -> Self {
        Self {
            stack: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl<S: State> Frontier<S> for DepthLimited {
    fn add(&mut self, id: NodeId, node: &Node<S>) {
        if node.depth <= self.limit {
            self.stack.push(id);
        }
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn count(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn name(&self) -> &'static str {
        "depth-limited"
    }
}

/// Combines a node's path cost so far with its state's heuristic estimate into a priority.
pub type CostCombiner = Box<dyn Fn(f64, f64) -> f64>;

/// Priority-ordered frontier: the node with the lowest combined score is expanded next.
///
/// Ties are broken by insertion order.
pub struct HeuristicFrontier {
    queue: PriorityQueue<NodeId>,
    combine: CostCombiner,
    name: &'static str,
}

impl HeuristicFrontier {
    /// Build a heuristic frontier around a custom scoring hook.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `combine` is `None`.
    pub fn new(name: &'static str, combine: Option<CostCombiner>) -> Result<Self> {
        let combine = combine.ok_or_else(|| {
            Error::configuration(format!("{name} search requires a heuristic hook"))
        })?;
        Ok(Self {
            queue: PriorityQueue::new(),
            combine,
            name,
        })
    }

    /// Greedy best-first: priority is the heuristic estimate alone.
    pub fn best_first() -> Self {
        Self::with_hook("best-first", Box::new(|_cost, estimate| estimate))
    }

    /// A*: priority is path cost so far plus the heuristic estimate.
    ///
    /// With an admissible, consistent heuristic and non-negative step costs the
    /// first goal removed is a cheapest one.
    pub fn a_star() -> Self {
        Self::with_hook("a-star", Box::new(|cost, estimate| cost + estimate))
    }

    fn with_hook(name: &'static str, combine: CostCombiner) -> Self {
        Self {
            queue: PriorityQueue::new(),
            combine,
            name,
        }
    }
}

impl fmt::Debug for HeuristicFrontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeuristicFrontier")
            .field("name", &self.name)
            .field("count", &self.queue.count())
            .finish()
    }
}

impl<S: State> Frontier<S> for HeuristicFrontier {
    fn add(&mut self, id: NodeId, node: &Node<S>) {
        let priority = (self.combine)(node.cost, node.state.heuristic());
        self.queue.enqueue(priority, id);
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.queue.dequeue().ok()
    }

    fn count(&self) -> usize {
        self.queue.count()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search::node::SearchTree, state::Successor};

    #[derive(Debug, Clone, PartialEq)]
    struct Estimate(f64);

    impl State for Estimate {
        fn is_terminal(&self) -> bool {
            false
        }

        fn successors(&self) -> Vec<Successor<Self>> {
            Vec::new()
        }

        fn heuristic(&self) -> f64 {
            self.0
        }
    }

    /// Root plus three children with (step cost, heuristic) = (5, 1), (1, 3), (1, 1).
    fn sample_tree() -> (SearchTree<Estimate>, Vec<NodeId>) {
        let mut tree = SearchTree::new(Estimate(0.0));
        let ids = [(5.0, 1.0), (1.0, 3.0), (1.0, 1.0)]
            .into_iter()
            .map(|(cost, h)| {
                tree.add_child(NodeId::ROOT, Successor::labelled(cost, "step", Estimate(h)))
            })
            .collect();
        (tree, ids)
    }

    fn drain<F: Frontier<Estimate>>(
        frontier: &mut F,
        tree: &SearchTree<Estimate>,
        ids: &[NodeId],
    ) -> Vec<NodeId> {
        for &id in ids {
            frontier.add(id, &tree[id]);
        }
        std::iter::from_fn(|| frontier.remove()).collect()
    }

    #[test]
    fn breadth_first_is_fifo() {
        let (tree, ids) = sample_tree();
        assert_eq!(drain(&mut BreadthFirst::new(), &tree, &ids), ids);
    }

    #[test]
    fn depth_first_is_lifo() {
        let (tree, ids) = sample_tree();
        let mut expected = ids.clone();
        expected.reverse();
        assert_eq!(drain(&mut DepthFirst::new(), &tree, &ids), expected);
    }

    #[test]
    fn depth_limited_discards_deep_nodes() {
        let (mut tree, ids) = sample_tree();
        let deep = tree.add_child(ids[0], Successor::labelled(1.0, "deeper", Estimate(0.0)));
        let mut frontier = DepthLimited::new(1);
        Frontier::<Estimate>::add(&mut frontier, deep, &tree[deep]);
        assert_eq!(Frontier::<Estimate>::count(&frontier), 0);
        Frontier::<Estimate>::add(&mut frontier, ids[0], &tree[ids[0]]);
        assert_eq!(Frontier::<Estimate>::count(&frontier), 1);
    }

    #[test]
    fn best_first_orders_by_heuristic_only() {
        let (tree, ids) = sample_tree();
        let order = drain(&mut HeuristicFrontier::best_first(), &tree, &ids);
        // h = 1, 1 (insertion order), then 3
        assert_eq!(order, vec![ids[0], ids[2], ids[1]]);
    }

    #[test]
    fn a_star_orders_by_cost_plus_heuristic() {
        let (tree, ids) = sample_tree();
        let order = drain(&mut HeuristicFrontier::a_star(), &tree, &ids);
        // f = 6, 4, 2
        assert_eq!(order, vec![ids[2], ids[1], ids[0]]);
    }

    #[test]
    fn heuristic_frontier_without_hook_is_rejected() {
        let result = HeuristicFrontier::new("custom", None);
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn custom_hook_is_used() {
        let (tree, ids) = sample_tree();
        let mut frontier =
            HeuristicFrontier::new("weighted", Some(Box::new(|g, h| g + 10.0 * h))).unwrap();
        // f = 15, 31, 11
        let order = drain(&mut frontier, &tree, &ids);
        assert_eq!(order, vec![ids[2], ids[0], ids[1]]);
        assert_eq!(Frontier::<Estimate>::name(&frontier), "weighted");
    }
}
