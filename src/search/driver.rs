//! The generic graph-search loop shared by every frontier strategy.

use log::{debug, trace};

use super::{
    frontier::{BreadthFirst, DepthFirst, DepthLimited, Frontier, HeuristicFrontier},
    node::{NodeId, SearchTree},
    outcome::{SearchOutcome, SearchReport, SearchStats},
};
use crate::{
    Error, Result,
    adapters::NoopObserver,
    config::SearchConfig,
    ports::{NodeVisited, SearchObserver, Visit},
    state::{State, Successor},
};

/// Path-finding search over a [`State`] graph.
///
/// The frontier decides the flavour: breadth-first, depth-first,
/// depth-limited, greedy best-first or A*. One `Search` may run many
/// searches one after another; each `find` discards the previous tree.
///
/// # Examples
///
/// ```
/// use statesearch::{Search, domains::graph::Graph};
///
/// let graph = Graph::builder()
///     .edge("A", "B", 1.0)
///     .edge("A", "C", 1.0)
///     .edge("B", "D", 1.0)
///     .edge("C", "D", 1.0)
///     .goal("D")
///     .build();
///
/// let mut search = Search::breadth_first();
/// assert!(search.find(graph.start("A").unwrap()).unwrap());
/// assert_eq!(search.solution().len(), 2);
/// ```
pub struct Search<S: State> {
    frontier: Option<Box<dyn Frontier<S>>>,
    avoid_repetition: bool,
    tree: Option<SearchTree<S>>,
    solution: Vec<Successor<S>>,
    outcome: SearchOutcome,
    stats: SearchStats,
}

impl<S: State> Search<S> {
    /// A search with no frontier; `find` fails until one is set.
    pub fn new() -> Self {
        Self {
            frontier: None,
            avoid_repetition: false,
            tree: None,
            solution: Vec::new(),
            outcome: SearchOutcome::Idle,
            stats: SearchStats::default(),
        }
    }

    pub fn with_frontier(frontier: Box<dyn Frontier<S>>) -> Self {
        let mut search = Self::new();
        search.frontier = Some(frontier);
        search
    }

    pub fn breadth_first() -> Self {
        Self::with_frontier(Box::new(BreadthFirst::new()))
    }

    pub fn depth_first() -> Self {
        Self::with_frontier(Box::new(DepthFirst::new()))
    }

    pub fn depth_limited(limit: u32) -> Self {
        Self::with_frontier(Box::new(DepthLimited::new(limit)))
    }

    pub fn best_first() -> Self {
        Self::with_frontier(Box::new(HeuristicFrontier::best_first()))
    }

    pub fn a_star() -> Self {
        Self::with_frontier(Box::new(HeuristicFrontier::a_star()))
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        let mut search = Self::new();
        search.frontier = config.strategy.map(|kind| kind.build());
        search.avoid_repetition = config.avoid_repetition;
        search
    }

    /// Suppress successors whose state has already been generated.
    pub fn with_avoid_repetition(mut self, avoid_repetition: bool) -> Self {
        self.avoid_repetition = avoid_repetition;
        self
    }

    pub fn set_frontier(&mut self, frontier: Box<dyn Frontier<S>>) {
        self.frontier = Some(frontier);
    }

    /// Search from `initial` without an observer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] when no frontier is configured.
    pub fn find(&mut self, initial: S) -> Result<bool> {
        self.find_with(initial, &mut NoopObserver)
    }

    /// Search from `initial`, raising `observer` before each non-root node is examined.
    ///
    /// Returns `Ok(true)` when a terminal state was reached; the transitions
    /// leading to it are then available from [`solution`](Self::solution).
    /// `Ok(false)` means the frontier was exhausted or the observer
    /// cancelled; [`outcome`](Self::outcome) tells which.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] when no frontier is configured. No
    /// work is done and the previous result is left untouched.
    pub fn find_with(&mut self, initial: S, observer: &mut dyn SearchObserver<S>) -> Result<bool> {
        let Some(frontier) = self.frontier.as_deref_mut() else {
            return Err(Error::InvalidOperation {
                message: "search has no frontier strategy configured".to_string(),
            });
        };

        debug!(
            "{} search started (avoid_repetition={})",
            frontier.name(),
            self.avoid_repetition
        );

        let mut run = Run::new(initial, self.avoid_repetition);
        let outcome = run.execute(frontier, observer);
        frontier.clear();

        debug!(
            "{} search {}: {} expansions, {} nodes",
            frontier.name(),
            outcome,
            run.stats.expansions,
            run.stats.nodes_created
        );

        self.solution = match (outcome, run.goal) {
            (SearchOutcome::Succeeded, Some(goal)) => {
                run.tree.mark_path(goal);
                run.tree.solution(goal)
            }
            _ => Vec::new(),
        };
        self.outcome = outcome;
        self.stats = run.stats;
        self.tree = Some(run.tree);
        Ok(outcome.is_success())
    }

    /// Transitions from the initial state to the goal, empty unless the last search succeeded.
    pub fn solution(&self) -> &[Successor<S>] {
        &self.solution
    }

    /// State reached after each transition of the solution.
    pub fn solution_states(&self) -> impl Iterator<Item = &S> {
        self.solution.iter().map(|successor| &successor.state)
    }

    /// Summed step cost of the solution.
    pub fn solution_cost(&self) -> f64 {
        self.solution.iter().map(|successor| successor.cost).sum()
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Node tree built by the last `find`, kept until the next one.
    pub fn tree(&self) -> Option<&SearchTree<S>> {
        self.tree.as_ref()
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.frontier.as_deref().map(|frontier| frontier.name())
    }

    pub fn report(&self) -> SearchReport {
        SearchReport {
            strategy: self.strategy_name().unwrap_or("none").to_string(),
            outcome: self.outcome,
            stats: self.stats,
            actions: self
                .solution
                .iter()
                .map(|successor| successor.action.name.clone())
                .collect(),
            cost: self.solution_cost(),
        }
    }
}

impl<S: State> Default for Search<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Working set of one `find` call.
struct Run<S: State> {
    tree: SearchTree<S>,
    closed: Option<Vec<S>>,
    goal: Option<NodeId>,
    stats: SearchStats,
}

impl<S: State> Run<S> {
    fn new(initial: S, avoid_repetition: bool) -> Self {
        Self {
            tree: SearchTree::new(initial),
            closed: avoid_repetition.then(Vec::new),
            goal: None,
            stats: SearchStats {
                nodes_created: 1,
                ..SearchStats::default()
            },
        }
    }

    fn execute(
        &mut self,
        frontier: &mut dyn Frontier<S>,
        observer: &mut dyn SearchObserver<S>,
    ) -> SearchOutcome {
        frontier.clear();
        frontier.add(NodeId::ROOT, self.tree.root());

        while frontier.count() > 0 {
            let Some(id) = frontier.remove() else {
                break;
            };

            if self.notify(id, observer).is_cancel() {
                return SearchOutcome::Cancelled;
            }

            if self.tree[id].state.is_terminal() {
                self.goal = Some(id);
                return SearchOutcome::Succeeded;
            }

            self.expand(id, frontier);
        }

        SearchOutcome::Exhausted
    }

    fn notify(&self, id: NodeId, observer: &mut dyn SearchObserver<S>) -> Visit {
        let node = &self.tree[id];
        let (Some(parent), Some(successor)) = (node.parent, node.successor.as_ref()) else {
            return Visit::Continue;
        };
        observer.on_node_visited(&NodeVisited {
            state: &self.tree[parent].state,
            successor,
            cost: node.cost,
            depth: node.depth,
        })
    }

    fn expand(&mut self, id: NodeId, frontier: &mut dyn Frontier<S>) {
        self.stats.expansions += 1;
        let successors = self.tree[id].state.successors();
        trace!(
            "expanding node {} at depth {} ({} successors)",
            id.value(),
            self.tree[id].depth,
            successors.len()
        );

        for successor in successors {
            if let Some(closed) = self.closed.as_mut() {
                if closed.contains(&successor.state) {
                    continue;
                }
                closed.push(successor.state.clone());
            }

            let child = self.tree.add_child(id, successor);
            let node = &self.tree[child];
            self.stats.nodes_created += 1;
            self.stats.max_depth = self.stats.max_depth.max(node.depth);
            frontier.add(child, node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::{ExpansionLimit, VisitLog},
        domains::graph::{Graph, GraphState},
    };

    fn diamond() -> Graph {
        Graph::builder()
            .edge("A", "B", 1.0)
            .edge("A", "C", 1.0)
            .edge("B", "D", 1.0)
            .edge("C", "D", 1.0)
            .goal("D")
            .build()
    }

    fn start(graph: &Graph) -> GraphState {
        graph.start("A").unwrap()
    }

    #[test]
    fn find_without_strategy_is_invalid_operation() {
        let graph = diamond();
        let mut search: Search<GraphState> = Search::new();
        let result = search.find(start(&graph));
        assert!(matches!(result, Err(Error::InvalidOperation { .. })));
        assert_eq!(search.outcome(), SearchOutcome::Idle);
        assert!(search.tree().is_none());
    }

    #[test]
    fn breadth_first_solves_diamond_in_two_actions() {
        let graph = diamond();
        let mut search = Search::breadth_first();
        assert!(search.find(start(&graph)).unwrap());
        assert_eq!(search.outcome(), SearchOutcome::Succeeded);
        let names: Vec<_> = search.report().actions;
        assert_eq!(names, ["A->B", "B->D"]);
        assert_eq!(search.solution_cost(), 2.0);
    }

    #[test]
    fn depth_limited_search_fails_when_goal_is_too_deep() {
        let graph = diamond();
        let mut search = Search::depth_limited(1);
        assert!(!search.find(start(&graph)).unwrap());
        assert_eq!(search.outcome(), SearchOutcome::Exhausted);
        assert!(search.solution().is_empty());

        let mut search = Search::depth_limited(2);
        assert!(search.find(start(&graph)).unwrap());
    }

    #[test]
    fn root_goal_yields_empty_solution() {
        let graph = diamond();
        let mut search = Search::depth_first();
        assert!(search.find(graph.start("D").unwrap()).unwrap());
        assert!(search.solution().is_empty());
        assert_eq!(search.stats().expansions, 0);
    }

    #[test]
    fn observer_sees_every_non_root_node_with_parent_state() {
        let graph = diamond();
        let mut search = Search::breadth_first();
        let mut parents = Vec::new();
        let mut observer = |event: &NodeVisited<'_, GraphState>| {
            parents.push((event.state.name().to_string(), event.depth, event.cost));
            Visit::Continue
        };
        assert!(search.find_with(start(&graph), &mut observer).unwrap());
        // B, C, then D via B
        assert_eq!(
            parents,
            [
                ("A".to_string(), 1, 1.0),
                ("A".to_string(), 1, 1.0),
                ("B".to_string(), 2, 2.0)
            ]
        );
    }

    #[test]
    fn cancellation_stops_node_creation() {
        let graph = diamond();
        let mut search = Search::breadth_first();
        let mut limit = ExpansionLimit::new(0);
        assert!(!search.find_with(start(&graph), &mut limit).unwrap());
        assert_eq!(search.outcome(), SearchOutcome::Cancelled);
        // root expanded into B and C, then B's visit cancelled before expansion
        assert_eq!(search.stats().nodes_created, 3);
        assert_eq!(search.tree().map(SearchTree::len), Some(3));
        assert_eq!(limit.visited(), 1);
    }

    #[test]
    fn avoid_repetition_suppresses_duplicate_states() {
        let graph = diamond();
        let mut plain = Search::breadth_first();
        plain.find(start(&graph)).unwrap();

        let mut pruned = Search::breadth_first().with_avoid_repetition(true);
        pruned.find(start(&graph)).unwrap();

        let mut log = VisitLog::new();
        let mut exhaustive = Search::depth_first().with_avoid_repetition(true);
        exhaustive.find_with(start(&graph), &mut log).unwrap();

        // D is generated once from B, and C's copy of D is suppressed
        assert_eq!(pruned.stats().nodes_created, 4);
        assert!(plain.stats().nodes_created >= pruned.stats().nodes_created);
        assert!(log.len() <= 3);
    }

    #[test]
    fn solution_path_is_flagged_in_tree() {
        let graph = diamond();
        let mut search = Search::a_star();
        assert!(search.find(start(&graph)).unwrap());
        let tree = search.tree().unwrap();
        let flagged = tree.iter().filter(|(_, node)| node.on_solution_path).count();
        assert_eq!(flagged, 3);
    }

    #[test]
    fn search_is_reusable() {
        let graph = diamond();
        let mut search = Search::breadth_first();
        assert!(search.find(start(&graph)).unwrap());
        let island = Graph::builder().vertex("X").build();
        assert!(!search.find(island.start("X").unwrap()).unwrap());
        assert_eq!(search.outcome(), SearchOutcome::Exhausted);
        assert!(search.solution().is_empty());
        assert!(search.find(start(&graph)).unwrap());
        assert_eq!(search.solution().len(), 2);
    }
}
