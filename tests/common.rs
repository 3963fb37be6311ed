//! Common test utilities for the statesearch test suite.
//!
//! Random problem generators plus brute-force reference answers used to
//! check the search engines.

#![allow(dead_code)]

use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use rand::{Rng, rngs::StdRng};
use statesearch::{
    State,
    domains::{
        game_tree::{GameTree, GameTreeBuilder, PositionRef},
        graph::{Graph, GraphState},
    },
};

/// Random game tree with up to `max_branching` moves per position and at
/// most `depth` plies. Every position gets an integer utility in -10..=10;
/// roughly one interior position in six is cut short into a leaf.
pub fn random_game_tree(
    rng: &mut StdRng,
    max_branching: usize,
    depth: u32,
    maximizer_at_root: bool,
) -> GameTree {
    let mut builder = GameTree::builder(maximizer_at_root);
    let root = builder.root();
    grow(&mut builder, rng, root, "", max_branching, depth);
    builder.build()
}

fn grow(
    builder: &mut GameTreeBuilder,
    rng: &mut StdRng,
    parent: PositionRef,
    path: &str,
    max_branching: usize,
    remaining: u32,
) {
    if remaining == 0 {
        return;
    }
    let branching = rng.random_range(1..=max_branching);
    for branch in 0..branching {
        let label = if path.is_empty() {
            branch.to_string()
        } else {
            format!("{path}.{branch}")
        };
        let utility = f64::from(rng.random_range(-10..=10));
        let child = builder.child(parent, &label, utility);
        if rng.random_range(0..6) != 0 {
            grow(builder, rng, child, &label, max_branching, remaining - 1);
        }
    }
}

/// A weighted edge list over vertices `v0..v{n-1}`.
pub type Edges = Vec<(usize, usize, f64)>;

/// Random acyclic edge list with start `v0` and goal `v{n-1}`. A chain
/// `v0 -> v1 -> ...` keeps the goal reachable; extra forward edges add
/// shortcuts of random cost.
pub fn random_dag(rng: &mut StdRng, vertices: usize, extra_edges: usize) -> Edges {
    let mut edges: Edges = (0..vertices - 1)
        .map(|i| (i, i + 1, f64::from(rng.random_range(1..=4))))
        .collect();
    for _ in 0..extra_edges {
        let from = rng.random_range(0..vertices - 1);
        let to = rng.random_range(from + 1..vertices);
        edges.push((from, to, f64::from(rng.random_range(1..=9))));
    }
    edges
}

/// Unit-cost edge list like [`random_dag`] plus `back_edges` edges
/// pointing backwards, so the graph has cycles.
pub fn random_cyclic(
    rng: &mut StdRng,
    vertices: usize,
    extra_edges: usize,
    back_edges: usize,
) -> Edges {
    let mut edges: Edges = random_dag(rng, vertices, extra_edges)
        .into_iter()
        .map(|(from, to, _)| (from, to, 1.0))
        .collect();
    for _ in 0..back_edges {
        let from = rng.random_range(1..vertices);
        let to = rng.random_range(0..from);
        edges.push((from, to, 1.0));
    }
    edges
}

/// Build the graph for `edges` with goal `v{n-1}`, optionally attaching a
/// heuristic estimate to every vertex.
pub fn build_graph(vertices: usize, edges: &Edges, estimates: Option<&[f64]>) -> Graph {
    let mut builder = Graph::builder();
    for index in 0..vertices {
        builder = builder.vertex(&vertex_name(index));
    }
    for &(from, to, cost) in edges {
        builder = builder.edge(&vertex_name(from), &vertex_name(to), cost);
    }
    if let Some(estimates) = estimates {
        for (index, &estimate) in estimates.iter().enumerate() {
            builder = builder.estimate(&vertex_name(index), estimate);
        }
    }
    builder.goal(&vertex_name(vertices - 1)).build()
}

pub fn vertex_name(index: usize) -> String {
    format!("v{index}")
}

/// Fewest transitions from `start` to any terminal vertex.
pub fn fewest_actions(start: &GraphState) -> Option<usize> {
    let mut seen = HashSet::from([start.index()]);
    let mut queue = VecDeque::from([(start.clone(), 0usize)]);
    while let Some((state, steps)) = queue.pop_front() {
        if state.is_terminal() {
            return Some(steps);
        }
        for successor in state.successors() {
            if seen.insert(successor.state.index()) {
                queue.push_back((successor.state, steps + 1));
            }
        }
    }
    None
}

#[derive(PartialEq)]
struct Entry(f64, usize);

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.0.total_cmp(&self.0).then(other.1.cmp(&self.1))
    }
}

/// Cheapest total cost from `start` to any terminal vertex (Dijkstra).
pub fn cheapest_cost(start: &GraphState) -> Option<f64> {
    let mut best: HashMap<usize, f64> = HashMap::from([(start.index(), 0.0)]);
    let mut states: HashMap<usize, GraphState> = HashMap::from([(start.index(), start.clone())]);
    let mut heap = BinaryHeap::from([Entry(0.0, start.index())]);

    while let Some(Entry(cost, index)) = heap.pop() {
        if best.get(&index).is_some_and(|&known| cost > known) {
            continue;
        }
        let state = states[&index].clone();
        if state.is_terminal() {
            return Some(cost);
        }
        for successor in state.successors() {
            let next = successor.state.index();
            let candidate = cost + successor.cost;
            if best.get(&next).is_none_or(|&known| candidate < known) {
                best.insert(next, candidate);
                states.insert(next, successor.state);
                heap.push(Entry(candidate, next));
            }
        }
    }
    None
}

/// Follow named actions from `initial`; `None` if a name has no matching successor.
pub fn replay<S: State>(initial: S, actions: &[String]) -> Option<S> {
    actions.iter().try_fold(initial, |state, name| {
        state
            .successors()
            .into_iter()
            .find(|successor| &successor.action.name == name)
            .map(|successor| successor.state)
    })
}
