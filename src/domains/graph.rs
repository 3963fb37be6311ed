//! Explicit weighted directed graph.
//!
//! Vertices are named; each may carry a heuristic estimate and be marked as
//! a goal. States are cheap handles (shared graph + vertex index).

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    Error, Result,
    identifiers::ActionIdAllocator,
    state::{Action, State, Successor},
};

#[derive(Debug)]
struct Edge {
    to: usize,
    cost: f64,
    action: Action,
}

#[derive(Debug, Default)]
struct GraphData {
    names: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Vec<Edge>>,
    goals: Vec<bool>,
    estimates: Vec<f64>,
}

impl GraphData {
    fn vertex(&mut self, name: &str) -> usize {
        if let Some(&index) = self.index.get(name) {
            return index;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), index);
        self.edges.push(Vec::new());
        self.goals.push(false);
        self.estimates.push(0.0);
        index
    }
}

/// Builder for a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    data: GraphData,
    ids: ActionIdAllocator,
}

impl GraphBuilder {
    /// Declare a vertex without edges.
    pub fn vertex(mut self, name: &str) -> Self {
        self.data.vertex(name);
        self
    }

    /// Add a directed edge, creating either endpoint if needed.
    ///
    /// Successors are generated in the order edges were added.
    pub fn edge(mut self, from: &str, to: &str, cost: f64) -> Self {
        let source = self.data.vertex(from);
        let target = self.data.vertex(to);
        let action = Action::new(format!("{from}->{to}"))
            .with_id(self.ids.allocate())
            .between(from, to);
        self.data.edges[source].push(Edge {
            to: target,
            cost,
            action,
        });
        self
    }

    pub fn goal(mut self, name: &str) -> Self {
        let index = self.data.vertex(name);
        self.data.goals[index] = true;
        self
    }

    /// Set the heuristic estimate reported by `name`'s state.
    pub fn estimate(mut self, name: &str, estimate: f64) -> Self {
        let index = self.data.vertex(name);
        self.data.estimates[index] = estimate;
        self
    }

    pub fn build(self) -> Graph {
        Graph {
            data: Arc::new(self.data),
        }
    }
}

/// Immutable graph shared by all of its states.
#[derive(Debug, Clone)]
pub struct Graph {
    data: Arc<GraphData>,
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// State positioned at vertex `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if the graph has no such vertex.
    pub fn start(&self, name: &str) -> Result<GraphState> {
        let vertex = self
            .data
            .index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownVertex {
                name: name.to_string(),
            })?;
        Ok(GraphState {
            graph: Arc::clone(&self.data),
            vertex,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.data.names.len()
    }

    /// Vertex names in declaration order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.data.names.iter().map(String::as_str)
    }
}

/// A position in a [`Graph`].
#[derive(Clone)]
pub struct GraphState {
    graph: Arc<GraphData>,
    vertex: usize,
}

impl GraphState {
    pub fn name(&self) -> &str {
        &self.graph.names[self.vertex]
    }

    pub fn index(&self) -> usize {
        self.vertex
    }
}

impl PartialEq for GraphState {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && Arc::ptr_eq(&self.graph, &other.graph)
    }
}

impl fmt::Debug for GraphState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GraphState").field(&self.name()).finish()
    }
}

impl State for GraphState {
    fn is_terminal(&self) -> bool {
        self.graph.goals[self.vertex]
    }

    fn successors(&self) -> Vec<Successor<Self>> {
        self.graph.edges[self.vertex]
            .iter()
            .map(|edge| {
                Successor::new(
                    edge.cost,
                    edge.action.clone(),
                    GraphState {
                        graph: Arc::clone(&self.graph),
                        vertex: edge.to,
                    },
                )
            })
            .collect()
    }

    fn heuristic(&self) -> f64 {
        self.graph.estimates[self.vertex]
    }
}
