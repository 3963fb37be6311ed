//! Explicit two-player game trees.
//!
//! Every position stores its own utility; positions without children are
//! terminal. The player to move alternates with depth, starting with the
//! side chosen for the root.

use std::{fmt, sync::Arc};

use crate::state::{AdversarialState, State, Successor};

#[derive(Debug, Clone)]
struct Position {
    label: String,
    utility: f64,
    depth: u32,
    children: Vec<usize>,
}

/// Handle of a position while the tree is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRef(usize);

/// Builder for a [`GameTree`].
#[derive(Debug)]
pub struct GameTreeBuilder {
    positions: Vec<Position>,
    maximizer_at_root: bool,
}

impl GameTreeBuilder {
    pub fn root(&self) -> PositionRef {
        PositionRef(0)
    }

    /// Attach a position below `parent`; the move leading to it is labelled `label`.
    pub fn child(&mut self, parent: PositionRef, label: &str, utility: f64) -> PositionRef {
        let index = self.positions.len();
        let depth = self.positions[parent.0].depth + 1;
        self.positions.push(Position {
            label: label.to_string(),
            utility,
            depth,
            children: Vec::new(),
        });
        self.positions[parent.0].children.push(index);
        PositionRef(index)
    }

    /// Set the utility of an existing position.
    pub fn set_utility(&mut self, position: PositionRef, utility: f64) {
        self.positions[position.0].utility = utility;
    }

    pub fn build(self) -> GameTree {
        GameTree {
            positions: Arc::new(self.positions),
            maximizer_at_root: self.maximizer_at_root,
        }
    }
}

/// Immutable game tree shared by all of its positions.
#[derive(Debug, Clone)]
pub struct GameTree {
    positions: Arc<Vec<Position>>,
    maximizer_at_root: bool,
}

impl GameTree {
    /// Start building a tree whose root has utility 0.
    pub fn builder(maximizer_at_root: bool) -> GameTreeBuilder {
        GameTreeBuilder {
            positions: vec![Position {
                label: "root".to_string(),
                utility: 0.0,
                depth: 0,
                children: Vec::new(),
            }],
            maximizer_at_root,
        }
    }

    /// Complete tree with `branching` moves per position and `depth` plies.
    ///
    /// Leaves take their utilities from `leaves` in left-to-right order,
    /// cycling if there are fewer values than leaves. Interior positions
    /// have utility 0. Move labels spell the path, e.g. `"0.2.1"`.
    pub fn uniform(branching: usize, depth: u32, leaves: &[f64], maximizer_at_root: bool) -> Self {
        let mut builder = Self::builder(maximizer_at_root);
        let mut layer = vec![(builder.root(), String::new())];
        let mut next_leaf = 0;

        for ply in 0..depth {
            let mut next_layer = Vec::with_capacity(layer.len() * branching);
            for (parent, path) in &layer {
                for branch in 0..branching {
                    let label = if path.is_empty() {
                        branch.to_string()
                    } else {
                        format!("{path}.{branch}")
                    };
                    let utility = if ply + 1 == depth && !leaves.is_empty() {
                        let value = leaves[next_leaf % leaves.len()];
                        next_leaf += 1;
                        value
                    } else {
                        0.0
                    };
                    let child = builder.child(*parent, &label, utility);
                    next_layer.push((child, label));
                }
            }
            layer = next_layer;
        }

        builder.build()
    }

    pub fn root(&self) -> GamePosition {
        GamePosition {
            tree: self.clone(),
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A position in a [`GameTree`].
#[derive(Clone)]
pub struct GamePosition {
    tree: GameTree,
    index: usize,
}

impl GamePosition {
    fn position(&self) -> &Position {
        &self.tree.positions[self.index]
    }

    /// Label of the move that led here ("root" for the root).
    pub fn label(&self) -> &str {
        &self.position().label
    }

    pub fn depth(&self) -> u32 {
        self.position().depth
    }
}

impl PartialEq for GamePosition {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && Arc::ptr_eq(&self.tree.positions, &other.tree.positions)
    }
}

impl fmt::Debug for GamePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamePosition")
            .field("label", &self.label())
            .field("utility", &self.position().utility)
            .finish()
    }
}

impl State for GamePosition {
    fn is_terminal(&self) -> bool {
        self.position().children.is_empty()
    }

    fn successors(&self) -> Vec<Successor<Self>> {
        self.position()
            .children
            .iter()
            .map(|&index| {
                let child = GamePosition {
                    tree: self.tree.clone(),
                    index,
                };
                Successor::labelled(1.0, child.label().to_string(), child)
            })
            .collect()
    }
}

impl AdversarialState for GamePosition {
    fn utility(&self) -> f64 {
        self.position().utility
    }

    fn player_to_move(&self) -> bool {
        self.tree.maximizer_at_root == self.depth().is_multiple_of(2)
    }

    fn reset(&self) -> Self {
        self.tree.root()
    }
}
