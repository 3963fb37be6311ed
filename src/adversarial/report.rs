use serde::{Deserialize, Serialize};

/// Summary of the last adversarial search.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdversarialReport {
    /// Backed-up value of the root, `None` if no move was examined
    pub value: Option<f64>,
    pub nodes_created: usize,
    pub cancelled: bool,
    pub depth: u32,
}
