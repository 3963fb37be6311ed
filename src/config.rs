//! Configuration types for building searches.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    search::frontier::{BreadthFirst, DepthFirst, DepthLimited, Frontier, HeuristicFrontier},
    state::State,
};

/// Frontier ordering for path-finding search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StrategyKind {
    BreadthFirst,
    DepthFirst,
    DepthLimited { limit: u32 },
    BestFirst,
    AStar,
}

impl StrategyKind {
    /// Build a fresh frontier of this kind.
    pub fn build<S: State>(self) -> Box<dyn Frontier<S>> {
        match self {
            StrategyKind::BreadthFirst => Box::new(BreadthFirst::new()),
            StrategyKind::DepthFirst => Box::new(DepthFirst::new()),
            StrategyKind::DepthLimited { limit } => Box::new(DepthLimited::new(limit)),
            StrategyKind::BestFirst => Box::new(HeuristicFrontier::best_first()),
            StrategyKind::AStar => Box::new(HeuristicFrontier::a_star()),
        }
    }

    /// Whether the strategy consults [`State::heuristic`].
    pub fn is_informed(self) -> bool {
        matches!(self, StrategyKind::BestFirst | StrategyKind::AStar)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::BreadthFirst => f.write_str("breadth-first"),
            StrategyKind::DepthFirst => f.write_str("depth-first"),
            StrategyKind::DepthLimited { limit } => write!(f, "depth-limited:{limit}"),
            StrategyKind::BestFirst => f.write_str("best-first"),
            StrategyKind::AStar => f.write_str("a-star"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().to_ascii_lowercase();
        let (name, argument) = match normalised.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (normalised.as_str(), None),
        };
        let parse_error = || Error::ParseStrategy {
            input: s.to_string(),
            expected: "breadth-first/bfs, depth-first/dfs, depth-limited:<limit>/dls:<limit>, \
                       best-first/greedy, a-star/astar"
                .to_string(),
        };

        let kind = match (name, argument) {
            ("breadth-first" | "bfs", None) => StrategyKind::BreadthFirst,
            ("depth-first" | "dfs", None) => StrategyKind::DepthFirst,
            ("depth-limited" | "dls", Some(limit)) => StrategyKind::DepthLimited {
                limit: limit.trim().parse().map_err(|_| parse_error())?,
            },
            ("best-first" | "greedy", None) => StrategyKind::BestFirst,
            ("a-star" | "astar" | "a*", None) => StrategyKind::AStar,
            _ => return Err(parse_error()),
        };
        Ok(kind)
    }
}

/// Minimax-family algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameAlgorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl fmt::Display for GameAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameAlgorithm::Minimax => f.write_str("minimax"),
            GameAlgorithm::AlphaBeta => f.write_str("alpha-beta"),
        }
    }
}

impl FromStr for GameAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(GameAlgorithm::Minimax),
            "alpha-beta" | "alphabeta" | "ab" => Ok(GameAlgorithm::AlphaBeta),
            _ => Err(Error::ParseStrategy {
                input: s.to_string(),
                expected: "minimax, alpha-beta/ab".to_string(),
            }),
        }
    }
}

/// Configuration for a [`crate::search::Search`].
///
/// # Examples
///
/// ```
/// use statesearch::config::{SearchConfig, StrategyKind};
///
/// let config = SearchConfig::new(StrategyKind::AStar).with_avoid_repetition(true);
/// assert_eq!(config.strategy, Some(StrategyKind::AStar));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Frontier ordering; `None` leaves the search unconfigured
    pub strategy: Option<StrategyKind>,
    /// Suppress successors whose state was already generated
    #[serde(default)]
    pub avoid_repetition: bool,
}

impl SearchConfig {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy: Some(strategy),
            avoid_repetition: false,
        }
    }

    pub fn with_avoid_repetition(mut self, avoid_repetition: bool) -> Self {
        self.avoid_repetition = avoid_repetition;
        self
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Serialization`] if it is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read search config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| Error::Io {
            operation: format!("write search config {}", path.display()),
            source,
        })
    }
}

/// Configuration for minimax-family searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdversarialConfig {
    /// Full turns to look ahead; the search explores `depth * 2` plies
    pub depth: u32,
    /// Seed for tie-breaking among equally valued moves (None = from entropy)
    pub seed: Option<u64>,
}

impl AdversarialConfig {
    pub fn new(depth: u32) -> Self {
        Self { depth, seed: None }
    }

    /// Set the random seed for deterministic tie-breaking.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `depth` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(Error::configuration(
                "adversarial search depth must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for AdversarialConfig {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_parse() {
        assert_eq!("bfs".parse::<StrategyKind>().unwrap(), StrategyKind::BreadthFirst);
        assert_eq!(" A-Star ".parse::<StrategyKind>().unwrap(), StrategyKind::AStar);
        assert_eq!(
            "dls:4".parse::<StrategyKind>().unwrap(),
            StrategyKind::DepthLimited { limit: 4 }
        );
        assert!(matches!(
            "depth-limited".parse::<StrategyKind>(),
            Err(Error::ParseStrategy { .. })
        ));
        assert!("dijkstra".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn strategy_display_round_trips_through_parse() {
        for kind in [
            StrategyKind::BreadthFirst,
            StrategyKind::DepthFirst,
            StrategyKind::DepthLimited { limit: 7 },
            StrategyKind::BestFirst,
            StrategyKind::AStar,
        ] {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn game_algorithms_parse() {
        assert_eq!("Minimax".parse::<GameAlgorithm>().unwrap(), GameAlgorithm::Minimax);
        assert_eq!("ab".parse::<GameAlgorithm>().unwrap(), GameAlgorithm::AlphaBeta);
        assert_eq!(GameAlgorithm::default().to_string(), "alpha-beta");
        assert!("expectimax".parse::<GameAlgorithm>().is_err());
    }

    #[test]
    fn zero_depth_is_invalid() {
        assert!(AdversarialConfig::new(0).validate().is_err());
        assert!(AdversarialConfig::new(1).with_seed(9).validate().is_ok());
    }

    #[test]
    fn search_config_serializes_with_tagged_strategy() {
        let config =
            SearchConfig::new(StrategyKind::DepthLimited { limit: 2 }).with_avoid_repetition(true);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"kind\":\"depth-limited\""), "{json}");
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
