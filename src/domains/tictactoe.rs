//! Tic-Tac-Toe as an adversarial search domain.
//!
//! X is the maximizer: a win for X is worth `+1`, a win for O `-1`, anything
//! else `0`. Moves are named by the cell they fill (`"0"`..`"8"`, row-major).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    identifiers::ActionId,
    state::{Action, AdversarialState, State, Successor},
};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::configuration(format!(
                "unknown player '{other}', expected X or O"
            ))),
        }
    }
}

/// Board cells plus the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    /// Parse a board from 9 cell characters (row-major, whitespace ignored).
    ///
    /// The side to move is inferred from the piece counts: X when they are
    /// equal, O when X has one more.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardLength`] unless exactly 9 cells are given,
    /// [`Error::InvalidCellCharacter`] for an unknown character and
    /// [`Error::InvalidConfiguration`] when the counts allow neither side to move.
    ///
    /// # Examples
    ///
    /// ```
    /// use statesearch::domains::tictactoe::{BoardState, Player};
    ///
    /// let board = BoardState::from_string("X.. .O. ..X").unwrap();
    /// assert_eq!(board.to_move, Player::O);
    /// ```
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x = cells.iter().filter(|&&c| c == Cell::X).count();
        let o = cells.iter().filter(|&&c| c == Cell::O).count();
        let to_move = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return Err(Error::configuration(format!(
                "piece counts (X={x}, O={o}) leave no side to move in '{s}'"
            )));
        };

        Ok(BoardState { cells, to_move })
    }

    /// Same board with `player` to move.
    #[must_use]
    pub fn with_to_move(mut self, player: Player) -> Self {
        self.to_move = player;
        self
    }

    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Make a move and return the resulting board
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] when `pos` is off the board or occupied.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState> {
        if pos >= 9 || !self.is_empty(pos) {
            return Err(Error::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = self.to_move.to_cell();
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    /// Empty cells, or nothing once the game is over
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.empty_positions()
    }

    pub fn has_won(&self, player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| self.cells[idx] == target))
    }

    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Compact single-line form, e.g. `X.O......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl State for BoardState {
    fn is_terminal(&self) -> bool {
        self.is_game_over()
    }

    fn successors(&self) -> Vec<Successor<Self>> {
        self.legal_moves()
            .into_iter()
            .filter_map(|pos| {
                let next = self.make_move(pos).ok()?;
                let action = Action::new(pos.to_string())
                    .with_id(ActionId::new(pos as u64 + 1))
                    .between(self.encode(), next.encode());
                Some(Successor::new(1.0, action, next))
            })
            .collect()
    }
}

impl AdversarialState for BoardState {
    fn utility(&self) -> f64 {
        match self.winner() {
            Some(Player::X) => 1.0,
            Some(Player::O) => -1.0,
            None => 0.0,
        }
    }

    fn player_to_move(&self) -> bool {
        self.to_move == Player::X
    }

    fn reset(&self) -> Self {
        BoardState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_infers_turn() {
        let board = BoardState::from_string("XO.\n.X.\n..O").unwrap();
        assert_eq!(board.to_move, Player::X);
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(8), Cell::O);
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
        assert_eq!(board.encode(), "XO..X...O");
    }

    #[test]
    fn rejects_malformed_boards() {
        assert!(matches!(
            BoardState::from_string("XO"),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            BoardState::from_string("X?......."),
            Err(Error::InvalidCellCharacter {
                character: '?',
                position: 1,
                ..
            })
        ));
        assert!(BoardState::from_string("XXX......").is_err());
    }

    #[test]
    fn occupied_cells_cannot_be_played() {
        let board = BoardState::new().make_move(4).unwrap();
        assert!(matches!(
            board.make_move(4),
            Err(Error::InvalidMove { position: 4 })
        ));
        assert!(board.make_move(9).is_err());
        assert_eq!(board.to_move, Player::O);
    }

    #[test]
    fn successors_fill_each_empty_cell() {
        let board = BoardState::from_string("XO.......").unwrap();
        let successors = board.successors();
        assert_eq!(successors.len(), 7);
        assert_eq!(successors[0].action.name, "2");
        assert_eq!(successors[0].state.get(2), Cell::X);
        assert!(successors.iter().all(|s| s.cost == 1.0));

        let action = &successors[0].action;
        assert_eq!(action.id, ActionId::new(3));
        assert_eq!(action.parent.as_ref().map(|id| id.as_str()), Some("XO......."));
        assert_eq!(action.child.as_ref().map(|id| id.as_str()), Some("XOX......"));
    }

    #[test]
    fn utility_scores_the_winner() {
        let x_wins = BoardState::from_string("XXXOO....").unwrap();
        assert!(x_wins.is_terminal());
        assert_eq!(x_wins.utility(), 1.0);
        assert!(x_wins.successors().is_empty());

        let o_wins = BoardState::from_string("OOOXX.X..").unwrap();
        assert_eq!(o_wins.utility(), -1.0);

        let draw = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(draw.is_draw());
        assert_eq!(draw.utility(), 0.0);
    }

    #[test]
    fn reset_clears_the_board() {
        let board = BoardState::from_string("XO.......").unwrap();
        let fresh = board.reset();
        assert_eq!(fresh, BoardState::new());
        assert!(fresh.player_to_move());
        assert!(!board.with_to_move(Player::O).player_to_move());
    }

    #[test]
    fn player_parses_case_insensitively() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }
}
