mod common;

use common::random_game_tree;
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use statesearch::{
    AdversarialConfig, AdversarialState, AlphaBeta, GameAlgorithm, GameSearch, Minimax, State,
    adapters::ExpansionLimit,
    domains::{
        game_tree::{GamePosition, GameTree},
        tictactoe::{BoardState, Player},
    },
};

fn config(depth: u32) -> AdversarialConfig {
    AdversarialConfig::new(depth).with_seed(17)
}

/// Cost recorded on the root child chosen by the last search.
fn chosen_cost<S, G>(search: &G) -> Option<f64>
where
    S: AdversarialState,
    G: GameSearch<S> + ?Sized,
{
    let tree = search.tree()?;
    tree.root()
        .children
        .iter()
        .map(|&child| &tree[child])
        .find(|node| node.on_solution_path)
        .map(|node| node.cost)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn alpha_beta_agrees_with_minimax(
        seed in any::<u64>(),
        branching in 1usize..5,
        plies in 1u32..7,
        depth in 1u32..4,
        maximizer in any::<bool>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = random_game_tree(&mut rng, branching, plies, maximizer);

        let mut full = Minimax::new(&config(depth)).unwrap();
        let mut pruned = AlphaBeta::new(&config(depth)).unwrap();
        let full_move = full.find(game.root());
        let pruned_move = pruned.find(game.root());

        prop_assert_eq!(full.report().value, pruned.report().value);
        prop_assert_eq!(full_move.is_some(), pruned_move.is_some());
        prop_assert!(pruned.report().nodes_created <= full.report().nodes_created);
    }

    #[test]
    fn minimax_move_carries_the_root_value(
        seed in any::<u64>(),
        branching in 1usize..5,
        plies in 1u32..6,
        maximizer in any::<bool>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = random_game_tree(&mut rng, branching, plies, maximizer);

        let mut search = Minimax::new(&config(3)).unwrap();
        let Some(chosen) = search.find(game.root()) else {
            prop_assert!(game.root().is_terminal());
            return Ok(());
        };
        prop_assert_eq!(chosen_cost(&search), search.report().value);
        prop_assert_eq!(chosen.state.depth(), 1);
    }
}

#[test]
fn both_searches_find_the_forced_win() {
    // X in the corner, O on the adjacent edge: X forks within three turns
    let board = BoardState::from_string("XO.......").unwrap();

    for algorithm in [GameAlgorithm::Minimax, GameAlgorithm::AlphaBeta] {
        let mut search = algorithm.build::<BoardState>(&config(3)).unwrap();
        let chosen = search.find(board).unwrap();
        assert_eq!(search.report().value, Some(1.0), "{algorithm}");
        assert_eq!(chosen_cost(&*search), Some(1.0), "{algorithm}");
        assert_eq!(chosen.state.get(0), board.get(0));
    }
}

#[test]
fn immediate_win_is_preferred_over_tied_moves() {
    // every move after the winning one shares its value; the finished game is chosen
    let board = BoardState::from_string("XX.OO....").unwrap();
    for seed in 0..10 {
        let mut search = Minimax::new(&AdversarialConfig::new(2).with_seed(seed)).unwrap();
        let chosen = search.find(board).unwrap();
        assert_eq!(chosen.action.name, "2");
        assert_eq!(chosen.state.winner(), Some(Player::X));
    }
}

#[test]
fn cancelled_search_keeps_best_value_so_far() {
    let leaves = [3.0, 12.0, 8.0, 2.0, 4.0, 6.0, 14.0, 5.0, 2.0];
    let game = GameTree::uniform(3, 2, &leaves, true);

    // stops before the third branch: no move, but the root holds max(3, 2)
    let mut search = Minimax::new(&config(1)).unwrap();
    assert!(search.find_with(game.root(), &mut ExpansionLimit::new(8)).is_none());
    assert!(search.report().cancelled);
    assert_eq!(search.report().value, Some(3.0));
    assert_eq!(search.report().nodes_created, 9);

    // stops inside the last branch: its partial value 5 wins the root
    let chosen = search
        .find_with(game.root(), &mut ExpansionLimit::new(11))
        .unwrap();
    assert!(search.report().cancelled);
    assert_eq!(chosen.action.name, "2");
    assert_eq!(search.report().value, Some(5.0));

    // a fresh call is not affected by the previous cancellation
    assert!(search.find(game.root()).is_some());
    assert!(!search.report().cancelled);
    assert_eq!(search.report().value, Some(3.0));
}

#[test]
fn searches_are_reusable_across_positions() {
    let mut search = AlphaBeta::new(&config(1)).unwrap();
    let win = BoardState::from_string("XX.OO....").unwrap();
    assert_eq!(search.find(win).unwrap().action.name, "2");

    let block = BoardState::from_string("XX..O....").unwrap();
    assert!(search.find(block).is_some());
    assert_eq!(search.report().value, Some(0.0));
    assert!(!block.player_to_move());
    assert_eq!(block.reset(), BoardState::new());
}

#[test]
fn horizon_limits_tree_size() {
    let game = GameTree::uniform(2, 8, &[1.0, -1.0], true);
    for depth in 1..=4u32 {
        let mut search = Minimax::<GamePosition>::new(&config(depth)).unwrap();
        search.find(game.root());
        // full binary tree of depth * 2 plies
        let expected = (1usize << (depth * 2 + 1)) - 1;
        assert_eq!(search.report().nodes_created, expected);
        let tree = search.tree().unwrap();
        assert!(tree.iter().all(|(_, node)| node.depth <= depth * 2));
    }
}
