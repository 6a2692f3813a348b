//! Stored game tests.
//!
//! A `ChessGame` read back from JSON must be as safe to play on as one
//! built in code: bad configs are refused at load time instead of
//! surfacing later during turn advancement.

use chess_cards::{
    Banish, Card, CardRegistry, CardResolver, ChessGame, GameConfig, PieceKind, Side,
};

fn two_piece_game() -> ChessGame {
    let game = ChessGame::default();
    let (game, _) = game.add_piece(Side::WHITE, PieceKind::King).unwrap();
    let (game, _) = game.add_piece(Side::BLACK, PieceKind::Rook).unwrap();
    game
}

/// A zero side count is refused when loading.
#[test]
fn test_zero_side_count_rejected_on_load() {
    let mut value = serde_json::to_value(two_piece_game()).unwrap();
    value["config"]["side_count"] = serde_json::json!(0);

    let err = serde_json::from_value::<ChessGame>(value).unwrap_err();
    assert!(err.to_string().contains("side count 0"));
}

/// A side count above 255 is refused instead of truncated.
#[test]
fn test_oversized_side_count_rejected_on_load() {
    let mut value = serde_json::to_value(two_piece_game()).unwrap();
    value["config"]["side_count"] = serde_json::json!(256);

    assert!(serde_json::from_value::<ChessGame>(value).is_err());
}

/// A loaded game commits and advances turns like the original.
#[test]
fn test_loaded_game_commits() {
    let game = two_piece_game();
    let json = serde_json::to_string(&game).unwrap();
    let loaded: ChessGame = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, game);

    let resolver = CardResolver::new(CardRegistry::with_builtin_cards());
    let targets = resolver.legal_targets(&Banish.id(), &loaded).unwrap();
    assert_eq!(targets.len(), 1);

    let mv = resolver.propose(&Banish.id(), &loaded, targets[0]).unwrap().unwrap();
    let next = resolver.commit(&loaded, &mv).unwrap();

    assert_eq!(next.turn_number(), 2);
    assert_eq!(next.active_side(), Side::BLACK);
}

/// New pieces on a loaded game never reuse an id.
#[test]
fn test_loaded_game_allocates_fresh_ids() {
    let game = two_piece_game();
    let loaded: ChessGame = serde_json::from_str(&serde_json::to_string(&game).unwrap()).unwrap();

    let (next, id) = loaded.add_piece(Side::WHITE, PieceKind::Pawn).unwrap();

    assert_eq!(next.piece_count(), 3);
    assert!(game.piece(id).is_none());
}

/// Configs built in code cannot express an empty side count.
#[test]
fn test_try_new_rejects_zero_sides() {
    assert!(GameConfig::try_new(0, Side::WHITE).is_err());
    assert_eq!(
        ChessGame::new(GameConfig::try_new(1, Side::WHITE).unwrap())
            .advance_turn()
            .active_side(),
        Side::WHITE
    );
}
