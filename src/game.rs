//! Applying a resolved slide to the board and classifying the result.

use std::fmt;

use crate::board::{BoardState, CellKind, Pos};
use crate::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    Playing,
    Victory,
    Defeat,
}

impl GameState {
    pub fn is_over(self) -> bool {
        self != GameState::Playing
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Playing => "playing",
            GameState::Victory => "victory",
            GameState::Defeat => "defeat",
        };
        f.write_str(name)
    }
}

/// Walk `path` on `board` and return the resulting state.
///
/// An empty path is an illegal move and loses immediately. Otherwise each
/// cell is visited in order; enemies and sticky cells are consumed (become
/// `Available`). A slide that ends on a sticky cell with nothing enterable
/// behind it loses without spending a move. Otherwise the move costs 1, or 2
/// when a double-step cell was crossed, and the board is checked for full
/// coverage before the move budget.
pub fn apply_path(board: &mut BoardState, path: &Path) -> GameState {
    let Some(last) = path.last() else {
        return GameState::Defeat;
    };

    let mut double_step = false;
    let mut ended_on_sticky = false;
    for &pos in path.cells() {
        let Some(kind) = board.kind_at(pos) else {
            continue;
        };
        board.set_player(pos);
        board.visit(pos);
        ended_on_sticky = false;
        match kind {
            CellKind::Enemy => board.set_kind(pos, CellKind::Available),
            CellKind::Sticky => {
                board.set_kind(pos, CellKind::Available);
                ended_on_sticky = true;
            }
            CellKind::DoubleStep => double_step = true,
            _ => {}
        }
    }

    if ended_on_sticky && !can_throw(board, path, last) {
        return GameState::Defeat;
    }

    board.add_moves(if double_step { 2 } else { 1 });

    if board.is_all_visited() {
        GameState::Victory
    } else if board.moves_used() >= board.max_moves() {
        GameState::Defeat
    } else {
        GameState::Playing
    }
}

fn can_throw(board: &BoardState, path: &Path, from: Pos) -> bool {
    path.direction()
        .step(from)
        .and_then(|next| board.kind_at(next))
        .is_some_and(|kind| !kind.is_wall())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, LevelDesc, ROWS, create_level};
    use crate::path::resolve_path;

    fn board(rows: [&'static str; ROWS], start: (u8, u8), max_moves: u32) -> BoardState {
        let desc = LevelDesc {
            number: 99,
            name: "test-level",
            max_moves,
            start,
            rows,
            teleports: &[],
        };
        BoardState::new(&desc.load().unwrap())
    }

    fn swipe(board: &mut BoardState, d: Direction) -> GameState {
        let path = resolve_path(board, d);
        apply_path(board, &path)
    }

    const WALLS: &str = "########";

    #[test]
    fn test_level1_single_swipe_wins() {
        let mut b = BoardState::new(&create_level(1));
        let path = resolve_path(&b, Direction::Right);
        assert_eq!(
            path.cells(),
            &[Pos::new(3, 2), Pos::new(3, 3), Pos::new(3, 4), Pos::new(3, 5), Pos::new(3, 6)]
        );
        assert_eq!(apply_path(&mut b, &path), GameState::Victory);
        assert_eq!(b.moves_used(), 1);
        assert_eq!(b.player(), Pos::new(3, 6));
    }

    #[test]
    fn test_empty_path_is_defeat_and_leaves_board() {
        let mut b = BoardState::new(&create_level(1));
        let before = b.clone();
        assert_eq!(swipe(&mut b, Direction::Up), GameState::Defeat);
        assert_eq!(b, before);
    }

    #[test]
    fn test_budget_exhaustion_is_defeat() {
        let mut b = board(["....#...", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0), 1);
        assert_eq!(swipe(&mut b, Direction::Right), GameState::Defeat);
        assert_eq!(b.moves_used(), 1);
    }

    #[test]
    fn test_double_step_costs_two_moves() {
        let mut b = board(["..D.....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0), 10);
        assert_eq!(swipe(&mut b, Direction::Right), GameState::Playing);
        assert_eq!(b.moves_used(), 2);
        assert_eq!(swipe(&mut b, Direction::Right), GameState::Victory);
        assert_eq!(b.moves_used(), 3);
    }

    #[test]
    fn test_enemy_consumed_once() {
        let mut b = board(["...E....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0), 10);
        assert_eq!(swipe(&mut b, Direction::Right), GameState::Playing);
        assert_eq!(b.player(), Pos::new(0, 3));
        assert_eq!(b.kind_at(Pos::new(0, 3)), Some(CellKind::Available));
        assert_eq!(b.remaining(), 4);

        assert_eq!(swipe(&mut b, Direction::Right), GameState::Victory);
        assert_eq!(swipe(&mut b, Direction::Left), GameState::Victory);
        assert_eq!(b.player(), Pos::new(0, 0));
        assert_eq!(b.remaining(), 0);
    }

    #[test]
    fn test_failed_sticky_throw_beats_full_coverage() {
        // Every available cell is visited by the slide, but the sticky has a
        // wall behind it: still a defeat, and the move is not counted.
        let mut b = board([".S######", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0), 5);
        assert_eq!(swipe(&mut b, Direction::Right), GameState::Defeat);
        assert_eq!(b.moves_used(), 0);
        assert_eq!(b.kind_at(Pos::new(0, 1)), Some(CellKind::Available));
    }

    #[test]
    fn test_sticky_at_edge_is_defeat() {
        let mut b = board([".......S", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0), 5);
        assert_eq!(swipe(&mut b, Direction::Right), GameState::Defeat);
    }

    #[test]
    fn test_successful_throw_keeps_playing() {
        let mut b = board(["..S.....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0), 5);
        assert_eq!(swipe(&mut b, Direction::Right), GameState::Playing);
        assert_eq!(b.player(), Pos::new(0, 3));
        assert_eq!(b.kind_at(Pos::new(0, 2)), Some(CellKind::Available));
        assert_eq!(b.moves_used(), 1);
    }

    #[test]
    fn test_sticky_throw_into_double_step_costs_two() {
        let mut b = board([".SD.....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0), 5);
        assert_eq!(swipe(&mut b, Direction::Right), GameState::Playing);
        assert_eq!(b.player(), Pos::new(0, 2));
        assert_eq!(b.moves_used(), 2);
        assert_eq!(b.kind_at(Pos::new(0, 1)), Some(CellKind::Available));
    }

    #[test]
    fn test_throw_back_onto_start_lands_there() {
        let desc = LevelDesc {
            number: 99,
            name: "test-level",
            max_moves: 5,
            start: (0, 2),
            rows: ["AS.....A", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS],
            teleports: &[((0, 0), (0, 7))],
        };
        let mut b = BoardState::new(&desc.load().unwrap());
        assert_eq!(swipe(&mut b, Direction::Right), GameState::Victory);
        assert_eq!(b.player(), Pos::new(0, 2));
        assert_eq!(b.moves_used(), 1);
    }

    #[test]
    fn test_teleport_cells_do_not_count_for_coverage() {
        // Level 7 left-swipe: teleport cells are visited but never required.
        let mut b = BoardState::new(&create_level(7));
        assert_eq!(swipe(&mut b, Direction::Left), GameState::Defeat);
        assert!(b.is_visited(Pos::new(0, 1)));
        assert!(b.is_visited(Pos::new(4, 4)));
        assert!(b.kind_at(Pos::new(0, 1)).is_some_and(|k| k.is_teleport()));
    }
}
