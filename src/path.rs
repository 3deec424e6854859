//! Slide resolution: which cells the token crosses for one swipe.
//!
//! Resolution is read-only; [`crate::game::apply_path`] performs the mutation.

use crate::board::{BoardState, CELL_COUNT, CellKind, Direction, Pos};

/// Ordered cells crossed by one slide, excluding the starting cell.
///
/// Every teleport hop is recorded: the teleport cell that was entered is
/// followed by its partner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    direction: Direction,
    cells: Vec<Pos>,
}

impl Path {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Where the token comes to rest.
    pub fn last(&self) -> Option<Pos> {
        self.cells.last().copied()
    }
}

/// Compute the slide from the player's position in `direction`.
///
/// - Blocked/Barrier cells and the grid edge stop the token before it enters.
/// - A teleport moves the token to its partner; the slide continues from there.
/// - A sticky cell throws the token one further cell. The landing cell ends the
///   slide unless it is a teleport (slide continues) or another sticky (thrown
///   again). If nothing can be entered after the sticky, the slide ends on it.
/// - Enemy and double-step cells end the slide on themselves.
/// - A slide never re-enters a cell it already occupied, except for a throw
///   landing that ends the slide there; facing teleports would otherwise
///   cycle forever.
///
/// An empty path means the adjacent cell cannot be entered.
pub fn resolve_path(board: &BoardState, direction: Direction) -> Path {
    let mut cells = Vec::new();
    let mut occupied = [false; CELL_COUNT];
    let mut current = board.player();
    mark(&mut occupied, current);
    let mut thrown = false;

    while let Some(next) = direction.step(current) {
        let Some(kind) = board.kind_at(next) else {
            break;
        };
        if kind.is_wall() {
            break;
        }
        // A thrown token may land on a cell it already crossed when that
        // landing ends the slide.
        let ends_slide = matches!(
            kind,
            CellKind::Available | CellKind::Enemy | CellKind::DoubleStep
        );
        if is_occupied(&occupied, next) && !(thrown && ends_slide) {
            break;
        }
        mark(&mut occupied, next);
        cells.push(next);
        current = next;

        match kind {
            CellKind::Teleport { to, .. } => {
                if !to.in_bounds() || is_occupied(&occupied, to) {
                    break;
                }
                mark(&mut occupied, to);
                cells.push(to);
                current = to;
                thrown = false;
            }
            CellKind::Sticky => thrown = true,
            CellKind::Enemy | CellKind::DoubleStep => break,
            CellKind::Available => {
                if thrown {
                    break;
                }
            }
            CellKind::Blocked | CellKind::Barrier => break,
        }
    }

    Path { direction, cells }
}

fn mark(occupied: &mut [bool; CELL_COUNT], pos: Pos) {
    if let Some(slot) = occupied.get_mut(pos.index()) {
        *slot = true;
    }
}

fn is_occupied(occupied: &[bool; CELL_COUNT], pos: Pos) -> bool {
    occupied.get(pos.index()).copied().unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{LevelDesc, ROWS, create_level};

    fn board(rows: [&'static str; ROWS], start: (u8, u8)) -> BoardState {
        let desc = LevelDesc {
            number: 99,
            name: "test-level",
            max_moves: 10,
            start,
            rows,
            teleports: &[],
        };
        BoardState::new(&desc.load().unwrap())
    }

    fn board_with_teleports(
        rows: [&'static str; ROWS],
        start: (u8, u8),
        teleports: &'static [((u8, u8), (u8, u8))],
    ) -> BoardState {
        let desc = LevelDesc {
            number: 99,
            name: "test-level",
            max_moves: 10,
            start,
            rows,
            teleports,
        };
        BoardState::new(&desc.load().unwrap())
    }

    fn p(row: u8, col: u8) -> Pos {
        Pos::new(row, col)
    }

    const WALLS: &str = "########";

    #[test]
    fn test_slides_to_edge() {
        let b = board(["........", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 4));
        let path = resolve_path(&b, Direction::Right);
        assert_eq!(path.cells(), &[p(0, 5), p(0, 6), p(0, 7)]);
        assert_eq!(path.direction(), Direction::Right);
        let path = resolve_path(&b, Direction::Left);
        assert_eq!(path.cells(), &[p(0, 3), p(0, 2), p(0, 1), p(0, 0)]);
    }

    #[test]
    fn test_wall_or_edge_adjacent_gives_empty_path() {
        let b = board(["..X.....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 1));
        assert!(resolve_path(&b, Direction::Right).is_empty());
        assert!(resolve_path(&b, Direction::Up).is_empty());
        assert!(resolve_path(&b, Direction::Down).is_empty());
        assert_eq!(resolve_path(&b, Direction::Left).cells(), &[p(0, 0)]);
    }

    #[test]
    fn test_enemy_and_double_step_stop_slide() {
        let b = board(["..E..D..", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0));
        assert_eq!(resolve_path(&b, Direction::Right).cells(), &[p(0, 1), p(0, 2)]);
        let b = board(["...D....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0));
        assert_eq!(
            resolve_path(&b, Direction::Right).cells(),
            &[p(0, 1), p(0, 2), p(0, 3)]
        );
    }

    #[test]
    fn test_sticky_throws_one_cell() {
        let b = board(["..S.....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0));
        assert_eq!(
            resolve_path(&b, Direction::Right).cells(),
            &[p(0, 1), p(0, 2), p(0, 3)]
        );
    }

    #[test]
    fn test_sticky_chain_throws_again() {
        let b = board(["..SS....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0));
        assert_eq!(
            resolve_path(&b, Direction::Right).cells(),
            &[p(0, 1), p(0, 2), p(0, 3), p(0, 4)]
        );
    }

    #[test]
    fn test_sticky_against_wall_ends_on_sticky() {
        let b = board(["..S#....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0));
        assert_eq!(resolve_path(&b, Direction::Right).cells(), &[p(0, 1), p(0, 2)]);
        let b = board([".......S", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 5));
        assert_eq!(resolve_path(&b, Direction::Right).cells(), &[p(0, 6), p(0, 7)]);
    }

    #[test]
    fn test_sticky_throw_into_enemy_stops_there() {
        let b = board(["..SE....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0));
        assert_eq!(
            resolve_path(&b, Direction::Right).cells(),
            &[p(0, 1), p(0, 2), p(0, 3)]
        );
    }

    #[test]
    fn test_sticky_throw_into_teleport_continues() {
        let b = board_with_teleports(
            [".SA.....", WALLS, "A.......", WALLS, WALLS, WALLS, WALLS],
            (0, 0),
            &[((0, 2), (2, 0))],
        );
        assert_eq!(
            resolve_path(&b, Direction::Right).cells(),
            &[
                p(0, 1),
                p(0, 2),
                p(2, 0),
                p(2, 1),
                p(2, 2),
                p(2, 3),
                p(2, 4),
                p(2, 5),
                p(2, 6),
                p(2, 7)
            ]
        );
    }

    #[test]
    fn test_sticky_throw_into_double_step_stops() {
        let b = board([".SD.....", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS], (0, 0));
        assert_eq!(resolve_path(&b, Direction::Right).cells(), &[p(0, 1), p(0, 2)]);
    }

    #[test]
    fn test_sticky_throw_may_land_on_crossed_cell() {
        // The slide wraps through the teleport pair and the sticky at (0,1)
        // throws the token back onto its starting cell.
        let b = board_with_teleports(
            ["AS.....A", WALLS, WALLS, WALLS, WALLS, WALLS, WALLS],
            (0, 2),
            &[((0, 0), (0, 7))],
        );
        assert_eq!(
            resolve_path(&b, Direction::Right).cells(),
            &[
                p(0, 3),
                p(0, 4),
                p(0, 5),
                p(0, 6),
                p(0, 7),
                p(0, 0),
                p(0, 1),
                p(0, 2)
            ]
        );
    }

    #[test]
    fn test_teleport_hop_continues_slide() {
        // Level 10: down from (0,0) enters the orange teleport at (3,0) and
        // leaves from (2,2), sliding on down to (3,2).
        let b = BoardState::new(&create_level(10));
        assert_eq!(
            resolve_path(&b, Direction::Down).cells(),
            &[p(1, 0), p(2, 0), p(3, 0), p(2, 2), p(3, 2)]
        );
    }

    #[test]
    fn test_teleport_then_failed_sticky() {
        // Level 7: left from (0,3) through the orange pair lands next to a
        // sticky cell that has a wall behind it.
        let b = BoardState::new(&create_level(7));
        assert_eq!(
            resolve_path(&b, Direction::Left).cells(),
            &[p(0, 2), p(0, 1), p(4, 4), p(4, 3)]
        );
        assert_eq!(
            resolve_path(&b, Direction::Right).cells(),
            &[p(0, 4), p(0, 5), p(0, 6)]
        );
    }

    #[test]
    fn test_facing_teleports_do_not_cycle() {
        let b = BoardState::new(&create_level(11));
        assert_eq!(
            resolve_path(&b, Direction::Right).cells(),
            &[p(3, 4), p(3, 5), p(3, 6), p(3, 7), p(3, 0), p(3, 1), p(3, 2)]
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for n in 1..=15 {
            let b = BoardState::new(&create_level(n));
            for d in Direction::ALL {
                assert_eq!(resolve_path(&b, d), resolve_path(&b, d), "level {n} {d}");
            }
        }
    }
}
