//! Grid model for the sliding-token puzzle.
//!
//! A level is a fixed 7×8 grid of typed cells. Levels are authored as static
//! [`LevelDesc`] tables (one row string per grid row plus a teleport pair list,
//! see `board_level*.rs`), validated into an immutable [`Level`] by
//! [`LevelDesc::load`], and played on a mutable [`BoardState`] copy.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const ROWS: usize = 7;
pub const COLS: usize = 8;
pub const CELL_COUNT: usize = ROWS * COLS;

/// Number of levels shipped in the catalog.
pub const LEVEL_COUNT: u32 = 15;

/// Move budget used when an unknown level number falls back to level 1's layout.
const FALLBACK_MAX_MOVES: u32 = 12;

// --- Coordinates / Directions -----------------------------------------------

/// Grid coordinate, row-major: `row` in `0..ROWS`, `col` in `0..COLS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (self.row as usize) < ROWS && (self.col as usize) < COLS
    }

    /// Flat row-major index. Only meaningful for in-bounds positions.
    pub(crate) fn index(self) -> usize {
        self.row as usize * COLS + self.col as usize
    }
}

impl From<(u8, u8)> for Pos {
    fn from((row, col): (u8, u8)) -> Self {
        Pos::new(row, col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Swipe direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row delta, col delta)
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The neighbouring cell in this direction, or `None` past the grid edge.
    pub fn step(self, from: Pos) -> Option<Pos> {
        let (dr, dc) = self.delta();
        let row = from.row.checked_add_signed(dr)?;
        let col = from.col.checked_add_signed(dc)?;
        let next = Pos::new(row, col);
        next.in_bounds().then_some(next)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}' (expected up, down, left or right)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

// --- Cells ------------------------------------------------------------------

/// Which of the two teleport pairs a teleport cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Portal {
    /// Blue pair, glyph `A`.
    A,
    /// Orange pair, glyph `B`.
    B,
}

/// Cell types. Teleports carry the coordinate of their partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Available,
    Blocked,
    /// Impassable like `Blocked`; drawn differently.
    Barrier,
    /// Stops the slide; destroyed on contact.
    Enemy,
    /// Throws the token one further cell; destroyed on contact.
    Sticky,
    /// Stops the slide and costs an extra move.
    DoubleStep,
    Teleport { portal: Portal, to: Pos },
}

impl CellKind {
    /// Cells the token can never enter.
    pub fn is_wall(self) -> bool {
        matches!(self, CellKind::Blocked | CellKind::Barrier)
    }

    pub fn is_teleport(self) -> bool {
        matches!(self, CellKind::Teleport { .. })
    }

    pub fn teleport_partner(self) -> Option<Pos> {
        match self {
            CellKind::Teleport { to, .. } => Some(to),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            CellKind::Available => '.',
            CellKind::Blocked => '#',
            CellKind::Barrier => 'X',
            CellKind::Enemy => 'E',
            CellKind::Sticky => 'S',
            CellKind::DoubleStep => 'D',
            CellKind::Teleport { portal: Portal::A, .. } => 'A',
            CellKind::Teleport { portal: Portal::B, .. } => 'B',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellKind,
    pub visited: bool,
}

// --- Level descriptors ------------------------------------------------------

/// Static, declarative level definition.
///
/// `rows` holds one string of `COLS` glyphs per grid row:
/// `#` blocked, `.` available, `X` barrier, `E` enemy, `S` sticky,
/// `D` double step, `A`/`B` teleports. Every teleport glyph must appear in
/// exactly one entry of `teleports`, paired with a teleport of the same letter.
#[derive(Debug)]
pub struct LevelDesc {
    pub number: u32,
    pub name: &'static str,
    pub max_moves: u32,
    /// (row, col)
    pub start: (u8, u8),
    pub rows: [&'static str; ROWS],
    pub teleports: &'static [((u8, u8), (u8, u8))],
}

/// Reasons a [`LevelDesc`] fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("row {row} has {width} cells, expected {}", COLS)]
    RowWidth { row: usize, width: usize },

    #[error("unknown glyph '{glyph}' at {pos}")]
    UnknownGlyph { glyph: char, pos: Pos },

    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),

    #[error("teleport pair entry at {0} does not point at a teleport cell")]
    NotATeleport(Pos),

    #[error("teleports at {0} and {1} belong to different pairs")]
    MixedPortals(Pos, Pos),

    #[error("teleport at {0} is paired more than once")]
    DuplicatePairing(Pos),

    #[error("teleport at {0} has no partner")]
    UnpairedTeleport(Pos),

    #[error("start position {0} is not a cell the token can stand on")]
    StartNotStandable(Pos),

    #[error("move budget must be positive")]
    ZeroMoveBudget,
}

impl LevelDesc {
    /// Validate the descriptor and build the immutable [`Level`].
    pub fn load(&self) -> Result<Level, LevelError> {
        if self.max_moves == 0 {
            return Err(LevelError::ZeroMoveBudget);
        }

        let mut cells = Vec::with_capacity(CELL_COUNT);
        for (r, line) in self.rows.iter().enumerate() {
            let width = line.chars().count();
            if width != COLS {
                return Err(LevelError::RowWidth { row: r, width });
            }
            for (c, glyph) in line.chars().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                let kind = match glyph {
                    '.' => CellKind::Available,
                    '#' => CellKind::Blocked,
                    'X' => CellKind::Barrier,
                    'E' => CellKind::Enemy,
                    'S' => CellKind::Sticky,
                    'D' => CellKind::DoubleStep,
                    // Partner filled in from the pair list below; self-reference marks "unpaired".
                    'A' => CellKind::Teleport { portal: Portal::A, to: pos },
                    'B' => CellKind::Teleport { portal: Portal::B, to: pos },
                    other => return Err(LevelError::UnknownGlyph { glyph: other, pos }),
                };
                cells.push(kind);
            }
        }

        let mut paired = [false; CELL_COUNT];
        for &(a, b) in self.teleports {
            let (a, b) = (Pos::from(a), Pos::from(b));
            for p in [a, b] {
                if !p.in_bounds() {
                    return Err(LevelError::OutOfBounds(p));
                }
            }
            let portal_a = match cells[a.index()] {
                CellKind::Teleport { portal, .. } => portal,
                _ => return Err(LevelError::NotATeleport(a)),
            };
            let portal_b = match cells[b.index()] {
                CellKind::Teleport { portal, .. } => portal,
                _ => return Err(LevelError::NotATeleport(b)),
            };
            if portal_a != portal_b {
                return Err(LevelError::MixedPortals(a, b));
            }
            for p in [a, b] {
                if std::mem::replace(&mut paired[p.index()], true) {
                    return Err(LevelError::DuplicatePairing(p));
                }
            }
            cells[a.index()] = CellKind::Teleport { portal: portal_a, to: b };
            cells[b.index()] = CellKind::Teleport { portal: portal_b, to: a };
        }

        if let Some(idx) = (0..CELL_COUNT).find(|&i| cells[i].is_teleport() && !paired[i]) {
            return Err(LevelError::UnpairedTeleport(pos_of(idx)));
        }

        let start = Pos::from(self.start);
        if !start.in_bounds() || cells[start.index()].is_wall() {
            return Err(LevelError::StartNotStandable(start));
        }

        Ok(Level {
            number: self.number,
            name: self.name,
            max_moves: self.max_moves,
            start,
            cells,
        })
    }
}

fn pos_of(idx: usize) -> Pos {
    Pos::new((idx / COLS) as u8, (idx % COLS) as u8)
}

// --- Levels -----------------------------------------------------------------

/// Immutable level template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    number: u32,
    name: &'static str,
    max_moves: u32,
    start: Pos,
    cells: Vec<CellKind>,
}

impl Level {
    /// Level 1's layout (a single corridor along row 3) built without the
    /// descriptor table, so it is always available.
    pub fn corridor(number: u32, max_moves: u32) -> Level {
        let cells = (0..CELL_COUNT)
            .map(|idx| {
                let pos = pos_of(idx);
                if pos.row == 3 && (1..=6).contains(&pos.col) {
                    CellKind::Available
                } else {
                    CellKind::Blocked
                }
            })
            .collect();
        Level {
            number,
            name: board_level1::LEVEL1.name,
            max_moves: max_moves.max(1),
            start: Pos::new(3, 1),
            cells,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn kind_at(&self, pos: Pos) -> Option<CellKind> {
        pos.in_bounds().then(|| self.cells[pos.index()])
    }

    /// All cells with their coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, CellKind)> + '_ {
        self.cells.iter().enumerate().map(|(i, k)| (pos_of(i), *k))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(COLS) {
            let line: String = row.iter().map(|k| k.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

// --- Board state ------------------------------------------------------------

/// Mutable working copy of a level for one play-through.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    level_number: u32,
    max_moves: u32,
    cells: Vec<Cell>,
    player: Pos,
    moves_used: u32,
}

impl BoardState {
    /// Copy the level's grid and mark the start cell visited.
    pub fn new(level: &Level) -> Self {
        let cells = level
            .cells
            .iter()
            .map(|&kind| Cell {
                kind,
                visited: false,
            })
            .collect();
        let mut board = Self {
            level_number: level.number,
            max_moves: level.max_moves,
            cells,
            player: level.start,
            moves_used: 0,
        };
        board.visit(level.start);
        board
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    pub fn moves_used(&self) -> u32 {
        self.moves_used
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        if pos.in_bounds() {
            self.cells.get(pos.index())
        } else {
            None
        }
    }

    pub fn kind_at(&self, pos: Pos) -> Option<CellKind> {
        self.cell(pos).map(|c| c.kind)
    }

    pub fn is_visited(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|c| c.visited)
    }

    /// True once every `Available` cell has been visited. Consumed enemies and
    /// sticky cells count as `Available`; other special cells never count.
    pub fn is_all_visited(&self) -> bool {
        self.remaining() == 0
    }

    /// Number of `Available` cells not yet visited.
    pub fn remaining(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.kind == CellKind::Available && !c.visited)
            .count()
    }

    pub(crate) fn visit(&mut self, pos: Pos) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.visited = true;
        }
    }

    pub(crate) fn set_kind(&mut self, pos: Pos, kind: CellKind) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.kind = kind;
        }
    }

    pub(crate) fn set_player(&mut self, pos: Pos) {
        if pos.in_bounds() {
            self.player = pos;
        }
    }

    pub(crate) fn add_moves(&mut self, moves: u32) {
        self.moves_used = self.moves_used.saturating_add(moves);
    }

    fn cell_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        if pos.in_bounds() {
            self.cells.get_mut(pos.index())
        } else {
            None
        }
    }
}

/// Glyph grid with the token drawn as `@`; visited available cells as `o`.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let pos = pos_of(i);
            let glyph = if pos == self.player {
                '@'
            } else if cell.visited && cell.kind == CellKind::Available {
                'o'
            } else {
                cell.kind.glyph()
            };
            write!(f, "{glyph}")?;
            if pos.col as usize == COLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// --- Level catalog ----------------------------------------------------------
// Board definitions live in separate files:
mod board_level1;
mod board_level10;
mod board_level11;
mod board_level12;
mod board_level13;
mod board_level14;
mod board_level15;
mod board_level2;
mod board_level3;
mod board_level4;
mod board_level5;
mod board_level6;
mod board_level7;
mod board_level8;
mod board_level9;

static LEVELS: [&LevelDesc; LEVEL_COUNT as usize] = [
    &board_level1::LEVEL1,
    &board_level2::LEVEL2,
    &board_level3::LEVEL3,
    &board_level4::LEVEL4,
    &board_level5::LEVEL5,
    &board_level6::LEVEL6,
    &board_level7::LEVEL7,
    &board_level8::LEVEL8,
    &board_level9::LEVEL9,
    &board_level10::LEVEL10,
    &board_level11::LEVEL11,
    &board_level12::LEVEL12,
    &board_level13::LEVEL13,
    &board_level14::LEVEL14,
    &board_level15::LEVEL15,
];

/// All built-in level descriptors, ordered by level number.
pub fn levels() -> &'static [&'static LevelDesc] {
    &LEVELS
}

/// Descriptor for a level number, if the catalog has one.
pub fn level_desc(number: u32) -> Option<&'static LevelDesc> {
    let idx = usize::try_from(number.checked_sub(1)?).ok()?;
    LEVELS.get(idx).copied()
}

/// Build the level for `number`. Unknown numbers get level 1's layout with a
/// 12-move budget; the requested number is kept so "next level" still works.
pub fn create_level(number: u32) -> Level {
    let Some(desc) = level_desc(number) else {
        log::warn!("no level {number} in catalog, using level 1 layout");
        return Level::corridor(number, FALLBACK_MAX_MOVES);
    };
    match desc.load() {
        Ok(level) => level,
        Err(err) => {
            log::error!("built-in level {number} failed to load: {err}");
            Level::corridor(number, desc.max_moves)
        }
    }
}
