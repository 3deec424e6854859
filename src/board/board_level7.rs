// Board Level 7 definition
// Two teleport pairs; blue (A) and orange (B).
use super::LevelDesc;

pub static LEVEL7: LevelDesc = LevelDesc {
    number: 7,
    name: "Portals",
    max_moves: 12,
    start: (0, 3),
    rows: [
        "#B...S.#", // 0
        "#.####.#", // 1
        "#.####S#", // 2
        "#..AS..#", // 3
        "#.#SB..#", // 4
        "#.####.#", // 5
        "#.....A#", // 6
    ],
    teleports: &[
        ((3, 3), (6, 6)),
        ((0, 1), (4, 4)),
    ],
};
