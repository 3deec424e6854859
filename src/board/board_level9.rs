// Board Level 9 definition
use super::LevelDesc;

pub static LEVEL9: LevelDesc = LevelDesc {
    number: 9,
    name: "Staircase",
    max_moves: 12,
    start: (0, 1),
    rows: [
        "#S..####", // 0
        "#.#E####", // 1
        "#.E.S###", // 2
        "#.#S.S.#", // 3
        "#.##S#E#", // 4
        "#.....E#", // 5
        "########", // 6
    ],
    teleports: &[],
};
