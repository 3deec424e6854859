// Board Level 2 definition
// Ring around a centre block; a barrier cuts the left side.
use super::LevelDesc;

pub static LEVEL2: LevelDesc = LevelDesc {
    number: 2,
    name: "Barrier Ring",
    max_moves: 5,
    start: (2, 1),
    rows: [
        "########", // 0
        "#......#", // 1
        "#.####.#", // 2
        "#X####.#", // 3
        "#.####.#", // 4
        "#......#", // 5
        "########", // 6
    ],
    teleports: &[],
};
