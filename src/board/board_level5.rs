// Board Level 5 definition
// Introduces the sticky floor and the double step.
use super::LevelDesc;

pub static LEVEL5: LevelDesc = LevelDesc {
    number: 5,
    name: "Sticky Floor",
    max_moves: 12,
    start: (1, 1),
    rows: [
        "########", // 0
        "#..S...#", // 1
        "#.##.#.#", // 2
        "#.####.#", // 3
        "#.#.##.#", // 4
        "#..E.D.#", // 5
        "########", // 6
    ],
    teleports: &[],
};
