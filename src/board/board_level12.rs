// Board Level 12 definition
// Spiral with sticky floors at the turns and double steps in the middle.
use super::LevelDesc;

pub static LEVEL12: LevelDesc = LevelDesc {
    number: 12,
    name: "Spiral",
    max_moves: 12,
    start: (0, 1),
    rows: [
        "#.....S#", // 0
        "######.#", // 1
        "#.E.D#.#", // 2
        "#E##.#.#", // 3
        "#.##D#.#", // 4
        "#S.....#", // 5
        "########", // 6
    ],
    teleports: &[],
};
