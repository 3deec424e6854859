// Board Level 4 definition
// Two enemies guard the inner turns.
use super::LevelDesc;

pub static LEVEL4: LevelDesc = LevelDesc {
    number: 4,
    name: "Twin Guards",
    max_moves: 12,
    start: (1, 3),
    rows: [
        "########", // 0
        "##....##", // 1
        "##.##.##", // 2
        "##.##E..", // 3
        "#.E#..##", // 4
        "##.#####", // 5
        "########", // 6
    ],
    teleports: &[],
};
