// Board Level 3 definition
// Outer frame with a barrier on the left and an enemy on the right.
use super::LevelDesc;

pub static LEVEL3: LevelDesc = LevelDesc {
    number: 3,
    name: "Outer Loop",
    max_moves: 8,
    start: (2, 0),
    rows: [
        "........", // 0
        ".######.", // 1
        ".######.", // 2
        "X#####.E", // 3
        ".######.", // 4
        ".######.", // 5
        "........", // 6
    ],
    teleports: &[],
};
