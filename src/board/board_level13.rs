// Board Level 13 definition
// Diamond with crossed teleports.
use super::LevelDesc;

pub static LEVEL13: LevelDesc = LevelDesc {
    number: 13,
    name: "Diamond",
    max_moves: 12,
    start: (0, 3),
    rows: [
        "###.####", // 0
        "##A.B###", // 1
        "#..S..##", // 2
        "E.....E#", // 3
        "#..S..##", // 4
        "##B.A###", // 5
        "###.####", // 6
    ],
    teleports: &[
        ((1, 2), (5, 4)),
        ((1, 4), (5, 2)),
    ],
};
