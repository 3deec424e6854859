// Board Level 10 definition
// Two halves joined by teleports.
use super::LevelDesc;

pub static LEVEL10: LevelDesc = LevelDesc {
    number: 10,
    name: "Split Board",
    max_moves: 12,
    start: (0, 0),
    rows: [
        ".#......", // 0
        ".#.####A", // 1
        ".#B####.", // 2
        "B#......", // 3
        "########", // 4
        "#.....A#", // 5
        "########", // 6
    ],
    teleports: &[
        ((1, 7), (5, 6)),
        ((2, 2), (3, 0)),
    ],
};
