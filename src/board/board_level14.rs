// Board Level 14 definition
// Maze using every mechanic.
use super::LevelDesc;

pub static LEVEL14: LevelDesc = LevelDesc {
    number: 14,
    name: "Maze",
    max_moves: 12,
    start: (0, 0),
    rows: [
        "...S####", // 0
        "###.####", // 1
        "#.D.X..E", // 2
        "#.###A#.", // 3
        "#E..D.##", // 4
        "#A###.##", // 5
        "#....S##", // 6
    ],
    teleports: &[
        ((3, 5), (5, 1)),
    ],
};
