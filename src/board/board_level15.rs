// Board Level 15 definition
// Final challenge: every mechanic on a full grid.
use super::LevelDesc;

pub static LEVEL15: LevelDesc = LevelDesc {
    number: 15,
    name: "Final Challenge",
    max_moves: 12,
    start: (0, 0),
    rows: [
        "...S....", // 0
        "E###A##.", // 1
        ".D.X..S.", // 2
        "B#.#B#E#", // 3
        ".....X.D", // 4
        ".##A###E", // 5
        "..S.....", // 6
    ],
    teleports: &[
        ((1, 4), (5, 3)),
        ((3, 0), (3, 4)),
    ],
};
