// Board Level 11 definition
// Cross pattern with enemies and teleports.
use super::LevelDesc;

pub static LEVEL11: LevelDesc = LevelDesc {
    number: 11,
    name: "Cross",
    max_moves: 12,
    start: (3, 3),
    rows: [
        "###E####", // 0
        "###S####", // 1
        "###.####", // 2
        "A......A", // 3
        "###.####", // 4
        "###S####", // 5
        "###E####", // 6
    ],
    teleports: &[
        ((3, 0), (3, 7)),
    ],
};
