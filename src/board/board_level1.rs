// Board Level 1 definition
// Single corridor along row 3; one swipe clears it.
use super::LevelDesc;

pub static LEVEL1: LevelDesc = LevelDesc {
    number: 1,
    name: "Corridor",
    max_moves: 1,
    start: (3, 1),
    rows: [
        "########", // 0
        "########", // 1
        "########", // 2
        "#......#", // 3
        "########", // 4
        "########", // 5
        "########", // 6
    ],
    teleports: &[],
};
