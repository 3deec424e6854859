// Board Level 6 definition
use super::LevelDesc;

pub static LEVEL6: LevelDesc = LevelDesc {
    number: 6,
    name: "Crossroads",
    max_moves: 12,
    start: (3, 1),
    rows: [
        "########", // 0
        "##..####", // 1
        "##..S..#", // 2
        "#..#.###", // 3
        "##.E.###", // 4
        "###.####", // 5
        "########", // 6
    ],
    teleports: &[],
};
