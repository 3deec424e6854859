// Board Level 8 definition
// Dense block of sticky cells and enemies.
use super::LevelDesc;

pub static LEVEL8: LevelDesc = LevelDesc {
    number: 8,
    name: "Minefield",
    max_moves: 12,
    start: (1, 1),
    rows: [
        "########", // 0
        "#SSSSE.#", // 1
        "##ESES##", // 2
        "##SESS##", // 3
        "#.ESSE.#", // 4
        "########", // 5
        "########", // 6
    ],
    teleports: &[],
};
