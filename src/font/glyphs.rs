//! 5-row glyph bitmaps. `#` is a lit cell; rows may differ in length.

pub type Glyph = &'static [&'static str];

const DIGIT_0: Glyph = &[
    "###",
    "#.#",
    "#.#",
    "#.#",
    "###",
];
const DIGIT_1: Glyph = &[
    "##",
    ".#",
    ".#",
    ".#",
    ".#",
];
const DIGIT_2: Glyph = &[
    "##.",
    "..#",
    ".#.",
    "#..",
    "###",
];
const DIGIT_3: Glyph = &[
    "##.",
    "..#",
    ".#.",
    "..#",
    "##.",
];
const DIGIT_4: Glyph = &[
    "#.#",
    "#.#",
    "###",
    "..#",
    "..#",
];
const DIGIT_5: Glyph = &[
    "###",
    "#..",
    "##.",
    "..#",
    "##.",
];
const DIGIT_6: Glyph = &[
    "#..",
    "#..",
    "###",
    "#.#",
    "###",
];
const DIGIT_7: Glyph = &[
    "###",
    "..#",
    "..#",
    "..#",
    "..#",
];
const DIGIT_8: Glyph = &[
    "###",
    "#.#",
    "###",
    "#.#",
    "###",
];
const DIGIT_9: Glyph = &[
    "###",
    "#.#",
    "###",
    "..#",
    "..#",
];
const A: Glyph = &[
    ".#.",
    "#.#",
    "###",
    "#.#",
    "#.#",
];
const B: Glyph = &[
    "##.",
    "#.#",
    "###",
    "#.#",
    "##.",
];
const C: Glyph = &[
    ".#.",
    "#.#",
    "#..",
    "#.#",
    ".#.",
];
const D: Glyph = &[
    "##.",
    "#.#",
    "#.#",
    "#.#",
    "##.",
];
const E: Glyph = &[
    "###",
    "#..",
    "##.",
    "#..",
    "###",
];
const F: Glyph = &[
    "###",
    "#..",
    "##.",
    "#..",
    "#..",
];
const G: Glyph = &[
    "###",
    "#..",
    "###",
    "#.#",
    "###",
];
const H: Glyph = &[
    "#.#",
    "#.#",
    "###",
    "#.#",
    "#.#",
];
const I: Glyph = &[
    "#",
    "#",
    "#",
    "#",
    "#",
];
const J: Glyph = &[
    "..#",
    "..#",
    "..#",
    "#.#",
    ".#.",
];
const K: Glyph = &[
    "##.##",
    "#.#.#",
    "#.#.#",
    "#...#",
    "#...#",
];
const L: Glyph = &[
    "#..",
    "#..",
    "#..",
    "#..",
    "###",
];
const M: Glyph = &[
    "#.#",
    "###",
    "#.#",
    "#.#",
    "#.#",
];
const N: Glyph = &[
    "#..#",
    "##.#",
    "##.#",
    "#.##",
    "#.##",
];
const O: Glyph = &[
    ".#.",
    "#.#",
    "#.#",
    "#.#",
    ".#.",
];
const P: Glyph = &[
    "##.",
    "#.#",
    "##.",
    "#..",
    "#..",
];
const Q: Glyph = &[
    ".##",
    "#.#",
    ".##",
    "..#",
    "..#",
];
const R: Glyph = &[
    "##.",
    "#.#",
    "##.",
    "#.#",
    "#.#",
];
const S: Glyph = &[
    ".##",
    "#..",
    ".#.",
    "..#",
    "##.",
];
const T: Glyph = &[
    "###",
    ".#.",
    ".#.",
    ".#.",
    ".#.",
];
const U: Glyph = &[
    "#.#",
    "#.#",
    "#.#",
    "#.#",
    ".#.",
];
const V: Glyph = &[
    "#.#",
    "#.#",
    "#.#",
    ".#.",
    ".#.",
];
const W: Glyph = &[
    "#.#.#",
    "#.#.#",
    "#.#.#",
    ".#.#.",
    ".#.#.",
];
const X: Glyph = &[
    "#.#",
    "#.#",
    ".#.",
    "#.#",
    "#.#",
];
const Y: Glyph = &[
    "#.#",
    "#.#",
    ".#.",
    ".#.",
    ".#.",
];
const Z: Glyph = &[
    "###",
    "..#",
    ".#.",
    "#..",
    "###",
];
const SPACE: Glyph = &[
    "...",
    "...",
    "...",
    "...",
    "...",
];
const UNKNOWN: Glyph = &[
    "##.",
    "..#",
    ".#.",
    "...",
    ".#.",
];

/// Bitmap for `c`, case-insensitive. Unsupported characters get a question mark.
pub fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        '0' => DIGIT_0,
        '1' => DIGIT_1,
        '2' => DIGIT_2,
        '3' => DIGIT_3,
        '4' => DIGIT_4,
        '5' => DIGIT_5,
        '6' => DIGIT_6,
        '7' => DIGIT_7,
        '8' => DIGIT_8,
        '9' => DIGIT_9,
        'A' => A,
        'B' => B,
        'C' => C,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'H' => H,
        'I' => I,
        'J' => J,
        'K' => K,
        'L' => L,
        'M' => M,
        'N' => N,
        'O' => O,
        'P' => P,
        'Q' => Q,
        'R' => R,
        'S' => S,
        'T' => T,
        'U' => U,
        'V' => V,
        'W' => W,
        'X' => X,
        'Y' => Y,
        'Z' => Z,
        ' ' => SPACE,
        _ => UNKNOWN,
    }
}
