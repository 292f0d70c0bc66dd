//! An 8-pixel proportional font covering printable ASCII (`' '` to `'~'`), generated from an
//! Adafruit GFX font by `fontconvert`. Characters are at most 5 pixels wide and advance 6 pixels,
//! except for `'~'` which advances 4.

use super::{Font, Glyph};

pub static FONT_08: Font = Font::new(&BITMAP, &INDEX, &GLYPHS);

static BITMAP: [u8; 335] = [
    0xF4, 0xF4, 0x00, 0xB4, 0x00, 0x4B, 0xF4, 0x92, 0x49, 0x2F, 0xD2, 0x09,
    0xE9, 0x64, 0x78, 0x9A, 0x5E, 0x40, 0x00, 0x46, 0x94, 0x84, 0x21, 0x29,
    0x62, 0x6B, 0xA7, 0xC0, 0xC0, 0x6A, 0xA4, 0x00, 0x95, 0x58, 0x00, 0xAB,
    0x88, 0xEA, 0x80, 0x21, 0x3E, 0x42, 0x00, 0xD8, 0x00, 0xE0, 0x80, 0x00,
    0x10, 0x84, 0x21, 0x08, 0x00, 0x69, 0x99, 0x99, 0x60, 0x59, 0x24, 0xB8,
    0x00, 0x69, 0x12, 0x48, 0xF0, 0x69, 0x16, 0x19, 0x60, 0x11, 0x94, 0xA9,
    0x7C, 0x40, 0xF8, 0x86, 0x19, 0x60, 0x69, 0x8E, 0x99, 0x60, 0xF1, 0x22,
    0x44, 0x80, 0x69, 0x96, 0x99, 0x60, 0x69, 0x97, 0x19, 0x60, 0x98, 0x13,
    0x60, 0x24, 0x84, 0x20, 0x0F, 0x0F, 0x00, 0x84, 0x24, 0x80, 0x69, 0x12,
    0x44, 0x04, 0x39, 0x19, 0x6B, 0x9D, 0x03, 0x80, 0x69, 0x99, 0xF9, 0x90,
    0xE9, 0x9E, 0x99, 0xE0, 0x69, 0x88, 0x89, 0x60, 0xE9, 0x99, 0x99, 0xE0,
    0xF8, 0x8E, 0x88, 0xF0, 0xF8, 0x8E, 0x88, 0x80, 0x69, 0x8B, 0x99, 0x70,
    0x99, 0x9F, 0x99, 0x90, 0x49, 0x24, 0x90, 0x00, 0x24, 0x93, 0x50, 0x00,
    0x99, 0xAC, 0xA9, 0x90, 0x88, 0x88, 0x88, 0xF0, 0xDD, 0x6B, 0x58, 0xC6,
    0x20, 0x8E, 0x6B, 0x5A, 0xCE, 0x20, 0x74, 0x63, 0x18, 0xC5, 0xC0, 0xE9,
    0x9E, 0x88, 0x80, 0x69, 0x99, 0x9B, 0x60, 0xE9, 0x9E, 0xA9, 0x90, 0x69,
    0x86, 0x19, 0x60, 0xF9, 0x08, 0x42, 0x10, 0x80, 0x99, 0x99, 0x99, 0x60,
    0x8C, 0x63, 0x18, 0xA8, 0x80, 0x8C, 0x6B, 0x5A, 0xD5, 0x40, 0x8C, 0x54,
    0x45, 0x46, 0x20, 0x8C, 0x54, 0x42, 0x10, 0x80, 0xF8, 0x44, 0x44, 0x43,
    0xE0, 0xEA, 0xAC, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0xD5, 0x5C,
    0x00, 0x22, 0xA2, 0x00, 0xFC, 0x00, 0x90, 0x79, 0x97, 0x88, 0x8E, 0x99,
    0xE0, 0xF2, 0x70, 0x11, 0x17, 0x99, 0x70, 0x06, 0xF8, 0x70, 0x65, 0x4E,
    0x44, 0x40, 0x79, 0x97, 0x1F, 0x88, 0x8E, 0x99, 0x90, 0x08, 0x24, 0x90,
    0x00, 0x08, 0x24, 0x92, 0xC0, 0x88, 0x9A, 0xCA, 0x90, 0x44, 0x44, 0x44,
    0x60, 0xD5, 0x6B, 0x10, 0xE9, 0x99, 0x79, 0x96, 0xE9, 0x9E, 0x88, 0x79,
    0x97, 0x11, 0xF2, 0x40, 0x0F, 0xE1, 0xF0, 0x44, 0xE4, 0x46, 0x99, 0x97,
    0xAA, 0xA4, 0x8D, 0x6A, 0xA0, 0x96, 0x69, 0x99, 0x97, 0x1F, 0xF2, 0x4F,
    0x29, 0x64, 0x88, 0x00, 0xFF, 0x89, 0x34, 0xA0, 0x00, 0x1F, 0x80,
];

static INDEX: [(char, u16); 95] = [
    (' ', 0), ('!', 1), ('"', 2), ('#', 3), ('$', 4), ('%', 5),
    ('&', 6), ('\'', 7), ('(', 8), (')', 9), ('*', 10), ('+', 11),
    (',', 12), ('-', 13), ('.', 14), ('/', 15), ('0', 16), ('1', 17),
    ('2', 18), ('3', 19), ('4', 20), ('5', 21), ('6', 22), ('7', 23),
    ('8', 24), ('9', 25), (':', 26), (';', 27), ('<', 28), ('=', 29),
    ('>', 30), ('?', 31), ('@', 32), ('A', 33), ('B', 34), ('C', 35),
    ('D', 36), ('E', 37), ('F', 38), ('G', 39), ('H', 40), ('I', 41),
    ('J', 42), ('K', 43), ('L', 44), ('M', 45), ('N', 46), ('O', 47),
    ('P', 48), ('Q', 49), ('R', 50), ('S', 51), ('T', 52), ('U', 53),
    ('V', 54), ('W', 55), ('X', 56), ('Y', 57), ('Z', 58), ('[', 59),
    ('\\', 60), (']', 61), ('^', 62), ('_', 63), ('`', 64), ('a', 65),
    ('b', 66), ('c', 67), ('d', 68), ('e', 69), ('f', 70), ('g', 71),
    ('h', 72), ('i', 73), ('j', 74), ('k', 75), ('l', 76), ('m', 77),
    ('n', 78), ('o', 79), ('p', 80), ('q', 81), ('r', 82), ('s', 83),
    ('t', 84), ('u', 85), ('v', 86), ('w', 87), ('x', 88), ('y', 89),
    ('z', 90), ('{', 91), ('|', 92), ('}', 93), ('~', 94),
];

static GLYPHS: [Glyph; 95] = [
    Glyph::new(0, 1, 1, 6, 0, -1), // 0x20 ' '
    Glyph::new(1, 1, 6, 6, 2, -6), // 0x21 '!'
    Glyph::new(3, 3, 2, 6, 1, -6), // 0x22 '"'
    Glyph::new(5, 6, 8, 6, 0, -7), // 0x23 '#'
    Glyph::new(11, 6, 9, 6, 0, -7), // 0x24 '$'
    Glyph::new(19, 6, 8, 6, 0, -7), // 0x25 '%'
    Glyph::new(25, 4, 6, 6, 1, -6), // 0x26 '&'
    Glyph::new(28, 1, 2, 6, 2, -6), // 0x27 '\''
    Glyph::new(29, 2, 7, 6, 2, -7), // 0x28 '('
    Glyph::new(32, 2, 7, 6, 1, -7), // 0x29 ')'
    Glyph::new(35, 5, 5, 6, 0, -4), // 0x2A '*'
    Glyph::new(39, 5, 5, 6, 0, -4), // 0x2B '+'
    Glyph::new(43, 2, 3, 6, 2, -1), // 0x2C ','
    Glyph::new(45, 3, 1, 6, 1, -2), // 0x2D '-'
    Glyph::new(46, 1, 1, 6, 2, -1), // 0x2E '.'
    Glyph::new(47, 6, 7, 6, 0, -7), // 0x2F '/'
    Glyph::new(53, 4, 7, 6, 1, -6), // 0x30 '0'
    Glyph::new(57, 3, 7, 6, 1, -6), // 0x31 '1'
    Glyph::new(61, 4, 7, 6, 1, -6), // 0x32 '2'
    Glyph::new(65, 4, 7, 6, 1, -6), // 0x33 '3'
    Glyph::new(69, 5, 7, 6, 1, -6), // 0x34 '4'
    Glyph::new(74, 4, 7, 6, 1, -6), // 0x35 '5'
    Glyph::new(78, 4, 7, 6, 1, -6), // 0x36 '6'
    Glyph::new(82, 4, 7, 6, 1, -6), // 0x37 '7'
    Glyph::new(86, 4, 7, 6, 1, -6), // 0x38 '8'
    Glyph::new(90, 4, 7, 6, 1, -6), // 0x39 '9'
    Glyph::new(94, 1, 4, 6, 2, -4), // 0x3A ':'
    Glyph::new(95, 2, 6, 6, 2, -4), // 0x3B ';'
    Glyph::new(97, 4, 5, 6, 1, -5), // 0x3C '<'
    Glyph::new(100, 4, 5, 6, 1, -4), // 0x3D '='
    Glyph::new(103, 4, 5, 6, 1, -5), // 0x3E '>'
    Glyph::new(106, 4, 8, 6, 1, -7), // 0x3F '?'
    Glyph::new(110, 6, 7, 6, 0, -7), // 0x40 '@'
    Glyph::new(116, 4, 7, 6, 1, -7), // 0x41 'A'
    Glyph::new(120, 4, 7, 6, 1, -7), // 0x42 'B'
    Glyph::new(124, 4, 7, 6, 1, -7), // 0x43 'C'
    Glyph::new(128, 4, 7, 6, 1, -7), // 0x44 'D'
    Glyph::new(132, 4, 7, 6, 1, -7), // 0x45 'E'
    Glyph::new(136, 4, 7, 6, 1, -7), // 0x46 'F'
    Glyph::new(140, 4, 7, 6, 1, -7), // 0x47 'G'
    Glyph::new(144, 4, 7, 6, 1, -7), // 0x48 'H'
    Glyph::new(148, 3, 7, 6, 1, -7), // 0x49 'I'
    Glyph::new(152, 3, 7, 6, 1, -7), // 0x4A 'J'
    Glyph::new(156, 4, 7, 6, 1, -7), // 0x4B 'K'
    Glyph::new(160, 4, 7, 6, 1, -7), // 0x4C 'L'
    Glyph::new(164, 5, 7, 6, 0, -7), // 0x4D 'M'
    Glyph::new(169, 5, 7, 6, 0, -7), // 0x4E 'N'
    Glyph::new(174, 5, 7, 6, 0, -7), // 0x4F 'O'
    Glyph::new(179, 4, 7, 6, 1, -7), // 0x50 'P'
    Glyph::new(183, 4, 7, 6, 1, -7), // 0x51 'Q'
    Glyph::new(187, 4, 7, 6, 1, -7), // 0x52 'R'
    Glyph::new(191, 4, 7, 6, 1, -7), // 0x53 'S'
    Glyph::new(195, 5, 7, 6, 0, -7), // 0x54 'T'
    Glyph::new(200, 4, 7, 6, 1, -7), // 0x55 'U'
    Glyph::new(204, 5, 7, 6, 0, -7), // 0x56 'V'
    Glyph::new(209, 5, 7, 6, 0, -7), // 0x57 'W'
    Glyph::new(214, 5, 7, 6, 0, -7), // 0x58 'X'
    Glyph::new(219, 5, 7, 6, 0, -7), // 0x59 'Y'
    Glyph::new(224, 5, 7, 6, 0, -7), // 0x5A 'Z'
    Glyph::new(229, 2, 7, 6, 2, -7), // 0x5B '['
    Glyph::new(232, 6, 7, 6, 0, -7), // 0x5C '\\'
    Glyph::new(238, 2, 7, 6, 1, -7), // 0x5D ']'
    Glyph::new(241, 5, 3, 6, 0, -7), // 0x5E '^'
    Glyph::new(244, 6, 1, 6, 0, 1), // 0x5F '_'
    Glyph::new(246, 2, 2, 6, 1, -6), // 0x60 '`'
    Glyph::new(247, 4, 4, 6, 1, -4), // 0x61 'a'
    Glyph::new(249, 4, 7, 6, 1, -7), // 0x62 'b'
    Glyph::new(253, 3, 4, 6, 1, -4), // 0x63 'c'
    Glyph::new(255, 4, 7, 6, 1, -7), // 0x64 'd'
    Glyph::new(259, 4, 5, 6, 1, -5), // 0x65 'e'
    Glyph::new(262, 4, 7, 6, 1, -7), // 0x66 'f'
    Glyph::new(266, 4, 6, 6, 1, -4), // 0x67 'g'
    Glyph::new(269, 4, 7, 6, 1, -7), // 0x68 'h'
    Glyph::new(273, 3, 7, 6, 1, -7), // 0x69 'i'
    Glyph::new(277, 3, 9, 6, 0, -7), // 0x6A 'j'
    Glyph::new(281, 4, 7, 6, 1, -7), // 0x6B 'k'
    Glyph::new(285, 4, 7, 6, 1, -7), // 0x6C 'l'
    Glyph::new(289, 5, 4, 6, 0, -4), // 0x6D 'm'
    Glyph::new(292, 4, 4, 6, 1, -4), // 0x6E 'n'
    Glyph::new(294, 4, 4, 6, 1, -4), // 0x6F 'o'
    Glyph::new(296, 4, 6, 6, 1, -4), // 0x70 'p'
    Glyph::new(299, 4, 6, 6, 1, -4), // 0x71 'q'
    Glyph::new(302, 3, 4, 6, 1, -4), // 0x72 'r'
    Glyph::new(304, 4, 5, 6, 1, -5), // 0x73 's'
    Glyph::new(307, 4, 6, 6, 1, -6), // 0x74 't'
    Glyph::new(310, 4, 4, 6, 1, -4), // 0x75 'u'
    Glyph::new(312, 4, 4, 6, 1, -4), // 0x76 'v'
    Glyph::new(314, 5, 4, 6, 0, -4), // 0x77 'w'
    Glyph::new(317, 4, 4, 6, 1, -4), // 0x78 'x'
    Glyph::new(319, 4, 6, 6, 1, -4), // 0x79 'y'
    Glyph::new(322, 4, 4, 6, 1, -4), // 0x7A 'z'
    Glyph::new(324, 3, 7, 6, 1, -7), // 0x7B '{'
    Glyph::new(328, 1, 8, 6, 2, -7), // 0x7C '|'
    Glyph::new(329, 3, 7, 6, 1, -7), // 0x7D '}'
    Glyph::new(333, 4, 3, 4, 0, -5), // 0x7E '~'
];
