//! Bitmap fonts in the Adafruit GFX layout, and the decoder that streams their glyphs.
//!
//! A font is three static tables: a packed `bitmap` holding every glyph's pixels one bit per
//! pixel, MSB first; an `index` mapping each supported character to a glyph number; and the
//! `glyphs` themselves, each describing where its pixels start in the bitmap and how to place
//! them. A glyph's pixels are stored row-major, `width` bits per row for `height` rows, starting
//! at the byte `bitmap_offset`, with no padding between rows.
//!
//! Decoding state lives in a `GlyphCursor` returned by `Font::start_glyph` rather than in the
//! font, so a single static font can be shared by any number of concurrent draws.

mod font08;

pub use self::font08::FONT_08;

/// Placement and location of a single character in a font bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Byte offset of the glyph's first row in the font bitmap.
    pub bitmap_offset: u16,
    pub width: u8,
    pub height: u8,
    /// Horizontal distance from this character's draw point to the next one's.
    pub x_advance: u8,
    /// Offset of the glyph box from the draw point. `y_offset` is usually negative, as the draw
    /// point sits on the text baseline.
    pub x_offset: i8,
    pub y_offset: i8,
}

impl Glyph {
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Glyph {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }

    /// The number of pixels (and so bitmap bits) covered by the glyph box.
    pub const fn bit_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

const EMPTY_GLYPH: Glyph = Glyph::new(0, 0, 0, 0, 0, 0);

/// A static bitmap font.
#[derive(Debug)]
pub struct Font {
    bitmap: &'static [u8],
    index: &'static [(char, u16)],
    glyphs: &'static [Glyph],
}

impl Font {
    /// Create a font from its tables. `index` must be sorted by character, and every glyph
    /// number in it must be a valid position in `glyphs`.
    pub const fn new(
        bitmap: &'static [u8],
        index: &'static [(char, u16)],
        glyphs: &'static [Glyph],
    ) -> Self {
        Font {
            bitmap,
            index,
            glyphs,
        }
    }

    /// The glyph number used to draw `c`. Characters the font does not cover are drawn with the
    /// space character's glyph (or the first glyph, for a font without a space).
    pub fn glyph_index(&self, c: char) -> usize {
        match self.lookup(c) {
            Some(i) => i,
            None => {
                log::debug!("no glyph for {:?}, substituting ' '", c);
                self.lookup(' ').unwrap_or(0)
            }
        }
    }

    fn lookup(&self, c: char) -> Option<usize> {
        self.index
            .binary_search_by_key(&c, |&(ch, _)| ch)
            .ok()
            .map(|i| self.index[i].1 as usize)
    }

    /// The glyph used to draw `c`, with the same fallback as `glyph_index`.
    pub fn glyph(&self, c: char) -> Glyph {
        self.glyphs
            .get(self.glyph_index(c))
            .copied()
            .unwrap_or(EMPTY_GLYPH)
    }

    /// Read a single bit of the font bitmap, where bit 0 is the most significant bit of byte 0.
    /// Positions beyond the end of the bitmap read as clear.
    pub fn bit(&self, position: usize) -> bool {
        self.bitmap
            .get(position / 8)
            .map_or(false, |byte| byte & (0x80 >> (position % 8)) != 0)
    }

    /// Begin decoding the glyph for `c`, positioned at its first (top-left) pixel.
    pub fn start_glyph(&self, c: char) -> GlyphCursor<'_> {
        let index = self.glyph_index(c);
        let glyph = self.glyphs.get(index).copied().unwrap_or(EMPTY_GLYPH);
        GlyphCursor {
            font: self,
            index,
            glyph,
            position: glyph.bitmap_offset as usize * 8,
            remaining: glyph.bit_count(),
        }
    }

    /// The total advance of `text` when drawn in this font.
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().map(|c| self.glyph(c).x_advance as i32).sum()
    }
}

/// Decoding state for one glyph: yields the glyph's pixels row-major, `true` for a set pixel.
///
/// As an `Iterator` the cursor stops after exactly `width * height` pixels. `next_bit` reads
/// unconditionally, leaving it to the caller to stop at the end of the glyph.
#[derive(Clone, Debug)]
pub struct GlyphCursor<'f> {
    font: &'f Font,
    index: usize,
    glyph: Glyph,
    position: usize,
    remaining: usize,
}

impl<'f> GlyphCursor<'f> {
    /// The glyph number being decoded.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    /// The bitmap bit that the next read will return.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Read the pixel at the cursor and advance by one bit.
    pub fn next_bit(&mut self) -> bool {
        let bit = self.font.bit(self.position);
        self.position += 1;
        self.remaining = self.remaining.saturating_sub(1);
        bit
    }
}

impl<'f> Iterator for GlyphCursor<'f> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        Some(self.next_bit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'f> ExactSizeIterator for GlyphCursor<'f> {}

#[cfg(test)]
mod tests {
    use super::*;

    static BITMAP: [u8; 3] = [0b1010_0000, 0b0110_1001, 0b1000_0000];
    static INDEX: [(char, u16); 3] = [(' ', 0), ('a', 1), ('b', 2)];
    static GLYPHS: [Glyph; 3] = [
        Glyph::new(0, 2, 1, 3, 0, -1),
        Glyph::new(1, 2, 2, 3, 0, -2),
        Glyph::new(1, 3, 3, 4, 1, -3),
    ];
    static TINY: Font = Font::new(&BITMAP, &INDEX, &GLYPHS);

    fn rows(font: &Font, c: char) -> Vec<Vec<bool>> {
        let cursor = font.start_glyph(c);
        let width = cursor.glyph().width as usize;
        let bits: Vec<bool> = cursor.collect();
        bits.chunks(width).map(|row| row.to_vec()).collect()
    }

    #[test]
    fn bits_are_msb_first() {
        assert!(TINY.bit(0));
        assert!(!TINY.bit(1));
        assert!(TINY.bit(2));
        assert!(!TINY.bit(8));
        assert!(TINY.bit(9));
        assert!(TINY.bit(16));
        assert!(!TINY.bit(17));
        // Past the end of the bitmap.
        assert!(!TINY.bit(24));
        assert!(!TINY.bit(10_000));
    }

    #[test]
    fn cursor_starts_at_byte_offset() {
        let cursor = TINY.start_glyph('a');
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.position(), 8);
        assert_eq!(cursor.len(), 4);
        assert_eq!(
            rows(&TINY, 'a'),
            vec![vec![false, true], vec![true, false]]
        );
    }

    #[test]
    fn glyphs_stream_continuously_across_bytes() {
        // 3x3 glyph starting at byte 1: 011 010 011
        assert_eq!(
            rows(&TINY, 'b'),
            vec![
                vec![false, true, true],
                vec![false, true, false],
                vec![false, true, true],
            ]
        );
    }

    #[test]
    fn unknown_characters_fall_back_to_space() {
        assert_eq!(TINY.glyph_index('z'), TINY.glyph_index(' '));
        assert_eq!(TINY.glyph('\u{263A}'), TINY.glyph(' '));
        assert_eq!(TINY.start_glyph('Q').glyph(), TINY.start_glyph(' ').glyph());
    }

    #[test]
    fn cursor_stops_after_glyph_box() {
        let mut cursor = TINY.start_glyph(' ');
        assert_eq!(cursor.next(), Some(true));
        assert_eq!(cursor.next(), Some(false));
        assert_eq!(cursor.next(), None);
        // Raw reads carry on into the following bits.
        assert!(cursor.next_bit());
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn text_width_sums_advances() {
        assert_eq!(TINY.text_width(""), 0);
        assert_eq!(TINY.text_width("ab"), 7);
        assert_eq!(TINY.text_width("a?b"), 10);
    }
}
