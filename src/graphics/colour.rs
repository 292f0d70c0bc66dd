//! Colour values and their packed word representations.
//!
//! A `Colour` holds the red, green and blue channels it was built from, plus the `WordOrder` to
//! use when packing them into the 16-bit RGB565 and 32-bit RGB888 words that displays consume.
//! The packed words are computed once, when the colour is constructed, so every read returns
//! the same value. Colours are plain `Copy` values and cannot be modified after construction.
//!
//! With `WordOrder::Normal` an RGB565 word is laid out as
//!
//! ```text
//! F  E  D  C  B  A  9  8  7  6  5  4  3  2  1  0
//! R4 R3 R2 R1 R0 G5 G4 G3 G2 G1 G0 B4 B3 B2 B1 B0
//! ```
//!
//! and with `WordOrder::SwapBytes` the high and low bytes of that word are exchanged:
//!
//! ```text
//! F  E  D  C  B  A  9  8  7  6  5  4  3  2  1  0
//! G2 G1 G0 B4 B3 B2 B1 B0 R4 R3 R2 R1 R0 G5 G4 G3
//! ```

/// The order of the bytes within the packed colour words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordOrder {
    /// Packed words use the conventional big-end-first layout, e.g. `0xF800` for pure red in
    /// RGB565.
    Normal,
    /// The two low bytes of each packed word are exchanged, as needed when a little-endian core
    /// (such as the Cortex-M0+ of the RP2040) hands 16-bit words to a byte-oriented bus.
    SwapBytes,
}

impl WordOrder {
    /// The word order native to the compilation target: `Normal` on x86 hosts and `SwapBytes`
    /// everywhere else, which covers the ARM microcontroller boards this library is used on.
    pub const fn platform() -> Self {
        if cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
            WordOrder::Normal
        } else {
            WordOrder::SwapBytes
        }
    }
}

impl Default for WordOrder {
    fn default() -> Self {
        WordOrder::Normal
    }
}

/// An immutable RGB colour together with its packed RGB565 and RGB888 representations.
///
/// Channel values are stored exactly as given. They are expected to lie in `0..=255`, but any
/// value is accepted: the `red`/`green`/`blue` accessors mask to the low byte, and the packed
/// words are computed from the stored values as-is.
///
/// Out-of-range channels are not rejected and pack lossily. RGB565 keeps only the high bits of
/// red and green, while blue above 255 spills into the green bits and anything from `0x80000`
/// up falls off the 16-bit word. RGB888 shifts red and green into place without masking, so red
/// from `0x10000` up is lost entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colour {
    r: u32,
    g: u32,
    b: u32,
    word_order: WordOrder,
    rgb565: u16,
    rgb888: u32,
}

impl Colour {
    /// Create a colour from its red, green and blue channels, using `WordOrder::Normal`.
    ///
    /// Each channel should be in `0..=255`; see the type docs for how larger values pack.
    pub const fn new(r: u32, g: u32, b: u32) -> Self {
        Self::with_word_order(r, g, b, WordOrder::Normal)
    }

    /// Create a colour from its red, green and blue channels, packing words in `word_order`.
    pub const fn with_word_order(r: u32, g: u32, b: u32, word_order: WordOrder) -> Self {
        Colour {
            r,
            g,
            b,
            word_order,
            rgb565: pack_rgb565(r, g, b, word_order),
            rgb888: pack_rgb888(r, g, b, word_order),
        }
    }

    /// Create a colour from an RGB565 word in the normal word order.
    ///
    /// Each channel is *masked* out of `rgb` but not shifted down, so the red channel holds
    /// `rgb & 0xF800`, green `rgb & 0x07E0` and blue `rgb & 0x001F`. As a result
    /// `Colour::from_565(c.as_rgb565())` does not reproduce the channels of `c`.
    pub const fn from_565(rgb: u16) -> Self {
        let rgb = rgb as u32;
        Self::new(rgb & 0xF800, rgb & 0x07E0, rgb & 0x001F)
    }

    /// The red channel, masked to a single byte.
    pub const fn red(&self) -> u8 {
        (self.r & 0xFF) as u8
    }

    /// The green channel, masked to a single byte.
    pub const fn green(&self) -> u8 {
        (self.g & 0xFF) as u8
    }

    /// The blue channel, masked to a single byte.
    pub const fn blue(&self) -> u8 {
        (self.b & 0xFF) as u8
    }

    pub const fn word_order(&self) -> WordOrder {
        self.word_order
    }

    /// The colour packed as a 16-bit RGB565 word, with 5 bits of red, 6 of green and 5 of blue,
    /// in the colour's word order.
    pub const fn as_rgb565(&self) -> u16 {
        self.rgb565
    }

    /// The colour packed as an RGB888 double word. With `WordOrder::Normal` this is
    /// `0x00RRGGBB`.
    ///
    /// With `WordOrder::SwapBytes` the value is `((v & 0x00FF00FF) << 8) | ((v & 0xFF00) >> 8)`
    /// where `v` is the normal layout, giving `0xRR00BBGG`. This is *not* a reversal of the three
    /// colour bytes.
    pub const fn as_rgb888(&self) -> u32 {
        self.rgb888
    }
}

const fn pack_rgb565(r: u32, g: u32, b: u32, word_order: WordOrder) -> u16 {
    let bits565 = (r & 0xF8) << 8 | (g & 0xFC) << 3 | b >> 3;
    match word_order {
        WordOrder::Normal => bits565 as u16,
        WordOrder::SwapBytes => ((bits565 & 0xFF) << 8 | bits565 >> 8) as u16,
    }
}

const fn pack_rgb888(r: u32, g: u32, b: u32, word_order: WordOrder) -> u32 {
    let bits888 = r.wrapping_shl(16) | g.wrapping_shl(8) | b;
    match word_order {
        WordOrder::Normal => bits888,
        WordOrder::SwapBytes => (bits888 & 0x00FF_00FF) << 8 | (bits888 & 0x0000_FF00) >> 8,
    }
}

/// The sixteen named colours of the HTML 4.01 "VGA" palette.
pub mod consts {
    use super::Colour;

    pub const BLACK: Colour = Colour::new(0, 0, 0);
    pub const BLUE: Colour = Colour::new(0, 0, 255);
    pub const CYAN: Colour = Colour::new(0, 255, 255);
    pub const GREY: Colour = Colour::new(128, 128, 128);
    pub const GREEN: Colour = Colour::new(0, 128, 0);
    pub const LIME: Colour = Colour::new(0, 255, 0);
    pub const MAGENTA: Colour = Colour::new(255, 0, 255);
    pub const MAROON: Colour = Colour::new(128, 0, 0);
    pub const NAVY: Colour = Colour::new(0, 0, 128);
    pub const OLIVE: Colour = Colour::new(128, 128, 0);
    pub const PURPLE: Colour = Colour::new(128, 0, 128);
    pub const RED: Colour = Colour::new(255, 0, 0);
    pub const SILVER: Colour = Colour::new(192, 192, 192);
    pub const TEAL: Colour = Colour::new(0, 128, 128);
    pub const WHITE: Colour = Colour::new(255, 255, 255);
    pub const YELLOW: Colour = Colour::new(255, 255, 0);
}
