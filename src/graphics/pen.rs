//! Pens bundle a foreground colour, a background colour and a line thickness so callers can swap
//! between drawing styles (say "normal" and "alert" text) with a single argument.

use crate::graphics::colour::consts::{BLACK, WHITE};
use crate::graphics::colour::Colour;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pen {
    pub fg_colour: Colour,
    pub bg_colour: Colour,
    /// Line width hint. The drawing primitives currently plot one-pixel lines regardless.
    pub thickness: u8,
}

impl Pen {
    /// A pen drawing in `fg_colour` over a black background, one pixel thick.
    pub const fn new(fg_colour: Colour) -> Self {
        Pen {
            fg_colour,
            bg_colour: BLACK,
            thickness: 1,
        }
    }

    /// This pen with its background colour replaced.
    pub const fn bg_colour(self, bg_colour: Colour) -> Self {
        Pen { bg_colour, ..self }
    }

    /// This pen with its line thickness replaced.
    pub const fn thickness(self, thickness: u8) -> Self {
        Pen { thickness, ..self }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Pen::new(WHITE)
    }
}
