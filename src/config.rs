//! Defines the configuration a canvas starts out with: its size, and the colours, pen and font
//! used by drawing calls which do not specify their own.

use crate::fonts::Font;
use crate::graphics::colour::Colour;
use crate::graphics::pen::Pen;

/// Width of the Pmod OLEDrgb panel, used unless `Config::size` says otherwise.
pub const DEFAULT_WIDTH: i32 = 96;
/// Height of the Pmod OLEDrgb panel, used unless `Config::size` says otherwise.
pub const DEFAULT_HEIGHT: i32 = 64;

/// A configuration for a canvas. Builder methods offer a declarative way to either set a default
/// at construction time, or to leave it unset and fall through to the next rule of the colour
/// selection order (see `Canvas::select_fg_colour`).
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) fg_colour: Option<Colour>,
    pub(crate) bg_colour: Option<Colour>,
    pub(crate) pen: Option<Pen>,
    pub(crate) font: Option<&'static Font>,
}

impl Config {
    /// Create a configuration for a 96x64 canvas with no default colours, pen or font.
    pub fn new() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fg_colour: None,
            bg_colour: None,
            pen: None,
            font: None,
        }
    }

    /// Extend this `Config` with the canvas dimensions in pixels.
    pub fn size(self, width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Extend this `Config` with the canvas default foreground colour.
    pub fn fg_colour(self, colour: Colour) -> Self {
        Self {
            fg_colour: Some(colour),
            ..self
        }
    }

    /// Extend this `Config` with the canvas default background colour.
    pub fn bg_colour(self, colour: Colour) -> Self {
        Self {
            bg_colour: Some(colour),
            ..self
        }
    }

    /// Extend this `Config` with a pen assigned to the canvas, which takes precedence over the
    /// default colours.
    pub fn pen(self, pen: Pen) -> Self {
        Self {
            pen: Some(pen),
            ..self
        }
    }

    /// Extend this `Config` with the font used to write text.
    pub fn font(self, font: &'static Font) -> Self {
        Self {
            font: Some(font),
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
