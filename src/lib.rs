//! Drawing library for small colour displays, with a driver for the Digilent Pmod OLEDrgb
//! (Solomon Systech SSD1331).
//!
//! Drawing is written against the `Canvas` trait: a surface supplies pixel reads and writes, and
//! gets lines, rectangles and bitmap text on top of them. Two surfaces are included, the
//! `OledRgb` panel driver and the in-memory `FrameBuffer`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]


pub mod command;
pub mod config;
pub mod error;
pub mod fonts;
pub mod graphics;
pub mod interface;
pub mod oledrgb;

// Re-exports for primary API.
pub use crate::command::{consts, DisplayMode};
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::fonts::{Font, FONT_08};
pub use crate::graphics::colour::consts as colours;
pub use crate::graphics::{
    BoundPixel, Canvas, CanvasState, Colour, FrameBuffer, Pen, Pixel, RectangleStyle, WordOrder,
};
pub use crate::interface::spi::SpiInterface;
pub use crate::interface::DisplayInterface;
pub use crate::oledrgb::OledRgb;
