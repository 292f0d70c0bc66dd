//! Colours, coordinates and the drawing surface built on them.

pub mod canvas;
pub mod colour;
pub mod framebuffer;
pub mod pen;
pub mod pixel;

pub use self::canvas::{Canvas, CanvasState, RectangleStyle};
pub use self::colour::{Colour, WordOrder};
pub use self::framebuffer::FrameBuffer;
pub use self::pen::Pen;
pub use self::pixel::{BoundPixel, Pixel};
