//! An in-memory canvas, for composing images off-screen and for exercising drawing code without
//! a panel attached.

use core::convert::Infallible;

use crate::config::Config;
use crate::error::Error;
use crate::graphics::canvas::{Canvas, CanvasState};
use crate::graphics::colour::consts::BLACK;
use crate::graphics::colour::Colour;

/// A `W` x `H` canvas backed by an array of colours, initially black.
///
/// Writes outside the buffer are dropped. Reads outside the buffer return the nearest pixel on
/// its edge.
pub struct FrameBuffer<const W: usize, const H: usize> {
    state: CanvasState,
    pixels: [[Colour; W]; H],
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    pub fn new() -> Self {
        Self::with_config(&Config::new())
    }

    /// Create a buffer taking its default colours, pen and font from `config`. The size always
    /// comes from `W` and `H`.
    pub fn with_config(config: &Config) -> Self {
        FrameBuffer {
            state: CanvasState::from_config(&config.size(W as i32, H as i32)),
            pixels: [[BLACK; W]; H],
        }
    }

    /// The colour at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Colour> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.pixels.get(y)?.get(x).copied()
    }

    /// The buffer contents, row by row.
    pub fn pixels(&self) -> &[[Colour; W]; H] {
        &self.pixels
    }
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Canvas for FrameBuffer<W, H> {
    type Error = Infallible;

    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn read_pixel(&mut self, x: i32, y: i32) -> Result<Colour, Error<Infallible>> {
        if W == 0 || H == 0 {
            return Ok(BLACK);
        }
        let x = x.clamp(0, W as i32 - 1) as usize;
        let y = y.clamp(0, H as i32 - 1) as usize;
        Ok(self.pixels[y][x])
    }

    fn write_pixel(&mut self, x: i32, y: i32, colour: Colour) -> Result<(), Error<Infallible>> {
        let slot = match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self.pixels.get_mut(y).and_then(|row| row.get_mut(x)),
            _ => None,
        };
        if let Some(slot) = slot {
            *slot = colour;
        }
        Ok(())
    }
}
