//! A canvas on the Digilent Pmod OLEDrgb, a 96x64 16-bit colour OLED panel driven by an SSD1331.
//!
//! Pixels are written and lines and rectangles drawn with the controller's drawing accelerator, so
//! each primitive costs a single short command rather than a stream of image data. The panel is
//! expected to be powered, reset and initialised before the driver is handed its interface.

use crate::command::consts::*;
use crate::command::{Command, DisplayMode};
use crate::config::Config;
use crate::error::Error;
use crate::graphics::canvas::{Canvas, CanvasState, RectangleStyle};
use crate::graphics::colour::Colour;
use crate::graphics::pen::Pen;
use crate::interface::DisplayInterface;

/// A driver for an SSD1331 display.
pub struct OledRgb<DI>
where
    DI: DisplayInterface,
{
    iface: DI,
    state: CanvasState,
}

impl<DI> OledRgb<DI>
where
    DI: DisplayInterface,
{
    /// Construct a new display driver connected to the interface `iface`, with the canvas size
    /// and drawing defaults taken from `config`. The size must fit the 96x64 controller.
    pub fn new(iface: DI, config: Config) -> Self {
        if false
            || config.width <= 0
            || config.height <= 0
            || config.width > NUM_PIXEL_COLS as i32
            || config.height > NUM_PIXEL_ROWS as i32
        {
            panic!("Display size not supported by SSD1331.");
        }
        OledRgb {
            iface,
            state: CanvasState::from_config(&config),
        }
    }

    /// Control sleep mode. The panel is dark while asleep, and display RAM is retained.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), Error<DI::Error>> {
        Command::SetSleepMode(enabled).send(&mut self.iface)
    }

    /// Set the display mode, for blanking or inverting the panel without touching display RAM.
    pub fn display_mode(&mut self, mode: DisplayMode) -> Result<(), Error<DI::Error>> {
        Command::SetDisplayMode(mode).send(&mut self.iface)
    }

    /// Dim the whole panel. Range 0 (dimmest) to 15 (brightest).
    pub fn master_current(&mut self, current: u8) -> Result<(), Error<DI::Error>> {
        Command::SetMasterCurrent(current).send(&mut self.iface)
    }

    /// Give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }

    /// Pack a canvas x coordinate into a controller column address.
    fn column(&self, x: i32) -> Result<u8, Error<DI::Error>> {
        if (0..self.state.width()).contains(&x) {
            Ok(x as u8)
        } else {
            log::debug!("column {} is off the panel", x);
            Err(Error::InvalidArgument)
        }
    }

    /// Pack a canvas y coordinate into a controller row address.
    fn row(&self, y: i32) -> Result<u8, Error<DI::Error>> {
        if (0..self.state.height()).contains(&y) {
            Ok(y as u8)
        } else {
            log::debug!("row {} is off the panel", y);
            Err(Error::InvalidArgument)
        }
    }
}

impl<DI> Canvas for OledRgb<DI>
where
    DI: DisplayInterface,
{
    type Error = DI::Error;

    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    /// Read back a pixel from display RAM. Coordinates off the panel are an `InvalidArgument`.
    fn read_pixel(&mut self, x: i32, y: i32) -> Result<Colour, Error<DI::Error>> {
        let (col, row) = (self.column(x)?, self.row(y)?);
        Command::SetColumnAddress(col, col).send(&mut self.iface)?;
        Command::SetRowAddress(row, row).send(&mut self.iface)?;
        let mut word = [0u8; 2];
        self.iface.read_data(&mut word)?;
        Ok(Colour::from_565(u16::from_be_bytes(word)))
    }

    /// Light a single pixel. Pixels off the panel are dropped.
    fn write_pixel(&mut self, x: i32, y: i32, colour: Colour) -> Result<(), Error<DI::Error>> {
        match (self.column(x), self.row(y)) {
            (Ok(col), Ok(row)) => Command::DrawLine(col, row, col, row, colour).send(&mut self.iface),
            _ => Ok(()),
        }
    }

    /// Draw a line with the accelerator. Both ends must lie on the panel; otherwise nothing is
    /// sent, the cursor stays put and `InvalidArgument` is returned.
    fn draw_line(
        &mut self,
        start: (i32, i32),
        end: (i32, i32),
        colour: Option<Colour>,
        pen: Option<&Pen>,
    ) -> Result<(), Error<DI::Error>> {
        let (c0, r0) = (self.column(start.0)?, self.row(start.1)?);
        let (c1, r1) = (self.column(end.0)?, self.row(end.1)?);
        let colour = self.select_fg_colour(colour, pen);
        Command::DrawLine(c0, r0, c1, r1, colour).send(&mut self.iface)?;
        self.move_to(end);
        Ok(())
    }

    /// Draw a rectangle with the accelerator. The whole box must lie on the panel, as for
    /// `draw_line`.
    #[allow(clippy::too_many_arguments)]
    fn draw_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        line_colour: Option<Colour>,
        fill_colour: Option<Colour>,
        style: RectangleStyle,
        pen: Option<&Pen>,
    ) -> Result<(), Error<DI::Error>> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        let x1 = x.checked_add(width - 1).ok_or(Error::InvalidArgument)?;
        let y1 = y.checked_add(height - 1).ok_or(Error::InvalidArgument)?;
        let (c0, r0) = (self.column(x)?, self.row(y)?);
        let (c1, r1) = (self.column(x1)?, self.row(y1)?);
        let line_colour = self.select_fg_colour(line_colour, pen);
        let fill_colour = self.select_bg_colour(fill_colour, pen);

        Command::SetFill(style == RectangleStyle::Filled).send(&mut self.iface)?;
        Command::DrawRectangle(c0, r0, c1, r1, line_colour, fill_colour).send(&mut self.iface)?;
        self.move_to((x1, y1));
        Ok(())
    }
}
