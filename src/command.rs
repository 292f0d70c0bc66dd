//! The command set for the SSD1331.
//!
//! The SSD1331 drives a 96x64 panel of 16-bit colour pixels, and includes an accelerator which
//! draws lines and rectangles directly into display RAM. Commands and their arguments are all sent
//! in command mode. Accelerator colours are given as 6-bit intensities per channel, in red, green,
//! blue order.

use crate::error::Error;
use crate::graphics::colour::Colour;
use crate::interface::DisplayInterface;

pub mod consts {
    pub const NUM_PIXEL_COLS: u8 = 96;
    pub const NUM_PIXEL_ROWS: u8 = 64;
    pub const PIXEL_COL_MAX: u8 = NUM_PIXEL_COLS - 1;
    pub const PIXEL_ROW_MAX: u8 = NUM_PIXEL_ROWS - 1;
}

use self::consts::*;

/// Setting of the display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// The display operates normally, showing the image in the display RAM.
    Normal,
    /// Every pixel is lit at full brightness, regardless of the display RAM.
    AllOn,
    /// Every pixel is dark, regardless of the display RAM.
    AllOff,
    /// The display shows the image in the display RAM with each colour inverted.
    Inverse,
}

#[derive(Clone, Copy, Debug)]
pub enum Command {
    /// Set the column start and end address of the display RAM window used by reads and writes.
    /// Range is 0-95.
    SetColumnAddress(u8, u8),
    /// Set the row start and end address of the display RAM window used by reads and writes.
    /// Range is 0-63.
    SetRowAddress(u8, u8),
    /// Draw a line from (column, row) to (column, row) in the given colour.
    DrawLine(u8, u8, u8, u8, Colour),
    /// Draw a rectangle with corners (column, row) and (column, row). The frame takes the first
    /// colour, and the interior takes the second when filling is enabled by `SetFill`.
    DrawRectangle(u8, u8, u8, u8, Colour, Colour),
    /// Enable or disable filling the interior of rectangles drawn by `DrawRectangle`.
    SetFill(bool),
    /// Set the display operating mode. See enum for details.
    SetDisplayMode(DisplayMode),
    /// Control sleep mode. The panel is blanked while asleep.
    SetSleepMode(bool),
    /// Set the master current attenuation, which dims all colours uniformly. Range 0 (dimmest) to
    /// 15 (brightest).
    SetMasterCurrent(u8),
}

/// The 6-bit accelerator intensities of `colour`.
fn rgb6(colour: Colour) -> [u8; 3] {
    [colour.red() >> 2, colour.green() >> 2, colour.blue() >> 2]
}

macro_rules! ok_command {
    ($buf:ident, [$($arg:expr),*]) => {{
        let bytes = [$($arg),*];
        $buf[..bytes.len()].copy_from_slice(&bytes);
        Ok(&$buf[..bytes.len()])
    }};
}

fn col_ok(c: u8) -> bool {
    c <= PIXEL_COL_MAX
}

fn row_ok(r: u8) -> bool {
    r <= PIXEL_ROW_MAX
}

impl Command {
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        let mut buf = [0u8; 11];
        let bytes: Result<&[u8], Error<DI::Error>> = match self {
            Command::SetColumnAddress(start, end) => match (start, end) {
                (0..=PIXEL_COL_MAX, 0..=PIXEL_COL_MAX) => ok_command!(buf, [0x15, start, end]),
                _ => Err(Error::InvalidArgument),
            },
            Command::SetRowAddress(start, end) => match (start, end) {
                (0..=PIXEL_ROW_MAX, 0..=PIXEL_ROW_MAX) => ok_command!(buf, [0x75, start, end]),
                _ => Err(Error::InvalidArgument),
            },
            Command::DrawLine(c0, r0, c1, r1, colour) => {
                if col_ok(c0) && col_ok(c1) && row_ok(r0) && row_ok(r1) {
                    let [r, g, b] = rgb6(colour);
                    ok_command!(buf, [0x21, c0, r0, c1, r1, r, g, b])
                } else {
                    Err(Error::InvalidArgument)
                }
            }
            Command::DrawRectangle(c0, r0, c1, r1, line, fill) => {
                if col_ok(c0) && col_ok(c1) && row_ok(r0) && row_ok(r1) {
                    let [lr, lg, lb] = rgb6(line);
                    let [fr, fg, fb] = rgb6(fill);
                    ok_command!(buf, [0x22, c0, r0, c1, r1, lr, lg, lb, fr, fg, fb])
                } else {
                    Err(Error::InvalidArgument)
                }
            }
            Command::SetFill(ena) => ok_command!(buf, [0x26, if ena { 0x01 } else { 0x00 }]),
            Command::SetDisplayMode(mode) => ok_command!(
                buf,
                [match mode {
                    DisplayMode::Normal => 0xA4,
                    DisplayMode::AllOn => 0xA5,
                    DisplayMode::AllOff => 0xA6,
                    DisplayMode::Inverse => 0xA7,
                }]
            ),
            Command::SetSleepMode(ena) => ok_command!(buf, [if ena { 0xAE } else { 0xAF }]),
            Command::SetMasterCurrent(current) => match current {
                0..=15 => ok_command!(buf, [0x87, current]),
                _ => Err(Error::InvalidArgument),
            },
        };
        let bytes = bytes?;
        log::trace!("ssd1331 command {:02X?}", bytes);
        iface.send_commands(bytes)?;
        Ok(())
    }
}
