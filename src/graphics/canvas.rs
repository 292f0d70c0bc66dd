//! The drawing surface contract.
//!
//! A surface implements `Canvas` by supplying `read_pixel` and `write_pixel` and giving access to
//! its `CanvasState`; every other primitive has a default implementation written in terms of
//! those two. Drivers whose hardware can draw lines or rectangles natively override the matching
//! method, and must keep the same colour selection and cursor behaviour.
//!
//! Every primitive leaves the cursor at its logical end point, so drawing calls can be chained
//! without tracking positions by hand:
//!
//! - `draw_line` / `draw_to`: the line's end point.
//! - `draw_rectangle`: the bottom-right corner `(x + width - 1, y + height - 1)`.
//! - `write_char`: `(next_x, y)`, where `next_x` is the returned draw point.
//! - `write_text`: the draw point after the final character.
//!
//! The cursor is a `BoundPixel`, so these positions are clamped to the canvas.

use core::ops::RangeInclusive;

use itertools::iproduct;

use crate::config::Config;
use crate::error::Error;
use crate::fonts::Font;
use crate::graphics::colour::consts::{BLACK, WHITE};
use crate::graphics::colour::Colour;
use crate::graphics::pen::Pen;
use crate::graphics::pixel::BoundPixel;

/// Whether `draw_rectangle` paints the interior of the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectangleStyle {
    /// Frame and interior.
    Filled,
    /// Frame only; the interior is left untouched.
    Framed,
}

/// The attributes every canvas carries besides its pixels.
#[derive(Clone, Copy, Debug)]
pub struct CanvasState {
    width: i32,
    height: i32,
    /// Default foreground colour, consulted after any pen.
    pub fg_colour: Option<Colour>,
    /// Default background colour, consulted after any pen.
    pub bg_colour: Option<Colour>,
    pub pen: Option<Pen>,
    pub font: Option<&'static Font>,
    cursor: BoundPixel,
    origin: BoundPixel,
}

impl CanvasState {
    /// State for a `width` x `height` canvas with the cursor and origin at `(0, 0)`.
    pub fn new(width: i32, height: i32) -> Self {
        // An empty canvas still keeps its cursor at (0, 0) rather than below the lower limit.
        let corner = BoundPixel::new(0, 0, (width - 1).max(0), (height - 1).max(0));
        CanvasState {
            width,
            height,
            fg_colour: None,
            bg_colour: None,
            pen: None,
            font: None,
            cursor: corner,
            origin: corner,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        CanvasState {
            fg_colour: config.fg_colour,
            bg_colour: config.bg_colour,
            pen: config.pen,
            font: config.font,
            ..CanvasState::new(config.width, config.height)
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cursor(&self) -> BoundPixel {
        self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut BoundPixel {
        &mut self.cursor
    }

    pub fn origin(&self) -> BoundPixel {
        self.origin
    }

    pub fn origin_mut(&mut self) -> &mut BoundPixel {
        &mut self.origin
    }
}

/// A surface that can be drawn on.
pub trait Canvas {
    /// The error raised by the underlying device, `Infallible` for in-memory surfaces.
    type Error;

    fn state(&self) -> &CanvasState;

    fn state_mut(&mut self) -> &mut CanvasState;

    /// Read the colour of the pixel at `(x, y)`. Bounds handling is up to the surface.
    fn read_pixel(&mut self, x: i32, y: i32) -> Result<Colour, Error<Self::Error>>;

    /// Set the pixel at `(x, y)` to `colour`. Bounds handling is up to the surface.
    fn write_pixel(&mut self, x: i32, y: i32, colour: Colour) -> Result<(), Error<Self::Error>>;

    fn width(&self) -> i32 {
        self.state().width()
    }

    fn height(&self) -> i32 {
        self.state().height()
    }

    fn cursor(&self) -> BoundPixel {
        self.state().cursor()
    }

    fn origin(&self) -> BoundPixel {
        self.state().origin()
    }

    /// Move the cursor to `xy`, clamped to the canvas.
    fn move_to(&mut self, xy: (i32, i32)) {
        self.state_mut().cursor_mut().move_to(xy);
    }

    /// Move the saved origin to `xy`, clamped to the canvas.
    fn move_origin_to(&mut self, xy: (i32, i32)) {
        self.state_mut().origin_mut().move_to(xy);
    }

    /// Snapshot the cursor position as the origin.
    fn save_origin(&mut self) {
        let xy = self.cursor().x_y();
        self.move_origin_to(xy);
    }

    /// Return the cursor to the last saved origin.
    fn restore_origin(&mut self) {
        let xy = self.origin().x_y();
        self.move_to(xy);
    }

    fn set_font(&mut self, font: Option<&'static Font>) {
        self.state_mut().font = font;
    }

    fn set_pen(&mut self, pen: Option<Pen>) {
        self.state_mut().pen = pen;
    }

    /// Resolve the foreground colour of a drawing call: the explicit `colour`, else the `pen`
    /// passed with the call, else the canvas pen, else the canvas default, else white.
    fn select_fg_colour(&self, colour: Option<Colour>, pen: Option<&Pen>) -> Colour {
        let state = self.state();
        colour
            .or_else(|| pen.map(|p| p.fg_colour))
            .or_else(|| state.pen.map(|p| p.fg_colour))
            .or(state.fg_colour)
            .unwrap_or(WHITE)
    }

    /// Resolve the background colour of a drawing call, in the same order as the foreground,
    /// falling back to black.
    fn select_bg_colour(&self, colour: Option<Colour>, pen: Option<&Pen>) -> Colour {
        let state = self.state();
        colour
            .or_else(|| pen.map(|p| p.bg_colour))
            .or_else(|| state.pen.map(|p| p.bg_colour))
            .or(state.bg_colour)
            .unwrap_or(BLACK)
    }

    /// Draw a line from `start` to `end`, both included, and leave the cursor at `end`.
    fn draw_line(
        &mut self,
        start: (i32, i32),
        end: (i32, i32),
        colour: Option<Colour>,
        pen: Option<&Pen>,
    ) -> Result<(), Error<Self::Error>> {
        let colour = self.select_fg_colour(colour, pen);
        plot_line(self, start, end, colour)?;
        self.move_to(end);
        Ok(())
    }

    /// Draw a line from the cursor to `end`.
    fn draw_to(
        &mut self,
        end: (i32, i32),
        colour: Option<Colour>,
        pen: Option<&Pen>,
    ) -> Result<(), Error<Self::Error>> {
        let start = self.cursor().x_y();
        self.draw_line(start, end, colour, pen)
    }

    /// Draw the box `[x, x + width - 1] × [y, y + height - 1]`. The frame takes the foreground
    /// colour resolved from `line_colour`, and for `RectangleStyle::Filled` the interior takes the
    /// background colour resolved from `fill_colour`. A box with no area draws nothing and leaves
    /// the cursor in place. Only the part of the box on the canvas is plotted; a far corner
    /// beyond the `i32` range is an `InvalidArgument`.
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
    ) -> Result<(), Error<Self::Error>> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        let (x1, y1) = match (x.checked_add(width - 1), y.checked_add(height - 1)) {
            (Some(x1), Some(y1)) => (x1, y1),
            _ => return Err(Error::InvalidArgument),
        };
        let line_colour = self.select_fg_colour(line_colour, pen);
        let (canvas_w, canvas_h) = (self.width(), self.height());
        let on_x = |c: i32| (0..canvas_w).contains(&c);
        let on_y = |r: i32| (0..canvas_h).contains(&r);
        let inner_rows = clip_span(y.saturating_add(1), y1.saturating_sub(1), canvas_h);

        if on_y(y) {
            plot_row(self, clip_span(x, x1, canvas_w), y, line_colour)?;
        }
        if y1 != y && on_y(y1) {
            plot_row(self, clip_span(x, x1, canvas_w), y1, line_colour)?;
        }
        for row in inner_rows.clone() {
            if on_x(x) {
                self.write_pixel(x, row, line_colour)?;
            }
            if x1 != x && on_x(x1) {
                self.write_pixel(x1, row, line_colour)?;
            }
        }

        if style == RectangleStyle::Filled {
            let fill_colour = self.select_bg_colour(fill_colour, pen);
            let inner_cols = clip_span(x.saturating_add(1), x1.saturating_sub(1), canvas_w);
            for (row, col) in iproduct!(inner_rows, inner_cols) {
                self.write_pixel(col, row, fill_colour)?;
            }
        }

        self.move_to((x1, y1));
        Ok(())
    }

    /// Draw a `width` x `height` box with its top-left corner at the cursor, as `draw_rectangle`.
    #[allow(clippy::too_many_arguments)]
    fn draw_rectangle_at_cursor(
        &mut self,
        width: i32,
        height: i32,
        line_colour: Option<Colour>,
        fill_colour: Option<Colour>,
        style: RectangleStyle,
        pen: Option<&Pen>,
    ) -> Result<(), Error<Self::Error>> {
        let (x, y) = self.cursor().x_y();
        self.draw_rectangle(x, y, width, height, line_colour, fill_colour, style, pen)
    }

    /// Paint the whole canvas in `colour`.
    fn fill_screen(&mut self, colour: Colour) -> Result<(), Error<Self::Error>> {
        let (width, height) = (self.width(), self.height());
        self.draw_rectangle(
            0,
            0,
            width,
            height,
            Some(colour),
            Some(colour),
            RectangleStyle::Filled,
            None,
        )
    }

    /// Draw `c` in the current font with its draw point at `(x, y)`, returning the draw point for
    /// the next character. Without a font nothing is drawn and `x` is returned.
    fn write_char(
        &mut self,
        x: i32,
        y: i32,
        c: char,
        colour: Option<Colour>,
        pen: Option<&Pen>,
    ) -> Result<i32, Error<Self::Error>> {
        let font = match self.state().font {
            Some(font) => font,
            None => return Ok(x),
        };
        let colour = self.select_fg_colour(colour, pen);

        let cursor = font.start_glyph(c);
        let glyph = cursor.glyph();
        let left = x + glyph.x_offset as i32;
        let top = y + glyph.y_offset as i32;
        let cells = iproduct!(0..glyph.height as i32, 0..glyph.width as i32);
        for ((row, col), set) in cells.zip(cursor) {
            if set {
                self.write_pixel(left + col, top + row, colour)?;
            }
        }

        let next_x = x + glyph.x_advance as i32;
        self.move_to((next_x, y));
        Ok(next_x)
    }

    /// Draw `text` from `(x, y)` one character after another, returning the draw point after
    /// the final character.
    fn write_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        colour: Option<Colour>,
        pen: Option<&Pen>,
    ) -> Result<i32, Error<Self::Error>> {
        let mut next_x = x;
        for c in text.chars() {
            next_x = self.write_char(next_x, y, c, colour, pen)?;
        }
        self.move_to((next_x, y));
        Ok(next_x)
    }
}

/// The inclusive range `lo..=hi` limited to `0..limit`. Empty when nothing of it is on the canvas.
fn clip_span(lo: i32, hi: i32, limit: i32) -> RangeInclusive<i32> {
    lo.max(0)..=hi.min(limit - 1)
}

/// Rasterise the line `start`..=`end` with Bresenham's algorithm. The cursor is not moved.
///
/// The error terms are kept in `i64`, so any pair of `i32` end points is accepted. The walk stops
/// early once it has left the canvas and is heading further away.
fn plot_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    start: (i32, i32),
    end: (i32, i32),
    colour: Colour,
) -> Result<(), Error<C::Error>> {
    let (canvas_w, canvas_h) = (canvas.width(), canvas.height());
    let (mut x, mut y) = start;
    let dx = (i64::from(end.0) - i64::from(x)).abs();
    let dy = -(i64::from(end.1) - i64::from(y)).abs();
    let sx = if x < end.0 { 1 } else { -1 };
    let sy = if y < end.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        canvas.write_pixel(x, y, colour)?;
        if (x, y) == end {
            return Ok(());
        }
        let leaving = (x < 0 && sx < 0)
            || (x >= canvas_w && sx > 0)
            || (y < 0 && sy < 0)
            || (y >= canvas_h && sy > 0);
        if leaving {
            return Ok(());
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn plot_row<C: Canvas + ?Sized>(
    canvas: &mut C,
    cols: RangeInclusive<i32>,
    y: i32,
    colour: Colour,
) -> Result<(), Error<C::Error>> {
    for x in cols {
        canvas.write_pixel(x, y, colour)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FONT_08;
    use crate::graphics::colour::consts::{BLUE, GREEN, LIME, NAVY, RED, TEAL, YELLOW};
    use crate::graphics::framebuffer::FrameBuffer;

    type Fb = FrameBuffer<16, 12>;

    fn lit(fb: &Fb, colour: Colour) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..12 {
            for x in 0..16 {
                if fb.pixel(x, y) == Some(colour) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn state_from_config() {
        let cfg = Config::new()
            .size(40, 30)
            .fg_colour(RED)
            .bg_colour(NAVY)
            .font(&FONT_08);
        let state = CanvasState::from_config(&cfg);
        assert_eq!((state.width(), state.height()), (40, 30));
        assert_eq!(state.fg_colour, Some(RED));
        assert_eq!(state.bg_colour, Some(NAVY));
        assert!(state.font.is_some());
        assert_eq!(state.cursor().x_y(), (0, 0));
        assert_eq!(state.cursor().max_x(), 39);
        assert_eq!(state.cursor().max_y(), 29);
    }

    #[test]
    fn fg_colour_precedence() {
        let mut fb = Fb::new();
        let call_pen = Pen::new(GREEN);
        assert_eq!(fb.select_fg_colour(None, None), WHITE);

        fb.state_mut().fg_colour = Some(TEAL);
        assert_eq!(fb.select_fg_colour(None, None), TEAL);

        fb.set_pen(Some(Pen::new(YELLOW)));
        assert_eq!(fb.select_fg_colour(None, None), YELLOW);

        assert_eq!(fb.select_fg_colour(None, Some(&call_pen)), GREEN);
        assert_eq!(fb.select_fg_colour(Some(RED), Some(&call_pen)), RED);
    }

    #[test]
    fn bg_colour_precedence() {
        let mut fb = Fb::new();
        let call_pen = Pen::new(GREEN).bg_colour(LIME);
        assert_eq!(fb.select_bg_colour(None, None), BLACK);

        fb.state_mut().bg_colour = Some(NAVY);
        assert_eq!(fb.select_bg_colour(None, None), NAVY);

        fb.set_pen(Some(Pen::new(YELLOW).bg_colour(TEAL)));
        assert_eq!(fb.select_bg_colour(None, None), TEAL);

        assert_eq!(fb.select_bg_colour(None, Some(&call_pen)), LIME);
        assert_eq!(fb.select_bg_colour(Some(BLUE), Some(&call_pen)), BLUE);
    }

    #[test]
    fn precedence_is_independent_per_layer() {
        let mut fb = Fb::new();
        fb.state_mut().fg_colour = Some(RED);
        // Only the background is defaulted, so the foreground falls through to its own default.
        fb.state_mut().bg_colour = None;
        assert_eq!(fb.select_fg_colour(None, None), RED);
        assert_eq!(fb.select_bg_colour(None, None), BLACK);
    }

    #[test]
    fn line_leaves_cursor_at_end() {
        let mut fb = Fb::new();
        fb.draw_line((0, 0), (10, 5), Some(RED), None).unwrap();
        assert_eq!(fb.cursor().x_y(), (10, 5));
        assert_eq!(fb.pixel(0, 0), Some(RED));
        assert_eq!(fb.pixel(10, 5), Some(RED));
        // One pixel per column on a shallow line.
        assert_eq!(lit(&fb, RED).len(), 11);
    }

    #[test]
    fn line_is_symmetric_in_direction() {
        let mut a = Fb::new();
        let mut b = Fb::new();
        a.draw_line((1, 2), (13, 9), Some(RED), None).unwrap();
        b.draw_line((13, 9), (1, 2), Some(RED), None).unwrap();
        assert_eq!(lit(&a, RED).len(), lit(&b, RED).len());
        assert_eq!(b.cursor().x_y(), (1, 2));
    }

    #[test]
    fn axis_lines_and_points() {
        let mut fb = Fb::new();
        fb.draw_line((3, 4), (3, 4), Some(RED), None).unwrap();
        assert_eq!(lit(&fb, RED), vec![(3, 4)]);

        fb.draw_line((2, 7), (2, 1), Some(BLUE), None).unwrap();
        assert_eq!(lit(&fb, BLUE).len(), 7);
        assert_eq!(fb.cursor().x_y(), (2, 1));

        fb.draw_line((0, 10), (15, 10), Some(GREEN), None).unwrap();
        assert_eq!(lit(&fb, GREEN).len(), 16);
    }

    #[test]
    fn draw_to_chains_from_cursor() {
        let mut fb = Fb::new();
        fb.move_to((1, 1));
        fb.draw_to((5, 1), Some(RED), None).unwrap();
        fb.draw_to((5, 4), Some(RED), None).unwrap();
        assert_eq!(fb.cursor().x_y(), (5, 4));
        assert_eq!(lit(&fb, RED).len(), 5 + 3);
    }

    #[test]
    fn line_uses_canvas_colours() {
        let mut fb = Fb::new();
        fb.draw_line((0, 0), (3, 0), None, None).unwrap();
        assert_eq!(lit(&fb, WHITE).len(), 4);

        fb.set_pen(Some(Pen::new(YELLOW)));
        fb.draw_line((0, 1), (3, 1), None, None).unwrap();
        assert_eq!(lit(&fb, YELLOW).len(), 4);
    }

    #[test]
    fn lines_off_canvas_are_clipped_and_cursor_clamped() {
        let mut fb = Fb::new();
        fb.draw_line((-5, 2), (20, 2), Some(RED), None).unwrap();
        assert_eq!(lit(&fb, RED).len(), 16);
        assert_eq!(fb.cursor().x_y(), (15, 2));
    }

    #[test]
    fn filled_rectangle() {
        let mut fb = Fb::new();
        fb.draw_rectangle(2, 3, 5, 4, Some(RED), Some(BLUE), RectangleStyle::Filled, None)
            .unwrap();
        // Frame: 2 rows of 5 and 2 columns of 2.
        assert_eq!(lit(&fb, RED).len(), 5 * 2 + 2 * 2);
        assert_eq!(lit(&fb, BLUE), vec![(3, 4), (4, 4), (5, 4), (3, 5), (4, 5), (5, 5)]);
        assert_eq!(fb.cursor().x_y(), (6, 6));
    }

    #[test]
    fn framed_rectangle_leaves_interior() {
        let mut fb = Fb::new();
        fb.fill_screen(GREEN).unwrap();
        fb.draw_rectangle(0, 0, 4, 4, Some(RED), Some(BLUE), RectangleStyle::Framed, None)
            .unwrap();
        assert_eq!(lit(&fb, RED).len(), 12);
        assert!(lit(&fb, BLUE).is_empty());
        assert_eq!(fb.pixel(1, 1), Some(GREEN));
        assert_eq!(fb.pixel(2, 2), Some(GREEN));
    }

    #[test]
    fn thin_rectangles() {
        let mut fb = Fb::new();
        fb.draw_rectangle(1, 1, 1, 1, Some(RED), Some(BLUE), RectangleStyle::Filled, None)
            .unwrap();
        assert_eq!(lit(&fb, RED), vec![(1, 1)]);
        fb.draw_rectangle(4, 0, 1, 5, Some(GREEN), None, RectangleStyle::Filled, None)
            .unwrap();
        assert_eq!(lit(&fb, GREEN).len(), 5);
        fb.draw_rectangle(6, 0, 6, 2, Some(TEAL), None, RectangleStyle::Filled, None)
            .unwrap();
        assert_eq!(lit(&fb, TEAL).len(), 12);
        assert!(lit(&fb, BLUE).is_empty());
    }

    #[test]
    fn empty_rectangle_draws_nothing() {
        let mut fb = Fb::new();
        fb.move_to((7, 7));
        fb.draw_rectangle(1, 1, 0, 5, Some(RED), Some(RED), RectangleStyle::Filled, None)
            .unwrap();
        fb.draw_rectangle(1, 1, 5, -2, Some(RED), Some(RED), RectangleStyle::Filled, None)
            .unwrap();
        assert!(lit(&fb, RED).is_empty());
        assert_eq!(fb.cursor().x_y(), (7, 7));
    }

    #[test]
    fn rectangle_fill_uses_background_precedence() {
        let mut fb = Fb::new();
        fb.fill_screen(RED).unwrap();
        let pen = Pen::new(YELLOW).bg_colour(TEAL);
        fb.draw_rectangle(0, 0, 3, 3, None, None, RectangleStyle::Filled, Some(&pen))
            .unwrap();
        assert_eq!(lit(&fb, YELLOW).len(), 8);
        assert_eq!(lit(&fb, TEAL), vec![(1, 1)]);
    }

    #[test]
    fn fill_screen_covers_canvas() {
        let mut fb = Fb::new();
        fb.fill_screen(NAVY).unwrap();
        assert_eq!(lit(&fb, NAVY).len(), 16 * 12);
        assert_eq!(fb.cursor().x_y(), (15, 11));
    }

    #[test]
    fn write_char_without_font() {
        let mut fb = Fb::new();
        fb.move_to((3, 3));
        assert_eq!(fb.write_char(5, 9, 'A', Some(RED), None), Ok(5));
        assert!(lit(&fb, RED).is_empty());
        assert_eq!(fb.cursor().x_y(), (3, 3));
    }

    #[test]
    fn write_char_plots_glyph() {
        let mut fb = Fb::new();
        fb.set_font(Some(&FONT_08));
        // '!' is a 1x6 column with a gap above its last row, placed two pixels right of the
        // draw point and six above the baseline.
        assert_eq!(fb.write_char(0, 8, '!', Some(RED), None), Ok(6));
        assert_eq!(lit(&fb, RED), vec![(2, 2), (2, 3), (2, 4), (2, 5), (2, 7)]);
        assert_eq!(fb.cursor().x_y(), (6, 8));
    }

    #[test]
    fn write_text_advances_cursor() {
        let mut fb = FrameBuffer::<32, 16>::new();
        fb.set_font(Some(&FONT_08));
        let end = fb.write_text(0, 10, "AB", None, None).unwrap();
        let advance = FONT_08.glyph('A').x_advance as i32 + FONT_08.glyph('B').x_advance as i32;
        assert_eq!(end, advance);
        assert_eq!(fb.cursor().x_y(), (advance, 10));
        assert_eq!(fb.cursor().x(), 12);
    }

    #[test]
    fn write_text_matches_char_by_char() {
        let mut a = Fb::new();
        let mut b = Fb::new();
        a.set_font(Some(&FONT_08));
        b.set_font(Some(&FONT_08));
        a.write_text(0, 9, "Hi", Some(RED), None).unwrap();
        let x = b.write_char(0, 9, 'H', Some(RED), None).unwrap();
        b.write_char(x, 9, 'i', Some(RED), None).unwrap();
        assert_eq!(lit(&a, RED), lit(&b, RED));
        assert!(!lit(&a, RED).is_empty());
    }

    #[test]
    fn write_empty_text() {
        let mut fb = Fb::new();
        fb.set_font(Some(&FONT_08));
        assert_eq!(fb.write_text(4, 6, "", None, None), Ok(4));
        assert_eq!(fb.cursor().x_y(), (4, 6));
    }

    #[test]
    fn huge_rectangles_are_clipped() {
        let mut fb = Fb::new();
        fb.draw_rectangle(1, 0, i32::MAX, 2, Some(RED), None, RectangleStyle::Filled, None)
            .unwrap();
        // Top and bottom edges from x = 1 to the right edge; the right side is off the canvas.
        assert_eq!(lit(&fb, RED).len(), 15 * 2);
        assert_eq!(fb.cursor().x_y(), (15, 1));

        fb.draw_rectangle(-5, -5, 100, 100, Some(GREEN), Some(BLUE), RectangleStyle::Filled, None)
            .unwrap();
        assert!(lit(&fb, GREEN).is_empty());
        assert_eq!(lit(&fb, BLUE).len(), 16 * 12);

        fb.draw_rectangle(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Some(RED), Some(RED), RectangleStyle::Filled, None)
            .unwrap();
        assert_eq!(lit(&fb, BLUE).len(), 16 * 12);
    }

    #[test]
    fn rectangle_corner_overflow_is_rejected() {
        let mut fb = Fb::new();
        fb.move_to((3, 3));
        assert_eq!(
            fb.draw_rectangle(i32::MAX, 0, 2, 2, Some(RED), None, RectangleStyle::Filled, None),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            fb.draw_rectangle(0, 2, 2, i32::MAX, Some(RED), None, RectangleStyle::Filled, None),
            Err(Error::InvalidArgument)
        );
        assert!(lit(&fb, RED).is_empty());
        assert_eq!(fb.cursor().x_y(), (3, 3));
    }

    #[test]
    fn lines_to_far_end_points() {
        let mut fb = Fb::new();
        fb.draw_line((5, 5), (i32::MIN, 5), Some(RED), None).unwrap();
        assert_eq!(lit(&fb, RED).len(), 6);
        assert_eq!(fb.cursor().x_y(), (0, 5));

        fb.draw_line((3, 0), (3, i32::MAX), Some(BLUE), None).unwrap();
        assert_eq!(lit(&fb, BLUE).len(), 12);
        assert_eq!(fb.cursor().x_y(), (3, 11));

        fb.draw_line((0, 11), (i32::MAX, i32::MIN), Some(GREEN), None).unwrap();
        assert!(!lit(&fb, GREEN).is_empty());
    }

    #[test]
    fn rectangle_at_cursor() {
        let mut fb = Fb::new();
        fb.move_to((2, 3));
        fb.draw_rectangle_at_cursor(3, 3, Some(RED), Some(BLUE), RectangleStyle::Filled, None)
            .unwrap();
        assert_eq!(lit(&fb, BLUE), vec![(3, 4)]);
        assert_eq!(lit(&fb, RED).len(), 8);
        assert_eq!(fb.cursor().x_y(), (4, 5));
    }

    #[test]
    fn empty_canvas_keeps_cursor_at_origin() {
        let mut fb = FrameBuffer::<0, 4>::new();
        assert_eq!(fb.cursor().x_y(), (0, 0));
        fb.move_to((5, 5));
        assert_eq!(fb.cursor().x_y(), (0, 3));
        fb.fill_screen(RED).unwrap();
        fb.draw_line((0, 0), (3, 3), Some(RED), None).unwrap();
        assert_eq!(fb.cursor().x_y(), (0, 3));
        let state = CanvasState::new(0, 0);
        assert_eq!(state.cursor().x_y(), (0, 0));
        assert_eq!((state.cursor().max_x(), state.cursor().max_y()), (0, 0));
    }

    #[test]
    fn pen_thickness_does_not_widen_lines() {
        let mut fb = Fb::new();
        let pen = Pen::new(RED).thickness(3);
        fb.draw_line((0, 0), (15, 0), None, Some(&pen)).unwrap();
        assert_eq!(lit(&fb, RED).len(), 16);
    }

    #[test]
    fn origin_snapshot_and_restore() {
        let mut fb = Fb::new();
        fb.move_to((4, 5));
        fb.save_origin();
        fb.draw_line((4, 5), (9, 9), Some(RED), None).unwrap();
        assert_eq!(fb.cursor().x_y(), (9, 9));
        fb.restore_origin();
        assert_eq!(fb.cursor().x_y(), (4, 5));

        fb.move_origin_to((100, -3));
        assert_eq!(fb.origin().x_y(), (15, 0));
        fb.restore_origin();
        assert_eq!(fb.cursor().x_y(), (15, 0));
    }
}
