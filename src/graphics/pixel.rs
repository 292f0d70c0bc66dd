//! Cartesian coordinates used as drawing cursors.
//!
//! `Pixel` is a free coordinate pair. `BoundPixel` additionally keeps both coordinates inside a
//! rectangle of inclusive limits, clamping any write that falls outside instead of rejecting it,
//! so cursor arithmetic near the edges of a display never has to handle an error.
//!
//! The meaning of `(0, 0)` is left to the surface the coordinates are used on; for the bundled
//! drivers it is the top-left corner of the panel.

use crate::error::Error;

/// Clip a value between some low and high limit.
fn clip<T: PartialOrd>(lo: T, x: T, hi: T) -> T {
    match () {
        _ if x > hi => hi,
        _ if x < lo => lo,
        _ => x,
    }
}

/// Offset `(x, y)` by the polar vector of length `r` at angle `theta` (radians), rounding the
/// vector components to the nearest integer.
fn polar(x: i32, y: i32, r: f64, theta: f64) -> (i32, i32) {
    let dx = libm::round(r * libm::cos(theta)) as i32;
    let dy = libm::round(r * libm::sin(theta)) as i32;
    (x + dx, y + dy)
}

/// A mutable Cartesian coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Pixel { x, y }
    }

    /// The coordinate as an `(x, y)` tuple.
    pub const fn x_y(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_x_y(&mut self, xy: (i32, i32)) {
        self.x = xy.0;
        self.y = xy.1;
    }

    /// Move the coordinate to `xy`. An alias for `set_x_y`.
    pub fn move_to(&mut self, xy: (i32, i32)) {
        self.set_x_y(xy)
    }

    /// The coordinate displaced by `(dx, dy)`. `self` is not modified.
    pub const fn offset(&self, dx: i32, dy: i32) -> (i32, i32) {
        (self.x + dx, self.y + dy)
    }

    /// The coordinate displaced by a distance `r` in the direction `theta` (radians, measured
    /// from the x axis towards the y axis). `self` is not modified.
    pub fn offset_polar(&self, r: f64, theta: f64) -> (i32, i32) {
        polar(self.x, self.y, r, theta)
    }

    /// Build a coordinate from a sequence of values, where the first entry is `x` and the second
    /// is `y`. Any further entries are ignored; fewer than two is an `InvalidArgument`.
    pub fn from_slice<E>(xy: &[i32]) -> Result<Self, Error<E>> {
        match xy {
            [x, y, ..] => Ok(Pixel::new(*x, *y)),
            _ => Err(Error::InvalidArgument),
        }
    }
}

impl From<(i32, i32)> for Pixel {
    fn from(xy: (i32, i32)) -> Self {
        Pixel::new(xy.0, xy.1)
    }
}

impl From<Pixel> for (i32, i32) {
    fn from(pixel: Pixel) -> Self {
        pixel.x_y()
    }
}

/// A Cartesian coordinate which always lies within `[min_x, max_x] × [min_y, max_y]`.
///
/// Every write is clamped to the nearest limit, so `min_x <= x() <= max_x` and
/// `min_y <= y() <= max_y` hold at all times. The limits are fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundPixel {
    x: i32,
    y: i32,
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl BoundPixel {
    /// Create a coordinate limited to `[0, max_x] × [0, max_y]`, starting at `(x, y)` clamped to
    /// those limits.
    pub fn new(x: i32, y: i32, max_x: i32, max_y: i32) -> Self {
        Self::with_limits(x, y, max_x, max_y, 0, 0)
    }

    /// Create a coordinate limited to `[min_x, max_x] × [min_y, max_y]`, starting at `(x, y)`
    /// clamped to those limits.
    pub fn with_limits(x: i32, y: i32, max_x: i32, max_y: i32, min_x: i32, min_y: i32) -> Self {
        // The limits have to be in place before the initial position, which is clamped too.
        let mut pixel = BoundPixel {
            x: min_x,
            y: min_y,
            min_x,
            max_x,
            min_y,
            max_y,
        };
        pixel.set_x(x);
        pixel.set_y(y);
        pixel
    }

    pub fn x(&self) -> i32 {
        clip(self.min_x, self.x, self.max_x)
    }

    pub fn y(&self) -> i32 {
        clip(self.min_y, self.y, self.max_y)
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = clip(self.min_x, x, self.max_x);
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = clip(self.min_y, y, self.max_y);
    }

    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn x_y(&self) -> (i32, i32) {
        (self.x(), self.y())
    }

    pub fn set_x_y(&mut self, xy: (i32, i32)) {
        self.set_x(xy.0);
        self.set_y(xy.1);
    }

    /// Move the coordinate to `xy`, clamped to the limits. An alias for `set_x_y`.
    pub fn move_to(&mut self, xy: (i32, i32)) {
        self.set_x_y(xy)
    }

    /// The coordinate displaced by `(dx, dy)`. The result is *not* clamped, and `self` is not
    /// modified.
    pub fn offset(&self, dx: i32, dy: i32) -> (i32, i32) {
        (self.x() + dx, self.y() + dy)
    }

    /// The coordinate displaced by a distance `r` in the direction `theta` (radians). The result
    /// is *not* clamped, and `self` is not modified.
    pub fn offset_polar(&self, r: f64, theta: f64) -> (i32, i32) {
        polar(self.x(), self.y(), r, theta)
    }

    /// The current position as an unbounded `Pixel`.
    pub fn as_pixel(&self) -> Pixel {
        Pixel::new(self.x(), self.y())
    }
}

impl From<BoundPixel> for Pixel {
    fn from(pixel: BoundPixel) -> Self {
        pixel.as_pixel()
    }
}
