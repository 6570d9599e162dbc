//! Turns simulation state into filled rectangles in pixel space.
//!
//! Nothing in here draws anything: the host takes the rectangles and fills
//! them all with a single foreground color on a cleared background.

mod batch;
mod clock;
mod segment;

pub use self::batch::{batch, border};
pub use self::clock::{CLOCK_WIDTH_UNITS, ClockTime, draw_clock};
pub use self::segment::{
    DIGIT_HEIGHT_UNITS, DIGIT_WIDTH_UNITS, digit_segments, draw_digit, segment_rect,
};

use std::time::Duration;

/// An axis-aligned filled rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}
impl Rect {
    #[inline]
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a `size x size` square with its top left corner at `(x, y)`
    #[inline]
    pub fn square(x: i32, y: i32, size: u32) -> Self {
        Self::new(x, y, size, size)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// A pixel-space origin for a group of rectangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}
impl Origin {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Everything the host needs to present one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Rectangles to fill with the foreground color, in no particular order
    pub rects: Vec<Rect>,
    /// How long the host should wait before asking for the next frame
    pub delay: Duration,
}
