use super::{DIGIT_WIDTH_UNITS, Rect, draw_digit};
use chrono::{Local, Timelike, Utc};

/// Total width of a rendered `HH:MM` clock, in units
pub const CLOCK_WIDTH_UNITS: u32 = 4 * DIGIT_WIDTH_UNITS + 5 * MARGIN_UNITS;

/// Gap between neighboring digits, in units
const MARGIN_UNITS: u32 = 1;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time of day with minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
}

impl ClockTime {
    /// Returns [`None`] unless `hours < 24` and `minutes < 60`
    pub fn new(hours: u8, minutes: u8) -> Option<Self> {
        (hours < 24 && minutes < 60).then_some(Self { hours, minutes })
    }

    /// Derives the time of day from a UNIX timestamp, shifted by
    /// `utc_offset_minutes` and wrapped to a single day
    pub fn from_unix_secs(secs: u64, utc_offset_minutes: i32) -> Self {
        let minutes = (secs / 60) as i64 + i64::from(utc_offset_minutes);
        let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
        Self {
            hours: (of_day / 60) as u8,
            minutes: (of_day % 60) as u8,
        }
    }

    /// Takes the hour and minute of any `chrono` time, in that time's own
    /// zone
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
        }
    }

    /// Reads the current wall-clock time in the system's local time zone
    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    /// Reads the current time at a fixed offset from UTC, ignoring the
    /// system time zone
    pub fn now_at_offset(utc_offset_minutes: i32) -> Self {
        let secs = Utc::now().timestamp().max(0) as u64;
        Self::from_unix_secs(secs, utc_offset_minutes)
    }

    #[inline]
    pub fn hours(&self) -> u8 {
        self.hours
    }
    #[inline]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The four displayed digits, hours first
    #[inline]
    pub fn digits(&self) -> [u8; 4] {
        [
            self.hours / 10,
            self.hours % 10,
            self.minutes / 10,
            self.minutes % 10,
        ]
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Renders `time` as `HH:MM` with its top left corner at `(x, y)`
///
/// Hour digits come first, then the two colon dots, then the minute digits.
/// The colon sits in an extra margin-wide gap between the hour and minute
/// pairs.
pub fn draw_clock(time: ClockTime, x: i32, y: i32, unit: u32) -> Vec<Rect> {
    let u = unit as i32;
    let margin = (MARGIN_UNITS * unit) as i32;
    let stride = (DIGIT_WIDTH_UNITS * unit) as i32 + margin;
    let colon_x = x + 2 * stride;
    let [h1, h0, m1, m0] = time.digits();

    let mut rects = Vec::with_capacity(4 * 7 + 2);
    rects.extend(draw_digit(h1, x, y, unit));
    rects.extend(draw_digit(h0, x + stride, y, unit));
    rects.push(Rect::square(colon_x, y + 2 * u, unit));
    rects.push(Rect::square(colon_x, y + 6 * u, unit));
    rects.extend(draw_digit(m1, colon_x + 2 * margin, y, unit));
    rects.extend(draw_digit(m0, colon_x + stride + 2 * margin, y, unit));
    rects
}
