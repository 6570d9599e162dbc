use crate::ConfigError;
use crate::render::{CLOCK_WIDTH_UNITS, Origin};
use std::time::Duration;

/// Columns given up to the clock and the border around the grid
pub const CLOCK_MARGIN_COLS: u32 = 26;
/// Rows given up to the clock and the border around the grid
pub const CLOCK_MARGIN_ROWS: u32 = 28;

/// Where the grid sits in clock mode, in cells from the top left corner
const CLOCK_FIELD_OFFSET: (u32, u32) = (CLOCK_MARGIN_COLS / 2, 20);
/// Distance of the clock from the top of the viewport, in cells
const CLOCK_TOP_OFFSET: u32 = 5;

/// Everything a host decides before the first generation
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Pixel size of one cell, also the unit of the clock digits
    pub cell_size: u32,
    /// Chance of each cell starting alive
    pub live_probability: f64,
    pub clock: bool,
    /// Pause between generations, handed back to the host with every frame
    pub delay: Duration,
}

impl Config {
    pub const DEFAULT_CELL_SIZE: u32 = 10;
    pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.5;
    pub const DEFAULT_DELAY: Duration = Duration::from_micros(100_000);

    /// A config with default settings for a viewport of the given size
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            cell_size: Self::DEFAULT_CELL_SIZE,
            live_probability: Self::DEFAULT_LIVE_PROBABILITY,
            clock: false,
            delay: Self::DEFAULT_DELAY,
        }
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }
    pub fn with_live_probability(mut self, live_probability: f64) -> Self {
        self.live_probability = live_probability;
        self
    }
    pub fn with_clock(mut self, clock: bool) -> Self {
        self.clock = clock;
        self
    }
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Grid dimensions and drawing positions derived from a [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: u32,
    /// Top left corner of the grid's first cell
    pub field: Origin,
    /// Top left corner of the clock, present only in clock mode
    pub clock: Option<Origin>,
}

impl Layout {
    /// Fits the grid (and the clock, if enabled) into the viewport
    ///
    /// Fails if the viewport cannot hold at least one full cell once the clock
    /// margin has been taken out, or if its pixels cannot be addressed with
    /// `i32` coordinates.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let cs = config.cell_size;
        if cs == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        // every rect lies inside the viewport, so this bounds all coordinates
        let too_large = |_| ConfigError::ViewportTooLarge {
            width: config.viewport_width,
            height: config.viewport_height,
        };
        let width = i32::try_from(config.viewport_width).map_err(too_large)?;
        i32::try_from(config.viewport_height).map_err(too_large)?;

        let too_small = || ConfigError::ViewportTooSmall {
            width: config.viewport_width,
            height: config.viewport_height,
            cell_size: cs,
            clock: config.clock,
        };

        let mut cols = config.viewport_width / cs;
        let mut rows = config.viewport_height / cs;
        if config.clock {
            cols = cols.checked_sub(CLOCK_MARGIN_COLS).ok_or_else(too_small)?;
            rows = rows.checked_sub(CLOCK_MARGIN_ROWS).ok_or_else(too_small)?;
        }
        if cols == 0 || rows == 0 {
            return Err(too_small());
        }

        let (field, clock) = if config.clock {
            // at least 27 cells fit across, so the cell size fits as well
            let cs = cs as i32;
            let field = Origin::new(
                CLOCK_FIELD_OFFSET.0 as i32 * cs,
                CLOCK_FIELD_OFFSET.1 as i32 * cs,
            );
            let clock_width = CLOCK_WIDTH_UNITS as i32 * cs;
            let clock = Origin::new(
                (width - clock_width) / 2,
                CLOCK_TOP_OFFSET as i32 * cs,
            );
            (field, Some(clock))
        } else {
            (Origin::default(), None)
        };

        Ok(Self {
            rows: rows as usize,
            cols: cols as usize,
            cell_size: cs,
            field,
            clock,
        })
    }
}
