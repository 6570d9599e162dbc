use crate::render::{self, ClockTime, Frame, Rect};
use crate::{Config, ConfigError, Grid, Layout, Stepper};
use log::{debug, trace};
use rand::Rng;
use std::time::Duration;

/// A running simulation, owned by the host and driven one frame at a time
#[derive(Debug)]
pub struct Life {
    grid: Grid,
    stepper: Stepper,
    layout: Layout,
    delay: Duration,
    generation: u64,
}

impl Life {
    /// Lays out the viewport and seeds a random grid to fill it
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Self, ConfigError> {
        let p = config.live_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::LiveProbability(p));
        }
        let layout = Layout::new(config)?;
        let grid = Grid::random(layout.rows, layout.cols, p, rng);
        debug!(
            "seeded {}x{} grid with {} live cells, clock: {}",
            layout.cols,
            layout.rows,
            grid.alive_count(),
            layout.clock.is_some()
        );
        Ok(Self::with_grid(grid, layout, config.delay))
    }

    /// Wraps an existing grid, which must match the layout's dimensions
    pub fn with_grid(grid: Grid, layout: Layout, delay: Duration) -> Self {
        debug_assert_eq!(
            (grid.rows(), grid.cols()),
            (layout.rows, layout.cols),
            "grid does not match layout"
        );
        Self {
            grid,
            stepper: Stepper::new(),
            layout,
            delay,
            generation: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn clock_enabled(&self) -> bool {
        self.layout.clock.is_some()
    }

    /// Rectangles for the current generation, without advancing it
    ///
    /// In clock mode the clock comes first, then the border, then the cells.
    /// `now` is ignored when the clock is disabled.
    pub fn render(&self, now: ClockTime) -> Vec<Rect> {
        let Layout {
            rows,
            cols,
            cell_size,
            field,
            clock,
        } = self.layout;

        let mut rects = Vec::new();
        if let Some(origin) = clock {
            rects.extend(render::draw_clock(now, origin.x, origin.y, cell_size));
            rects.extend(render::border(rows, cols, cell_size, field));
        }
        rects.extend(render::batch(self.grid.live_cells(), cell_size, field));
        rects
    }

    pub fn step(&mut self) {
        self.stepper.step(&mut self.grid);
        self.generation += 1;
        trace!(
            "generation {}: {} alive",
            self.generation,
            self.grid.alive_count()
        );
    }

    /// Produces the frame for the current generation, then advances to the
    /// next one
    pub fn draw(&mut self, now: ClockTime) -> Frame {
        let rects = self.render(now);
        self.step();
        Frame {
            rects,
            delay: self.delay,
        }
    }
}
