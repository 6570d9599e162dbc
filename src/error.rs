use thiserror::Error;

/// Reasons a [`Layout`](crate::Layout) or [`Life`](crate::Life) cannot be built
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("live probability {0} must be between 0.0 and 1.0")]
    LiveProbability(f64),
    #[error(
        "a {width}x{height} viewport with {cell_size}px cells leaves no room for the grid{}",
        clock_suffix(.clock)
    )]
    ViewportTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
        clock: bool,
    },
    #[error("a {width}x{height} viewport does not fit in signed 32-bit pixel coordinates")]
    ViewportTooLarge { width: u32, height: u32 },
}

fn clock_suffix(clock: &bool) -> &'static str {
    if *clock { " next to the clock" } else { "" }
}
