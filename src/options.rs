use std::{str::FromStr, time::Duration};

use crossterm::style::Color;
use lifeclock::{ClockTime, Config};
use thiserror::Error;

/// Viewport used when neither the terminal nor the options give one
const HEADLESS_VIEWPORT: (u32, u32) = (800, 600);

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value {value:?} for --{name}")]
    Value { name: &'static str, value: String },
    #[error("unknown color {0:?}")]
    Color(String),
}

/// Where the clock overlay reads the time from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    Local,
    UtcOffset(i32),
}
impl TimeSource {
    pub fn now(self) -> ClockTime {
        match self {
            Self::Local => ClockTime::now(),
            Self::UtcOffset(minutes) => ClockTime::now_at_offset(minutes),
        }
    }
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "draw the simulation in the terminal");
        opts.optflag("", "clock", "show a clock above a smaller grid");
        opts.optopt(
            "d",
            "delay",
            "the amount of time to wait between generations",
            "MICROS",
        );
        opts.optopt("s", "cell-size", "pixel size of one cell", "PIXELS");
        opts.optopt(
            "p",
            "density",
            "chance of each cell starting alive",
            "PROBABILITY",
        );
        opts.optopt("", "seed", "seed for a reproducible starting grid", "N");
        opts.optopt("w", "width", "set viewport width", "PIXELS");
        opts.optopt("h", "height", "set viewport height", "PIXELS");
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt(
            "",
            "utc-offset",
            "show the clock at a fixed offset from UTC instead of local time",
            "MINUTES",
        );
        opts.optopt("", "foreground", "color of live cells", "COLOR");
        opts.optopt("", "background", "color of dead cells", "COLOR");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifeclock [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn get<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, OptionsError> {
        match self.matches.opt_str(name) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| OptionsError::Value { name, value }),
            None => Ok(None),
        }
    }

    fn color(&self, name: &'static str, default: Color) -> Result<Color, OptionsError> {
        match self.matches.opt_str(name) {
            Some(value) => Color::try_from(value.as_str()).map_err(|_| OptionsError::Color(value)),
            None => Ok(default),
        }
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn clock(&self) -> bool {
        self.matches.opt_present("clock")
    }

    pub fn delay(&self) -> Result<Duration, OptionsError> {
        Ok(self
            .get("delay")?
            .map(Duration::from_micros)
            .unwrap_or(Config::DEFAULT_DELAY))
    }
    pub fn cell_size(&self) -> Result<u32, OptionsError> {
        Ok(self.get("cell-size")?.unwrap_or(Config::DEFAULT_CELL_SIZE))
    }
    pub fn density(&self) -> Result<f64, OptionsError> {
        Ok(self
            .get("density")?
            .unwrap_or(Config::DEFAULT_LIVE_PROBABILITY))
    }
    pub fn seed(&self) -> Result<Option<u64>, OptionsError> {
        self.get("seed")
    }
    pub fn generations(&self) -> Result<u64, OptionsError> {
        match self.get("gens")? {
            Some(0) => Err(OptionsError::Value {
                name: "gens",
                value: "0".to_owned(),
            }),
            gens => Ok(gens.unwrap_or(u64::MAX)),
        }
    }
    pub fn time_source(&self) -> Result<TimeSource, OptionsError> {
        Ok(match self.get("utc-offset")? {
            Some(minutes) => TimeSource::UtcOffset(minutes),
            None => TimeSource::Local,
        })
    }

    pub fn foreground(&self) -> Result<Color, OptionsError> {
        self.color("foreground", Color::Green)
    }
    pub fn background(&self) -> Result<Color, OptionsError> {
        self.color("background", Color::Black)
    }

    /// The viewport in pixels
    ///
    /// Explicit `--width`/`--height` win. Otherwise a terminal of
    /// `(cols, rows)` characters is used, with one character per cell and the
    /// last row kept free for the status footer.
    pub fn viewport(&self, terminal: Option<(u16, u16)>) -> Result<(u32, u32), OptionsError> {
        let cell_size = self.cell_size()?;
        let default = match terminal {
            Some((cols, rows)) => (
                u32::from(cols) * cell_size,
                u32::from(rows.saturating_sub(1)) * cell_size,
            ),
            None => HEADLESS_VIEWPORT,
        };

        Ok((
            self.get("width")?.unwrap_or(default.0),
            self.get("height")?.unwrap_or(default.1),
        ))
    }

    pub fn config(&self, terminal: Option<(u16, u16)>) -> Result<Config, OptionsError> {
        let (width, height) = self.viewport(terminal)?;
        Ok(Config::new(width, height)
            .with_cell_size(self.cell_size()?)
            .with_live_probability(self.density()?)
            .with_clock(self.clock())
            .with_delay(self.delay()?))
    }
}
