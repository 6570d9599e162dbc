use std::{error::Error, thread};

use lifeclock::{Frame, Life};
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};

mod console;
mod options;
mod stats;

use options::TimeSource;
use stats::SimpleRecord;

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// One generation: the same rectangles whether or not a console shows them
fn next_frame(life: &mut Life, time: TimeSource) -> Frame {
    life.draw(time.now())
}

fn run(args: options::Args) -> Result<(), Box<dyn Error>> {
    let terminal = if args.console() {
        Some(crossterm::terminal::size()?)
    } else {
        None
    };
    let config = args.config(terminal)?;
    info!(
        "viewport {}x{}, cell size {}, density {}, clock {}, delay {:?}",
        config.viewport_width,
        config.viewport_height,
        config.cell_size,
        config.live_probability,
        config.clock,
        config.delay
    );

    let mut rng = seeded_rng(args.seed()?);
    let mut life = Life::new(&config, &mut rng)?;
    let time = args.time_source()?;
    let generations = args.generations()?;

    // setup the terminal and reporting metrics
    let mut console = if args.console() {
        Some(console::ConsoleRender::new(
            config.cell_size,
            args.foreground()?,
            args.background()?,
        )?)
    } else {
        None
    };
    let mut stats = SimpleRecord::new(life.grid().alive_count());

    'generations: for _ in 0..generations {
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    console::ConsoleCommand::Exit => break 'generations,
                    console::ConsoleCommand::Handled => {}
                }
            }
        }

        let frame = next_frame(&mut life, time);
        if let Some(ref console) = console {
            console.render(&frame)?;
        }
        stats.record(life.grid().alive_count());

        if stats.has_report() {
            let report = stats.report();
            match console {
                Some(ref mut console) => console.set_report(report),
                None => info!("{}", report),
            }
        }

        if !frame.delay.is_zero() {
            thread::sleep(frame.delay);
        }
    }
    std::mem::drop(console);

    info!(
        "stopped after {} generations with {} live cells",
        life.generation(),
        life.grid().alive_count()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match options::Args::from_env() {
        Ok(Some(args)) => args,
        Ok(None) => return,
        Err(err) => {
            error!("{}", err);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        error!("{}", err);
        std::process::exit(1);
    }
}
