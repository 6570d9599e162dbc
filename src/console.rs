use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{self, Color},
    terminal,
};
use lifeclock::{Frame, Rect};
use std::{collections::BTreeSet, io};

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Paints pixel-space frames onto the terminal
///
/// Every terminal character stands for one `cell_size x cell_size` square of
/// pixels. The last terminal row is a status footer.
pub struct ConsoleRender {
    cell_size: u32,
    foreground: Color,
    background: Color,
    report: String,
}
impl ConsoleRender {
    pub fn new(cell_size: u32, foreground: Color, background: Color) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            cell_size,
            foreground,
            background,
            report: String::new(),
        })
    }

    pub fn render(&self, frame: &Frame) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let footer = rows.saturating_sub(1);
        let mut stdout = io::stdout();
        queue!(
            stdout,
            style::SetBackgroundColor(self.background),
            terminal::Clear(terminal::ClearType::All),
            style::SetForegroundColor(self.foreground)
        )?;
        for (x, y) in covered_chars(&frame.rects, self.cell_size, cols, footer) {
            queue!(stdout, cursor::MoveTo(x, y))?;
            io::Write::write_all(&mut stdout, "█".as_bytes())?;
        }

        // write footer
        queue!(stdout, style::ResetColor, cursor::MoveTo(0, footer))?;
        io::Write::write_all(&mut stdout, self.report.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let cmd = match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => ConsoleCommand::Exit,
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(cmd))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(
            io::stdout(),
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )
        .expect("restore terminal");
    }
}

/// Terminal characters covered by any of `rects`, clipped to `cols x rows`
///
/// A character is covered when the pixel square it stands for lies inside a
/// rectangle. Each character appears once, in row-major order.
fn covered_chars(rects: &[Rect], cell_size: u32, cols: u16, rows: u16) -> Vec<(u16, u16)> {
    let cs = cell_size.max(1) as i32;
    let mut covered = BTreeSet::new();
    for rect in rects {
        let x0 = rect.x.div_euclid(cs).max(0);
        let y0 = rect.y.div_euclid(cs).max(0);
        let x1 = (rect.right() + cs - 1).div_euclid(cs).min(i32::from(cols));
        let y1 = (rect.bottom() + cs - 1).div_euclid(cs).min(i32::from(rows));
        for y in y0..y1 {
            for x in x0..x1 {
                // ordered by row first so the cursor sweeps down the screen
                covered.insert((y as u16, x as u16));
            }
        }
    }
    covered.into_iter().map(|(y, x)| (x, y)).collect()
}
