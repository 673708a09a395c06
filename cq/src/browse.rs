//! Interactive country browser.
//!
//! One input line, a hint line, then the list. The fetch runs as a task and
//! the loop waits on either terminal events or the fetch result, redrawing
//! after each.

use std::io::{self, Write};
use std::ops::Range;

use atlas::{view, Country, Highlight, RemoteData, SelectionState, View};
use crossterm::{
    cursor::MoveTo,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand, QueueableCommand,
};
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::sync::mpsc;

use crate::commands::{fit_width, Source};

/// Screen line of the first list row.
const LIST_TOP: u16 = 2;

const HINT: &str = "search:<word> size:<n>  |  Up/Down move  Enter/click toggle  Esc quit";

/// What the loop should do after an event.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Browser state besides the selection: data, row cursor and scroll window.
struct Browser {
    state: SelectionState,
    data: RemoteData,
    cursor: usize,
    /// Index of the first drawn row.
    scroll: usize,
    /// Rows that fit below the header lines.
    page_rows: usize,
}

impl Browser {
    fn new(initial_input: &str) -> Self {
        let mut state = SelectionState::new();
        state.set_input(initial_input);
        Self {
            state,
            data: RemoteData::Loading,
            cursor: 0,
            scroll: 0,
            page_rows: 1,
        }
    }

    /// Update the page height from the terminal height.
    fn resize(&mut self, height: u16) {
        self.page_rows = page_rows(height);
        self.follow_cursor();
    }

    /// Scroll so the cursor row is inside the drawn window.
    fn follow_cursor(&mut self) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.page_rows {
            self.scroll = self.cursor + 1 - self.page_rows;
        }
    }

    /// Indexes of the rows drawn for a list of `len` rows.
    fn window(&self, len: usize) -> Range<usize> {
        let start = self.scroll.min(len);
        start..(start + self.page_rows).min(len)
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
    }

    fn countries(&self) -> Option<&[Country]> {
        self.data.countries()
    }

    fn visible_len(&self) -> usize {
        self.countries()
            .map(|c| atlas::visible(c, self.state.input()).len())
            .unwrap_or(0)
    }

    /// Toggle a row if data is loaded.
    fn click(&mut self, index: usize) {
        if let RemoteData::Ready(countries) = &self.data {
            if self.state.click(countries, index) {
                self.cursor = index;
                self.follow_cursor();
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Quit,
            KeyCode::Char(c) => {
                self.state.push_char(c);
                self.reset_cursor();
            }
            KeyCode::Backspace => {
                self.state.pop_char();
                self.reset_cursor();
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                self.follow_cursor();
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.visible_len() {
                    self.cursor += 1;
                }
                self.follow_cursor();
            }
            KeyCode::Enter => self.click(self.cursor),
            _ => {}
        }

        Flow::Continue
    }

    fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    if let Some(line) = row_at(mouse.row) {
                        if line < self.page_rows {
                            self.click(self.scroll + line);
                        }
                    }
                }
                Flow::Continue
            }
            Event::Resize(_, height) => {
                self.resize(height);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }
}

/// Line within the list area for a screen line, if it is in the list area.
fn row_at(line: u16) -> Option<usize> {
    line.checked_sub(LIST_TOP).map(usize::from)
}

/// Rows that fit on a terminal of `height` lines (at least one).
fn page_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(LIST_TOP)).max(1)
}

/// Terminal color for a row background. Neutral uses the terminal default.
fn background(highlight: Highlight) -> Option<Color> {
    if highlight == Highlight::NEUTRAL {
        None
    } else {
        Some(Color::Rgb {
            r: highlight.r,
            g: highlight.g,
            b: highlight.b,
        })
    }
}

/// Run the browser until the user quits.
pub async fn browse(initial_input: &str, source: Source) -> atlas::Result<()> {
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;

    let result = run_loop(&mut stdout, initial_input, source).await;

    // Always restore terminal
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

async fn run_loop(stdout: &mut io::Stdout, initial_input: &str, source: Source) -> atlas::Result<()> {
    let mut browser = Browser::new(initial_input);
    let (_, height) = terminal::size()?;
    browser.resize(height);

    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let _ = fetch_tx.send(source.load().await);
    });

    let mut events = EventStream::new();

    loop {
        let frame = view(&mut browser.state, &browser.data);
        draw(stdout, &browser, &frame)?;

        tokio::select! {
            Some(result) = fetch_rx.recv() => {
                if let Err(e) = &result {
                    warn!("country fetch failed: {}", e);
                }
                browser.data = RemoteData::from(result);
                if let Some(countries) = browser.countries() {
                    info!("browser has {} countries", countries.len());
                }
            }
            Some(event) = events.next() => {
                let event = event?;
                debug!("terminal event: {:?}", event);
                if browser.handle_event(event) == Flow::Quit {
                    break;
                }
            }
            else => break,
        }
    }

    Ok(())
}

fn draw(stdout: &mut io::Stdout, browser: &Browser, frame: &View) -> io::Result<()> {
    let (width, _) = terminal::size()?;
    let width = usize::from(width);

    stdout.queue(Clear(ClearType::All))?;

    stdout.queue(MoveTo(0, 1))?;
    stdout.queue(SetForegroundColor(Color::DarkGrey))?;
    stdout.queue(Print(fit_width(HINT, width)))?;
    stdout.queue(ResetColor)?;

    match frame {
        View::List(rows) => {
            let window = browser.window(rows.len());
            for (line, i) in window.enumerate() {
                let row = &rows[i];
                stdout.queue(MoveTo(0, LIST_TOP + line as u16))?;
                let pointer = if i == browser.cursor { "> " } else { "  " };
                stdout.queue(Print(pointer))?;
                if let Some(color) = background(row.background) {
                    stdout.queue(SetBackgroundColor(color))?;
                    stdout.queue(SetForegroundColor(Color::Black))?;
                }
                stdout.queue(Print(fit_width(&row.label, width.saturating_sub(2))))?;
                stdout.queue(ResetColor)?;
            }
        }
        other => {
            stdout.queue(MoveTo(0, LIST_TOP))?;
            stdout.queue(Print(other.placeholder().unwrap_or_default()))?;
        }
    }

    let input = browser.state.input();
    stdout.queue(MoveTo(0, 0))?;
    stdout.queue(Print(fit_width(&format!("Search: {}", input), width)))?;
    stdout.flush()?;

    Ok(())
}
