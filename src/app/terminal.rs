use std::{
    io::{self, Stdout},
    sync::Once,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};

static RESTORE_ON_PANIC: Once = Once::new();

/// The wizard's hold on the terminal: raw mode, the alternate screen and
/// bracketed paste, so a pasted pull secret arrives as one event.
pub(super) struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    closed: bool,
}

impl Screen {
    pub fn open() -> Result<Self> {
        RESTORE_ON_PANIC.call_once(|| {
            let report = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                // a panic message printed in raw mode is unreadable
                let _ = leave();
                report(info);
            }));
        });

        enable_raw_mode().context("could not switch the terminal to raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(err).context("could not open the wizard screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = leave();
                return Err(err).context("could not attach to the terminal");
            }
        };
        Ok(Self {
            terminal,
            closed: false,
        })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal
            .draw(render)
            .context("could not draw the wizard")?;
        Ok(())
    }

    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.terminal
            .resize(Rect::new(0, 0, width, height))
            .context("could not resize the wizard screen")
    }

    /// Hands the terminal back to the shell. Safe to call twice.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.terminal.show_cursor().context("could not show the cursor")?;
        leave().context("could not restore the terminal")
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::warn!(error = %format!("{err:#}"), "terminal left in a dirty state");
        }
    }
}

fn leave() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen, Show);
    raw.and(screen)
}
