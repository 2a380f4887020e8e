//! A screen that renders the order summary and the cup as plain text.
use std::io::{self, Write};

use tracing::warn;

use crate::cup_fill::CupFill;
use crate::screen::Screen;

const CUP_SEGMENTS: usize = 10;

/// Writes each summary on its own line and draws the cup as a bar such as
/// `cup [#######...] 65% linear-gradient(180deg, #ffe0b2, #ffb74d)`.
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl TerminalScreen<io::Stdout> {
    pub fn stdout() -> TerminalScreen<io::Stdout> {
        TerminalScreen::new(io::stdout())
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> TerminalScreen<W> {
        TerminalScreen { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn show_summary(&mut self, text: &str) {
        self.write_line(text);
    }

    fn fill_cup(&mut self, fill: &CupFill) {
        let line = render_cup(fill);
        self.write_line(&line);
    }
}

/// Text form of a cup fill.
pub fn render_cup(fill: &CupFill) -> String {
    let filled = ((usize::from(fill.height_percent()) * CUP_SEGMENTS + 50) / 100).min(CUP_SEGMENTS);
    let mut line = format!(
        "cup [{}{}] {}",
        "#".repeat(filled),
        ".".repeat(CUP_SEGMENTS - filled),
        fill.css_height()
    );
    if let Some(background) = fill.css_background() {
        line.push(' ');
        line.push_str(&background);
    }
    line
}
