//! Human-readable report output
//!
//! Section banners, ✓/✗ status lines and indented details, written to any
//! `io::Write` so the same report can go to stdout or a test buffer.

use colored::*;
use std::io::Write;

/// Width of the `=` rule around section titles
pub const RULE_WIDTH: usize = 50;

/// Report writer
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    write_failed: bool,
}

impl<W: Write> Reporter<W> {
    /// `color` alone decides styling; NO_COLOR/CLICOLOR are not consulted
    pub fn new(out: W, color: bool) -> Self {
        if color {
            colored::control::set_override(true);
        }
        Self {
            out,
            color,
            write_failed: false,
        }
    }

    /// Titled section banner: blank line, rule, title, rule
    pub fn section(&mut self, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        let title = format!(" {}", title);
        if self.color {
            self.emit(&format!("\n{}", rule.cyan()));
            self.emit(&format!("{}", title.bold().cyan()));
            self.emit(&format!("{}", rule.cyan()));
        } else {
            self.emit(&format!("\n{}", rule));
            self.emit(&title);
            self.emit(&rule);
        }
    }

    /// Plain line
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.emit(text.as_ref());
    }

    pub fn blank(&mut self) {
        self.emit("");
    }

    /// `✓ text`
    pub fn pass(&mut self, text: impl AsRef<str>) {
        let mark = if self.color { "✓".green().to_string() } else { "✓".to_string() };
        self.emit(&format!("{} {}", mark, text.as_ref()));
    }

    /// `✗ text`
    pub fn fail(&mut self, text: impl AsRef<str>) {
        let mark = if self.color { "✗".red().to_string() } else { "✗".to_string() };
        self.emit(&format!("{} {}", mark, text.as_ref()));
    }

    /// Two-space indented detail line
    pub fn detail(&mut self, text: impl AsRef<str>) {
        self.emit(&format!("  {}", text.as_ref()));
    }

    /// Four-space indented detail line
    pub fn subdetail(&mut self, text: impl AsRef<str>) {
        self.emit(&format!("    {}", text.as_ref()));
    }

    pub fn tip(&mut self, text: impl AsRef<str>) {
        let label = if self.color { "Tip:".yellow().to_string() } else { "Tip:".to_string() };
        self.emit(&format!("  {} {}", label, text.as_ref()));
    }

    pub fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            self.note_failure(&e);
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            self.note_failure(&e);
        }
    }

    // Output failures are logged once and otherwise ignored
    fn note_failure(&mut self, err: &std::io::Error) {
        if !self.write_failed {
            tracing::warn!("report output failed: {}", err);
            self.write_failed = true;
        }
    }
}
