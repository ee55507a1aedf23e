//! Diagnostic output for the metadata repair pipeline
//!
//! Repairs are narrated on stderr so CI logs show what was changed, while
//! stdout stays reserved for the repaired JSON.

use console::Style;

/// Collects repair notes and optionally echoes them to stderr
#[derive(Debug, Default)]
pub struct Diagnostics {
    lines: Vec<String>,
    echo: bool,
}

impl Diagnostics {
    /// Diagnostics that print each note to stderr as it is recorded
    pub fn stderr() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    /// Diagnostics that only collect notes (used by tests)
    pub fn silent() -> Self {
        Self::default()
    }

    /// Record one repair note
    pub fn note(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.echo {
            eprintln!("{} {}", Style::new().green().apply_to("✓"), message);
        }
        self.lines.push(message);
    }

    /// All recorded notes, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any repair was recorded
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
