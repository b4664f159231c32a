// src/report/paint.rs

//! ANSI styling as a pure rendering option.
//!
//! `Paint` wraps text in `owo-colors` styles when enabled and returns the
//! identical text unstyled when disabled, so color mode can never change what
//! a report says.

use std::io::IsTerminal;

use owo_colors::{OwoColorize, Style};

#[derive(Debug, Clone, Copy, Default)]
pub struct Paint {
    enabled: bool,
}

impl Paint {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Resolve the effective color mode: the `--no-color` flag wins, then
    /// stdout must be a terminal and `TERM` must look like a color terminal.
    pub fn auto(no_color_flag: bool) -> Self {
        Self::new(!no_color_flag && stdout_supports_color())
    }

    fn apply(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn cyan(&self, text: &str) -> String {
        self.apply(text, Style::new().cyan())
    }

    pub fn yellow(&self, text: &str) -> String {
        self.apply(text, Style::new().yellow())
    }

    pub fn green(&self, text: &str) -> String {
        self.apply(text, Style::new().green())
    }

    pub fn red(&self, text: &str) -> String {
        self.apply(text, Style::new().red())
    }

    pub fn bold_white(&self, text: &str) -> String {
        self.apply(text, Style::new().bold().white())
    }

    pub fn bold_yellow(&self, text: &str) -> String {
        self.apply(text, Style::new().bold().yellow())
    }

    pub fn bold_green(&self, text: &str) -> String {
        self.apply(text, Style::new().bold().green())
    }

    pub fn bold_red(&self, text: &str) -> String {
        self.apply(text, Style::new().bold().red())
    }
}

/// Whether stdout can take ANSI colors: it must be a terminal and `TERM`
/// must be set to something other than `dumb`.
pub fn stdout_supports_color() -> bool {
    if !std::io::stdout().is_terminal() {
        return false;
    }
    match std::env::var("TERM") {
        Ok(term) => !term.is_empty() && term != "dumb",
        Err(_) => false,
    }
}
