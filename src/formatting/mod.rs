//! Colour and glyph handling for terminal output.

use crate::health::HealthStatus;
use crate::risk::Severity;
use crate::scoring::Grade;
use colored::{ColoredString, Colorize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    /// Use Unicode status glyphs; ASCII tags otherwise
    pub glyphs: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            glyphs: true,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only, no colours
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            glyphs: false,
        }
    }
}

/// Applies a [`FormattingConfig`] to the pieces of a rendered report
pub struct Painter {
    color: bool,
    glyphs: bool,
}

impl Painter {
    pub fn new(config: FormattingConfig) -> Self {
        let color = config.color.should_use_color();
        colored::control::set_override(color);
        Self {
            color,
            glyphs: config.glyphs,
        }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    pub fn status(&self, status: HealthStatus, text: &str) -> String {
        match status {
            HealthStatus::Good => self.paint(text, |t| t.green()),
            HealthStatus::Warning => self.paint(text, |t| t.yellow()),
            HealthStatus::Critical => self.paint(text, |t| t.red()),
        }
    }

    pub fn grade(&self, grade: Grade, text: &str) -> String {
        match grade {
            Grade::Strong => self.paint(text, |t| t.green().bold()),
            Grade::NeedsOptimization => self.paint(text, |t| t.yellow().bold()),
            Grade::AtRisk => self.paint(text, |t| t.red().bold()),
        }
    }

    pub fn severity(&self, severity: Severity, text: &str) -> String {
        match severity {
            Severity::High => self.paint(text, |t| t.red().bold()),
            Severity::Medium => self.paint(text, |t| t.yellow()),
            Severity::Low => self.paint(text, |t| t.cyan()),
        }
    }

    /// Status marker: a glyph, or an ASCII tag in plain mode
    pub fn status_marker(&self, status: HealthStatus) -> &'static str {
        match (status, self.glyphs) {
            (HealthStatus::Good, true) => "●",
            (HealthStatus::Warning, true) => "▲",
            (HealthStatus::Critical, true) => "✗",
            (HealthStatus::Good, false) => "[OK]",
            (HealthStatus::Warning, false) => "[WARN]",
            (HealthStatus::Critical, false) => "[CRIT]",
        }
    }

    pub fn glyph(&self, glyph: &'static str, fallback: &'static str) -> &'static str {
        if self.glyphs {
            glyph
        } else {
            fallback
        }
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
