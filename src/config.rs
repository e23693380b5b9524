// ⚙️ Display Configuration - when to emit color
//
// NO_COLOR (any value) wins over everything else.
// PERSON_FILTER_COLOR=always|never|auto picks the mode otherwise.

use crate::display::{Colorizer, PlainColorizer};
use anyhow::{bail, Result};
use std::env;
use std::io::IsTerminal;
use tracing::warn;

pub const NO_COLOR_VAR: &str = "NO_COLOR";
pub const COLOR_VAR: &str = "PERSON_FILTER_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    Always,
    Never,
    #[default]
    Auto,
}

impl ColorChoice {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            "auto" | "" => Ok(ColorChoice::Auto),
            other => bail!("Invalid {COLOR_VAR} value '{other}': expected always, never or auto"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    pub color: ColorChoice,
}

impl DisplayConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(NO_COLOR_VAR).ok(), env::var(COLOR_VAR).ok())
    }

    pub fn from_vars(no_color: Option<String>, color: Option<String>) -> Result<Self> {
        let color = match (no_color, color) {
            (Some(_), _) => ColorChoice::Never,
            (None, Some(value)) => ColorChoice::parse(&value).unwrap_or_else(|err| {
                warn!(error = %err, "ignoring color setting, using auto");
                ColorChoice::Auto
            }),
            (None, None) => ColorChoice::Auto,
        };

        Ok(DisplayConfig { color })
    }

    /// Resolve `Auto` against whether stdout is a terminal
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub fn colorizer(&self) -> Box<dyn Colorizer> {
        #[cfg(feature = "color")]
        if self.use_color() {
            return Box::new(crate::display::AnsiColorizer);
        }

        Box::new(PlainColorizer)
    }
}

// ============================================================================
// TESTS
// ============================================================================
