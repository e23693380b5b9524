// 🎨 Display - person lines and terminal colors
//
// Color is cosmetic only. Swapping AnsiColorizer for PlainColorizer changes
// escape codes, never the text.

use crate::entities::{Person, User};
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// STYLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Green,
    Yellow,
    Bold,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Green => "green",
            Style::Yellow => "yellow",
            Style::Bold => "bold",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown style '{0}'")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "green" => Ok(Style::Green),
            "yellow" => Ok(Style::Yellow),
            "bold" => Ok(Style::Bold),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

// ============================================================================
// COLORIZERS
// ============================================================================

pub trait Colorizer {
    fn colorize(&self, text: &str, style: Style) -> String;

    /// Colorize by style name, e.g. `"green"`
    fn colorize_named(&self, text: &str, style_name: &str) -> Result<String, UnknownStyle> {
        Ok(self.colorize(text, style_name.parse()?))
    }
}

/// Returns text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainColorizer;

impl Colorizer for PlainColorizer {
    fn colorize(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}

/// ANSI escape sequences via crossterm
#[cfg(feature = "color")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiColorizer;

#[cfg(feature = "color")]
impl Colorizer for AnsiColorizer {
    fn colorize(&self, text: &str, style: Style) -> String {
        use crossterm::style::{style as styled, Attribute, Color, Stylize};

        let content = styled(text);
        let content = match style {
            Style::Green => content.with(Color::Green),
            Style::Yellow => content.with(Color::Yellow),
            Style::Bold => content.attribute(Attribute::Bold),
        };

        content.to_string()
    }
}

// ============================================================================
// PERSON OUTPUT
// ============================================================================

/// ` - {name}, {age}, {occupation|role}` with the name in green
pub fn describe(person: &Person, colorizer: &dyn Colorizer) -> String {
    format_line(colorizer, person.name(), person.age(), person.additional_info())
}

pub fn describe_user(user: &User, colorizer: &dyn Colorizer) -> String {
    format_line(colorizer, &user.name, user.age, &user.occupation)
}

fn format_line(colorizer: &dyn Colorizer, name: &str, age: u32, info: &str) -> String {
    format!(" - {}, {}, {}", colorizer.colorize(name, Style::Green), age, info)
}

/// Write one described line for `person`
pub fn log_person<W: Write>(out: &mut W, colorizer: &dyn Colorizer, person: &Person) -> io::Result<()> {
    writeln!(out, "{}", describe(person, colorizer))
}

/// Yellow header line followed by one line per user, in order
pub fn print_users<W: Write>(
    out: &mut W,
    colorizer: &dyn Colorizer,
    header: &str,
    users: &[User],
) -> io::Result<()> {
    writeln!(out, "{}", colorizer.colorize(header, Style::Yellow))?;

    for user in users {
        writeln!(out, "{}", describe_user(user, colorizer))?;
    }

    out.flush()
}

// ============================================================================
// TESTS
// ============================================================================
