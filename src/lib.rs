// Person Filter - Core Library
// Exposes all modules for use in the CLI and tests

pub mod config;
pub mod criteria;
pub mod display;
pub mod entities;
pub mod filter;

// Re-export commonly used types
pub use config::{ColorChoice, DisplayConfig};
pub use criteria::{CriteriaError, CriteriaField, UserCriteria};
pub use display::{describe, describe_user, log_person, print_users, Colorizer, PlainColorizer, Style, UnknownStyle};
#[cfg(feature = "color")]
pub use display::AnsiColorizer;
pub use entities::{Admin, Person, PersonKind, User};
pub use filter::{filter_users, filter_users_raw, PersonRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
