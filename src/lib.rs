//! PeoplePick - terminal autocomplete for choosing a person by name
//!
//! A single-line search input with a dropdown of matching people. Keystrokes update the
//! input at once; the query that actually filters the list is committed only after the
//! user pauses typing.
//!
//! # Features
//!
//! - **Debounced filtering**: bursts of keystrokes collapse into one query commit
//! - **Keyboard and mouse selection**: arrows + Enter, or click a suggestion
//! - **Empty state**: a "No matching suggestions" notice instead of an empty list
//! - **JSON datasets**: load people from a file or use the built-in dataset
//!
//! # Example
//!
//! ```no_run
//! use peoplepick::{AppConfig, PeopleDirectory};
//!
//! fn main() -> peoplepick::Result<()> {
//!     let directory = PeopleDirectory::builtin()?;
//!     let config = AppConfig::default();
//!
//!     if let Some(person) = peoplepick::tui::run(directory, &config)? {
//!         println!("Picked {}", peoplepick::describe_person(&person));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod debounce;
pub mod error;
pub mod logging;
pub mod person;
pub mod search;
pub mod tui;

use std::path::PathBuf;
use std::time::Duration;

// Re-export main types
pub use debounce::Debouncer;
pub use error::{PickerError, Result};
pub use person::{PeopleDirectory, Person, Sex};
pub use tui::dropdown::{Dropdown, DropdownEvent, SuggestionPanel};

/// One-line description of a person, e.g. `Emma de Milliano (f, emma-de-milliano-1876)`
pub fn describe_person(person: &Person) -> String {
    format!("{} ({}, {})", person.name, person.sex.code(), person.slug)
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Quiet period before a typed query is applied
    pub delay: Duration,
    /// Event loop tick
    pub tick_rate: Duration,
    /// JSON dataset; the built-in dataset is used when unset
    pub people_path: Option<PathBuf>,
    /// Log file; a file in the temp directory when unset
    pub log_path: Option<PathBuf>,
    /// Maximum results printed by non-interactive search
    pub max_results: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            delay: tui::dropdown::DEFAULT_DELAY,
            tick_rate: Duration::from_millis(50),
            people_path: None,
            log_path: None,
            max_results: 100,
        }
    }
}
