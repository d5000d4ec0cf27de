//! Load theme-park reviews from CSV and summarise them: averages by park,
//! month, year and reviewer location, two-level breakdowns, and rankings.
pub mod aggregate;
pub mod config;
pub mod loader;
pub mod logging;
pub mod output;
pub mod reports;
pub mod tui;
pub mod types;
pub mod util;

pub use aggregate::*;
pub use loader::{load_from_reader, load_reviews, LoadError, LoadReport};
pub use types::{DatasetSummary, Review};
