use clap::Parser;
use std::path::PathBuf;

/// Interactive explorer for theme-park review data.
#[derive(Parser, Debug, Clone)]
#[command(name = "park_reviews", version)]
pub struct Cli {
    /// CSV file with Review_ID, Rating, Year_Month, Reviewer_Location and Branch columns.
    #[arg(long, env = "PARK_REVIEWS_DATA", default_value = "data/disneyland_reviews.csv")]
    pub data: PathBuf,

    /// Directory that exported reports are written to.
    #[arg(long, env = "PARK_REVIEWS_OUT", default_value = ".")]
    pub out_dir: PathBuf,

    /// Default number of entries in ranking views.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub top: u16,
}
