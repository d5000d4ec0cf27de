use crate::types::{RawRow, Review};
use crate::util::{non_blank, parse_i32_safe, parse_i64_safe, parse_year_month};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not find data file at {0}")]
    NotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub skipped_rows: usize,
}

pub fn load_reviews(path: &Path) -> Result<(Vec<Review>, LoadReport), LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let loaded = load_from_reader(file)?;
    info!(
        path = %path.display(),
        loaded = loaded.1.loaded_rows,
        skipped = loaded.1.skipped_rows,
        "dataset loaded"
    );
    Ok(loaded)
}

/// Read reviews from any CSV source with a header row.
///
/// Rows that cannot be coerced into a [`Review`] are counted and skipped;
/// only an unreadable header fails the whole load.
pub fn load_from_reader<R: Read>(reader: R) -> Result<(Vec<Review>, LoadReport), LoadError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    rdr.headers()?;

    let mut report = LoadReport::default();
    let mut reviews: Vec<Review> = Vec::new();

    for result in rdr.deserialize::<RawRow>() {
        report.total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                debug!(row = report.total_rows, error = %e, "skipping undecodable row");
                report.skipped_rows += 1;
                continue;
            }
        };
        match to_review(row) {
            Ok(review) => reviews.push(review),
            Err(reason) => {
                debug!(row = report.total_rows, reason, "skipping malformed row");
                report.skipped_rows += 1;
            }
        }
    }

    report.loaded_rows = reviews.len();
    Ok((reviews, report))
}

fn to_review(row: RawRow) -> Result<Review, &'static str> {
    let review_id = parse_i64_safe(row.review_id.as_deref()).ok_or("bad Review_ID")?;
    let rating = parse_i32_safe(row.rating.as_deref()).ok_or("bad Rating")?;
    let (year, month) = parse_year_month(row.year_month.as_deref()).ok_or("bad Year_Month")?;
    let branch = non_blank(row.branch.as_deref()).ok_or("missing Branch")?;
    // An absent column is malformed; a present but blank value is not.
    let reviewer_location = match row.reviewer_location.as_deref() {
        None => return Err("missing Reviewer_Location"),
        Some(loc) => non_blank(Some(loc)).unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
    };

    Ok(Review {
        review_id,
        rating,
        year,
        month,
        reviewer_location,
        branch,
    })
}
