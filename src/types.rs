use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One CSV row as it appears on disk, before any coercion.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Review_ID")]
    pub review_id: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
    #[serde(rename = "Year_Month")]
    pub year_month: Option<String>,
    #[serde(rename = "Reviewer_Location")]
    pub reviewer_location: Option<String>,
    #[serde(rename = "Branch")]
    pub branch: Option<String>,
}

/// A validated review. Built once by the loader and only borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub review_id: i64,
    pub rating: i32,
    pub year: i32,
    pub month: i32,
    pub reviewer_location: String,
    pub branch: String,
}

/// Global statistics over the whole collection.
///
/// `min_rating` and `max_rating` are `None` when there are no reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub total_reviews: usize,
    pub branches: Vec<String>,
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub years: Vec<i32>,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct BranchAverageRow {
    #[serde(rename = "Park")]
    #[tabled(rename = "Park")]
    pub branch: String,
    #[serde(rename = "AverageRating")]
    #[tabled(rename = "AverageRating")]
    pub average_rating: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct BranchCountRow {
    #[serde(rename = "Park")]
    #[tabled(rename = "Park")]
    pub branch: String,
    #[serde(rename = "Reviews")]
    #[tabled(rename = "Reviews")]
    pub reviews: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct MonthlyAverageRow {
    #[serde(rename = "YearMonth")]
    #[tabled(rename = "YearMonth")]
    pub year_month: String,
    #[serde(rename = "AverageRating")]
    #[tabled(rename = "AverageRating")]
    pub average_rating: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CalendarMonthRow {
    #[serde(rename = "Month")]
    #[tabled(rename = "Month")]
    pub month: String,
    #[serde(rename = "AverageRating")]
    #[tabled(rename = "AverageRating")]
    pub average_rating: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct LocationCountRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Location")]
    #[tabled(rename = "Location")]
    pub location: String,
    #[serde(rename = "Reviews")]
    #[tabled(rename = "Reviews")]
    pub reviews: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct LocationAverageRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Location")]
    #[tabled(rename = "Location")]
    pub location: String,
    #[serde(rename = "AverageRating")]
    #[tabled(rename = "AverageRating")]
    pub average_rating: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ParkLocationCountRow {
    #[serde(rename = "Park")]
    #[tabled(rename = "Park")]
    pub branch: String,
    #[serde(rename = "Location")]
    #[tabled(rename = "Location")]
    pub location: String,
    #[serde(rename = "Reviews")]
    #[tabled(rename = "Reviews")]
    pub reviews: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ParkYearAverageRow {
    #[serde(rename = "Park")]
    #[tabled(rename = "Park")]
    pub branch: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: i32,
    #[serde(rename = "AverageRating")]
    #[tabled(rename = "AverageRating")]
    pub average_rating: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ParkLocationAverageRow {
    #[serde(rename = "Park")]
    #[tabled(rename = "Park")]
    pub branch: String,
    #[serde(rename = "Location")]
    #[tabled(rename = "Location")]
    pub location: String,
    #[serde(rename = "AverageRating")]
    #[tabled(rename = "AverageRating")]
    pub average_rating: String,
}
