// Turns aggregation results into display/export rows.
//
// The aggregation maps are already key-sorted; this module only decides row
// order where it differs from key order and formats the numbers.
use crate::types::{
    BranchAverageRow, BranchCountRow, CalendarMonthRow, LocationAverageRow, LocationCountRow,
    MonthlyAverageRow, ParkLocationAverageRow, ParkLocationCountRow, ParkYearAverageRow,
};
use crate::util::{format_int, format_rating, month_label, year_month_label};
use std::collections::BTreeMap;

pub const NO_DATA: &str = "no data";

pub fn branch_average_rows(averages: &BTreeMap<String, f64>) -> Vec<BranchAverageRow> {
    averages
        .iter()
        .map(|(branch, avg)| BranchAverageRow {
            branch: branch.clone(),
            average_rating: format_rating(*avg),
        })
        .collect()
}

/// Parks ordered by review count, most reviewed first.
pub fn branch_count_rows(counts: &BTreeMap<String, usize>) -> Vec<BranchCountRow> {
    let mut sorted: Vec<(&String, &usize)> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1));
    sorted
        .into_iter()
        .map(|(branch, n)| BranchCountRow {
            branch: branch.clone(),
            reviews: format_int(*n),
        })
        .collect()
}

pub fn monthly_average_rows(averages: &BTreeMap<(i32, i32), f64>) -> Vec<MonthlyAverageRow> {
    averages
        .iter()
        .map(|((year, month), avg)| MonthlyAverageRow {
            year_month: year_month_label(*year, *month),
            average_rating: format_rating(*avg),
        })
        .collect()
}

/// One row per calendar month, January to December.
///
/// Months missing from `averages` are shown as [`NO_DATA`]; keys outside
/// 1..=12 are appended after December.
pub fn calendar_month_rows(averages: &BTreeMap<i32, f64>) -> Vec<CalendarMonthRow> {
    let calendar = (1..=12).map(|m| (m, averages.get(&m).copied()));
    let extra = averages
        .iter()
        .filter(|(m, _)| !(1..=12).contains(*m))
        .map(|(m, avg)| (*m, Some(*avg)));
    calendar
        .chain(extra)
        .map(|(month, avg)| CalendarMonthRow {
            month: month_label(month),
            average_rating: avg.map(format_rating).unwrap_or_else(|| NO_DATA.to_string()),
        })
        .collect()
}

pub fn location_count_rows(ranked: &[(String, usize)]) -> Vec<LocationCountRow> {
    ranked
        .iter()
        .enumerate()
        .map(|(idx, (location, n))| LocationCountRow {
            rank: idx + 1,
            location: location.clone(),
            reviews: format_int(*n),
        })
        .collect()
}

pub fn location_average_rows(ranked: &[(String, f64)]) -> Vec<LocationAverageRow> {
    ranked
        .iter()
        .enumerate()
        .map(|(idx, (location, avg))| LocationAverageRow {
            rank: idx + 1,
            location: location.clone(),
            average_rating: format_rating(*avg),
        })
        .collect()
}

/// Parks in name order; within a park, most reviews first, then location name.
pub fn park_location_count_rows(
    counts: &BTreeMap<String, BTreeMap<String, usize>>,
) -> Vec<ParkLocationCountRow> {
    let mut rows = Vec::new();
    for (branch, by_location) in counts {
        let mut sorted: Vec<(&String, &usize)> = by_location.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(a.1));
        rows.extend(sorted.into_iter().map(|(location, n)| ParkLocationCountRow {
            branch: branch.clone(),
            location: location.clone(),
            reviews: format_int(*n),
        }));
    }
    rows
}

pub fn park_year_average_rows(
    averages: &BTreeMap<String, BTreeMap<i32, f64>>,
) -> Vec<ParkYearAverageRow> {
    averages
        .iter()
        .flat_map(|(branch, by_year)| {
            by_year.iter().map(move |(year, avg)| ParkYearAverageRow {
                branch: branch.clone(),
                year: *year,
                average_rating: format_rating(*avg),
            })
        })
        .collect()
}

pub fn park_location_average_rows(
    averages: &BTreeMap<String, BTreeMap<String, f64>>,
) -> Vec<ParkLocationAverageRow> {
    averages
        .iter()
        .flat_map(|(branch, by_location)| {
            by_location.iter().map(move |(location, avg)| ParkLocationAverageRow {
                branch: branch.clone(),
                location: location.clone(),
                average_rating: format_rating(*avg),
            })
        })
        .collect()
}
