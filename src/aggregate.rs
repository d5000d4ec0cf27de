//! Grouping and reduction queries over an immutable slice of reviews.
//!
//! Every query is a pure function: it borrows the reviews, never mutates
//! them, and returns a freshly built map or vector. An empty input, or a
//! branch with no reviews, yields an empty result rather than an error.
//!
//! All averages go through [`Tally`], so rounding is applied in exactly one
//! place ([`Tally::mean`]).
use crate::types::{DatasetSummary, Review};
use crate::util::round2;
use std::collections::{BTreeMap, BTreeSet};

/// Running sum and count of ratings for one key.
///
/// Only built inside this module, always with at least one rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    sum: i64,
    count: usize,
}

impl Tally {
    fn first(rating: i32) -> Self {
        Tally {
            sum: i64::from(rating),
            count: 1,
        }
    }

    fn add(&mut self, rating: i32) {
        self.sum += i64::from(rating);
        self.count += 1;
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean rating rounded to two decimals.
    pub fn mean(&self) -> f64 {
        round2(self.sum as f64 / self.count as f64)
    }
}

fn record<K: Ord>(tallies: &mut BTreeMap<K, Tally>, key: K, rating: i32) {
    tallies
        .entry(key)
        .and_modify(|t| t.add(rating))
        .or_insert_with(|| Tally::first(rating));
}

/// Accumulate ratings per key. Only keys seen in the input get an entry.
pub fn tally_by<'a, K, I, F>(reviews: I, key: F) -> BTreeMap<K, Tally>
where
    K: Ord,
    I: IntoIterator<Item = &'a Review>,
    F: Fn(&Review) -> K,
{
    let mut tallies: BTreeMap<K, Tally> = BTreeMap::new();
    for r in reviews {
        record(&mut tallies, key(r), r.rating);
    }
    tallies
}

/// Two-level variant of [`tally_by`]: outer key, then inner key.
pub fn tally_nested<'a, O, N, I, FO, FN>(
    reviews: I,
    outer: FO,
    inner: FN,
) -> BTreeMap<O, BTreeMap<N, Tally>>
where
    O: Ord,
    N: Ord,
    I: IntoIterator<Item = &'a Review>,
    FO: Fn(&Review) -> O,
    FN: Fn(&Review) -> N,
{
    let mut tallies: BTreeMap<O, BTreeMap<N, Tally>> = BTreeMap::new();
    for r in reviews {
        record(tallies.entry(outer(r)).or_default(), inner(r), r.rating);
    }
    tallies
}

/// Mean rating per key, rounded to two decimals.
pub fn grouped_average<'a, K, I, F>(reviews: I, key: F) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = &'a Review>,
    F: Fn(&Review) -> K,
{
    tally_by(reviews, key)
        .into_iter()
        .map(|(k, t)| (k, t.mean()))
        .collect()
}

fn finish_nested<O: Ord, N: Ord, V>(
    nested: BTreeMap<O, BTreeMap<N, Tally>>,
    finish: impl Fn(&Tally) -> V,
) -> BTreeMap<O, BTreeMap<N, V>> {
    nested
        .into_iter()
        .map(|(o, inner)| {
            let inner = inner.into_iter().map(|(n, t)| (n, finish(&t))).collect();
            (o, inner)
        })
        .collect()
}

/// Reviews matching `branch`, or all of them when no branch is given.
pub fn filter_branch<'a>(
    reviews: &'a [Review],
    branch: Option<&'a str>,
) -> impl Iterator<Item = &'a Review> + 'a {
    reviews
        .iter()
        .filter(move |r| branch.map_or(true, |b| r.branch == b))
}

pub fn average_rating_by_branch(reviews: &[Review]) -> BTreeMap<String, f64> {
    grouped_average(reviews, |r| r.branch.clone())
}

/// Mean rating per `(year, month)`, optionally restricted to one branch.
pub fn average_rating_by_month(
    reviews: &[Review],
    branch: Option<&str>,
) -> BTreeMap<(i32, i32), f64> {
    grouped_average(filter_branch(reviews, branch), |r| (r.year, r.month))
}

pub fn average_rating_by_year(reviews: &[Review], branch: Option<&str>) -> BTreeMap<i32, f64> {
    grouped_average(filter_branch(reviews, branch), |r| r.year)
}

/// Mean rating per calendar month for one branch, merging all years.
///
/// Months without reviews are absent, not zero.
pub fn average_rating_by_calendar_month_for_branch(
    reviews: &[Review],
    branch: &str,
) -> BTreeMap<i32, f64> {
    grouped_average(filter_branch(reviews, Some(branch)), |r| r.month)
}

pub fn average_rating_by_location_for_branch(
    reviews: &[Review],
    branch: &str,
) -> BTreeMap<String, f64> {
    grouped_average(filter_branch(reviews, Some(branch)), |r| {
        r.reviewer_location.clone()
    })
}

pub fn review_counts_by_branch(reviews: &[Review]) -> BTreeMap<String, usize> {
    tally_by(reviews, |r| r.branch.clone())
        .into_iter()
        .map(|(k, t)| (k, t.count))
        .collect()
}

/// The `limit` most frequent reviewer locations for `branch`.
///
/// Ordered by count descending; equal counts are ordered by location name.
pub fn top_locations_for_branch(
    reviews: &[Review],
    branch: &str,
    limit: usize,
) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> =
        tally_by(filter_branch(reviews, Some(branch)), |r| {
            r.reviewer_location.clone()
        })
        .into_iter()
        .map(|(loc, t)| (loc, t.count))
        .collect();
    // The map is already sorted by name, and the sort is stable.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// The `limit` reviewer locations with the highest mean rating for `branch`.
///
/// Equal means are ordered by location name.
pub fn top_locations_by_average(
    reviews: &[Review],
    branch: &str,
    limit: usize,
) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = average_rating_by_location_for_branch(reviews, branch)
        .into_iter()
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

pub fn average_score_per_year_by_park(reviews: &[Review]) -> BTreeMap<String, BTreeMap<i32, f64>> {
    finish_nested(
        tally_nested(reviews, |r| r.branch.clone(), |r| r.year),
        Tally::mean,
    )
}

pub fn average_score_per_park_by_reviewer_location(
    reviews: &[Review],
) -> BTreeMap<String, BTreeMap<String, f64>> {
    finish_nested(
        tally_nested(
            reviews,
            |r| r.branch.clone(),
            |r| r.reviewer_location.clone(),
        ),
        Tally::mean,
    )
}

pub fn review_counts_by_park_and_location(
    reviews: &[Review],
) -> BTreeMap<String, BTreeMap<String, usize>> {
    finish_nested(
        tally_nested(
            reviews,
            |r| r.branch.clone(),
            |r| r.reviewer_location.clone(),
        ),
        |t| t.count,
    )
}

pub fn summarise_reviews(reviews: &[Review]) -> DatasetSummary {
    let branches: BTreeSet<&str> = reviews.iter().map(|r| r.branch.as_str()).collect();
    let years: BTreeSet<i32> = reviews.iter().map(|r| r.year).collect();
    DatasetSummary {
        total_reviews: reviews.len(),
        branches: branches.into_iter().map(str::to_string).collect(),
        min_rating: reviews.iter().map(|r| r.rating).min(),
        max_rating: reviews.iter().map(|r| r.rating).max(),
        years: years.into_iter().collect(),
    }
}
