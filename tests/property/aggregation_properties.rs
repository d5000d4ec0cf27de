use std::collections::{BTreeMap, BTreeSet};

use park_reviews::{
    average_rating_by_branch, average_rating_by_month, average_rating_by_year, grouped_average,
    review_counts_by_park_and_location, top_locations_for_branch, Review,
};
use proptest::prelude::*;

fn arb_review() -> impl Strategy<Value = Review> {
    (
        any::<i64>(),
        1i32..=5,
        2010i32..=2019,
        1i32..=12,
        prop::sample::select(vec!["USA", "UK", "Australia", "India", "Unknown"]),
        prop::sample::select(vec!["Disneyland_Paris", "Disneyland_HongKong", "Disneyland_California"]),
    )
        .prop_map(|(review_id, rating, year, month, loc, branch)| Review {
            review_id,
            rating,
            year,
            month,
            reviewer_location: loc.to_string(),
            branch: branch.to_string(),
        })
}

fn arb_reviews() -> impl Strategy<Value = Vec<Review>> {
    prop::collection::vec(arb_review(), 0..60)
}

proptest! {
    #[test]
    fn every_key_appears_once(reviews in arb_reviews()) {
        let avg = grouped_average(&reviews, |r| (r.branch.clone(), r.year));
        let keys: BTreeSet<(String, i32)> =
            reviews.iter().map(|r| (r.branch.clone(), r.year)).collect();
        let got: BTreeSet<(String, i32)> = avg.keys().cloned().collect();
        prop_assert_eq!(got, keys);
    }

    #[test]
    fn mean_matches_sum_over_count(reviews in arb_reviews()) {
        let avg = average_rating_by_branch(&reviews);
        let mut sums: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
        for r in &reviews {
            let e = sums.entry(r.branch.as_str()).or_insert((0, 0));
            e.0 += i64::from(r.rating);
            e.1 += 1;
        }
        for (branch, (sum, count)) in sums {
            let exact = sum as f64 / count as f64;
            prop_assert!((avg[branch] - exact).abs() <= 0.005 + 1e-9);
            prop_assert!(avg[branch] >= 1.0 && avg[branch] <= 5.0);
        }
    }

    #[test]
    fn branch_filter_only_uses_that_branch(reviews in arb_reviews()) {
        let branch = "Disneyland_Paris";
        let filtered: Vec<Review> =
            reviews.iter().filter(|r| r.branch == branch).cloned().collect();
        prop_assert_eq!(
            average_rating_by_month(&reviews, Some(branch)),
            average_rating_by_month(&filtered, None)
        );
        prop_assert_eq!(
            average_rating_by_year(&reviews, Some(branch)),
            average_rating_by_year(&filtered, None)
        );
    }

    #[test]
    fn top_locations_are_bounded_and_descending(
        reviews in arb_reviews(),
        limit in 1usize..8,
    ) {
        let top = top_locations_for_branch(&reviews, "Disneyland_HongKong", limit);
        prop_assert!(top.len() <= limit);
        for pair in top.windows(2) {
            prop_assert!(pair[0].1 > pair[1].1 || (pair[0].1 == pair[1].1 && pair[0].0 < pair[1].0));
        }
    }

    #[test]
    fn nested_counts_add_up(reviews in arb_reviews()) {
        let counts = review_counts_by_park_and_location(&reviews);
        let total: usize = counts.values().flat_map(|m| m.values()).sum();
        prop_assert_eq!(total, reviews.len());
        prop_assert!(counts.values().all(|m| !m.is_empty()));
    }
}
