use std::io::Write;

use park_reviews::{
    average_rating_by_branch, average_rating_by_calendar_month_for_branch,
    average_rating_by_month, load_reviews, review_counts_by_park_and_location,
    summarise_reviews, top_locations_for_branch,
};
use tempfile::NamedTempFile;

fn write_dataset(body: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        "Review_ID,Rating,Year_Month,Reviewer_Location,Review_Text,Branch\n{}",
        body
    )
    .unwrap();
    tmp
}

#[test]
fn three_row_dataset_end_to_end() {
    let tmp = write_dataset(
        "1,5,2019-04,USA,great,A\n\
         2,3,2019-04,UK,fine,A\n\
         3,1,2019-05,USA,bad,B\n",
    );
    let (reviews, report) = load_reviews(tmp.path()).unwrap();
    assert_eq!(report.loaded_rows, 3);

    let avg = average_rating_by_branch(&reviews);
    assert_eq!(avg.len(), 2);
    assert_eq!(avg["A"], 4.0);
    assert_eq!(avg["B"], 1.0);

    let counts = review_counts_by_park_and_location(&reviews);
    assert_eq!(counts["A"]["USA"], 1);
    assert_eq!(counts["A"]["UK"], 1);
    assert_eq!(counts["B"]["USA"], 1);
    assert_eq!(counts["B"].len(), 1);
}

#[test]
fn malformed_rows_do_not_reach_queries() {
    let tmp = write_dataset(
        "1,5,2018-5,UK,t,Disneyland_Paris\n\
         2,3,2019-5,UK,t,Disneyland_Paris\n\
         3,x,2019-5,UK,t,Disneyland_Paris\n\
         4,4,missing,UK,t,Disneyland_Paris\n\
         5,2,2019-6,,t,Disneyland_HongKong\n",
    );
    let (reviews, report) = load_reviews(tmp.path()).unwrap();
    assert_eq!(report.total_rows, 5);
    assert_eq!(report.skipped_rows, 2);

    let months = average_rating_by_calendar_month_for_branch(&reviews, "Disneyland_Paris");
    assert_eq!(months.len(), 1);
    assert_eq!(months[&5], 4.0);

    let by_month = average_rating_by_month(&reviews, Some("Disneyland_Paris"));
    assert_eq!(by_month[&(2018, 5)], 5.0);
    assert_eq!(by_month[&(2019, 5)], 3.0);

    let top = top_locations_for_branch(&reviews, "Disneyland_HongKong", 10);
    assert_eq!(top, vec![("Unknown".to_string(), 1)]);

    let summary = summarise_reviews(&reviews);
    assert_eq!(summary.total_reviews, 3);
    assert_eq!(summary.branches, vec!["Disneyland_HongKong", "Disneyland_Paris"]);
    assert_eq!(summary.min_rating, Some(2));
    assert_eq!(summary.max_rating, Some(5));
    assert_eq!(summary.years, vec![2018, 2019]);
}

#[test]
fn summary_serializes_missing_range_as_null() {
    let tmp = write_dataset("");
    let (reviews, _) = load_reviews(tmp.path()).unwrap();
    let json = serde_json::to_value(summarise_reviews(&reviews)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "total_reviews": 0,
            "branches": [],
            "min_rating": null,
            "max_rating": null,
            "years": []
        })
    );
}
