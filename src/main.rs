// Entry point and menu flow.
//
// The dataset is loaded once at start-up and kept in a process-wide cell;
// every menu entry runs one aggregation query over it and prints the
// result. Nothing ever mutates the loaded reviews.
use clap::Parser;
use once_cell::sync::OnceCell;
use park_reviews::config::Cli;
use park_reviews::output::{print_table, write_csv, write_json, ExportError};
use park_reviews::tui::{self, MainChoice};
use park_reviews::types::Review;
use park_reviews::util::format_int;
use park_reviews::{aggregate, loader, logging, reports};
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};

static REVIEWS: OnceCell<Vec<Review>> = OnceCell::new();

/// Option [A]: tabular views over the whole dataset.
fn handle_view_data<R: BufRead>(input: &mut R, reviews: &[Review], branches: &[String]) {
    let Some(choice) = tui::get_view_data_menu_choice(input) else {
        return;
    };
    match choice.as_str() {
        "A" => {
            let avg = aggregate::average_rating_by_branch(reviews);
            print_table(
                "Average rating by park",
                &reports::branch_average_rows(&avg),
                "No rating information available.",
            );
        }
        "B" => {
            let counts = aggregate::review_counts_by_park_and_location(reviews);
            print_table(
                "Number of reviews by park and reviewer location",
                &reports::park_location_count_rows(&counts),
                "No review counts available.",
            );
        }
        "C" => {
            let avg = aggregate::average_score_per_year_by_park(reviews);
            print_table(
                "Average score per year by park",
                &reports::park_year_average_rows(&avg),
                "No average score data available.",
            );
        }
        "D" => {
            let avg = aggregate::average_score_per_park_by_reviewer_location(reviews);
            print_table(
                "Average score per park by reviewer location",
                &reports::park_location_average_rows(&avg),
                "No data available.",
            );
        }
        "E" => tui::show_summary(&aggregate::summarise_reviews(reviews)),
        "F" => {
            if let Some(branch) = tui::choose_branch(input, branches) {
                let avg = aggregate::average_rating_by_month(reviews, Some(branch));
                print_table(
                    &format!("Average rating by month for {}", branch),
                    &reports::monthly_average_rows(&avg),
                    "No monthly rating information available.",
                );
            }
        }
        _ => tui::show_error("Unknown View Data menu option."),
    }
}

/// Option [B]: ranked and per-park views.
fn handle_rankings<R: BufRead>(
    input: &mut R,
    reviews: &[Review],
    branches: &[String],
    default_top: usize,
) {
    let Some(choice) = tui::get_rankings_menu_choice(input) else {
        return;
    };
    match choice.as_str() {
        "A" => {
            let counts = aggregate::review_counts_by_branch(reviews);
            print_table(
                "Most reviewed parks",
                &reports::branch_count_rows(&counts),
                "No data available.",
            );
        }
        "B" => {
            let Some(branch) = tui::choose_branch(input, branches) else {
                return;
            };
            let Some(limit) = tui::choose_top_n(input, "locations", default_top) else {
                return;
            };
            let ranked = aggregate::top_locations_by_average(reviews, branch, limit);
            print_table(
                &format!("Top {} locations by average rating for {}", ranked.len(), branch),
                &reports::location_average_rows(&ranked),
                "No data available for that park.",
            );
        }
        "C" => {
            let Some(branch) = tui::choose_branch(input, branches) else {
                return;
            };
            let avg = aggregate::average_rating_by_calendar_month_for_branch(reviews, branch);
            if avg.is_empty() {
                tui::show_error("No data available for that branch.");
                return;
            }
            print_table(
                &format!("Average rating by month (years combined) for {}", branch),
                &reports::calendar_month_rows(&avg),
                "No data available for that branch.",
            );
        }
        "D" => {
            let Some(branch) = tui::choose_branch(input, branches) else {
                return;
            };
            let Some(limit) = tui::choose_top_n(input, "locations", default_top) else {
                return;
            };
            let ranked = aggregate::top_locations_for_branch(reviews, branch, limit);
            print_table(
                &format!("Top reviewer locations for {}", branch),
                &reports::location_count_rows(&ranked),
                "No location data available.",
            );
        }
        _ => tui::show_error("Unknown Rankings menu option."),
    }
}

/// Option [C]: write the park-level reports as CSV plus a JSON summary.
fn export_reports(reviews: &[Review], out_dir: &Path) -> Result<(), ExportError> {
    std::fs::create_dir_all(out_dir)?;

    let files = [
        "report_branch_averages.csv",
        "report_park_location_counts.csv",
        "report_park_year_averages.csv",
        "report_park_location_averages.csv",
    ];
    write_csv(
        &out_dir.join(files[0]),
        &reports::branch_average_rows(&aggregate::average_rating_by_branch(reviews)),
    )?;
    write_csv(
        &out_dir.join(files[1]),
        &reports::park_location_count_rows(&aggregate::review_counts_by_park_and_location(
            reviews,
        )),
    )?;
    write_csv(
        &out_dir.join(files[2]),
        &reports::park_year_average_rows(&aggregate::average_score_per_year_by_park(reviews)),
    )?;
    write_csv(
        &out_dir.join(files[3]),
        &reports::park_location_average_rows(
            &aggregate::average_score_per_park_by_reviewer_location(reviews),
        ),
    )?;
    write_json(&out_dir.join("summary.json"), &aggregate::summarise_reviews(reviews))?;

    for f in files.iter().chain(std::iter::once(&"summary.json")) {
        println!("Saved {}", out_dir.join(f).display());
    }
    info!(dir = %out_dir.display(), "reports exported");
    Ok(())
}

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    let (data, load_report) = match loader::load_reviews(&cli.data) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(error = %e, "dataset load failed");
            tui::show_error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };
    if data.is_empty() {
        tui::show_error("No reviews were loaded from the data file.");
        return ExitCode::FAILURE;
    }
    if load_report.skipped_rows > 0 {
        warn!(skipped = load_report.skipped_rows, "malformed rows skipped");
    }
    let reviews: &[Review] = REVIEWS.get_or_init(|| data);
    let branches = aggregate::summarise_reviews(reviews).branches;

    tui::print_welcome();
    println!(
        "Loaded {} reviews ({} rows skipped).",
        format_int(load_report.loaded_rows),
        format_int(load_report.skipped_rows)
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let default_top = usize::from(cli.top);

    loop {
        let Some(choice) = tui::get_main_menu_choice(&mut input) else {
            tui::print_goodbye();
            break;
        };
        match choice {
            MainChoice::ViewData => handle_view_data(&mut input, reviews, &branches),
            MainChoice::Rankings => {
                handle_rankings(&mut input, reviews, &branches, default_top)
            }
            MainChoice::Export => {
                if let Err(e) = export_reports(reviews, &cli.out_dir) {
                    error!(error = %e, "export failed");
                    tui::show_error(&format!("Write error: {}", e));
                }
            }
            MainChoice::Exit => {
                tui::print_goodbye();
                break;
            }
            MainChoice::Invalid => tui::show_error("Unknown menu option selected."),
        }
    }
    ExitCode::SUCCESS
}
