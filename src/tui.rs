// Menu text and input prompts.
//
// Everything that talks to the user lives here; `main` only wires menu
// choices to aggregation queries. Input is read from any `BufRead` so the
// binary can pass a locked stdin.
use crate::types::DatasetSummary;
use crate::util::format_int;
use std::io::{self, BufRead, Write};

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    ViewData,
    Rankings,
    Export,
    Exit,
    Invalid,
}

pub fn print_welcome() {
    println!("{}", "=".repeat(60));
    println!("        Theme Park Reviews Explorer");
    println!("{}", "=".repeat(60));
    println!("Explore park reviews: averages, breakdowns and rankings.");
    println!();
}

pub fn print_goodbye() {
    println!();
    println!("Thank you for using the Theme Park Reviews Explorer. Goodbye!");
}

pub fn show_error(message: &str) {
    println!();
    println!("[ERROR] {}", message);
}

/// Print `prompt` and read one trimmed line. `None` means input is closed.
pub fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

pub fn parse_main_choice(raw: &str) -> MainChoice {
    match raw.trim().to_uppercase().as_str() {
        "A" => MainChoice::ViewData,
        "B" => MainChoice::Rankings,
        "C" => MainChoice::Export,
        "X" => MainChoice::Exit,
        _ => MainChoice::Invalid,
    }
}

/// Show the main menu and read a choice. `None` means input is closed.
pub fn get_main_menu_choice<R: BufRead>(input: &mut R) -> Option<MainChoice> {
    println!();
    println!("Please enter the letter which corresponds with your desired menu choice:");
    println!("[A] View Data");
    println!("[B] Rankings");
    println!("[C] Export Reports");
    println!("[X] Exit");
    let raw = prompt_line(input, "Enter choice: ")?;
    let choice = parse_main_choice(&raw);
    match choice {
        MainChoice::ViewData => println!("You have chosen option A - View Data"),
        MainChoice::Rankings => println!("You have chosen option B - Rankings"),
        MainChoice::Export => println!("You have chosen option C - Export Reports"),
        MainChoice::Exit => println!("You have chosen option X - Exit"),
        MainChoice::Invalid => println!("That is not a valid menu option."),
    }
    Some(choice)
}

pub fn get_view_data_menu_choice<R: BufRead>(input: &mut R) -> Option<String> {
    println!();
    println!("Please enter one of the following options:");
    println!("[A] Average Rating by Park");
    println!("[B] Number of Reviews by Park and Reviewer Location");
    println!("[C] Average Score per Year by Park");
    println!("[D] Average Score per Park by Reviewer Location");
    println!("[E] Dataset Summary");
    println!("[F] Monthly Average Rating for a Park");
    prompt_line(input, "Enter choice: ").map(|s| s.to_uppercase())
}

pub fn get_rankings_menu_choice<R: BufRead>(input: &mut R) -> Option<String> {
    println!();
    println!("Please enter one of the following options:");
    println!("[A] Most Reviewed Parks");
    println!("[B] Park Ranking by Nationality");
    println!("[C] Most Popular Month by Park");
    println!("[D] Top Reviewer Locations by Park");
    prompt_line(input, "Enter choice: ").map(|s| s.to_uppercase())
}

/// Interpret a 1-based branch number. Blank input cancels with `Ok(None)`.
pub fn parse_branch_choice(raw: &str, available: usize) -> Result<Option<usize>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let index: usize = raw
        .parse()
        .map_err(|_| "Please enter a number from the list, or press ENTER to cancel.")?;
    if !(1..=available).contains(&index) {
        return Err("That number is not in the list of branches.");
    }
    Ok(Some(index - 1))
}

/// Ask for a branch until a valid one is chosen or the user cancels.
pub fn choose_branch<'b, R: BufRead>(input: &mut R, branches: &'b [String]) -> Option<&'b str> {
    if branches.is_empty() {
        show_error("No branches are available in the dataset.");
        return None;
    }
    println!();
    println!("Available branches:");
    for (idx, branch) in branches.iter().enumerate() {
        println!("{}. {}", idx + 1, branch);
    }
    println!("Press ENTER without typing a number to cancel.");

    loop {
        let raw = prompt_line(input, "Choose a branch by number: ")?;
        match parse_branch_choice(&raw, branches.len()) {
            Ok(Some(i)) => return Some(branches[i].as_str()),
            Ok(None) => return None,
            Err(msg) => show_error(msg),
        }
    }
}

/// Interpret a top-N answer. Blank input selects `default`.
pub fn parse_top_n(raw: &str, default: usize) -> Result<usize, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    let value: i64 = raw
        .parse()
        .map_err(|_| "Please enter a positive integer value.")?;
    if value <= 0 {
        return Err("The number must be greater than zero.");
    }
    usize::try_from(value).map_err(|_| "Please enter a positive integer value.")
}

pub fn choose_top_n<R: BufRead>(input: &mut R, what: &str, default: usize) -> Option<usize> {
    println!();
    println!("How many top {} would you like to see? (default {})", what, default);
    let raw = prompt_line(input, "Enter a positive number, or press ENTER for the default: ")?;
    match parse_top_n(&raw, default) {
        Ok(n) => Some(n),
        Err(msg) => {
            show_error(msg);
            None
        }
    }
}

pub fn show_summary(summary: &DatasetSummary) {
    println!();
    println!("Dataset summary");
    println!("{}", "-".repeat(60));
    println!("Total number of reviews: {}", format_int(summary.total_reviews));

    if summary.branches.is_empty() {
        println!("No branch information available.");
    } else {
        println!("Number of branches: {}", summary.branches.len());
        println!("Branches:");
        for branch in &summary.branches {
            println!("  - {}", branch);
        }
    }

    if let (Some(min), Some(max)) = (summary.min_rating, summary.max_rating) {
        println!("Rating range: {} - {}", min, max);
    }
    if let (Some(first), Some(last)) = (summary.years.first(), summary.years.last()) {
        println!("Years covered: {} - {}", first, last);
    }
}
