use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Render rows as a markdown table, or `None` when there is nothing to show.
pub fn render_table<T>(rows: &[T]) -> Option<String>
where
    T: Tabled + Clone,
{
    if rows.is_empty() {
        return None;
    }
    Some(Table::new(rows.to_vec()).with(Style::markdown()).to_string())
}

pub fn print_table<T>(title: &str, rows: &[T], empty_msg: &str)
where
    T: Tabled + Clone,
{
    println!();
    println!("{}", title);
    println!("{}", "-".repeat(60));
    match render_table(rows) {
        Some(table) => println!("{}\n", table),
        None => println!("{}\n", empty_msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BranchAverageRow;

    fn rows() -> Vec<BranchAverageRow> {
        vec![BranchAverageRow {
            branch: "Disneyland_Paris".into(),
            average_rating: "3.96".into(),
        }]
    }

    #[test]
    fn table_uses_renamed_headers() {
        let table = render_table(&rows()).unwrap();
        assert!(table.contains("Park"));
        assert!(table.contains("AverageRating"));
        assert!(table.contains("Disneyland_Paris"));
    }

    #[test]
    fn empty_rows_render_nothing() {
        let none: Vec<BranchAverageRow> = Vec::new();
        assert!(render_table(&none).is_none());
    }

    #[test]
    fn csv_and_json_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("averages.csv");
        write_csv(&csv_path, &rows()).unwrap();
        let text = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(text, "Park,AverageRating\nDisneyland_Paris,3.96\n");

        let json_path = dir.path().join("rows.json");
        write_json(&json_path, &rows()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value[0]["Park"], "Disneyland_Paris");
    }
}
