use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::warn;
use wordgrid::api::{SolveReport, TraceReport};
use wordgrid::config::OutputFormat;
use wordgrid::error::WgResult;
use wordgrid::grid::Grid;

pub fn print_solve_report(
    report: &SolveReport,
    top: usize,
    format: OutputFormat,
) -> WgResult<()> {
    if !report.skipped.is_empty() {
        let words: Vec<&str> = report.skipped.iter().map(|s| s.word.as_str()).collect();
        warn!(
            "⚠️  {} words could not be scored: {}",
            report.skipped.len(),
            words.join(", ")
        );
    }
    if !report.aborted.is_empty() {
        warn!(
            "⚠️  {} words hit the node budget: {}",
            report.aborted.len(),
            report.aborted.join(", ")
        );
    }

    match format {
        OutputFormat::Text => print!("{}", render_text(report, top)),
        OutputFormat::Table => {
            print_grid_table(&report.grid);
            print_results_table(report);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn render_rows(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn render_text(report: &SolveReport, top: usize) -> String {
    let mut out = String::from("Matrix:\n");
    out.push_str(&render_rows(&report.grid));
    out.push('\n');
    out.push_str(&format!("Top {} Valid Words and Their Values:\n", top));
    for result in &report.top {
        out.push_str(&format!("{}: {}\n", result.word, result.value));
    }
    if !report.skipped.is_empty() {
        let words: Vec<&str> = report.skipped.iter().map(|s| s.word.as_str()).collect();
        out.push_str(&format!(
            "\nSkipped {} words (unscorable): {}\n",
            report.skipped.len(),
            words.join(", ")
        ));
    }
    if !report.aborted.is_empty() {
        out.push_str(&format!(
            "\nAborted {} words (node budget): {}\n",
            report.aborted.len(),
            report.aborted.join(", ")
        ));
    }
    out
}

fn print_grid_table(rows: &[Vec<String>]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in rows {
        let cells: Vec<Cell> = row
            .iter()
            .map(|letter| {
                let label = if letter.is_empty() { " " } else { letter.as_str() };
                Cell::new(label).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

fn print_results_table(report: &SolveReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
    ]);

    for i in [0, 2] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, result) in report.top.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&result.word).add_attribute(Attribute::Bold),
            Cell::new(result.value).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
    println!(
        "Found {} of {} words ({} skipped, {} aborted).",
        report.found_count,
        report.candidates,
        report.skipped.len(),
        report.aborted.len()
    );
}

pub fn print_trace_report(
    grid: &Grid,
    report: &TraceReport,
    format: OutputFormat,
) -> WgResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text | OutputFormat::Table => {
            print!("Matrix:\n{}\n", grid);
            if report.traceable {
                let steps: Vec<String> = report.path.iter().map(|p| p.to_string()).collect();
                println!("{}: traceable", report.word);
                println!("Path: {}", steps.join(" -> "));
            } else if report.budget_exceeded {
                println!("{}: search budget exceeded", report.word);
            } else {
                println!("{}: not traceable", report.word);
            }
            match report.value {
                Some(value) => println!("Value: {}", value),
                None => println!("Value: n/a"),
            }
        }
    }
    Ok(())
}
