use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use indexmap::IndexMap;

use crate::models::LicenseRecord;

/// Render a colored terminal summary of the run.
pub fn render(
    records: &IndexMap<String, LicenseRecord>,
    skipped: usize,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let identified = records.values().filter(|r| r.licenses != "Unknown").count();
    let unknown = records.len() - identified;
    let total = records.len() + skipped;

    if quiet {
        println!(
            "Total: {}  Identified: {}  Unknown: {}  Skipped: {}",
            total,
            identified.to_string().green(),
            unknown.to_string().yellow(),
            skipped.to_string().red(),
        );
        return Ok(());
    }

    let top_licenses = summarize_licenses(records);

    println!("\n ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Lines processed    : {}", total));
    println!(
        " │  {:<48} │",
        format!("{}  Identified      : {:>4}  {}", "✓".green(), identified, top_licenses)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Unknown license : {:>4}", "⚠".yellow(), unknown)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Skipped         : {:>4}", "✗".red(), skipped)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if unknown > 0 {
        println!(
            " {} Repositories without a detected license:\n",
            "[UNKNOWN]".yellow().bold()
        );
        render_table(records.values().filter(|r| r.licenses == "Unknown"));
        println!();
    }

    if verbose && identified > 0 {
        println!(" {} All resolved repositories:\n", "[RESOLVED]".green().bold());
        render_table(records.values().filter(|r| r.licenses != "Unknown"));
        println!();
    }

    Ok(())
}

fn render_table<'a>(records: impl Iterator<Item = &'a LicenseRecord>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Repository").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Copyright").add_attribute(Attribute::Bold),
        ]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.repository),
            Cell::new(&record.licenses),
            Cell::new(&record.copyright),
        ]);
    }

    println!("{}", table);
}

/// The three most common license names, as `[MIT License (3), ...]`.
fn summarize_licenses(records: &IndexMap<String, LicenseRecord>) -> String {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records.values().filter(|r| r.licenses != "Unknown") {
        *counts.entry(record.licenses.as_str()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(license, count)| format!("{} ({})", license, count))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}
