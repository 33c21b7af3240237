//! `repo-licensr` — inventory license metadata for GitHub-hosted repositories.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]); zero arguments prints usage and exits 0.
//! 2. Load configuration ([`config::load_config`]).
//! 3. Read the reference list and process it line by line:
//!    parse ([`reference`]) → resolve ([`registry::github`]) →
//!    mine copyright notices ([`license::extractor`]).
//! 4. Stream rows to the CSV report and accumulate the JSON mapping
//!    ([`report::ReportWriter`]).
//! 5. Print a terminal summary ([`report::terminal`]).
//!
//! Remote failures are per-line recoverable: they are logged to stderr and
//! the run continues. Local I/O failures abort the run.

mod cli;
mod config;
mod license;
mod models;
mod reference;
mod registry;
mod report;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use cli::Cli;
use config::{load_config, Config};
use license::extractor;
use models::{LicenseRecord, ReportSchema};
use registry::github;
use report::ReportWriter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config(cli.config.as_deref())?;
    let schema = cli
        .schema
        .as_ref()
        .map(Into::into)
        .unwrap_or(config.report.schema);

    if cli.token.is_some() && !cli.quiet {
        println!("Authenticating using the provided access token...");
    }
    let client = github::build_client(cli.token.as_deref())?;

    let contents = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let lines: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut writer = ReportWriter::create(&input, schema)?;

    let pb = if !cli.quiet {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // One line fully resolved (including any remote calls) before the next.
    let mut skipped = 0usize;
    for line in &lines {
        if let Some(pb) = &pb {
            pb.set_message(line.to_string());
        }

        match resolve_line(&client, &config, schema, line).await {
            Some(record) => writer.record(record),
            None => skipped += 1,
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let json_path = writer.finish()?;

    report::terminal::render(writer.records(), skipped, cli.verbose, cli.quiet)?;

    if !cli.quiet {
        match json_path {
            Some(json_path) => println!(
                "Saved report at: {} and {}",
                writer.csv_path().display(),
                json_path.display()
            ),
            None => println!("Saved report at: {}", writer.csv_path().display()),
        }
    }

    Ok(())
}

/// Resolve one input line into a record, or `None` when the line is skipped.
///
/// Step 1: fetch license metadata. Step 2 (full schema only): on a miss,
/// fetch the repository itself to tell "gone" apart from "exists but no
/// detected license". Step 3: for the `other` sentinel key, decode the
/// embedded license text and mine it for copyright notices.
async fn resolve_line(
    client: &Client,
    config: &Config,
    schema: ReportSchema,
    line: &str,
) -> Option<LicenseRecord> {
    let Some(reference) = reference::parse_reference(line, &config.source.host) else {
        eprintln!(
            "  {} not a supported repository reference; skipping: {}",
            "✗".red(),
            line
        );
        return None;
    };

    let mut record = LicenseRecord::new(line, &reference);

    let license = match github::fetch_license(client, &config.source.api_root, &reference).await {
        Ok(license) => license,
        Err(err) => {
            eprintln!("  {} license lookup failed for {}: {}", "⚠".yellow(), line, err);
            None
        }
    };

    let Some(license) = license else {
        if schema == ReportSchema::Processed {
            eprintln!("  {} no license identified; skipping: {}", "✗".red(), line);
            return None;
        }

        // The repository may be gone, or may just carry no license file.
        match github::fetch_repository(client, &config.source.api_root, &reference).await {
            Ok(Some(repository)) => {
                eprintln!(
                    "  {} no license detected for {}",
                    "⚠".yellow(),
                    repository.full_name
                );
                record.licenses = "Unknown".to_string();
                return Some(record);
            }
            Ok(None) => {
                eprintln!(
                    "  {} repository doesn't seem to exist; skipping: {}",
                    "✗".red(),
                    line
                );
                return None;
            }
            Err(err) => {
                eprintln!(
                    "  {} repository lookup failed; skipping {}: {}",
                    "✗".red(),
                    line,
                    err
                );
                return None;
            }
        }
    };

    apply_license_metadata(&mut record, &license, schema, line);

    Some(record)
}

/// Fill a record from fetched license metadata.
///
/// For recognized license keys the license is fully identified by name, so
/// text and copyright stay empty. Only the `other` sentinel gets its
/// embedded text decoded, normalized, and (full schema) mined for notices.
fn apply_license_metadata(
    record: &mut LicenseRecord,
    license: &github::RepositoryLicense,
    schema: ReportSchema,
    line: &str,
) {
    record.licenses = license
        .license
        .as_ref()
        .map(|info| info.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    record.license_file = license.html_url.clone().unwrap_or_default();

    let unclassified = license
        .license
        .as_ref()
        .is_some_and(|info| info.key == "other");
    if !unclassified {
        return;
    }

    let Some(content) = license.content.as_deref() else {
        return;
    };

    match github::decode_content(content) {
        Ok(text) => {
            let text = extractor::normalize_newlines(text.trim());
            if schema == ReportSchema::Full {
                if let Some(copyright) = extractor::extract_copyright_notices(&text) {
                    record.copyright = copyright;
                }
            }
            record.license_text = text;
        }
        Err(err) => {
            eprintln!(
                "  {} failed to decode license text for {}: {}",
                "⚠".yellow(),
                line,
                err
            );
        }
    }
}
