//! Entity Autolink CLI Application.
//!
//! This binary provides a command-line interface for the linkmatch
//! library: scanning text for coordinates and phone numbers, and
//! inspecting the combined phone pattern.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use linkmatch::{
    combined_pattern, CountryRegistry, LinkScanner, Match, MatcherOptions, ALL_COUNTRIES,
};

/// Entity Autolink Tool
///
/// Find coordinates and phone numbers in text and print their link targets.
#[derive(Parser)]
#[command(name = "linkmatch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan text for coordinates and phone numbers
    Scan {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Country codes for phone detection (can be specified multiple times; defaults to all)
        #[arg(short, long = "country", value_name = "CODE")]
        countries: Vec<String>,
    },

    /// Print the combined phone pattern for a country list
    Pattern {
        /// Country codes to combine (can be specified multiple times; defaults to US)
        #[arg(short, long = "country", value_name = "CODE")]
        countries: Vec<String>,

        /// Print one component per line instead of the alternation
        #[arg(long)]
        components: bool,
    },

    /// List the countries with a registered phone pattern
    Countries,
}

/// Resolves the country list, falling back to `default` when none was given.
fn resolve_countries(requested: &[String], default: &[&str]) -> Vec<String> {
    if requested.is_empty() {
        default.iter().map(|c| c.to_string()).collect()
    } else {
        requested.to_vec()
    }
}

/// Reports codes that will be skipped; visible with `-v`.
fn report_unknown(countries: &[String]) {
    let registry = CountryRegistry::global();
    for code in countries {
        if registry.get(code).is_none() {
            log::info!("Unknown country code '{}' ignored", code);
        }
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn scan(input: Option<&Path>, countries: Vec<String>, verbose: bool) -> Result<()> {
    if let Some(path) = input {
        if !path.exists() {
            anyhow::bail!("Input file does not exist: {}", path.display());
        }
    }

    report_unknown(&countries);
    let scanner = LinkScanner::with_options(&MatcherOptions { countries })
        .context("Failed to build matchers")?;
    let text = read_input(input)?;
    let records = scanner.scan(&text).context("Failed to build match records")?;

    for record in &records {
        println!(
            "{}\t{}\t{}\t{}",
            record.offset(),
            record.match_type(),
            record.anchor_href(),
            record.anchor_text()
        );
    }

    if verbose {
        eprintln!("Matches: {}", records.len());
    }

    Ok(())
}

fn pattern(countries: Vec<String>, components: bool) -> Result<()> {
    report_unknown(&countries);
    let combined = combined_pattern(&countries).context("Failed to combine phone patterns")?;

    if components {
        for component in combined.components() {
            println!("{}", component);
        }
    } else {
        println!("{}", combined.as_str());
    }

    Ok(())
}

fn list_countries() {
    for pattern in CountryRegistry::global().iter() {
        println!("{}\t+{}", pattern.code(), pattern.code().calling_code());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Scan { input, countries } => {
            let all: Vec<&str> = ALL_COUNTRIES.iter().map(|c| c.as_str()).collect();
            scan(
                input.as_deref(),
                resolve_countries(&countries, &all),
                cli.verbose,
            )?;
        }
        Commands::Pattern {
            countries,
            components,
        } => {
            pattern(resolve_countries(&countries, &["US"]), components)?;
        }
        Commands::Countries => list_countries(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_countries() {
        let countries = resolve_countries(&[], &["US"]);
        assert_eq!(countries, vec!["US".to_string()]);

        let countries = resolve_countries(&["GB".to_string()], &["US"]);
        assert_eq!(countries, vec!["GB".to_string()]);
    }
}
