//! CLI integration tests.
//!
//! Runs the actual binary to check argument parsing, output format and
//! error reporting.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Creates a test Command for the linkmatch binary.
fn linkmatch_cmd() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("linkmatch")
}

mod argument_parsing {
    use super::*;

    #[test]
    fn test_help_flag() {
        linkmatch_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("scan"))
            .stdout(predicate::str::contains("pattern"))
            .stdout(predicate::str::contains("countries"));
    }

    #[test]
    fn test_missing_subcommand() {
        linkmatch_cmd().assert().failure();
    }
}

mod scan {
    use super::*;

    #[test]
    fn test_scan_stdin() {
        linkmatch_cmd()
            .arg("scan")
            .write_stdin("Call (415) 555-2671 at 40.7128, -74.0060")
            .assert()
            .success()
            .stdout(predicate::str::contains("5\tphone\ttel:(415) 555-2671\t(415) 555-2671"))
            .stdout(predicate::str::contains(
                "\tlatlng\t40.7128, -74.0060\t40.7128, -74.0060",
            ));
    }

    #[test]
    fn test_scan_file_with_country_filter() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let input = temp_dir.path().join("input.txt");
        fs::write(&input, "UK office +44 20 7946 0958\nUS office 415-555-2671\n")?;

        linkmatch_cmd()
            .args(["scan", "--input"])
            .arg(&input)
            .args(["--country", "GB"])
            .assert()
            .success()
            .stdout(predicate::str::contains("tel:+44 20 7946 0958"))
            .stdout(predicate::str::contains("415-555-2671").not());

        Ok(())
    }

    #[test]
    fn test_scan_missing_file() {
        linkmatch_cmd()
            .args(["scan", "--input", "/nonexistent/input.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }

    #[test]
    fn test_unknown_country_tolerated() {
        linkmatch_cmd()
            .args(["scan", "-c", "ZZ", "-c", "US"])
            .write_stdin("415-555-2671")
            .assert()
            .success()
            .stdout(predicate::str::contains("tel:415-555-2671"));
    }

    #[test]
    fn test_unknown_country_logged_only_when_verbose() {
        linkmatch_cmd()
            .env_remove("RUST_LOG")
            .args(["scan", "-c", "ZZ"])
            .write_stdin("415-555-2671")
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown country code").not());

        linkmatch_cmd()
            .env_remove("RUST_LOG")
            .args(["-v", "scan", "-c", "ZZ"])
            .write_stdin("415-555-2671")
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown country code 'ZZ' ignored"));
    }
}

mod pattern {
    use super::*;

    #[test]
    fn test_pattern_components() {
        linkmatch_cmd()
            .args(["pattern", "-c", "DE", "-c", "GB", "--components"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(?:44)"))
            .stdout(predicate::str::contains("(?:49)"));
    }

    #[test]
    fn test_countries_listing() {
        linkmatch_cmd()
            .arg("countries")
            .assert()
            .success()
            .stdout(predicate::str::contains("GB\t+44"))
            .stdout(predicate::str::contains("PT\t+351"));
    }
}
