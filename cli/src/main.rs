//! crash-verify - Local round verification
//!
//! Replays a settled round's committed seed against its recorded ticks and
//! prints whether the recorded outcome is consistent. Input is the JSON
//! served at `GET /rounds/{roundNo}/verify`, saved to a file (or piped in):
//! this tool does no network I/O on purpose, so a verification never depends
//! on the operator being reachable or honest at verification time.
//!
//! # Usage
//!
//! ```text
//! crash-verify round-1042.json
//! curl -s https://api.example.net/rounds/1042/verify | crash-verify -
//! crash-verify --ruleset-check round-1042.json
//! ```
//!
//! Exit code 0 on a verified round, 1 on a mismatch, 2 on malformed input.

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crash_core_rs::{digest_matches, verify_round, RoundRecord, Ruleset};

/// Independently verify a settled crash-game round
#[derive(Parser)]
#[command(name = "crash-verify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the round verification record (JSON), or `-` for stdin
    record: String,

    /// Cross-check the record's parameters against the current ruleset
    #[arg(long)]
    ruleset_check: bool,

    /// Print only the verdict
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(verified) => {
            if verified {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let record = load_record(&cli.record)?;
    let outcome = verify_round(&record)
        .with_context(|| format!("round {} could not be replayed", record.round_no))?;

    if cli.quiet {
        println!("{}", if outcome.verified { "verified" } else { "mismatch" });
        return Ok(outcome.verified);
    }

    println!("Round #{}", record.round_no);
    println!("  seed:            {}", record.vrf_result);
    println!(
        "  reconstructed:   crash at {}, peak {:.4}",
        format_ms(outcome.result.crash_at_ms),
        outcome.result.max_multiplier
    );
    println!(
        "  recorded:        crash at {}, peak {:.4}",
        format_ms(outcome.claimed_crash_ms),
        outcome.claimed_max_multiplier
    );

    if !record.tick_cid.is_empty() {
        let matches = digest_matches(&record.ticks, &record.tick_cid)
            .context("tick archive digest failed")?;
        println!(
            "  tick archive:    {} ({})",
            record.tick_cid,
            if matches { "digest matches" } else { "digest not comparable" }
        );
    }

    if cli.ruleset_check {
        let current = Ruleset::V1;
        if record.parameters == current.params() {
            println!("  ruleset:         matches {}", current.name());
        } else {
            println!(
                "  ruleset:         WARNING: parameters differ from {} ({:?})",
                current.name(),
                record.parameters
            );
        }
    }

    println!(
        "{}",
        if outcome.verified {
            "VERIFIED - recorded outcome matches the committed randomness"
        } else {
            "MISMATCH - recorded outcome is not consistent with the committed seed"
        }
    );

    Ok(outcome.verified)
}

fn load_record(source: &str) -> Result<RoundRecord> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading record from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("reading record file {}", source))?
    };

    serde_json::from_str(&raw).context("record is not a valid round verification response")
}

fn format_ms(ms: Option<u64>) -> String {
    match ms {
        Some(ms) => format!("{} ms", ms),
        None => "never".to_string(),
    }
}
