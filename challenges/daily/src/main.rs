use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use daily::arrays_hashing::{contains_duplicate, two_sum, valid_anagram};
use daily::testing::{Report, Verdict};

#[derive(Parser)]
#[command(name = "daily")]
#[command(about = "Daily arrays & hashing exercises", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories and their problems
    List {
        /// Only list this category
        category: Option<String>,
    },
    /// Run every JSON case file for a problem
    Run {
        category: String,
        problem: String,
        /// Directory holding <category>/<problem>/*.json case files
        #[arg(long, env = "DAILY_DATA_DIR", default_value = "data")]
        data_dir: PathBuf,
    },
    /// Evaluate a problem on values given on the command line
    #[command(subcommand)]
    Check(Check),
}

#[derive(Subcommand)]
enum Check {
    /// Does any value occur more than once
    ContainsDuplicate {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Are the two strings anagrams of each other
    Anagram { s: String, t: String },
    /// Indices (current, earlier) of the first pair summing to the target
    TwoSum {
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
}

fn main() -> ExitCode {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { category } => list(category.as_deref()),
        Commands::Run {
            category,
            problem,
            data_dir,
        } => {
            let Some(group) = daily::find_category(&category) else {
                error!("unknown category {}", category);
                return ExitCode::FAILURE;
            };
            match group.run(&data_dir, &problem) {
                Ok(report) => print_report(&report),
                Err(e) => {
                    error!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Check(check) => {
            check_once(check);
            ExitCode::SUCCESS
        }
    }
}

fn list(only: Option<&str>) -> ExitCode {
    let groups: Vec<_> = daily::categories()
        .into_iter()
        .filter(|group| only.is_none_or(|name| group.name() == name))
        .collect();
    if groups.is_empty() {
        error!("unknown category {}", only.unwrap_or_default());
        return ExitCode::FAILURE;
    }

    for group in groups {
        println!("{}", group.name());
        for problem in group.names() {
            println!("  {}", problem);
        }
    }
    ExitCode::SUCCESS
}

fn check_once(check: Check) {
    match check {
        Check::ContainsDuplicate { nums } => {
            println!("{}", contains_duplicate::contains_duplicate(&nums));
        }
        Check::Anagram { s, t } => {
            println!("{}", valid_anagram::is_anagram(&s, &t));
        }
        Check::TwoSum { target, nums } => match two_sum::two_sum(&nums, target) {
            Some((i, j)) => println!("[{}, {}]", i, j),
            None => println!("[]"),
        },
    }
}

fn print_report(report: &Report) -> ExitCode {
    println!(
        "Running {} test cases for {}/{}...",
        report.outcomes.len(),
        report.category,
        report.problem
    );

    for outcome in &report.outcomes {
        let secs = outcome.duration.as_secs_f64();
        let name = outcome
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match &outcome.verdict {
            Verdict::Passed => {
                println!("✓ {} case {}: PASSED ({:.2}s)", name, outcome.index, secs);
            }
            Verdict::Failed { expected, actual } => {
                println!("✗ {} case {}: FAILED ({:.2}s)", name, outcome.index, secs);
                println!("  Input:    {}", outcome.input);
                println!("  Expected: {}", expected);
                println!("  Actual:   {}", actual);
            }
            Verdict::Errored(e) => {
                println!("✗ {} case {}: ERROR - {}", name, outcome.index, e);
            }
        }
    }

    println!(
        "\nResults: {} passed, {} failed",
        report.passed(),
        report.failed()
    );
    println!("Total time: {:.2}s", report.total_duration().as_secs_f64());

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
