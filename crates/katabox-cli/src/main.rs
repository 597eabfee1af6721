//! katabox: classic algorithm exercises as one-shot drivers.
//!
//! Every invocation reads its input, computes once, and exits; there is
//! no resident process and no state carried between runs.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use katabox_core::Exercise;
use katabox_judge::{judge, CaseFile, Verdict};

mod report;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "run" => {
            let exercise = exercise_arg(&args)?;
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading stdin")?;
            match katabox_io::run_exercise(exercise, &input) {
                Ok(output) => {
                    print!("{output}");
                    if !output.ends_with('\n') {
                        println!();
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        "judge" => {
            let exercise = exercise_arg(&args)?;
            let path = args
                .iter()
                .skip(3)
                .find(|a| !a.starts_with("--"))
                .map(PathBuf::from)
                .unwrap_or_else(|| {
                    eprintln!("Usage: katabox judge <exercise> <cases.json> [--json]");
                    std::process::exit(1)
                });
            let as_json = args.iter().any(|a| a == "--json");

            let file = CaseFile::load(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            let run = judge(exercise, &file);
            if as_json {
                println!("{}", serde_json::to_string_pretty(&run)?);
            } else {
                report::print_report(&run);
            }
            std::process::exit(if run.verdict == Verdict::Accepted { 0 } else { 1 });
        }
        "list" => {
            for exercise in Exercise::ALL {
                println!(
                    "{:<16} {:<8} {}",
                    exercise.slug(),
                    format!("{:?}", exercise.difficulty()).to_lowercase(),
                    exercise.title()
                );
            }
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}. Use 'katabox help' for usage.");
            std::process::exit(1);
        }
    }
}

/// The `<exercise>` argument shared by `run` and `judge`.
fn exercise_arg(args: &[String]) -> anyhow::Result<Exercise> {
    let slug = args.get(2).map(String::as_str).unwrap_or_else(|| {
        eprintln!("Usage: katabox {} <exercise> ...", args[1]);
        std::process::exit(1)
    });
    Exercise::from_slug(slug)
        .with_context(|| "use 'katabox list' to see available exercises".to_string())
}

fn print_usage() {
    println!("katabox: classic algorithm exercises as one-shot drivers");
    println!();
    println!("Usage: katabox <command>");
    println!();
    println!("Commands:");
    println!("  run <exercise>                    Read stdin, print the answer");
    println!("  judge <exercise> <cases.json>     Grade against a case file (--json for a JSON report)");
    println!("  list                              Show the exercise catalog");
    println!("  help                              Show this help message");
    println!();
    println!("Logging is controlled with RUST_LOG (default: info, written to stderr).");
}
