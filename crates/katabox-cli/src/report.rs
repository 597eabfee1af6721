//! Human-readable judge reports.

use katabox_judge::{RunReport, Verdict};

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Accepted => "accepted",
        Verdict::WrongAnswer => "wrong-answer",
        Verdict::RuntimeError => "runtime-error",
        Verdict::TimeLimitExceeded => "time-limit-exceeded",
    }
}

/// Print a judge run report to stdout.
pub fn print_report(report: &RunReport) {
    println!("=== katabox judge report ===");
    println!();
    println!("Exercise:        {}", report.exercise.slug());
    println!("Run id:          {}", report.run_id);
    println!("Judged at:       {}", report.judged_at);
    println!("Verdict:         {}", verdict_label(report.verdict));
    println!(
        "Cases passed:    {}/{}",
        report.cases_passed, report.total_cases
    );
    println!("Total runtime:   {}ms", report.total_runtime_ms);
    println!();

    for result in &report.results {
        let hidden = if result.is_hidden { " (hidden)" } else { "" };
        println!(
            "  case {}: {} ({}ms){}",
            result.index,
            verdict_label(result.verdict),
            result.runtime_ms,
            hidden
        );
        if let Some(error) = &result.error {
            println!("    error:    {error}");
        }
        if let (Some(expected), Some(actual)) = (&result.expected, &result.actual) {
            println!("    expected: {expected}");
            println!("    actual:   {actual}");
        }
    }
}
