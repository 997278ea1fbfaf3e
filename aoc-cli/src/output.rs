//! Output formatting for solver results

use crate::day::Mode;
use crate::verifier::Verdict;
use aoc_solver::{Diagnostic, SolveResult, SolverError, Variant};
use chrono::TimeDelta;

/// Width of the label column, fits `checked?`
const LABEL_WIDTH: usize = 9;

/// Reporting key of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub day: u8,
    pub part: u8,
    pub mode: Mode,
    pub variant: Variant,
}

impl Case {
    fn prefix(&self) -> String {
        format!(
            "{:02}.{} {:<7} {:<7}",
            self.day,
            self.part,
            self.mode,
            self.variant.name()
        )
    }
}

/// Counters for the final summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub verified: usize,
    pub mismatched: usize,
    pub unchecked: usize,
    pub not_implemented: usize,
    pub failed: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Tally {
    pub fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Verified => self.verified += 1,
            Verdict::Mismatch { .. } => self.mismatched += 1,
            Verdict::Unchecked => self.unchecked += 1,
        }
    }

    pub fn record_timing(&mut self, result: &SolveResult) {
        self.parse_time += result.parse_duration();
        self.solve_time += result.solve_duration();
    }

    /// Answers that were produced, whatever their verdict
    pub fn produced(&self) -> usize {
        self.verified + self.mismatched + self.unchecked
    }
}

/// Output formatter for solver results
///
/// Report lines go to stdout, solver errors to stderr.
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Print a produced answer and its diagnostics
    pub fn print_result(&self, case: &Case, result: &SolveResult) {
        if self.quiet {
            println!("{}", result.answer.value);
            return;
        }

        let payload = format!(
            "{} (parse: {}, solve: {})",
            result.answer.value,
            format_duration(result.parse_duration()),
            format_duration(result.solve_duration())
        );
        println!("{}", format_line(case, "result", &payload));

        if let Some(diagnostic) = &result.answer.diagnostic {
            println!("{}", format_infos(case, diagnostic));
        }
    }

    /// Print the verdict for a produced answer
    pub fn print_verdict(&self, case: &Case, verdict: &Verdict) {
        if !self.quiet {
            println!("{}", format_line(case, "checked?", &verdict.to_string()));
        }
    }

    /// Print that no solver produced this part
    pub fn print_not_implemented(&self, case: &Case) {
        if !self.quiet {
            println!("{}", format_line(case, "checked?", "not implemented"));
        }
    }

    /// Print a solver failure
    pub fn print_error(&self, case: &Case, error: &SolverError) {
        eprintln!("{}", format_line(case, "error", &error.to_string()));
    }

    /// Print a summary after all results
    pub fn print_summary(&self, tally: &Tally) {
        if self.quiet {
            return;
        }

        println!();
        println!("--- Summary ---");
        println!(
            "Answers: {} verified, {} mismatched, {} unchecked, {} not implemented, {} failed",
            tally.verified, tally.mismatched, tally.unchecked, tally.not_implemented, tally.failed
        );
        println!("Total parse time: {}", format_duration(tally.parse_time));
        println!("Total solve time: {}", format_duration(tally.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// `DD.P MODE    VARIANT LABEL > payload`
fn format_line(case: &Case, label: &str, payload: &str) -> String {
    format!(
        "{} {:>width$} > {}",
        case.prefix(),
        label,
        payload,
        width = LABEL_WIDTH
    )
}

/// Pretty JSON, continuation lines aligned under the payload column
fn format_infos(case: &Case, diagnostic: &Diagnostic) -> String {
    let pretty =
        serde_json::to_string_pretty(diagnostic).unwrap_or_else(|_| diagnostic.to_string());
    let first = format_line(case, "infos", "");
    let indent = " ".repeat(first.len());
    let mut lines = pretty.lines();

    let mut out = first + lines.next().unwrap_or_default();
    for line in lines {
        out.push('\n');
        out.push_str(&indent);
        out.push_str(line);
    }
    out
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn case() -> Case {
        Case {
            day: 5,
            part: 2,
            mode: Mode::Real,
            variant: Variant::Golf,
        }
    }

    #[test]
    fn test_line_layout() {
        assert_eq!(
            format_line(&case(), "result", "MCD"),
            "05.2 real    golf       result > MCD"
        );
        assert_eq!(
            format_line(&case(), "checked?", "ok"),
            "05.2 real    golf     checked? > ok"
        );
    }

    #[test]
    fn test_labels_share_payload_column() {
        let a = format_line(&case(), "error", "x");
        let b = format_line(&case(), "checked?", "x");
        assert_eq!(a.find('>'), b.find('>'));
    }

    #[test]
    fn test_infos_are_aligned() {
        let text = format_infos(&case(), &json!({"stacks": 3}));
        let lines: Vec<_> = text.lines().collect();
        let column = lines[0].find('{').unwrap();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("infos > {"));
        assert_eq!(lines[2].find('}'), Some(column));
    }

    #[test]
    fn test_tally_counts_verdicts() {
        let mut tally = Tally::default();
        tally.record(&Verdict::Verified);
        tally.record(&Verdict::Unchecked);
        tally.record(&Verdict::Mismatch {
            expected: "1".into(),
            actual: "2".into(),
        });
        tally.not_implemented += 1;

        assert_eq!((tally.verified, tally.unchecked, tally.mismatched), (1, 1, 1));
        assert_eq!(tally.produced(), 3);
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(12)), "12µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-12)), "-12µs");
    }
}
