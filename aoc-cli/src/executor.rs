//! Sequential executor driving every day through its modes

use crate::day::{Day, Mode};
use crate::error::CliError;
use crate::output::{Case, OutputFormatter, Tally};
use crate::provider::InputProvider;
use crate::store::ResultStore;
use crate::verifier::{self, Verdict};
use aoc_solver::{AnswerValue, Answers, SolveResult, SolverError, SolverRegistry, Variant};
use itertools::{EitherOrBoth, Itertools};
use tracing::{debug, info};

/// One day in one mode
#[derive(Debug, Clone, Copy)]
pub struct WorkItem<'a> {
    pub day: &'a Day,
    pub mode: Mode,
}

impl WorkItem<'_> {
    fn case(&self, part: u8, variant: Variant) -> Case {
        Case {
            day: self.day.number(),
            part,
            mode: self.mode,
            variant,
        }
    }
}

/// Every day in argument order, each in every selected mode
pub fn collect_work_items<'a>(days: &'a [Day], modes: &[Mode]) -> Vec<WorkItem<'a>> {
    days.iter()
        .cartesian_product(modes.iter().copied())
        .map(|(day, mode)| WorkItem { day, mode })
        .collect()
}

/// Runs work items one after the other
///
/// Solver failures, mismatches and missing solvers are reported and counted.
/// Only failures of the surroundings (inputs, files, credentials) abort.
pub struct Executor<'a> {
    registry: &'a SolverRegistry,
    provider: &'a InputProvider,
    formatter: &'a OutputFormatter,
    golf: bool,
}

impl<'a> Executor<'a> {
    pub fn new(
        registry: &'a SolverRegistry,
        provider: &'a InputProvider,
        formatter: &'a OutputFormatter,
        golf: bool,
    ) -> Self {
        Self {
            registry,
            provider,
            formatter,
            golf,
        }
    }

    /// Make sure every input is available before anything is solved
    pub fn prepare(&self, work_items: &[WorkItem<'_>]) -> Result<(), CliError> {
        for work in work_items {
            self.provider.prepare(work.day, work.mode)?;
        }
        Ok(())
    }

    /// Execute all work items in order
    pub fn execute(&self, work_items: &[WorkItem<'_>]) -> Result<Tally, CliError> {
        let mut tally = Tally::default();
        for work in work_items {
            info!(day = work.day.number(), mode = work.mode.name(), "running");
            let primary = self.run_primary(work, &mut tally)?;
            if self.golf {
                self.run_golf(work, &primary, &mut tally)?;
            }
        }
        Ok(tally)
    }

    /// Produce, persist, classify and report each primary answer
    ///
    /// Returns the produced values by part; failed parts are `None`.
    fn run_primary(
        &self,
        work: &WorkItem<'_>,
        tally: &mut Tally,
    ) -> Result<Vec<Option<AnswerValue>>, CliError> {
        let store = ResultStore::new(work.day);
        let expectations = store.load(work.mode)?;

        let Some(solver) = self.registry.get(work.day.number(), Variant::Primary) else {
            debug!(day = work.day.number(), "no primary solver registered");
            for part in expectations.recorded_parts() {
                self.formatter
                    .print_not_implemented(&work.case(part, Variant::Primary));
                tally.not_implemented += 1;
            }
            return Ok(Vec::new());
        };

        let mut inputs = self.provider.fetch(work.day, work.mode)?;
        let mut produced = Vec::new();

        for (result, part) in Answers::new(solver, &mut inputs).zip(1u8..) {
            let case = work.case(part, Variant::Primary);
            match result {
                Ok(result) => {
                    self.formatter.print_result(&case, &result);
                    store.persist(part, work.mode, &result.answer)?;
                    let verdict = verifier::classify(&result.answer.value, expectations.get(part));
                    self.formatter.print_verdict(&case, &verdict);
                    tally.record(&verdict);
                    tally.record_timing(&result);
                    produced.push(Some(result.answer.value));
                }
                Err(e) => {
                    self.formatter.print_error(&case, &e);
                    tally.failed += 1;
                    produced.push(None);
                }
            }
        }

        // Recorded parts the solver no longer produces
        for part in expectations
            .recorded_parts()
            .filter(|&part| usize::from(part) > produced.len())
        {
            self.formatter
                .print_not_implemented(&work.case(part, Variant::Primary));
            tally.not_implemented += 1;
        }

        Ok(produced)
    }

    /// Cross-check the golf variant against the primary values
    ///
    /// Parts without a golf answer, including every part of a day with no
    /// golf solver, are unchecked.
    fn run_golf(
        &self,
        work: &WorkItem<'_>,
        primary: &[Option<AnswerValue>],
        tally: &mut Tally,
    ) -> Result<(), CliError> {
        let Some(solver) = self.registry.get(work.day.number(), Variant::Golf) else {
            debug!(day = work.day.number(), "no golf solver registered");
            for part in (1u8..).take(primary.len()) {
                self.report_unchecked(work, part, tally);
            }
            return Ok(());
        };

        let mut inputs = self.provider.fetch(work.day, work.mode)?;
        let golf = Answers::new(solver, &mut inputs).zip(1u8..);

        for pair in primary.iter().zip(1u8..).zip_longest(golf) {
            match pair {
                EitherOrBoth::Left((_, part)) => self.report_unchecked(work, part, tally),
                EitherOrBoth::Right((result, part)) => {
                    self.report_golf(work, part, None, result, tally);
                }
                EitherOrBoth::Both((expected, _), (result, part)) => {
                    self.report_golf(work, part, expected.as_ref(), result, tally);
                }
            }
        }
        Ok(())
    }

    fn report_unchecked(&self, work: &WorkItem<'_>, part: u8, tally: &mut Tally) {
        let verdict = Verdict::Unchecked;
        self.formatter
            .print_verdict(&work.case(part, Variant::Golf), &verdict);
        tally.record(&verdict);
    }

    fn report_golf(
        &self,
        work: &WorkItem<'_>,
        part: u8,
        primary: Option<&AnswerValue>,
        result: Result<SolveResult, SolverError>,
        tally: &mut Tally,
    ) {
        let case = work.case(part, Variant::Golf);
        match result {
            Ok(result) => {
                self.formatter.print_result(&case, &result);
                let verdict = verifier::cross_check(primary, &result.answer.value);
                self.formatter.print_verdict(&case, &verdict);
                tally.record(&verdict);
                tally.record_timing(&result);
            }
            Err(e) => {
                self.formatter.print_error(&case, &e);
                tally.failed += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_http_client::AocClient;
    use aoc_solver::{
        Answer, AocParser, InputSource, ParseError, RegistryBuilder, SolveError, Solver,
        SolverHandle,
    };
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Largest group sum, then the sum of all groups
    struct GroupSums;

    impl AocParser for GroupSums {
        type Parsed = Vec<i64>;

        fn parse(input: &mut InputSource) -> Result<Vec<i64>, ParseError> {
            input
                .read_all()?
                .split("\n\n")
                .map(|group| {
                    group
                        .lines()
                        .map(|l| l.parse::<i64>().map_err(|e| ParseError::at_line(0, e)))
                        .sum::<Result<i64, ParseError>>()
                })
                .collect()
        }
    }

    impl Solver for GroupSums {
        const PARTS: u8 = 2;

        fn solve_part(sums: &mut Vec<i64>, part: u8) -> Result<Answer, SolveError> {
            match part {
                1 => Ok(Answer::new(sums.iter().copied().max().unwrap_or_default())
                    .with_diagnostic(json!({ "groups": sums.len() }))),
                _ => Ok(Answer::new(sums.iter().sum::<i64>())),
            }
        }
    }

    /// Agrees on part 1 only, and has no part 3 counterpart
    struct GroupSumsGolf;

    impl AocParser for GroupSumsGolf {
        type Parsed = String;

        fn parse(input: &mut InputSource) -> Result<String, ParseError> {
            input.read_all()
        }
    }

    impl Solver for GroupSumsGolf {
        const PARTS: u8 = 1;

        fn solve_part(text: &mut String, _: u8) -> Result<Answer, SolveError> {
            let best = text
                .split("\n\n")
                .map(|g| g.lines().filter_map(|l| l.parse::<i64>().ok()).sum::<i64>())
                .max()
                .unwrap_or_default();
            Ok(Answer::new(best))
        }
    }

    struct Failing;

    impl AocParser for Failing {
        type Parsed = ();

        fn parse(_: &mut InputSource) -> Result<(), ParseError> {
            Err(ParseError::MissingData("nothing to see".into()))
        }
    }

    impl Solver for Failing {
        const PARTS: u8 = 2;

        fn solve_part(_: &mut (), part: u8) -> Result<Answer, SolveError> {
            Err(SolveError::PartNotImplemented(part))
        }
    }

    struct Fixture {
        temp: TempDir,
        days: Vec<Day>,
        registry: SolverRegistry,
    }

    impl Fixture {
        fn new(numbers: &[u8]) -> Self {
            let temp = TempDir::new().unwrap();
            for n in numbers {
                fs::create_dir(temp.path().join(format!("day_{:02}", n))).unwrap();
            }
            let days = numbers
                .iter()
                .map(|&n| Day::resolve(n, temp.path()).unwrap())
                .collect();
            let registry = RegistryBuilder::new()
                .register(1, Variant::Primary, SolverHandle::<GroupSums>::new())
                .unwrap()
                .register(1, Variant::Golf, SolverHandle::<GroupSumsGolf>::new())
                .unwrap()
                .register(3, Variant::Primary, SolverHandle::<Failing>::new())
                .unwrap()
                .build();
            Self {
                temp,
                days,
                registry,
            }
        }

        fn day(&self, index: usize) -> &Day {
            &self.days[index]
        }

        fn session_file(&self) -> PathBuf {
            self.temp.path().join("session_cookie.txt")
        }

        fn run(
            &self,
            modes: &[Mode],
            golf: bool,
            server: &mockito::Server,
        ) -> Result<Tally, CliError> {
            let client = AocClient::builder()
                .base_url(server.url())
                .unwrap()
                .build()
                .unwrap();
            let provider = InputProvider::with_client(2022, self.session_file(), client);
            let formatter = OutputFormatter::new(true);
            let executor = Executor::new(&self.registry, &provider, &formatter, golf);

            let work_items = collect_work_items(&self.days, modes);
            executor.prepare(&work_items)?;
            executor.execute(&work_items)
        }
    }

    #[test]
    fn test_example_without_expectation_is_unchecked() {
        let fx = Fixture::new(&[1]);
        fs::write(fx.day(0).example_input_path(1), "3\n1\n2\n\n4\n").unwrap();
        let server = mockito::Server::new();

        let tally = fx.run(&[Mode::Example], false, &server).unwrap();

        assert_eq!(tally.unchecked, 2);
        assert_eq!(tally.failed, 0);
        assert!(!fx.day(0).results_path(Mode::Real).exists());
        assert!(!fx.day(0).results_path(Mode::Example).exists());
        assert!(!fx.day(0).diagnostics_path().exists());
    }

    #[test]
    fn test_example_expectations_are_checked() {
        let fx = Fixture::new(&[1]);
        fs::write(fx.day(0).example_input_path(1), "3\n1\n2\n\n4\n").unwrap();
        fs::write(fx.day(0).results_path(Mode::Example), "6\n99\n").unwrap();
        let server = mockito::Server::new();

        let tally = fx.run(&[Mode::Example], false, &server).unwrap();

        assert_eq!((tally.verified, tally.mismatched), (1, 1));
        assert_eq!(
            fs::read_to_string(fx.day(0).results_path(Mode::Example)).unwrap(),
            "6\n99\n"
        );
    }

    #[test]
    fn test_real_rerun_is_deterministic() {
        let fx = Fixture::new(&[1]);
        fs::write(fx.day(0).input_path(), "1000\n2000\n\n500\n").unwrap();
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();

        let first = fx.run(&[Mode::Real], false, &server).unwrap();
        let stored = fs::read_to_string(fx.day(0).results_path(Mode::Real)).unwrap();
        let second = fx.run(&[Mode::Real], false, &server).unwrap();

        assert_eq!(first.unchecked, 2);
        assert_eq!(stored, "3000\n3500\n");
        assert_eq!(second.verified, 2);
        assert_eq!(
            fs::read_to_string(fx.day(0).results_path(Mode::Real)).unwrap(),
            stored
        );
        assert!(fs::read_to_string(fx.day(0).diagnostics_path())
            .unwrap()
            .contains("\"groups\": 2"));
        mock.assert();
    }

    #[test]
    fn test_mismatch_is_reported_and_overwritten() {
        let fx = Fixture::new(&[1]);
        fs::write(fx.day(0).input_path(), "1\n\n2\n").unwrap();
        fs::write(fx.day(0).results_path(Mode::Real), "7\n3\n").unwrap();
        let server = mockito::Server::new();

        let tally = fx.run(&[Mode::Real], false, &server).unwrap();

        assert_eq!((tally.mismatched, tally.verified), (1, 1));
        assert_eq!(
            fs::read_to_string(fx.day(0).results_path(Mode::Real)).unwrap(),
            "2\n3\n"
        );
    }

    #[test]
    fn test_missing_fixture_aborts_before_persisting() {
        let fx = Fixture::new(&[1, 2]);
        fs::write(fx.day(0).example_input_path(1), "1\n").unwrap();
        fs::write(fx.day(0).input_path(), "1\n").unwrap();
        let server = mockito::Server::new();

        let result = fx.run(&[Mode::Example, Mode::Real], false, &server);

        assert!(matches!(result, Err(CliError::MissingFixture { day: 2, .. })));
        assert!(!fx.day(0).results_path(Mode::Real).exists());
    }

    #[test]
    fn test_missing_real_input_is_downloaded() {
        let fx = Fixture::new(&[1]);
        fs::write(fx.session_file(), "token").unwrap();
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2022/day/1/input")
            .match_header("cookie", "session=token")
            .with_status(200)
            .with_body("5\n\n6\n")
            .expect(1)
            .create();

        let tally = fx.run(&[Mode::Real], false, &server).unwrap();

        assert_eq!(tally.unchecked, 2);
        assert_eq!(
            fs::read_to_string(fx.day(0).results_path(Mode::Real)).unwrap(),
            "6\n11\n"
        );
        mock.assert();
    }

    #[test]
    fn test_golf_cross_check() {
        let fx = Fixture::new(&[1]);
        fs::write(fx.day(0).example_input_path(1), "3\n1\n2\n\n4\n").unwrap();
        let server = mockito::Server::new();

        let tally = fx.run(&[Mode::Example], true, &server).unwrap();

        // primary: two unchecked; golf: part 1 verified, part 2 has no golf answer
        assert_eq!(tally.unchecked, 3);
        assert_eq!(tally.verified, 1);
        assert_eq!(tally.not_implemented, 0);
    }

    #[test]
    fn test_absent_golf_solver_is_unchecked() {
        let fx = Fixture::new(&[3]);
        let registry = RegistryBuilder::new()
            .register(3, Variant::Primary, SolverHandle::<GroupSums>::new())
            .unwrap()
            .build();
        let fx = Fixture { registry, ..fx };
        fs::write(fx.day(0).example_input_path(1), "3\n1\n2\n\n4\n").unwrap();
        let server = mockito::Server::new();

        let tally = fx.run(&[Mode::Example], true, &server).unwrap();

        // two primary answers plus two golf parts with nothing to compare
        assert_eq!(tally.unchecked, 4);
        assert_eq!(tally.not_implemented, 0);
        assert_eq!(tally.failed, 0);
    }

    #[test]
    fn test_missing_primary_reports_recorded_parts() {
        let fx = Fixture::new(&[2]);
        fs::write(fx.day(0).input_path(), "x\n").unwrap();
        fs::write(fx.day(0).results_path(Mode::Real), "1\n\n3\n").unwrap();
        let server = mockito::Server::new();

        let tally = fx.run(&[Mode::Real], true, &server).unwrap();

        assert_eq!(tally.not_implemented, 2);
        assert_eq!(tally.produced(), 0);
    }

    #[test]
    fn test_missing_primary_without_records_reports_nothing() {
        let fx = Fixture::new(&[2]);
        fs::write(fx.day(0).example_input_path(1), "x\n").unwrap();
        let server = mockito::Server::new();

        let tally = fx.run(&[Mode::Example], false, &server).unwrap();

        assert_eq!(tally, Tally::default());
    }

    #[test]
    fn test_solver_errors_do_not_abort() {
        let fx = Fixture::new(&[3, 1]);
        fs::write(fx.day(0).example_input_path(1), "x\n").unwrap();
        fs::write(fx.day(1).example_input_path(1), "1\n").unwrap();
        let server = mockito::Server::new();

        let tally = fx.run(&[Mode::Example], false, &server).unwrap();

        assert_eq!(tally.failed, 2);
        assert_eq!(tally.unchecked, 2);
    }

    #[test]
    fn test_work_items_run_example_first() {
        let fx = Fixture::new(&[2, 1]);
        let items = collect_work_items(&fx.days, &[Mode::Example, Mode::Real]);
        let order: Vec<_> = items.iter().map(|w| (w.day.number(), w.mode)).collect();

        assert_eq!(
            order,
            [
                (2, Mode::Example),
                (2, Mode::Real),
                (1, Mode::Example),
                (1, Mode::Real)
            ]
        );
    }
}
