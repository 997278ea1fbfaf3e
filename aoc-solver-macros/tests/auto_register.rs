//! Integration tests for `#[derive(AutoRegisterSolver)]`

use aoc_solver::{
    Answer, Answers, AocParser, AutoRegisterSolver, InputSet, InputSource, ParseError,
    RegistryBuilder, SolveError, Solver, Variant,
};

fn parse_numbers(input: &mut InputSource) -> Result<Vec<i64>, ParseError> {
    input
        .read_all()?
        .lines()
        .map(|line| {
            line.trim()
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
        })
        .collect()
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 24)]
struct SumSolver;

impl AocParser for SumSolver {
    type Parsed = Vec<i64>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        parse_numbers(input)
    }
}

impl Solver for SumSolver {
    const PARTS: u8 = 2;

    fn solve_part(numbers: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        match part {
            1 => Ok(Answer::new(numbers.iter().sum::<i64>())),
            2 => Ok(Answer::new(numbers.iter().product::<i64>())),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 24, variant = "golf")]
struct SumSolverGolf;

impl AocParser for SumSolverGolf {
    type Parsed = String;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        input.read_all()
    }
}

impl Solver for SumSolverGolf {
    const PARTS: u8 = 1;

    fn solve_part(text: &mut Self::Parsed, _: u8) -> Result<Answer, SolveError> {
        Ok(Answer::new(
            text.lines().filter_map(|l| l.trim().parse::<i64>().ok()).sum::<i64>(),
        ))
    }
}

#[test]
fn test_derive_registers_both_variants() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    assert!(registry.contains(24, Variant::Primary));
    assert!(registry.contains(24, Variant::Golf));
    assert!(!registry.contains(23, Variant::Primary));
    assert_eq!(registry.get(24, Variant::Golf).unwrap().parts(), 1);
}

#[test]
fn test_registered_solver_produces_answers() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();
    let solver = registry.get(24, Variant::Primary).unwrap();
    let mut inputs = InputSet::single(InputSource::from_text("mem", "2\n3\n4"));

    let answers: Vec<String> = Answers::new(solver, &mut inputs)
        .map(|r| r.unwrap().answer.value.to_string())
        .collect();
    assert_eq!(answers, ["9", "24"]);
}

#[test]
fn test_plugin_filter_selects_variant() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.variant == Variant::Golf)
        .expect("Failed to register plugins")
        .build();

    assert!(!registry.contains(24, Variant::Primary));
    assert!(registry.contains(24, Variant::Golf));
}
