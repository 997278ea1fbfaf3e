//! Solver registry for looking up day solvers

use crate::error::RegistrationError;
use crate::instance::{DynSolver, SolverHandle};
use std::fmt;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Days per Advent of Code event (1-25)
pub const DAYS: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = DAYS * Variant::ALL.len();

/// Which implementation of a day a solver is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// The reference implementation; its answers are persisted
    Primary,
    /// Alternate terse implementation, cross-checked against the primary
    Golf,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Primary, Variant::Golf];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Golf => "golf",
        }
    }

    fn slot(self) -> usize {
        match self {
            Variant::Primary => 0,
            Variant::Golf => 1,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calculate flat index from day/variant, returning None if out of bounds
#[inline]
fn calc_index(day: u8, variant: Variant) -> Option<usize> {
    if day == 0 || usize::from(day) > DAYS {
        return None;
    }
    Some(usize::from(day - 1) * Variant::ALL.len() + variant.slot())
}

/// Reconstruct day/variant from flat index
#[inline]
fn from_index(index: usize) -> (u8, Variant) {
    let day = (index / Variant::ALL.len()) as u8 + 1;
    (day, Variant::ALL[index % Variant::ALL.len()])
}

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The day number (1-25)
    pub day: u8,
    /// Primary or golf implementation
    pub variant: Variant,
    /// Number of parts this solver produces
    pub parts: u8,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing an immutable `SolverRegistry`
///
/// Registration rejects days outside 1..=25 and duplicate day/variant pairs.
///
/// # Example
///
/// ```
/// # use aoc_solver::{Answer, AocParser, InputSource, ParseError, RegistryBuilder, SolveError,
/// #     Solver, SolverHandle, Variant};
/// struct Day1;
/// # impl AocParser for Day1 {
/// #     type Parsed = ();
/// #     fn parse(_: &mut InputSource) -> Result<(), ParseError> { Ok(()) }
/// # }
/// # impl Solver for Day1 {
/// #     const PARTS: u8 = 1;
/// #     fn solve_part(_: &mut (), _: u8) -> Result<Answer, SolveError> { Ok(Answer::new(1)) }
/// # }
///
/// let registry = RegistryBuilder::new()
///     .register(1, Variant::Primary, SolverHandle::<Day1>::new())
///     .unwrap()
///     .build();
/// assert!(registry.contains(1, Variant::Primary));
/// assert!(!registry.contains(1, Variant::Golf));
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<Box<dyn DynSolver>>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver for a specific day and variant
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Invalid day or duplicate registration
    pub fn register(
        mut self,
        day: u8,
        variant: Variant,
        solver: impl DynSolver + 'static,
    ) -> Result<Self, RegistrationError> {
        let index = calc_index(day, variant).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day, variant));
        }

        self.entries[index] = Some(Box::new(solver));
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`, which is
    /// what `#[derive(AutoRegisterSolver)]` expands to.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_solver::{RegistryBuilder, Variant};
    /// // Only primary solvers
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.variant == Variant::Primary)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day, plugin.variant)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable registry mapping (day, variant) to a solver
///
/// Built once at startup; lookups are O(1) index math into a flat table.
pub struct SolverRegistry {
    entries: Vec<Option<Box<dyn DynSolver>>>,
}

impl SolverRegistry {
    /// Solver registered for the day and variant, if any
    pub fn get(&self, day: u8, variant: Variant) -> Option<&dyn DynSolver> {
        calc_index(day, variant)
            .and_then(|i| self.entries.get(i)?.as_deref())
    }

    /// Check if a solver exists for day/variant
    pub fn contains(&self, day: u8, variant: Variant) -> bool {
        self.get(day, variant).is_some()
    }

    /// Iterate over metadata for all registered solvers, by day then variant
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|solver| {
                let (day, variant) = from_index(i);
                SolverInfo {
                    day,
                    variant,
                    parts: solver.parts(),
                }
            })
        })
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Trait for solvers that can register themselves with a registry builder
///
/// Has no associated types, so different solver types can be collected in a
/// single container. Every `Solver` gets it through the blanket impl below.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day and variant
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
        variant: Variant,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
        variant: Variant,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(day, variant, SolverHandle::<S>::new())
    }
}

/// Plugin information for automatic solver registration
///
/// Usually produced by `#[derive(AutoRegisterSolver)]`; can be submitted by
/// hand as well:
///
/// ```no_run
/// use aoc_solver::{Answer, AocParser, InputSource, ParseError, SolveError, Solver, SolverPlugin,
///     Variant};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type Parsed = ();
///
///     fn parse(_: &mut InputSource) -> Result<(), ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut (), part: u8) -> Result<Answer, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin {
///         day: 1,
///         variant: Variant::Primary,
///         solver: &Day1Solver,
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// Primary or golf implementation
    pub variant: Variant,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
}

inventory::collect!(SolverPlugin);

/// Macro to register a solver type with the registry builder
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, AocParser, InputSource, ParseError, register_solver, RegistryBuilder,
///     SolveError, Solver, Variant};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type Parsed = ();
///
///     fn parse(_: &mut InputSource) -> Result<(), ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut (), _: u8) -> Result<Answer, SolveError> {
///         Ok(Answer::new(1))
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, Day1, 1);
/// register_solver!(builder, Day1, 1, Variant::Golf);
/// let registry = builder.build();
/// assert_eq!(registry.len(), 2);
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $day:expr) => {
        $crate::register_solver!($builder, $solver, $day, $crate::Variant::Primary)
    };
    ($builder:expr, $solver:ty, $day:expr, $variant:expr) => {
        $builder = $builder
            .register($day, $variant, $crate::SolverHandle::<$solver>::new())
            .expect("Failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;
    use crate::error::{ParseError, SolveError};
    use crate::input::InputSource;
    use crate::solver::{AocParser, Solver};
    use proptest::prelude::*;

    struct Constant;

    impl AocParser for Constant {
        type Parsed = ();

        fn parse(_: &mut InputSource) -> Result<(), ParseError> {
            Ok(())
        }
    }

    impl Solver for Constant {
        const PARTS: u8 = 2;

        fn solve_part(_: &mut (), part: u8) -> Result<Answer, SolveError> {
            Ok(Answer::new(part))
        }
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = RegistryBuilder::new()
            .register(3, Variant::Primary, SolverHandle::<Constant>::new())
            .unwrap()
            .register(3, Variant::Primary, SolverHandle::<Constant>::new());

        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(3, Variant::Primary))
        ));
    }

    #[test]
    fn test_variants_are_independent_slots() {
        let registry = RegistryBuilder::new()
            .register(3, Variant::Primary, SolverHandle::<Constant>::new())
            .unwrap()
            .register(3, Variant::Golf, SolverHandle::<Constant>::new())
            .unwrap()
            .build();

        let info: Vec<_> = registry.iter_info().collect();
        assert_eq!(
            info,
            [
                SolverInfo { day: 3, variant: Variant::Primary, parts: 2 },
                SolverInfo { day: 3, variant: Variant::Golf, parts: 2 },
            ]
        );
        assert!(registry.get(4, Variant::Primary).is_none());
    }

    #[test]
    fn test_invalid_days_rejected() {
        for day in [0, 26, 255] {
            let result =
                RegistryBuilder::new().register(day, Variant::Primary, SolverHandle::<Constant>::new());
            assert!(matches!(result, Err(RegistrationError::InvalidDay(d)) if d == day));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_index_roundtrip(day in 1u8..=25, golf in any::<bool>()) {
            let variant = if golf { Variant::Golf } else { Variant::Primary };
            let index = calc_index(day, variant).unwrap();
            prop_assert!(index < CAPACITY);
            prop_assert_eq!(from_index(index), (day, variant));
        }
    }
}
