//! Advent of Code 2022 solutions with automatic registration
//!
//! Each day derives `AutoRegisterSolver`, so linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find every solver:
//!
//! ```
//! use aoc_solutions as _;
//! use aoc_solver::{RegistryBuilder, Variant};
//!
//! let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
//! assert!(registry.contains(1, Variant::Primary));
//! assert!(registry.contains(1, Variant::Golf));
//! ```

mod parsing;
pub mod year_2022;

#[cfg(test)]
mod testing;
