//! # qmc-rs: Two-level Boolean minimization in Rust
//!
//! **`qmc-rs`** simplifies a Boolean function, given as the set of input
//! combinations on which it is true (its *minterms*), into a minimal
//! sum-of-products expression. It also exposes the chosen product terms and
//! the intermediate grouping data, so callers can highlight the cover on a
//! Karnaugh map or print a prime implicant chart.
//!
//! ## Algorithm
//!
//! 1. **Prime implicants** are generated Quine-McCluskey style: implicants
//!    whose specified bits differ in exactly one position are merged, round
//!    after round, until nothing merges.
//! 2. **Essential implicants** (the only cover of some minterm) are selected.
//! 3. **Petrick's method** enumerates every irredundant way of covering the
//!    remaining minterms with the other primes.
//! 4. **Cost selection** takes the combination with the fewest terms, then the
//!    fewest literals.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::minimize::minimize;
//!
//! // f(A, B, C) is false only on A = B = C = 1.
//! let result = minimize(&[0, 1, 2, 3, 4, 5, 6], 3).unwrap();
//! assert_eq!(result.expression, "A' + B' + C'");
//!
//! // Each term of the cover exposes the minterms it groups.
//! assert_eq!(result.cover[0].minterms(), &[0, 1, 2, 3]);
//! ```
//!
//! Variables are named MSB first: with three variables, `A` is bit 2 and `C`
//! is bit 0 of a minterm.
//!
//! ## Core Components
//!
//! - **[`minimize`]**: the [`Minimizer`][crate::minimize::Minimizer] pipeline and its configuration.
//! - **[`implicant`]**: the [`Implicant`][crate::implicant::Implicant] product term.
//! - **[`petrick`]**: the covering step, with a budget and a greedy fallback.
//! - **[`trace`]**: intermediate data for visualization and debugging.
//! - **[`eval`]**: evaluation of covers and expression strings.

pub mod bitset;
pub mod cost;
pub mod dedup;
pub mod error;
pub mod essential;
pub mod eval;
pub mod format;
pub mod generate;
pub mod implicant;
pub mod minimize;
pub mod petrick;
pub mod trace;
pub mod types;
