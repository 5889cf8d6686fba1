//! The minimization pipeline.
//!
//! ```text
//! minterms ─► normalize ─► generate ─► select ─► cover ─► choose ─► dedup ─► format
//!                          (primes)   (essential,  (Petrick)  (cost)
//!                                      candidates)
//! ```
//!
//! [`Minimizer`] holds only configuration; every call is independent and
//! returns the same result for the same input.
//!
//! # Example
//!
//! ```
//! use qmc_rs::minimize::minimize;
//!
//! let result = minimize(&[0, 1, 2, 3, 4, 5, 6], 3).unwrap();
//! assert_eq!(result.expression, "A' + B' + C'");
//! assert_eq!(result.cover.len(), 3);
//! ```

use std::fmt;

use log::debug;

use crate::bitset::BitSet;
use crate::cost::choose;
use crate::dedup::dedup;
use crate::error::{Error, Result};
use crate::essential::select;
use crate::eval::Eval;
use crate::format::format_cover;
use crate::generate::generate;
use crate::implicant::Implicant;
use crate::petrick::{cover, greedy};
use crate::trace::Trace;
use crate::types::{in_range, MAX_VARS};

/// What to do when Petrick's method exceeds its budget.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum BudgetPolicy {
    /// Fail with [`Error::CoveringBudgetExceeded`].
    #[default]
    Fail,
    /// Fall back to a greedy cover (valid, but not necessarily minimal).
    Greedy,
}

/// Configuration for [`Minimizer`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MinimizerConfig {
    /// Maximum number of combinations allowed to survive absorption after any
    /// Petrick expansion step. `None` disables the limit.
    pub max_combinations: Option<usize>,
    pub budget_policy: BudgetPolicy,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            max_combinations: Some(1 << 14),
            budget_policy: BudgetPolicy::Fail,
        }
    }
}

impl MinimizerConfig {
    pub fn with_max_combinations(mut self, max_combinations: Option<usize>) -> Self {
        self.max_combinations = max_combinations;
        self
    }

    pub fn with_budget_policy(mut self, budget_policy: BudgetPolicy) -> Self {
        self.budget_policy = budget_policy;
        self
    }
}

/// Result of a minimization.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Minimization {
    /// Sum-of-products expression, `"0"` or `"1"` for constant functions.
    pub expression: String,
    /// Selected implicants, in expression order. Empty for constant functions.
    pub cover: Vec<Implicant>,
}

impl Minimization {
    fn constant(value: bool) -> Self {
        Self {
            expression: if value { "1" } else { "0" }.to_string(),
            cover: Vec::new(),
        }
    }

    /// Returns `true` if the function is constant (true or false).
    pub fn is_constant(&self) -> bool {
        self.cover.is_empty()
    }
}

impl Eval for Minimization {
    fn eval(&self, assignment: u64) -> bool {
        if self.cover.is_empty() {
            self.expression == "1"
        } else {
            self.cover.eval(assignment)
        }
    }
}

impl fmt::Display for Minimization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Quine-McCluskey minimizer with Petrick's method for the cyclic part.
#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    config: MinimizerConfig,
}

impl Minimizer {
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    /// Minimizes the function of `num_vars` variables that is true exactly on `minterms`.
    ///
    /// Duplicates and ordering in `minterms` are irrelevant.
    pub fn minimize(&self, minterms: &[u64], num_vars: usize) -> Result<Minimization> {
        self.minimize_traced(minterms, num_vars).map(|(result, _)| result)
    }

    /// Same as [`Minimizer::minimize`], also returning the intermediate data.
    pub fn minimize_traced(&self, minterms: &[u64], num_vars: usize) -> Result<(Minimization, Trace)> {
        let minterms = normalize(minterms, num_vars)?;
        debug!("minimize(num_vars = {}, minterms = {:?})", num_vars, minterms);
        let mut trace = Trace::new(num_vars, minterms.clone());

        if minterms.is_empty() {
            return Ok((Minimization::constant(false), trace));
        }
        if minterms.len() as u128 == 1u128 << num_vars {
            return Ok((Minimization::constant(true), trace));
        }

        let mut rounds = Vec::new();
        let primes = generate(&minterms, num_vars, |imps| rounds.push(imps.to_vec()));
        let selection = select(&primes, &minterms);

        let (combinations, chosen, used_greedy) = if selection.uncovered.is_empty() {
            (Vec::new(), BitSet::empty(), false)
        } else {
            match cover(&selection.uncovered, &selection.candidates, self.config.max_combinations) {
                Ok(combinations) => {
                    let chosen = choose(&combinations, &selection.candidates, num_vars);
                    (combinations, chosen, false)
                }
                Err(Error::CoveringBudgetExceeded { combinations, budget })
                    if self.config.budget_policy == BudgetPolicy::Greedy =>
                {
                    debug!(
                        "petrick: budget {} exceeded ({} combinations), falling back to greedy",
                        budget, combinations
                    );
                    let chosen = greedy(&selection.uncovered, &selection.candidates, num_vars)?;
                    (Vec::new(), chosen, true)
                }
                Err(e) => return Err(e),
            }
        };

        let mut final_cover = selection.essential.clone();
        final_cover.extend(chosen.iter().map(|idx| selection.candidates[idx].clone()));
        let final_cover = dedup(final_cover);
        let expression = format_cover(&final_cover, num_vars);
        debug!("minimize: {} terms: {}", final_cover.len(), expression);

        trace.rounds = rounds;
        trace.primes = primes;
        trace.essential = selection.essential;
        trace.candidates = selection.candidates;
        trace.uncovered = selection.uncovered;
        trace.combinations = combinations;
        trace.chosen = chosen;
        trace.greedy = used_greedy;

        let result = Minimization {
            expression,
            cover: final_cover,
        };
        Ok((result, trace))
    }
}

/// Minimizes with the default configuration. See [`Minimizer::minimize`].
pub fn minimize(minterms: &[u64], num_vars: usize) -> Result<Minimization> {
    Minimizer::default().minimize(minterms, num_vars)
}

/// Validates the input and returns the minterms sorted and deduplicated.
fn normalize(minterms: &[u64], num_vars: usize) -> Result<Vec<u64>> {
    if num_vars == 0 {
        return Err(Error::NoVariables);
    }
    if num_vars > MAX_VARS {
        return Err(Error::TooManyVariables { num_vars, max: MAX_VARS });
    }
    if let Some(&minterm) = minterms.iter().find(|&&m| !in_range(m, num_vars)) {
        return Err(Error::MintermOutOfRange { minterm, num_vars });
    }
    let mut result = minterms.to_vec();
    result.sort_unstable();
    result.dedup();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::cost::Cost;
    use crate::eval::truth_table;

    #[test]
    fn test_constant_false() {
        let result = minimize(&[], 3).unwrap();
        assert_eq!(result.expression, "0");
        assert!(result.cover.is_empty());
        assert_eq!(truth_table(&result, 3), vec![false; 8]);
    }

    #[test]
    fn test_constant_true() {
        let result = minimize(&[0, 1, 2, 3], 2).unwrap();
        assert_eq!(result.expression, "1");
        assert!(result.cover.is_empty());
        assert_eq!(truth_table(&result, 2), vec![true; 4]);
    }

    #[test]
    fn test_constant_true_with_duplicates() {
        let result = minimize(&[3, 2, 1, 0, 3, 1], 2).unwrap();
        assert_eq!(result.expression, "1");
    }

    #[test]
    fn test_two_essential_minterms() {
        let result = minimize(&[0, 3], 2).unwrap();
        assert_eq!(result.expression, "A'B' + AB");
        assert_eq!(result.cover.len(), 2);
    }

    #[test]
    fn test_classic_reduction() {
        let result = minimize(&[0, 1, 2, 3, 4, 5, 6], 3).unwrap();
        assert_eq!(result.expression, "A' + B' + C'");
    }

    #[test]
    fn test_single_variable() {
        assert_eq!(minimize(&[1], 1).unwrap().expression, "A");
        assert_eq!(minimize(&[0], 1).unwrap().expression, "A'");
        assert_eq!(minimize(&[0, 1], 1).unwrap().expression, "1");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(minimize(&[0], 0), Err(Error::NoVariables));
        assert_eq!(
            minimize(&[0], 65),
            Err(Error::TooManyVariables { num_vars: 65, max: 64 })
        );
        assert_eq!(
            minimize(&[1, 8], 3),
            Err(Error::MintermOutOfRange { minterm: 8, num_vars: 3 })
        );
    }

    #[test]
    fn test_wide_function() {
        let n = 64;
        let result = minimize(&[u64::MAX, u64::MAX - 1], n).unwrap();
        assert_eq!(result.cover.len(), 1);
        assert_eq!(result.cover[0].literals(n), 63);
        assert!(result.eval(u64::MAX));
        assert!(!result.eval(0));
    }

    #[test]
    fn test_cyclic_uses_petrick() {
        let minterms = [0, 1, 2, 5, 6, 7];
        let (result, trace) = Minimizer::default().minimize_traced(&minterms, 3).unwrap();
        assert_eq!(result.cover.len(), 3);
        assert!(trace.essential.is_empty());
        assert_eq!(trace.uncovered, minterms.to_vec());
        assert!(!trace.combinations.is_empty());
        assert!(!trace.greedy);
        assert_eq!(trace.chosen.len(), 3);
        let table = truth_table(&result, 3);
        for x in 0..8u64 {
            assert_eq!(table[x as usize], minterms.contains(&x));
        }
    }

    #[test]
    fn test_budget_fail() {
        let config = MinimizerConfig::default().with_max_combinations(Some(2));
        let result = Minimizer::new(config).minimize(&[0, 1, 2, 5, 6, 7], 3);
        assert!(matches!(result, Err(Error::CoveringBudgetExceeded { budget: 2, .. })));
    }

    #[test]
    fn test_budget_greedy() {
        let config = MinimizerConfig::default()
            .with_max_combinations(Some(2))
            .with_budget_policy(BudgetPolicy::Greedy);
        let minterms = [0, 1, 2, 5, 6, 7];
        let (result, trace) = Minimizer::new(config).minimize_traced(&minterms, 3).unwrap();
        assert!(trace.greedy);
        let table = truth_table(&result, 3);
        for x in 0..8u64 {
            assert_eq!(table[x as usize], minterms.contains(&x));
        }
    }

    #[test]
    fn test_unlimited_budget() {
        let config = MinimizerConfig::default().with_max_combinations(None);
        let result = Minimizer::new(config).minimize(&[0, 1, 2, 5, 6, 7], 3).unwrap();
        assert_eq!(result.cover.len(), 3);
    }

    #[test]
    fn test_trace_rounds() {
        let (_, trace) = Minimizer::default().minimize_traced(&[0, 1, 2, 3, 4, 5, 6], 3).unwrap();
        assert_eq!(trace.rounds[0].len(), 7);
        assert_eq!(trace.merge_rounds(), 2);
        assert_eq!(trace.primes.len(), 3);
        assert_eq!(trace.essential.len(), 3);
        let chart = trace.to_string();
        assert!(chart.contains("Prime implicant chart (3 variables, 7 minterms, 3 primes)"));
        assert!(chart.contains("A'"));
    }

    #[test]
    fn test_trace_costs() {
        let (_, trace) = Minimizer::default().minimize_traced(&[0, 1, 2, 5, 6, 7], 3).unwrap();
        let costs = trace.costs();
        assert_eq!(costs.len(), trace.combinations.len());
        assert_eq!(costs.iter().min(), Some(&Cost { terms: 3, literals: 6 }));
        assert!(trace.to_string().contains("cost 3006 (3 terms/6 literals)"));
    }

    #[test]
    fn test_config() {
        assert_eq!(Minimizer::default().config().max_combinations, Some(1 << 14));
        let config = MinimizerConfig::default()
            .with_max_combinations(None)
            .with_budget_policy(BudgetPolicy::Greedy);
        let minimizer = Minimizer::new(config.clone());
        assert_eq!(minimizer.config(), &config);
    }
}
