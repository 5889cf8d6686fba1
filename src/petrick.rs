//! Covering of the minterms left by essential implicants (Petrick's method).
//!
//! Each uncovered minterm contributes a clause: the set of candidate indices
//! covering it. The product of all clauses is expanded into a sum of
//! combinations, one clause at a time, and after each step the absorption law
//! (`X + XY = X`) removes every combination that contains another one. The
//! survivors are exactly the irredundant covers of the uncovered minterms.
//!
//! The expansion is exponential in the worst case, so an optional budget caps
//! the number of combinations that may survive absorption after any step. When
//! the budget is exceeded the caller can fall back to [`greedy`].

use std::cmp::Reverse;

use log::debug;

use crate::bitset::BitSet;
use crate::error::{Error, Result};
use crate::implicant::Implicant;

/// Builds one clause per uncovered minterm: the indices of candidates covering it.
///
/// Fails with [`Error::Uncoverable`] if some minterm has an empty clause.
pub fn clauses(uncovered: &[u64], candidates: &[Implicant]) -> Result<Vec<BitSet>> {
    uncovered
        .iter()
        .map(|&m| {
            let clause: BitSet = candidates
                .iter()
                .enumerate()
                .filter(|(_, imp)| imp.covers(m))
                .map(|(i, _)| i)
                .collect();
            if clause.is_empty() {
                Err(Error::Uncoverable { minterm: m })
            } else {
                Ok(clause)
            }
        })
        .collect()
}

/// Enumerates all irredundant combinations of candidates covering `uncovered`.
///
/// With `budget = Some(n)`, fails with [`Error::CoveringBudgetExceeded`] as
/// soon as more than `n` combinations survive absorption after some step.
pub fn cover(uncovered: &[u64], candidates: &[Implicant], budget: Option<usize>) -> Result<Vec<BitSet>> {
    let clauses = clauses(uncovered, candidates)?;
    let mut combinations = vec![BitSet::empty()];

    for (step, clause) in clauses.iter().enumerate() {
        let mut expanded = Vec::new();
        for combination in &combinations {
            // Already satisfied: every other expansion would be absorbed by this one.
            if clause.iter().any(|idx| combination.contains(idx)) {
                expanded.push(combination.clone());
            } else {
                expanded.extend(clause.iter().map(|idx| combination.with(idx)));
            }
        }
        combinations = absorb(expanded);
        if let Some(budget) = budget {
            if combinations.len() > budget {
                return Err(Error::CoveringBudgetExceeded {
                    combinations: combinations.len(),
                    budget,
                });
            }
        }
        debug!(
            "petrick: clause {}/{} -> {} combinations",
            step + 1,
            clauses.len(),
            combinations.len()
        );
    }

    Ok(combinations)
}

/// Applies the absorption law: drops strict supersets and repeated combinations.
///
/// Survivors keep their relative order, and a repeated combination survives
/// at its first position.
pub fn absorb(combinations: Vec<BitSet>) -> Vec<BitSet> {
    // Smaller sets first (stable), so every absorber is visited before the sets it absorbs.
    let mut order: Vec<usize> = (0..combinations.len()).collect();
    order.sort_by_key(|&i| combinations[i].len());

    let mut keep = vec![false; combinations.len()];
    let mut survivors: Vec<usize> = Vec::new();
    for i in order {
        let comb = &combinations[i];
        if !survivors.iter().any(|&j| combinations[j].is_subset(comb)) {
            keep[i] = true;
            survivors.push(i);
        }
    }

    combinations
        .into_iter()
        .zip(keep)
        .filter_map(|(comb, keep)| keep.then_some(comb))
        .collect()
}

/// Greedy set cover of `uncovered` by `candidates`.
///
/// Repeatedly takes the candidate covering the most still-uncovered minterms,
/// preferring fewer literals and then the lower index. Not guaranteed minimal.
pub fn greedy(uncovered: &[u64], candidates: &[Implicant], num_vars: usize) -> Result<BitSet> {
    let mut remaining = uncovered.to_vec();
    let mut chosen = BitSet::new(candidates.len());

    while let Some(&first) = remaining.first() {
        let best = candidates
            .iter()
            .enumerate()
            .filter(|(i, _)| !chosen.contains(*i))
            .map(|(i, imp)| {
                let gain = remaining.iter().filter(|&&m| imp.covers(m)).count();
                (i, gain, imp.literals(num_vars))
            })
            .filter(|&(_, gain, _)| gain > 0)
            .max_by_key(|&(i, gain, literals)| (gain, Reverse(literals), Reverse(i)));

        let Some((idx, gain, _)) = best else {
            return Err(Error::Uncoverable { minterm: first });
        };
        debug!("greedy: take candidate {} covering {} minterms", idx, gain);
        chosen.insert(idx);
        let imp = &candidates[idx];
        remaining.retain(|&m| !imp.covers(m));
    }

    Ok(chosen)
}
