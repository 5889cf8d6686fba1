//! Essential prime implicant selection.

use std::collections::HashMap;

use log::debug;

use crate::dedup::dedup;
use crate::implicant::Implicant;

/// Prime implicants partitioned by essentiality.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Selection {
    /// Implicants that are the sole cover of at least one minterm.
    pub essential: Vec<Implicant>,
    /// All remaining prime implicants, in input order.
    pub candidates: Vec<Implicant>,
    /// Minterms not covered by any essential implicant, ascending.
    pub uncovered: Vec<u64>,
}

/// Splits `primes` into essential implicants and candidates.
///
/// An implicant is essential if it covers some minterm no other prime covers.
/// `minterms` is the on-set the primes were generated from; the minterms it
/// has that no essential implicant covers are reported as `uncovered`.
pub fn select(primes: &[Implicant], minterms: &[u64]) -> Selection {
    let mut coverage: HashMap<u64, usize> = HashMap::new();
    for imp in primes {
        for &m in imp.minterms() {
            *coverage.entry(m).or_insert(0) += 1;
        }
    }

    let (essential, candidates): (Vec<Implicant>, Vec<Implicant>) = primes
        .iter()
        .cloned()
        .partition(|imp| imp.minterms().iter().any(|m| coverage[m] == 1));
    let essential = dedup(essential);

    let uncovered: Vec<u64> = minterms
        .iter()
        .copied()
        .filter(|&m| !essential.iter().any(|imp| imp.covers(m)))
        .collect();

    debug!(
        "select: {} essential, {} candidates, {} uncovered",
        essential.len(),
        candidates.len(),
        uncovered.len()
    );

    Selection {
        essential,
        candidates,
        uncovered,
    }
}
