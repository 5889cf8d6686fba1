//! Prime implicant generation by iterative one-bit combination.
//!
//! Implicants are kept in `num_vars + 1` buckets indexed by the number of
//! positive literals among their specified positions. Each round tries every
//! pair from adjacent buckets; a successful pair yields a larger implicant and
//! marks both parents as consumed. Consumption is tracked in a per-round
//! [`BitSet`] over flat implicant indices, never on the implicants themselves.
//!
//! The loop reaches its fixpoint on the first round without any combination,
//! at which point every remaining implicant is prime.

use log::debug;
use log::trace;

use crate::bitset::BitSet;
use crate::dedup::dedup;
use crate::implicant::Implicant;

/// Buckets of implicants, indexed by [`Implicant::ones`].
type Buckets = Vec<Vec<Implicant>>;

/// Generates all prime implicants of the function whose on-set is `minterms`.
///
/// `minterms` must be sorted, free of duplicates and in range for `num_vars`.
pub fn prime_implicants(minterms: &[u64], num_vars: usize) -> Vec<Implicant> {
    generate(minterms, num_vars, |_| {})
}

/// Same as [`prime_implicants`], reporting the implicants present after every round.
///
/// `on_round` receives round 0 (the singletons) first, then the state after
/// each combining round. The last call shows the prime implicants.
pub fn generate<F>(minterms: &[u64], num_vars: usize, mut on_round: F) -> Vec<Implicant>
where
    F: FnMut(&[Implicant]),
{
    debug_assert!(minterms.windows(2).all(|w| w[0] < w[1]));

    let mut buckets: Buckets = vec![Vec::new(); num_vars + 1];
    for &m in minterms {
        let imp = Implicant::singleton(m);
        buckets[imp.ones(num_vars) as usize].push(imp);
    }
    on_round(&buckets.concat());

    let mut round = 0;
    loop {
        round += 1;
        let (next, combined) = combine_round(&buckets, num_vars);
        buckets = next;
        let total: usize = buckets.iter().map(Vec::len).sum();
        debug!("round {}: {} combinations, {} implicants", round, combined, total);
        on_round(&buckets.concat());
        if combined == 0 {
            break;
        }
    }

    buckets.concat()
}

/// Performs one round of pairwise combination.
///
/// Returns the new buckets and the number of successful combinations.
fn combine_round(buckets: &Buckets, num_vars: usize) -> (Buckets, usize) {
    // Flat index of the first implicant of each bucket.
    let offsets: Vec<usize> = buckets
        .iter()
        .scan(0, |acc, bucket| {
            let start = *acc;
            *acc += bucket.len();
            Some(start)
        })
        .collect();

    let mut next: Buckets = vec![Vec::new(); num_vars + 1];
    let total = buckets.iter().map(Vec::len).sum();
    let mut consumed = BitSet::new(total);
    let mut combined = 0;

    for i in 0..buckets.len().saturating_sub(1) {
        for (a, lhs) in buckets[i].iter().enumerate() {
            for (b, rhs) in buckets[i + 1].iter().enumerate() {
                if let Some(imp) = lhs.combine(rhs, num_vars) {
                    trace!("combine {} + {} -> {}", lhs, rhs, imp.pattern(num_vars));
                    next[imp.ones(num_vars) as usize].push(imp);
                    consumed.insert(offsets[i] + a);
                    consumed.insert(offsets[i + 1] + b);
                    combined += 1;
                }
            }
        }
    }

    for (i, bucket) in buckets.iter().enumerate() {
        for (a, imp) in bucket.iter().enumerate() {
            if !consumed.contains(offsets[i] + a) {
                next[imp.ones(num_vars) as usize].push(imp.clone());
            }
        }
    }

    let next = next.into_iter().map(dedup).collect();
    (next, combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn patterns(imps: &[Implicant], num_vars: usize) -> Vec<String> {
        let mut result: Vec<String> = imps.iter().map(|imp| imp.pattern(num_vars)).collect();
        result.sort();
        result
    }

    #[test]
    fn test_no_combination() {
        let primes = prime_implicants(&[0, 3], 2);
        assert_eq!(patterns(&primes, 2), vec!["00", "11"]);
    }

    #[test]
    fn test_single_pair() {
        let primes = prime_implicants(&[2, 3], 2);
        assert_eq!(patterns(&primes, 2), vec!["1-"]);
        assert_eq!(primes[0].minterms(), &[2, 3]);
    }

    #[test]
    fn test_all_but_one_corner() {
        let primes = prime_implicants(&[0, 1, 2, 3, 4, 5, 6], 3);
        assert_eq!(patterns(&primes, 3), vec!["--0", "-0-", "0--"]);
    }

    #[test]
    fn test_cyclic_function() {
        // Classic cyclic core: every minterm is covered by exactly two primes.
        let primes = prime_implicants(&[0, 1, 2, 5, 6, 7], 3);
        assert_eq!(patterns(&primes, 3), vec!["-01", "-10", "0-0", "00-", "1-1", "11-"]);
    }

    #[test]
    fn test_four_vars() {
        let primes = prime_implicants(&[4, 8, 10, 11, 12, 15], 4);
        assert_eq!(patterns(&primes, 4), vec!["-100", "1-00", "1-11", "10-0", "101-"]);
    }

    #[test]
    fn test_rounds_reported() {
        let mut rounds = Vec::new();
        let primes = generate(&[0, 1, 2, 3], 2, |imps| rounds.push(imps.len()));
        // Singletons, pairs, the full quad, then a round with nothing to combine.
        assert_eq!(rounds, vec![4, 4, 1, 1]);
        assert_eq!(patterns(&primes, 2), vec!["--"]);
    }
}
