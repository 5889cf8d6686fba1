//! Removal of structurally identical implicants.
//!
//! The same implicant is routinely produced along several combination paths
//! (e.g. `{0,1}+{2,3}` and `{0,2}+{1,3}` both yield `{0,1,2,3}`), so each
//! generator round and the final cover are passed through [`dedup`].

use std::collections::HashSet;

use log::trace;

use crate::implicant::Implicant;

/// Removes duplicates keyed by `(sorted minterms, mask)`.
///
/// The first occurrence wins and the relative order of survivors is preserved.
pub fn dedup(implicants: Vec<Implicant>) -> Vec<Implicant> {
    let before = implicants.len();
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(before);
        implicants.iter().map(|imp| seen.insert(imp.key())).collect()
    };
    let result: Vec<Implicant> = implicants
        .into_iter()
        .zip(keep)
        .filter_map(|(imp, keep)| keep.then_some(imp))
        .collect();
    if result.len() != before {
        trace!("dedup: {} -> {}", before, result.len());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn pair(a: u64, b: u64) -> Implicant {
        Implicant::singleton(a).combine(&Implicant::singleton(b), 3).unwrap()
    }

    #[test]
    fn test_dedup_keeps_first_and_order() {
        let n = 3;
        let via_low = pair(0, 1).combine(&pair(2, 3), n).unwrap();
        let via_mid = pair(0, 2).combine(&pair(1, 3), n).unwrap();
        assert_eq!(via_low, via_mid);

        let input = vec![pair(4, 5), via_low.clone(), pair(6, 7), via_mid, pair(4, 5)];
        let output = dedup(input);
        assert_eq!(output, vec![pair(4, 5), via_low, pair(6, 7)]);
    }

    #[test]
    fn test_dedup_distinct_untouched() {
        let input = vec![Implicant::singleton(3), Implicant::singleton(1), Implicant::singleton(2)];
        assert_eq!(dedup(input.clone()), input);
        assert!(dedup(Vec::new()).is_empty());
    }
}
