//! Cost-based choice among covering combinations.

use std::fmt;

use log::debug;

use crate::bitset::BitSet;
use crate::implicant::Implicant;

/// Cost of a cover: term count first, total literal count second.
///
/// Field order matters: the derived `Ord` compares `terms` before `literals`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cost {
    pub terms: usize,
    pub literals: usize,
}

impl Cost {
    /// Cost of the candidates selected by `combination`.
    pub fn of(combination: &BitSet, candidates: &[Implicant], num_vars: usize) -> Self {
        let literals = combination
            .iter()
            .map(|idx| candidates[idx].literals(num_vars) as usize)
            .sum();
        Cost {
            terms: combination.len(),
            literals,
        }
    }

    /// Single-number cost `terms * 1000 + literals`.
    ///
    /// Agrees with the `Ord` ranking as long as covers stay below 1000 literals.
    pub fn weighted(&self) -> u64 {
        self.terms as u64 * 1000 + self.literals as u64
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} terms/{} literals", self.terms, self.literals)
    }
}

/// Picks the cheapest combination; the first one wins ties.
///
/// Returns an empty set if `combinations` is empty.
pub fn choose(combinations: &[BitSet], candidates: &[Implicant], num_vars: usize) -> BitSet {
    let mut best: Option<(&BitSet, Cost)> = None;
    for combination in combinations {
        let cost = Cost::of(combination, candidates, num_vars);
        if best.map_or(true, |(_, best_cost)| cost < best_cost) {
            best = Some((combination, cost));
        }
    }
    match best {
        Some((combination, cost)) => {
            debug!("choose: {:?} with cost {}", combination.iter().collect::<Vec<_>>(), cost);
            combination.clone()
        }
        None => BitSet::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn set(indices: &[usize]) -> BitSet {
        indices.iter().copied().collect()
    }

    fn candidates() -> Vec<Implicant> {
        let n = 3;
        let pair = |a, b| Implicant::singleton(a).combine(&Implicant::singleton(b), n).unwrap();
        vec![
            Implicant::singleton(7),                       // 3 literals
            pair(4, 5),                                    // 2 literals
            pair(0, 1).combine(&pair(2, 3), n).unwrap(),   // 1 literal
            pair(6, 7),                                    // 2 literals
        ]
    }

    #[test]
    fn test_cost_of() {
        let cands = candidates();
        let cost = Cost::of(&set(&[0, 2]), &cands, 3);
        assert_eq!(cost, Cost { terms: 2, literals: 4 });
        assert_eq!(cost.weighted(), 2004);
    }

    #[test]
    fn test_fewer_terms_win() {
        let cands = candidates();
        let combos = vec![set(&[2, 1]), set(&[0])];
        assert_eq!(choose(&combos, &cands, 3), set(&[0]));
    }

    #[test]
    fn test_fewer_literals_break_term_ties() {
        let cands = candidates();
        let combos = vec![set(&[0, 1]), set(&[1, 2]), set(&[2, 3])];
        assert_eq!(choose(&combos, &cands, 3), set(&[1, 2]));
    }

    #[test]
    fn test_first_wins_exact_ties() {
        let cands = candidates();
        let combos = vec![set(&[1]), set(&[3])];
        assert_eq!(choose(&combos, &cands, 3), set(&[1]));
    }

    #[test]
    fn test_empty() {
        assert!(choose(&[], &candidates(), 3).is_empty());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let few_terms = Cost { terms: 2, literals: 5000 };
        let many_terms = Cost { terms: 3, literals: 3 };
        assert!(few_terms < many_terms);
    }
}
