//! Product terms over minterm sets.
//!
//! An [`Implicant`] records the minterms it covers, a don't-care `mask` of the
//! variable positions it has eliminated, and a `base` value whose specified
//! (unmasked) bits give the polarity of each remaining literal.
//!
//! ```
//! use qmc_rs::implicant::Implicant;
//!
//! let a = Implicant::singleton(0b010);
//! let b = Implicant::singleton(0b011);
//! let ab = a.combine(&b, 3).unwrap();
//!
//! assert_eq!(ab.minterms(), &[2, 3]);
//! assert_eq!(ab.mask(), 0b001);
//! assert_eq!(ab.pattern(3), "01-");
//! ```

use std::fmt;

use crate::types::full_mask;

/// A product term covering a set of minterms.
///
/// # Invariants
///
/// - `minterms` is non-empty, sorted ascending and free of duplicates
/// - `mask` bits are exactly the positions in which the covered minterms differ
/// - `base` is the AND of all minterms; its bits under `mask` are meaningless
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Implicant {
    minterms: Vec<u64>,
    mask: u64,
    base: u64,
}

impl Implicant {
    /// Creates the implicant covering a single minterm.
    pub fn singleton(minterm: u64) -> Self {
        Self {
            minterms: vec![minterm],
            mask: 0,
            base: minterm,
        }
    }

    /// Covered minterms, ascending.
    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    /// Don't-care positions: a set bit marks an eliminated variable.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Canonical representative: the AND of all covered minterms.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Key used to identify structurally equal implicants.
    pub fn key(&self) -> (&[u64], u64) {
        (&self.minterms, self.mask)
    }

    /// Number of specified (non-masked) positions, i.e. the literal count.
    pub fn literals(&self, num_vars: usize) -> u32 {
        (!self.mask & full_mask(num_vars)).count_ones()
    }

    /// Number of specified positions whose literal is positive.
    ///
    /// This is the bucket index used by the generator.
    pub fn ones(&self, num_vars: usize) -> u32 {
        (self.base & !self.mask & full_mask(num_vars)).count_ones()
    }

    /// Returns `true` if this implicant covers `minterm`.
    pub fn covers(&self, minterm: u64) -> bool {
        self.minterms.binary_search(&minterm).is_ok()
    }

    /// Returns the single differing specified bit if the two implicants are combinable.
    ///
    /// Two implicants combine iff their masks are equal and their specified
    /// bits differ in exactly one position.
    pub fn differing_bit(&self, other: &Implicant, num_vars: usize) -> Option<u64> {
        if self.mask != other.mask {
            return None;
        }
        let diff = (self.base ^ other.base) & !self.mask & full_mask(num_vars);
        if diff.count_ones() == 1 {
            Some(diff)
        } else {
            None
        }
    }

    /// Combines two adjacent implicants into the implicant covering both.
    ///
    /// Returns `None` if they are not combinable (see [`Implicant::differing_bit`]).
    pub fn combine(&self, other: &Implicant, num_vars: usize) -> Option<Implicant> {
        let diff = self.differing_bit(other, num_vars)?;

        let mut minterms = Vec::with_capacity(self.minterms.len() + other.minterms.len());
        minterms.extend_from_slice(&self.minterms);
        minterms.extend_from_slice(&other.minterms);
        minterms.sort_unstable();
        minterms.dedup();

        let base = minterms.iter().fold(full_mask(num_vars), |acc, &m| acc & m);

        Some(Implicant {
            minterms,
            mask: self.mask | other.mask | diff,
            base,
        })
    }

    /// Renders the cube MSB first, using `0`, `1` and `-` for masked positions.
    pub fn pattern(&self, num_vars: usize) -> String {
        (0..num_vars)
            .rev()
            .map(|bit| {
                if (self.mask >> bit) & 1 == 1 {
                    '-'
                } else if (self.base >> bit) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m(")?;
        for (i, m) in self.minterms.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", m)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_singleton() {
        let x = Implicant::singleton(5);
        assert_eq!(x.minterms(), &[5]);
        assert_eq!(x.mask(), 0);
        assert_eq!(x.base(), 5);
        assert_eq!(x.literals(3), 3);
        assert_eq!(x.ones(3), 2);
        assert_eq!(x.pattern(3), "101");
    }

    #[test]
    fn test_combine_adjacent() {
        let a = Implicant::singleton(0b100);
        let b = Implicant::singleton(0b110);
        let ab = a.combine(&b, 3).unwrap();
        assert_eq!(ab.minterms(), &[4, 6]);
        assert_eq!(ab.mask(), 0b010);
        assert_eq!(ab.base(), 0b100);
        assert_eq!(ab.literals(3), 2);
        assert_eq!(ab.pattern(3), "1-0");
    }

    #[test]
    fn test_combine_not_adjacent() {
        let a = Implicant::singleton(0b00);
        let b = Implicant::singleton(0b11);
        assert_eq!(a.combine(&b, 2), None);
        assert_eq!(a.combine(&a, 2), None);
    }

    #[test]
    fn test_combine_requires_equal_masks() {
        let ab = Implicant::singleton(0).combine(&Implicant::singleton(1), 3).unwrap();
        let c = Implicant::singleton(0b011);
        assert_eq!(ab.differing_bit(&c, 3), None);
        assert_eq!(ab.combine(&c, 3), None);
    }

    #[test]
    fn test_combine_second_level() {
        let n = 3;
        let x = Implicant::singleton(0).combine(&Implicant::singleton(1), n).unwrap();
        let y = Implicant::singleton(2).combine(&Implicant::singleton(3), n).unwrap();
        let xy = x.combine(&y, n).unwrap();
        assert_eq!(xy.minterms(), &[0, 1, 2, 3]);
        assert_eq!(xy.mask(), 0b011);
        assert_eq!(xy.base(), 0);
        assert_eq!(xy.pattern(n), "0--");
        assert!(xy.covers(2));
        assert!(!xy.covers(4));
    }

    #[test]
    fn test_display() {
        let x = Implicant::singleton(1).combine(&Implicant::singleton(3), 2).unwrap();
        assert_eq!(x.to_string(), "m(1,3)");
    }
}
