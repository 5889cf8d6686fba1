//! Rendering of covers as sum-of-products expressions.
//!
//! Variables are named MSB first (`A` is bit `num_vars - 1`), a complemented
//! literal carries an apostrophe, and terms are joined with `" + "`:
//!
//! ```
//! use qmc_rs::format::format_cover;
//! use qmc_rs::implicant::Implicant;
//!
//! let cover = vec![Implicant::singleton(0b00), Implicant::singleton(0b11)];
//! assert_eq!(format_cover(&cover, 2), "A'B' + AB");
//! ```

use std::fmt;

use crate::implicant::Implicant;
use crate::types::Var;

/// Display adapter for a single product term.
pub struct Term<'a> {
    implicant: &'a Implicant,
    num_vars: usize,
}

impl<'a> Term<'a> {
    pub fn new(implicant: &'a Implicant, num_vars: usize) -> Self {
        Self { implicant, num_vars }
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = self.implicant.mask();
        let base = self.implicant.base();
        let mut empty = true;
        for bit in (0..self.num_vars as u32).rev() {
            if (mask >> bit) & 1 == 1 {
                continue;
            }
            write!(f, "{}", Var::from_bit(bit, self.num_vars))?;
            if (base >> bit) & 1 == 0 {
                write!(f, "'")?;
            }
            empty = false;
        }
        if empty {
            // Every variable eliminated: the term covers the whole domain.
            write!(f, "1")?;
        }
        Ok(())
    }
}

/// Display adapter for a cover, in cover order.
///
/// The degenerate whole-function cases are the caller's business: an empty
/// cover renders as an empty string, not `"0"`.
pub struct SumOfProducts<'a> {
    cover: &'a [Implicant],
    num_vars: usize,
}

impl<'a> SumOfProducts<'a> {
    pub fn new(cover: &'a [Implicant], num_vars: usize) -> Self {
        Self { cover, num_vars }
    }
}

impl fmt::Display for SumOfProducts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, imp) in self.cover.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", Term::new(imp, self.num_vars))?;
        }
        Ok(())
    }
}

/// Renders `cover` as a sum-of-products string.
pub fn format_cover(cover: &[Implicant], num_vars: usize) -> String {
    SumOfProducts::new(cover, num_vars).to_string()
}
