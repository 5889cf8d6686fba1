//! Variable naming and bit-width helpers.
//!
//! Minterms are plain `u64` values: bit `num_vars - 1` is the most significant
//! variable and bit `0` the least significant one. Variables are named by their
//! position counted from the most significant bit, so with three variables the
//! minterm `0b100` is `AB'C'`.

use std::fmt;

/// Maximum number of variables a minterm can index.
pub const MAX_VARS: usize = u64::BITS as usize;

/// Returns a mask with the lowest `num_vars` bits set.
///
/// # Panics
///
/// Panics if `num_vars > MAX_VARS`.
pub fn full_mask(num_vars: usize) -> u64 {
    assert!(num_vars <= MAX_VARS, "At most {} variables are supported", MAX_VARS);
    if num_vars == MAX_VARS {
        u64::MAX
    } else {
        (1u64 << num_vars) - 1
    }
}

/// Returns `true` if `minterm` fits in `num_vars` bits.
pub fn in_range(minterm: u64, num_vars: usize) -> bool {
    minterm & !full_mask(num_vars) == 0
}

/// A variable, identified by its position counted from the most significant bit.
///
/// # Invariants
///
/// - Position `0` is the most significant variable (`A`)
/// - The bit index of a variable depends on the total number of variables
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a variable at the given position (0 = most significant).
    pub fn new(position: u32) -> Self {
        Var(position)
    }

    /// Returns the variable that owns bit `bit` in a function of `num_vars` variables.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= num_vars`.
    pub fn from_bit(bit: u32, num_vars: usize) -> Self {
        assert!((bit as usize) < num_vars, "Bit {} is out of range for {} variables", bit, num_vars);
        Var(num_vars as u32 - 1 - bit)
    }

    /// Returns the raw position.
    pub fn position(self) -> u32 {
        self.0
    }

    /// Returns the bit index of this variable in a function of `num_vars` variables.
    pub fn bit(self, num_vars: usize) -> u32 {
        assert!((self.0 as usize) < num_vars, "Variable {} is out of range for {} variables", self, num_vars);
        num_vars as u32 - 1 - self.0
    }

    /// Parses a variable name produced by [`Display`][fmt::Display].
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        match (chars.next(), chars.as_str()) {
            (Some(c @ 'A'..='Z'), "") => Some(Var(c as u32 - 'A' as u32)),
            (Some('x'), digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                let position: u32 = digits.parse().ok()?;
                if position >= 26 {
                    Some(Var(position))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 26 {
            let c = char::from(b'A' + self.0 as u8);
            write!(f, "{}", c)
        } else {
            write!(f, "x{}", self.0)
        }
    }
}
