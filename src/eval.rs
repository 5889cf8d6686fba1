//! Evaluation of implicants, covers and expression strings on input assignments.
//!
//! An assignment is a `u64` whose lowest `num_vars` bits hold the input values,
//! in the same layout as minterms. These helpers are how results are checked:
//! a minimized cover must evaluate to `true` exactly on the original minterms.

use crate::error::{Error, Result};
use crate::implicant::Implicant;
use crate::types::{full_mask, Var};

pub trait Eval {
    fn eval(&self, assignment: u64) -> bool;
}

impl Eval for Implicant {
    fn eval(&self, assignment: u64) -> bool {
        let care = !self.mask();
        (assignment ^ self.base()) & care == 0
    }
}

impl Eval for [Implicant] {
    fn eval(&self, assignment: u64) -> bool {
        self.iter().any(|imp| imp.eval(assignment))
    }
}

impl Eval for Vec<Implicant> {
    fn eval(&self, assignment: u64) -> bool {
        self.as_slice().eval(assignment)
    }
}

/// A conjunction of literals: bits in `care` must equal the bits in `value`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Product {
    pub care: u64,
    pub value: u64,
}

impl Eval for Product {
    fn eval(&self, assignment: u64) -> bool {
        (assignment ^ self.value) & self.care == 0
    }
}

/// A parsed sum-of-products expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Expression {
    pub terms: Vec<Product>,
}

impl Eval for Expression {
    fn eval(&self, assignment: u64) -> bool {
        self.terms.iter().any(|t| t.eval(assignment))
    }
}

impl Expression {
    /// Parses an expression in the format produced by [`crate::format`].
    ///
    /// `"0"` is the empty sum; `"1"` (alone or as a term) is the empty product.
    /// Whitespace around `+` is optional.
    pub fn parse(text: &str, num_vars: usize) -> Result<Self> {
        let text = text.trim();
        if text == "0" {
            return Ok(Expression { terms: Vec::new() });
        }
        let terms = text
            .split('+')
            .map(|term| parse_product(term.trim(), num_vars))
            .collect::<Result<Vec<_>>>()?;
        Ok(Expression { terms })
    }
}

fn parse_product(term: &str, num_vars: usize) -> Result<Product> {
    let mut product = Product { care: 0, value: 0 };
    if term == "1" {
        return Ok(product);
    }
    if term.is_empty() {
        return Err(Error::InvalidExpression("empty term".to_string()));
    }

    let mut chars = term.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        let mut end = start + c.len_utf8();
        if c == 'x' {
            while let Some(&(i, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                end = i + 1;
                chars.next();
            }
        }
        let name = &term[start..end];
        let var = Var::from_name(name)
            .filter(|v| (v.position() as usize) < num_vars)
            .ok_or_else(|| Error::InvalidExpression(format!("unknown variable '{}' in '{}'", name, term)))?;
        let positive = if let Some(&(_, '\'')) = chars.peek() {
            chars.next();
            false
        } else {
            true
        };

        let bit = 1u64 << var.bit(num_vars);
        if product.care & bit != 0 {
            return Err(Error::InvalidExpression(format!("variable '{}' repeated in '{}'", name, term)));
        }
        product.care |= bit;
        if positive {
            product.value |= bit;
        }
    }
    Ok(product)
}

/// Parses `expr` and evaluates it on `assignment`.
pub fn eval_expression(expr: &str, num_vars: usize, assignment: u64) -> Result<bool> {
    Ok(Expression::parse(expr, num_vars)?.eval(assignment))
}

/// Evaluates `f` on every assignment of `num_vars` variables, in ascending order.
///
/// # Panics
///
/// Panics if `num_vars > 24`; the table would not fit in reasonable memory.
pub fn truth_table<F: Eval + ?Sized>(f: &F, num_vars: usize) -> Vec<bool> {
    assert!(num_vars <= 24, "Truth tables are limited to 24 variables");
    (0..=full_mask(num_vars)).map(|x| f.eval(x)).collect()
}
