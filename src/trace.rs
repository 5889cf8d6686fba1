//! Intermediate data of a minimization run.
//!
//! A [`Trace`] records what each stage of the pipeline produced. It exists for
//! callers that visualize the grouping (Karnaugh map overlays, legends, prime
//! implicant charts) and for debugging.
//!
//! ```
//! use qmc_rs::minimize::Minimizer;
//!
//! let (result, trace) = Minimizer::default().minimize_traced(&[0, 1, 2, 5, 6, 7], 3).unwrap();
//! assert_eq!(result.cover.len(), 3);
//! assert!(trace.essential.is_empty());
//! println!("{}", trace);
//! ```

use std::fmt;

use crate::bitset::BitSet;
use crate::cost::Cost;
use crate::format::Term;
use crate::implicant::Implicant;

/// Everything computed on the way from minterms to the final cover.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    pub num_vars: usize,
    /// Normalized input: sorted, without duplicates.
    pub minterms: Vec<u64>,
    /// Implicants present after each generator round (round 0 = singletons).
    pub rounds: Vec<Vec<Implicant>>,
    pub primes: Vec<Implicant>,
    pub essential: Vec<Implicant>,
    pub candidates: Vec<Implicant>,
    pub uncovered: Vec<u64>,
    /// Irredundant candidate combinations found by Petrick's method.
    pub combinations: Vec<BitSet>,
    /// Indices into `candidates` of the chosen combination.
    pub chosen: BitSet,
    /// Whether the chosen combination came from the greedy fallback.
    pub greedy: bool,
}

impl Trace {
    /// Number of Petrick combinations listed by the chart.
    const MAX_LISTED: usize = 8;

    pub(crate) fn new(num_vars: usize, minterms: Vec<u64>) -> Self {
        Self {
            num_vars,
            minterms,
            ..Default::default()
        }
    }

    /// Number of generator rounds that combined something.
    pub fn merge_rounds(&self) -> usize {
        self.rounds.len().saturating_sub(2)
    }

    /// Cost of every surviving combination, in order.
    pub fn costs(&self) -> Vec<Cost> {
        self.combinations
            .iter()
            .map(|c| Cost::of(c, &self.candidates, self.num_vars))
            .collect()
    }

    fn write_chart_row(&self, f: &mut fmt::Formatter<'_>, tag: &str, imp: &Implicant) -> fmt::Result {
        write!(f, "  {} {} ", tag, imp.pattern(self.num_vars))?;
        for &m in &self.minterms {
            let mark = if imp.covers(m) { 'x' } else { '.' };
            write!(f, " {:>w$}", mark, w = m.to_string().len())?;
        }
        writeln!(f, "  {}", Term::new(imp, self.num_vars))
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Prime implicant chart ({} variables, {} minterms, {} primes):",
            self.num_vars,
            self.minterms.len(),
            self.primes.len()
        )?;
        write!(f, "    {:w$} ", "", w = self.num_vars)?;
        for m in &self.minterms {
            write!(f, " {}", m)?;
        }
        writeln!(f)?;
        for imp in &self.essential {
            self.write_chart_row(f, "*", imp)?;
        }
        for (i, imp) in self.candidates.iter().enumerate() {
            let tag = if self.chosen.contains(i) { "+" } else { " " };
            self.write_chart_row(f, tag, imp)?;
        }
        if !self.uncovered.is_empty() {
            writeln!(f, "Uncovered after essentials: {:?}", self.uncovered)?;
            writeln!(
                f,
                "{} {} combinations, chose {:?}",
                if self.greedy { "Greedy:" } else { "Petrick:" },
                self.combinations.len(),
                self.chosen.iter().collect::<Vec<_>>()
            )?;
            for (combination, cost) in self.combinations.iter().zip(self.costs()).take(Self::MAX_LISTED) {
                let indices: Vec<usize> = combination.iter().collect();
                writeln!(f, "  {:?}  cost {} ({})", indices, cost.weighted(), cost)?;
            }
            if self.combinations.len() > Self::MAX_LISTED {
                writeln!(f, "  ... {} more", self.combinations.len() - Self::MAX_LISTED)?;
            }
        }
        Ok(())
    }
}
