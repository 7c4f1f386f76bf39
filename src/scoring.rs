use std::collections::HashMap;

use crate::{AlignerError, DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH};

/// One column entry fed to a [`Scorer`]: either an input symbol or the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Residue(char),
    Gap,
}

/// Pairwise scoring policy used by the matrix builder.
///
/// Implementations must be pure: the recurrence calls `score` once per
/// cell and the same pair must always yield the same value.
pub trait Scorer {
    fn score(&self, a: Symbol, b: Symbol) -> i32;

    /// Penalty added for every gap column.
    fn gap_penalty(&self) -> i32 {
        self.score(Symbol::Gap, Symbol::Gap)
    }
}

/// Flat match/mismatch/gap scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParams {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_score: i32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch_score: DEFAULT_MISMATCH,
            gap_score: DEFAULT_GAP,
        }
    }
}

impl ScoreParams {
    pub fn new(match_score: i32, mismatch_score: i32, gap_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
        }
    }

    pub fn with_match_score(mut self, match_score: i32) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_mismatch_score(mut self, mismatch_score: i32) -> Self {
        self.mismatch_score = mismatch_score;
        self
    }

    pub fn with_gap_score(mut self, gap_score: i32) -> Self {
        self.gap_score = gap_score;
        self
    }
}

impl Scorer for ScoreParams {
    fn score(&self, a: Symbol, b: Symbol) -> i32 {
        match (a, b) {
            (Symbol::Gap, _) | (_, Symbol::Gap) => self.gap_score,
            (Symbol::Residue(x), Symbol::Residue(y)) if x == y => self.match_score,
            _ => self.mismatch_score,
        }
    }

    fn gap_penalty(&self) -> i32 {
        self.gap_score
    }
}

/// Substitution table with explicit per-pair scores, e.g. an amino-acid
/// matrix. Pairs missing from the table fall back to `fallback`.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    pairs: HashMap<(char, char), i32>,
    fallback: ScoreParams,
}

impl SubstitutionTable {
    pub fn new(fallback: ScoreParams) -> Self {
        Self {
            pairs: HashMap::new(),
            fallback,
        }
    }

    /// Builds a square table from an alphabet and one row of scores per
    /// alphabet symbol, in the same order.
    pub fn from_rows(
        alphabet: &str,
        rows: &[&[i32]],
        fallback: ScoreParams,
    ) -> Result<Self, AlignerError> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if rows.len() != symbols.len() {
            return Err(AlignerError::InvalidConfig(format!(
                "substitution table has {} rows for an alphabet of {} symbols",
                rows.len(),
                symbols.len()
            )));
        }

        let mut table = Self::new(fallback);
        for (row, &a) in rows.iter().zip(&symbols) {
            if row.len() != symbols.len() {
                return Err(AlignerError::InvalidConfig(format!(
                    "row for '{}' has {} columns, expected {}",
                    a,
                    row.len(),
                    symbols.len()
                )));
            }
            for (&score, &b) in row.iter().zip(&symbols) {
                table.pairs.insert((a, b), score);
            }
        }
        Ok(table)
    }

    /// Sets the score for `a` against `b` and `b` against `a`.
    pub fn with_pair(mut self, a: char, b: char, score: i32) -> Self {
        self.pairs.insert((a, b), score);
        self.pairs.insert((b, a), score);
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Scorer for SubstitutionTable {
    fn score(&self, a: Symbol, b: Symbol) -> i32 {
        match (a, b) {
            (Symbol::Residue(x), Symbol::Residue(y)) => self
                .pairs
                .get(&(x, y))
                .copied()
                .unwrap_or_else(|| self.fallback.score(a, b)),
            _ => self.fallback.gap_score,
        }
    }

    fn gap_penalty(&self) -> i32 {
        self.fallback.gap_score
    }
}

/// A cell coordinate: `i` is the row (prefix length of `seq2`), `j` the
/// column (prefix length of `seq1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

impl AlignmentStats {
    pub fn columns(&self) -> usize {
        self.matches + self.mismatches + self.gaps
    }

    /// Fraction of alignment columns that are identical; 0.0 when empty.
    pub fn identity(&self) -> f64 {
        match self.columns() {
            0 => 0.0,
            n => self.matches as f64 / n as f64,
        }
    }
}
