use std::fmt;
use std::ops::Range;

use crate::alignment_mode::AlignmentMode;
use crate::matrix::{Direction, DpMatrices};
use crate::scoring::{AlignmentStats, Position};
use crate::AlignerError;

/// One alignment column, with `seq1` read as the reference and `seq2` as
/// the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Symbol present only in `seq2`.
    Insertion,
    /// Symbol present only in `seq1`.
    Deletion,
}

impl TracebackOperation {
    /// Extended CIGAR code.
    pub fn code(&self) -> char {
        match self {
            TracebackOperation::Match => '=',
            TracebackOperation::Mismatch => 'X',
            TracebackOperation::Insertion => 'I',
            TracebackOperation::Deletion => 'D',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: i32,
    pub aligned_seq1: String,
    pub aligned_seq2: String,
    pub operations: Vec<TracebackOperation>,
    pub mode: AlignmentMode,
    /// Cell where the traceback stopped (top-left corner of the region).
    pub start_position: Position,
    /// Cell the traceback started from.
    pub end_position: Position,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Symbol range of `seq1` covered by the alignment.
    pub fn seq1_range(&self) -> Range<usize> {
        self.start_position.j..self.end_position.j
    }

    /// Symbol range of `seq2` covered by the alignment.
    pub fn seq2_range(&self) -> Range<usize> {
        self.start_position.i..self.end_position.i
    }

    pub fn statistics(&self) -> AlignmentStats {
        self.operations
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    TracebackOperation::Match => acc.matches += 1,
                    TracebackOperation::Mismatch => acc.mismatches += 1,
                    TracebackOperation::Insertion | TracebackOperation::Deletion => acc.gaps += 1,
                }
                acc
            })
    }

    /// Run-length encoded operations, e.g. `3=1X2I`.
    pub fn cigar(&self) -> String {
        let mut cigar = String::new();
        let mut ops = self.operations.iter().peekable();
        while let Some(&op) = ops.next() {
            let mut run = 1;
            while ops.next_if(|&&next| next == op).is_some() {
                run += 1;
            }
            cigar.push_str(&run.to_string());
            cigar.push(op.code());
        }
        cigar
    }
}

impl fmt::Display for AlignmentResult {
    /// Three-line view: `seq1`, a marker line (`|` match, `.` mismatch,
    /// blank for gaps) and `seq2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers: String = self
            .operations
            .iter()
            .map(|op| match op {
                TracebackOperation::Match => '|',
                TracebackOperation::Mismatch => '.',
                _ => ' ',
            })
            .collect();
        writeln!(f, "score: {} ({})", self.score, self.mode)?;
        writeln!(f, "{}", self.aligned_seq1)?;
        writeln!(f, "{}", markers)?;
        write!(f, "{}", self.aligned_seq2)
    }
}

/// Walks the traceback matrix back from `start`, producing the aligned
/// pair in forward order.
///
/// Global walks stop at the first `None` cell, which is only (0, 0).
/// Local walks also stop as soon as either index reaches 0.
pub fn reconstruct_alignment(
    matrices: &DpMatrices,
    seq1: &[char],
    seq2: &[char],
    start: Position,
    mode: AlignmentMode,
    gap_char: char,
) -> Result<AlignmentResult, AlignerError> {
    if matrices.rows() != seq2.len() + 1 || matrices.cols() != seq1.len() + 1 {
        return Err(AlignerError::TracebackError(format!(
            "{}x{} matrix does not fit sequences of length {} and {}",
            matrices.rows(),
            matrices.cols(),
            seq1.len(),
            seq2.len()
        )));
    }
    if start.i >= matrices.rows() || start.j >= matrices.cols() {
        return Err(AlignerError::TracebackError(format!(
            "start cell ({}, {}) lies outside the matrix",
            start.i, start.j
        )));
    }

    let mut aligned_seq1 = Vec::new();
    let mut aligned_seq2 = Vec::new();
    let mut operations = Vec::new();
    let mut current = start;

    loop {
        if mode.is_local() && (current.i == 0 || current.j == 0) {
            break;
        }
        let direction = matrices.traceback.at(current);
        match direction {
            Direction::None => break,
            Direction::Diagonal if current.i > 0 && current.j > 0 => {
                let a = seq1[current.j - 1];
                let b = seq2[current.i - 1];
                aligned_seq1.push(a);
                aligned_seq2.push(b);
                operations.push(if a == b {
                    TracebackOperation::Match
                } else {
                    TracebackOperation::Mismatch
                });
                current.i -= 1;
                current.j -= 1;
            }
            Direction::Up if current.i > 0 => {
                aligned_seq1.push(gap_char);
                aligned_seq2.push(seq2[current.i - 1]);
                operations.push(TracebackOperation::Insertion);
                current.i -= 1;
            }
            Direction::Left if current.j > 0 => {
                aligned_seq1.push(seq1[current.j - 1]);
                aligned_seq2.push(gap_char);
                operations.push(TracebackOperation::Deletion);
                current.j -= 1;
            }
            _ => {
                return Err(AlignerError::TracebackError(format!(
                    "{:?} step leaves the matrix at ({}, {})",
                    direction, current.i, current.j
                )))
            }
        }
    }

    // Built backwards
    operations.reverse();

    Ok(AlignmentResult {
        score: matrices.scores.at(start),
        aligned_seq1: aligned_seq1.into_iter().rev().collect(),
        aligned_seq2: aligned_seq2.into_iter().rev().collect(),
        operations,
        mode,
        start_position: current,
        end_position: start,
    })
}
