//! Dynamic-programming matrices for pairwise alignment.
//!
//! Both matrices have `len(seq2) + 1` rows and `len(seq1) + 1` columns.
//! Row 0 and column 0 stand for alignment against an empty prefix.

use crate::alignment_mode::AlignmentMode;
use crate::scoring::{Position, Scorer, Symbol};
use crate::AlignerError;

/// Predecessor that produced the optimal value of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Diagonal,
    Up,
    Left,
    /// Traceback stops here.
    #[default]
    None,
}

impl Direction {
    pub fn symbol(&self) -> char {
        match self {
            Direction::Diagonal => 'D',
            Direction::Up => 'U',
            Direction::Left => 'L',
            Direction::None => '0',
        }
    }
}

/// Fixed-size 2D grid in contiguous row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Grid<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    pub fn at(&self, pos: Position) -> T {
        self.get(pos.i, pos.j)
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Ord> Grid<T> {
    /// First cell in row-major order holding the maximum value.
    pub fn first_max(&self) -> Option<(Position, T)> {
        let (&first, rest) = self.data.split_first()?;
        let mut best = (0, first);
        for (offset, &value) in rest.iter().enumerate() {
            if value > best.1 {
                best = (offset + 1, value);
            }
        }
        Some((Position::new(best.0 / self.cols, best.0 % self.cols), best.1))
    }
}

/// Score and traceback matrices of one alignment call.
#[derive(Debug, Clone)]
pub struct DpMatrices {
    pub scores: Grid<i32>,
    pub traceback: Grid<Direction>,
}

impl DpMatrices {
    pub fn rows(&self) -> usize {
        self.scores.rows()
    }

    pub fn cols(&self) -> usize {
        self.scores.cols()
    }
}

/// Fills the score and traceback matrices for `mode`.
///
/// `seq1` runs along the columns and `seq2` down the rows. When several
/// predecessors reach the same optimum the diagonal wins, then left, then
/// up. In local mode every cell is floored at zero and a zero cell is a
/// traceback stop regardless of which candidate produced it.
///
/// Fails with `InvalidConfig` if any cell score leaves the `i32` range;
/// the partial matrices are dropped.
pub fn build_matrices<S: Scorer + ?Sized>(
    seq1: &[char],
    seq2: &[char],
    scorer: &S,
    gap_penalty: i32,
    mode: AlignmentMode,
) -> Result<DpMatrices, AlignerError> {
    let rows = seq2.len() + 1;
    let cols = seq1.len() + 1;
    let mut scores = Grid::filled(rows, cols, 0i32);
    let mut traceback = Grid::filled(rows, cols, Direction::None);

    if mode == AlignmentMode::Global {
        for j in 1..cols {
            scores.set(0, j, border_score(j, gap_penalty)?);
            traceback.set(0, j, Direction::Left);
        }
        for i in 1..rows {
            scores.set(i, 0, border_score(i, gap_penalty)?);
            traceback.set(i, 0, Direction::Up);
        }
    }

    for i in 1..rows {
        let a = Symbol::Residue(seq2[i - 1]);
        for j in 1..cols {
            let substitution = scorer.score(a, Symbol::Residue(seq1[j - 1]));
            let diag = cell_sum(scores.get(i - 1, j - 1), substitution, i, j)?;
            let left = cell_sum(scores.get(i, j - 1), gap_penalty, i, j)?;
            let up = cell_sum(scores.get(i - 1, j), gap_penalty, i, j)?;

            let (mut value, mut direction) = best_predecessor(diag, left, up);
            if mode.is_local() && value <= 0 {
                value = 0;
                direction = Direction::None;
            }

            scores.set(i, j, value);
            traceback.set(i, j, direction);
        }
    }

    Ok(DpMatrices { scores, traceback })
}

fn border_score(steps: usize, gap_penalty: i32) -> Result<i32, AlignerError> {
    i32::try_from(steps)
        .ok()
        .and_then(|steps| steps.checked_mul(gap_penalty))
        .ok_or_else(|| {
            AlignerError::InvalidConfig(format!(
                "gap penalty {} over {} symbols overflows the score range",
                gap_penalty, steps
            ))
        })
}

fn cell_sum(score: i32, delta: i32, i: usize, j: usize) -> Result<i32, AlignerError> {
    score.checked_add(delta).ok_or_else(|| {
        AlignerError::InvalidConfig(format!(
            "score at ({}, {}) overflows the score range: {} + {}",
            i, j, score, delta
        ))
    })
}

fn best_predecessor(diag: i32, left: i32, up: i32) -> (i32, Direction) {
    let mut best = (diag, Direction::Diagonal);
    if left > best.0 {
        best = (left, Direction::Left);
    }
    if up > best.0 {
        best = (up, Direction::Up);
    }
    best
}

/// Cell the traceback starts from: bottom-right for global, the first
/// maximum in row-major order for local.
pub fn locate_start(matrices: &DpMatrices, mode: AlignmentMode) -> Position {
    match mode {
        AlignmentMode::Global => Position::new(matrices.rows() - 1, matrices.cols() - 1),
        AlignmentMode::Local => matrices
            .scores
            .first_max()
            .map(|(pos, _)| pos)
            .unwrap_or_default(),
    }
}
