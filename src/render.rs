//! Text rendering of the DP matrices, for diagnostics only.
//!
//! The header row lists `seq1` and the label column lists `seq2`, both
//! preceded by `-` for the empty prefix. Cells are right-aligned to width 3.

use log::Level;

use crate::alignment_mode::AlignmentMode;
use crate::matrix::{DpMatrices, Grid};

/// Hook notified once the matrices of an alignment are complete, before
/// traceback starts. Observers see the matrices read-only.
pub trait MatrixObserver: Send + Sync {
    fn matrices_built(&self, seq1: &[char], seq2: &[char], matrices: &DpMatrices, mode: AlignmentMode);
}

/// Writes both renderings to the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct LogMatrixObserver {
    level: Level,
}

impl Default for LogMatrixObserver {
    fn default() -> Self {
        Self { level: Level::Debug }
    }
}

impl LogMatrixObserver {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl MatrixObserver for LogMatrixObserver {
    fn matrices_built(&self, seq1: &[char], seq2: &[char], matrices: &DpMatrices, mode: AlignmentMode) {
        if !log::log_enabled!(self.level) {
            return;
        }
        log::log!(
            self.level,
            "{} score matrix:\n{}",
            mode,
            render_scores(seq1, seq2, &matrices.scores)
        );
        log::log!(
            self.level,
            "{} traceback matrix:\n{}",
            mode,
            render_traceback(seq1, seq2, matrices)
        );
    }
}

pub fn render_scores(seq1: &[char], seq2: &[char], scores: &Grid<i32>) -> String {
    render_grid(seq1, seq2, scores, |value| value.to_string())
}

pub fn render_traceback(seq1: &[char], seq2: &[char], matrices: &DpMatrices) -> String {
    render_grid(seq1, seq2, &matrices.traceback, |direction| {
        direction.symbol().to_string()
    })
}

fn render_grid<T: Copy>(
    seq1: &[char],
    seq2: &[char],
    grid: &Grid<T>,
    cell: impl Fn(T) -> String,
) -> String {
    let mut out = String::new();

    out.push(' ');
    for label in std::iter::once('-').chain(seq1.iter().copied()) {
        out.push_str(&format!(" {:>3}", label));
    }
    out.push('\n');

    let labels = std::iter::once('-').chain(seq2.iter().copied());
    for (i, label) in labels.enumerate().take(grid.rows()) {
        out.push(label);
        for &value in grid.row(i) {
            out.push_str(&format!(" {:>3}", cell(value)));
        }
        out.push('\n');
    }
    out
}
