//! Pairwise sequence alignment with Needleman-Wunsch (global) and
//! Smith-Waterman (local) dynamic programming and linear gap penalties.
//!
//! ```
//! use pairwise_aligner::{align, ScoreParams};
//!
//! let result = align("GATTACA", "GCATGCU", "global", &ScoreParams::default())?;
//! assert_eq!(result.score, 2);
//! assert_eq!(result.aligned_seq1, "GATTACA");
//! # Ok::<(), pairwise_aligner::AlignerError>(())
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};
use thiserror::Error;

pub mod alignment_mode;
pub mod batch;
pub mod config;
pub mod matrix;
pub mod render;
pub mod scoring;
pub mod traceback;

pub use crate::alignment_mode::AlignmentMode;
pub use crate::batch::align_parallel;
pub use crate::config::AlignerConfig;
pub use crate::matrix::{build_matrices, locate_start, Direction, DpMatrices, Grid};
pub use crate::render::{LogMatrixObserver, MatrixObserver};
pub use crate::scoring::{AlignmentStats, Position, ScoreParams, Scorer, SubstitutionTable, Symbol};
pub use crate::traceback::{reconstruct_alignment, AlignmentResult, TracebackOperation};

// Default scoring parameters
pub const DEFAULT_MATCH: i32 = 2;
pub const DEFAULT_MISMATCH: i32 = -1;
pub const DEFAULT_GAP: i32 = -4;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("Invalid alignment strategy: {0:?} (expected \"global\" or \"local\")")]
    InvalidStrategy(String),
    #[error("Input is not a symbol sequence: {0}")]
    TypeMismatch(String),
    #[error("Sequences too large: {rows}x{cols} matrix exceeds the {limit} cell limit")]
    SequenceTooLarge { rows: usize, cols: usize, limit: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Traceback error: {0}")]
    TracebackError(String),
}

/// An immutable sequence of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence {
    symbols: Vec<char>,
}

impl Sequence {
    pub fn new(text: &str) -> Self {
        Self {
            symbols: text.chars().collect(),
        }
    }

    /// Decodes raw bytes as UTF-8 text; anything else is rejected rather
    /// than coerced.
    pub fn from_bytes(data: &[u8]) -> Result<Self, AlignerError> {
        std::str::from_utf8(data)
            .map(Self::new)
            .map_err(|e| AlignerError::TypeMismatch(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Sequence {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Alignment engine. Holds configuration only, so one aligner can serve
/// any number of calls, including concurrent ones.
#[derive(Clone)]
pub struct Aligner<S = ScoreParams> {
    config: AlignerConfig,
    scorer: S,
    mode: AlignmentMode,
    observer: Option<Arc<dyn MatrixObserver>>,
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new(AlignerConfig::default())
    }
}

impl Aligner {
    pub fn new(config: AlignerConfig) -> Self {
        Self {
            config,
            scorer: ScoreParams::default(),
            mode: AlignmentMode::default(),
            observer: None,
        }
    }
}

impl<S: Scorer> Aligner<S> {
    pub fn with_alignment_mode(mut self, mode: AlignmentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_scorer<T: Scorer>(self, scorer: T) -> Aligner<T> {
        Aligner {
            config: self.config,
            scorer,
            mode: self.mode,
            observer: self.observer,
        }
    }

    /// Registers a hook that sees the finished matrices of every call.
    pub fn with_observer<O: MatrixObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn align(&self, seq1: &Sequence, seq2: &Sequence) -> Result<AlignmentResult, AlignerError> {
        let start_time = Instant::now();
        self.config.check_dimensions(seq2.len() + 1, seq1.len() + 1)?;

        debug!(
            "{} alignment of {} x {} symbols",
            self.mode,
            seq1.len(),
            seq2.len()
        );

        let matrices = build_matrices(
            seq1.as_slice(),
            seq2.as_slice(),
            &self.scorer,
            self.scorer.gap_penalty(),
            self.mode,
        )?;

        if let Some(observer) = &self.observer {
            observer.matrices_built(seq1.as_slice(), seq2.as_slice(), &matrices, self.mode);
        }

        let start = locate_start(&matrices, self.mode);
        trace!("traceback starts at ({}, {})", start.i, start.j);

        let result = reconstruct_alignment(
            &matrices,
            seq1.as_slice(),
            seq2.as_slice(),
            start,
            self.mode,
            self.config.gap_char,
        )?;

        debug!(
            "score {} over {} columns in {:?}",
            result.score,
            result.len(),
            start_time.elapsed()
        );
        Ok(result)
    }

    pub fn align_str(&self, seq1: &str, seq2: &str) -> Result<AlignmentResult, AlignerError> {
        self.align(&Sequence::new(seq1), &Sequence::new(seq2))
    }
}

impl<S: fmt::Debug> fmt::Debug for Aligner<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aligner")
            .field("config", &self.config)
            .field("scorer", &self.scorer)
            .field("mode", &self.mode)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Aligns `seq1` against `seq2` with the strategy named by `strategy`
/// (`"global"` or `"local"`).
pub fn align(
    seq1: &str,
    seq2: &str,
    strategy: &str,
    params: &ScoreParams,
) -> Result<AlignmentResult, AlignerError> {
    let mode: AlignmentMode = strategy.parse()?;
    Aligner::default()
        .with_scorer(*params)
        .with_alignment_mode(mode)
        .align_str(seq1, seq2)
}
