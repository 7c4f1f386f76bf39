use crate::AlignerError;

/// Upper bound on score-matrix cells for one alignment (2^28).
pub const DEFAULT_MAX_CELLS: usize = 1 << 28;
pub const DEFAULT_GAP_CHAR: char = '-';

#[derive(Debug, Clone)]
pub struct AlignerConfig {
    /// Character written into aligned output where one side has no symbol.
    pub gap_char: char,
    /// Largest `(len(seq1)+1) * (len(seq2)+1)` accepted before allocating.
    pub max_cells: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            gap_char: DEFAULT_GAP_CHAR,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl AlignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap_char(mut self, gap_char: char) -> Self {
        self.gap_char = gap_char;
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Result<Self, AlignerError> {
        if max_cells == 0 {
            return Err(AlignerError::InvalidConfig(
                "max_cells must be at least 1".to_string(),
            ));
        }
        self.max_cells = max_cells;
        Ok(self)
    }

    /// Fails when a `rows x cols` matrix would exceed `max_cells`.
    pub fn check_dimensions(&self, rows: usize, cols: usize) -> Result<(), AlignerError> {
        match rows.checked_mul(cols) {
            Some(cells) if cells <= self.max_cells => Ok(()),
            _ => Err(AlignerError::SequenceTooLarge {
                rows,
                cols,
                limit: self.max_cells,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AlignerConfig::default();
        assert_eq!(config.gap_char, '-');
        assert_eq!(config.max_cells, DEFAULT_MAX_CELLS);
    }

    #[test]
    fn test_zero_cell_limit_rejected() {
        assert!(matches!(
            AlignerConfig::new().with_max_cells(0),
            Err(AlignerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_check_dimensions() {
        let config = AlignerConfig::new().with_max_cells(20).unwrap();
        assert!(config.check_dimensions(4, 5).is_ok());
        assert!(matches!(
            config.check_dimensions(5, 5),
            Err(AlignerError::SequenceTooLarge { rows: 5, cols: 5, limit: 20 })
        ));
        assert!(config.check_dimensions(usize::MAX, 2).is_err());
    }
}
