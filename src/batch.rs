use log::debug;
use rayon::prelude::*;

use crate::scoring::Scorer;
use crate::{AlignerError, Aligner, AlignmentResult, Sequence};

/// Aligns every pair on the rayon thread pool. Results keep the input
/// order; the first failing pair aborts the batch with its error.
pub fn align_parallel<S: Scorer + Sync>(
    aligner: &Aligner<S>,
    pairs: &[(Sequence, Sequence)],
) -> Result<Vec<AlignmentResult>, AlignerError> {
    debug!(
        "aligning {} pairs on {} threads",
        pairs.len(),
        rayon::current_num_threads()
    );

    pairs
        .par_iter()
        .map(|(seq1, seq2)| aligner.align(seq1, seq2))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlignerConfig, AlignmentMode};

    fn pairs(raw: &[(&str, &str)]) -> Vec<(Sequence, Sequence)> {
        raw.iter()
            .map(|&(a, b)| (Sequence::from(a), Sequence::from(b)))
            .collect()
    }

    #[test]
    fn test_matches_sequential() {
        let input = pairs(&[
            ("GATTACA", "GCATGCU"),
            ("ACGTACGT", "ACGTTACGT"),
            ("", "ACGT"),
            ("TTACGTAA", "GGACGTCC"),
        ]);
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            let aligner = Aligner::default().with_alignment_mode(mode);
            let parallel = align_parallel(&aligner, &input).unwrap();
            let sequential: Vec<_> = input
                .iter()
                .map(|(a, b)| aligner.align(a, b).unwrap())
                .collect();
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(align_parallel(&Aligner::default(), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_error_propagates() {
        let aligner = Aligner::new(AlignerConfig::new().with_max_cells(10).unwrap());
        let input = pairs(&[("A", "A"), ("ACGTACGT", "ACGTACGT")]);
        assert!(matches!(
            align_parallel(&aligner, &input),
            Err(AlignerError::SequenceTooLarge { .. })
        ));
    }
}
