use pairwise_aligner::{align, AlignmentResult, ScoreParams, TracebackOperation};
use proptest::prelude::*;
use std::ops::Range;

fn ungapped(aligned: &str) -> String {
    aligned.chars().filter(|&c| c != '-').collect()
}

fn char_slice(s: &str, range: Range<usize>) -> String {
    s.chars().skip(range.start).take(range.len()).collect()
}

/// Sum of per-column scores of an alignment under flat scoring.
fn column_score(result: &AlignmentResult, params: &ScoreParams) -> i32 {
    result
        .aligned_seq1
        .chars()
        .zip(result.aligned_seq2.chars())
        .map(|(a, b)| {
            if a == '-' || b == '-' {
                params.gap_score
            } else if a == b {
                params.match_score
            } else {
                params.mismatch_score
            }
        })
        .sum()
}

proptest! {
    #[test]
    fn test_global_score_is_symmetric(
        a in "[ACGT]{0,30}",
        b in "[ACGT]{0,30}"
    ) {
        let params = ScoreParams::default();
        let forward = align(&a, &b, "global", &params).unwrap();
        let reverse = align(&b, &a, "global", &params).unwrap();
        prop_assert_eq!(forward.score, reverse.score);
    }

    #[test]
    fn test_global_alignment_mirrors_under_swap(
        pairs in prop::collection::vec(("[ACGT]", "[ACGT]"), 0..30)
    ) {
        // equal lengths and a gap cost far above any mismatch keep the
        // optimum on the main diagonal, so no left/up tie can arise
        let a: String = pairs.iter().map(|(x, _)| x.as_str()).collect();
        let b: String = pairs.iter().map(|(_, y)| y.as_str()).collect();
        let params = ScoreParams::new(2, -1, -100);
        let forward = align(&a, &b, "global", &params).unwrap();
        let reverse = align(&b, &a, "global", &params).unwrap();
        prop_assert_eq!(forward.score, reverse.score);
        prop_assert_eq!(&forward.aligned_seq1, &reverse.aligned_seq2);
        prop_assert_eq!(&forward.aligned_seq2, &reverse.aligned_seq1);
        prop_assert_eq!(&forward.aligned_seq1, &a);
        prop_assert_eq!(&forward.aligned_seq2, &b);
    }

    #[test]
    fn test_self_alignment_is_all_matches(a in "[ACGT]{0,40}") {
        let params = ScoreParams::default();
        let result = align(&a, &a, "global", &params).unwrap();
        prop_assert_eq!(result.score, a.len() as i32 * params.match_score);
        prop_assert_eq!(&result.aligned_seq1, &a);
        prop_assert_eq!(&result.aligned_seq2, &a);
    }

    #[test]
    fn test_global_round_trip(
        a in "[ACGT]{0,30}",
        b in "[ACGT]{0,30}"
    ) {
        let params = ScoreParams::default();
        let result = align(&a, &b, "global", &params).unwrap();
        prop_assert_eq!(result.aligned_seq1.chars().count(), result.aligned_seq2.chars().count());
        prop_assert_eq!(ungapped(&result.aligned_seq1), a);
        prop_assert_eq!(ungapped(&result.aligned_seq2), b);
        prop_assert_eq!(column_score(&result, &params), result.score);
    }

    #[test]
    fn test_local_round_trip(
        a in "[ACGTαβ]{0,30}",
        b in "[ACGTαβ]{0,30}"
    ) {
        let params = ScoreParams::default();
        let result = align(&a, &b, "local", &params).unwrap();
        prop_assert!(result.score >= 0);
        prop_assert_eq!(result.aligned_seq1.chars().count(), result.aligned_seq2.chars().count());
        prop_assert_eq!(ungapped(&result.aligned_seq1), char_slice(&a, result.seq1_range()));
        prop_assert_eq!(ungapped(&result.aligned_seq2), char_slice(&b, result.seq2_range()));
        prop_assert_eq!(column_score(&result, &params), result.score);
    }

    #[test]
    fn test_local_has_no_flanking_gaps(
        a in "[ACGT]{1,30}",
        b in "[ACGT]{1,30}"
    ) {
        let result = align(&a, &b, "local", &ScoreParams::default()).unwrap();
        if let (Some(first), Some(last)) = (result.operations.first(), result.operations.last()) {
            prop_assert_eq!(*first, TracebackOperation::Match);
            prop_assert_eq!(*last, TracebackOperation::Match);
        } else {
            prop_assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn test_local_never_below_global(
        a in "[ACGT]{0,25}",
        b in "[ACGT]{0,25}"
    ) {
        let params = ScoreParams::default();
        let global = align(&a, &b, "global", &params).unwrap();
        let local = align(&a, &b, "local", &params).unwrap();
        prop_assert!(local.score >= global.score);
    }
}
