use pairwise_aligner::{
    Aligner,
    AlignerConfig,
    AlignmentMode,
    LogMatrixObserver,
    ScoreParams,
    Sequence,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug prints both DP matrices
    env_logger::init();

    let seq1 = Sequence::new("GATTACA");
    let seq2 = Sequence::new("GCATGCU");

    for mode in [AlignmentMode::Global, AlignmentMode::Local] {
        let aligner = Aligner::new(AlignerConfig::default())
            .with_scorer(ScoreParams::default())
            .with_alignment_mode(mode)
            .with_observer(LogMatrixObserver::default());

        let result = aligner.align(&seq1, &seq2)?;

        println!("{}", result);
        println!("CIGAR: {}", result.cigar());
        println!("Identity: {:.1}%", result.statistics().identity() * 100.0);
        println!();
    }

    Ok(())
}
