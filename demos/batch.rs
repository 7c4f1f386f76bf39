use pairwise_aligner::{align_parallel, Aligner, AlignmentMode, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let aligner = Aligner::default().with_alignment_mode(AlignmentMode::Local);

    let pairs = vec![
        (Sequence::new("ACGTACGT"), Sequence::new("ACGTAGCT")),
        (Sequence::new("GGTTAACC"), Sequence::new("GGTTAACT")),
        (Sequence::new("ACACACTA"), Sequence::new("AGCACACA")),
    ];

    let results = align_parallel(&aligner, &pairs)?;

    for (i, result) in results.iter().enumerate() {
        println!("Alignment {}: Score = {}", i, result.score);
        println!("Sequence 1: {}", result.aligned_seq1);
        println!("Sequence 2: {}", result.aligned_seq2);
        println!();
    }

    Ok(())
}
