use std::collections::HashSet;

use blake3::hash;
use cutscan::genomics::{create_rng, random_sequence, render_summary, write_fasta};
use cutscan::{AnalysisConfig, CutSiteAnalysis};

#[test]
fn seeded_generation_is_deterministic() {
    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let sequence = random_sequence(&mut create_rng(Some(99)), 20_000);
        let mut fasta = Vec::new();
        write_fasta(&mut fasta, "Random DNA Sequence", &sequence, 80)
            .expect("FASTA writing succeeds");
        fingerprints.insert(hash(&fasta));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}

#[test]
fn parallel_summary_is_deterministic() {
    let sequence = random_sequence(&mut create_rng(Some(5)), 200_000);
    let config = AnalysisConfig {
        parallel: true,
        ..AnalysisConfig::with_window(500, 5_000).unwrap()
    };

    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let summary = CutSiteAnalysis::new(config.clone())
            .run(&sequence, "GA|TC")
            .expect("analysis succeeds");
        let report = render_summary(&summary).expect("rendering succeeds");
        fingerprints.insert(hash(report.as_bytes()));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}
