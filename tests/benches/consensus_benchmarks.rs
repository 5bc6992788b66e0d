//! # Chain Inspector Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | ci-03 Consensus | `analyze` over N nodes × H heights |
//! | ci-04 Diagnostics | `scan_errors` over H heights |

use ci_03_consensus::{ConsensusAnalyzer, NodeInfo};
use ci_04_diagnostics::scan_errors;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_types::{Block, StaticChain, GENESIS_PREV_HASH};

fn linked(height: u64, fork_at: Option<u64>) -> StaticChain {
    let mut prev = GENESIS_PREV_HASH.to_string();
    StaticChain::from_blocks((0..=height).map(|h| {
        let data = match fork_at {
            Some(f) if h >= f => format!("fork tx {h}"),
            _ => format!("tx {h}"),
        };
        let block = Block::new(h, prev.clone(), data, h as i64 * 10);
        prev = block.hash.clone();
        block
    }))
}

fn bench_consensus_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("ci-03-consensus");

    for height in [100u64, 1_000, 10_000] {
        let chains: Vec<StaticChain> = (0..5)
            .map(|i| linked(height, (i == 4).then_some(height / 2)))
            .collect();
        let names: Vec<String> = (0..chains.len()).map(|i| format!("node{i}")).collect();
        let nodes: Vec<NodeInfo<'_>> = names
            .iter()
            .zip(&chains)
            .map(|(name, chain)| NodeInfo::from_source(name, chain))
            .collect();
        let analyzer = ConsensusAnalyzer::default();

        group.throughput(Throughput::Elements(height * nodes.len() as u64));
        group.bench_with_input(BenchmarkId::new("analyze_5_nodes", height), &nodes, |b, nodes| {
            b.iter(|| black_box(analyzer.analyze(nodes)))
        });
    }

    group.finish();
}

fn bench_error_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("ci-04-diagnostics");

    for height in [1_000u64, 10_000] {
        let chain = linked(height, None);
        group.throughput(Throughput::Elements(height));
        group.bench_with_input(BenchmarkId::new("scan_errors", height), &chain, |b, chain| {
            b.iter(|| black_box(scan_errors(chain, "bench")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_consensus_analysis, bench_error_scan);
criterion_main!(benches);
