use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use scs_dp::ScsEngine;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// `count` variants of `0..len`, each with a few random adjacent swaps.
fn variant_orders(rng: &mut StdRng, count: usize, len: usize, swaps: usize) -> Vec<Vec<u32>> {
    (0..count)
        .map(|_| {
            let mut v: Vec<u32> = (0..len as u32).collect();
            for _ in 0..swaps {
                let idx = rng.gen_range(0..len - 1);
                v.swap(idx, idx + 1);
            }
            v
        })
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_scs_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("scs_variant_orders");
    for &(count, len) in &[(2usize, 32usize), (3, 16), (4, 12), (5, 8)] {
        group.bench_function(format!("seqs_{count}_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    variant_orders(&mut rng, count, len, 3)
                },
                |seqs| {
                    let before = rss_kib();
                    let (scs, stats) = ScsEngine::new(&seqs).run();
                    let after = rss_kib();
                    criterion::black_box(scs);
                    eprintln!(
                        "RSS KiB delta (seqs {count}, len {len}): {} memo={} exact={}",
                        after.saturating_sub(before),
                        stats.memo_entries,
                        stats.is_exact()
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scs_perf);
criterion_main!(benches);
