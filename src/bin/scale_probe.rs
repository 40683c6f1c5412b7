use std::env;
use std::time::Instant;

use scs_dp::utils::is_subsequence_by;
use scs_dp::{ScsEngineBuilder, SolveStats, StructuralEq};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("SCS-DP Scaling Probe: state-space growth and safety valve");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Each scenario merges several orderings and checks that:");
    eprintln!("  • every input embeds in the result");
    eprintln!("  • max(|seq|) <= |scs| <= sum(|seq|)");
    eprintln!("  • two-sequence results match |a| + |b| - LCS(a, b)");
    eprintln!("Memo bound: {} entries", options.max_memo_entries);
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Rotated pairs...");
    measurements.extend(run_rotated_pairs(&options, &mut sys));
    eprintln!();

    eprintln!("[2/3] Mostly agreeing variants...");
    measurements.extend(run_agreeing_variants(&options, &mut sys));
    eprintln!();

    eprintln!("[3/3] Divergent permutations (expected to trip the memo bound)...");
    measurements.extend(run_divergent(&options, &mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    max_memo_entries: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut max_memo_entries = scs_dp::utils::DEFAULT_MAX_MEMO_ENTRIES;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--max-memo=") {
                max_memo_entries = parse_cap(value)?;
            } else if arg == "--max-memo" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-memo".to_string())?
                    .into();
                max_memo_entries = parse_cap(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            max_memo_entries,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --max-memo <N>                Memo bound before falling back (default: {})
  -h, --help                    Print this help message

Examples:
  cargo run --bin scale_probe
  cargo run --bin scale_probe -- --format table --max-memo 100000
",
            scs_dp::utils::DEFAULT_MAX_MEMO_ENTRIES
        );
    }
}

fn parse_cap(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) | Err(_) => Err("memo bound must be a positive integer".to_string()),
        Ok(n) => Ok(n),
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    scs_len: usize,
    stats: SolveStats,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn run_rotated_pairs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const LENGTHS: &[usize] = &[16, 64, 256, 512];
    LENGTHS
        .iter()
        .map(|&len| {
            let a: Vec<u32> = (0..len as u32).collect();
            let mut b = a.clone();
            b.rotate_left(len / 3);
            let seqs = vec![a, b];
            let m = measure("rotated_pair", format!("k=2 len={len}"), sys, options, &seqs);
            report(&m);
            m
        })
        .collect()
}

fn run_agreeing_variants(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SHAPES: &[(usize, usize)] = &[(3, 16), (3, 32), (4, 16), (5, 12)];
    SHAPES
        .iter()
        .map(|&(k, len)| {
            let seqs: Vec<Vec<u32>> = (0..k)
                .map(|v| {
                    let mut s: Vec<u32> = (0..len as u32).collect();
                    let at = (v * 5 + 1) % (len - 1);
                    s.swap(at, at + 1);
                    s
                })
                .collect();
            let m = measure("agreeing_variants", format!("k={k} len={len}"), sys, options, &seqs);
            report(&m);
            m
        })
        .collect()
}

fn run_divergent(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const COUNTS: &[u32] = &[3, 5, 7, 10];
    COUNTS
        .iter()
        .map(|&k| {
            let seqs: Vec<Vec<u32>> = (1..=k)
                .map(|m| (1..=10u32).map(|j| (j * m) % 11).collect())
                .collect();
            let m = measure("divergent_permutations", format!("k={k} len=10"), sys, options, &seqs);
            report(&m);
            m
        })
        .collect()
}

fn report(m: &Measurement) {
    let status_icon = match m.verification_status {
        VerificationStatus::Passed => "✓",
        VerificationStatus::Failed => "✗",
    };
    eprintln!(
        "      {} {}: scs_len={}, memo={}, exact={}, time={:.3}s",
        status_icon,
        m.size_desc,
        m.scs_len,
        m.stats.memo_entries,
        m.stats.is_exact(),
        m.wall_s
    );
}

fn print_summary(measurements: &[Measurement]) {
    let failed = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .count();
    let fell_back = measurements.iter().filter(|m| m.stats.fell_back).count();
    eprintln!("{}", "=".repeat(80));
    eprintln!(
        "{} run(s), {} failed, {} used the concatenation fallback",
        measurements.len(),
        failed,
        fell_back
    );
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    options: &Options,
    seqs: &[Vec<u32>],
) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let engine = ScsEngineBuilder::new(seqs)
        .with_max_memo_entries(options.max_memo_entries)
        .build();
    let (scs, stats) = engine.run();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    let (status, detail) = verify(seqs, &scs, &stats);
    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        scs_len: scs.len(),
        stats,
        verification_status: status,
        verification_detail: detail,
    }
}

fn verify(seqs: &[Vec<u32>], scs: &[u32], stats: &SolveStats) -> (VerificationStatus, Option<String>) {
    if let Some(idx) = seqs
        .iter()
        .position(|s| !is_subsequence_by(s, scs, &StructuralEq))
    {
        return (
            VerificationStatus::Failed,
            Some(format!("sequence {idx} does not embed")),
        );
    }
    let max = seqs.iter().map(Vec::len).max().unwrap_or(0);
    let sum: usize = seqs.iter().map(Vec::len).sum();
    if scs.len() < max || scs.len() > sum {
        return (
            VerificationStatus::Failed,
            Some(format!("length {} outside [{max}, {sum}]", scs.len())),
        );
    }
    if let ([a, b], true) = (seqs, stats.is_exact()) {
        let expected = a.len() + b.len() - full_lcs_len(a, b);
        if expected != scs.len() {
            return (
                VerificationStatus::Failed,
                Some(format!("expected {expected}, got {}", scs.len())),
            );
        }
    }
    (VerificationStatus::Passed, None)
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,scs_len,memo_entries,exact,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},{},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.scs_len,
            m.stats.memo_entries,
            m.stats.is_exact(),
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>10}  {:>14}  {:>8}  {:>10}  {:>6}  {:>8}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "scs_len", "memo", "exact", "status",
    );
    println!("{:-<width$}", "", width = col1 + col2 + 80);
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>10.3}  {:>14}  {:>8}  {:>10}  {:>6}  {:>8}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.scs_len,
            m.stats.memo_entries,
            m.stats.is_exact(),
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"scs_len\":{},\"memo_entries\":{},\"exact\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.scs_len,
            m.stats.memo_entries,
            m.stats.is_exact(),
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

fn full_lcs_len(s: &[u32], t: &[u32]) -> usize {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            let up = dp[i - 1][j];
            let left = dp[i][j - 1];
            let diag = dp[i - 1][j - 1] + usize::from(s[i - 1] == t[j - 1]);
            dp[i][j] = up.max(left).max(diag);
        }
    }
    dp[n][m]
}
