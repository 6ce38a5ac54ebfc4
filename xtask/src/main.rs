use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "chunk-deque workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark ChunkDeque against VecDeque under each global allocator
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Where the markdown report is written
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,
    },
}

const ALLOCATORS: &[&str] = &["alloc-system", "alloc-mimalloc", "alloc-jemalloc"];

/// Benchmark function names emitted by `benches/workloads`.
const CANDIDATE: &str = "chunk_deque";
const REFERENCE: &str = "vec_deque";

/// Criterion writes these next to the named baselines.
const SKIPPED_DIRS: &[&str] = &["report", "new", "base", "change"];

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct BenchmarkMeta {
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
}

/// Ops/s keyed by workload, then allocator, then implementation.
type Results = BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            output,
        } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report(&output)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running comparative benchmarks...");

    // Build first to avoid measuring build time
    let status = Command::new("cargo")
        .args(["build", "--bench", "suite", "--release"])
        .status()
        .context("failed to spawn cargo")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for alloc in ALLOCATORS {
        println!("\n>>> Benchmarking with feature: {alloc}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0")
            .args(["bench", "--bench", "suite", "--no-default-features", "--features"])
            .arg(alloc)
            .arg("--")
            .arg("--save-baseline")
            .arg(baseline_name(alloc));

        if quick {
            cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench for {alloc}"))?;

        if status.success() {
            println!("Finished {alloc} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark failed for {alloc}");
        }
    }

    Ok(())
}

fn baseline_name(alloc: &str) -> &str {
    alloc.trim_start_matches("alloc-")
}

fn generate_report(report_path: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# ChunkDeque vs VecDeque")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for alloc in ALLOCATORS {
        let name = baseline_name(alloc);
        write!(file, " {name}: {CANDIDATE} (Ops/s) | {name}: vs {REFERENCE} |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in ALLOCATORS {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for (workload, by_alloc) in &results {
        write!(file, "| {workload} |")?;
        for alloc in ALLOCATORS {
            let measured = by_alloc.get(baseline_name(alloc));
            let candidate = measured.and_then(|m| m.get(CANDIDATE)).copied();
            let reference = measured.and_then(|m| m.get(REFERENCE)).copied();
            match (candidate, reference) {
                (Some(ops), Some(base)) if base > 0.0 => {
                    write!(file, " {} | **{:.2}x** |", format_ops(ops), ops / base)?;
                }
                (Some(ops), _) => write!(file, " {} | - |", format_ops(ops))?,
                (None, _) => write!(file, " N/A | - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `target/criterion/<group>/<function>/<param>/<baseline>/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut Results) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let components: Vec<String> = path
            .strip_prefix(root)?
            .iter()
            .filter_map(|c| c.to_str().map(str::to_owned))
            .collect();
        let [group, function, param, baseline, _file] = components.as_slice() else {
            continue;
        };
        if [group, function, param, baseline]
            .iter()
            .any(|c| SKIPPED_DIRS.contains(&c.as_str()))
        {
            continue;
        }

        let baseline_dir = path.parent().context("estimates.json without parent")?;
        let Some(ops) = ops_per_second(baseline_dir)? else {
            continue;
        };

        results
            .entry(format!("{group}/{param}"))
            .or_default()
            .entry(baseline.clone())
            .or_default()
            .insert(function.clone(), ops);
    }

    Ok(())
}

fn ops_per_second(baseline_dir: &Path) -> Result<Option<f64>> {
    let estimates: Estimates = read_json(&baseline_dir.join("estimates.json"))?;
    let time_ns = estimates.mean.point_estimate;
    if time_ns <= 0.0 {
        return Ok(None);
    }

    let elements = read_json::<BenchmarkMeta>(&baseline_dir.join("benchmark.json"))
        .ok()
        .and_then(|meta| meta.throughput)
        .map_or(1.0, |t| match t {
            Throughput::Elements(n) | Throughput::Bytes(n) => n as f64,
        });

    Ok(Some(elements * 1e9 / time_ns))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("malformed {}", path.display()))
}
