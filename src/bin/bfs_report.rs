use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use parbfs::bfs::verify::{compare, sampled_compare};
use parbfs::graph::generators;
use parbfs::{sequential_bfs, BfsConfig, Distance, Graph, ParallelBfs, UNREACHED};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "bfs_report")]
#[command(about = "Correctness suites and sequential-vs-parallel timings", long_about = None)]
struct Cli {
    /// Edge length of the performance cube
    #[arg(long, default_value_t = 300)]
    size: usize,

    /// Timed runs per engine (averaged)
    #[arg(long, default_value_t = 5)]
    runs: u32,

    /// Worker threads for the parallel engine (0 = all cores)
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Number of random graphs in the equivalence suite
    #[arg(long, default_value_t = 1000)]
    random_graphs: usize,

    /// Seed for graph generation and sampling
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Vertices spot-checked on the performance cube
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Write the report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Only run the correctness suites
    #[arg(long, default_value_t = false)]
    skip_perf: bool,
}

#[derive(Debug, Default, Serialize)]
struct SuiteResult {
    name: &'static str,
    passed: usize,
    total: usize,
    failures: Vec<String>,
}

impl SuiteResult {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    fn record(&mut self, outcome: std::result::Result<(), String>) {
        self.total += 1;
        match outcome {
            Ok(()) => self.passed += 1,
            Err(msg) => {
                println!("FAIL: {msg}");
                self.failures.push(msg);
            }
        }
    }

    fn ok(&self) -> bool {
        self.passed == self.total
    }
}

#[derive(Debug, Serialize)]
struct PerfResult {
    size: usize,
    vertices: usize,
    build_ms: f64,
    sequential_ms: f64,
    parallel_ms: f64,
    speedup: Option<f64>,
    levels: usize,
    max_frontier: usize,
    sampled: usize,
    consistent: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    config: BfsConfig,
    threads: usize,
    suites: Vec<SuiteResult>,
    performance: Option<PerfResult>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = BfsConfig::default().with_threads(cli.threads);
    let engine = ParallelBfs::new(config.clone()).context("Failed to start worker pool")?;
    println!("Parallel engine: {} threads", engine.threads());

    let suites = vec![
        simple_cases(&engine)?,
        random_graphs(&engine, cli.random_graphs, cli.seed)?,
        small_cube(&engine)?,
    ];
    let all_passed = suites.iter().all(SuiteResult::ok);

    let performance = if all_passed && !cli.skip_perf {
        println!("\nALL CORRECTNESS TESTS PASSED!");
        Some(performance(&engine, &cli)?)
    } else {
        None
    };

    let report = Report {
        config,
        threads: engine.threads(),
        suites,
        performance,
    };
    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    if !all_passed {
        bail!("Correctness tests failed");
    }
    if let Some(perf) = &report.performance {
        if !perf.consistent {
            bail!("Sampled check on the {0}x{0}x{0} cube failed", perf.size);
        }
    }
    Ok(())
}

fn check<G: Graph + ?Sized>(
    engine: &ParallelBfs,
    graph: &G,
    start: usize,
    expected: Option<&[Distance]>,
) -> Result<std::result::Result<(), String>> {
    let seq = sequential_bfs(graph, start)?;
    let par = engine.run(graph, start)?;
    if let Some(expected) = expected {
        if let Err(v) = compare(expected, &seq) {
            return Ok(Err(format!("sequential: {v}")));
        }
    }
    Ok(compare(&seq, &par).map_err(|v| format!("start={start}: {v}")))
}

fn simple_cases(engine: &ParallelBfs) -> Result<SuiteResult> {
    println!("\nSIMPLE CORRECTNESS TESTS");
    let mut suite = SuiteResult::new("simple");

    let cases: [(&str, parbfs::AdjacencyGraph, Vec<Distance>); 5] = [
        ("single vertex", generators::empty(1), vec![0]),
        ("chain", generators::chain(4), vec![0, 1, 2, 3]),
        ("star", generators::star(3), vec![0, 1, 1, 1]),
        (
            "disconnected",
            generators::disjoint_edges(2),
            vec![0, 1, UNREACHED, UNREACHED],
        ),
        ("complete", generators::complete(5), vec![0, 1, 1, 1, 1]),
    ];
    for (name, graph, expected) in &cases {
        let outcome = check(engine, graph, 0, Some(expected.as_slice()))?;
        suite.record(outcome.map_err(|e| format!("{name}: {e}")));
    }

    println!("Results: {}/{} tests passed", suite.passed, suite.total);
    Ok(suite)
}

fn random_graphs(engine: &ParallelBfs, count: usize, seed: u64) -> Result<SuiteResult> {
    println!("\nRANDOM GRAPH TESTS");
    let mut suite = SuiteResult::new("random");
    let mut rng = StdRng::seed_from_u64(seed);

    for test in 0..count {
        let n = rng.gen_range(20..50);
        let attempts = n * 2 + rng.gen_range(0..n * 3);
        let graph = generators::random_undirected(n, attempts, &mut rng);

        let mut outcome = Ok(());
        for start in 0..n.min(3) {
            outcome = check(engine, &graph, start, None)?;
            if outcome.is_err() {
                break;
            }
        }
        suite.record(outcome.map_err(|e| format!("random graph {test}, {e}")));
    }

    println!("Results: {}/{} random graphs passed", suite.passed, suite.total);
    Ok(suite)
}

fn small_cube(engine: &ParallelBfs) -> Result<SuiteResult> {
    println!("\nSMALL CUBE TEST");
    let mut suite = SuiteResult::new("cube");
    let graph = generators::cube_grid(5, 5, 5);
    let outcome = check(engine, &graph, 0, None)?;
    suite.record(outcome.map_err(|e| format!("cube: {e}")));
    if suite.ok() {
        println!("Small cube test passed ({} vertices)", graph.vertex_count());
    }
    Ok(suite)
}

fn performance(engine: &ParallelBfs, cli: &Cli) -> Result<PerfResult> {
    let size = cli.size;
    println!("\nPERFORMANCE TEST ({size}x{size}x{size})");

    let started = Instant::now();
    let graph = generators::cube_grid(size, size, size);
    let build = started.elapsed();
    println!("Graph created: {} vertices", graph.vertex_count());
    println!("Creation time: {} ms", build.as_millis());

    let runs = cli.runs.max(1);
    let seq_time = average(runs, || sequential_bfs(&graph, 0).map(drop))?;
    println!("Sequential BFS ({runs} runs avg): {} ms", seq_time.as_millis());
    let par_time = average(runs, || engine.run(&graph, 0).map(drop))?;
    println!("Parallel BFS ({runs} runs avg):   {} ms", par_time.as_millis());

    let speedup = (!par_time.is_zero()).then(|| seq_time.as_secs_f64() / par_time.as_secs_f64());
    if let Some(speedup) = speedup {
        println!("Speedup: {speedup:.2}x");
    }

    let expected = sequential_bfs(&graph, 0)?;
    let (actual, stats) = engine.run_with_stats(&graph, 0)?;
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let consistent = match sampled_compare(&expected, &actual, cli.samples, &mut rng) {
        Ok(()) => {
            println!("Results are consistent (sampled {} vertices)", cli.samples);
            true
        }
        Err(v) => {
            println!("ERROR: {v}");
            false
        }
    };

    Ok(PerfResult {
        size,
        vertices: graph.vertex_count(),
        build_ms: millis(build),
        sequential_ms: millis(seq_time),
        parallel_ms: millis(par_time),
        speedup,
        levels: stats.levels(),
        max_frontier: stats.max_frontier(),
        sampled: cli.samples,
        consistent,
    })
}

fn average(runs: u32, mut f: impl FnMut() -> parbfs::Result<()>) -> Result<Duration> {
    let started = Instant::now();
    for _ in 0..runs {
        f()?;
    }
    Ok(started.elapsed() / runs)
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
