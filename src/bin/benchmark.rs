//! Benchmarks the solver against a set of predefined test positions and their
//! known scores.
//!
//! Must be run with a path to a test file as a command-line argument. Test
//! files are plain text, one test case per line: a move sequence (digits
//! `1`..`WIDTH`) and its expected score from the side-to-move's perspective,
//! separated by whitespace. This is the same format `parse_preseed_line`
//! reads for opening books (spec §6), minus the scope check, since a
//! benchmark file's "expected score" is not required to already be proven.

use connect_four_solver::{Position, Solver, SolverConfig, TranspositionTable};
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::str::FromStr;
use std::time::{Duration, Instant};

struct TestCase {
    position: Position,
    expected_score: i8,
}

impl FromStr for TestCase {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let moves = parts.next().ok_or("missing move sequence")?;
        let score_str = parts.next().ok_or("missing score")?;

        let position = Position::from_moves(moves)?;
        let expected_score = score_str.parse::<i8>()?;

        Ok(TestCase { position, expected_score })
    }
}

#[derive(Default)]
struct BenchmarkResults {
    total_tests: usize,
    correct_solves: usize,
    total_duration: Duration,
    total_nodes: u64,
    failures: Vec<(String, i8, i8)>,
}

impl BenchmarkResults {
    fn update(&mut self, moves: &str, expected: i8, actual: i8, duration: Duration, nodes: u64) {
        self.total_tests += 1;
        self.total_duration += duration;
        self.total_nodes += nodes;

        if expected == actual {
            self.correct_solves += 1;
        } else {
            self.failures.push((moves.to_string(), expected, actual));
        }
    }
}

impl Display for BenchmarkResults {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Benchmark Results ---")?;
        writeln!(
            f,
            "Accuracy: {} / {} ({:.2}%)",
            self.correct_solves,
            self.total_tests,
            (self.correct_solves as f64 / self.total_tests as f64) * 100.0
        )?;

        if self.total_tests > 0 {
            let mean_time = self.total_duration / self.total_tests as u32;
            let mean_nodes = self.total_nodes as f64 / self.total_tests as f64;
            let k_nodes_per_sec = self.total_nodes as f64 / self.total_duration.as_secs_f64() / 1000.0;

            writeln!(f, "Mean time per position: {mean_time:?}")?;
            writeln!(f, "Mean nodes visited: {mean_nodes:.0}")?;
            writeln!(f, "Solver speed: {k_nodes_per_sec:.2} knodes/s")?;
        }

        if !self.failures.is_empty() {
            writeln!(f, "\n--- Failures ---")?;
            for (moves, expected, actual) in &self.failures {
                writeln!(f, "moves: '{moves}' | expected: {expected}, got: {actual}")?;
            }
        }

        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = match env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("Error: missing command-line argument.");
            eprintln!("Usage: cargo run --release --bin benchmark -- <path/to/test_file>");
            return Err("no path given".into());
        }
    };

    println!("Loading test data from '{path}'...");
    let test_cases = load_test_data(&path)?;

    println!("Running benchmark on {} positions...", test_cases.len());
    let results = run_benchmark(&test_cases)?;

    println!("{results}");
    Ok(())
}

fn load_test_data(path: &str) -> Result<Vec<(String, TestCase)>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut cases = Vec::new();

    for (i, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<TestCase>() {
            Ok(case) => cases.push((line, case)),
            Err(e) => return Err(format!("error parsing line {}: {}", i + 1, e).into()),
        }
    }

    Ok(cases)
}

fn run_benchmark(test_cases: &[(String, TestCase)]) -> Result<BenchmarkResults, Box<dyn Error>> {
    let mut results = BenchmarkResults::default();
    let mut solver = Solver::new(SolverConfig::new(), TranspositionTable::DEFAULT_SIZE)?;

    let progress_bar = create_progress_bar(test_cases.len() as u64);

    for (line_str, test_case) in progress_bar.wrap_iter(test_cases.iter()) {
        solver.reset(false);

        let start_time = Instant::now();
        let actual_score = solver.solve(&test_case.position, false);
        let duration = start_time.elapsed();

        results.update(line_str, test_case.expected_score, actual_score, duration, solver.nodes());
    }

    Ok(results)
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {human_pos}/{human_len} ({eta})",
    )
    .unwrap()
    .progress_chars("#>-");
    ProgressBar::new(len).with_style(style)
}
