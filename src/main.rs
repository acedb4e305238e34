//! fastxor CLI - benchmark and demo tool for the fastxor kernels.
//!
//! This is the main entry point for the fastxor command-line application.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use memmap2::Mmap;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use fastxor::prelude::*;

/// fastxor - high-performance XOR of equal-length buffers
#[derive(Parser)]
#[command(name = "fastxor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show implementation details and capabilities
    Info {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Benchmark both kernels against a byte-by-byte reference
    Bench {
        /// Bytes of random data per side
        #[arg(short, long, env = "FASTXOR_BENCH_SIZE", default_value_t = 1024 * 1024)]
        size: usize,

        /// Bytes per XOR call
        #[arg(short, long, env = "FASTXOR_BENCH_CHUNK", default_value_t = 128)]
        chunk: usize,

        /// Seed for reproducible data (random if omitted)
        #[arg(long, env = "FASTXOR_BENCH_SEED")]
        seed: Option<u64>,

        /// Also run the flexible kernel across the rayon thread pool
        #[arg(short, long)]
        parallel: bool,
    },

    /// XOR two files of equal length
    Xor {
        /// First input file
        #[arg(short, long)]
        left: PathBuf,

        /// Second input file
        #[arg(short, long)]
        right: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Require a whole number of 8-byte words
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { json } => {
            cmd_info(json)?;
        }
        Commands::Bench {
            size,
            chunk,
            seed,
            parallel,
        } => {
            cmd_bench(size, chunk, seed, parallel)?;
        }
        Commands::Xor {
            left,
            right,
            output,
            strict,
        } => {
            cmd_xor(&left, &right, &output, strict)?;
        }
    }

    Ok(())
}

fn cmd_info(json: bool) -> Result<()> {
    let caps = capabilities();

    if json {
        println!("{}", serde_json::to_string_pretty(&caps)?);
        return Ok(());
    }

    let available: Vec<&str> = Strategy::available().iter().map(|s| s.name()).collect();

    println!("fastxor {}", caps.version);
    println!("  {}", caps.description);
    println!("  word size:  {} bytes ({} bits)", caps.word_size, caps.word_bits);
    println!("  alignment:  {} bytes (strict mode)", caps.alignment);
    println!("  strategy:   {} ({} bytes per lane)", caps.strategy, caps.lane_width);
    println!("  available:  {}", available.join(", "));

    Ok(())
}

/// One timed pass over every chunk pair.
struct Pass {
    name: &'static str,
    elapsed: Duration,
    results: Vec<Vec<u8>>,
}

impl Pass {
    fn run<F>(name: &'static str, left: &[&[u8]], right: &[&[u8]], xor: F) -> Result<Self>
    where
        F: Fn(&[u8], &[u8]) -> fastxor::Result<Vec<u8>>,
    {
        let start = Instant::now();
        let results = left
            .iter()
            .zip(right)
            .map(|(a, b)| xor(a, b))
            .collect::<fastxor::Result<Vec<_>>>()
            .with_context(|| format!("{} pass failed", name))?;

        Ok(Self {
            name,
            elapsed: start.elapsed(),
            results,
        })
    }

    fn throughput(&self, bytes: usize) -> f64 {
        (bytes as f64 / (1024.0 * 1024.0)) / self.elapsed.as_secs_f64().max(f64::EPSILON)
    }
}

fn cmd_bench(size: usize, chunk: usize, seed: Option<u64>, parallel: bool) -> Result<()> {
    if chunk == 0 {
        bail!("Chunk size must be greater than zero");
    }

    println!("=== fastxor benchmark ===");
    println!("{}", capabilities());
    println!("Data size:  {} bytes", size);
    println!("Chunk size: {} bytes", chunk);
    println!("Chunks:     {}", size.div_ceil(chunk));
    println!();

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Generating test data...");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut data1 = vec![0u8; size];
    let mut data2 = vec![0u8; size];
    rng.fill_bytes(&mut data1);
    rng.fill_bytes(&mut data2);

    let chunks1: Vec<&[u8]> = data1.chunks(chunk).collect();
    let chunks2: Vec<&[u8]> = data2.chunks(chunk).collect();
    pb.finish_and_clear();

    let reference = Pass::run("reference", &chunks1, &chunks2, |a, b| Ok(xor_bytewise(a, b)))?;
    report(&reference, size, None);

    let mut failures = 0;
    let mut passes = Vec::new();

    if chunks1.iter().all(|c| c.len() % WORD_SIZE == 0) {
        passes.push(Pass::run("xor_aligned", &chunks1, &chunks2, xor_aligned)?);
    } else {
        println!(
            "=== xor_aligned ===\nSkipped: chunk lengths are not all multiples of {} bytes\n",
            WORD_SIZE
        );
    }

    passes.push(Pass::run("xor_flexible", &chunks1, &chunks2, xor_flexible)?);

    if parallel {
        let start = Instant::now();
        let results = chunks1
            .par_iter()
            .zip(chunks2.par_iter())
            .map(|(a, b)| xor_flexible(a, b))
            .collect::<fastxor::Result<Vec<_>>>()
            .context("parallel pass failed")?;
        passes.push(Pass {
            name: "xor_flexible (parallel)",
            elapsed: start.elapsed(),
            results,
        });
    }

    for pass in &passes {
        let verified = pass.results == reference.results;
        if !verified {
            failures += 1;
        }
        report(pass, size, Some((&reference, verified)));
    }

    println!("=== Summary ===");
    for pass in std::iter::once(&reference).chain(&passes) {
        println!("{:<24} {:>10.2} MB/s", pass.name, pass.throughput(size));
    }
    println!();

    failures += edge_cases();

    if failures > 0 {
        bail!("{} verification(s) failed", failures);
    }

    Ok(())
}

fn report(pass: &Pass, size: usize, against: Option<(&Pass, bool)>) {
    println!("=== {} ===", pass.name);
    println!("Time:       {:.4} seconds", pass.elapsed.as_secs_f64());
    println!("Throughput: {:.2} MB/s", pass.throughput(size));

    if let Some((reference, verified)) = against {
        if verified {
            println!("Results verified against the reference");
            let speedup =
                reference.elapsed.as_secs_f64() / pass.elapsed.as_secs_f64().max(f64::EPSILON);
            println!("Speedup:    {:.2}x", speedup);
        } else {
            println!("FAILED: results differ from the reference");
        }
    }

    println!();
}

/// Check the documented edge cases, returning the number that failed.
fn edge_cases() -> usize {
    println!("=== Edge cases ===");

    let small = b"1234567";
    let checks = [
        (
            "xor_aligned rejects 7-byte input",
            matches!(xor_aligned(small, small), Err(Error::Unaligned { .. })),
        ),
        (
            "xor_aligned rejects mismatched sizes",
            matches!(
                xor_aligned(b"12345678", b"1234567890"),
                Err(Error::LengthMismatch { .. })
            ),
        ),
        (
            "xor_flexible handles small input",
            xor_flexible(small, small).ok() == Some(xor_bytewise(small, small)),
        ),
        (
            "xor_flexible handles empty input",
            xor_flexible(b"", b"").map(|r| r.is_empty()).unwrap_or(false),
        ),
    ];

    let mut failures = 0;
    for (name, passed) in checks {
        if passed {
            println!("ok      {}", name);
        } else {
            println!("FAILED  {}", name);
            failures += 1;
        }
    }
    println!();

    failures
}

fn cmd_xor(left: &Path, right: &Path, output: &Path, strict: bool) -> Result<()> {
    println!(
        "XOR: {} ^ {} -> {}",
        left.display(),
        right.display(),
        output.display()
    );

    let left_map = map_file(left)?;
    let right_map = map_file(right)?;
    let a = left_map.as_deref().unwrap_or(&[]);
    let b = right_map.as_deref().unwrap_or(&[]);

    let start = Instant::now();
    let result = if strict {
        xor_aligned(a, b)
    } else {
        xor_flexible(a, b)
    }
    .context("Failed to XOR input files")?;

    fs::write(output, &result).context("Failed to write output file")?;

    println!("Wrote {} bytes in {:?}", result.len(), start.elapsed());

    Ok(())
}

/// Memory-map a file for reading. Empty files have no mapping.
fn map_file(path: &Path) -> Result<Option<Mmap>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    if file.metadata()?.len() == 0 {
        return Ok(None);
    }

    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;

    Ok(Some(mmap))
}
