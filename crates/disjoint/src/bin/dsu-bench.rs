//! Time random unions and membership queries on a large disjoint set

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use disjoint::DisjointSet;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing_subscriber::{filter::LevelFilter, prelude::*};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Print more verbose logs
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of elements to insert
    #[arg(short = 'n', long, env = "DSU_BENCH_COUNT", default_value_t = 100_000)]
    count: usize,

    /// Seed for choosing which elements to merge and query
    #[arg(long, env = "DSU_BENCH_SEED", default_value_t = 42)]
    seed: u64,
}

fn main() {
    let opts = Opts::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr),
        )
        .with(match (cfg!(debug_assertions), opts.verbose) {
            (false, 0) => LevelFilter::INFO,
            (false, 1) | (true, 0) => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        })
        .init();

    tracing::debug!("{opts:#?}");

    std::process::exit(run(opts).map_or_else(
        |e| {
            tracing::error!("{e:?}");
            1
        },
        |()| 0,
    ));
}

fn run(
    Opts {
        verbose: _,
        count,
        seed,
    }: Opts,
) -> Result<()> {
    anyhow::ensure!(count > 0, "Element count must be nonzero");

    let mut set = DisjointSet::with_capacity(count);

    let start = Instant::now();
    let nodes: Vec<_> = (0..count).map(|i| set.insert(i)).collect();
    let insert = start.elapsed();

    let mut rng = StdRng::seed_from_u64(seed);

    let start = Instant::now();
    let mut merged = 0_usize;
    for _ in 0..count / 2 {
        let a = nodes[rng.gen_range(0..count)];
        let b = nodes[rng.gen_range(0..count)];

        if set.union(a, b).context("Error merging sets")?.did_merge() {
            merged += 1;
        }
    }
    let merge = start.elapsed();

    let start = Instant::now();
    let mut same = 0_usize;
    for _ in 0..count {
        let a = nodes[rng.gen_range(0..count)];
        let b = nodes[rng.gen_range(0..count)];

        if set.are_same_set(a, b).context("Error querying sets")? {
            same += 1;
        }
    }
    let query = start.elapsed();

    tracing::debug!(merged, sets = set.set_count(), "Benchmark finished");

    println!("DisjointSet N={count}");
    println!(" insert: {} ms", insert.as_millis());
    println!(" merge:  {} ms", merge.as_millis());
    println!(" are_same_set checks: {} ms ({same})", query.as_millis());

    Ok(())
}
