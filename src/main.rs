/*
    Console driver
*/

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use frac_map::fraction::DEFAULT_BOUND;
use frac_map::hash::{MixHash, ShiftXorHash, XorHash};
use frac_map::map::{HashedMap, OrderedMap};
use frac_map::{Fraction, KeyHash, KeyOrder, Lexicographic, Mathematical, Reduce};

#[derive(Parser, Debug)]
#[clap(name = "frac-map", author, about = "Fractions as map keys: ordering, equality and hashing")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce a few fractions and compare them for equality
    Compare {
        #[clap(long, long_help = "seed for the random fraction", default_value = "5489")]
        seed: u64,

        #[clap(long, long_help = "magnitude bound for the random fraction", default_value_t = DEFAULT_BOUND)]
        bound: i32,
    },
    /// Build maps over a grid of fractions with every strategy and report timings
    Bench {
        #[clap(short = 'n', long, long_help = "numerators and denominators range over [-n, n]", default_value_t = DEFAULT_BOUND)]
        bound: i32,

        #[clap(short = 'b', long, long_help = "bucket count for occupancy statistics; default one per distinct key")]
        buckets: Option<usize>,
    },
}

fn init_log() {
    let layer = fmt::layer().with_target(false);

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn main() -> Result<()> {
    init_log();
    let args = Args::parse();
    match args.command {
        Command::Compare { seed, bound } => compare(seed, bound),
        Command::Bench { bound, buckets } => bench(bound, buckets),
    }
}

fn compare(seed: u64, bound: i32) -> Result<()> {
    anyhow::ensure!(bound > 0, "bound must be positive, got {}", bound);

    let mut rng = StdRng::seed_from_u64(seed);
    let a = Fraction::random(&mut rng, bound);
    let b = a.reduce().with_context(|| format!("reducing {}", a))?;
    let c = Fraction::new(1000, -100);
    let d = c.reduce().with_context(|| format!("reducing {}", c))?;

    println!("a = {}", a);
    println!("b = {}", b);
    println!("c = {}", c);
    println!("d = {}", d);
    println!();

    let named = [("a", a), ("b", b), ("c", c), ("d", d)];
    for (i, (x, fx)) in named.iter().enumerate() {
        for (y, fy) in &named[i + 1..] {
            println!("{} == {}: {}", x, y, fx == fy);
        }
    }
    Ok(())
}

// Runs `build`, returning its result and the wall-clock time it took.
fn timed<T>(build: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = build();
    (out, start.elapsed())
}

fn bench_ordered<O: KeyOrder>(bound: i32) {
    let (map, elapsed) = timed(|| OrderedMap::<String, O>::from_grid(bound, Fraction::to_string));
    println!(
        "ordered/{:<14} size={:<9} time={:?}",
        map.strategy(),
        map.len(),
        elapsed
    );
}

fn bench_hashed<H: KeyHash>(bound: i32, buckets: Option<usize>) {
    let (map, elapsed) = timed(|| HashedMap::<String, H>::from_grid(bound, Fraction::to_string));
    let stats = map.bucket_stats(buckets.unwrap_or(map.len()).max(1));
    println!(
        "hashed/{:<15} size={:<9} time={:?}",
        map.strategy(),
        map.len(),
        elapsed
    );
    println!("    {}", stats);
}

fn bench(bound: i32, buckets: Option<usize>) -> Result<()> {
    anyhow::ensure!(bound > 0, "bound must be positive, got {}", bound);
    if let Some(b) = buckets {
        anyhow::ensure!(b > 0, "bucket count must be positive, got {}", b);
    }

    let total = (2 * bound as usize + 1) * (2 * bound as usize);
    info!(bound, total, "building maps");

    bench_ordered::<Lexicographic>(bound);
    bench_ordered::<Mathematical>(bound);

    bench_hashed::<XorHash>(bound, buckets);
    bench_hashed::<ShiftXorHash>(bound, buckets);
    bench_hashed::<MixHash>(bound, buckets);
    Ok(())
}
