//! ttlstore Load Driver
//!
//! Hammers one shared store from many threads with a get/set/ttl/expire mix
//! and reports throughput plus the store's own counters.

use chrono::TimeDelta;
use clap::Parser;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};
use ttlstore::{Cache, ExpiringStore, StoreConfig};

/// ttlstore bench - concurrent load against an in-process expiring store
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of worker threads (0 = auto-detect)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Size of the key space
    #[arg(short, long, default_value_t = 10_000)]
    keys: usize,

    /// Operations per worker thread
    #[arg(short, long, default_value_t = 100_000)]
    ops: u64,

    /// TTL given to every write, in milliseconds
    #[arg(long, default_value_t = 50)]
    ttl_ms: i64,

    /// Percentage of operations that are reads
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u8).range(0..=100))]
    read_percent: u8,
}

/// Outcome of one worker's run
#[derive(Debug, Default, Clone, Copy)]
struct WorkerStats {
    ops: u64,
    elapsed: Duration,
}

fn run_worker(store: &ExpiringStore, id: usize, args: &Args) -> WorkerStats {
    let ttl = TimeDelta::milliseconds(args.ttl_ms);
    let read_percent = u64::from(args.read_percent);
    let keys = args.keys.max(1) as u64;
    let start = Instant::now();

    for op in 0..args.ops {
        let key = format!("key:{}", (id as u64 * 7919 + op * 31) % keys);
        if op % 100 < read_percent {
            if op % 4 == 0 {
                let _ = store.ttl(&key);
            } else {
                let _ = store.get_bytes(&key);
            }
        } else if op % 10 == 0 {
            store.expire(&key, ttl);
        } else {
            store.set(&key, "payload", ttl);
        }
    }

    WorkerStats {
        ops: args.ops,
        elapsed: start.elapsed(),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ttlstore=info".parse()?))
        .init();

    let args = Args::parse();
    let threads = if args.threads == 0 {
        num_cpus::get()
    } else {
        args.threads
    };

    info!(
        "Running {} workers x {} ops over {} keys (ttl {}ms, {}% reads)",
        threads, args.ops, args.keys, args.ttl_ms, args.read_percent
    );

    let store = ExpiringStore::with_config(StoreConfig::new().with_initial_capacity(args.keys));
    let start = Instant::now();

    let results = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|id| {
                let store = store.clone();
                let args = &args;
                scope.spawn(move |_| run_worker(&store, id, args))
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join())
            .collect::<Result<Vec<_>, _>>()
    })
    .map_err(|_| anyhow::anyhow!("worker thread panicked"))?
    .map_err(|_| anyhow::anyhow!("worker thread panicked"))?;

    let total = start.elapsed();
    for (id, stats) in results.iter().enumerate() {
        debug!(worker = id, ops = stats.ops, elapsed = ?stats.elapsed, "Worker finished");
    }

    let total_ops: u64 = results.iter().map(|s| s.ops).sum();
    info!(
        "Completed {} ops in {:.2?} ({:.0} ops/sec)",
        total_ops,
        total,
        total_ops as f64 / total.as_secs_f64()
    );
    info!("{}", store.metrics().summary());
    info!("Resident entries: {}", store.len());

    Ok(())
}
