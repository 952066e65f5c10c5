//! Runs the same access pattern through all five policies and logs which
//! entry each one discards.
//!
//! Run with: RUST_LOG=info cargo run --example basic_policies

use evictkit::listener::TracingListener;
use evictkit::{FifoCache, LfuCache, LifoCache, LruCache, MruCache};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    println!("=== FIFO ===");
    let mut fifo = FifoCache::new().with_listener(TracingListener);
    for (k, v) in [("k1", "v1"), ("k2", "v2"), ("k3", "v3"), ("k4", "v4"), ("k5", "v5")] {
        fifo.put(k, v);
    }
    print!("{fifo}");

    println!("\n=== LIFO ===");
    let mut lifo = LifoCache::new().with_listener(TracingListener);
    for (k, v) in [("k1", "v1"), ("k2", "v2"), ("k3", "v3"), ("k4", "v4"), ("k5", "v5")] {
        lifo.put(k, v);
    }
    print!("{lifo}");

    println!("\n=== LRU ===");
    let mut lru = LruCache::new().with_listener(TracingListener);
    for (k, v) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
        lru.put(k, v);
    }
    lru.get(&"A");
    lru.put("E", 5);
    print!("{lru}");

    println!("\n=== MRU ===");
    let mut mru = MruCache::new().with_listener(TracingListener);
    for (k, v) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
        mru.put(k, v);
    }
    mru.get(&"B");
    mru.put("E", 5);
    print!("{mru}");

    println!("\n=== LFU ===");
    let mut lfu = LfuCache::new().with_listener(TracingListener);
    for (k, v) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
        lfu.put(k, v);
    }
    for k in ["A", "B", "D", "A"] {
        lfu.get(&k);
    }
    lfu.put("E", 5);
    print!("{lfu}");
    println!("frequency of A: {:?}", lfu.policy().frequency(&"A"));
}
