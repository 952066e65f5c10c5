//! Sharing one cache between threads.
//!
//! Run with: cargo run --example shared_cache --features concurrency

use std::sync::Arc;
use std::thread;

use evictkit::listener::TracingListener;
use evictkit::sync::SharedCache;
use evictkit::LruCache;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let shared = Arc::new(SharedCache::new(
        LruCache::with_capacity(8).with_listener(TracingListener),
    ));

    let handles: Vec<_> = (0..4u32)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..4 {
                    shared.put(worker * 100 + i, format!("w{worker}-{i}"));
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker panicked");
        }
    }

    println!("resident entries: {}", shared.len());
    shared.with_lock(|cache| {
        print!("{cache}");
        #[cfg(feature = "metrics")]
        println!("evictions: {}", cache.metrics_snapshot().evictions);
    });
}
