//! Example demonstrating runtime policy selection with CacheBuilder.
//!
//! Run with: cargo run --example basic_builder

use evictkit::builder::{CacheBuilder, CachePolicy};

fn main() {
    println!("=== CacheBuilder Examples ===\n");

    // Example 1: LRU Cache
    println!("1. LRU Cache");
    let mut lru = CacheBuilder::new(3).build::<u64, String>(CachePolicy::Lru);

    lru.put(1, "one".to_string());
    lru.put(2, "two".to_string());
    lru.put(3, "three".to_string());

    // Access key 1 to make it most recent
    lru.get(&1);

    // Insert key 4, evicts least recent (key 2)
    lru.put(4, "four".to_string());

    println!("   contains 1? {} (was accessed)", lru.contains(&1));
    println!("   contains 2? {} (evicted as LRU)", lru.contains(&2));
    println!("   contains 4? {} (just inserted)", lru.contains(&4));
    println!();

    // Example 2: FIFO Cache
    println!("2. FIFO Cache");
    let mut fifo = CacheBuilder::new(3).build::<u64, String>(CachePolicy::Fifo);

    fifo.put(1, "one".to_string());
    fifo.put(2, "two".to_string());
    fifo.put(3, "three".to_string());

    // Access doesn't affect FIFO order
    fifo.get(&1);

    // Insert key 4, evicts oldest (key 1)
    fifo.put(4, "four".to_string());

    println!("   contains 1? {} (evicted as oldest)", fifo.contains(&1));
    println!("   contains 2? {} (still present)", fifo.contains(&2));
    println!();

    // Example 3: policy parsed from configuration text
    println!("3. Policy from a string");
    for name in ["lfu", " MRU ", "arc"] {
        match name.parse::<CachePolicy>() {
            Ok(policy) => {
                let cache = CacheBuilder::default()
                    .listener(Vec::<u64>::new())
                    .build::<u64, u64>(policy);
                println!("   {name:?} -> {policy} (capacity {})", cache.capacity());
            },
            Err(err) => println!("   {name:?} -> error: {err}"),
        }
    }
    println!();

    // Example 4: zero capacity is rejected by try_build
    println!("4. Validated construction");
    match CacheBuilder::new(0).try_build::<u64, u64>(CachePolicy::Lru) {
        Ok(_) => println!("   unexpected success"),
        Err(err) => println!("   try_build(0): {err}"),
    }
}
