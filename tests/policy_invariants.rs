// ==============================================
// CROSS-POLICY INVARIANT TESTS (integration)
// ==============================================
//
// Named eviction scenarios for each policy plus library-wide behavior that
// spans the facade, the builder and the listener.

// ==============================================
// Capacity-0 Behavior
// ==============================================
//
// A zero-capacity cache is constructible through the infallible paths and
// stores nothing. The fallible paths reject it up front.

mod zero_capacity {
    use evictkit::builder::{CacheBuilder, CachePolicy};
    use evictkit::LruCache;

    #[test]
    fn capacity_zero_is_honored() {
        let cache: LruCache<&str, i32> = LruCache::with_capacity(0);
        assert_eq!(
            cache.capacity(),
            0,
            "LruCache::with_capacity(0) should honor capacity=0, not coerce to {}",
            cache.capacity()
        );
    }

    #[test]
    fn capacity_zero_rejects_inserts_for_every_policy() {
        for policy in CachePolicy::ALL {
            let mut cache = CacheBuilder::new(0)
                .listener(Vec::new())
                .build::<&str, i32>(policy);
            cache.put("key", 42);

            assert_eq!(cache.len(), 0, "{policy} with capacity=0 should reject inserts");
            assert!(cache.listener().is_empty(), "{policy} should not discard anything");
            assert!(cache.check_invariants().is_ok());
        }
    }

    #[test]
    fn try_build_rejects_zero() {
        let err = CacheBuilder::new(0)
            .try_build::<u8, u8>(CachePolicy::Fifo)
            .unwrap_err();
        assert_eq!(err.to_string(), "capacity must be greater than zero");
    }
}

// ==============================================
// FIFO
// ==============================================

mod fifo {
    use evictkit::FifoCache;

    #[test]
    fn fifth_insert_evicts_first() {
        let mut cache = FifoCache::new().with_listener(Vec::new());
        for k in ["k1", "k2", "k3", "k4", "k5"] {
            cache.put(k, k.len());
        }
        assert_eq!(cache.listener(), &vec!["k1"]);
        assert!(!cache.contains(&"k1"));
    }

    #[test]
    fn access_and_update_do_not_reorder() {
        let mut cache = FifoCache::new().with_listener(Vec::new());
        for k in ["k1", "k2", "k3", "k4"] {
            cache.put(k, 0);
        }
        cache.get(&"k1");
        cache.put("k1", 1);
        cache.put("k5", 5);

        assert_eq!(cache.listener(), &vec!["k1"]);
    }
}

// ==============================================
// LIFO
// ==============================================

mod lifo {
    use evictkit::LifoCache;

    #[test]
    fn evicts_prior_most_recent_insert() {
        let mut cache = LifoCache::new().with_listener(Vec::new());
        for k in ["k1", "k2", "k3", "k4", "k5"] {
            cache.put(k, ());
        }
        assert_eq!(cache.listener(), &vec!["k4"]);
        assert!(cache.contains(&"k5"));

        cache.put("k6", ());
        assert_eq!(cache.listener(), &vec!["k4", "k5"]);
    }

    #[test]
    fn update_makes_key_newest() {
        let mut cache = LifoCache::new().with_listener(Vec::new());
        for k in ["k1", "k2", "k3", "k4"] {
            cache.put(k, 0);
        }
        cache.put("k2", 2);
        cache.put("k5", 5);

        assert_eq!(cache.listener(), &vec!["k2"]);
    }
}

// ==============================================
// LRU
// ==============================================

mod lru {
    use std::collections::HashSet;

    use evictkit::LruCache;

    #[test]
    fn get_protects_key_from_eviction() {
        let mut cache = LruCache::new().with_listener(Vec::new());
        for (k, v) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
            cache.put(k, v);
        }
        assert_eq!(cache.get(&"A"), Some(&1));
        cache.put("E", 5);

        assert_eq!(cache.listener(), &vec!["B"]);
        assert_eq!(cache.keys(), HashSet::from(["A", "C", "D", "E"]));
    }

    #[test]
    fn update_refreshes_recency() {
        let mut cache = LruCache::with_capacity(2).with_listener(Vec::new());
        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(1, "a2");
        cache.put(3, "c");

        assert_eq!(cache.listener(), &vec![2]);
        assert_eq!(cache.peek(&1), Some(&"a2"));
    }
}

// ==============================================
// MRU
// ==============================================

mod mru {
    use evictkit::MruCache;

    #[test]
    fn evicts_the_key_just_accessed() {
        let mut cache = MruCache::new().with_listener(Vec::new());
        for k in ["k1", "k2", "k3", "k4"] {
            cache.put(k, ());
        }
        cache.get(&"k2");
        cache.put("k5", ());

        assert_eq!(cache.listener(), &vec!["k2"]);
    }

    #[test]
    fn without_access_evicts_latest_insert() {
        let mut cache = MruCache::new().with_listener(Vec::new());
        for k in ["k1", "k2", "k3", "k4", "k5"] {
            cache.put(k, ());
        }
        assert_eq!(cache.listener(), &vec!["k4"]);
    }
}

// ==============================================
// LFU
// ==============================================

mod lfu {
    use evictkit::LfuCache;

    #[test]
    fn evicts_strictly_lowest_count() {
        let mut cache = LfuCache::new().with_listener(Vec::new());
        for k in ["k1", "k2", "k3", "k4"] {
            cache.put(k, ());
        }
        for k in ["k1", "k2", "k4"] {
            cache.get(&k);
        }
        cache.put("k5", ());

        assert_eq!(cache.listener(), &vec!["k3"]);
        assert_eq!(cache.policy().frequency(&"k5"), Some(1));
    }

    #[test]
    fn ties_break_by_least_recent_touch() {
        let mut cache = LfuCache::new().with_listener(Vec::new());
        for k in ["k1", "k2", "k3", "k4"] {
            cache.put(k, ());
        }
        // every key at count 2; k3 touched first
        for k in ["k3", "k1", "k4", "k2"] {
            cache.get(&k);
        }
        cache.put("k5", ());

        assert_eq!(cache.listener(), &vec!["k3"]);
    }

    #[test]
    fn update_counts_as_use() {
        let mut cache = LfuCache::with_capacity(2).with_listener(Vec::new());
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("a", 3);
        cache.put("c", 4);

        assert_eq!(cache.listener(), &vec!["b"]);
        assert_eq!(cache.policy().frequency(&"a"), Some(2));
    }
}

// ==============================================
// Listener Delivery
// ==============================================

mod listener {
    use std::sync::{Arc, Mutex};

    use evictkit::builder::{CacheBuilder, CachePolicy};
    use evictkit::listener::{from_fn, DiscardListener, Discarded};

    #[test]
    fn boxed_listener_receives_value_and_policy_name() {
        let seen: Arc<Mutex<Vec<Discarded<u32, String>>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let listener: Box<dyn DiscardListener<u32, String> + Send> =
            Box::new(from_fn(move |d: Discarded<u32, String>| {
                if let Ok(mut guard) = sink.lock() {
                    guard.push(d);
                }
            }));

        let mut cache = CacheBuilder::new(1)
            .listener(listener)
            .build::<u32, String>(CachePolicy::Lru);
        cache.put(1, "one".into());
        cache.put(2, "two".into());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].key, 1);
        assert_eq!(seen[0].value, "one");
        assert_eq!(seen[0].policy, "lru");
    }
}
