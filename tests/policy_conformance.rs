// ==============================================
// CROSS-POLICY CONFORMANCE TESTS (integration)
// ==============================================
//
// Every policy shares one facade contract. The same suite runs against each
// cache alias, followed by a model check that replays random operation
// sequences against a plain Vec-based reference implementation.

use std::collections::HashMap;

use evictkit::builder::{CacheBuilder, CachePolicy};
use evictkit::traits::EvictionPolicy;
use evictkit::{FifoCache, LfuCache, LifoCache, LruCache, MruCache};
use proptest::prelude::*;

macro_rules! conformance_suite {
    ($name:ident, $cache:ident) => {
        mod $name {
            use super::*;

            fn cache(capacity: usize) -> $cache<u32, u32, Vec<u32>> {
                $cache::with_capacity(capacity).with_listener(Vec::new())
            }

            #[test]
            fn len_never_exceeds_capacity() {
                let mut cache = cache(4);
                for i in 0..50 {
                    cache.put(i, i);
                    assert!(cache.len() <= 4);
                    assert!(cache.check_invariants().is_ok());
                }
                assert_eq!(cache.len(), 4);
            }

            #[test]
            fn one_discard_per_overflowing_put() {
                let mut cache = cache(4);
                for i in 0..4 {
                    cache.put(i, i);
                }
                assert!(cache.listener().is_empty());

                for i in 4..10 {
                    cache.put(i, i);
                    assert_eq!(cache.listener().len(), (i - 3) as usize);
                }
            }

            #[test]
            fn evicted_key_is_absent_everywhere() {
                let mut cache = cache(4);
                for i in 0..5 {
                    cache.put(i, i * 10);
                }
                let evicted = cache.listener()[0];

                assert!(!cache.contains(&evicted));
                assert!(!cache.policy().contains(&evicted));
                assert!(!cache.keys().contains(&evicted));
                assert_eq!(cache.get(&evicted), None);
            }

            #[test]
            fn incoming_key_is_never_its_own_victim() {
                let mut cache = cache(2);
                for i in 0..20 {
                    cache.put(i, i);
                    assert_eq!(cache.peek(&i), Some(&i));
                }
            }

            #[test]
            fn updates_never_grow_or_evict() {
                let mut cache = cache(4);
                for i in 0..4 {
                    cache.put(i, i);
                }
                for round in 0..5 {
                    for i in 0..4 {
                        cache.put(i, i + round);
                    }
                }
                assert_eq!(cache.len(), 4);
                assert!(cache.listener().is_empty());
                assert_eq!(cache.peek(&3), Some(&7));
            }

            #[test]
            fn repeated_gets_are_idempotent() {
                let mut cache = cache(4);
                for i in 0..4 {
                    cache.put(i, i);
                }
                let before = cache.keys();
                for _ in 0..10 {
                    assert_eq!(cache.get(&2), Some(&2));
                }
                assert_eq!(cache.keys(), before);
                assert!(cache.listener().is_empty());
            }

            #[test]
            fn missing_key_or_value_is_a_no_op() {
                let mut cache = cache(4);
                cache.put_opt(None, Some(1));
                cache.put_opt(Some(1), None);
                assert!(cache.is_empty());
                assert_eq!(cache.get_opt(None), None);
                assert_eq!(cache.get(&1), None);
            }

            #[test]
            fn zero_capacity_rejects_inserts() {
                let mut cache = cache(0);
                cache.put(1, 1);
                assert_eq!(cache.len(), 0);
                assert!(cache.listener().is_empty());
                assert!($cache::<u32, u32>::try_with_capacity(0).is_err());
            }

            proptest! {
                #[cfg_attr(miri, ignore)]
                #[test]
                fn prop_invariants_hold(
                    capacity in 1usize..8,
                    ops in prop::collection::vec((any::<bool>(), 0u32..16, 0u32..100), 0..200)
                ) {
                    let mut cache = cache(capacity);
                    let mut evictions = 0usize;
                    for (is_put, key, value) in ops {
                        if is_put {
                            let grows = !cache.contains(&key) && cache.len() == capacity;
                            cache.put(key, value);
                            if grows {
                                evictions += 1;
                            }
                            prop_assert_eq!(cache.peek(&key), Some(&value));
                        } else {
                            cache.get(&key);
                        }
                        prop_assert!(cache.len() <= capacity);
                        prop_assert!(cache.check_invariants().is_ok());
                        prop_assert_eq!(cache.listener().len(), evictions);
                    }
                }
            }
        }
    };
}

conformance_suite!(fifo, FifoCache);
conformance_suite!(lifo, LifoCache);
conformance_suite!(lru, LruCache);
conformance_suite!(mru, MruCache);
conformance_suite!(lfu, LfuCache);

// ==============================================
// Reference Model
// ==============================================
//
// Straightforward list-based implementation of each policy: O(n) scans,
// no shared code with the crate.

struct ModelCache {
    policy: CachePolicy,
    capacity: usize,
    map: HashMap<u8, u8>,
    order: Vec<u8>,
    freq: HashMap<u8, u64>,
    discarded: Vec<u8>,
}

impl ModelCache {
    fn new(policy: CachePolicy, capacity: usize) -> Self {
        Self {
            policy,
            capacity,
            map: HashMap::new(),
            order: Vec::new(),
            freq: HashMap::new(),
            discarded: Vec::new(),
        }
    }

    fn move_to_end(&mut self, key: u8) {
        self.order.retain(|k| *k != key);
        self.order.push(key);
    }

    fn put(&mut self, key: u8, value: u8) {
        if self.map.contains_key(&key) {
            self.map.insert(key, value);
            match self.policy {
                CachePolicy::Fifo => {},
                CachePolicy::Lifo | CachePolicy::Lru | CachePolicy::Mru => self.move_to_end(key),
                CachePolicy::Lfu => {
                    *self.freq.get_mut(&key).unwrap() += 1;
                    self.move_to_end(key);
                },
            }
            return;
        }

        if self.map.len() >= self.capacity {
            let victim = match self.policy {
                CachePolicy::Fifo | CachePolicy::Lru => self.order[0],
                CachePolicy::Lifo | CachePolicy::Mru => *self.order.last().unwrap(),
                CachePolicy::Lfu => {
                    let min = self.freq.values().copied().min().unwrap();
                    *self.order.iter().find(|k| self.freq[*k] == min).unwrap()
                },
            };
            self.map.remove(&victim);
            self.freq.remove(&victim);
            self.order.retain(|k| *k != victim);
            self.discarded.push(victim);
        }

        self.map.insert(key, value);
        self.freq.insert(key, 1);
        self.order.push(key);
    }

    fn get(&mut self, key: u8) -> Option<u8> {
        let value = *self.map.get(&key)?;
        match self.policy {
            CachePolicy::Fifo | CachePolicy::Lifo => {},
            CachePolicy::Lru | CachePolicy::Mru => self.move_to_end(key),
            CachePolicy::Lfu => {
                *self.freq.get_mut(&key).unwrap() += 1;
                self.move_to_end(key);
            },
        }
        Some(value)
    }
}

#[derive(Debug, Clone)]
enum Op {
    Put(u8, u8),
    Get(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..10, any::<u8>()).prop_map(|(k, v)| Op::Put(k, v)),
        (0u8..10).prop_map(Op::Get),
    ]
}

fn policy_strategy() -> impl Strategy<Value = CachePolicy> {
    prop::sample::select(CachePolicy::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_matches_reference_model(
        policy in policy_strategy(),
        capacity in 1usize..6,
        ops in prop::collection::vec(op_strategy(), 0..150)
    ) {
        let mut cache = CacheBuilder::new(capacity)
            .listener(Vec::new())
            .build::<u8, u8>(policy);
        let mut model = ModelCache::new(policy, capacity);

        for op in ops {
            match op {
                Op::Put(k, v) => {
                    cache.put(k, v);
                    model.put(k, v);
                },
                Op::Get(k) => {
                    prop_assert_eq!(cache.get(&k).copied(), model.get(k));
                },
            }
            prop_assert_eq!(cache.listener(), &model.discarded);
            prop_assert_eq!(cache.len(), model.map.len());
        }

        let keys: std::collections::HashSet<u8> = model.map.keys().copied().collect();
        prop_assert_eq!(cache.keys(), keys);
    }
}
