//! Tracker data structures used by the eviction policies.

pub mod frequency_buckets;
pub mod key_order;

pub use frequency_buckets::{FrequencyBuckets, INITIAL_FREQUENCY};
pub use key_order::KeyOrder;
