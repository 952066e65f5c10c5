pub use crate::builder::{CacheBuilder, CachePolicy, DynCache};
pub use crate::cache::{Cache, FifoCache, LfuCache, LifoCache, LruCache, MruCache};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::listener::{DiscardListener, Discarded, TracingListener};
pub use crate::policy::{FifoPolicy, LfuPolicy, LifoPolicy, LruPolicy, MruPolicy};
pub use crate::traits::{CoreCache, EvictionPolicy};
pub use crate::MAX_ITEMS;

#[cfg(feature = "concurrency")]
pub use crate::sync::SharedCache;
