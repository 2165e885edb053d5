/// Three-way comparators injected into every ordered operation.
pub mod compare;
/// Skip list parameters and environment-based loading.
pub mod config;
/// Tracing subscriber setup (formatting, filters).
pub mod logging;
/// Rank-augmented skip list: nodes, level generator, iterators, diagnostics.
pub mod skiplist;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Comparators: closures, natural order, reversed order.
pub use compare::{Comparator, NaturalOrder, Reversed};
/// Configuration.
pub use config::SkipListConfig;
/// Logging setup.
pub use logging::{init_logging, LogFormat, LoggingConfig, LoggingError};
/// The skip list and its companions.
pub use skiplist::{
    Iter, LevelGenerator, NodeRef, ReverseIter, SkipList, SkipListStatistics, FACTOR, LEVEL_LIMIT,
    MAX_LEVEL,
};
/// Errors.
pub use spanskip_error::{ConfigError, ValidationError};
