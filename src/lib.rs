//! # bloom64
//!
//! A Bloom filter parameterized over a pluggable 64-bit hash function.
//!
//! The filter answers "was this item possibly inserted?" with zero false
//! negatives and a tunable false-positive rate, using `bits_per_item` bits
//! of memory per budgeted item. A single 64-bit hash per operation is split
//! into two 32-bit halves and expanded into `k` probe positions by double
//! hashing, so swapping the hash algorithm changes false-positive statistics
//! but never correctness.
//!
//! ```
//! use bloom64::{BloomFilter, Fnv1aHash};
//!
//! let mut filter = BloomFilter::new(Box::new(Fnv1aHash), 1000, 8).unwrap();
//! filter.insert("foo");
//!
//! assert!(filter.contains("foo"));
//! ```

pub mod bloom;
pub mod hash;

pub use bloom::{BloomFilter, FilterStats};
pub use hash::{Fnv1aHash, Hash64, XxHash};

/// Common error types for the library
#[derive(Debug, Clone)]
pub enum BloomError {
    /// Construction-time sizing failure: non-positive parameters or a bit
    /// array too large to address. Not recoverable; reconstruct with valid
    /// parameters.
    InvalidConfiguration(String),
    /// Per-call failure to turn an item into bytes. Local to the call;
    /// filter state is unaffected.
    InvalidInput(String),
}

impl std::fmt::Display for BloomError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BloomError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            BloomError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for BloomError {}

pub type Result<T> = std::result::Result<T, BloomError>;
