//! Hash functions for Bloom filters
//!
//! Defines the 64-bit hash contract the filter probes through, plus two
//! reference implementations backed by the `fnv` and `twox-hash` crates.

use std::hash::Hasher;

use fnv::FnvHasher;
use twox_hash::XxHash64;

/// Trait for 64-bit hash functions used in Bloom filters.
///
/// Implementations must be deterministic: the same bytes produce the same
/// value across calls and process runs. Good avalanche behavior keeps the
/// filter's false-positive rate close to its configured target, but any
/// implementation preserves correctness (no false negatives).
pub trait Hash64: Send + Sync {
    /// Hash an arbitrary byte sequence to a 64-bit value
    fn hash(&self, bytes: &[u8]) -> u64;

    /// Get a name/identifier for this hash function, for diagnostics only
    fn name(&self) -> String;
}

/// FNV-1a 64-bit hash, via the `fnv` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1aHash;

impl Hash64 for Fnv1aHash {
    fn hash(&self, bytes: &[u8]) -> u64 {
        let mut hasher = FnvHasher::default();
        hasher.write(bytes);
        hasher.finish()
    }

    fn name(&self) -> String {
        "fnv1a-64".to_string()
    }
}

/// XXH64 hash with a fixed seed, via the `twox-hash` crate
#[derive(Debug, Clone, Copy)]
pub struct XxHash {
    seed: u64,
}

impl XxHash {
    /// Create an XXH64 hash function with the given seed
    pub fn with_seed(seed: u64) -> Self {
        XxHash { seed }
    }
}

impl Default for XxHash {
    fn default() -> Self {
        XxHash { seed: 0 }
    }
}

impl Hash64 for XxHash {
    fn hash(&self, bytes: &[u8]) -> u64 {
        let mut hasher = XxHash64::with_seed(self.seed);
        hasher.write(bytes);
        hasher.finish()
    }

    fn name(&self) -> String {
        format!("xxh64-{}", self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv_deterministic() {
        let hasher = Fnv1aHash;

        let a = hasher.hash(b"hello");
        let b = hasher.hash(b"hello");
        assert_eq!(a, b);

        // Known FNV-1a 64 value for the empty input (the offset basis)
        assert_eq!(hasher.hash(b""), 0xcbf29ce484222325);
    }

    #[test]
    fn test_xxh_deterministic() {
        let hasher = XxHash::default();

        let a = hasher.hash(b"hello");
        let b = hasher.hash(b"hello");
        assert_eq!(a, b);

        // Two instances with the same seed agree
        let other = XxHash::with_seed(0);
        assert_eq!(hasher.hash(b"hello"), other.hash(b"hello"));
    }

    #[test]
    fn test_seed_changes_output() {
        let a = XxHash::with_seed(1).hash(b"hello");
        let b = XxHash::with_seed(2).hash(b"hello");
        assert_ne!(a, b);
    }

    #[test]
    fn test_implementations_diverge() {
        // Different algorithms should disagree on essentially all inputs
        let fnv = Fnv1aHash;
        let xxh = XxHash::default();

        let inputs: [&[u8]; 4] = [b"", b"a", b"hello", b"test__42"];
        let diverging = inputs
            .iter()
            .filter(|input| fnv.hash(input) != xxh.hash(input))
            .count();
        assert!(diverging >= 3);
    }

    #[test]
    fn test_names() {
        assert_eq!(Fnv1aHash.name(), "fnv1a-64");
        assert_eq!(XxHash::default().name(), "xxh64-0");
        assert_eq!(XxHash::with_seed(7).name(), "xxh64-7");
    }
}
