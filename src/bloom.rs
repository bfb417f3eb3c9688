//! Standard Bloom filter implementation
//!
//! A space-efficient probabilistic data structure for membership testing.

use crate::{hash::Hash64, BloomError, Result};
use bit_vec::BitVec;

/// A Bloom filter over a pluggable 64-bit hash function.
///
/// Sized at construction from `(max_items, bits_per_item)` and never
/// resized. Bits only ever transition from 0 to 1, so `contains` never
/// returns a false negative and a `true` result is monotonic for the
/// lifetime of the filter. There is no delete operation.
///
/// A single logical owner is assumed. Concurrent read-only queries are
/// safe; concurrent inserts need an external lock since setting a bit in
/// the packed array is not atomic.
pub struct BloomFilter {
    /// Bit array storing the filter data, `max_items * bits_per_item` bits
    bits: BitVec,
    /// Number of probe positions per operation (k)
    num_hashes: usize,
    /// Hash function supplying one 64-bit hash per operation
    hash: Box<dyn Hash64>,
    /// Number of insert calls (for statistics)
    count: usize,
}

impl BloomFilter {
    /// Create a new Bloom filter.
    ///
    /// # Arguments
    /// * `hash` - 64-bit hash function used to derive probe positions
    /// * `max_items` - Expected/maximum number of distinct items budgeted for
    /// * `bits_per_item` - Space/accuracy knob; higher means fewer false positives
    ///
    /// The bit array holds `max_items * bits_per_item` bits and the probe
    /// count is `round(bits_per_item * ln 2)`, clamped to at least 1, which
    /// approximately minimizes the false-positive rate for the budget.
    pub fn new(hash: Box<dyn Hash64>, max_items: usize, bits_per_item: usize) -> Result<Self> {
        if max_items == 0 {
            return Err(BloomError::InvalidConfiguration(
                "max_items must be > 0".to_string(),
            ));
        }
        if bits_per_item == 0 {
            return Err(BloomError::InvalidConfiguration(
                "bits_per_item must be > 0".to_string(),
            ));
        }

        let num_bits = max_items.checked_mul(bits_per_item).ok_or_else(|| {
            BloomError::InvalidConfiguration(format!(
                "bit array of {} x {} bits overflows the addressable size",
                max_items, bits_per_item
            ))
        })?;

        let num_hashes = ((bits_per_item as f64) * std::f64::consts::LN_2).round() as usize;

        Ok(BloomFilter {
            bits: BitVec::from_elem(num_bits, false),
            num_hashes: num_hashes.max(1),
            hash,
            count: 0,
        })
    }

    /// Insert an item into the filter.
    ///
    /// Accepts anything viewable as bytes; text goes in as its UTF-8
    /// encoding. Idempotent: re-inserting an item leaves the bit array
    /// unchanged.
    pub fn insert(&mut self, item: impl AsRef<[u8]>) {
        let num_bits = self.bits.len() as u64;
        let (h1, h2) = self.split_hash(item.as_ref());

        for i in 0..self.num_hashes as u64 {
            let index = h1.wrapping_add(i.wrapping_mul(h2)) % num_bits;
            self.bits.set(index as usize, true);
        }

        self.count += 1;
    }

    /// Check if an item might be in the filter.
    ///
    /// Returns `false` only if the item was definitely never inserted.
    /// Returns `true` if the item was inserted, or with probability around
    /// `0.62^bits_per_item` for an item that was not (a false positive).
    /// Never mutates the filter.
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        let num_bits = self.bits.len() as u64;
        let (h1, h2) = self.split_hash(item.as_ref());

        for i in 0..self.num_hashes as u64 {
            let index = h1.wrapping_add(i.wrapping_mul(h2)) % num_bits;
            if !self.bits.get(index as usize).unwrap_or(false) {
                return false;
            }
        }

        true
    }

    /// Split one 64-bit hash into the two 32-bit halves used for double
    /// hashing: probe `i` lands at `(h1 + i * h2) mod num_bits`.
    fn split_hash(&self, bytes: &[u8]) -> (u64, u64) {
        let h = self.hash.hash(bytes);
        (h >> 32, h & 0xffff_ffff)
    }

    /// Get the current load factor (fraction of bits set)
    pub fn load_factor(&self) -> f64 {
        let set_bits = self.bits.iter().filter(|&bit| bit).count();
        set_bits as f64 / self.bits.len() as f64
    }

    /// Get the estimated false positive rate
    pub fn estimated_fpr(&self) -> f64 {
        let load = self.load_factor();
        load.powi(self.num_hashes as i32)
    }

    /// Get statistics about the filter
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            num_bits: self.bits.len(),
            num_hashes: self.num_hashes,
            items_inserted: self.count,
            hash_name: self.hash.name(),
            load_factor: self.load_factor(),
            estimated_fpr: self.estimated_fpr(),
        }
    }

    /// Get the number of insert calls made
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the filter has had no insertions
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the size of the bit array in bits (m)
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    /// Get the number of probe positions per operation (k)
    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Get the name of the configured hash function
    pub fn hash_name(&self) -> String {
        self.hash.name()
    }

    /// Copy out the packed bit array.
    ///
    /// Bits are packed most-significant-bit first within each byte: bit 0
    /// of the filter is the high bit of byte 0. Callers that want
    /// persistence can store this alongside `(max_items, bits_per_item,
    /// hash_name)`; the filter itself defines no file format.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits.to_bytes()
    }
}

/// Statistics about a Bloom filter
#[derive(Debug, Clone)]
pub struct FilterStats {
    pub num_bits: usize,
    pub num_hashes: usize,
    pub items_inserted: usize,
    pub hash_name: String,
    pub load_factor: f64,
    pub estimated_fpr: f64,
}

impl std::fmt::Display for FilterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter Stats:\n\
             - Bits: {}\n\
             - Hash probes: {}\n\
             - Hash function: {}\n\
             - Items inserted: {}\n\
             - Load factor: {:.3}\n\
             - Estimated FPR: {:.6}",
            self.num_bits,
            self.num_hashes,
            self.hash_name,
            self.items_inserted,
            self.load_factor,
            self.estimated_fpr
        )
    }
}
