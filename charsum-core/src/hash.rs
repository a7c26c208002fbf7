//! Character-sum hashing
//!
//! The hash of a key is the plain sum of its UTF-16 code units. It is
//! commutative over character order, so anagrams always collide.

/// Sum of the UTF-16 code units of `key`
///
/// Characters outside the Basic Multilingual Plane contribute both of their
/// surrogate units. The empty string hashes to 0.
#[inline]
pub fn char_sum(key: &str) -> u64 {
    key.encode_utf16()
        .fold(0u64, |acc, unit| acc.wrapping_add(u64::from(unit)))
}

/// Home index of a hash in a table of `capacity` slots
///
/// `capacity` must be non-zero; the table guarantees this by construction.
#[inline(always)]
pub fn home_index(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "capacity must be positive");
    (hash % capacity as u64) as usize
}
