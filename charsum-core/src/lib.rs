//! Character-sum hash table
//!
//! Core library providing:
//! - Additive character-sum hashing over UTF-16 code units
//! - Forward-only linear probing (no wraparound)
//! - Growth with full re-insertion when a probe runs off the end
//! - Slot-by-slot dump of the table contents

pub mod error;
pub mod hash;
pub mod logger;
pub mod slot;
pub mod table;

pub use error::{Result, TableError};
pub use slot::Slot;
pub use table::{CharSumTable, DEFAULT_CAPACITY};
