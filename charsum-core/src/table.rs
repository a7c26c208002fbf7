//! Character-sum hash table
//!
//! Provides:
//! - Additive character-sum hashing of string keys
//! - Forward linear probing with no wraparound
//! - Growth on probe exhaustion, with every pair re-inserted
//! - Duplicate-tolerant insertion (first match wins on lookup)
//!
//! The table is single-threaded. Mutation takes `&mut self` and there is no
//! internal locking; share it across threads only behind external
//! synchronization.

use std::collections::VecDeque;
use std::fmt::Write;

use log::{debug, trace};

use crate::error::{Result, TableError};
use crate::hash::{char_sum, home_index};
use crate::slot::Slot;

/// Capacity used by `CharSumTable::default()`
pub const DEFAULT_CAPACITY: usize = 16;

/// Fixed-capacity string table that grows when probing runs off the end
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharSumTable {
    /// Backing storage; its length is the capacity and never reaches 0
    slots: Vec<Slot>,
}

impl CharSumTable {
    /// Create a table with `capacity` empty slots
    ///
    /// # Errors
    /// `TableError::ZeroCapacity` when `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }

        Ok(CharSumTable {
            slots: vec![Slot::Empty; capacity],
        })
    }

    /// Character-sum hash of `key`
    pub fn hash(&self, key: &str) -> u64 {
        char_sum(key)
    }

    /// Whether the home index of `key` is already occupied
    ///
    /// Checks the computed slot only; the occupant may hold any key.
    pub fn collides(&self, key: &str) -> bool {
        self.slots[self.home(key)].is_occupied()
    }

    /// Insert a pair, growing the table until it fits
    ///
    /// An existing pair with the same key is left in place; the new pair
    /// lands in a later slot and is shadowed on lookup.
    pub fn insert(&mut self, value: impl Into<String>, key: impl Into<String>) {
        let mut pending = VecDeque::from([(key.into(), value.into())]);
        self.place_all(&mut pending);
    }

    /// Grow by `increment` slots and re-insert every pair in slot order
    ///
    /// Re-insertion uses the normal placement rules, so it may grow the
    /// table further. `increment == 0` rebuilds at the current capacity.
    ///
    /// # Errors
    /// `TableError::CapacityOverflow` when the new capacity overflows `usize`.
    pub fn resize(&mut self, increment: usize) -> Result<()> {
        let capacity = self.capacity();
        let new_capacity = capacity
            .checked_add(increment)
            .ok_or(TableError::CapacityOverflow {
                capacity,
                increment,
            })?;

        let mut pending: VecDeque<_> = self.rebuild(new_capacity).into();
        self.place_all(&mut pending);
        Ok(())
    }

    /// Value of the first pair stored under `key`
    ///
    /// Scans forward from the home index. An empty slot ends the probe,
    /// since placement never skips one.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let home = self.home(key);

        for slot in &self.slots[home..] {
            match slot {
                Slot::Occupied { key: stored, value } if stored == key => {
                    return Some(value.as_str());
                }
                Slot::Occupied { .. } => {}
                Slot::Empty => return None,
            }
        }

        None
    }

    /// Render every slot in index order, numbered from 1
    pub fn dump(&self) -> String {
        let mut contents = String::new();
        for (index, slot) in self.slots.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = writeln!(contents, "Hash #{}", index + 1);
            let _ = writeln!(contents, "{}", slot);
        }
        contents
    }

    /// Print the dump to stdout and return it
    pub fn display(&self) -> String {
        let contents = self.dump();
        println!("{}", contents);
        contents
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots, duplicates included
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Slot at `index`, if in range
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    #[inline(always)]
    fn home(&self, key: &str) -> usize {
        home_index(char_sum(key), self.slots.len())
    }

    /// First empty slot in `home..capacity`
    fn free_slot_from(&self, home: usize) -> Option<usize> {
        self.slots[home..]
            .iter()
            .position(Slot::is_empty)
            .map(|offset| home + offset)
    }

    /// Place queued pairs front to back, growing whenever one does not fit
    ///
    /// On growth the evicted pairs are queued ahead of the pair that failed,
    /// which is the order a recursive re-insert would visit them in.
    fn place_all(&mut self, pending: &mut VecDeque<(String, String)>) {
        while let Some((key, _)) = pending.front() {
            let home = self.home(key);

            match self.free_slot_from(home) {
                Some(index) => {
                    if let Some((key, value)) = pending.pop_front() {
                        trace!("placing {:?} at slot {} (home {})", key, index, home);
                        self.slots[index] = Slot::Occupied { key, value };
                    }
                }
                None => {
                    let capacity = self.capacity();
                    let evicted = self.rebuild(capacity + growth_increment(home, capacity));
                    for pair in evicted.into_iter().rev() {
                        pending.push_front(pair);
                    }
                }
            }
        }
    }

    /// Swap in empty storage of `new_capacity` slots, returning the old pairs
    fn rebuild(&mut self, new_capacity: usize) -> Vec<(String, String)> {
        debug!(
            "growing table from {} to {} slots",
            self.capacity(),
            new_capacity
        );

        let old = std::mem::replace(&mut self.slots, vec![Slot::Empty; new_capacity]);
        old.into_iter().filter_map(|mut slot| slot.take()).collect()
    }
}

impl Default for CharSumTable {
    fn default() -> Self {
        CharSumTable {
            slots: vec![Slot::Empty; DEFAULT_CAPACITY],
        }
    }
}

/// Slots to add when a probe from `home` finds no free slot
fn growth_increment(home: usize, capacity: usize) -> usize {
    if home >= capacity {
        home + 1 - capacity
    } else {
        1
    }
}
