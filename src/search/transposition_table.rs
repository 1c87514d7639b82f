//! Fixed-size transposition table keyed by Zobrist hash.
//!
//! One slot per masked key. Deeper results displace shallower ones, and slots
//! left untouched for several search generations are reclaimed. The table
//! belongs to one game: the engine clears it whenever an irreversible
//! move resets the no-progress counter.

use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::is_near_mate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    /// Stores refused because the score was mate-distance dependent.
    pub skipped_mate: u64,
}

/// An occupied slot: the entry plus the search generation that last touched it.
#[derive(Debug, Clone, Copy)]
struct Slot {
    entry: TTEntry,
    touched: u8,
}

impl Slot {
    /// Same position: only an equal or deeper result overwrites. A colliding
    /// position wins if this slot went untouched for a few generations or is
    /// not much deeper than the newcomer.
    fn yields_to(&self, incoming: &TTEntry, generation: u8) -> bool {
        if self.entry.key == incoming.key {
            return incoming.depth >= self.entry.depth;
        }
        let idle = generation.wrapping_sub(self.touched);
        idle >= TranspositionTable::STALE_AFTER_GENERATIONS
            || incoming.depth.saturating_add(TranspositionTable::DEPTH_SLACK) >= self.entry.depth
    }
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    slots: Vec<Option<Slot>>,
    /// `slots.len() - 1`; the length is a power of two.
    mask: u64,
    generation: u8,
    stats: TTStats,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new_with_mb(Self::DEFAULT_SIZE_MB)
    }
}

impl TranspositionTable {
    pub const DEFAULT_SIZE_MB: usize = 16;
    const STALE_AFTER_GENERATIONS: u8 = 4;
    const DEPTH_SLACK: u8 = 2;

    /// Largest power-of-two slot count fitting in `size_mb` megabytes.
    pub fn new_with_mb(size_mb: usize) -> Self {
        let budget = size_mb.max(1) * 1024 * 1024;
        let fitting = (budget / std::mem::size_of::<Option<Slot>>().max(1)).max(1);
        let count = 1usize << (usize::BITS - 1 - fitting.leading_zeros());
        Self {
            slots: vec![None; count],
            mask: (count - 1) as u64,
            generation: 0,
            stats: TTStats::default(),
        }
    }

    /// Called once per iterative-deepening iteration.
    #[inline]
    pub fn new_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.generation = 0;
        self.stats = TTStats::default();
        log::trace!("transposition table cleared ({} slots)", self.slots.len());
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    #[inline]
    fn slot_index(&self, key: u64) -> usize {
        (key & self.mask) as usize
    }

    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        self.stats.probes += 1;
        let generation = self.generation;
        let index = self.slot_index(key);
        let slot = self.slots[index].as_mut().filter(|slot| slot.entry.key == key)?;
        slot.touched = generation;
        self.stats.hits += 1;
        Some(slot.entry)
    }

    /// Store `entry`, unless its score is near mate.
    pub fn store(&mut self, entry: TTEntry) {
        if is_near_mate(entry.score) {
            self.stats.skipped_mate += 1;
            return;
        }
        self.stats.stores += 1;
        let generation = self.generation;
        let index = self.slot_index(entry.key);
        let slot = &mut self.slots[index];
        if slot.map_or(true, |held| held.yields_to(&entry, generation)) {
            *slot = Some(Slot {
                entry,
                touched: generation,
            });
        }
    }
}
