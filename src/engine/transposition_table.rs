//! A transposition table mapping position keys to previously computed scores.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::board::{BEST_BITS, KEY_BITS, MAX_SCORE, MIN_SCORE, SCORE_BITS};

/// The full-period 64-bit LCG multiplier used to spread keys across the table.
const HASH_MULTIPLIER: u64 = 6364136223846793005;

const KEY_MASK: u64 = (1u64 << KEY_BITS) - 1;
const BEST_MASK: u64 = (1u64 << BEST_BITS) - 1;
const SCORE_MASK: u64 = (1u64 << SCORE_BITS) - 1;
const BEST_SHIFT: u32 = KEY_BITS as u32;
const SCORE_SHIFT: u32 = KEY_BITS as u32 + BEST_BITS as u32;
const SCORE_BIAS: i16 = MAX_SCORE as i16 + 1;

/// An entry whose low `KEY_BITS` can never equal a legal position key, since
/// every legal key has its guard-row bits clear. Used to mark the empty
/// board's slot after `clear()` so an uninitialised entry can't be mistaken
/// for a cached (score 0, best 0) result.
const INVALID: u64 = u64::MAX;

/// Errors resizing the transposition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranspositionTableError {
    /// A resize to zero entries was requested.
    SizeTooSmall,
    /// The requested size, rounded up to a power of two, does not fit in a `usize`.
    SizeTooLarge { requested: usize },
}

impl Display for TranspositionTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TranspositionTableError::SizeTooSmall => write!(f, "transposition table size must be at least 1"),
            TranspositionTableError::SizeTooLarge { requested } => {
                write!(f, "requested transposition table size {requested} does not fit in memory")
            }
        }
    }
}

impl Error for TranspositionTableError {}

/// An open-addressed, power-of-two-sized cache of previously computed scores.
///
/// Each slot packs a 64-bit entry: the low `KEY_BITS` hold the full position
/// key, the next `BEST_BITS` hold a candidate best move, and the top
/// `SCORE_BITS` hold the score biased by `MAX_SCORE + 1` so that zero is
/// distinguishable from "never written". Collisions are resolved by
/// always replacing; callers should treat every hit as an upper bound
/// produced by a fail-soft search.
#[derive(Debug)]
pub struct TranspositionTable {
    entries: Vec<u64>,
    /// Right-shift turning a hashed key into an index: `64 - log2(entries.len())`.
    shift: u32,
}

impl TranspositionTable {
    /// A reasonable default size, a few tens of megabytes.
    pub const DEFAULT_SIZE: usize = 1 << 21;

    /// Builds a table sized to `requested_entries`, rounded up to a power of two.
    pub fn new(requested_entries: usize) -> Result<TranspositionTable, TranspositionTableError> {
        let mut table = TranspositionTable { entries: Vec::new(), shift: 64 };
        table.resize(requested_entries)?;
        Ok(table)
    }

    /// Reallocates the table to hold `requested_entries`, rounded up to a
    /// power of two, and clears it.
    pub fn resize(&mut self, requested_entries: usize) -> Result<(), TranspositionTableError> {
        if requested_entries == 0 {
            return Err(TranspositionTableError::SizeTooSmall);
        }
        let size = requested_entries
            .checked_next_power_of_two()
            .ok_or(TranspositionTableError::SizeTooLarge { requested: requested_entries })?;

        self.shift = u64::BITS - size.trailing_zeros();
        self.entries = vec![0u64; size];
        self.clear();
        Ok(())
    }

    /// Zeroes every entry, then plants the INVALID sentinel at the slot the
    /// empty board's key (zero) hashes to.
    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|e| *e = 0);
        let idx = self.index(0);
        self.entries[idx] = INVALID;
    }

    #[inline(always)]
    fn index(&self, key: u64) -> usize {
        (key.wrapping_mul(HASH_MULTIPLIER) >> self.shift) as usize
    }

    /// Issues a hint to prefetch the slot for `key` into cache ahead of a
    /// later `get`/`set`, hiding memory latency during move ordering.
    #[inline(always)]
    pub fn prefetch(&self, key: u64) {
        #[cfg(target_arch = "x86_64")]
        unsafe {
            let idx = self.index(key);
            let ptr = self.entries.as_ptr().add(idx) as *const i8;
            std::arch::x86_64::_mm_prefetch(ptr, std::arch::x86_64::_MM_HINT_T0);
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            let _ = key;
        }
    }

    /// Looks up `key`, returning `(score, best_column)` on a match.
    pub fn get(&self, key: u64) -> Option<(i8, usize)> {
        let idx = self.index(key);
        let packed = self.entries[idx];
        if packed & KEY_MASK != key & KEY_MASK {
            return None;
        }
        let best = ((packed >> BEST_SHIFT) & BEST_MASK) as usize;
        let biased = ((packed >> SCORE_SHIFT) & SCORE_MASK) as i16;
        let score = (biased - SCORE_BIAS) as i8;
        Some((score, best))
    }

    /// Stores `(score, best_column)` for `key`, overwriting whatever was there.
    pub fn set(&mut self, key: u64, score: i8, best: usize) {
        debug_assert!(score >= MIN_SCORE - 1 && score <= MAX_SCORE);
        let idx = self.index(key);
        let biased = (score as i16 + SCORE_BIAS) as u64 & SCORE_MASK;
        let packed = (key & KEY_MASK) | ((best as u64 & BEST_MASK) << BEST_SHIFT) | (biased << SCORE_SHIFT);
        self.entries[idx] = packed;
    }

    /// The number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}
