use std::collections::VecDeque;

use crate::game_state::chess_rules::HISTORY_CAPACITY;

/// Bounded ring of the placement keys of the positions that preceded a
/// `Position` since the last irreversible move, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionHistory {
    keys: VecDeque<u64>,
}

impl PositionHistory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Copy of this ring with `key` appended, dropping the oldest entry once
    /// the capacity is exceeded.
    pub fn with_pushed(&self, key: u64) -> Self {
        let mut keys = VecDeque::with_capacity((self.keys.len() + 1).min(HISTORY_CAPACITY));
        let skip = (self.keys.len() + 1).saturating_sub(HISTORY_CAPACITY);
        keys.extend(self.keys.iter().skip(skip).copied());
        keys.push_back(key);
        Self { keys }
    }

    pub fn occurrences(&self, key: u64) -> usize {
        self.keys.iter().filter(|k| **k == key).count()
    }

    /// Keys oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &u64> {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_never_exceeds_capacity() {
        let mut history = PositionHistory::new();
        for key in 0..(HISTORY_CAPACITY as u64 + 25) {
            history = history.with_pushed(key);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.iter().next().copied(), Some(25));
        assert_eq!(history.occurrences(3), 0);
        assert_eq!(history.occurrences(HISTORY_CAPACITY as u64 + 24), 1);
    }
}
