use knapsack_challenges::knapsack::ItemSet;
use std::iter::FusedIterator;

/// Lazily walks all `2^n` subsets of `0..n` in bit-mask order: the empty set
/// first, then `{0}`, `{1}`, `{0, 1}`, `{2}`, ... and the full set last.
///
/// The mask is a little-endian counter over 64-bit words, so `n` is not
/// bounded by the width of a single integer.
#[derive(Debug, Clone)]
pub struct PowerSet {
    num_items: usize,
    counter: Vec<u64>,
    exhausted: bool,
}

pub fn power_set(num_items: usize) -> PowerSet {
    PowerSet::new(num_items)
}

impl PowerSet {
    pub fn new(num_items: usize) -> Self {
        Self {
            num_items,
            counter: vec![0; num_items.div_ceil(64)],
            exhausted: false,
        }
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// `2^n`, or `None` when that does not fit in a `u128`.
    pub fn num_subsets(&self) -> Option<u128> {
        u32::try_from(self.num_items)
            .ok()
            .and_then(|shift| 1u128.checked_shl(shift))
    }

    pub fn restart(&mut self) {
        self.counter.iter_mut().for_each(|word| *word = 0);
        self.exhausted = false;
    }

    fn current(&self) -> ItemSet {
        (0..self.num_items)
            .filter(|&i| self.counter[i / 64] & (1u64 << (i % 64)) != 0)
            .collect()
    }

    fn advance(&mut self) {
        for (w, word) in self.counter.iter_mut().enumerate() {
            let bits = (self.num_items - w * 64).min(64);
            let limit = if bits == 64 {
                u64::MAX
            } else {
                (1u64 << bits) - 1
            };
            if *word < limit {
                *word += 1;
                return;
            }
            *word = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for PowerSet {
    type Item = ItemSet;

    fn next(&mut self) -> Option<ItemSet> {
        if self.exhausted {
            return None;
        }
        let subset = self.current();
        self.advance();
        Some(subset)
    }
}

impl FusedIterator for PowerSet {}
