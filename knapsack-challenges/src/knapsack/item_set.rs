use serde::{Deserialize, Serialize};

/// A candidate knapsack: ascending item indices without duplicates.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct ItemSet {
    items: Vec<usize>,
}

impl ItemSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Bit `i` of `mask` selects item `i`. Bits at or above `num_items` are ignored.
    pub fn from_mask(mask: u64, num_items: usize) -> Self {
        let items = (0..num_items.min(64))
            .filter(|&i| mask & (1u64 << i) != 0)
            .collect();
        Self { items }
    }

    pub fn indices(&self) -> &[usize] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    pub fn total_weight(&self, weights: &[i64]) -> i128 {
        sum_over(&self.items, weights)
    }

    pub fn total_value(&self, values: &[i64]) -> i128 {
        sum_over(&self.items, values)
    }
}

// Widened so no in-memory selection of i64 amounts can overflow.
fn sum_over(items: &[usize], amounts: &[i64]) -> i128 {
    items.iter().map(|&i| amounts[i] as i128).sum()
}

impl From<Vec<usize>> for ItemSet {
    fn from(mut items: Vec<usize>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }
}

impl From<ItemSet> for Vec<usize> {
    fn from(item_set: ItemSet) -> Self {
        item_set.items
    }
}

impl FromIterator<usize> for ItemSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
