use knapsack_challenges::knapsack::ItemSet;

pub fn feasible_subsets<'a, I>(
    subsets: I,
    weights: &'a [i64],
    capacity: i64,
) -> impl Iterator<Item = ItemSet> + 'a
where
    I: IntoIterator<Item = ItemSet>,
    I::IntoIter: 'a,
{
    subsets
        .into_iter()
        .filter(move |subset| subset.total_weight(weights) <= capacity as i128)
}

/// Running maximum over subset values that keeps every subset tied at the
/// maximum, in the order they were recorded.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    max_value: Option<i128>,
    tied: Vec<ItemSet>,
}

impl Tally {
    pub fn record(mut self, subset: ItemSet, value: i128) -> Self {
        match self.max_value {
            Some(max_value) if value < max_value => {}
            Some(max_value) if value == max_value => self.tied.push(subset),
            _ => {
                self.max_value = Some(value);
                self.tied = vec![subset];
            }
        }
        self
    }

    pub fn max_value(&self) -> Option<i128> {
        self.max_value
    }

    pub fn tied(&self) -> &[ItemSet] {
        &self.tied
    }

    pub fn into_tied(self) -> Vec<ItemSet> {
        self.tied
    }
}

/// Every subset whose total value equals the maximum over `subsets`.
pub fn most_valuable<I>(subsets: I, values: &[i64]) -> Vec<ItemSet>
where
    I: IntoIterator<Item = ItemSet>,
{
    subsets
        .into_iter()
        .fold(Tally::default(), |tally, subset| {
            let value = subset.total_value(values);
            tally.record(subset, value)
        })
        .into_tied()
}

/// The first candidate with the smallest total weight.
pub fn lightest<I>(candidates: I, weights: &[i64]) -> Option<ItemSet>
where
    I: IntoIterator<Item = ItemSet>,
{
    candidates
        .into_iter()
        .min_by_key(|candidate| candidate.total_weight(weights))
}
