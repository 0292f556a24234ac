use std::collections::BTreeMap;

use bitvec::prelude::*;
use tracing::debug;

use crate::types::{Diffset, Item, ItemDiffsets, Support, Tid, Transaction};

/// Per-item diffsets against the synthetic root, whose tidset is `1..=N`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionIndex {
    pub transaction_count: usize,
    pub diffsets: ItemDiffsets,
}

impl TransactionIndex {
    pub fn support_of(&self, diffset: &[Tid]) -> Support {
        self.transaction_count - diffset.len()
    }

    /// Items reaching `min_sup`, in ascending item order.
    pub fn frequent_items(&self, min_sup: Support) -> impl Iterator<Item = (Item, &Diffset)> + '_ {
        self.diffsets
            .iter()
            .filter(move |(_, diffset)| self.support_of(diffset) >= min_sup)
            .map(|(&item, diffset)| (item, diffset))
    }
}

/// Builds the diffset of every item: the tids of the transactions it is
/// absent from.
pub fn index_transactions(database: &[Transaction]) -> TransactionIndex {
    let transaction_count = database.len();
    let mut occurrences: BTreeMap<Item, BitVec> = BTreeMap::new();

    for (position, transaction) in database.iter().enumerate() {
        for &item in transaction {
            occurrences
                .entry(item)
                .or_insert_with(|| BitVec::repeat(false, transaction_count))
                .set(position, true);
        }
    }

    let diffsets: ItemDiffsets = occurrences
        .into_iter()
        .map(|(item, present)| (item, present.iter_zeros().map(|position| position + 1).collect()))
        .collect();

    debug!(
        transactions = transaction_count,
        items = diffsets.len(),
        "transactions indexed"
    );

    TransactionIndex {
        transaction_count,
        diffsets,
    }
}
