//! The equivalence-class index of accepted generators.

use std::collections::HashMap;

use crate::{
    tree::Node,
    types::{Diffset, HashKey, Itemset, Support, Tid},
};

/// Hashkey of the synthetic root over `transaction_count` transactions.
pub fn root_hashkey(transaction_count: usize) -> HashKey {
    let n = transaction_count as HashKey;
    n.wrapping_mul(n - 1) / 2
}

/// Folds `diffset` into `parent_hash` by subtraction.
///
/// Collisions are expected; lookups always compare the full key.
pub fn equivalence_hash(diffset: &[Tid], parent_hash: HashKey) -> HashKey {
    diffset
        .iter()
        .fold(parent_hash, |hash, &tid| hash.wrapping_sub(tid as HashKey))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub diffset: Diffset,
    pub parent_hash: HashKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generator {
    pub itemset: Itemset,
    pub support: Support,
}

/// Append-only multi-map from `(diffset, parent hashkey)` to generators.
///
/// Iteration yields generators in the order they were committed.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceIndex {
    generators: Vec<Generator>,
    buckets: HashMap<BucketKey, Vec<usize>>,
}

impl EquivalenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `child`, a node attached below `parent`.
    pub fn save(&mut self, child: &Node, parent: &Node) {
        let key = BucketKey {
            diffset: child.diffset().clone(),
            parent_hash: parent.hashkey(),
        };
        self.insert(
            key,
            Generator {
                itemset: child.itemset().clone(),
                support: child.support(),
            },
        );
    }

    pub fn insert(&mut self, key: BucketKey, generator: Generator) {
        self.buckets
            .entry(key)
            .or_default()
            .push(self.generators.len());
        self.generators.push(generator);
    }

    /// Every generator stored under exactly `(diffset, hash)`.
    pub fn equal_range<'a>(
        &'a self,
        diffset: &[Tid],
        hash: HashKey,
    ) -> impl Iterator<Item = &'a Generator> + 'a {
        let key = BucketKey {
            diffset: diffset.to_vec(),
            parent_hash: hash,
        };
        self.buckets
            .get(&key)
            .into_iter()
            .flatten()
            .map(move |&position| &self.generators[position])
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Generator> {
        self.generators.iter()
    }
}

impl<'a> IntoIterator for &'a EquivalenceIndex {
    type Item = &'a Generator;
    type IntoIter = std::slice::Iter<'a, Generator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
