use std::collections::BTreeMap;

pub type Item = usize;
pub type Itemset = Vec<Item>;

/// Transaction id, 1-based.
pub type Tid = usize;
pub type Tidset = Vec<Tid>;
pub type Diffset = Vec<Tid>;

pub type Support = usize;
pub type HashKey = i64;

pub type Transaction = Itemset;
pub type Database = Vec<Transaction>;

/// Diffset of every item against the full transaction universe.
pub type ItemDiffsets = BTreeMap<Item, Diffset>;
