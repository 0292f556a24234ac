use std::fmt::{Display, Formatter, Result};

use itertools::Itertools;

use crate::{
    index::{equivalence_hash, root_hashkey},
    tree::NodeId,
    types::{Diffset, HashKey, Itemset, Support, Tid},
};

/// An element of the search tree.
///
/// Support and hashkey are derived once from the parent at construction and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    itemset: Itemset,
    diffset: Diffset,
    support: Support,
    hashkey: HashKey,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// The synthetic root: empty itemset, every transaction.
    pub fn root(transaction_count: usize) -> Self {
        Self {
            itemset: Itemset::new(),
            diffset: Diffset::new(),
            support: transaction_count,
            hashkey: root_hashkey(transaction_count),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Builds a node below `parent` (stored at `parent_id`).
    ///
    /// `diffset` must be a subset of the parent's tidset.
    pub fn new(itemset: Itemset, diffset: Diffset, parent_id: NodeId, parent: &Node) -> Self {
        let support = parent.support - diffset.len();
        let hashkey = equivalence_hash(&diffset, parent.hashkey);
        Self {
            itemset,
            diffset,
            support,
            hashkey,
            parent: Some(parent_id),
            children: Vec::new(),
        }
    }

    pub fn itemset(&self) -> &Itemset {
        &self.itemset
    }

    pub fn diffset(&self) -> &Diffset {
        &self.diffset
    }

    pub fn support(&self) -> Support {
        self.support
    }

    pub fn hashkey(&self) -> HashKey {
        self.hashkey
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children, ascending by support.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_null(&self) -> bool {
        self.diffset.is_empty() || self.itemset.is_empty()
    }

    /// Number of tids in `other` missing from this node's diffset.
    pub fn mistakes(&self, other: &[Tid]) -> usize {
        other
            .iter()
            .filter(|&tid| self.diffset.binary_search(tid).is_err())
            .count()
    }

    /// Same diffset, compared through `mistakes` in both directions.
    pub fn equals(&self, other: &Node) -> bool {
        self.mistakes(&other.diffset) == 0 && other.mistakes(&self.diffset) == 0
    }

    /// This node's diffset is strictly contained in `other`'s, i.e. it
    /// occurs in a strict superset of `other`'s transactions.
    pub fn is_superset_of(&self, other: &Node) -> bool {
        other.mistakes(&self.diffset) == 0 && self.mistakes(&other.diffset) > 0
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Node: Itemset: ")?;
        if !self.itemset.is_empty() {
            write!(f, "({})", self.itemset.iter().join(" "))?;
        }
        write!(f, " Diffset: ")?;
        if !self.diffset.is_empty() {
            write!(f, "<{}>", self.diffset.iter().join(","))?;
        }
        if !self.itemset.is_empty() {
            write!(f, " Sup: {} Hashkey: {}", self.support, self.hashkey)?;
        }
        Ok(())
    }
}
