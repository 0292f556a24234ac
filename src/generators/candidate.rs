use tracing::trace;

use crate::{
    index::{equivalence_hash, EquivalenceIndex},
    setops::{diffset_difference, includes, itemset_union},
    tree::{Node, NodeId, SearchTree},
    types::Support,
};

/// Joins `curr` with its sibling `other` and returns the resulting node if it
/// is a frequent generator not already represented in `index`.
///
/// The returned node is not attached; its parent is `curr`.
pub fn get_next_generator(
    tree: &SearchTree,
    curr: NodeId,
    other: NodeId,
    index: &EquivalenceIndex,
    min_sup: Support,
) -> Option<Node> {
    let curr_node = &tree[curr];
    let other_node = &tree[other];

    let diffset = diffset_difference(curr_node.diffset(), other_node.diffset());
    let support = curr_node.support() - diffset.len();
    if support < min_sup {
        return None;
    }

    let itemset = itemset_union(curr_node.itemset(), other_node.itemset());
    if support == curr_node.support() || support == other_node.support() {
        trace!(?itemset, support, "not minimal");
        return None;
    }

    let candidate = Node::new(itemset, diffset, curr, curr_node);
    if is_subsumed(index, &candidate, curr_node) {
        trace!(itemset = ?candidate.itemset(), support, "subsumed");
        return None;
    }
    Some(candidate)
}

/// `true` if `index` already holds a subset of `candidate`'s itemset with the
/// same support under the candidate's bucket key.
pub fn is_subsumed(index: &EquivalenceIndex, candidate: &Node, parent: &Node) -> bool {
    let hash = equivalence_hash(candidate.diffset(), parent.hashkey());
    index
        .equal_range(candidate.diffset(), hash)
        .any(|generator| {
            generator.support == candidate.support()
                && includes(candidate.itemset(), &generator.itemset)
        })
}
