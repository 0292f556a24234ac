use tracing::{debug, trace};

use crate::{
    generators::candidate::get_next_generator,
    index::EquivalenceIndex,
    indexer::index_transactions,
    tree::{Node, NodeId, SearchTree},
    types::{Support, Transaction},
};

/// Mines the frequent generators of `database` with support of at least
/// `min_sup`.
///
/// Transactions must hold ascending, duplicate-free items; the `n`-th
/// transaction has tid `n + 1`.
pub fn talky_g(database: &[Transaction], min_sup: Support) -> EquivalenceIndex {
    let (_, index) = mine(database, min_sup);
    index
}

/// Same as [`talky_g`], also returning the search tree that was built.
pub fn mine(database: &[Transaction], min_sup: Support) -> (SearchTree, EquivalenceIndex) {
    let transactions = index_transactions(database);
    let mut tree = SearchTree::new(transactions.transaction_count);

    for (item, diffset) in transactions.frequent_items(min_sup) {
        let node = Node::new(vec![item], diffset.clone(), NodeId::ROOT, tree.root());
        tree.add_child(NodeId::ROOT, node);
    }
    debug!(
        frequent_items = tree.children(NodeId::ROOT).len(),
        min_sup, "root seeded"
    );

    let mut index = EquivalenceIndex::new();
    commit_and_extend(&mut tree, NodeId::ROOT, &mut index, min_sup);

    debug!(
        generators = index.len(),
        buckets = index.bucket_count(),
        nodes = tree.node_count(),
        "search finished"
    );
    (tree, index)
}

/// A child of `parent`, counted from the highest-support end of its
/// children.
#[derive(Debug, Clone, Copy)]
struct Visit {
    parent: NodeId,
    rank: usize,
}

impl Visit {
    fn node(&self, tree: &SearchTree) -> NodeId {
        let siblings = tree.children(self.parent);
        siblings[siblings.len() - 1 - self.rank]
    }
}

/// Commits the children of `start` highest support first; each child is
/// extended and its own subtree finished before the next one is committed.
///
/// Runs depth first on an explicit stack, in the order a recursive descent
/// would take.
fn commit_and_extend(
    tree: &mut SearchTree,
    start: NodeId,
    index: &mut EquivalenceIndex,
    min_sup: Support,
) {
    let mut stack = Vec::new();
    push_children(&mut stack, tree, start);

    while let Some(visit) = stack.pop() {
        let curr = visit.node(tree);
        index.save(&tree[curr], &tree[visit.parent]);
        extend(tree, visit, index, min_sup);
        push_children(&mut stack, tree, curr);
    }
}

fn push_children(stack: &mut Vec<Visit>, tree: &SearchTree, parent: NodeId) {
    let count = tree.children(parent).len();
    stack.extend((0..count).rev().map(|rank| Visit { parent, rank }));
}

/// Joins the visited node with every sibling committed before it, nearest
/// first, attaching the accepted candidates as its children.
fn extend(tree: &mut SearchTree, visit: Visit, index: &EquivalenceIndex, min_sup: Support) {
    if visit.rank == 0 {
        return;
    }
    let curr = visit.node(tree);
    let siblings = tree.children(visit.parent);
    let others = siblings[siblings.len() - visit.rank..].to_vec();

    for other in others {
        if let Some(generator) = get_next_generator(tree, curr, other, index, min_sup) {
            if !generator.is_null() {
                trace!(itemset = ?generator.itemset(), support = generator.support(), "accepted");
                tree.add_child(curr, generator);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        index::Generator,
        setops::{diffset_difference, includes, itemset_union},
    };
    use maplit::hashset;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    // a = 1, b = 2, c = 3
    fn abc_database() -> Vec<Transaction> {
        vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]]
    }

    fn as_pairs(index: &EquivalenceIndex) -> Vec<(Vec<usize>, usize)> {
        index
            .iter()
            .map(|g| (g.itemset.clone(), g.support))
            .collect()
    }

    /// Up to 24 transactions over items `1..=7`.
    fn arb_database() -> impl Strategy<Value = Vec<Transaction>> {
        prop::collection::vec(
            prop::collection::btree_set(1usize..=7, 0..=7)
                .prop_map(|items| items.into_iter().collect()),
            0..24,
        )
    }

    fn brute_force_support(database: &[Transaction], itemset: &[usize]) -> usize {
        database
            .iter()
            .filter(|transaction| includes(transaction.as_slice(), itemset))
            .count()
    }

    #[test]
    fn abc_example_commit_order() {
        let index = talky_g(&abc_database(), 2);

        assert_eq!(
            as_pairs(&index),
            vec![
                (vec![3], 3),
                (vec![2], 3),
                (vec![2, 3], 2),
                (vec![1], 3),
                (vec![1, 3], 2),
                (vec![1, 2], 2),
            ]
        );
    }

    #[test]
    fn abc_example_with_min_sup_one_reaches_triple() {
        let index = talky_g(&abc_database(), 1);

        assert_eq!(index.len(), 7);
        assert_eq!(
            index.iter().last(),
            Some(&Generator {
                itemset: vec![1, 2, 3],
                support: 1
            })
        );
    }

    #[test]
    fn depth_one_keys_use_root_hash() {
        let index = talky_g(&abc_database(), 2);

        let found: HashSet<_> = index
            .equal_range(&[1], 6)
            .map(|g| g.itemset.clone())
            .collect();
        assert_eq!(found, hashset! { vec![3] });
    }

    #[test]
    fn min_sup_above_transaction_count_is_empty() {
        assert!(talky_g(&abc_database(), 5).is_empty());
    }

    #[test]
    fn empty_database_is_empty() {
        assert!(talky_g(&[], 0).is_empty());
        assert!(talky_g(&[], 1).is_empty());
    }

    #[test]
    fn item_in_every_transaction_is_a_depth_one_generator() {
        let database = vec![vec![1, 2], vec![1], vec![1, 2]];
        let index = talky_g(&database, 1);

        assert_eq!(
            as_pairs(&index),
            vec![(vec![1], 3), (vec![2], 2)]
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn repeated_runs_agree(database in arb_database(), min_sup in 1usize..5) {
            prop_assert_eq!(
                as_pairs(&talky_g(&database, min_sup)),
                as_pairs(&talky_g(&database, min_sup))
            );
        }

        #[test]
        fn tree_invariants_on_generated_data(database in arb_database(), min_sup in 1usize..4) {
            let (tree, index) = mine(&database, min_sup);
            prop_assert_eq!(index.len(), tree.node_count() - 1);

            let mut seen = HashSet::new();
            for (id, node) in tree.iter().skip(1) {
                let parent = tree.parent(id).unwrap();
                prop_assert_eq!(node.support(), parent.support() - node.diffset().len());
                prop_assert_eq!(node.support(), brute_force_support(&database, node.itemset()));
                prop_assert!(node.support() >= min_sup);
                prop_assert!(seen.insert(node.itemset().clone()));

                let supports: Vec<_> = node
                    .children()
                    .iter()
                    .map(|&child| tree[child].support())
                    .collect();
                prop_assert!(supports.windows(2).all(|w| w[0] <= w[1]));

                // depth >= 2: parent joined with the sibling carrying the added item
                if let Some(grandparent_id) = parent.parent() {
                    prop_assert!(node.support() < parent.support());

                    let added = diffset_difference(parent.itemset(), node.itemset());
                    prop_assert_eq!(added.len(), 1);
                    let joined = itemset_union(tree[grandparent_id].itemset(), &added);
                    let sibling = tree
                        .children(grandparent_id)
                        .iter()
                        .map(|&sibling| &tree[sibling])
                        .find(|sibling| sibling.itemset() == &joined)
                        .unwrap();
                    prop_assert!(node.support() < sibling.support());
                }
            }
        }

        #[test]
        fn accepted_nodes_have_no_same_support_subset_under_their_key(database in arb_database(), min_sup in 1usize..4) {
            let (tree, index) = mine(&database, min_sup);
            let committed_at: HashMap<&[usize], usize> = index
                .iter()
                .enumerate()
                .map(|(position, generator)| (generator.itemset.as_slice(), position))
                .collect();

            for (id, node) in tree.iter().skip(1) {
                let parent = tree.parent(id).unwrap();
                if parent.parent().is_none() {
                    continue;
                }
                // a child is accepted right after its parent is committed
                let visible = committed_at[parent.itemset().as_slice()];
                let clash = index
                    .equal_range(node.diffset(), node.hashkey())
                    .filter(|generator| committed_at[generator.itemset.as_slice()] <= visible)
                    .find(|generator| {
                        generator.support == node.support()
                            && includes(node.itemset(), &generator.itemset)
                    });
                prop_assert!(clash.is_none(), "{} accepted over {:?}", node, clash);
            }
        }
    }
}
