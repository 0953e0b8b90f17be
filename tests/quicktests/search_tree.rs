use bintree::BinarySearchTree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

fn inorder_vec(tree: &BinarySearchTree<i8>) -> Vec<i8> {
    let mut items = Vec::new();
    tree.inorder_traverse(|&x| items.push(x));
    items
}

/// Applies a set of operations to a tree and a multiset of counts.
/// This way we can ensure that after a random smattering of adds
/// and removes the tree holds exactly the modeled multiset.
fn do_ops(ops: &[Op<i8>], tree: &mut BinarySearchTree<i8>, counts: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match *op {
            Op::Add(x) => {
                tree.add(x);
                *counts.entry(x).or_insert(0) += 1;
            }
            Op::Remove(x) => {
                let in_model = match counts.get_mut(&x) {
                    Some(n) if *n > 0 => {
                        *n -= 1;
                        true
                    }
                    _ => false,
                };
                assert_eq!(tree.remove(&x), in_model);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    counts
        .iter()
        .all(|(x, &n)| tree.contains(x) == (n > 0))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.add(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.add(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.add(*x);
    }
    for delete in &deletes {
        // We may have added the same value multiple times - delete each one.
        while tree.remove(delete) {}
    }

    let deleted: HashSet<_> = deletes.iter().copied().collect();

    deletes.iter().all(|x| !tree.contains(x))
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|x| tree.contains(x))
}

#[quickcheck]
fn inorder_stays_sorted_through_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.add(*x);
    }
    for delete in &deletes {
        tree.remove(delete);
    }

    inorder_vec(&tree).windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn clone_is_unaffected_by_later_mutation(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.add(*x);
    }

    let copy = tree.clone();
    let snapshot = inorder_vec(&copy);

    for delete in &deletes {
        tree.remove(delete);
    }
    tree.add(0);

    inorder_vec(&copy) == snapshot
}
