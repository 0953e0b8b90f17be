use bintree::BinaryTree;

use std::collections::HashSet;

use crate::Op;

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinaryTree::new();
    let mut model: Vec<i8> = Vec::new();

    for op in &ops {
        match *op {
            Op::Add(x) => {
                tree.add(x);
                model.push(x);
            }
            Op::Remove(x) => {
                let in_model = match model.iter().position(|&m| m == x) {
                    Some(pos) => {
                        model.swap_remove(pos);
                        true
                    }
                    None => false,
                };
                assert_eq!(tree.remove(&x), in_model);
            }
        }
    }

    // The tree holds exactly the model multiset, in some shape.
    let mut inorder = Vec::new();
    tree.inorder_traverse(|&x| inorder.push(x));
    inorder.sort_unstable();
    model.sort_unstable();
    inorder == model
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.add(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = BinaryTree::new();
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
fn height_stays_heuristically_low(xs: Vec<i8>) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.add(*x);
    }

    // Generous multiplier over ceil(lg(n + 1)): the heuristic promises
    // no strict bound.
    let log = (usize::BITS - (xs.len() + 1).leading_zeros()) as usize;
    tree.height() <= 3 * log.max(1)
}
