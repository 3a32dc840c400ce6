use ordered_tree::{Order, OrderedTree};

use std::collections::{BTreeSet, HashSet};

/// Builds a tree by inserting the values in the given order.
fn build(xs: &[i8]) -> OrderedTree<i8> {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let values = tree.in_order();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn in_order_matches_sorted_dedup(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    tree.in_order() == expected && tree.len() == expected.len()
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let len = tree.len();
    let pre = tree.pre_order();

    let any_inserted = xs.iter().any(|x| tree.insert(*x));

    !any_inserted && tree.len() == len && tree.pre_order() == pre
}

#[quickcheck]
fn every_order_visits_every_value(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let expected: BTreeSet<_> = xs.into_iter().collect();

    [Order::Pre, Order::In, Order::Post].iter().all(|order| {
        let visited: Vec<_> = tree.traverse(*order).copied().collect();
        visited.len() == tree.len() && visited.into_iter().collect::<BTreeSet<_>>() == expected
    })
}

#[quickcheck]
fn pre_order_rebuilds_the_same_tree(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let rebuilt = build(&tree.pre_order());

    rebuilt.pre_order() == tree.pre_order() && rebuilt.post_order() == tree.post_order()
}

#[quickcheck]
fn first_value_is_root_in_pre_order_and_last_in_post_order(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    match xs.first() {
        Some(root) => {
            tree.pre_order_iter().next() == Some(root) && tree.post_order_iter().last() == Some(root)
        }
        None => tree.pre_order().is_empty() && tree.post_order().is_empty(),
    }
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for remove in &removes {
        let before: BTreeSet<_> = tree.iter().copied().collect();
        let removed = tree.remove(remove);
        let after: BTreeSet<_> = tree.iter().copied().collect();

        if removed != before.contains(remove) || !after.is_subset(&before) {
            return false;
        }
        if tree.len() != tree.in_order().len() {
            return false;
        }
    }

    removes.iter().all(|x| !tree.contains(x))
}

#[quickcheck]
fn removing_the_root_empties_the_tree(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);

    match xs.first() {
        Some(root) => tree.remove(root) && tree.is_empty() && tree.in_order().is_empty(),
        None => !tree.remove(&0) && tree.is_empty(),
    }
}

#[quickcheck]
fn min_and_max_bound_the_values(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}
