use rb_forest::{first, last, next, prev, size, Direction, NodeId, RbLink, RbSet, RbTree};

#[test]
fn traversal_next_from_first_visits_all_matrix() {
    let set: RbSet<i32> = [5, 3, 8, 1, 4, 7, 9, 2, 6].into_iter().collect();
    let arena = set.arena();
    let tree = set.tree();

    let mut seen = Vec::new();
    let mut curr = Some(tree.first(arena));
    while let Some(i) = curr {
        seen.push(*set.value(i));
        curr = next(arena, i);
    }
    assert_eq!(seen, (1..=9).collect::<Vec<_>>());
}

#[test]
fn traversal_prev_from_last_visits_all_matrix() {
    let set: RbSet<i32> = (0..50).map(|i| i * 3 % 50).collect();
    let arena = set.arena();
    let tree = set.tree();

    let mut seen = Vec::new();
    let mut curr = Some(tree.last(arena));
    while let Some(i) = curr {
        seen.push(*set.value(i));
        curr = prev(arena, i);
    }
    assert_eq!(seen, (0..50).rev().collect::<Vec<_>>());
}

#[test]
fn traversal_ends_return_none_matrix() {
    let set: RbSet<i32> = (0..10).collect();
    let arena = set.arena();
    assert_eq!(next(arena, set.tree().last(arena)), None);
    assert_eq!(prev(arena, set.tree().first(arena)), None);
    assert_eq!(first(arena, set.tree().root), Some(set.find(&0).unwrap()));
    assert_eq!(last(arena, set.tree().root), Some(set.find(&9).unwrap()));
}

#[test]
fn traversal_subtree_helpers_on_empty_matrix() {
    let arena: Vec<RbLink> = Vec::new();
    assert_eq!(first(&arena, None), None);
    assert_eq!(last(&arena, None), None);
    assert_eq!(size(&arena, None), 0);
    assert_eq!(RbTree::EMPTY.iter(&arena).next(), None);
    assert_eq!(RbTree::EMPTY.height(&arena), 0);
}

#[test]
fn traversal_iterator_both_ends_matrix() {
    let set: RbSet<i32> = (0..7).collect();
    let mut it = set.tree().iter(set.arena());
    let mut front = Vec::new();
    let mut back = Vec::new();
    loop {
        match it.next() {
            Some(i) => front.push(*set.value(i)),
            None => break,
        }
        match it.next_back() {
            Some(i) => back.push(*set.value(i)),
            None => break,
        }
    }
    assert_eq!(front, vec![0, 1, 2, 3]);
    assert_eq!(back, vec![6, 5, 4]);
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);

    let reversed: Vec<i32> = set.iter().rev().copied().collect();
    assert_eq!(reversed, (0..7).rev().collect::<Vec<_>>());
}

#[test]
fn traversal_single_node_matrix() {
    let mut arena = vec![RbLink::new()];
    let mut tree = RbTree::new();
    tree.insert(&mut arena, 0, None, Direction::Right);
    assert_eq!(tree.first(&arena), 0);
    assert_eq!(tree.last(&arena), 0);
    assert_eq!(next(&arena, 0), None);
    assert_eq!(prev(&arena, 0), None);
    assert_eq!(tree.iter(&arena).collect::<Vec<NodeId>>(), vec![0]);
}

#[test]
#[should_panic(expected = "empty tree")]
fn traversal_first_on_empty_tree_panics() {
    let arena: Vec<RbLink> = Vec::new();
    RbTree::EMPTY.first(&arena);
}

#[test]
#[should_panic(expected = "empty tree")]
fn traversal_last_on_empty_tree_panics() {
    let arena: Vec<RbLink> = Vec::new();
    RbTree::EMPTY.last(&arena);
}
