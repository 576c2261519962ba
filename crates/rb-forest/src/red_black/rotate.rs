use log::trace;

use crate::tree::RbTree;
use crate::types::{Direction, NodeId, RbNode};
use crate::util::{child_direction, get_child, get_p, set_child, set_p};

/// Rotates about `pivot` towards `dir`.
///
/// The child of `pivot` opposite to `dir` (the sibling) takes `pivot`'s
/// place, `pivot` becomes its `dir` child, and the sibling's former `dir`
/// child moves across to `pivot`. Updates the tree root when `pivot` was the
/// root. Returns the node now at the top of the subtree.
///
/// Panics if `pivot` has no child opposite to `dir`.
pub fn rotate<N: RbNode>(
    tree: &mut RbTree,
    arena: &mut [N],
    pivot: NodeId,
    dir: Direction,
) -> NodeId {
    let g = get_p(arena, pivot);
    let Some(sibling) = get_child(arena, pivot, dir.opposite()) else {
        panic!("rotate {dir:?} at {pivot}: no child on the opposite side");
    };
    let close = get_child(arena, sibling, dir);
    trace!("rotate {dir:?} at {pivot}, promoting {sibling}");

    set_child(arena, pivot, dir.opposite(), close);
    if let Some(close) = close {
        set_p(arena, close, Some(pivot));
    }

    set_child(arena, sibling, dir, Some(pivot));
    set_p(arena, pivot, Some(sibling));

    set_p(arena, sibling, g);
    match g {
        Some(g) => {
            let side = child_direction(arena, g, pivot);
            set_child(arena, g, side, Some(sibling));
        }
        None => tree.root = Some(sibling),
    }
    sibling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, RbLink};
    use crate::util::{first, next};

    fn link(parent: Option<u32>, l: Option<u32>, r: Option<u32>) -> RbLink {
        RbLink {
            color: Color::Black,
            parent,
            child: [l, r],
        }
    }

    fn in_order(arena: &[RbLink], tree: &RbTree) -> Vec<u32> {
        let mut out = Vec::new();
        let mut curr = first(arena, tree.root);
        while let Some(i) = curr {
            out.push(i);
            curr = next(arena, i);
        }
        out
    }

    //      1
    //    /   \
    //   0     3
    //        / \
    //       2   4
    fn right_heavy() -> (RbTree, Vec<RbLink>) {
        let arena = vec![
            link(Some(1), None, None),
            link(None, Some(0), Some(3)),
            link(Some(3), None, None),
            link(Some(1), Some(2), Some(4)),
            link(Some(3), None, None),
        ];
        (RbTree { root: Some(1) }, arena)
    }

    #[test]
    fn rotate_left_at_root_promotes_right_child() {
        let (mut tree, mut arena) = right_heavy();
        let top = rotate(&mut tree, &mut arena, 1, Direction::Left);
        assert_eq!(top, 3);
        assert_eq!(tree.root, Some(3));
        assert_eq!(arena[3], link(None, Some(1), Some(4)));
        assert_eq!(arena[1], link(Some(3), Some(0), Some(2)));
        assert_eq!(arena[2].parent, Some(1));
        assert_eq!(in_order(&arena, &tree), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn rotate_round_trip_restores_shape() {
        let (mut tree, mut arena) = right_heavy();
        let before = arena.clone();
        let top = rotate(&mut tree, &mut arena, 1, Direction::Left);
        rotate(&mut tree, &mut arena, top, Direction::Right);
        assert_eq!(arena, before);
        assert_eq!(tree.root, Some(1));
    }

    #[test]
    fn rotate_below_root_relinks_grandparent() {
        let (mut tree, mut arena) = right_heavy();
        let top = rotate(&mut tree, &mut arena, 3, Direction::Right);
        assert_eq!(top, 2);
        assert_eq!(tree.root, Some(1));
        assert_eq!(arena[1].right(), Some(2));
        assert_eq!(arena[2], link(Some(1), None, Some(3)));
        assert_eq!(arena[3], link(Some(2), None, Some(4)));
        assert_eq!(in_order(&arena, &tree), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "no child on the opposite side")]
    fn rotate_without_sibling_panics() {
        let (mut tree, mut arena) = right_heavy();
        rotate(&mut tree, &mut arena, 0, Direction::Left);
    }
}
