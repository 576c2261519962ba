use log::trace;

use crate::tree::RbTree;
use crate::types::{Color, Direction, NodeId, RbLink, RbNode};
use crate::util::{child_direction, color, get_child, get_p, is_red, set_child, set_color};

use super::rotate::rotate;

/// Links `node` as the `dir` child of `parent` and restores the red-black
/// invariants.
///
/// `parent == None` makes `node` the root of an empty tree. The engine does
/// no key comparison: the caller picks `parent` and `dir` from its own
/// ordering, and that placement is what in-order traversal reports.
///
/// Panics if `parent` is `None` on a non-empty tree, or if the `dir` slot of
/// `parent` is already taken.
pub fn insert<N: RbNode>(
    tree: &mut RbTree,
    arena: &mut [N],
    node: NodeId,
    parent: Option<NodeId>,
    dir: Direction,
) {
    *arena[node as usize].link_mut() = RbLink {
        color: Color::Red,
        parent,
        child: [None, None],
    };

    let Some(parent) = parent else {
        assert!(
            tree.root.is_none(),
            "insert of {node} without a parent into a non-empty tree"
        );
        set_color(arena, node, Color::Black);
        tree.root = Some(node);
        return;
    };

    assert!(
        get_child(arena, parent, dir).is_none(),
        "insert of {node}: {dir:?} slot of {parent} is occupied"
    );
    set_child(arena, parent, dir, Some(node));
    rebalance(tree, arena, node, parent);
}

/// Bottom-up fixup after linking the red node `node` under `parent`.
fn rebalance<N: RbNode>(tree: &mut RbTree, arena: &mut [N], mut node: NodeId, mut parent: NodeId) {
    loop {
        if color(arena, parent) == Color::Black {
            return;
        }
        let Some(g) = get_p(arena, parent) else {
            trace!("insert: red root {parent} painted black");
            set_color(arena, parent, Color::Black);
            return;
        };

        let side = child_direction(arena, g, parent);
        let uncle = get_child(arena, g, side.opposite());
        if !is_red(arena, uncle) {
            if get_child(arena, parent, side.opposite()) == Some(node) {
                trace!("insert: inner child {node}, rotating {side:?} at {parent}");
                parent = rotate(tree, arena, parent, side);
            }
            trace!("insert: rotating {:?} at grandparent {g}", side.opposite());
            rotate(tree, arena, g, side.opposite());
            set_color(arena, parent, Color::Black);
            set_color(arena, g, Color::Red);
            return;
        }

        trace!("insert: red uncle under {g}, recoloring");
        set_color(arena, parent, Color::Black);
        if let Some(u) = uncle {
            set_color(arena, u, Color::Black);
        }
        set_color(arena, g, Color::Red);

        node = g;
        match get_p(arena, node) {
            Some(p) => parent = p,
            None => {
                set_color(arena, node, Color::Black);
                return;
            }
        }
    }
}
