use log::{debug, trace};

use crate::tree::RbTree;
use crate::types::{Color, Direction, NodeId, RbLink, RbNode};
use crate::util::{
    child_direction, color, get_child, get_l, get_p, get_r, is_red, last, set_child, set_color,
    set_p, swap_nodes,
};

use super::rotate::rotate;

/// Unlinks `victim` and restores the red-black invariants.
///
/// A victim with two children first trades places with its in-order
/// predecessor, so the node actually unlinked always has at most one child.
/// On return the victim's link is reset and nothing in the tree refers to
/// it; the slot may be reused.
///
/// Panics if the tree is empty.
pub fn erase<N: RbNode>(tree: &mut RbTree, arena: &mut [N], victim: NodeId) {
    let Some(root) = tree.root else {
        panic!("erase of {victim} from an empty tree");
    };
    debug!("erase {victim}");

    if root == victim && arena[victim as usize].link().is_leaf() {
        tree.root = None;
        *arena[victim as usize].link_mut() = RbLink::new();
        return;
    }

    if let (Some(l), Some(_)) = (get_l(arena, victim), get_r(arena, victim)) {
        let replacement = last(arena, Some(l)).unwrap_or(l);
        trace!("erase: {victim} has two children, swapping with predecessor {replacement}");
        tree.root = Some(swap_nodes(arena, root, victim, replacement));
    }

    let slot = get_p(arena, victim).map(|p| (p, child_direction(arena, p, victim)));

    if color(arena, victim) == Color::Red {
        debug_assert!(arena[victim as usize].link().is_leaf());
        let Some((p, dir)) = slot else {
            unreachable!("red root {victim}");
        };
        set_child(arena, p, dir, None);
    } else if let Some(child) = get_l(arena, victim).or(get_r(arena, victim)) {
        trace!("erase: splicing {child} into the place of {victim}");
        set_p(arena, child, slot.map(|(p, _)| p));
        set_color(arena, child, Color::Black);
        match slot {
            Some((p, dir)) => set_child(arena, p, dir, Some(child)),
            None => tree.root = Some(child),
        }
    } else {
        let Some((p, dir)) = slot else {
            unreachable!("sole root {victim} handled above");
        };
        set_child(arena, p, dir, None);
        rebalance(tree, arena, p, dir);
    }

    *arena[victim as usize].link_mut() = RbLink::new();
}

/// Fixup after a black leaf was removed from the `dir` side of `parent`: that
/// side is one black node short.
fn rebalance<N: RbNode>(
    tree: &mut RbTree,
    arena: &mut [N],
    mut parent: NodeId,
    mut dir: Direction,
) {
    loop {
        let mut sibling = get_child(arena, parent, dir.opposite())
            .expect("black-height of the sibling side is at least one");

        if color(arena, sibling) == Color::Red {
            trace!("erase: red sibling {sibling}, rotating {dir:?} at {parent}");
            rotate(tree, arena, parent, dir);
            set_color(arena, parent, Color::Red);
            set_color(arena, sibling, Color::Black);
            sibling = get_child(arena, parent, dir.opposite())
                .expect("red sibling has two black children");
        }

        let distant = get_child(arena, sibling, dir.opposite());
        let close = get_child(arena, sibling, dir);

        if let Some(distant) = distant.filter(|&d| is_red(arena, Some(d))) {
            rotate_distant(tree, arena, parent, sibling, distant, dir);
            return;
        }

        if let Some(close) = close.filter(|&c| is_red(arena, Some(c))) {
            trace!("erase: red close nephew {close}, rotating away at {sibling}");
            rotate(tree, arena, sibling, dir.opposite());
            set_color(arena, sibling, Color::Red);
            set_color(arena, close, Color::Black);
            rotate_distant(tree, arena, parent, close, sibling, dir);
            return;
        }

        if color(arena, parent) == Color::Red {
            trace!("erase: red parent {parent} absorbs the missing black");
            set_color(arena, sibling, Color::Red);
            set_color(arena, parent, Color::Black);
            return;
        }

        trace!("erase: all black around {parent}, moving up");
        set_color(arena, sibling, Color::Red);
        let Some(g) = get_p(arena, parent) else {
            return;
        };
        dir = child_direction(arena, g, parent);
        parent = g;
    }
}

/// Rotation that settles the fixup when the distant nephew is red.
fn rotate_distant<N: RbNode>(
    tree: &mut RbTree,
    arena: &mut [N],
    parent: NodeId,
    sibling: NodeId,
    distant: NodeId,
    dir: Direction,
) {
    trace!("erase: red distant nephew {distant}, rotating {dir:?} at {parent}");
    rotate(tree, arena, parent, dir);
    set_color(arena, sibling, color(arena, parent));
    set_color(arena, parent, Color::Black);
    set_color(arena, distant, Color::Black);
}
