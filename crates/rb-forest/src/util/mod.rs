//! Link accessors, traversal and structural queries.
//!
//! Everything here works on a bare arena and node ids; none of it needs the
//! tree handle. Traversal climbs parent links, so no auxiliary stack is used.
//!
//! - `swap.rs`: exchanges the positions of two nodes (used by erase).

pub mod swap;

use crate::types::{Color, Direction, NodeId, RbNode};

pub use swap::swap_nodes;

#[inline]
pub(crate) fn get_p<N: RbNode>(arena: &[N], idx: NodeId) -> Option<NodeId> {
    arena[idx as usize].link().parent
}

#[inline]
pub(crate) fn get_child<N: RbNode>(arena: &[N], idx: NodeId, dir: Direction) -> Option<NodeId> {
    arena[idx as usize].link()[dir]
}

#[inline]
pub(crate) fn get_l<N: RbNode>(arena: &[N], idx: NodeId) -> Option<NodeId> {
    arena[idx as usize].link().left()
}

#[inline]
pub(crate) fn get_r<N: RbNode>(arena: &[N], idx: NodeId) -> Option<NodeId> {
    arena[idx as usize].link().right()
}

#[inline]
pub(crate) fn set_p<N: RbNode>(arena: &mut [N], idx: NodeId, v: Option<NodeId>) {
    arena[idx as usize].link_mut().parent = v;
}

#[inline]
pub(crate) fn set_child<N: RbNode>(
    arena: &mut [N],
    idx: NodeId,
    dir: Direction,
    v: Option<NodeId>,
) {
    arena[idx as usize].link_mut()[dir] = v;
}

#[inline]
pub(crate) fn color<N: RbNode>(arena: &[N], idx: NodeId) -> Color {
    arena[idx as usize].link().color
}

#[inline]
pub(crate) fn set_color<N: RbNode>(arena: &mut [N], idx: NodeId, c: Color) {
    arena[idx as usize].link_mut().color = c;
}

/// Missing children count as black.
#[inline]
pub(crate) fn is_red<N: RbNode>(arena: &[N], idx: Option<NodeId>) -> bool {
    idx.is_some_and(|i| color(arena, i) == Color::Red)
}

/// Side of `parent` that holds `n`.
///
/// Panics if `n` is not a child of `parent`.
#[inline]
pub(crate) fn child_direction<N: RbNode>(arena: &[N], parent: NodeId, n: NodeId) -> Direction {
    if get_l(arena, parent) == Some(n) {
        Direction::Left
    } else {
        assert_eq!(
            get_r(arena, parent),
            Some(n),
            "node {n} is not a child of {parent}"
        );
        Direction::Right
    }
}

/// Descends from `node` in direction `dir` until the link runs out.
fn extreme<N: RbNode>(arena: &[N], mut node: NodeId, dir: Direction) -> NodeId {
    while let Some(c) = get_child(arena, node, dir) {
        node = c;
    }
    node
}

/// Leftmost node of the subtree rooted at `root`.
pub fn first<N: RbNode>(arena: &[N], root: Option<NodeId>) -> Option<NodeId> {
    root.map(|r| extreme(arena, r, Direction::Left))
}

/// Rightmost node of the subtree rooted at `root`.
pub fn last<N: RbNode>(arena: &[N], root: Option<NodeId>) -> Option<NodeId> {
    root.map(|r| extreme(arena, r, Direction::Right))
}

/// One in-order step from `node` towards `dir`.
fn step<N: RbNode>(arena: &[N], mut node: NodeId, dir: Direction) -> Option<NodeId> {
    if let Some(c) = get_child(arena, node, dir) {
        return Some(extreme(arena, c, dir.opposite()));
    }
    while let Some(p) = get_p(arena, node) {
        if get_child(arena, p, dir) != Some(node) {
            return Some(p);
        }
        node = p;
    }
    None
}

/// In-order successor.
pub fn next<N: RbNode>(arena: &[N], node: NodeId) -> Option<NodeId> {
    step(arena, node, Direction::Right)
}

/// In-order predecessor.
pub fn prev<N: RbNode>(arena: &[N], node: NodeId) -> Option<NodeId> {
    step(arena, node, Direction::Left)
}

fn size_inner<N: RbNode>(arena: &[N], root: NodeId) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`. Walks the whole subtree.
pub fn size<N: RbNode>(arena: &[N], root: Option<NodeId>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Number of levels under `root`; `0` for an empty subtree. Walks the whole
/// subtree.
pub fn height<N: RbNode>(arena: &[N], root: Option<NodeId>) -> usize {
    root.map_or(0, |r| {
        1 + height(arena, get_l(arena, r)).max(height(arena, get_r(arena, r)))
    })
}
