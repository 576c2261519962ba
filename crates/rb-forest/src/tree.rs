use std::io;
use std::iter::FusedIterator;

use crate::error::InvariantViolation;
use crate::red_black;
use crate::types::{Direction, NodeId, RbNode};
use crate::util;

/// Tree handle. Holds the root and nothing else: there is no cached size or
/// height, and the nodes themselves live in the caller's arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RbTree {
    pub root: Option<NodeId>,
}

impl RbTree {
    pub const EMPTY: RbTree = RbTree { root: None };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// See [`red_black::insert`].
    pub fn insert<N: RbNode>(
        &mut self,
        arena: &mut [N],
        node: NodeId,
        parent: Option<NodeId>,
        dir: Direction,
    ) {
        red_black::insert(self, arena, node, parent, dir);
    }

    /// See [`red_black::erase`].
    pub fn erase<N: RbNode>(&mut self, arena: &mut [N], victim: NodeId) {
        red_black::erase(self, arena, victim);
    }

    /// Leftmost node. Panics on an empty tree.
    pub fn first<N: RbNode>(&self, arena: &[N]) -> NodeId {
        util::first(arena, self.root).expect("first() on an empty tree")
    }

    /// Rightmost node. Panics on an empty tree.
    pub fn last<N: RbNode>(&self, arena: &[N]) -> NodeId {
        util::last(arena, self.root).expect("last() on an empty tree")
    }

    /// Node count. O(n): the tree keeps no counter, callers that need the
    /// size often should track it themselves.
    pub fn size<N: RbNode>(&self, arena: &[N]) -> usize {
        util::size(arena, self.root)
    }

    /// Number of levels. O(n).
    pub fn height<N: RbNode>(&self, arena: &[N]) -> usize {
        util::height(arena, self.root)
    }

    /// In-order iterator over node ids.
    pub fn iter<'a, N: RbNode>(&self, arena: &'a [N]) -> Iter<'a, N> {
        Iter {
            arena,
            front: util::first(arena, self.root),
            back: util::last(arena, self.root),
        }
    }

    pub fn check_invariants<N: RbNode>(&self, arena: &[N]) -> Result<(), InvariantViolation> {
        red_black::check_invariants(self, arena)
    }

    /// See [`red_black::print`].
    pub fn print<N, F, W>(
        &self,
        arena: &[N],
        render: F,
        cell_width: usize,
        out: &mut W,
    ) -> io::Result<()>
    where
        N: RbNode,
        F: FnMut(&N, usize) -> String,
        W: io::Write + ?Sized,
    {
        red_black::print(self, arena, render, cell_width, out)
    }
}

/// Walks node ids in order from both ends, following parent links.
pub struct Iter<'a, N> {
    arena: &'a [N],
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<N: RbNode> Iterator for Iter<'_, N> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let curr = self.front?;
        if self.back == Some(curr) {
            self.front = None;
            self.back = None;
        } else {
            self.front = util::next(self.arena, curr);
        }
        Some(curr)
    }
}

impl<N: RbNode> DoubleEndedIterator for Iter<'_, N> {
    fn next_back(&mut self) -> Option<NodeId> {
        let curr = self.back?;
        if self.front == Some(curr) {
            self.front = None;
            self.back = None;
        } else {
            self.back = util::prev(self.arena, curr);
        }
        Some(curr)
    }
}

impl<N: RbNode> FusedIterator for Iter<'_, N> {}
