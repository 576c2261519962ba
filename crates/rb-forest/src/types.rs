//! Node and link definitions.
//!
//! Nodes live in a caller-owned arena (`[N]` / `Vec<N>`). Every "pointer" is
//! an `Option<NodeId>` index into that arena, so the engine never holds two
//! overlapping borrows of the same record and never allocates.
//!
//! The caller's record embeds an [`RbLink`] and exposes it through
//! [`RbNode`]. Going back from a [`NodeId`] to the embedding record is the
//! arena lookup performed by [`container_of`] / [`container_of_mut`].

use std::ops::{Index, IndexMut};

/// Index of a record in the caller's arena.
pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Child side. `Left` is index `0`, `Right` is index `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Right = 1,
}

impl Direction {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Tree linkage embedded in a caller record.
///
/// Links are non-owning: the arena owns every record, a link only names
/// other slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RbLink {
    pub color: Color,
    pub parent: Option<NodeId>,
    pub child: [Option<NodeId>; 2],
}

impl RbLink {
    /// An unattached link. Its contents are overwritten on insertion.
    pub const fn new() -> Self {
        Self {
            color: Color::Red,
            parent: None,
            child: [None, None],
        }
    }

    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.child[0]
    }

    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.child[1]
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.child == [None, None]
    }
}

impl Index<Direction> for RbLink {
    type Output = Option<NodeId>;

    fn index(&self, dir: Direction) -> &Self::Output {
        &self.child[dir.index()]
    }
}

impl IndexMut<Direction> for RbLink {
    fn index_mut(&mut self, dir: Direction) -> &mut Self::Output {
        &mut self.child[dir.index()]
    }
}

/// A record that can be linked into an [`RbTree`](crate::RbTree).
///
/// Implementors hand out their embedded [`RbLink`]; the engine reads and
/// writes nothing else.
pub trait RbNode {
    fn link(&self) -> &RbLink;
    fn link_mut(&mut self) -> &mut RbLink;
}

impl RbNode for RbLink {
    #[inline]
    fn link(&self) -> &RbLink {
        self
    }

    #[inline]
    fn link_mut(&mut self) -> &mut RbLink {
        self
    }
}

/// Record that embeds the node `id`.
#[inline]
pub fn container_of<N: RbNode>(arena: &[N], id: NodeId) -> &N {
    &arena[id as usize]
}

/// Mutable access to the record that embeds the node `id`.
#[inline]
pub fn container_of_mut<N: RbNode>(arena: &mut [N], id: NodeId) -> &mut N {
    &mut arena[id as usize]
}
