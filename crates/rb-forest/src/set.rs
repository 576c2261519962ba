//! Ordered set built on the balancing engine.
//!
//! This is the consumer side of the contract: the set owns the arena, compares
//! keys, finds the insertion point by search descent, and keeps its own
//! element count. The engine only ever sees node ids.

use std::cmp::Ordering;
use std::fmt::Display;
use std::io;

use crate::error::InvariantViolation;
use crate::tree::RbTree;
use crate::types::{Color, Direction, NodeId, RbLink, RbNode};
use crate::util::{get_child, next};

/// Arena slot of an [`RbSet`]. `value` is `None` while the slot sits on the
/// free list.
#[derive(Clone, Debug)]
pub struct SetEntry<T> {
    link: RbLink,
    value: Option<T>,
}

impl<T> SetEntry<T> {
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn color(&self) -> Color {
        self.link.color
    }
}

impl<T> RbNode for SetEntry<T> {
    fn link(&self) -> &RbLink {
        &self.link
    }

    fn link_mut(&mut self) -> &mut RbLink {
        &mut self.link
    }
}

/// Where a key is, or where it would go.
enum Search {
    Found(NodeId),
    Vacant(Option<NodeId>, Direction),
}

fn default_comparator<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

pub struct RbSet<T, C = fn(&T, &T) -> Ordering>
where
    C: Fn(&T, &T) -> Ordering,
{
    tree: RbTree,
    arena: Vec<SetEntry<T>>,
    free: Vec<NodeId>,
    len: usize,
    comparator: C,
}

impl<T: Ord> RbSet<T, fn(&T, &T) -> Ordering> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T: Ord> Default for RbSet<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RbSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::EMPTY,
            arena: Vec::new(),
            free: Vec::new(),
            len: 0,
            comparator,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn tree(&self) -> &RbTree {
        &self.tree
    }

    pub fn arena(&self) -> &[SetEntry<T>] {
        &self.arena
    }

    /// Value stored at `id`. Panics if the slot is free.
    pub fn value(&self, id: NodeId) -> &T {
        self.arena[id as usize]
            .value
            .as_ref()
            .expect("node id refers to a free slot")
    }

    fn search(&self, value: &T) -> Search {
        let mut parent = None;
        let mut dir = Direction::Left;
        let mut curr = self.tree.root;
        while let Some(i) = curr {
            match (self.comparator)(value, self.value(i)) {
                Ordering::Equal => return Search::Found(i),
                Ordering::Less => dir = Direction::Left,
                Ordering::Greater => dir = Direction::Right,
            }
            parent = Some(i);
            curr = get_child(&self.arena, i, dir);
        }
        Search::Vacant(parent, dir)
    }

    pub fn find(&self, value: &T) -> Option<NodeId> {
        match self.search(value) {
            Search::Found(i) => Some(i),
            Search::Vacant(..) => None,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Adds `value`. Returns `false` (and drops `value`) if an equal value is
    /// already present.
    pub fn insert(&mut self, value: T) -> bool {
        let Search::Vacant(parent, dir) = self.search(&value) else {
            return false;
        };
        let entry = SetEntry {
            link: RbLink::new(),
            value: Some(value),
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.arena[id as usize] = entry;
                id
            }
            None => {
                self.arena.push(entry);
                (self.arena.len() - 1) as NodeId
            }
        };
        self.tree.insert(&mut self.arena, id, parent, dir);
        self.len += 1;
        true
    }

    /// Removes the value equal to `value` and returns it.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let id = self.find(value)?;
        self.tree.erase(&mut self.arena, id);
        self.free.push(id);
        self.len -= 1;
        self.arena[id as usize].value.take()
    }

    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    pub fn clear(&mut self) {
        self.tree = RbTree::EMPTY;
        self.arena.clear();
        self.free.clear();
        self.len = 0;
    }

    pub fn first(&self) -> Option<&T> {
        self.tree.iter(&self.arena).next().map(|i| self.value(i))
    }

    pub fn last(&self) -> Option<&T> {
        self.tree.iter(&self.arena).next_back().map(|i| self.value(i))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.tree.iter(&self.arena).map(|i| self.value(i))
    }

    /// In-order values paired with their node color.
    pub fn entries(&self) -> impl Iterator<Item = (&T, Color)> + '_ {
        self.tree
            .iter(&self.arena)
            .map(|i| (self.value(i), self.arena[i as usize].color()))
    }

    /// Structural invariants plus strictly increasing key order.
    pub fn check(&self) -> Result<(), InvariantViolation> {
        self.tree.check_invariants(&self.arena)?;
        let mut curr = self.tree.root.map(|_| self.tree.first(&self.arena));
        while let Some(i) = curr {
            let succ = next(&self.arena, i);
            if let Some(s) = succ {
                if (self.comparator)(self.value(i), self.value(s)) != Ordering::Less {
                    return Err(InvariantViolation::OrderViolation { prev: i, next: s });
                }
            }
            curr = succ;
        }
        Ok(())
    }
}

impl<T, C> RbSet<T, C>
where
    T: Display,
    C: Fn(&T, &T) -> Ordering,
{
    /// Draws the tree with each value right-aligned in a `cell_width` cell.
    pub fn print<W: io::Write + ?Sized>(&self, cell_width: usize, out: &mut W) -> io::Result<()> {
        self.tree.print(
            &self.arena,
            |entry, width| match entry.value() {
                Some(v) => format!("{v:>width$}"),
                None => String::new(),
            },
            cell_width,
            out,
        )
    }
}

impl<T: Ord> FromIterator<T> for RbSet<T, fn(&T, &T) -> Ordering> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

impl<T: Ord> Extend<T> for RbSet<T, fn(&T, &T) -> Ordering> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freed_slots_are_reused() {
        let mut set = RbSet::new();
        for v in 0..8 {
            set.insert(v);
        }
        assert!(set.remove(&3));
        assert!(set.remove(&5));
        set.insert(100);
        set.insert(101);
        assert_eq!(set.arena().len(), 8);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 4, 6, 7, 100, 101]);
        set.check().unwrap();
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut set = RbSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(&"a"));
        assert_eq!(set.last(), Some(&"b"));
    }

    #[test]
    fn custom_comparator_reverses_order() {
        let mut set = RbSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        set.insert(1);
        set.insert(3);
        set.insert(2);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        set.check().unwrap();
    }
}
