//! Arena-indexed red-black tree engine.
//!
//! Callers own the nodes: each record embeds an [`RbLink`] and implements
//! [`RbNode`], and all records live in a caller-owned slice. The engine
//! keeps the tree balanced by rewriting links and colors only. It never
//! compares keys, never allocates and never frees; where a new node goes is
//! decided by the caller (`parent` + [`Direction`]), and in-order traversal
//! reports exactly that placement.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`NodeId`], [`Color`], [`Direction`], [`RbLink`], [`RbNode`], container projection |
//! [`tree`] | [`RbTree`] handle and its in-order [`Iter`] |
//! [`red_black`] | `rotate`, `insert`, `erase`, `check_invariants`, `print` |
//! [`util`] | `next`, `prev`, `first`, `last`, `size`, `height`, `swap_nodes` |
//! [`set`] | [`RbSet`], an ordered set that drives the engine |
//! [`error`] | [`InvariantViolation`] |
//!
//! # Example
//!
//! ```
//! use rb_forest::{Direction, RbLink, RbNode, RbTree};
//!
//! struct Item {
//!     link: RbLink,
//!     key: u32,
//! }
//!
//! impl RbNode for Item {
//!     fn link(&self) -> &RbLink {
//!         &self.link
//!     }
//!     fn link_mut(&mut self) -> &mut RbLink {
//!         &mut self.link
//!     }
//! }
//!
//! let mut arena: Vec<Item> = (0..3)
//!     .map(|key| Item { link: RbLink::new(), key })
//!     .collect();
//! let mut tree = RbTree::EMPTY;
//! tree.insert(&mut arena, 1, None, Direction::Left);
//! tree.insert(&mut arena, 0, Some(1), Direction::Left);
//! tree.insert(&mut arena, 2, Some(1), Direction::Right);
//!
//! let keys: Vec<u32> = tree.iter(&arena).map(|i| arena[i as usize].key).collect();
//! assert_eq!(keys, vec![0, 1, 2]);
//! tree.check_invariants(&arena).unwrap();
//! ```
//!
//! Operations take `&mut` access to the whole arena, so a tree is never
//! mutated from two places at once. Sharing across threads needs an outer
//! lock around tree and arena together.

pub mod error;
pub mod red_black;
pub mod set;
pub mod tree;
pub mod types;
pub mod util;

pub use error::InvariantViolation;
pub use red_black::{check_invariants, erase, insert, print, render_tree, rotate};
pub use set::RbSet;
pub use tree::{Iter, RbTree};
pub use types::{container_of, container_of_mut, Color, Direction, NodeId, RbLink, RbNode};
pub use util::{first, height, last, next, prev, size, swap_nodes};
