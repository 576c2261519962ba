//! The balancing engine.
//!
//! | File | Contents |
//! |------|----------|
//! | `rotate.rs` | [`rotate`], the one structural primitive |
//! | `insert.rs` | [`insert`] and its bottom-up fixup |
//! | `erase.rs` | [`erase`], predecessor swap and the deletion fixup |
//! | `validate.rs` | [`check_invariants`] |
//! | `print.rs` | [`print`] / [`render_tree`] diagnostic dump |
//!
//! All functions take the tree handle and the caller's arena separately; the
//! handle only carries the root.

pub mod erase;
pub mod insert;
pub mod print;
pub mod rotate;
pub mod validate;

pub use erase::erase;
pub use insert::insert;
pub use print::{print, render_tree};
pub use rotate::rotate;
pub use validate::check_invariants;
