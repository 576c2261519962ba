use crate::error::InvariantViolation;
use crate::tree::RbTree;
use crate::types::{NodeId, RbNode};

/// Verifies the structural invariants of `tree`:
///
/// - the root has no parent and is black;
/// - every child links back to its parent and no node is reachable twice;
/// - no red node has a red child;
/// - every path from a node down to a missing child crosses the same number
///   of black nodes.
///
/// Key order is the caller's business; see
/// [`RbSet::check`](crate::set::RbSet::check) for a checker that also
/// compares keys.
pub fn check_invariants<N: RbNode>(tree: &RbTree, arena: &[N]) -> Result<(), InvariantViolation> {
    let Some(root) = tree.root else {
        return Ok(());
    };
    let root_link = arena
        .get(root as usize)
        .ok_or(InvariantViolation::OutOfBounds(root))?
        .link();
    if root_link.parent.is_some() {
        return Err(InvariantViolation::RootHasParent(root));
    }
    if root_link.is_red() {
        return Err(InvariantViolation::RedRoot(root));
    }

    let mut seen = vec![false; arena.len()];
    black_height(arena, root, &mut seen).map(|_| ())
}

fn black_height<N: RbNode>(
    arena: &[N],
    node: NodeId,
    seen: &mut [bool],
) -> Result<usize, InvariantViolation> {
    match seen.get_mut(node as usize) {
        None => return Err(InvariantViolation::OutOfBounds(node)),
        Some(true) => return Err(InvariantViolation::Cycle(node)),
        Some(flag) => *flag = true,
    }
    let link = *arena[node as usize].link();

    let mut heights = [0usize; 2];
    for (slot, child) in link.child.into_iter().enumerate() {
        let Some(child) = child else {
            continue;
        };
        let child_link = arena
            .get(child as usize)
            .ok_or(InvariantViolation::OutOfBounds(child))?
            .link();
        if child_link.parent != Some(node) {
            return Err(InvariantViolation::BrokenParentLink {
                parent: node,
                child,
            });
        }
        if link.is_red() && child_link.is_red() {
            return Err(InvariantViolation::RedRed {
                parent: node,
                child,
            });
        }
        heights[slot] = black_height(arena, child, seen)?;
    }

    let [left, right] = heights;
    if left != right {
        return Err(InvariantViolation::BlackHeightMismatch { node, left, right });
    }
    Ok(left + usize::from(link.is_black()))
}
