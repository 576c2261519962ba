use crate::types::{Direction, NodeId, RbNode};

use super::{child_direction, color, get_l, get_p, get_r, set_child, set_color, set_p};

/// Exchanges the tree positions of `x` and `y`: parent, both children and
/// color trade places, the records themselves stay in their arena slots.
///
/// Works for any two distinct attached nodes, including the case where one
/// is a direct child of the other. Returns the new root when either node was
/// the root (`root` otherwise).
pub fn swap_nodes<N: RbNode>(arena: &mut [N], root: NodeId, x: NodeId, y: NodeId) -> NodeId {
    if x == y {
        return root;
    }

    let xp = get_p(arena, x);
    let xl = get_l(arena, x);
    let xr = get_r(arena, x);
    let x_dir = xp.map(|p| child_direction(arena, p, x));

    let yp = get_p(arena, y);
    let yl = get_l(arena, y);
    let yr = get_r(arena, y);
    let y_dir = yp.map(|p| child_direction(arena, p, y));

    // `x` takes over y's children. Where that child is `x` itself, `y` hangs
    // there instead.
    for (dir, yc) in [(Direction::Left, yl), (Direction::Right, yr)] {
        if yc == Some(x) {
            set_child(arena, x, dir, Some(y));
            set_p(arena, y, Some(x));
        } else {
            set_child(arena, x, dir, yc);
            if let Some(c) = yc {
                set_p(arena, c, Some(x));
            }
        }
    }

    for (dir, xc) in [(Direction::Left, xl), (Direction::Right, xr)] {
        if xc == Some(y) {
            set_child(arena, y, dir, Some(x));
            set_p(arena, x, Some(y));
        } else {
            set_child(arena, y, dir, xc);
            if let Some(c) = xc {
                set_p(arena, c, Some(y));
            }
        }
    }

    let mut root = root;

    match (xp, x_dir) {
        (None, _) => {
            root = y;
            set_p(arena, y, None);
        }
        (Some(p), Some(dir)) if p != y => {
            set_p(arena, y, Some(p));
            set_child(arena, p, dir, Some(y));
        }
        _ => {}
    }

    match (yp, y_dir) {
        (None, _) => {
            root = x;
            set_p(arena, x, None);
        }
        (Some(p), Some(dir)) if p != x => {
            set_p(arena, x, Some(p));
            set_child(arena, p, dir, Some(x));
        }
        _ => {}
    }

    let xc = color(arena, x);
    let yc = color(arena, y);
    set_color(arena, x, yc);
    set_color(arena, y, xc);

    root
}
