use std::io::{self, Write};

use crate::tree::RbTree;
use crate::types::{NodeId, RbNode};
use crate::util::{get_l, get_r, height, size};

/// Text grid, one row per tree level.
struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    fn put(&mut self, row: usize, col: usize, c: char) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = c;
        }
    }
}

struct Layout<'a, N, F> {
    arena: &'a [N],
    render: F,
    width: usize,
    canvas: Canvas,
}

impl<N, F> Layout<'_, N, F>
where
    N: RbNode,
    F: FnMut(&N, usize) -> String,
{
    /// Draws the subtree at `node` starting at column `offset` and returns the
    /// number of columns it occupies.
    fn draw(&mut self, node: Option<NodeId>, is_left: bool, offset: usize, depth: usize) -> usize {
        let Some(node) = node else {
            return 0;
        };
        let w = self.width;

        let left = self.draw(get_l(self.arena, node), true, offset, depth + 1);
        let right = self.draw(get_r(self.arena, node), false, offset + left + w + 1, depth + 1);

        let text = (self.render)(&self.arena[node as usize], w);
        let cell = text.chars().chain(std::iter::repeat(' ')).take(w);
        for (i, c) in cell.enumerate() {
            self.canvas.put(depth, offset + left + 1 + i, c);
        }

        let half = (w + 2) >> 1;
        if depth > 0 {
            let (start, len) = if is_left {
                (offset + left + half + 1, (w + right).saturating_sub(2))
            } else {
                ((offset + 3).saturating_sub(half), (left + w).saturating_sub(1))
            };
            for i in 0..len {
                self.canvas.put(depth - 1, start + i, '-');
            }
            self.canvas.put(depth - 1, offset + left + half, '.');
        }

        self.canvas.put(depth, offset + left, '(');
        self.canvas.put(depth, offset + left + w + 1, ')');

        left + w + right + 1
    }
}

/// Renders `tree` as boxed cells joined by connector lines, one text row per
/// level.
///
/// `render` formats a node into a cell of `cell_width` columns; longer
/// output is cut, shorter output is padded with spaces. Every row is
/// `(cell_width + 1) * size + 1` columns wide and ends in `\n`. An empty
/// tree renders as the empty string.
pub fn render_tree<N, F>(tree: &RbTree, arena: &[N], render: F, cell_width: usize) -> String
where
    N: RbNode,
    F: FnMut(&N, usize) -> String,
{
    if tree.root.is_none() {
        return String::new();
    }
    let rows = height(arena, tree.root);
    let cols = (cell_width + 1) * size(arena, tree.root) + 1;

    let mut layout = Layout {
        arena,
        render,
        width: cell_width,
        canvas: Canvas {
            rows: vec![vec![' '; cols]; rows],
        },
    };
    layout.draw(tree.root, false, 0, 0);

    let mut out = String::with_capacity(rows * (cols + 1));
    for row in layout.canvas.rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Writes [`render_tree`] output to `out`.
pub fn print<N, F, W>(
    tree: &RbTree,
    arena: &[N],
    render: F,
    cell_width: usize,
    out: &mut W,
) -> io::Result<()>
where
    N: RbNode,
    F: FnMut(&N, usize) -> String,
    W: Write + ?Sized,
{
    out.write_all(render_tree(tree, arena, render, cell_width).as_bytes())
}
