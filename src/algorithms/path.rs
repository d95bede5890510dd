use crate::algorithms::common::ParentMap;
use crate::grid::{Cell, Grid, Position};
use crate::render::Renderer;

pub const FINAL_PATH_LABEL: &str = "Final Path";

/// Follow `parents` from `from` until a cell with no parent is reached.
/// Returns the visited chain starting with `from`.
pub fn trace_back(parents: &ParentMap, from: Position) -> Vec<Position> {
    let mut chain = vec![from];
    let mut node = from;
    while let Some(&parent) = parents.get(&node) {
        chain.push(parent);
        node = parent;
    }
    chain
}

/// Mark every cell of `chain` after its first element as `Path`, rendering a
/// snapshot after each step. The grid keeps start and target untouched.
pub fn mark_chain(
    grid: &mut Grid,
    chain: &[Position],
    renderer: &mut dyn Renderer,
    label: &str,
) {
    for &node in chain.iter().skip(1) {
        grid.mark(node, Cell::Path);
        renderer.render(grid, label);
    }
}

/// Walk backwards from `target` to `start`, marking intermediate cells.
///
/// Returns the path ordered start to target, or `None` if the target was never
/// reached. An unreachable target only produces the initial snapshot.
pub fn reconstruct_path(
    grid: &mut Grid,
    parents: &ParentMap,
    start: Position,
    target: Position,
    renderer: &mut dyn Renderer,
) -> Option<Vec<Position>> {
    renderer.render(grid, FINAL_PATH_LABEL);

    if !parents.contains_key(&target) {
        return None;
    }

    let chain = trace_back(parents, target);
    mark_chain(grid, &chain, renderer, FINAL_PATH_LABEL);

    let mut path = chain;
    path.reverse();
    debug_assert_eq!(path.first(), Some(&start));
    Some(path)
}
