use crate::algorithms::common::{ParentMap, SearchAlgorithm, SearchOutcome};
use crate::algorithms::path::reconstruct_path;
use crate::grid::{Cell, Grid, Position};
use crate::neighbors::neighbors;
use crate::render::Renderer;
use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

/// Depth-first search. A cell is visited when popped; stale stack entries for
/// visited cells are dropped.
#[derive(Default)]
pub struct DepthFirst;

impl DepthFirst {
    pub fn new() -> Self {
        DepthFirst
    }
}

impl SearchAlgorithm for DepthFirst {
    fn name(&self) -> String {
        "DFS".to_string()
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        start: Position,
        target: Position,
        renderer: &mut dyn Renderer,
    ) -> SearchOutcome {
        debug!(%start, %target, "starting depth-first search");

        // (cell, cell that pushed it)
        let mut stack: Vec<(Position, Option<Position>)> = vec![(start, None)];
        let mut visited = FxHashSet::default();
        let mut parents = ParentMap::default();
        let mut expanded = 0;

        while let Some((current, pushed_by)) = stack.pop() {
            if visited.insert(current) {
                if let Some(parent) = pushed_by {
                    parents.insert(current, parent);
                }

                if current == target {
                    info!(expanded, "DFS reached the target");
                    let path = reconstruct_path(grid, &parents, start, target, renderer);
                    let path = path.unwrap_or_default();
                    return SearchOutcome::found(parents, path, expanded);
                }

                grid.mark(current, Cell::Explored);
                expanded += 1;
                trace!(%current, "expanding");

                // Reversed so the first policy direction is popped first.
                for neighbor in neighbors(grid, current).into_iter().rev() {
                    if !visited.contains(&neighbor) {
                        stack.push((neighbor, Some(current)));
                        grid.mark_frontier(neighbor);
                    }
                }
            }

            renderer.render(grid, "DFS");
        }

        info!(expanded, "DFS exhausted the frontier");
        SearchOutcome::not_found(parents, expanded)
    }
}
