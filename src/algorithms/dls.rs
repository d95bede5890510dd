use crate::algorithms::common::{ParentMap, SearchAlgorithm, SearchOutcome};
use crate::algorithms::path::reconstruct_path;
use crate::grid::{Cell, Grid, Position};
use crate::neighbors::neighbors;
use crate::render::Renderer;
use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

struct StackEntry {
    pos: Position,
    depth: usize,
    pushed_by: Option<Position>,
}

/// Depth-first search that ignores any cell deeper than `limit` edges from
/// the start, the target included.
pub struct DepthLimited {
    pub limit: usize,
}

impl DepthLimited {
    pub fn new(limit: usize) -> Self {
        DepthLimited { limit }
    }
}

impl SearchAlgorithm for DepthLimited {
    fn name(&self) -> String {
        format!("DLS Limit={}", self.limit)
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        start: Position,
        target: Position,
        renderer: &mut dyn Renderer,
    ) -> SearchOutcome {
        debug!(%start, %target, limit = self.limit, "starting depth-limited search");

        let label = self.name();
        let mut stack = vec![StackEntry {
            pos: start,
            depth: 0,
            pushed_by: None,
        }];
        let mut visited = FxHashSet::default();
        let mut parents = ParentMap::default();
        let mut expanded = 0;

        while let Some(entry) = stack.pop() {
            let current = entry.pos;

            if entry.depth <= self.limit && visited.insert(current) {
                if let Some(parent) = entry.pushed_by {
                    parents.insert(current, parent);
                }

                if current == target {
                    info!(expanded, depth = entry.depth, "DLS reached the target");
                    let path = reconstruct_path(grid, &parents, start, target, renderer);
                    let path = path.unwrap_or_default();
                    let mut outcome = SearchOutcome::found(parents, path, expanded);
                    outcome.depth_limit = Some(self.limit);
                    return outcome;
                }

                grid.mark(current, Cell::Explored);
                expanded += 1;
                trace!(%current, depth = entry.depth, "expanding");

                for neighbor in neighbors(grid, current).into_iter().rev() {
                    if !visited.contains(&neighbor) {
                        stack.push(StackEntry {
                            pos: neighbor,
                            depth: entry.depth + 1,
                            pushed_by: Some(current),
                        });
                        grid.mark_frontier(neighbor);
                    }
                }
            }

            renderer.render(grid, &label);
        }

        info!(
            limit = self.limit,
            expanded,
            "target not found within depth limit"
        );
        let mut outcome = SearchOutcome::not_found(parents, expanded);
        outcome.depth_limit = Some(self.limit);
        outcome
    }
}
