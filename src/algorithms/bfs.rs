use crate::algorithms::common::{ParentMap, SearchAlgorithm, SearchOutcome};
use crate::algorithms::path::reconstruct_path;
use crate::grid::{Cell, Grid, Position};
use crate::neighbors::neighbors;
use crate::render::Renderer;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, info, trace};

/// Breadth-first search. Cells count as visited as soon as they are queued,
/// so each cell is queued and expanded at most once.
#[derive(Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl SearchAlgorithm for BreadthFirst {
    fn name(&self) -> String {
        "BFS".to_string()
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        start: Position,
        target: Position,
        renderer: &mut dyn Renderer,
    ) -> SearchOutcome {
        debug!(%start, %target, "starting breadth-first search");

        let mut queue = VecDeque::from([start]);
        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut parents = ParentMap::default();
        let mut expanded = 0;

        while let Some(current) = queue.pop_front() {
            if current == target {
                info!(expanded, "BFS reached the target");
                let path = reconstruct_path(grid, &parents, start, target, renderer);
                let path = path.unwrap_or_default();
                return SearchOutcome::found(parents, path, expanded);
            }

            grid.mark(current, Cell::Explored);
            expanded += 1;
            trace!(%current, "expanding");

            for neighbor in neighbors(grid, current) {
                if visited.insert(neighbor) {
                    parents.insert(neighbor, current);
                    queue.push_back(neighbor);
                    grid.mark_frontier(neighbor);
                }
            }

            renderer.render(grid, "BFS");
        }

        info!(expanded, "BFS exhausted the frontier");
        SearchOutcome::not_found(parents, expanded)
    }
}
