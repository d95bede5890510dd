use crate::algorithms::common::{ParentMap, SearchAlgorithm, SearchOutcome};
use crate::algorithms::path::reconstruct_path;
use crate::grid::{Cell, Grid, Position};
use crate::neighbors::neighbors;
use crate::render::Renderer;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, info, trace};

const STEP_COST: u32 = 1;

/// Uniform-cost search over unit edges. The heap is ordered by
/// `(cost, position)` so ties break on row then column.
#[derive(Default)]
pub struct UniformCost;

impl UniformCost {
    pub fn new() -> Self {
        UniformCost
    }
}

impl SearchAlgorithm for UniformCost {
    fn name(&self) -> String {
        "UCS".to_string()
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        start: Position,
        target: Position,
        renderer: &mut dyn Renderer,
    ) -> SearchOutcome {
        debug!(%start, %target, "starting uniform-cost search");

        let mut queue = BinaryHeap::new();
        queue.push(Reverse((0u32, start)));
        let mut costs: FxHashMap<Position, u32> = FxHashMap::default();
        costs.insert(start, 0);
        let mut parents = ParentMap::default();
        let mut expanded = 0;

        while let Some(Reverse((current_cost, current))) = queue.pop() {
            // A cheaper entry for this cell was queued after this one.
            if costs.get(&current).is_some_and(|&best| current_cost > best) {
                trace!(%current, current_cost, "skipping stale entry");
                continue;
            }

            if current == target {
                info!(expanded, cost = current_cost, "UCS reached the target");
                let path = reconstruct_path(grid, &parents, start, target, renderer);
                let path = path.unwrap_or_default();
                return SearchOutcome::found(parents, path, expanded);
            }

            grid.mark(current, Cell::Explored);
            expanded += 1;
            trace!(%current, current_cost, "expanding");

            for neighbor in neighbors(grid, current) {
                let new_cost = current_cost + STEP_COST;
                let improves = costs.get(&neighbor).map_or(true, |&old| new_cost < old);
                if improves {
                    costs.insert(neighbor, new_cost);
                    parents.insert(neighbor, current);
                    queue.push(Reverse((new_cost, neighbor)));
                    grid.mark_frontier(neighbor);
                }
            }

            renderer.render(grid, "UCS");
        }

        info!(expanded, "UCS exhausted the frontier");
        SearchOutcome::not_found(parents, expanded)
    }
}
