use crate::algorithms::common::{ParentMap, SearchAlgorithm, SearchOutcome};
use crate::algorithms::path::{mark_chain, trace_back};
use crate::grid::{Cell, Grid, Position};
use crate::neighbors::neighbors;
use crate::render::Renderer;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, info, trace};

const LABEL: &str = "Bidirectional";
const PATH_LABEL: &str = "Bidirectional Path";

enum Step {
    Continue,
    Met(Position),
    Exhausted,
}

/// One half of the search: a breadth-first wave grown from `root`.
struct Wave {
    root: Position,
    queue: VecDeque<Position>,
    visited: FxHashSet<Position>,
    parents: ParentMap,
    expanded: usize,
}

impl Wave {
    fn new(root: Position) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(root);
        Wave {
            root,
            queue: VecDeque::from([root]),
            visited,
            parents: ParentMap::default(),
            expanded: 0,
        }
    }

    /// Expand one queued cell. Stops at the first neighbour the other wave
    /// has already visited, leaving the remaining neighbours unexamined.
    fn step(&mut self, grid: &mut Grid, other: &FxHashSet<Position>) -> Step {
        let Some(current) = self.queue.pop_front() else {
            return Step::Exhausted;
        };

        grid.mark(current, Cell::Explored);
        self.expanded += 1;
        trace!(root = %self.root, %current, "expanding");

        for neighbor in neighbors(grid, current) {
            if self.visited.insert(neighbor) {
                self.parents.insert(neighbor, current);
                self.queue.push_back(neighbor);
                grid.mark_frontier(neighbor);

                if other.contains(&neighbor) {
                    return Step::Met(neighbor);
                }
            }
        }
        Step::Continue
    }
}

/// Two breadth-first waves, one from the start and one from the target,
/// taking turns one expansion at a time until one discovers a cell the other
/// has visited.
#[derive(Default)]
pub struct Bidirectional;

impl Bidirectional {
    pub fn new() -> Self {
        Bidirectional
    }
}

impl SearchAlgorithm for Bidirectional {
    fn name(&self) -> String {
        LABEL.to_string()
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        start: Position,
        target: Position,
        renderer: &mut dyn Renderer,
    ) -> SearchOutcome {
        debug!(%start, %target, "starting bidirectional search");

        let mut forward = Wave::new(start);
        let mut backward = Wave::new(target);
        let mut meeting = None;

        while !forward.queue.is_empty() && !backward.queue.is_empty() {
            match forward.step(grid, &backward.visited) {
                Step::Met(pos) => meeting = Some(pos),
                Step::Continue | Step::Exhausted => {}
            }
            renderer.render(grid, LABEL);
            if meeting.is_some() {
                break;
            }

            match backward.step(grid, &forward.visited) {
                Step::Met(pos) => meeting = Some(pos),
                Step::Continue | Step::Exhausted => {}
            }
            renderer.render(grid, LABEL);
            if meeting.is_some() {
                break;
            }
        }

        let expanded = forward.expanded + backward.expanded;

        let Some(meet) = meeting else {
            info!(expanded, "bidirectional search found no meeting point");
            let mut outcome = SearchOutcome::not_found(forward.parents, expanded);
            outcome.reverse_parents = backward.parents;
            return outcome;
        };

        info!(%meet, expanded, "waves met");

        grid.mark(meet, Cell::Path);
        renderer.render(grid, PATH_LABEL);

        let to_start = trace_back(&forward.parents, meet);
        mark_chain(grid, &to_start, renderer, PATH_LABEL);
        let to_target = trace_back(&backward.parents, meet);
        mark_chain(grid, &to_target, renderer, PATH_LABEL);

        let mut path: Vec<Position> = to_start.into_iter().rev().collect();
        path.extend(to_target.into_iter().skip(1));

        SearchOutcome {
            found: true,
            parents: forward.parents,
            reverse_parents: backward.parents,
            path,
            expanded,
            depth_limit: None,
            meeting_point: Some(meet),
        }
    }
}
