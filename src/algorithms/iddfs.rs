use crate::algorithms::common::{SearchAlgorithm, SearchOutcome};
use crate::algorithms::dls::DepthLimited;
use crate::grid::{Grid, Position, COLS, ROWS};
use crate::render::Renderer;
use tracing::{debug, info};

/// Iterative deepening: depth-limited search with limits `0, 1, 2, ...` below
/// `max_depth`, each on a freshly reset board. Marks from earlier iterations
/// are discarded, so on return `grid` shows only the last iteration.
pub struct IterativeDeepening {
    pub max_depth: usize,
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        IterativeDeepening {
            max_depth: ROWS * COLS,
        }
    }
}

impl IterativeDeepening {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        IterativeDeepening { max_depth }
    }
}

impl SearchAlgorithm for IterativeDeepening {
    fn name(&self) -> String {
        "IDDFS".to_string()
    }

    fn search(
        &mut self,
        grid: &mut Grid,
        start: Position,
        target: Position,
        renderer: &mut dyn Renderer,
    ) -> SearchOutcome {
        let max_depth = self.max_depth;
        debug!(%start, %target, max_depth, "starting iterative deepening");

        let layout = grid.reset_to_layout();
        let mut total_expanded = 0;
        let mut last = SearchOutcome::default();

        for limit in 0..max_depth {
            let mut attempt = layout.clone();
            renderer.render(&attempt, &format!("IDDFS depth={}", limit));

            let mut dls = DepthLimited::new(limit);
            let outcome = dls.search(&mut attempt, start, target, renderer);
            total_expanded += outcome.expanded;
            *grid = attempt;

            if outcome.found {
                info!(limit, total_expanded, "IDDFS reached the target");
                return SearchOutcome {
                    expanded: total_expanded,
                    depth_limit: Some(limit),
                    ..outcome
                };
            }
            last = outcome;
        }

        info!(max_depth, "IDDFS exhausted every depth limit");
        SearchOutcome {
            found: false,
            expanded: total_expanded,
            depth_limit: None,
            ..last
        }
    }
}
