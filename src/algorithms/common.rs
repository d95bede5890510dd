use crate::grid::{Grid, Position};
use crate::render::Renderer;
use rustc_hash::FxHashMap;

/// Maps each discovered cell to the cell it was reached from. The start cell
/// never has an entry.
pub type ParentMap = FxHashMap<Position, Position>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub found: bool,
    pub parents: ParentMap,
    /// Target-side parents; only bidirectional search fills this.
    pub reverse_parents: ParentMap,
    /// Start to target inclusive, empty when the target was not reached.
    pub path: Vec<Position>,
    /// Number of cells whose neighbours were examined.
    pub expanded: usize,
    pub depth_limit: Option<usize>,
    pub meeting_point: Option<Position>,
}

impl SearchOutcome {
    pub fn not_found(parents: ParentMap, expanded: usize) -> Self {
        SearchOutcome {
            found: false,
            parents,
            expanded,
            ..Default::default()
        }
    }

    pub fn found(parents: ParentMap, path: Vec<Position>, expanded: usize) -> Self {
        SearchOutcome {
            found: true,
            parents,
            path,
            expanded,
            ..Default::default()
        }
    }

    /// Edge count of the reconstructed path.
    pub fn path_length(&self) -> Option<usize> {
        if self.found {
            Some(self.path.len().saturating_sub(1))
        } else {
            None
        }
    }
}

pub trait SearchAlgorithm {
    fn name(&self) -> String;

    /// Run to completion on `grid`, marking visited cells and handing a
    /// snapshot to `renderer` after every step.
    fn search(
        &mut self,
        grid: &mut Grid,
        start: Position,
        target: Position,
        renderer: &mut dyn Renderer,
    ) -> SearchOutcome;
}
