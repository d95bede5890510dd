pub mod bfs;
pub mod bidirectional;
pub mod common;
pub mod dfs;
pub mod dls;
pub mod iddfs;
pub mod path;
pub mod ucs;

pub use bfs::BreadthFirst;
pub use bidirectional::Bidirectional;
pub use common::{ParentMap, SearchAlgorithm, SearchOutcome};
pub use dfs::DepthFirst;
pub use dls::DepthLimited;
pub use iddfs::IterativeDeepening;
pub use path::reconstruct_path;
pub use ucs::UniformCost;
