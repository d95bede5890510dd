use crate::render::DEFAULT_DELAY_MS;
use crate::simulation::AlgorithmKind;
use clap::Parser;

/// Animated breadth-first, depth-first, uniform-cost, depth-limited,
/// iterative-deepening and bidirectional search on a 10x10 grid.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Run one algorithm and exit instead of showing the menu
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmKind>,

    /// Depth limit for depth-limited search
    #[arg(long)]
    pub depth_limit: Option<usize>,

    /// Pause after every frame, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Run without drawing the grid
    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Plain glyphs without ANSI colors
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Run all six algorithms headlessly and print a comparison table
    #[arg(long, default_value_t = false)]
    pub compare: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: None,
            depth_limit: None,
            delay_ms: DEFAULT_DELAY_MS,
            no_visualization: false,
            no_color: false,
            compare: false,
        }
    }
}
