use crate::algorithms::{
    Bidirectional, BreadthFirst, DepthFirst, DepthLimited, IterativeDeepening, SearchAlgorithm,
    SearchOutcome, UniformCost,
};
use crate::config::Config;
use crate::error::{Result, VisualizerError};
use crate::grid::{Grid, COLS, ROWS};
use crate::neighbors::neighbors;
use crate::render::{HeadlessRenderer, Renderer, TerminalRenderer};
use crate::statistics::SearchStatistics;
use clap::ValueEnum;
use pathfinding::prelude::bfs;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Pause on the untouched board before the search starts.
const INTRO_PAUSE: Duration = Duration::from_millis(1000);

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Ucs,
    Dls,
    Iddfs,
    Bidirectional,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::Dfs,
        AlgorithmKind::Ucs,
        AlgorithmKind::Dls,
        AlgorithmKind::Iddfs,
        AlgorithmKind::Bidirectional,
    ];

    /// Menu entries are numbered from 1 in `ALL` order; "0" means exit and
    /// yields `None`.
    pub fn from_menu_choice(input: &str) -> Result<Option<Self>> {
        let choice = input.trim();
        match choice {
            "0" => Ok(None),
            _ => choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| Self::ALL.get(i).copied())
                .map(Some)
                .ok_or_else(|| VisualizerError::InvalidChoice(choice.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "BFS",
            AlgorithmKind::Dfs => "DFS",
            AlgorithmKind::Ucs => "UCS",
            AlgorithmKind::Dls => "DLS",
            AlgorithmKind::Iddfs => "IDDFS",
            AlgorithmKind::Bidirectional => "Bidirectional",
        }
    }

    pub fn build(self, depth_limit: Option<usize>) -> Result<Box<dyn SearchAlgorithm>> {
        let algorithm: Box<dyn SearchAlgorithm> = match self {
            AlgorithmKind::Bfs => Box::new(BreadthFirst::new()),
            AlgorithmKind::Dfs => Box::new(DepthFirst::new()),
            AlgorithmKind::Ucs => Box::new(UniformCost::new()),
            AlgorithmKind::Dls => {
                let limit = depth_limit.ok_or(VisualizerError::MissingDepthLimit)?;
                Box::new(DepthLimited::new(limit))
            }
            AlgorithmKind::Iddfs => Box::new(IterativeDeepening::new()),
            AlgorithmKind::Bidirectional => Box::new(Bidirectional::new()),
        };
        Ok(algorithm)
    }

    /// Depth-bounded searches can legitimately miss the target.
    pub fn is_depth_bounded(self) -> bool {
        matches!(self, AlgorithmKind::Dls | AlgorithmKind::Iddfs)
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub statistics: SearchStatistics,
    pub outcome: SearchOutcome,
    pub grid: Grid,
}

/// Forwards snapshots to another renderer while counting them.
struct FrameCounter<'a> {
    inner: &'a mut dyn Renderer,
    frames: usize,
}

impl Renderer for FrameCounter<'_> {
    fn render(&mut self, grid: &Grid, label: &str) {
        self.frames += 1;
        self.inner.render(grid, label);
    }
}

pub struct Simulation {
    config: Config,
}

impl Simulation {
    pub fn new(config: Config) -> Self {
        Simulation { config }
    }

    /// Build the standard board, show it, and animate the chosen algorithm.
    pub fn run(&self, kind: AlgorithmKind, depth_limit: Option<usize>) -> Result<RunReport> {
        let mut algorithm = kind.build(depth_limit)?;
        let grid = Grid::standard();

        if self.config.no_visualization {
            let mut renderer = HeadlessRenderer::new();
            return Ok(Self::run_on(grid, algorithm.as_mut(), &mut renderer));
        }

        let mut renderer = TerminalRenderer::new(self.config.delay_ms, !self.config.no_color);
        renderer.render(&grid, "Original Grid");
        thread::sleep(INTRO_PAUSE);
        Ok(Self::run_on(grid, algorithm.as_mut(), &mut renderer))
    }

    /// Run `algorithm` on `grid` from its start to its target and collect
    /// statistics.
    pub fn run_on(
        mut grid: Grid,
        algorithm: &mut dyn SearchAlgorithm,
        renderer: &mut dyn Renderer,
    ) -> RunReport {
        let name = algorithm.name();
        let optimal = Self::optimal_path_length(&grid);
        let (start, target) = (grid.start, grid.target);
        debug!(algorithm = %name, ?optimal, "running search");

        let mut counter = FrameCounter {
            inner: renderer,
            frames: 0,
        };
        let started = Instant::now();
        let outcome = algorithm.search(&mut grid, start, target, &mut counter);
        let elapsed = started.elapsed();

        let mut statistics = SearchStatistics::new(&name, optimal);
        statistics.found = outcome.found;
        statistics.expanded = outcome.expanded;
        statistics.path_length = outcome.path_length();
        statistics.depth_limit = outcome.depth_limit;
        statistics.meeting_point = outcome.meeting_point;
        statistics.frames = counter.frames;
        statistics.elapsed = elapsed;
        statistics.calculate_efficiency();

        info!(
            algorithm = %name,
            found = outcome.found,
            expanded = outcome.expanded,
            "search finished"
        );
        RunReport {
            statistics,
            outcome,
            grid,
        }
    }

    /// Run every algorithm headlessly on the standard board.
    /// Depth-limited search uses `depth_limit`, or the cell count if unset.
    pub fn run_all_algorithms(depth_limit: Option<usize>) -> Result<Vec<RunReport>> {
        let limit = depth_limit.unwrap_or(ROWS * COLS);
        Self::run_headless(&AlgorithmKind::ALL, Some(limit))
    }

    /// Run each of `kinds` headlessly on a fresh standard board, in order.
    /// Fails on the first algorithm that cannot be built.
    pub fn run_headless(
        kinds: &[AlgorithmKind],
        depth_limit: Option<usize>,
    ) -> Result<Vec<RunReport>> {
        kinds
            .iter()
            .map(|kind| {
                let mut algorithm = kind.build(depth_limit)?;
                let mut renderer = HeadlessRenderer::new();
                let grid = Grid::standard();
                Ok(Self::run_on(grid, algorithm.as_mut(), &mut renderer))
            })
            .collect::<Result<Vec<_>>>()
    }

    pub fn print_comparison_results(reports: &[RunReport]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===");
        println!();
        println!(
            "{:<16} {:<8} {:<10} {:<8} {:<8} {:<12} {:<8} {:<12}",
            "Algorithm", "Found", "Expanded", "Path", "Optimal", "Efficiency", "Frames", "Elapsed"
        );
        println!("{}", "-".repeat(90));

        for report in reports {
            let stats = &report.statistics;
            let path_str = stats
                .path_length
                .map_or_else(|| "-".to_string(), |len| len.to_string());
            let optimal_str = stats
                .optimal_path_length
                .map_or_else(|| "-".to_string(), |len| len.to_string());
            println!(
                "{:<16} {:<8} {:<10} {:<8} {:<8} {:<12} {:<8} {:<12}",
                stats.algorithm,
                if stats.found { "✓" } else { "✗" },
                stats.expanded,
                path_str,
                optimal_str,
                format!("{:.3}", stats.route_efficiency),
                stats.frames,
                format!("{:.2?}", stats.elapsed),
            );
        }

        println!();
        let successful: Vec<_> = reports.iter().filter(|r| r.statistics.found).collect();
        if successful.is_empty() {
            println!("No algorithm reached the target.");
            return;
        }

        if let Some(shortest) = successful.iter().min_by_key(|r| r.statistics.path_length) {
            println!(
                "Shortest path: {} ({} moves)",
                shortest.statistics.algorithm,
                shortest.statistics.path_length.unwrap_or_default()
            );
        }
        if let Some(leanest) = successful.iter().min_by_key(|r| r.statistics.expanded) {
            println!(
                "Fewest expansions: {} ({} cells)",
                leanest.statistics.algorithm, leanest.statistics.expanded
            );
        }
    }

    /// True unit-cost shortest edge count from start to target, or `None`
    /// when the target is unreachable.
    pub fn optimal_path_length(grid: &Grid) -> Option<usize> {
        let target = grid.target;
        bfs(&grid.start, |&p| neighbors(grid, p), |&p| p == target)
            .map(|path| path.len().saturating_sub(1))
    }
}
