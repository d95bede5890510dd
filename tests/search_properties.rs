use grid_search_visualizer::algorithms::path::trace_back;
use grid_search_visualizer::algorithms::{
    Bidirectional, BreadthFirst, DepthFirst, DepthLimited, IterativeDeepening, SearchAlgorithm,
    SearchOutcome, UniformCost,
};
use grid_search_visualizer::grid::{Cell, Grid, Position, COLS, ROWS};
use grid_search_visualizer::neighbors::neighbors;
use grid_search_visualizer::render::{HeadlessRenderer, Renderer};
use grid_search_visualizer::simulation::Simulation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn all_algorithms() -> Vec<Box<dyn SearchAlgorithm>> {
    vec![
        Box::new(BreadthFirst::new()),
        Box::new(DepthFirst::new()),
        Box::new(UniformCost::new()),
        Box::new(DepthLimited::new(ROWS * COLS)),
        Box::new(IterativeDeepening::new()),
        Box::new(Bidirectional::new()),
    ]
}

fn search(algorithm: &mut dyn SearchAlgorithm, layout: &Grid) -> (SearchOutcome, Grid) {
    let mut grid = layout.clone();
    let (start, target) = (grid.start, grid.target);
    let mut renderer = HeadlessRenderer::new();
    let outcome = algorithm.search(&mut grid, start, target, &mut renderer);
    (outcome, grid)
}

fn open_grid() -> Grid {
    Grid::with_walls(&[], Position::new(4, 7), Position::new(6, 1))
}

/// Seeded layout with roughly a quarter of the cells walled off.
fn random_grid(seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let random_pos = |rng: &mut StdRng| {
        let row = rng.gen_range(0..ROWS);
        Position::new(row, rng.gen_range(0..COLS))
    };

    let start = random_pos(&mut rng);
    let mut target = random_pos(&mut rng);
    while target == start {
        target = random_pos(&mut rng);
    }

    let mut walls = Vec::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            let pos = Position::new(row, col);
            if pos != start && pos != target && rng.gen_bool(0.25) {
                walls.push(pos);
            }
        }
    }
    Grid::with_walls(&walls, start, target)
}

fn assert_valid_path(layout: &Grid, path: &[Position]) {
    assert_eq!(path.first(), Some(&layout.start));
    assert_eq!(path.last(), Some(&layout.target));
    for step in path.windows(2) {
        assert!(
            neighbors(layout, step[0]).contains(&step[1]),
            "{} -> {} is not a legal move",
            step[0],
            step[1]
        );
    }
    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path revisits a cell");
}

#[test]
fn every_algorithm_crosses_an_open_grid() {
    let layout = open_grid();
    for mut algorithm in all_algorithms() {
        let (outcome, grid) = search(algorithm.as_mut(), &layout);
        assert!(outcome.found, "{} missed the target", algorithm.name());
        assert!(!outcome.path.is_empty());
        assert_valid_path(&layout, &outcome.path);
        assert_eq!(grid.count(Cell::Path), outcome.path.len() - 2);
    }
}

#[test]
fn every_algorithm_solves_the_standard_board() {
    let layout = Grid::standard();
    for mut algorithm in all_algorithms() {
        let (outcome, grid) = search(algorithm.as_mut(), &layout);
        assert!(outcome.found, "{} missed the target", algorithm.name());
        assert_valid_path(&layout, &outcome.path);
        assert_eq!(grid.get(layout.start), Cell::Start);
        assert_eq!(grid.get(layout.target), Cell::Target);
        assert_eq!(grid.count(Cell::Wall), 6);
    }
}

#[test]
fn breadth_first_matches_reference_shortest_path() {
    for seed in 0..60 {
        let layout = random_grid(seed);
        let reference = Simulation::optimal_path_length(&layout);
        let (outcome, _) = search(&mut BreadthFirst::new(), &layout);
        assert_eq!(outcome.path_length(), reference, "seed {}", seed);
        if outcome.found {
            assert_valid_path(&layout, &outcome.path);
        }
    }
}

#[test]
fn uniform_cost_matches_breadth_first_length() {
    for seed in 0..60 {
        let layout = random_grid(seed);
        let (bfs, _) = search(&mut BreadthFirst::new(), &layout);
        let (ucs, _) = search(&mut UniformCost::new(), &layout);
        assert_eq!(ucs.path_length(), bfs.path_length(), "seed {}", seed);
    }
}

#[test]
fn depth_limited_fails_below_shortest_depth_and_succeeds_above() {
    let layout = Grid::standard();
    let (shallow, shallow_grid) = search(&mut DepthLimited::new(2), &layout);
    assert!(!shallow.found);
    assert_eq!(shallow_grid.count(Cell::Path), 0);

    let (deep, _) = search(&mut DepthLimited::new(20), &layout);
    assert!(deep.found);
    assert_valid_path(&layout, &deep.path);
}

#[test]
fn depth_limited_never_succeeds_below_shortest_length() {
    for seed in 0..30 {
        let layout = random_grid(seed);
        let Some(shortest) = Simulation::optimal_path_length(&layout) else {
            continue;
        };
        for limit in 0..shortest {
            let (outcome, _) = search(&mut DepthLimited::new(limit), &layout);
            assert!(!outcome.found, "seed {} limit {}", seed, limit);
        }
    }
}

#[test]
fn iterative_deepening_stops_at_first_successful_limit() {
    let mut layouts = vec![Grid::standard(), open_grid()];
    layouts.extend((0..20).map(random_grid));

    for layout in layouts {
        let (outcome, _) = search(&mut IterativeDeepening::new(), &layout);
        let first_success = (0..ROWS * COLS)
            .find(|&limit| search(&mut DepthLimited::new(limit), &layout).0.found);

        assert_eq!(outcome.depth_limit, first_success);
        assert_eq!(outcome.found, first_success.is_some());
        if let (Some(limit), Some(shortest)) =
            (outcome.depth_limit, Simulation::optimal_path_length(&layout))
        {
            assert!(limit >= shortest);
        }
    }
}

#[test]
fn iterative_deepening_redraws_a_fresh_board_each_iteration() {
    struct LabelLog(Vec<(String, usize)>);
    impl Renderer for LabelLog {
        fn render(&mut self, grid: &Grid, label: &str) {
            let marked = grid.count(Cell::Explored) + grid.count(Cell::Frontier);
            self.0.push((label.to_string(), marked));
        }
    }

    let mut grid = Grid::standard();
    let (start, target) = (grid.start, grid.target);
    let mut log = LabelLog(Vec::new());
    IterativeDeepening::new().search(&mut grid, start, target, &mut log);

    let iteration_frames: Vec<_> = log
        .0
        .iter()
        .filter(|(label, _)| label.starts_with("IDDFS depth="))
        .collect();
    assert_eq!(iteration_frames.len(), 19);
    assert!(iteration_frames.iter().all(|(_, marked)| *marked == 0));
}

#[test]
fn bidirectional_halves_join_at_the_meeting_point() {
    let mut layouts = vec![Grid::standard(), open_grid()];
    layouts.extend((0..60).map(random_grid));

    for layout in layouts {
        let (outcome, _) = search(&mut Bidirectional::new(), &layout);
        let reachable = Simulation::optimal_path_length(&layout).is_some();
        assert_eq!(outcome.found, reachable);
        let Some(meet) = outcome.meeting_point else {
            continue;
        };

        let to_start = trace_back(&outcome.parents, meet);
        let to_target = trace_back(&outcome.reverse_parents, meet);
        assert_eq!(to_start.last(), Some(&layout.start));
        assert_eq!(to_target.last(), Some(&layout.target));
        assert!(outcome.path.contains(&meet));
        assert_valid_path(&layout, &outcome.path);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut layouts = vec![Grid::standard()];
    layouts.extend((0..10).map(random_grid));

    for layout in layouts {
        let pairs = all_algorithms().into_iter().zip(all_algorithms());
        for (mut first, mut second) in pairs {
            let (a, grid_a) = search(first.as_mut(), &layout);
            let (b, grid_b) = search(second.as_mut(), &layout);
            assert_eq!(a, b, "{} is not deterministic", first.name());
            assert_eq!(grid_a, grid_b);
        }
    }
}

#[test]
fn neighbor_policy_stays_in_bounds_and_off_walls() {
    for seed in 0..40 {
        let layout = random_grid(seed);
        for row in 0..ROWS {
            for col in 0..COLS {
                for next in neighbors(&layout, Position::new(row, col)) {
                    assert!(next.row < ROWS && next.col < COLS);
                    assert_ne!(layout.get(next), Cell::Wall);
                }
            }
        }
    }
}

#[test]
fn start_is_never_a_parent_map_key() {
    let layout = Grid::standard();
    for mut algorithm in all_algorithms() {
        let (outcome, _) = search(algorithm.as_mut(), &layout);
        let name = algorithm.name();
        assert!(!outcome.parents.contains_key(&layout.start), "{}", name);
    }
}
