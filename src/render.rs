use crate::grid::{Cell, Grid};
use std::thread;
use std::time::Duration;

pub const DEFAULT_DELAY_MS: u64 = 150;

/// Receives a snapshot of the board after every state-changing search step.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, label: &str);
}

/// Draws the board in the terminal and pauses so the animation is visible.
pub struct TerminalRenderer {
    delay: Duration,
    color: bool,
}

impl TerminalRenderer {
    pub fn new(delay_ms: u64, color: bool) -> Self {
        TerminalRenderer {
            delay: Duration::from_millis(delay_ms),
            color,
        }
    }

    fn background(cell: Cell) -> &'static str {
        match cell {
            Cell::Empty => "\x1B[30;47m",
            Cell::Wall => "\x1B[30;41m",
            Cell::Start => "\x1B[30;42m",
            Cell::Target => "\x1B[97;44m",
            Cell::Frontier => "\x1B[30;46m",
            Cell::Explored => "\x1B[30;43m",
            Cell::Path => "\x1B[97;45m",
        }
    }

    fn draw(&self, grid: &Grid, label: &str) -> String {
        if !self.color {
            return format!("=== {} ===\n{}", label, grid);
        }

        let mut out = format!("=== {} ===\n", label);
        for row in &grid.cells {
            for &cell in row {
                out.push_str(Self::background(cell));
                out.push_str(&format!("{:^4}", cell.glyph()));
                out.push_str("\x1B[0m");
            }
            out.push('\n');
        }
        out.push_str(
            "Legend: white=empty red=wall green=start blue=target \
             cyan=frontier yellow=explored purple=path\n",
        );
        out
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        TerminalRenderer::new(DEFAULT_DELAY_MS, true)
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, grid: &Grid, label: &str) {
        // Clear screen, cursor home.
        print!("\x1B[2J\x1B[1;1H");
        print!("{}", self.draw(grid, label));
        thread::sleep(self.delay);
    }
}

/// Counts snapshots without drawing anything. Used for comparisons and when
/// visualization is turned off.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: usize,
    pub last_label: Option<String>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, _grid: &Grid, label: &str) {
        self.frames += 1;
        self.last_label = Some(label.to_string());
    }
}
