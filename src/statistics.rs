use crate::grid::Position;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub algorithm: String,
    pub found: bool,
    pub expanded: usize,
    pub path_length: Option<usize>,
    pub optimal_path_length: Option<usize>,
    pub route_efficiency: f64,
    pub depth_limit: Option<usize>,
    pub meeting_point: Option<Position>,
    pub frames: usize,
    pub elapsed: Duration,
}

impl SearchStatistics {
    pub fn new(algorithm: &str, optimal_path_length: Option<usize>) -> Self {
        SearchStatistics {
            algorithm: algorithm.to_string(),
            found: false,
            expanded: 0,
            path_length: None,
            optimal_path_length,
            route_efficiency: 0.0,
            depth_limit: None,
            meeting_point: None,
            frames: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Path length divided by the true shortest length; 1.0 is optimal.
    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match (self.path_length, self.optimal_path_length) {
            (Some(len), Some(optimal)) if optimal > 0 => len as f64 / optimal as f64,
            _ => 0.0,
        };
    }

    pub fn extra_moves(&self) -> Option<usize> {
        Some(self.path_length?.saturating_sub(self.optimal_path_length?))
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Target found: {}", if self.found { "yes" } else { "no" })?;
        writeln!(f, "Cells expanded: {}", self.expanded)?;

        match self.path_length {
            Some(len) => writeln!(f, "Path length: {}", len)?,
            None => writeln!(f, "Path length: -")?,
        }
        if let Some(optimal) = self.optimal_path_length {
            writeln!(f, "Shortest possible: {}", optimal)?;
        }
        if let Some(limit) = self.depth_limit {
            writeln!(f, "Depth limit: {}", limit)?;
        }
        if let Some(meet) = self.meeting_point {
            writeln!(f, "Meeting point: {}", meet)?;
        }

        if self.route_efficiency > 0.0 {
            writeln!(f, "Route efficiency: {:.3}", self.route_efficiency)?;
            if let Some(extra) = self.extra_moves().filter(|&extra| extra > 0) {
                writeln!(f, "Extra moves over the shortest path: {}", extra)?;
            }
        }

        writeln!(f, "Frames drawn: {}", self.frames)?;
        writeln!(f, "Elapsed: {:.2?}", self.elapsed)?;
        Ok(())
    }
}
