use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Accumulated cost along a walk.
///
/// Ordering is total (`f64::total_cmp`) so weights can key a binary heap.
/// Edge weights fed into a search must be finite and non-negative.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether this value is usable as a single edge weight
    pub fn is_valid_edge(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Weight {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl From<u32> for Weight {
    fn from(hops: u32) -> Self {
        Weight(f64::from(hops))
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Search algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Backtracking depth-first search; finds some path
    #[serde(alias = "dfs")]
    DepthFirst,
    /// Level-order search; finds a path with the fewest edges
    #[serde(alias = "bfs")]
    BreadthFirst,
    #[default]
    /// Weighted search; finds a path with the smallest total weight
    #[serde(alias = "shortest")]
    Dijkstra,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::Dijkstra => "dijkstra",
        }
    }

    /// Whether the strategy takes edge weights into account while searching
    pub fn is_weighted(&self) -> bool {
        matches!(self, Strategy::Dijkstra)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dijkstra" | "shortest" => Ok(Strategy::Dijkstra),
            other => Err(format!(
                "unknown strategy '{}' (expected: dfs, bfs, dijkstra)",
                other
            )),
        }
    }
}
