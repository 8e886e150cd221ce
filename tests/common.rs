#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use wayfind::Graph;

/// Undirected weighted graph over static labels, neighbours kept in insertion order
#[derive(Debug, Default, Clone)]
pub struct Borders {
    adjacency: BTreeMap<&'static str, Vec<&'static str>>,
    lengths: HashMap<(&'static str, &'static str), f64>,
}

impl Borders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, name: &'static str) -> Self {
        self.adjacency.entry(name).or_default();
        self
    }

    pub fn border(mut self, a: &'static str, b: &'static str, length: f64) -> Self {
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        self.lengths.insert((a, b), length);
        self.lengths.insert((b, a), length);
        self
    }

    pub fn length(&self, a: &&'static str, b: &&'static str) -> f64 {
        self.lengths[&(*a, *b)]
    }
}

impl Graph for Borders {
    type Vertex = &'static str;

    fn neighbours(&self, vertex: &&'static str) -> Vec<&'static str> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    fn contains_vertex(&self, vertex: &&'static str) -> bool {
        self.adjacency.contains_key(vertex)
    }
}

/// The western European border network plus a separate RO-HU component
pub fn europe() -> Borders {
    Borders::new()
        .border("NL", "BE", 100.0)
        .border("DE", "NL", 200.0)
        .border("DE", "BE", 30.0)
        .border("LUX", "BE", 60.0)
        .border("LUX", "DE", 50.0)
        .border("FR", "LUX", 30.0)
        .border("FR", "BE", 110.0)
        .border("FR", "DE", 50.0)
        .border("UK", "BE", 70.0)
        .border("UK", "FR", 150.0)
        .border("UK", "NL", 250.0)
        .border("RO", "HU", 250.0)
}

/// Open cell of a grid maze, addressed by row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(pub usize, pub usize);

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Grid maze parsed from text.
///
/// `#` is a wall, `S` the entry, `E` the exit, digits are open cells with
/// that entry cost, any other character is an open cell with cost 1.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<Vec<char>>,
    pub entry: Cell,
    pub exit: Cell,
}

impl Maze {
    pub fn parse(text: &str) -> Self {
        let cells: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let find = |wanted: char| {
            cells
                .iter()
                .enumerate()
                .find_map(|(row, line)| {
                    line.iter()
                        .position(|&c| c == wanted)
                        .map(|col| Cell(row, col))
                })
                .expect("maze marker present")
        };
        let entry = find('S');
        let exit = find('E');

        Self { cells, entry, exit }
    }

    pub fn is_open(&self, Cell(row, col): Cell) -> bool {
        self.cells
            .get(row)
            .and_then(|line| line.get(col))
            .is_some_and(|&c| c != '#')
    }

    /// Cost of stepping into `to`
    pub fn step_cost(&self, _from: &Cell, to: &Cell) -> f64 {
        let c = self.cells[to.0][to.1];
        c.to_digit(10).map_or(1.0, f64::from)
    }
}

impl Graph for Maze {
    type Vertex = Cell;

    fn neighbours(&self, &Cell(row, col): &Cell) -> Vec<Cell> {
        let mut candidates = vec![Cell(row + 1, col), Cell(row, col + 1)];
        if row > 0 {
            candidates.push(Cell(row - 1, col));
        }
        if col > 0 {
            candidates.push(Cell(row, col - 1));
        }
        candidates
            .into_iter()
            .filter(|&cell| self.is_open(cell))
            .collect()
    }

    fn contains_vertex(&self, vertex: &Cell) -> bool {
        self.is_open(*vertex)
    }
}
