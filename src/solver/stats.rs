use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::solver::SearchNode;

#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum::<usize>()
    }

    /// Every pop from the frontier, including duplicates.
    pub fn total_visited(&self) -> usize {
        self.visited_states.iter().sum::<usize>()
    }

    /// Popped after an equal state was already expanded.
    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum::<usize>()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.total_visited() - self.total_reached_duplicates()
    }

    /// Deepest visited depth, `None` before anything is visited.
    pub fn max_depth(&self) -> Option<usize> {
        self.visited_states.len().checked_sub(1)
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    /// Returns true when this is the first node at its depth.
    fn add(counts: &mut Vec<usize>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        // while because depth-first search can reach a new depth through a node
        // that's popped before nodes at lower depths on other branches
        while node.dist >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist] += 1;
        ret
    }

    fn depth_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Visited"),
            Cell::new("Duplicates"),
            Cell::new("Unknown (not reached)"),
        ]));

        // created_states is the longest vec - nothing is visited without being created
        for (depth, &created) in self.created_states.iter().enumerate() {
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&(created - visited).separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total visited: {}", self.total_visited().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "States visited total: {}", visited.separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Unique visited total: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "Created but not reached total: {}",
            (created - visited).separated_string()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.depth_table())
    }
}
