mod backtracking;
#[cfg(feature = "graph")]
mod graph;
mod stats;

use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashSet;
use typed_arena::Arena;

use crate::data::DIRECTIONS;
use crate::level::Level;
use crate::map::Board;
use crate::moves::Moves;
use crate::slide::expand;
use crate::state::State;
use crate::Solve;

#[cfg(feature = "graph")]
use self::graph::Graph;

pub use self::backtracking::reconstruct_moves;
pub use self::stats::Stats;

use self::backtracking::backtrack_path;

/// Result of a search - finding no solution is not an error.
pub struct SolverOutput {
    /// From the initial state to a solved one, inclusive.
    pub path_states: Option<Vec<State>>,
    /// Every state popped from the frontier in order, duplicates included.
    pub trace: Vec<State>,
    pub stats: Stats,
}

impl SolverOutput {
    fn new(path_states: Option<Vec<State>>, trace: Vec<State>, stats: Stats) -> Self {
        Self {
            path_states,
            trace,
            stats,
        }
    }

    pub fn nodes_visited(&self) -> usize {
        self.trace.len()
    }

    pub fn moves(&self) -> Option<Moves> {
        self.path_states
            .as_ref()
            .map(|states| reconstruct_moves(states))
    }
}

impl Debug for SolverOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path_states {
            None => writeln!(f, "No solution")?,
            Some(ref states) => writeln!(f, "Steps: {}", states.len() - 1)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, print_status: bool) -> SolverOutput {
        search(&self.board, &self.state, print_status)
    }
}

#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    /// Order of creation, only used to identify nodes in logs and graphs.
    pub(crate) index: usize,
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    pub(crate) dist: usize,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        index: usize,
        state: State,
        prev: Option<&'a SearchNode<'a>>,
        dist: usize,
    ) -> Self {
        Self {
            index,
            state,
            prev,
            dist,
        }
    }
}

/// Depth-first search over all slides of all pieces.
///
/// Nodes are only checked for duplicates when popped, after they're recorded and checked for solution,
/// so the same state can be popped several times but only gets expanded the first time.
pub fn search(board: &Board, initial_state: &State, print_status: bool) -> SolverOutput {
    debug!("Search called");

    // nodes live until the search ends, frontier entries and fingerprints just borrow them
    let arena = Arena::new();

    let mut stats = Stats::new();
    let mut trace = Vec::new();
    let mut visited = FnvHashSet::default();
    let mut to_visit = Vec::new();
    let mut created = 0;

    #[cfg(feature = "graph")]
    let mut graph = Graph::new(board);

    let start: &SearchNode<'_> =
        arena.alloc(SearchNode::new(created, initial_state.clone(), None, 0));
    created += 1;
    stats.add_created(start);
    #[cfg(feature = "graph")]
    graph.add(start);
    to_visit.push(start);

    while let Some(cur_node) = to_visit.pop() {
        trace.push(cur_node.state.clone());
        if stats.add_visited(cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        if cur_node.state.is_solved() {
            debug!("Solved at node {}, backtracking path", cur_node.index);
            #[cfg(feature = "graph")]
            graph.finish(Some(cur_node));
            return SolverOutput::new(Some(backtrack_path(cur_node)), trace, stats);
        }

        if !visited.insert(cur_node.state.fingerprint()) {
            stats.add_reached_duplicate(cur_node);
            #[cfg(feature = "graph")]
            graph.mark_duplicate(cur_node);
            continue;
        }
        #[cfg(feature = "graph")]
        graph.mark_unique(cur_node);

        for &dir in &DIRECTIONS {
            for neighbor_state in expand(board, &cur_node.state, dir) {
                let next_node: &SearchNode<'_> = arena.alloc(SearchNode::new(
                    created,
                    neighbor_state,
                    Some(cur_node),
                    cur_node.dist + 1,
                ));
                created += 1;
                stats.add_created(next_node);
                #[cfg(feature = "graph")]
                graph.add(next_node);
                to_visit.push(next_node);
            }
        }
    }

    debug!("Frontier exhausted after {} nodes", trace.len());
    #[cfg(feature = "graph")]
    graph.finish(None);
    SolverOutput::new(None, trace, stats)
}
