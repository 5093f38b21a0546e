use std::borrow::Cow;
use std::fs;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};

use crate::config::Format;
use crate::map::Board;
use crate::solver::SearchNode;

const OUTPUT_FILE: &str = "state-space.dot";

type Nd = usize;
type Ed = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    Queued,
    Duplicate,
    Unique,
    Solution,
}

/// Everything the search created, for drawing with graphviz.
#[derive(Debug)]
pub(crate) struct Graph<'a> {
    board: &'a Board,
    nodes: Vec<(&'a SearchNode<'a>, Type)>,
    edges: Vec<Ed>,
}

impl<'a> Graph<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self {
            board,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, node: &'a SearchNode<'a>) {
        // nodes are created with consecutive indices
        assert_eq!(node.index, self.nodes.len());
        self.nodes.push((node, Type::Queued));
        if let Some(prev) = node.prev {
            self.edges.push((prev.index, node.index));
        }
    }

    pub(crate) fn mark_duplicate(&mut self, node: &SearchNode<'_>) {
        self.nodes[node.index].1 = Type::Duplicate;
    }

    pub(crate) fn mark_unique(&mut self, node: &SearchNode<'_>) {
        self.nodes[node.index].1 = Type::Unique;
    }

    /// Marks the solution path (if any) and writes the graph to a file.
    pub(crate) fn finish(&mut self, solved: Option<&SearchNode<'_>>) {
        let mut cur = solved;
        while let Some(node) = cur {
            self.nodes[node.index].1 = Type::Solution;
            cur = node.prev;
        }

        self.write_dot();
    }

    fn write_dot(&self) {
        let mut writer = Vec::new();
        if let Err(err) = dot::render(self, &mut writer) {
            warn!("Failed to render state space: {}", err);
            return;
        }
        match fs::write(OUTPUT_FILE, &writer) {
            Ok(()) => info!(
                "State space with {} nodes written to {}",
                self.nodes.len(),
                OUTPUT_FILE
            ),
            Err(err) => warn!("Failed to write {}: {}", OUTPUT_FILE, err),
        }
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph<'a> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let node = self.nodes[*n].0;
        LabelText::EscStr(
            format!(
                "#{} d: {}\n{}",
                node.index,
                node.dist,
                self.board.format_with_state(Format::Letters, &node.state)
            )
            .into(),
        )
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.nodes[*n].1 == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        Some(LabelText::LabelStr(
            match self.nodes[*n].1 {
                Type::Solution => "green",
                Type::Unique => "red",
                Type::Duplicate => "gray",
                Type::Queued => return None,
            }
            .into(),
        ))
    }
}
