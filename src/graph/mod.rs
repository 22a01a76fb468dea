//! The graph model: typed nodes, branch-labeled edges, and the read-only
//! lookup view the interpreter walks.
//!
//! The engine performs no eager validation pass. Structural problems — a
//! missing start node, a dangling edge target, an unwired branch — are
//! discovered lazily during execution and reported through the run log.

mod document;

pub use document::{EdgeDocument, GraphDocument, NodeDocument};

use crate::error::DocumentError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node kinds understood by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    End,
    Process,
    Input,
    Output,
    Decision,
    For,
    While,
    Repeat,
}

impl NodeKind {
    /// Branching kinds route via `true`/`false` edges; all others follow a
    /// single unlabeled outgoing edge.
    pub fn is_branching(self) -> bool {
        matches!(self, NodeKind::Decision | NodeKind::For | NodeKind::While)
    }
}

/// The `true`/`false` tag distinguishing a branching node's two outgoing
/// edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    True,
    False,
}

impl From<bool> for Branch {
    fn from(b: bool) -> Self {
        if b { Branch::True } else { Branch::False }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::True => write!(f, "true"),
            Branch::False => write!(f, "false"),
        }
    }
}

/// A single typed unit of the program graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub code: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, code: Option<&str>) -> Self {
        Self {
            id: id.into(),
            kind,
            code: code.map(str::to_string),
        }
    }

    /// The node's code, if it carries any beyond whitespace. Nodes with
    /// blank code behave as no-ops.
    pub fn code(&self) -> Option<&str> {
        self.code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// A directed connection between two nodes, optionally branch-tagged.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub branch: Option<Branch>,
}

/// A read-only view over one run's nodes and edges.
///
/// Lookups resolve against the document order the editor supplied, so
/// duplicate wiring degrades deterministically: the first matching edge
/// wins.
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: AHashMap<String, usize>,
}

impl FlowGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();
        Self {
            nodes,
            edges,
            index,
        }
    }

    /// Builds a graph from an editor document, resolving node kind and
    /// branch label strings.
    pub fn from_document(doc: GraphDocument) -> Result<Self, DocumentError> {
        let nodes = doc
            .nodes
            .into_iter()
            .map(NodeDocument::into_node)
            .collect::<Result<Vec<_>, _>>()?;
        let edges = doc
            .edges
            .into_iter()
            .map(EdgeDocument::into_edge)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(nodes, edges))
    }

    /// Parses and converts an editor document straight from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let doc: GraphDocument =
            serde_json::from_str(json).map_err(|e| DocumentError::JsonParse(e.to_string()))?;
        Self::from_document(doc)
    }

    /// The first `start` node in document order, if any.
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|node| node.kind == NodeKind::Start)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// The first outgoing edge of `id`, regardless of branch label.
    pub fn outgoing(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.source == id)
    }

    /// The first outgoing edge of `id` carrying the given branch label.
    pub fn branch_edge(&self, id: &str, branch: Branch) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|edge| edge.source == id && edge.branch == Some(branch))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
