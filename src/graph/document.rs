use super::{Branch, Edge, Node, NodeKind};
use crate::error::DocumentError;
use serde::Deserialize;

/// The graph document produced by the node editor:
/// `{ "nodes": [...], "edges": [...] }`.
///
/// Field aliases accept the editor's native spellings (`type` for the node
/// kind, `sourceHandle` for the branch label) alongside the canonical ones.
#[derive(Debug, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeDocument>,
    pub edges: Vec<EdgeDocument>,
}

/// One node as the editor serializes it.
#[derive(Debug, Deserialize)]
pub struct NodeDocument {
    pub id: String,
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl NodeDocument {
    pub(super) fn into_node(self) -> Result<Node, DocumentError> {
        let kind = match self.kind.as_str() {
            "start" => NodeKind::Start,
            "end" => NodeKind::End,
            "process" => NodeKind::Process,
            "input" => NodeKind::Input,
            "output" => NodeKind::Output,
            "decision" => NodeKind::Decision,
            "for" => NodeKind::For,
            "while" => NodeKind::While,
            "repeat" => NodeKind::Repeat,
            _ => {
                return Err(DocumentError::UnknownNodeKind {
                    node_id: self.id,
                    kind: self.kind,
                });
            }
        };
        Ok(Node {
            id: self.id,
            kind,
            code: self.code,
        })
    }
}

/// One edge as the editor serializes it. The branch label is the editor's
/// source-handle id: `"true"`, `"false"`, or absent for plain edges.
#[derive(Debug, Deserialize)]
pub struct EdgeDocument {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub branch: Option<String>,
}

impl EdgeDocument {
    pub(super) fn into_edge(self) -> Result<Edge, DocumentError> {
        let branch = match self.branch.as_deref() {
            None => None,
            Some("true") => Some(Branch::True),
            Some("false") => Some(Branch::False),
            Some(label) => {
                return Err(DocumentError::InvalidBranchLabel {
                    edge_id: self.id,
                    label: label.to_string(),
                });
            }
        };
        Ok(Edge {
            id: self.id,
            source: self.source,
            target: self.target,
            branch,
        })
    }
}
