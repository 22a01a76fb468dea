use crate::expr::Value;
use thiserror::Error;

/// Errors that can occur while lexing, parsing, or evaluating node code.
///
/// These never escape a running [`Session`](crate::interpreter::Session):
/// the interpreter converts them into tagged log lines at the node that
/// raised them and carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("Unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("Unexpected end of code")]
    UnexpectedEnd,

    #[error("{0} is not defined")]
    UndefinedVariable(String),

    #[error(
        "Type mismatch during operation '{operation}': expected {expected}, but found value '{found}'"
    )]
    TypeMismatch {
        operation: String,
        expected: String,
        found: Value,
    },

    #[error("Invalid assignment target")]
    InvalidAssignment,
}

/// Errors that can occur when converting an editor graph document into a
/// [`FlowGraph`](crate::graph::FlowGraph).
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParse(String),

    #[error("Node '{node_id}' has an unknown kind: '{kind}'")]
    UnknownNodeKind { node_id: String, kind: String },

    #[error("Edge '{edge_id}' carries an invalid branch label: '{label}'")]
    InvalidBranchLabel { edge_id: String, label: String },
}
