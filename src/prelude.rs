//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the nagare crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = std::fs::read_to_string("path/to/graph.json")?;
//! let graph = FlowGraph::from_json(&document)?;
//!
//! let mut session = Session::new(graph);
//! while session.run().is_suspended() {
//!     session.resume("42");
//! }
//!
//! println!("{}", session.log());
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{Branch, FlowGraph, GraphDocument, NodeKind};

// Execution
pub use crate::interpreter::{MAX_BODY_STEPS, MAX_STEPS, RunState, Session, StepGuard};

// Run-scoped state
pub use crate::console::RunLog;
pub use crate::context::Context;

// Expression language
pub use crate::expr::{Value, eval_expression, exec_statement};

// Error types
pub use crate::error::{DocumentError, ExprError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
