//! # Nagare - Flowchart Execution Engine
//!
//! **Nagare** interprets a user-authored directed graph of typed nodes as an
//! imperative program: sequential flow, branching, loops, mutable variable
//! state, console output, and suspending user input, all under a
//! runaway-execution guard. It is the runtime behind a visual programming
//! lesson tool; the graphical editor producing the graph and the console UI
//! rendering the log are external collaborators.
//!
//! ## Core Workflow
//!
//! 1.  **Load the graph**: deserialize the editor's `{nodes, edges}` JSON
//!     document into a [`FlowGraph`](graph::FlowGraph) (or build one
//!     directly from [`Node`](graph::Node)/[`Edge`](graph::Edge) values).
//! 2.  **Create a session**: a [`Session`](interpreter::Session) owns one
//!     run's variable context, log, and step guard.
//! 3.  **Drive it**: call `run()` to advance until the machine suspends for
//!     input or terminates; answer suspensions with `resume(value)`; step
//!     one transition at a time with `step()` if the UI wants to animate
//!     progress; stop early with `cancel()`.
//! 4.  **Read the record**: the ordered log lines and the final
//!     [`RunState`](interpreter::RunState) are the complete, deterministic
//!     result of the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! let graph = FlowGraph::from_json(
//!     r#"{
//!         "nodes": [
//!             { "id": "1", "kind": "start" },
//!             { "id": "2", "kind": "process", "code": "x = 5" },
//!             { "id": "3", "kind": "output", "code": "x" },
//!             { "id": "4", "kind": "end" }
//!         ],
//!         "edges": [
//!             { "id": "a", "source": "1", "target": "2" },
//!             { "id": "b", "source": "2", "target": "3" },
//!             { "id": "c", "source": "3", "target": "4" }
//!         ]
//!     }"#,
//! )
//! .expect("valid graph document");
//!
//! let mut session = Session::new(graph);
//! session.run();
//!
//! assert_eq!(session.state(), &RunState::Finished);
//! let lines: Vec<&str> = session.log().lines().iter().map(String::as_str).collect();
//! assert_eq!(lines, ["> 5", "EXECUTION FINISHED"]);
//! ```
//!
//! Input nodes surface as an explicit suspension instead of a hidden
//! callback:
//!
//! ```rust
//! use nagare::prelude::*;
//! use nagare::graph::{Edge, Node, NodeKind};
//!
//! let graph = FlowGraph::new(
//!     vec![
//!         Node::new("1", NodeKind::Start, None),
//!         Node::new("2", NodeKind::Input, Some("x = ...")),
//!         Node::new("3", NodeKind::Output, Some("x * 2")),
//!         Node::new("4", NodeKind::End, None),
//!     ],
//!     vec![
//!         Edge { id: "a".into(), source: "1".into(), target: "2".into(), branch: None },
//!         Edge { id: "b".into(), source: "2".into(), target: "3".into(), branch: None },
//!         Edge { id: "c".into(), source: "3".into(), target: "4".into(), branch: None },
//!     ],
//! );
//!
//! let mut session = Session::new(graph);
//! assert!(session.run().is_suspended());
//!
//! session.resume("21");
//! session.run();
//! let lines: Vec<&str> = session.log().lines().iter().map(String::as_str).collect();
//! assert_eq!(lines, ["Input: x = 21", "> 42", "EXECUTION FINISHED"]);
//! ```

pub mod console;
pub mod context;
pub mod error;
pub mod expr;
pub mod graph;
pub mod interpreter;
pub mod prelude;
