//! Common test utilities for building flow graphs.
use nagare::graph::{Branch, Edge, FlowGraph, Node, NodeKind};
use nagare::interpreter::Session;

#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind, code: Option<&str>) -> Node {
    Node::new(id, kind, code)
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        branch: None,
    }
}

#[allow(dead_code)]
pub fn branch_edge(id: &str, source: &str, target: &str, branch: Branch) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        branch: Some(branch),
    }
}

#[allow(dead_code)]
pub fn lines(session: &Session) -> Vec<&str> {
    session.log().lines().iter().map(String::as_str).collect()
}

/// `start -> process(x = 5) -> output(x) -> end`
#[allow(dead_code)]
pub fn straight_line_graph() -> FlowGraph {
    FlowGraph::new(
        vec![
            node("1", NodeKind::Start, None),
            node("2", NodeKind::Process, Some("x = 5")),
            node("3", NodeKind::Output, Some("x")),
            node("4", NodeKind::End, None),
        ],
        vec![
            edge("a", "1", "2"),
            edge("b", "2", "3"),
            edge("c", "3", "4"),
        ],
    )
}

/// `start -> process(x = <initial>) -> decision(x > 3)`, with the true
/// branch printing `big`, and optionally a false branch printing `small`.
#[allow(dead_code)]
pub fn decision_graph(initial: f64, with_false_branch: bool) -> FlowGraph {
    let mut nodes = vec![
        node("1", NodeKind::Start, None),
        node("2", NodeKind::Process, Some(&format!("x = {}", initial))),
        node("3", NodeKind::Decision, Some("x > 3")),
        node("4", NodeKind::Output, Some("'big'")),
        node("5", NodeKind::End, None),
    ];
    let mut edges = vec![
        edge("a", "1", "2"),
        edge("b", "2", "3"),
        branch_edge("c", "3", "4", Branch::True),
        edge("d", "4", "5"),
    ];
    if with_false_branch {
        nodes.push(node("6", NodeKind::Output, Some("'small'")));
        edges.push(branch_edge("e", "3", "6", Branch::False));
        edges.push(edge("f", "6", "5"));
    }
    FlowGraph::new(nodes, edges)
}

/// `start -> for(i = 0; i < 3; i++)` with an `output(i)` body wired back to
/// the loop, and the exit wired to `end`.
#[allow(dead_code)]
pub fn counting_loop_graph() -> FlowGraph {
    FlowGraph::new(
        vec![
            node("1", NodeKind::Start, None),
            node("2", NodeKind::For, Some("i = 0; i < 3; i++")),
            node("3", NodeKind::Output, Some("i")),
            node("4", NodeKind::End, None),
        ],
        vec![
            edge("a", "1", "2"),
            branch_edge("b", "2", "3", Branch::True),
            edge("c", "3", "2"),
            branch_edge("d", "2", "4", Branch::False),
        ],
    )
}

/// `start -> input(x = ...) -> output(x) -> end`
#[allow(dead_code)]
pub fn echo_input_graph() -> FlowGraph {
    FlowGraph::new(
        vec![
            node("1", NodeKind::Start, None),
            node("2", NodeKind::Input, Some("x = ...")),
            node("3", NodeKind::Output, Some("x")),
            node("4", NodeKind::End, None),
        ],
        vec![
            edge("a", "1", "2"),
            edge("b", "2", "3"),
            edge("c", "3", "4"),
        ],
    )
}

/// A `while (true)` wired back to itself through a `repeat` node, with no
/// false branch: never terminates on its own.
#[allow(dead_code)]
pub fn forever_while_graph() -> FlowGraph {
    FlowGraph::new(
        vec![
            node("1", NodeKind::Start, None),
            node("2", NodeKind::While, Some("true")),
            node("3", NodeKind::Repeat, None),
        ],
        vec![
            edge("a", "1", "2"),
            branch_edge("b", "2", "3", Branch::True),
            edge("c", "3", "2"),
        ],
    )
}

/// A manual countdown loop: `n = 3`, `while (n > 0)` decrementing through a
/// `repeat` back-edge, exiting to `end`.
#[allow(dead_code)]
pub fn countdown_while_graph() -> FlowGraph {
    FlowGraph::new(
        vec![
            node("1", NodeKind::Start, None),
            node("2", NodeKind::Process, Some("n = 3")),
            node("3", NodeKind::While, Some("n > 0")),
            node("4", NodeKind::Process, Some("n = n - 1")),
            node("5", NodeKind::Repeat, None),
            node("6", NodeKind::End, None),
        ],
        vec![
            edge("a", "1", "2"),
            edge("b", "2", "3"),
            branch_edge("c", "3", "4", Branch::True),
            edge("d", "4", "5"),
            edge("e", "5", "3"),
            branch_edge("f", "3", "6", Branch::False),
        ],
    )
}
