//! The interpreter core: a per-run state machine over the flow graph.
//!
//! A [`Session`] owns everything one run needs — the graph view, the
//! variable [`Context`], the [`RunLog`], the [`StepGuard`], and the current
//! node pointer. Each [`Session::step`] performs exactly one outer
//! transition; [`Session::run`] drives steps until the machine suspends for
//! input or reaches a terminal state. "Waiting for input" is a first-class
//! [`RunState::Suspended`] state resolved by [`Session::resume`], and a run
//! can be stopped from outside at any point with [`Session::cancel`].
//!
//! No error type escapes this module's API: evaluator and structural
//! failures are reported as log lines, and the log plus the final state are
//! the complete user-visible record of a run.

mod guard;

pub use guard::{MAX_BODY_STEPS, MAX_STEPS, StepGuard};

use crate::console::RunLog;
use crate::context::Context;
use crate::expr::{Value, eval_expression, exec_statement};
use crate::graph::{Branch, FlowGraph, Node, NodeKind};
use itertools::Itertools;

/// The observable state of one execution session.
#[derive(Debug, Clone, PartialEq)]
pub enum RunState {
    /// The machine has more transitions to make.
    Running,
    /// Blocked on user input; resolved by [`Session::resume`].
    Suspended { prompt: String, var: String },
    /// An `end` node was reached.
    Finished,
    /// A structural dead end, a missing start node, or the step guard
    /// stopped the run.
    Aborted,
    /// [`Session::cancel`] stopped the run.
    Cancelled,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Finished | RunState::Aborted | RunState::Cancelled
        )
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, RunState::Suspended { .. })
    }
}

/// One execution run over a flow graph.
///
/// Sessions are single-use: create one per run and discard it afterwards.
/// All mutation goes through `&mut self`, so the context and log have
/// exactly one writer for the lifetime of the run.
#[derive(Debug)]
pub struct Session {
    graph: FlowGraph,
    ctx: Context,
    log: RunLog,
    guard: StepGuard,
    current: Option<String>,
    state: RunState,
    started: bool,
}

impl Session {
    pub fn new(graph: FlowGraph) -> Self {
        Self {
            graph,
            ctx: Context::new(),
            log: RunLog::new(),
            guard: StepGuard::new(MAX_STEPS),
            current: None,
            state: RunState::Running,
            started: false,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn log(&self) -> &RunLog {
        &self.log
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The id of the node the machine is positioned on, for UIs that
    /// highlight execution progress.
    pub fn current_node(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Total steps charged against the global guard so far.
    pub fn steps_taken(&self) -> u32 {
        self.guard.steps()
    }

    /// Advances until the run suspends for input or reaches a terminal
    /// state.
    pub fn run(&mut self) -> &RunState {
        while matches!(self.state, RunState::Running) {
            self.step();
        }
        &self.state
    }

    /// Performs exactly one outer transition. Stepping a suspended or
    /// terminal session is a no-op; callers wanting a visualization delay
    /// between transitions sleep between calls.
    pub fn step(&mut self) -> &RunState {
        if !matches!(self.state, RunState::Running) {
            return &self.state;
        }

        if !self.started {
            self.started = true;
            match self.graph.start_node() {
                Some(start) => self.current = Some(start.id.clone()),
                None => {
                    self.log.append("Error: No Start Node found.");
                    self.abort();
                    return &self.state;
                }
            }
        }

        let Some(id) = self.current.clone() else {
            self.abort();
            return &self.state;
        };

        if !self.guard.tick() {
            self.log.append(format!(
                "Max steps ({}) reached. Possible infinite loop.",
                self.guard.cap()
            ));
            self.abort();
            return &self.state;
        }

        let Some(node) = self.graph.node(&id).cloned() else {
            self.log.append("Dead end.");
            self.abort();
            return &self.state;
        };

        match node.kind {
            NodeKind::Start | NodeKind::Repeat => self.advance_from(&node.id),

            NodeKind::End => {
                self.log.append("EXECUTION FINISHED");
                self.state = RunState::Finished;
                self.current = None;
            }

            NodeKind::Process => {
                if let Some(code) = node.code() {
                    if let Err(e) = exec_statement(code, &mut self.ctx) {
                        self.log.append(format!("Process Error: {}", e));
                    }
                }
                self.advance_from(&node.id);
            }

            NodeKind::Output => {
                if let Some(code) = node.code() {
                    match eval_expression(code, &self.ctx) {
                        Ok(value) => self.log.append(format!("> {}", value)),
                        Err(e) => self.log.append(format!("Print Error: {}", e)),
                    }
                }
                self.advance_from(&node.id);
            }

            NodeKind::Input => match node.code() {
                Some(code) => {
                    let var =
                        parse_input_target(code).unwrap_or_else(|| "value".to_string());
                    self.state = RunState::Suspended {
                        prompt: format!("Input for {}: ", var),
                        var,
                    };
                }
                // A blank input node reads nothing.
                None => self.advance_from(&node.id),
            },

            // `while` shares `decision`'s single-shot routing: repetition
            // comes from the author wiring a back-edge, not from the engine.
            NodeKind::Decision | NodeKind::While => {
                let code = node.code().unwrap_or("false");
                let cond = self.eval_condition(code);
                self.log.append(format!("Condition ({}) is {}", code, cond));
                self.take_branch(&node.id, cond);
            }

            NodeKind::For => self.run_for(&node),
        }

        &self.state
    }

    /// Supplies the value a suspended `input` node is waiting for: coerces
    /// it, assigns it, logs it, and moves past the node. Calling this with
    /// no pending input request is a no-op.
    pub fn resume(&mut self, raw: &str) -> &RunState {
        let RunState::Suspended { var, .. } = &self.state else {
            return &self.state;
        };
        let name = var.clone();
        let value = Value::from_input(raw);
        self.log.append(format!("Input: {} = {}", name, value));
        self.ctx.set(name, value);
        self.state = RunState::Running;
        if let Some(id) = self.current.clone() {
            self.advance_from(&id);
        }
        &self.state
    }

    /// Stops a running or suspended session. No-op once terminal.
    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            self.log.append("Execution cancelled.");
            self.state = RunState::Cancelled;
            self.current = None;
        }
    }

    fn abort(&mut self) {
        self.state = RunState::Aborted;
        self.current = None;
    }

    fn eval_condition(&mut self, code: &str) -> bool {
        match eval_expression(code, &self.ctx) {
            Ok(value) => value.is_truthy(),
            Err(e) => {
                self.log.append(format!("Condition Error: {}", e));
                false
            }
        }
    }

    /// Follows the single unlabeled edge out of `id`. A missing edge or a
    /// dangling target is a structural dead end.
    fn advance_from(&mut self, id: &str) {
        let target = self
            .graph
            .outgoing(id)
            .map(|edge| edge.target.clone())
            .filter(|target| self.graph.node(target).is_some());
        match target {
            Some(target) => self.current = Some(target),
            None => {
                self.log.append("Dead end.");
                self.abort();
            }
        }
    }

    /// Follows the branch edge matching `cond` out of `id`.
    fn take_branch(&mut self, id: &str, cond: bool) {
        let target = self
            .graph
            .branch_edge(id, Branch::from(cond))
            .map(|edge| edge.target.clone())
            .filter(|target| self.graph.node(target).is_some());
        match target {
            Some(target) => self.current = Some(target),
            None => {
                self.log.append(format!("Dead end: No path for {}", cond));
                self.abort();
            }
        }
    }

    /// Runs an entire `for` loop within one outer transition, so iteration
    /// cost is proportional to the body's size rather than the whole
    /// graph's.
    fn run_for(&mut self, node: &Node) {
        let header = node.code().and_then(parse_for_header);
        let Some((init, cond, inc)) = header else {
            self.log.append("For loop syntax error. Use: i=0; i<10; i++");
            self.exit_loop(&node.id);
            return;
        };

        if let Err(e) = exec_statement(&init, &mut self.ctx) {
            self.log.append(format!("For Loop Error: {}", e));
            self.exit_loop(&node.id);
            return;
        }

        loop {
            if !self.eval_condition(&cond) {
                break;
            }
            // Each iteration is charged one global step even when the body
            // is empty, so a loop that never ends still hits the cap.
            if !self.guard.tick() {
                break;
            }
            self.run_for_body(&node.id);
            if let Err(e) = exec_statement(&inc, &mut self.ctx) {
                self.log.append(format!("For Loop Error: {}", e));
                break;
            }
        }

        self.log.append("For loop completed");
        if self.guard.exhausted() {
            self.log.append(format!(
                "Max steps ({}) reached. Possible infinite loop.",
                self.guard.cap()
            ));
            self.abort();
            return;
        }
        self.exit_loop(&node.id);
    }

    /// Executes one pass over the straight-line body hanging off the loop's
    /// `true` edge. Only `process` and `output` nodes have effects here;
    /// the walk stops back at the loop, at an `end`, at any branching node,
    /// or once the per-iteration cap truncates the pass.
    fn run_for_body(&mut self, for_id: &str) {
        let Some(entry) = self
            .graph
            .branch_edge(for_id, Branch::True)
            .map(|edge| edge.target.clone())
        else {
            return;
        };

        let mut body_guard = StepGuard::new(MAX_BODY_STEPS);
        let mut current = self.graph.node(&entry).cloned();

        while let Some(node) = current {
            if !body_guard.tick() {
                break;
            }
            // Body visits count toward the global budget as well.
            self.guard.tick();

            match node.kind {
                NodeKind::Output => {
                    if let Some(code) = node.code() {
                        match eval_expression(code, &self.ctx) {
                            Ok(value) => self.log.append(format!("> {}", value)),
                            Err(e) => self.log.append(format!("Print Error: {}", e)),
                        }
                    }
                }
                NodeKind::Process => {
                    if let Some(code) = node.code() {
                        if let Err(e) = exec_statement(code, &mut self.ctx) {
                            self.log.append(format!("Process Error: {}", e));
                        }
                    }
                }
                _ => {}
            }

            current = self
                .graph
                .outgoing(&node.id)
                .and_then(|edge| self.graph.node(&edge.target))
                .filter(|next| {
                    next.id != for_id && next.kind != NodeKind::End && !next.kind.is_branching()
                })
                .cloned();
        }
    }

    /// Leaves a `for` node through its `false` (exit) edge.
    fn exit_loop(&mut self, id: &str) {
        let target = self
            .graph
            .branch_edge(id, Branch::False)
            .map(|edge| edge.target.clone())
            .filter(|target| self.graph.node(target).is_some());
        match target {
            Some(target) => self.current = Some(target),
            None => {
                self.log.append("Dead end.");
                self.abort();
            }
        }
    }
}

/// Splits a `for` header into its `init; condition; increment` clauses.
fn parse_for_header(code: &str) -> Option<(String, String, String)> {
    let (init, cond, inc) = code.split(';').map(str::trim).collect_tuple()?;
    if init.is_empty() || cond.is_empty() || inc.is_empty() {
        return None;
    }
    Some((init.to_string(), cond.to_string(), inc.to_string()))
}

/// Extracts the target variable name from input-node code shaped like
/// `x = ...` (the editor also writes `ctx.x = ...`).
fn parse_input_target(code: &str) -> Option<String> {
    let (lhs, _) = code.split_once('=')?;
    let name = lhs.trim();
    let name = name.strip_prefix("ctx.").unwrap_or(name).trim();
    let mut chars = name.chars();
    let valid_start = chars.next().is_some_and(|c| c.is_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_alphanumeric() || c == '_') {
        Some(name.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_header_requires_three_clauses() {
        assert_eq!(
            parse_for_header("i = 0; i < 10; i++"),
            Some(("i = 0".to_string(), "i < 10".to_string(), "i++".to_string()))
        );
        assert_eq!(parse_for_header("i = 0; i < 10"), None);
        assert_eq!(parse_for_header("i = 0; i < 10; i++; extra"), None);
        assert_eq!(parse_for_header("; i < 10; i++"), None);
    }

    #[test]
    fn input_target_accepts_the_ctx_prefix() {
        assert_eq!(parse_input_target("x = ..."), Some("x".to_string()));
        assert_eq!(parse_input_target("ctx.name = ..."), Some("name".to_string()));
        assert_eq!(parse_input_target("just a prompt"), None);
        assert_eq!(parse_input_target("1bad = ..."), None);
    }
}
