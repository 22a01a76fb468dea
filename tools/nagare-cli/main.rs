use clap::Parser;
use nagare::prelude::*;
use std::fs;
use std::io::{self, BufRead, Write};

/// Runs a flowchart graph document from the command line, answering input
/// prompts from stdin.
#[derive(Parser, Debug)]
#[command(name = "nagare-cli", version, about)]
struct Args {
    /// Path to the editor's graph document (JSON with nodes and edges)
    graph: String,

    /// Print the final variable context after the run
    #[arg(long)]
    show_context: bool,

    /// Echo each log line as it is produced instead of all at once
    #[arg(long)]
    live: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let document = fs::read_to_string(&args.graph)?;
    let graph = FlowGraph::from_json(&document)?;
    let mut session = Session::new(graph);

    let stdin = io::stdin();
    let mut printed = 0;

    loop {
        let state = session.run().clone();
        if args.live {
            printed = flush_log(&session, printed)?;
        }
        match state {
            RunState::Suspended { prompt, .. } => {
                print!("{}", prompt);
                io::stdout().flush()?;
                let mut line = String::new();
                stdin.lock().read_line(&mut line)?;
                session.resume(line.trim_end_matches(['\r', '\n']));
            }
            _ => break,
        }
    }

    if args.live {
        flush_log(&session, printed)?;
    } else {
        print!("{}", session.log());
    }

    println!("--- {:?} after {} steps ---", session.state(), session.steps_taken());

    if args.show_context {
        let mut bindings: Vec<_> = session.context().iter().collect();
        bindings.sort_by_key(|(name, _)| name.to_string());
        for (name, value) in bindings {
            println!("{} = {}", name, value);
        }
    }

    Ok(())
}

fn flush_log(session: &Session, from: usize) -> Result<usize> {
    let lines = session.log().lines();
    for line in &lines[from..] {
        println!("{}", line);
    }
    Ok(lines.len())
}
