//! Line-driven stepping session over a live graph.
//!
//! Each input line is one command, mirroring the key bindings of an
//! interactive viewer: `n` steps the trace, `a` drops a vertex on the
//! canvas centre, `e U V` joins two vertices, `m V X Y` drags a vertex,
//! `r` repaints and records afresh, `algo NAME [SOURCE]` switches the
//! traversal, `show` prints the state and `q` quits.

use std::fmt::{self, Write as _};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use graphz_algo::Algorithm;
use graphz_core::{Color, ErrorInfo, GraphzError, Position, Trace, VertexId};
use graphz_graph::Graph;
use graphz_replay::{Advance, ReplayCursor};
use tracing::{debug, warn};

use crate::scene::Canvas;

/// One parsed session command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Replay the next step.
    Next,
    /// Add a vertex at the canvas centre.
    AddVertex,
    /// Add the undirected edge `u - v`.
    Edge(VertexId, VertexId),
    /// Move a vertex.
    Move(VertexId, Position),
    /// Repaint every vertex unvisited and record a fresh trace.
    Reset,
    /// Switch traversal, optionally changing the source, and record a fresh trace.
    Algorithm(Algorithm, Option<VertexId>),
    /// Describe the current state.
    Show,
    /// End the session.
    Quit,
}

impl FromStr for Command {
    type Err = GraphzError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(parse_error("empty command", line));
        };
        let args: Vec<&str> = words.collect();
        let command = match (head, args.as_slice()) {
            ("n", []) => Command::Next,
            ("a", []) => Command::AddVertex,
            ("e", [u, v]) => Command::Edge(vertex_arg(u, line)?, vertex_arg(v, line)?),
            ("m", [vertex, x, y]) => Command::Move(
                vertex_arg(vertex, line)?,
                Position::new(coord_arg(x, line)?, coord_arg(y, line)?),
            ),
            ("r", []) => Command::Reset,
            ("algo", [name]) => Command::Algorithm(name.parse()?, None),
            ("algo", [name, source]) => {
                Command::Algorithm(name.parse()?, Some(vertex_arg(source, line)?))
            }
            ("show", []) => Command::Show,
            ("q", []) => Command::Quit,
            _ => return Err(parse_error("unrecognised command or wrong argument count", line)),
        };
        Ok(command)
    }
}

fn parse_error(message: &str, line: &str) -> GraphzError {
    GraphzError::Config(
        ErrorInfo::new("parse-command", message)
            .with_context("line", line.trim())
            .with_hint("commands: n, a, e U V, m V X Y, r, algo NAME [SOURCE], show, q"),
    )
}

fn vertex_arg(word: &str, line: &str) -> Result<VertexId, GraphzError> {
    word.parse::<usize>()
        .map(VertexId::new)
        .map_err(|_| parse_error("vertex arguments must be non-negative integers", line))
}

fn coord_arg(word: &str, line: &str) -> Result<f32, GraphzError> {
    word.parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| parse_error("coordinates must be finite numbers", line))
}

/// What a command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The cursor handled a step, or found the trace exhausted.
    Stepped(Advance),
    /// A vertex was added.
    VertexAdded(VertexId),
    /// An undirected edge was added.
    EdgeAdded(VertexId, VertexId),
    /// A vertex was moved.
    Moved(VertexId, Position),
    /// A fresh trace was recorded.
    Recorded {
        /// Traversal that produced it.
        algorithm: Algorithm,
        /// Number of steps.
        steps: usize,
    },
    /// Rendered session state.
    State(String),
    /// The session is over.
    Quit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Stepped(Advance::Exhausted) => write!(f, "trace finished"),
            Reply::Stepped(Advance::Applied(step)) => write!(f, "{step}"),
            Reply::Stepped(Advance::Skipped(step)) => write!(f, "{step} (skipped)"),
            Reply::Stepped(Advance::Dropped { step, error }) => {
                write!(f, "{step} (dropped: {error})")
            }
            Reply::VertexAdded(vertex) => write!(f, "added vertex {vertex}"),
            Reply::EdgeAdded(u, v) => write!(f, "added edge {u} - {v}"),
            Reply::Moved(vertex, position) => {
                write!(f, "moved {vertex} to ({}, {})", position.x, position.y)
            }
            Reply::Recorded { algorithm, steps } => write!(f, "recorded {algorithm}: {steps} steps"),
            Reply::State(text) => f.write_str(text.trim_end()),
            Reply::Quit => write!(f, "bye"),
        }
    }
}

/// A live graph, its recorded trace and the cursor stepping through it.
///
/// Editing the graph does not re-record the trace; the trace is marked stale
/// until the next `r` or `algo` command.
#[derive(Debug, Clone)]
pub struct Session {
    graph: Graph,
    canvas: Canvas,
    algorithm: Algorithm,
    source: VertexId,
    cursor: ReplayCursor,
    stale: bool,
}

impl Session {
    /// Starts a session and records the first trace.
    pub fn new(
        graph: Graph,
        canvas: Canvas,
        algorithm: Algorithm,
        source: VertexId,
    ) -> Result<Self, GraphzError> {
        let trace = record(&graph, algorithm, source)?;
        Ok(Self {
            graph,
            canvas,
            algorithm,
            source,
            cursor: ReplayCursor::new(trace),
            stale: false,
        })
    }

    /// The live graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The replay cursor.
    pub fn cursor(&self) -> &ReplayCursor {
        &self.cursor
    }

    /// Current traversal.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns `true` if the graph changed since the trace was recorded.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Runs one command against the session.
    ///
    /// A failed command leaves the session as it was.
    pub fn execute(&mut self, command: Command) -> Result<Reply, GraphzError> {
        debug!(?command, "session command");
        match command {
            Command::Next => Ok(Reply::Stepped(self.cursor.step(&mut self.graph))),
            Command::AddVertex => {
                let vertex = self.graph.add_vertex(self.canvas.center())?;
                self.stale = true;
                Ok(Reply::VertexAdded(vertex))
            }
            Command::Edge(u, v) => {
                self.graph.add_undirected_edge(u, v)?;
                self.stale = true;
                Ok(Reply::EdgeAdded(u, v))
            }
            Command::Move(vertex, position) => {
                self.graph.set_position(vertex, position)?;
                Ok(Reply::Moved(vertex, position))
            }
            Command::Reset => self.rerecord(self.algorithm, self.source),
            Command::Algorithm(algorithm, source) => {
                self.rerecord(algorithm, source.unwrap_or(self.source))
            }
            Command::Show => Ok(Reply::State(self.describe())),
            Command::Quit => Ok(Reply::Quit),
        }
    }

    /// Renders the traversal position and every vertex, one per line.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", self.algorithm);
        if self.algorithm.needs_source() {
            let _ = write!(out, " from {}", self.source);
        }
        let _ = write!(out, ": step {}/{}", self.cursor.index(), self.cursor.len());
        if let Some(vertex) = self.cursor.highlighted() {
            let _ = write!(out, ", checking {vertex}");
        }
        if self.stale {
            out.push_str(" (graph edited; r records a fresh trace)");
        }
        out.push('\n');
        for vertex in self.graph.vertices() {
            let color = self.graph.color(vertex).unwrap_or_default();
            let position = self.graph.position(vertex).unwrap_or_default();
            let marker = if self.cursor.highlighted() == Some(vertex) { "*" } else { " " };
            let _ = write!(
                out,
                "{marker}{vertex:>3} ({:.0}, {:.0}) {color:<11} ->",
                position.x, position.y
            );
            for neighbor in self.graph.neighbors(vertex).unwrap_or(&[]) {
                let _ = write!(out, " {neighbor}");
            }
            out.push('\n');
        }
        out
    }

    fn rerecord(&mut self, algorithm: Algorithm, source: VertexId) -> Result<Reply, GraphzError> {
        let mut repainted = self.graph.clone();
        repainted.reset_colors(Color::Unvisited);
        let trace = record(&repainted, algorithm, source)?;
        let steps = trace.len();
        self.graph = repainted;
        self.algorithm = algorithm;
        self.source = source;
        self.cursor = ReplayCursor::new(trace);
        self.stale = false;
        Ok(Reply::Recorded { algorithm, steps })
    }
}

fn record(graph: &Graph, algorithm: Algorithm, source: VertexId) -> Result<Trace, GraphzError> {
    // Nothing to traverse yet; vertices can still be added in the session.
    if graph.is_empty() {
        return Ok(Trace::new());
    }
    algorithm.run(graph, source)
}

/// Feeds every line of `input` to the session, writing replies to `output`.
///
/// Blank lines and lines starting with `#` are ignored. Command errors are
/// reported on `output` and the session carries on. Stops at `q` or end of input.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let reply = trimmed.parse::<Command>().and_then(|command| session.execute(command));
        match reply {
            Ok(Reply::Quit) => {
                writeln!(output, "{}", Reply::Quit)?;
                break;
            }
            Ok(reply) => writeln!(output, "{reply}")?,
            Err(error) => {
                warn!(%error, line = trimmed, "session command failed");
                writeln!(output, "error: {error}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}
