//! Replayable steps and the append-only traces built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Color;
use crate::VertexId;

/// One atomic, replayable action emitted by a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Step {
    /// Colour transition; `from` is the colour observed when the step was emitted.
    ColorVertex {
        /// Vertex being recoloured.
        vertex: VertexId,
        /// Colour before the transition.
        from: Color,
        /// Colour after the transition.
        to: Color,
    },
    /// The traversal looked at `vertex`. Drives the highlight only.
    CheckVertex {
        /// Examined vertex.
        vertex: VertexId,
    },
    /// Reserved for vertex insertion; no traversal emits it yet.
    AddVertex {
        /// Index the inserted vertex would receive.
        vertex: VertexId,
    },
    /// A synthesized directed edge to append to the adjacency of `from`.
    AddEdge {
        /// Tail of the edge.
        from: VertexId,
        /// Head of the edge.
        to: VertexId,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::ColorVertex { vertex, from, to } => {
                write!(f, "color {vertex}: {from} -> {to}")
            }
            Step::CheckVertex { vertex } => write!(f, "check {vertex}"),
            Step::AddVertex { vertex } => write!(f, "add-vertex {vertex}"),
            Step::AddEdge { from, to } => write!(f, "add-edge {from} -> {to}"),
        }
    }
}

/// Ordered log of steps produced by one traversal run.
///
/// A trace is immutable once produced. Traversals build it through a
/// [`TraceRecorder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an explicit step sequence.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the trace holds no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step at `index`.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Returns all steps in emission order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterates over the steps in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Counts the colour transitions whose target is `to`.
    pub fn count_color_steps_to(&self, to: Color) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::ColorVertex { to: target, .. } if *target == to))
            .count()
    }

    /// Iterates over the synthesized edges, in emission order.
    pub fn added_edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.steps.iter().filter_map(|step| match step {
            Step::AddEdge { from, to } => Some((*from, *to)),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl FromIterator<Step> for Trace {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

/// Append-only builder used while a traversal runs.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<Step>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a colour transition.
    pub fn color(&mut self, vertex: VertexId, from: Color, to: Color) {
        self.steps.push(Step::ColorVertex { vertex, from, to });
    }

    /// Records that `vertex` was examined.
    pub fn check(&mut self, vertex: VertexId) {
        self.steps.push(Step::CheckVertex { vertex });
    }

    /// Records a synthesized directed edge.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.steps.push(Step::AddEdge { from, to });
    }

    /// Seals the recording into an immutable trace.
    pub fn finish(self) -> Trace {
        Trace { steps: self.steps }
    }
}
