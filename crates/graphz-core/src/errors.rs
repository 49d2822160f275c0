//! Structured error types shared across graphz crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::VertexId;

/// Structured payload attached to every [`GraphzError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertex indices, capacities, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for graphz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GraphzError {
    /// A vertex index at or beyond the current vertex count was referenced.
    #[error("invalid vertex: {0}")]
    InvalidVertex(ErrorInfo),
    /// The vertex table or a per-vertex adjacency list is full.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(ErrorInfo),
    /// Configuration could not be read or failed validation.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl GraphzError {
    /// Builds the error reported when `vertex` is not below `vertex_count`.
    pub fn invalid_vertex(vertex: VertexId, vertex_count: usize) -> Self {
        GraphzError::InvalidVertex(
            ErrorInfo::new("invalid-vertex", "vertex index is out of range")
                .with_context("vertex", vertex)
                .with_context("vertex_count", vertex_count),
        )
    }

    /// Builds the error reported when the vertex table is full.
    pub fn vertex_capacity(cap: usize) -> Self {
        GraphzError::CapacityExceeded(
            ErrorInfo::new("vertex-capacity", "vertex capacity would be exceeded")
                .with_context("cap", cap),
        )
    }

    /// Builds the error reported when the adjacency list of `vertex` is full.
    pub fn degree_capacity(vertex: VertexId, cap: usize) -> Self {
        GraphzError::CapacityExceeded(
            ErrorInfo::new("degree-capacity", "adjacency capacity would be exceeded")
                .with_context("vertex", vertex)
                .with_context("cap", cap),
        )
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GraphzError::InvalidVertex(info)
            | GraphzError::CapacityExceeded(info)
            | GraphzError::Config(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Returns `true` for [`GraphzError::CapacityExceeded`].
    pub fn is_capacity(&self) -> bool {
        matches!(self, GraphzError::CapacityExceeded(_))
    }

    /// Returns `true` for [`GraphzError::InvalidVertex`].
    pub fn is_invalid_vertex(&self) -> bool {
        matches!(self, GraphzError::InvalidVertex(_))
    }

    /// Adds a context entry to the payload, preserving the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            GraphzError::InvalidVertex(info) => {
                GraphzError::InvalidVertex(info.with_context(key, value))
            }
            GraphzError::CapacityExceeded(info) => {
                GraphzError::CapacityExceeded(info.with_context(key, value))
            }
            GraphzError::Config(info) => GraphzError::Config(info.with_context(key, value)),
        }
    }
}
