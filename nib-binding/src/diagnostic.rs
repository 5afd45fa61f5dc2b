//! Diagnostic types for the binding layer.
//!
//! Operations that can degrade (missing inner types, unmapped tokens,
//! unmatched kinds) report structured warnings through an injected
//! [`DiagnosticSink`] instead of a logger. Diagnostics are advisory: they
//! never alter an already-returned result.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A fatal condition that aborts processing of the current element.
    Error,
    /// A condition with a documented fallback; generation continues.
    Warning,
    /// Informational message about a binding decision.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A structured diagnostic record emitted by a binding component.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The component that produced this diagnostic (e.g. "mapper").
    pub component: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional schema location (e.g. the raw property name).
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            component: component.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            component: component.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            component: component.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// An append-only destination for diagnostics.
///
/// The sink is owned by the orchestrator, not by this layer; it must accept
/// concurrent writes, since independent schema nodes may be resolved in
/// parallel.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic.
    fn emit(&self, diagnostic: Diagnostic);
}

/// In-memory [`DiagnosticSink`] collecting records in emission order.
#[derive(Debug, Default)]
pub struct DiagnosticBuffer {
    entries: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no diagnostics were collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take all collected diagnostics, leaving the buffer empty.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticSink for DiagnosticBuffer {
    fn emit(&self, diagnostic: Diagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

/// A sink that discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}
