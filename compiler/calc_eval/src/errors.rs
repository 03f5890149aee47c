//! Error types for resolution.
//!
//! Failures propagate unchanged to the caller of `resolve` on the root node;
//! no subtree is partially evaluated once a child has failed.

use crate::value::Value;

/// Result of resolving a node.
pub type EvalResult = Result<Value, EvalError>;

/// A failure surfaced by resolution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A symbol was read before any assignment bound it.
    #[error("unbound symbol: {name}")]
    UnboundSymbol { name: String },
}

#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::UnboundSymbol {
        name: name.to_string(),
    }
}
