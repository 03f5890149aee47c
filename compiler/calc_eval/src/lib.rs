//! Calc Eval - tree-walking resolver for calc ASTs.
//!
//! Resolution turns a `calc_ir::Expr` into a `Value` against a `Scope`.
//!
//! # Architecture
//!
//! - `Value`: the single numeric runtime type
//! - `Scope`: the one mutable name-to-value environment, passed by `&mut`
//! - `Resolve`: exhaustive match over the AST node family
//! - `evaluate_binary`: direct enum-based operator dispatch
//! - `Session`: one scope threaded through successive top-level resolutions
//!
//! The only error a resolution can produce is an unbound symbol; arithmetic
//! edge cases follow IEEE 754 and are never errors.

mod errors;
mod operators;
mod resolve;
mod scope;
mod session;
mod stack;
mod tracing_setup;
mod value;

pub use errors::{unbound_symbol, EvalError, EvalResult};
pub use operators::evaluate_binary;
pub use resolve::Resolve;
pub use scope::Scope;
pub use session::{Session, SessionBuilder};
pub use stack::ensure_sufficient_stack;
pub use tracing_setup::init_tracing;
pub use value::Value;

// Re-export the AST so callers need a single import
pub use calc_ir::{BinaryOp, Expr, SymbolRef};
