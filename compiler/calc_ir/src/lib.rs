//! Calc IR - AST node model for the calc evaluator.
//!
//! This crate contains the data structures the evaluator consumes:
//! - `Expr`: the closed AST node family (number, symbol, binary, assignment)
//! - `SymbolRef`: a bare name reference
//! - `BinaryOp`: the closed operator set
//! - Numeric literal normalization for decimal, float, octal and hex forms
//!
//! Trees are built by an external transform layer. Every composite node owns
//! its children through `Box`, so a tree is finite and acyclic by construction.

pub mod ast;
pub mod literal;

pub use ast::{BinaryOp, Expr, SymbolRef, UnknownOperator};
pub use literal::{classify_literal, parse_number_literal, LiteralError, LiteralForm};
