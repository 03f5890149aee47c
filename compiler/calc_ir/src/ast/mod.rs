//! Expression Types
//!
//! The AST node family consumed by the evaluator.
//!
//! # Design Notes
//! - A closed tagged union; evaluation matches on it exhaustively
//! - Children are owned through `Box`, never shared
//! - Nodes are immutable once built

mod operators;

use std::fmt;

use crate::literal::{parse_number_literal, LiteralError};

pub use operators::{BinaryOp, UnknownOperator};

/// Precedence assigned to leaves: they never need parentheses.
const LEAF_PRECEDENCE: u8 = 0;

/// Precedence assigned to assignments: looser than any operator.
const ASSIGN_PRECEDENCE: u8 = 15;

/// A bare name reference.
///
/// The name is validated upstream by the parser; this type does not check
/// identifier lexical rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolRef {
    name: String,
}

impl SymbolRef {
    pub fn new(name: impl Into<String>) -> Self {
        SymbolRef { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Number literal, already normalized to a double.
    Number(f64),

    /// Reference to a binding in the scope.
    Symbol(SymbolRef),

    /// Binary operation: `left op right`.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Assignment: `target = value`.
    Assign {
        target: SymbolRef,
        value: Box<Expr>,
    },
}

impl Expr {
    pub fn number(val: f64) -> Self {
        Expr::Number(val)
    }

    /// Build a number literal from its source text.
    ///
    /// Accepts decimal, float (`1.4e3`), octal (`0o77`, `077`) and hex (`0xFF`).
    pub fn literal_from_source(text: &str) -> Result<Self, LiteralError> {
        parse_number_literal(text).map(Expr::Number)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(SymbolRef::new(name))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assign(target: SymbolRef, value: Expr) -> Self {
        Expr::Assign {
            target,
            value: Box::new(value),
        }
    }

    /// Short name of the node kind, used in logs.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number",
            Expr::Symbol(_) => "symbol",
            Expr::Binary { .. } => "binary",
            Expr::Assign { .. } => "assign",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Number(_) | Expr::Symbol(_) => LEAF_PRECEDENCE,
            Expr::Binary { op, .. } => op.precedence(),
            Expr::Assign { .. } => ASSIGN_PRECEDENCE,
        }
    }
}

/// Renders the tree as source-like text for logs and messages, with the
/// minimal parentheses that keep the tree's grouping visible. Binary
/// operators are left-associative.
///
/// Numbers use plain `f64` formatting. Values no literal can produce
/// (negative, NaN, infinite) print as `-1`, `NaN` and `inf`, so such output
/// is not valid source.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(val) => write!(f, "{val}"),
            Expr::Symbol(sym) => write!(f, "{sym}"),
            Expr::Binary { op, left, right } => {
                let prec = op.precedence();
                write_operand(f, left, left.precedence() > prec)?;
                write!(f, " {op} ")?;
                write_operand(f, right, right.precedence() >= prec)
            }
            Expr::Assign { target, value } => write!(f, "{target} = {value}"),
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}
