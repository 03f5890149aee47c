//! Binary Operators
//!
//! The closed operator set understood by the evaluator.

use std::fmt;
use std::str::FromStr;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
}

/// An operator name outside the closed set.
///
/// Raised at the construction boundary when the transform layer names an
/// operator by string. Once a `BinaryOp` exists it is always valid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown binary operator `{name}`")]
pub struct UnknownOperator {
    pub name: String,
}

impl BinaryOp {
    /// All operators, in declaration order.
    pub const ALL: [BinaryOp; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Eq];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
        }
    }

    /// Returns the name the tree transform uses for this operator.
    pub const fn action_name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Eq => "eq",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 3: `*` `/`
    /// - 4: `+` `-`
    /// - 8: `==`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 4,
            Self::Eq => 8,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Accepts both action names (`add`) and source symbols (`+`).
impl FromStr for BinaryOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.action_name() == s || op.as_symbol() == s)
            .ok_or_else(|| UnknownOperator { name: s.to_string() })
    }
}
