//! Resolution: evaluating a node to a `Value` against a `Scope`.
//!
//! Each AST variant resolves by exhaustive match. Children resolve before
//! their parent combines them, left before right, and the first failure
//! aborts the whole tree.

use calc_ir::{Expr, SymbolRef};

use crate::errors::{unbound_symbol, EvalResult};
use crate::operators::evaluate_binary;
use crate::scope::Scope;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

/// Evaluate `self` to a value, reading and possibly writing `scope`.
pub trait Resolve {
    fn resolve(&self, scope: &mut Scope) -> EvalResult;
}

/// An already-resolved value resolves to itself.
impl Resolve for Value {
    #[inline]
    fn resolve(&self, _scope: &mut Scope) -> EvalResult {
        Ok(*self)
    }
}

impl Resolve for SymbolRef {
    fn resolve(&self, scope: &mut Scope) -> EvalResult {
        scope.get_symbol(self.name()).ok_or_else(|| {
            tracing::debug!(name = self.name(), "unbound symbol");
            unbound_symbol(self.name())
        })
    }
}

impl Resolve for Expr {
    #[tracing::instrument(level = "trace", skip_all, fields(kind = self.kind_name()))]
    fn resolve(&self, scope: &mut Scope) -> EvalResult {
        ensure_sufficient_stack(|| match self {
            Expr::Number(val) => Ok(Value::new(*val)),
            Expr::Symbol(sym) => sym.resolve(scope),
            Expr::Binary { op, left, right } => {
                let left = left.resolve(scope)?;
                let right = right.resolve(scope)?;
                Ok(evaluate_binary(left, right, *op))
            }
            Expr::Assign { target, value } => {
                let value = value.resolve(scope)?;
                Ok(scope.set_symbol(target.name(), value))
            }
        })
    }
}
