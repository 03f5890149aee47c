//! Evaluation sessions.
//!
//! A session owns the one `Scope` that successive top-level resolutions share,
//! which is how `x = 10` followed by `x` sees the earlier binding. Independent
//! sessions never see each other's bindings.

use calc_ir::Expr;

use crate::errors::EvalResult;
use crate::resolve::Resolve;
use crate::scope::Scope;
use crate::value::Value;

/// One scope threaded through every top-level `resolve` call.
#[derive(Debug, Default)]
pub struct Session {
    scope: Scope,
    /// Top-level trees resolved so far, successful or not.
    resolved: usize,
}

impl Session {
    /// Start a session with an empty scope.
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Resolve one top-level tree against the session scope.
    pub fn resolve(&mut self, root: &Expr) -> EvalResult {
        self.resolved += 1;
        let result = root.resolve(&mut self.scope);
        match &result {
            Ok(value) => tracing::debug!(index = self.resolved, %root, %value, "resolved"),
            Err(err) => tracing::debug!(index = self.resolved, %root, %err, "resolution failed"),
        }
        result
    }

    /// Number of top-level trees resolved in this session.
    pub fn resolved_count(&self) -> usize {
        self.resolved
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }

    /// End the session, keeping its bindings.
    pub fn into_scope(self) -> Scope {
        self.scope
    }
}

/// Builder for `Session`.
#[derive(Debug, Default)]
pub struct SessionBuilder {
    scope: Option<Scope>,
    bindings: Vec<(String, Value)>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue from an existing scope instead of an empty one.
    #[must_use]
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Seed a binding. Applied after `scope`, in call order.
    #[must_use]
    pub fn binding(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bindings.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Session {
        let mut scope = self.scope.unwrap_or_default();
        for (name, value) in &self.bindings {
            scope.set_symbol(name, *value);
        }
        tracing::debug!(bindings = scope.len(), "new session");
        Session { scope, resolved: 0 }
    }
}
