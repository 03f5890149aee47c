//! Binary operator implementations.
//!
//! Direct enum-based dispatch. The operator set is closed, so every operator
//! is total over doubles: division by zero yields an IEEE infinity or NaN.

use calc_ir::BinaryOp;

use crate::value::Value;

/// Combine two resolved operands as `left op right`.
#[inline]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Value {
    let (a, b) = (left.val(), right.val());
    match op {
        BinaryOp::Add => Value::new(a + b),
        BinaryOp::Sub => Value::new(a - b),
        BinaryOp::Mul => Value::new(a * b),
        BinaryOp::Div => Value::new(a / b),
        // IEEE 754 equality: NaN != NaN, -0.0 == 0.0
        BinaryOp::Eq => Value::from_bool(a == b),
    }
}
