use crate::ast::{ComparisonOp, Statement};
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::{eval_value, Context, Flow, RunResult};
use crate::interpreter::value::class::{Closure, EQ_METHOD, LESS_METHOD};
use crate::interpreter::value::core::{ObjectHolder, Value};

/// Tests two holders for equality.
///
/// Numbers, strings and booleans compare by value when both sides have the
/// same kind, and two empty holders are equal. An object on the left that
/// defines `__eq__/1` decides equality itself, through the truthiness of its
/// result. As a last resort two holders aliasing the same value are equal;
/// everything else is a runtime error.
pub fn equal(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut Context) -> RunResult<bool> {
    match (lhs.get().as_deref(), rhs.get().as_deref()) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => Ok(a == b),
        (Some(Value::String(a)), Some(Value::String(b))) => Ok(a == b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => Ok(a == b),
        (None, None) => Ok(true),
        (Some(Value::Instance(instance)), _) if instance.has_method(EQ_METHOD, 1) => {
            let result = context.call_method(lhs, EQ_METHOD, vec![rhs.share()])?;
            Ok(result.is_truthy())
        },
        _ if lhs.is_same(rhs) => Ok(true),
        _ => Err(RuntimeError::NotComparable { relation: "equality" }),
    }
}

/// Tests whether `lhs` orders before `rhs`.
///
/// Numbers, strings and booleans order by value when both sides have the
/// same kind; an object on the left that defines `__lt__/1` decides the
/// ordering itself. Everything else is a runtime error.
pub fn less(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut Context) -> RunResult<bool> {
    match (lhs.get().as_deref(), rhs.get().as_deref()) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => Ok(a < b),
        (Some(Value::String(a)), Some(Value::String(b))) => Ok(a < b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => Ok(a < b),
        (Some(Value::Instance(instance)), _) if instance.has_method(LESS_METHOD, 1) => {
            let result = context.call_method(lhs, LESS_METHOD, vec![rhs.share()])?;
            Ok(result.is_truthy())
        },
        _ => Err(RuntimeError::NotComparable { relation: "less" }),
    }
}

/// The negation of [`equal`].
pub fn not_equal(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut Context) -> RunResult<bool> {
    Ok(!equal(lhs, rhs, context)?)
}

/// Strict ordering after `rhs`: neither less nor equal. Errors from either
/// primitive propagate.
pub fn greater(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut Context) -> RunResult<bool> {
    Ok(!less(lhs, rhs, context)? && !equal(lhs, rhs, context)?)
}

/// Less than or equal to.
pub fn less_or_equal(
    lhs: &ObjectHolder,
    rhs: &ObjectHolder,
    context: &mut Context,
) -> RunResult<bool> {
    if less(lhs, rhs, context)? {
        return Ok(true);
    }
    equal(lhs, rhs, context)
}

/// The negation of [`less`].
pub fn greater_or_equal(
    lhs: &ObjectHolder,
    rhs: &ObjectHolder,
    context: &mut Context,
) -> RunResult<bool> {
    Ok(!less(lhs, rhs, context)?)
}

impl Context<'_> {
    /// Evaluates a comparison node: both operands, then the requested
    /// relation, wrapped as an owned boolean.
    pub(crate) fn execute_comparison(
        &mut self,
        op: ComparisonOp,
        lhs: &Statement,
        rhs: &Statement,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let lhs = eval_value!(self, lhs, scope);
        let rhs = eval_value!(self, rhs, scope);

        let result = match op {
            ComparisonOp::Equal => equal(&lhs, &rhs, self)?,
            ComparisonOp::NotEqual => not_equal(&lhs, &rhs, self)?,
            ComparisonOp::Less => less(&lhs, &rhs, self)?,
            ComparisonOp::LessOrEqual => less_or_equal(&lhs, &rhs, self)?,
            ComparisonOp::Greater => greater(&lhs, &rhs, self)?,
            ComparisonOp::GreaterOrEqual => greater_or_equal(&lhs, &rhs, self)?,
        };

        Ok(Flow::Normal(ObjectHolder::own(Value::Bool(result))))
    }
}
