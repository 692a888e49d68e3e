use crate::ast::Statement;
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::{eval_value, Context, Flow, RunResult};
use crate::interpreter::value::class::{Closure, ADD_METHOD};
use crate::interpreter::value::core::{ObjectHolder, Value};

impl Context<'_> {
    /// Evaluates `+`.
    ///
    /// Numbers add, strings concatenate, and an object on the left with an
    /// `__add__/1` method decides the result itself. Anything else is a
    /// runtime error, as is an overflowing sum.
    pub(crate) fn execute_add(
        &mut self,
        lhs: &Statement,
        rhs: &Statement,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let lhs = eval_value!(self, lhs, scope);
        let rhs = eval_value!(self, rhs, scope);

        let result = match (lhs.get().as_deref(), rhs.get().as_deref()) {
            (Some(Value::Number(a)), Some(Value::Number(b))) => {
                let sum = a.checked_add(*b).ok_or(RuntimeError::Overflow)?;
                ObjectHolder::own(Value::Number(sum))
            },
            (Some(Value::String(a)), Some(Value::String(b))) => {
                let mut joined = a.clone();
                joined.push_str(b);
                ObjectHolder::own(Value::String(joined))
            },
            (Some(Value::Instance(instance)), _) if instance.has_method(ADD_METHOD, 1) => {
                self.call_method(&lhs, ADD_METHOD, vec![rhs.share()])?
            },
            _ => return Err(RuntimeError::UnsupportedOperands { op: "+" }),
        };

        Ok(Flow::Normal(result))
    }

    /// Evaluates a numbers-only operator (`-` or `*`) through a checked
    /// integer operation.
    pub(crate) fn execute_numeric(
        &mut self,
        op: &'static str,
        compute: fn(i64, i64) -> Option<i64>,
        lhs: &Statement,
        rhs: &Statement,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let lhs = eval_value!(self, lhs, scope);
        let rhs = eval_value!(self, rhs, scope);

        match (lhs.as_number(), rhs.as_number()) {
            (Some(a), Some(b)) => {
                let result = compute(a, b).ok_or(RuntimeError::Overflow)?;
                Ok(Flow::Normal(ObjectHolder::own(Value::Number(result))))
            },
            _ => Err(RuntimeError::UnsupportedOperands { op }),
        }
    }

    /// Evaluates `/` over numbers, truncating toward zero. A zero divisor is
    /// a runtime error.
    pub(crate) fn execute_div(
        &mut self,
        lhs: &Statement,
        rhs: &Statement,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let lhs = eval_value!(self, lhs, scope);
        let rhs = eval_value!(self, rhs, scope);

        match (lhs.as_number(), rhs.as_number()) {
            (Some(_), Some(0)) => Err(RuntimeError::DivisionByZero),
            (Some(a), Some(b)) => {
                let result = a.checked_div(b).ok_or(RuntimeError::Overflow)?;
                Ok(Flow::Normal(ObjectHolder::own(Value::Number(result))))
            },
            _ => Err(RuntimeError::UnsupportedOperands { op: "/" }),
        }
    }

    /// Evaluates short-circuit `and` over booleans.
    ///
    /// The right operand is only evaluated when the left one is true.
    pub(crate) fn execute_and(
        &mut self,
        lhs: &Statement,
        rhs: &Statement,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let lhs = eval_value!(self, lhs, scope);
        let lhs = lhs.as_bool().ok_or(RuntimeError::UnsupportedOperands { op: "and" })?;

        let result = if lhs {
            let rhs = eval_value!(self, rhs, scope);
            rhs.as_bool().ok_or(RuntimeError::UnsupportedOperands { op: "and" })?
        } else {
            false
        };

        Ok(Flow::Normal(ObjectHolder::own(Value::Bool(result))))
    }

    /// Evaluates short-circuit `or` over booleans.
    ///
    /// The right operand is only evaluated when the left one is false.
    pub(crate) fn execute_or(
        &mut self,
        lhs: &Statement,
        rhs: &Statement,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let lhs = eval_value!(self, lhs, scope);
        let lhs = lhs.as_bool().ok_or(RuntimeError::UnsupportedOperands { op: "or" })?;

        let result = if lhs {
            true
        } else {
            let rhs = eval_value!(self, rhs, scope);
            rhs.as_bool().ok_or(RuntimeError::UnsupportedOperands { op: "or" })?
        };

        Ok(Flow::Normal(ObjectHolder::own(Value::Bool(result))))
    }

    /// Evaluates boolean negation.
    pub(crate) fn execute_not(&mut self, value: &Statement, scope: &mut Closure) -> RunResult<Flow> {
        let value = eval_value!(self, value, scope);
        let value = value.as_bool().ok_or(RuntimeError::UnsupportedOperands { op: "not" })?;
        Ok(Flow::Normal(ObjectHolder::own(Value::Bool(!value))))
    }
}
