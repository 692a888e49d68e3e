use std::io;

use crate::ast::Statement;
use crate::error::RuntimeError;
use crate::interpreter::value::class::Closure;
use crate::interpreter::value::core::{ObjectHolder, Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type RunResult<T> = Result<T, RuntimeError>;

/// The outcome of executing a statement.
///
/// A `return` does not travel as an error; it travels as the `Returning`
/// variant of this enum, passed upward untouched by every compound form
/// until the innermost [`Statement::MethodBody`] converts it back into a
/// normal value.
#[derive(Debug)]
pub enum Flow {
    /// Ordinary completion with a value.
    Normal(ObjectHolder),
    /// A `return` in flight, carrying the returned value.
    Returning(ObjectHolder),
}

impl Flow {
    /// The carried value, whichever way it was produced.
    #[must_use]
    pub fn value(self) -> ObjectHolder {
        match self {
            Self::Normal(value) | Self::Returning(value) => value,
        }
    }
}

/// Evaluates to the value of a sub-statement, passing a `return` in flight
/// on to the caller.
macro_rules! eval_value {
    ($context:expr, $statement:expr, $scope:expr) => {
        match $context.execute($statement, $scope)? {
            $crate::interpreter::evaluator::core::Flow::Normal(value) => value,
            returning => return Ok(returning),
        }
    };
}
pub(crate) use eval_value;

/// Holds the state an evaluation runs against.
///
/// The context owns the output sink for the duration of a run; everything
/// `print` and `str` produce goes through it. The evaluator itself keeps no
/// other state: all bindings live in the [`Closure`] each statement executes
/// against.
pub struct Context<'a> {
    pub(crate) output: &'a mut dyn io::Write,
}

impl<'a> Context<'a> {
    /// Creates a context writing to the given sink.
    pub fn new(output: &'a mut dyn io::Write) -> Self {
        Self { output }
    }

    /// Executes a statement against a scope.
    ///
    /// This is the single entry point of the tree walk; every node variant
    /// dispatches from here.
    pub fn execute(&mut self, statement: &Statement, scope: &mut Closure) -> RunResult<Flow> {
        match statement {
            Statement::NumericConst { value } => {
                Ok(Flow::Normal(ObjectHolder::own(Value::Number(*value))))
            },
            Statement::StringConst { value } => {
                Ok(Flow::Normal(ObjectHolder::own(Value::String(value.clone()))))
            },
            Statement::BoolConst { value } => {
                Ok(Flow::Normal(ObjectHolder::own(Value::Bool(*value))))
            },
            Statement::NoneConst => Ok(Flow::Normal(ObjectHolder::none())),
            Statement::VariableValue { names } => self.execute_variable(names, scope),
            Statement::Assignment { name, value } => self.execute_assignment(name, value, scope),
            Statement::FieldAssignment { object, field, value } => {
                self.execute_field_assignment(object, field, value, scope)
            },
            Statement::Print { args } => self.execute_print(args, scope),
            Statement::Stringify { value } => self.execute_stringify(value, scope),
            Statement::Add { lhs, rhs } => self.execute_add(lhs, rhs, scope),
            Statement::Sub { lhs, rhs } => self.execute_numeric("-", i64::checked_sub, lhs, rhs, scope),
            Statement::Mult { lhs, rhs } => self.execute_numeric("*", i64::checked_mul, lhs, rhs, scope),
            Statement::Div { lhs, rhs } => self.execute_div(lhs, rhs, scope),
            Statement::And { lhs, rhs } => self.execute_and(lhs, rhs, scope),
            Statement::Or { lhs, rhs } => self.execute_or(lhs, rhs, scope),
            Statement::Not { value } => self.execute_not(value, scope),
            Statement::Comparison { op, lhs, rhs } => self.execute_comparison(*op, lhs, rhs, scope),
            Statement::IfElse { condition, then_body, else_body } => {
                self.execute_if_else(condition, then_body, else_body.as_deref(), scope)
            },
            Statement::Compound { statements } => self.execute_compound(statements, scope),
            Statement::MethodBody { body } => self.execute_method_body(body, scope),
            Statement::Return { value } => {
                let value = eval_value!(self, value, scope);
                Ok(Flow::Returning(value))
            },
            Statement::ClassDefinition { class } => self.execute_class_definition(class, scope),
            Statement::NewInstance { class, args } => self.execute_new_instance(class, args, scope),
            Statement::MethodCall { object, method, args } => {
                self.execute_method_call(object, method, args, scope)
            },
        }
    }

    /// Resolves a plain or dotted name to a shared holder of its value.
    fn execute_variable(&mut self, names: &[String], scope: &mut Closure) -> RunResult<Flow> {
        let (first, rest) = match names.split_first() {
            Some(parts) => parts,
            None => return Err(RuntimeError::UnknownVariable { name: String::new() }),
        };

        let mut value = scope
            .get(first)
            .map(ObjectHolder::share)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: first.clone() })?;

        for name in rest {
            value = match value.get().as_deref() {
                Some(Value::Instance(instance)) => instance
                    .get_field(name)
                    .ok_or_else(|| RuntimeError::UnknownField { name: name.clone() })?,
                _ => return Err(RuntimeError::NotAnInstance),
            };
        }

        Ok(Flow::Normal(value))
    }

    fn execute_assignment(
        &mut self,
        name: &str,
        value: &Statement,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let value = eval_value!(self, value, scope);
        scope.insert(name.to_string(), value.share());
        Ok(Flow::Normal(value))
    }

    /// Executes the chosen branch. The condition must be a boolean.
    fn execute_if_else(
        &mut self,
        condition: &Statement,
        then_body: &Statement,
        else_body: Option<&Statement>,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let condition = eval_value!(self, condition, scope);
        let condition = condition.as_bool().ok_or(RuntimeError::ExpectedBoolean)?;

        if condition {
            self.execute(then_body, scope)
        } else if let Some(else_body) = else_body {
            self.execute(else_body, scope)
        } else {
            Ok(Flow::Normal(ObjectHolder::none()))
        }
    }

    /// Executes statements in order. A `return` in flight stops the
    /// sequence immediately.
    fn execute_compound(&mut self, statements: &[Statement], scope: &mut Closure) -> RunResult<Flow> {
        for statement in statements {
            if let returning @ Flow::Returning(_) = self.execute(statement, scope)? {
                return Ok(returning);
            }
        }
        Ok(Flow::Normal(ObjectHolder::none()))
    }

    /// The method boundary: a `return` raised anywhere inside the body ends
    /// up here as the method's result; falling off the end yields `None`.
    fn execute_method_body(&mut self, body: &Statement, scope: &mut Closure) -> RunResult<Flow> {
        match self.execute(body, scope)? {
            Flow::Normal(_) => Ok(Flow::Normal(ObjectHolder::none())),
            Flow::Returning(value) => Ok(Flow::Normal(value)),
        }
    }
}
