use std::io::Write;

use crate::ast::Statement;
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::{eval_value, Context, Flow, RunResult};
use crate::interpreter::value::class::{Closure, STR_METHOD};
use crate::interpreter::value::core::{ObjectHolder, Value};

impl Context<'_> {
    /// Renders a holder the way `print` shows it.
    ///
    /// The empty holder renders as `None`, booleans as `True`/`False`,
    /// classes as `Class <name>`. An instance is rendered by its `__str__/0`
    /// method when one is reachable, and as nothing at all otherwise.
    pub(crate) fn render(&mut self, holder: &ObjectHolder) -> RunResult<String> {
        let value = match holder.get() {
            Some(value) => value,
            None => return Ok("None".to_string()),
        };

        match &*value {
            Value::Number(value) => Ok(value.to_string()),
            Value::String(value) => Ok(value.clone()),
            Value::Bool(true) => Ok("True".to_string()),
            Value::Bool(false) => Ok("False".to_string()),
            Value::Class(class) => Ok(format!("Class {}", class.name())),
            Value::Instance(instance) => {
                if instance.has_method(STR_METHOD, 0) {
                    let rendered = self.call_method(holder, STR_METHOD, Vec::new())?;
                    self.render(&rendered)
                } else {
                    Ok(String::new())
                }
            },
        }
    }

    /// Evaluates and prints each argument, space-separated, ending the line
    /// with `\n`. With no arguments only the newline is printed.
    pub(crate) fn execute_print(&mut self, args: &[Statement], scope: &mut Closure) -> RunResult<Flow> {
        let mut rendered = Vec::with_capacity(args.len());
        for arg in args {
            let value = eval_value!(self, arg, scope);
            rendered.push(self.render(&value)?);
        }

        writeln!(self.output, "{}", rendered.join(" "))
            .map_err(|error| RuntimeError::OutputFailed { details: error.to_string() })?;

        Ok(Flow::Normal(ObjectHolder::none()))
    }

    /// Evaluates `str(x)`: renders the value and yields an owned string.
    pub(crate) fn execute_stringify(
        &mut self,
        value: &Statement,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let value = eval_value!(self, value, scope);
        let rendered = self.render(&value)?;
        Ok(Flow::Normal(ObjectHolder::own(Value::String(rendered))))
    }
}
