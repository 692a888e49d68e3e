use std::rc::Rc;

use crate::ast::Statement;
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::{eval_value, Context, Flow, RunResult};
use crate::interpreter::value::class::{Class, Closure, Instance, INIT_METHOD};
use crate::interpreter::value::core::{ObjectHolder, Value};

impl Context<'_> {
    /// Binds the class under its own name in the current scope.
    pub(crate) fn execute_class_definition(
        &mut self,
        class: &Rc<Class>,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let value = ObjectHolder::own(Value::Class(Rc::clone(class)));
        scope.insert(class.name().to_string(), value.share());
        Ok(Flow::Normal(value))
    }

    /// Creates a fresh instance, calling `__init__` when the class provides
    /// one with a matching argument count.
    ///
    /// Every execution creates a distinct object. Arguments are evaluated
    /// left to right before the constructor runs; when no matching
    /// `__init__` exists the instance starts out with no fields beyond
    /// `self`.
    pub(crate) fn execute_new_instance(
        &mut self,
        class: &Rc<Class>,
        args: &[Statement],
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(eval_value!(self, arg, scope));
        }

        let instance = Instance::create(Rc::clone(class));
        if class.has_method(INIT_METHOD, values.len()) {
            self.call_method(&instance, INIT_METHOD, values)?;
        }

        Ok(Flow::Normal(instance))
    }

    /// Evaluates the receiver and arguments, then dispatches the method.
    pub(crate) fn execute_method_call(
        &mut self,
        object: &Statement,
        method: &str,
        args: &[Statement],
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let receiver = eval_value!(self, object, scope);

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(eval_value!(self, arg, scope));
        }

        let result = self.call_method(&receiver, method, values)?;
        Ok(Flow::Normal(result))
    }

    /// Assigns into a field of the object the target expression evaluates
    /// to, and yields the assigned value.
    pub(crate) fn execute_field_assignment(
        &mut self,
        object: &Statement,
        field: &str,
        value: &Statement,
        scope: &mut Closure,
    ) -> RunResult<Flow> {
        let target = eval_value!(self, object, scope);
        let value = eval_value!(self, value, scope);

        match target.get().as_deref() {
            Some(Value::Instance(instance)) => {
                instance.set_field(field, value.share());
                Ok(Flow::Normal(value))
            },
            _ => Err(RuntimeError::NotAnInstance),
        }
    }

    /// Invokes a method on a receiver with already-evaluated arguments.
    ///
    /// The receiver must hold an instance whose class chain provides the
    /// method with exactly `args.len()` formal parameters. The body runs in
    /// a fresh scope binding `self` to the receiver and each formal to its
    /// argument, and yields the returned value, or `None` when the body
    /// finishes without a `return`.
    pub(crate) fn call_method(
        &mut self,
        receiver: &ObjectHolder,
        name: &str,
        args: Vec<ObjectHolder>,
    ) -> RunResult<ObjectHolder> {
        let value = receiver.get().ok_or(RuntimeError::NotAnInstance)?;
        let class = match &*value {
            Value::Instance(instance) => Rc::clone(instance.class()),
            _ => return Err(RuntimeError::NotAnInstance),
        };

        let method = class
            .get_method(name)
            .filter(|method| method.formal_params.len() == args.len())
            .ok_or_else(|| RuntimeError::MethodNotImplemented { name: name.to_string() })?;

        log::trace!("dispatching {}.{}/{}", class.name(), name, args.len());

        let mut closure = Closure::new();
        closure.insert("self".to_string(), receiver.share());
        for (param, arg) in method.formal_params.iter().zip(args) {
            closure.insert(param.clone(), arg);
        }

        Ok(self.execute(&method.body, &mut closure)?.value())
    }
}
