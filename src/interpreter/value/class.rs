use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::Statement;
use crate::interpreter::value::core::{ObjectHolder, Value};

/// The constructor method, called by instantiation when present.
pub const INIT_METHOD: &str = "__init__";
/// The rendering method, consulted when an instance is printed.
pub const STR_METHOD: &str = "__str__";
/// The user-defined equality method.
pub const EQ_METHOD: &str = "__eq__";
/// The user-defined ordering method.
pub const LESS_METHOD: &str = "__lt__";
/// The user-defined addition method.
pub const ADD_METHOD: &str = "__add__";

/// A name-to-value map representing a single activation frame or an
/// instance's field set. Duplicate keys overwrite.
pub type Closure = HashMap<String, ObjectHolder>;

/// A method of a user-defined class.
#[derive(Debug)]
pub struct Method {
    /// The method name.
    pub name: String,
    /// Formal parameter names, excluding the implicit `self`.
    pub formal_params: Vec<String>,
    /// The method body, a [`Statement::MethodBody`] node.
    pub body: Statement,
}

/// A user-defined class: a name, its methods, and an optional parent.
///
/// Classes are immutable once constructed. Method lookup walks the parent
/// chain and the first method found by name wins; when a class defines the
/// same method name twice, the later definition replaces the earlier one.
#[derive(Debug)]
pub struct Class {
    name: String,
    methods: HashMap<String, Method>,
    parent: Option<Rc<Class>>,
}

impl Class {
    /// Creates a class from its parsed methods.
    #[must_use]
    pub fn new(name: String, methods: Vec<Method>, parent: Option<Rc<Class>>) -> Self {
        let methods = methods.into_iter().map(|method| (method.name.clone(), method)).collect();
        Self { name, methods, parent }
    }

    /// The class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks a method up by name, walking the parent chain.
    #[must_use]
    pub fn get_method(&self, name: &str) -> Option<&Method> {
        match self.methods.get(name) {
            Some(method) => Some(method),
            None => self.parent.as_ref().and_then(|parent| parent.get_method(name)),
        }
    }

    /// Reports whether a method with the given name and formal parameter
    /// count is reachable from this class.
    #[must_use]
    pub fn has_method(&self, name: &str, arity: usize) -> bool {
        self.get_method(name)
            .is_some_and(|method| method.formal_params.len() == arity)
    }
}

/// An instance of a user-defined class.
///
/// The field scope always contains `"self"`, bound to the instance itself
/// through a non-owning back-reference so that the binding does not keep the
/// instance alive.
#[derive(Debug)]
pub struct Instance {
    class: Rc<Class>,
    fields: RefCell<Closure>,
}

impl Instance {
    /// Creates a fresh instance of `class` and returns the holder owning it.
    #[must_use]
    pub fn create(class: Rc<Class>) -> ObjectHolder {
        let cell = Rc::new(Value::Instance(Self { class, fields: RefCell::new(Closure::new()) }));
        let back = ObjectHolder::back_reference(&cell);

        if let Value::Instance(instance) = &*cell {
            instance.fields.borrow_mut().insert("self".to_string(), back);
        }

        ObjectHolder::from_rc(cell)
    }

    /// The class this instance was created from.
    #[must_use]
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Returns a holder sharing the named field, if it exists.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<ObjectHolder> {
        self.fields.borrow().get(name).map(ObjectHolder::share)
    }

    /// Inserts or overwrites a field.
    pub fn set_field(&self, name: &str, value: ObjectHolder) {
        self.fields.borrow_mut().insert(name.to_string(), value);
    }

    /// Reports whether the instance's class chain provides a method with the
    /// given name and formal parameter count.
    #[must_use]
    pub fn has_method(&self, name: &str, arity: usize) -> bool {
        self.class.has_method(name, arity)
    }
}
