use std::rc::{Rc, Weak};

use crate::interpreter::value::class::{Class, Instance};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, fields and method returns. The language's `None` is not a
/// value of its own; it is represented by the empty [`ObjectHolder`].
///
/// Values are never cloned. Every value lives behind a shared reference and
/// is reached exclusively through an [`ObjectHolder`], so two holders that
/// alias the same value observe each other's mutations.
#[derive(Debug)]
pub enum Value {
    /// A 64-bit signed integer.
    Number(i64),
    /// A string of text.
    String(String),
    /// A boolean value, printed as `True` or `False`.
    Bool(bool),
    /// A class definition.
    Class(Rc<Class>),
    /// An instance of a user-defined class.
    Instance(Instance),
}

/// A handle to a runtime value.
///
/// A holder either owns its value together with all other holders that share
/// it, or holds a non-owning back-reference. The back-reference form exists
/// for exactly one binding: the `self` entry inside an instance's own field
/// scope, which would otherwise keep the instance alive forever.
#[derive(Debug, Clone)]
enum Handle {
    Owned(Rc<Value>),
    Back(Weak<Value>),
}

/// A shared-ownership wrapper around a [`Value`], possibly empty.
///
/// The empty holder is the language's `None`: it is falsy, prints as `None`,
/// and is what statements without an interesting result evaluate to.
#[derive(Debug, Clone, Default)]
pub struct ObjectHolder {
    handle: Option<Handle>,
}

impl ObjectHolder {
    /// Creates a holder that owns a freshly created value.
    #[must_use]
    pub fn own(value: Value) -> Self {
        Self { handle: Some(Handle::Owned(Rc::new(value))) }
    }

    /// Creates the empty holder.
    #[must_use]
    pub fn none() -> Self {
        Self { handle: None }
    }

    /// Creates a holder aliasing the same value as this one.
    ///
    /// Sharing an empty holder yields an empty holder. Sharing a
    /// back-reference yields an owning alias, so the result is safe to store
    /// anywhere.
    #[must_use]
    pub fn share(&self) -> Self {
        Self { handle: self.get().map(Handle::Owned) }
    }

    pub(crate) fn from_rc(value: Rc<Value>) -> Self {
        Self { handle: Some(Handle::Owned(value)) }
    }

    /// Creates the non-owning back-reference used for the `self` binding.
    pub(crate) fn back_reference(value: &Rc<Value>) -> Self {
        Self { handle: Some(Handle::Back(Rc::downgrade(value))) }
    }

    /// Returns a strong reference to the contained value.
    ///
    /// Yields `None` for the empty holder and for a back-reference whose
    /// value is gone.
    #[must_use]
    pub fn get(&self) -> Option<Rc<Value>> {
        match &self.handle {
            Some(Handle::Owned(value)) => Some(Rc::clone(value)),
            Some(Handle::Back(value)) => value.upgrade(),
            None => None,
        }
    }

    /// Returns `true` when both holders refer to the same underlying value.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        match (self.get(), other.get()) {
            (Some(lhs), Some(rhs)) => Rc::ptr_eq(&lhs, &rhs),
            _ => false,
        }
    }

    /// Reports whether the holder is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }

    /// Evaluates the holder's truthiness.
    ///
    /// `Bool` values yield themselves, numbers are true when non-zero,
    /// strings are true when non-empty, and everything else, including the
    /// empty holder, is false.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self.get().as_deref() {
            Some(Value::Bool(value)) => *value,
            Some(Value::Number(value)) => *value != 0,
            Some(Value::String(value)) => !value.is_empty(),
            _ => false,
        }
    }

    /// Returns the contained boolean, if the holder contains one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.get().as_deref() {
            Some(Value::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained number, if the holder contains one.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self.get().as_deref() {
            Some(Value::Number(value)) => Some(*value),
            _ => None,
        }
    }
}
