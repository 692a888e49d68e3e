use std::rc::Rc;

use crate::interpreter::value::class::Class;

/// The comparison relation carried by a [`Statement::Comparison`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
}

/// An abstract syntax tree node.
///
/// Statements and expressions share one polymorphic node type; every variant
/// executes against a scope and a context and yields a value holder. The
/// parser guarantees the structural rules the evaluator relies on: method
/// bodies are wrapped in [`Statement::MethodBody`], and `return` only ever
/// appears inside one.
#[derive(Debug)]
pub enum Statement {
    /// A numeric constant.
    NumericConst {
        /// The constant value.
        value: i64,
    },
    /// A string constant.
    StringConst {
        /// The constant value.
        value: String,
    },
    /// A boolean constant.
    BoolConst {
        /// The constant value.
        value: bool,
    },
    /// The `None` constant, evaluating to the empty holder.
    NoneConst,
    /// A plain or dotted name: `x` or `circle.center.x`.
    ///
    /// The first name is looked up in the current scope; every further name
    /// is a field of the object found so far.
    VariableValue {
        /// The chain of names, outermost first. Never empty.
        names: Vec<String>,
    },
    /// Binds a name in the current scope: `x = <value>`.
    Assignment {
        /// The name being bound.
        name: String,
        /// The expression producing the new value.
        value: Box<Statement>,
    },
    /// Assigns into a field of an object: `<object>.field = <value>`.
    FieldAssignment {
        /// The expression producing the object.
        object: Box<Statement>,
        /// The field being assigned.
        field: String,
        /// The expression producing the new value.
        value: Box<Statement>,
    },
    /// The `print` statement.
    Print {
        /// The arguments, printed space-separated and newline-terminated.
        args: Vec<Statement>,
    },
    /// Renders a value into an owned string: `str(x)`.
    Stringify {
        /// The expression being rendered.
        value: Box<Statement>,
    },
    /// `+` over numbers, strings, or objects providing `__add__`.
    Add {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// `-` over numbers.
    Sub {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// `*` over numbers.
    Mult {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// `/` over numbers, truncating toward zero.
    Div {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// Short-circuit boolean `and`.
    And {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand, evaluated only when the left is true.
        rhs: Box<Statement>,
    },
    /// Short-circuit boolean `or`.
    Or {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand, evaluated only when the left is false.
        rhs: Box<Statement>,
    },
    /// Boolean negation.
    Not {
        /// The operand.
        value: Box<Statement>,
    },
    /// A comparison, yielding an owned boolean.
    Comparison {
        /// The relation to test.
        op: ComparisonOp,
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// Conditional execution. The condition must evaluate to a boolean.
    IfElse {
        /// The condition expression.
        condition: Box<Statement>,
        /// Executed when the condition is true.
        then_body: Box<Statement>,
        /// Executed when the condition is false, if present.
        else_body: Option<Box<Statement>>,
    },
    /// A sequence of statements executed in order.
    Compound {
        /// The statements.
        statements: Vec<Statement>,
    },
    /// The boundary of a method body: converts a `return` in flight back
    /// into a normal value.
    MethodBody {
        /// The wrapped body.
        body: Box<Statement>,
    },
    /// Unwinds to the innermost enclosing method body with a value.
    Return {
        /// The expression producing the returned value.
        value: Box<Statement>,
    },
    /// Binds a class name in the current scope.
    ClassDefinition {
        /// The class being defined.
        class: Rc<Class>,
    },
    /// Creates a fresh instance of a class, running `__init__` when one with
    /// a matching argument count exists.
    NewInstance {
        /// The class being instantiated.
        class: Rc<Class>,
        /// Constructor arguments.
        args: Vec<Statement>,
    },
    /// Calls a method on an object.
    MethodCall {
        /// The expression producing the receiver.
        object: Box<Statement>,
        /// The method name.
        method: String,
        /// Call arguments, evaluated left to right.
        args: Vec<Statement>,
    },
}
