use std::fs;
use std::rc::Rc;

use pyrite::ast::Statement;
use pyrite::interpreter::evaluator::comparison::{equal, greater, less};
use pyrite::interpreter::evaluator::core::Context;
use pyrite::interpreter::value::class::{Class, Instance, Method};
use pyrite::interpreter::value::core::{ObjectHolder, Value};
use walkdir::WalkDir;

fn run_source(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    pyrite::run(source, &mut output)?;
    Ok(String::from_utf8(output)?)
}

fn assert_output(source: &str, expected: &str) {
    match run_source(source) {
        Ok(output) => assert_eq!(output, expected, "script:\n{source}"),
        Err(e) => panic!("Script failed: {e}\n{source}"),
    }
}

fn assert_failure(source: &str) {
    if run_source(source).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{source}")
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print 1 + 2 * 3", "7\n");
    assert_output("print (1 + 2) * 3", "9\n");
    assert_output("print 7 / 2", "3\n");
    assert_output("print 0 - 7 / 2", "-3\n");
    assert_output("print 10 - 2 - 3", "5\n");
    assert_output("print -4 * -4", "16\n");
    assert_output("print 2 - -3", "5\n");
}

#[test]
fn string_concatenation() {
    assert_output("x = \"ab\"\ny = \"cd\"\nprint x + y", "abcd\n");
    assert_output("print \"\" + \"tail\"", "tail\n");
}

#[test]
fn arithmetic_type_mismatches_are_errors() {
    assert_failure("print 1 + \"a\"");
    assert_failure("print \"a\" - \"b\"");
    assert_failure("print True * False");
    assert_failure("print None + None");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("print 10 / 0");
}

#[test]
fn arithmetic_overflow_is_an_error() {
    assert_failure("print 9223372036854775807 + 1");
    assert_failure("print 0 - 9223372036854775807 - 2");
    assert_failure("print 4611686018427387904 * 2");
}

#[test]
fn boolean_operators() {
    assert_output("print not True, not False", "False True\n");
    assert_output("print not not True", "True\n");
    assert_output("print True and True, True and False", "True False\n");
    assert_output("print False or False, False or True", "False True\n");
    assert_output("print True and False or True", "True\n");
    assert_failure("print 1 and True");
    assert_failure("print not 0");
}

#[test]
fn short_circuit_skips_the_right_operand() {
    let source = "\
class Probe:
  def __init__():
    self.hits = 0
  def bump():
    self.hits = self.hits + 1
    return True

probe = Probe()
x = False and probe.bump()
y = True or probe.bump()
print probe.hits, x, y
";
    assert_output(source, "0 False True\n");
}

#[test]
fn comparisons_on_scalars() {
    assert_output("print 1 < 2, 2 < 1, 1 == 1", "True False True\n");
    assert_output("print 2 >= 2, 2 > 2, 2 <= 1, 2 != 2", "True False False False\n");
    assert_output("print \"abc\" < \"abd\", \"a\" == \"a\"", "True True\n");
    assert_output("print False < True", "True\n");
    assert_output("print None == None", "True\n");
    assert_failure("print 1 < \"a\"");
    assert_failure("print 1 == \"1\"");
    assert_failure("print None < 1");
}

#[test]
fn if_else_branches() {
    assert_output("if 1 < 2:\n  print \"y\"\nelse:\n  print \"n\"", "y\n");
    assert_output("if 2 < 1:\n  print \"y\"\nelse:\n  print \"n\"", "n\n");
    assert_output("if 2 < 1:\n  print \"y\"\nprint \"after\"", "after\n");
    assert_failure("if 1:\n  print \"y\"");
}

#[test]
fn print_forms() {
    assert_output("print", "\n");
    assert_output("print None", "None\n");
    assert_output("print 1, \"two\", True, None", "1 two True None\n");
    assert_output("x = 5\nprint x", "5\n");
    assert_failure("print missing");
}

#[test]
fn stringify() {
    assert_output("print str(42)", "42\n");
    assert_output("print str(None)", "None\n");
    assert_output("print str(True) + \"!\"", "True!\n");
    assert_output("print str(\"already\")", "already\n");
}

#[test]
fn variables_rebind_without_aliasing_scalars() {
    assert_output("x = 1\ny = x\nx = 2\nprint x, y", "2 1\n");
}

#[test]
fn class_with_str_method_prints_through_it() {
    let source = "\
class P:
  def __str__():
    return \"p\"
print P()
";
    assert_output(source, "p\n");
}

#[test]
fn class_without_str_method_prints_nothing() {
    let source = "\
class Silent:
  def noop():
    return None
print Silent()
";
    assert_output(source, "\n");
}

#[test]
fn classes_print_by_name() {
    let source = "\
class Widget:
  def noop():
    return None
print Widget
";
    assert_output(source, "Class Widget\n");
}

#[test]
fn inherited_method_sees_the_child_through_self() {
    let source = "\
class A:
  def f():
    return 1
class B(A):
  def g():
    return self.f() + 10
print B().g()
";
    assert_output(source, "11\n");
}

#[test]
fn method_overrides_dispatch_through_self() {
    let source = "\
class Animal:
  def describe():
    return \"a \" + self.kind()
  def kind():
    return \"creature\"
class Dog(Animal):
  def kind():
    return \"dog\"
print Animal().describe()
print Dog().describe()
";
    assert_output(source, "a creature\na dog\n");
}

#[test]
fn fields_are_shared_between_aliases() {
    let source = "\
class Box:
  def __init__():
    self.value = 0
a = Box()
b = a
b.value = 5
print a.value
";
    assert_output(source, "5\n");
}

#[test]
fn each_instantiation_creates_a_fresh_instance() {
    let source = "\
class Box:
  def __init__():
    self.value = 1
  def set(value):
    self.value = value
    return value
a = Box()
b = Box()
a.set(7)
print a.value, b.value
";
    assert_output(source, "7 1\n");
}

#[test]
fn init_runs_only_with_matching_arity() {
    let source = "\
class Pair:
  def __init__(a, b):
    self.a = a
    self.b = b
p = Pair(1, 2)
print p.a, p.b
";
    assert_output(source, "1 2\n");

    // No __init__/0 exists, so construction succeeds but sets no fields.
    let source = "\
class Pair:
  def __init__(a, b):
    self.a = a
    self.b = b
p = Pair()
print p.a
";
    assert_failure(source);
}

#[test]
fn missing_method_or_wrong_arity_is_an_error() {
    assert_failure("class A:\n  def f():\n    return 1\nprint A().g()");
    assert_failure("class A:\n  def f():\n    return 1\nprint A().f(5)");
}

#[test]
fn dotted_chains_traverse_nested_objects() {
    let source = "\
class Point:
  def __init__(x, y):
    self.x = x
    self.y = y
class Circle:
  def __init__(center):
    self.center = center
circle = Circle(Point(3, 4))
print circle.center.x, circle.center.y
";
    assert_output(source, "3 4\n");
}

#[test]
fn missing_fields_and_names_are_errors() {
    assert_failure("print nobody");
    assert_failure("class A:\n  def f():\n    return 1\na = A()\nprint a.missing");
    assert_failure("x = 5\nprint x.field");
}

#[test]
fn return_unwinds_through_nested_statements() {
    let source = "\
class T:
  def m():
    if True:
      if True:
        return 1
      return 2
    return 3
print T().m()
";
    assert_output(source, "1\n");
}

#[test]
fn statements_after_return_do_not_run() {
    let source = "\
class T:
  def m():
    self.trace = \"before\"
    return 1
    self.trace = \"after\"
t = T()
t.m()
print t.trace
";
    assert_output(source, "before\n");
}

#[test]
fn method_without_return_yields_none() {
    let source = "\
class T:
  def m():
    x = 1
print T().m()
";
    assert_output(source, "None\n");
}

#[test]
fn bare_return_yields_none() {
    let source = "\
class T:
  def m():
    return
print T().m()
";
    assert_output(source, "None\n");
}

#[test]
fn recursion_through_self() {
    let source = "\
class Math:
  def fact(n):
    if n < 2:
      return 1
    return n * self.fact(n - 1)
print Math().fact(6)
";
    assert_output(source, "720\n");
}

#[test]
fn user_defined_equality_and_ordering() {
    let source = "\
class Money:
  def __init__(amount):
    self.amount = amount
  def __eq__(other):
    return self.amount == other.amount
  def __lt__(other):
    return self.amount < other.amount
a = Money(3)
b = Money(7)
c = Money(3)
print a == c, a == b, a != b
print a < b, b < a, a <= c, a >= b, b > a
";
    assert_output(source, "True False True\nTrue False True False True\n");
}

#[test]
fn user_defined_addition() {
    let source = "\
class Sum:
  def __init__(total):
    self.total = total
class Pennies:
  def __init__(n):
    self.n = n
  def __add__(other):
    return Sum(self.n + other.n)
s = Pennies(2) + Pennies(5)
print s.total
";
    assert_output(source, "7\n");
}

#[test]
fn objects_without_comparison_methods_fall_back_to_identity() {
    let source = "\
class A:
  def f():
    return 1
a = A()
b = a
print a == b
";
    assert_output(source, "True\n");

    assert_failure("class A:\n  def f():\n    return 1\nprint A() == A()");
    assert_failure("class A:\n  def f():\n    return 1\nprint A() < A()");
}

#[test]
fn lone_bang_evaluates_as_none() {
    // The lexer quirk is visible end to end.
    assert_output("print !", "None\n");
}

#[test]
fn parse_errors_are_reported() {
    assert_failure("print (1 + 2");
    assert_failure("if 1 < 2 print 3");
    assert_failure("x = ");
    assert_failure("Unknown()");
    assert_failure("class B(Missing):\n  def f():\n    return 1");
    assert_failure("1 = 2");
    assert_failure("class A:\n  def f():\n    return 1\nA().f().field = 3");
}

#[test]
fn comparison_primitives_are_total_for_same_kind_scalars() {
    let mut sink = Vec::new();
    let mut context = Context::new(&mut sink);

    let pairs = [(1, 2), (2, 1), (3, 3), (-5, 5), (0, 0)];
    for (a, b) in pairs {
        let lhs = ObjectHolder::own(Value::Number(a));
        let rhs = ObjectHolder::own(Value::Number(b));

        let outcomes = [
            less(&lhs, &rhs, &mut context).expect("less failed"),
            equal(&lhs, &rhs, &mut context).expect("equal failed"),
            greater(&lhs, &rhs, &mut context).expect("greater failed"),
        ];
        let holding = outcomes.iter().filter(|outcome| **outcome).count();
        assert_eq!(holding, 1, "exactly one of <, ==, > must hold for ({a}, {b})");
    }
}

#[test]
fn empty_holders_compare_equal() {
    let mut sink = Vec::new();
    let mut context = Context::new(&mut sink);

    let lhs = ObjectHolder::none();
    let rhs = ObjectHolder::none();
    assert!(equal(&lhs, &rhs, &mut context).expect("equal failed"));
    assert!(lhs.is_empty());
    assert!(!lhs.is_truthy());
}

#[test]
fn holder_truthiness() {
    assert!(ObjectHolder::own(Value::Number(3)).is_truthy());
    assert!(!ObjectHolder::own(Value::Number(0)).is_truthy());
    assert!(ObjectHolder::own(Value::String("x".to_string())).is_truthy());
    assert!(!ObjectHolder::own(Value::String(String::new())).is_truthy());
    assert!(ObjectHolder::own(Value::Bool(true)).is_truthy());
    assert!(!ObjectHolder::own(Value::Bool(false)).is_truthy());
    assert!(!ObjectHolder::none().is_truthy());
}

#[test]
fn shared_holders_alias_the_same_value() {
    let owned = ObjectHolder::own(Value::Number(42));
    let shared = owned.share();
    assert!(owned.is_same(&shared));
    assert_eq!(shared.as_number(), Some(42));
}

#[test]
fn instances_always_bind_self_to_themselves() {
    let class = Rc::new(Class::new("Point".to_string(), Vec::new(), None));
    let instance = Instance::create(class);

    match instance.get().as_deref() {
        Some(Value::Instance(object)) => {
            let bound = object.get_field("self").expect("self must be bound");
            assert!(bound.is_same(&instance));
        },
        _ => panic!("expected an instance"),
    }
}

#[test]
fn method_lookup_walks_the_parent_chain_with_arity() {
    let method = |name: &str, params: &[&str]| Method {
        name: name.to_string(),
        formal_params: params.iter().map(ToString::to_string).collect(),
        body: Statement::MethodBody { body: Box::new(Statement::Compound { statements: vec![] }) },
    };

    let parent = Rc::new(Class::new(
        "Parent".to_string(),
        vec![method("f", &[]), method("g", &["a"])],
        None,
    ));
    let child = Rc::new(Class::new(
        "Child".to_string(),
        vec![method("f", &["a", "b"])],
        Some(Rc::clone(&parent)),
    ));

    assert!(parent.has_method("f", 0));
    assert!(!parent.has_method("f", 2));

    // The child's override shadows the parent's arity.
    assert!(child.has_method("f", 2));
    assert!(!child.has_method("f", 0));
    assert!(child.has_method("g", 1));
    assert!(!child.has_method("missing", 0));
}

#[test]
fn script_files_produce_their_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts")
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "pyr"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        match run_source(&source) {
            Ok(output) => assert_eq!(output, expected, "script {path:?}"),
            Err(e) => panic!("Script {path:?} failed: {e}"),
        }
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn readme_examples_work() {
    let content = fs::read_to_string("README.md").expect("Failed to read README.md");

    let mut count = 0;
    for (i, code) in extract_code_blocks(&content).into_iter().enumerate() {
        count += 1;
        if let Err(e) = run_source(&code) {
            panic!("README example {} failed:\n{}\nError: {:?}", i + 1, code, e);
        }
    }

    assert!(count > 0, "No pyrite examples found in README.md");
}

fn extract_code_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```pyrite") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
