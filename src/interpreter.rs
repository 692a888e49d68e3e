/// Walks the AST and executes it.
///
/// The evaluator is a pure tree walk: every node executes against a scope
/// and a context, values travel in holders, and a `return` travels as an
/// explicit control-flow result until the enclosing method body absorbs it.
///
/// # Responsibilities
/// - Executes every statement form against a scope.
/// - Dispatches methods through the class chain with `self` bound
///   implicitly.
/// - Streams `print` output to the sink the embedder supplied.
pub mod evaluator;
/// Turns source text into a token stream.
///
/// The lexer is line-oriented: indentation is measured in two-space levels
/// and surfaces as synthetic `Indent`/`Dedent` tokens, every non-empty line
/// ends in a `Newline` token, and the stream always closes with a single
/// `Eof`. The parser consumes the stream through a cursor with typed
/// `expect` helpers.
///
/// # Responsibilities
/// - Tokenizes line bodies: numbers, strings, identifiers, keywords,
///   operators and punctuation.
/// - Tracks indentation depth and emits the structural tokens.
/// - Exposes the cursor API the parser is written against.
pub mod lexer;
/// Builds the AST from the token stream.
///
/// A hand-written recursive-descent parser with one level of lookahead. It
/// keeps a table of the classes defined so far, which is what distinguishes
/// an instantiation from an unknown call at parse time.
///
/// # Responsibilities
/// - Parses statements, class and method definitions, and expressions with
///   the usual precedence.
/// - Resolves class names for instantiation and inheritance.
/// - Wraps every method body in the method boundary node.
pub mod parser;
/// Runtime values and the holders that share them.
///
/// Values are tagged and live behind shared ownership; classes are immutable
/// once built, and instances carry their fields in an interior-mutable
/// scope whose `self` entry is a non-owning back-reference.
pub mod value;
