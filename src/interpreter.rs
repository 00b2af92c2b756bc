/// The evaluator module executes compiled postfix code.
///
/// The evaluator walks an instruction sequence once with a value stack,
/// performs real and complex arithmetic, and resolves variables against the
/// session's environment.
///
/// # Responsibilities
/// - Executes every instruction kind, promoting reals to complex as needed.
/// - Reports division by zero instead of producing infinities.
/// - Substitutes `0` for undefined variables and records a diagnostic.
pub mod evaluator;
/// The lexer module tokenizes a line of source code.
///
/// The lexer reads the raw line and produces a lazy stream of tokens, each
/// corresponding to a number, identifier, keyword or operator, ending with an
/// explicit end-of-input marker.
///
/// # Responsibilities
/// - Recognizes real and complex literals, keywords, identifiers and
///   punctuation.
/// - Skips and records unrecognized characters without stopping.
pub mod lexer;
/// The parser module compiles tokens into postfix code.
///
/// The parser checks the statement grammar and compiles expressions with
/// precedence climbing straight into an instruction sequence. No syntax tree
/// is built.
///
/// # Responsibilities
/// - Resolves precedence and associativity from an explicit table.
/// - Reports the offending token or the end of input on syntax errors.
pub mod parser;
/// The value module defines the runtime numbers.
///
/// # Responsibilities
/// - Defines the `Value` enum (real or complex).
/// - Implements complex arithmetic and the principal square root.
pub mod value;
/// The variable store.
///
/// A plain name-to-value map owned by a session.
pub mod environment;
/// Interpreter sessions.
///
/// A session bundles the environment, the pending diagnostics and the
/// interactive flag, and runs one line at a time through the pipeline.
pub mod session;
