#![allow(clippy::needless_return)]

//! Klox is a tree-walking interpreter for a small dynamically typed,
//! lexically scoped scripting language. It supports closures, control flow
//! (`if`/`while`/`for` with `break`/`continue`), a ternary operator,
//! short-circuiting `and`/`or`, and numeric/string primitives.
//!
//! ## Scanning
//! The first step is scanning: converting a string of characters into a
//! list of tokens. The scanner is implemented in the [`scanner`] module as
//! a state machine walking the source one character at a time. It reports
//! syntax errors as [`ScanError`](error::ScanError) (an unterminated string,
//! an unexpected character) and keeps scanning afterward, so multiple
//! mistakes can be reported in a single pass.
//!
//! ## Parsing
//! The second step is parsing: converting the token list into an abstract
//! syntax tree. The parser is implemented in the [`parser`] module as a
//! hand-written recursive descent parser. [`Expressions`](expr::Expr)
//! produce an [`Object`](object::Object); [`statements`](stmt::Stmt) perform
//! an action. The parser reports errors as [`ParseError`](error::ParseError)
//! and recovers by synchronizing at the next statement boundary.
//!
//! ## Resolving
//! The third step is resolving: a static pass over the AST that computes,
//! for each variable reference, how many enclosing scopes separate it from
//! its declaration. This is implemented in the [`resolver`] module and run
//! after parsing, before interpretation. It reports semantically invalid
//! but syntactically valid programs as [`ResolveError`](error::ResolveError)
//! — reading a variable in its own initializer, returning from top level.
//!
//! ## Interpreting
//! The final step is interpreting: walking the AST and evaluating it. The
//! interpreter is implemented in the [`interpreter`] module. It manages the
//! global scope, the current [`Environment`](environment::Environment)
//! chain, and the resolver's scope-depth table, and reports errors as
//! [`RuntimeError`](error::RuntimeError).

use std::{fs, process};

pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// Exit code for a usage error (wrong number of CLI arguments).
pub const EX_USAGE: i32 = 64;
/// Exit code for a syntax or static-analysis error (scan/parse/resolve).
pub const EX_DATAERR: i32 = 65;
/// Exit code for a missing or unreadable script file.
pub const EX_NOINPUT: i32 = 66;
/// Exit code for an uncaught runtime error.
pub const EX_SOFTWARE: i32 = 70;

/// Drives the scan → parse → resolve → interpret pipeline across one or more
/// runs, keeping a single [`interpreter::Interpreter`] alive between REPL
/// entries so top-level declarations persist across lines.
pub struct Klox {
    interpreter: interpreter::Interpreter,
}

impl Klox {
    pub fn new() -> Self {
        Klox {
            interpreter: interpreter::Interpreter::new(),
        }
    }

    /// Runs a script file to completion and exits the process with the
    /// appropriate status code. Exits 66 without panicking if the file
    /// cannot be read.
    pub fn run_file(&mut self, path: &str) {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Failed to read '{path}': {error}");
                process::exit(EX_NOINPUT);
            },
        };

        self.run(&contents);

        if error::did_runtime_error() {
            process::exit(EX_SOFTWARE);
        }
        if error::did_error() {
            process::exit(EX_DATAERR);
        }
    }

    /// Runs a single REPL line, printing diagnostics but never exiting the
    /// process — the caller drives the read loop.
    pub fn run_line(&mut self, source: &str) {
        self.run(source);
        error::reset_error();
    }

    fn run(&mut self, source: &str) {
        let tokens = Scanner::new(source).scan_tokens();
        if error::did_error() {
            return;
        }

        let statements = Parser::new(tokens).parse();
        if error::did_error() {
            return;
        }

        Resolver::new(&mut self.interpreter).resolve(&statements);
        if error::did_error() {
            return;
        }

        self.interpreter.interpret(&statements);
    }
}

impl Default for Klox {
    fn default() -> Self {
        Self::new()
    }
}
