use std::sync::atomic::{AtomicBool, Ordering};

use crate::token::{Token, Type};

static HAD_ERROR: AtomicBool = AtomicBool::new(false);
static HAD_RUNTIME_ERROR: AtomicBool = AtomicBool::new(false);

/// Checks if a scan, parse, resolve, or runtime error occurred.
pub fn did_error() -> bool {
    HAD_ERROR.load(Ordering::Relaxed) || HAD_RUNTIME_ERROR.load(Ordering::Relaxed)
}

/// Checks if a runtime error occurred.
pub fn did_runtime_error() -> bool {
    HAD_RUNTIME_ERROR.load(Ordering::Relaxed)
}

/// Clears both error flags. Used by the REPL so one bad line doesn't poison
/// the exit code of a session that recovers from it.
pub fn reset_error() {
    HAD_ERROR.store(false, Ordering::Relaxed);
    HAD_RUNTIME_ERROR.store(false, Ordering::Relaxed);
}

/// Every diagnostic error type implements this: print itself to stderr and
/// set the sticky flag that later determines the process exit code.
pub trait Error {
    fn throw(&self);
}

/// An error raised by the scanner while breaking source into tokens.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Error for ScanError {
    fn throw(&self) {
        eprintln!("[line {}] Error: {}", self.line + 1, self.message);
        HAD_ERROR.store(true, Ordering::Relaxed);
    }
}

/// An error raised by the parser while building the AST.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Error for ParseError {
    fn throw(&self) {
        if self.token.r#type == Type::EOF {
            eprintln!(
                "[line {}] Error at end: {}",
                self.token.location.line + 1,
                self.message
            );
        } else {
            eprintln!(
                "[line {}] Error at '{}': {}",
                self.token.location.line + 1,
                self.token.lexeme,
                self.message
            );
        }

        HAD_ERROR.store(true, Ordering::Relaxed);
    }
}

/// An error raised by the resolver's static scope-analysis pass.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Error for ResolveError {
    fn throw(&self) {
        eprintln!(
            "[line {}] Error at '{}': {}",
            self.token.location.line + 1,
            self.token.lexeme,
            self.message
        );

        HAD_ERROR.store(true, Ordering::Relaxed);
    }
}

/// An error raised while evaluating the program.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Error for RuntimeError {
    fn throw(&self) {
        eprintln!("[line {}] {}", self.token.location.line + 1, self.message);
        HAD_RUNTIME_ERROR.store(true, Ordering::Relaxed);
    }
}
