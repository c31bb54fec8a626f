use std::cell::RefCell;
use std::fmt::{Debug, Display};
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::interpreter::{Interpreter, Signal};
use crate::object::{Callable, Object};
use crate::stmt::Stmt;
use crate::token::{Location, Token, Type};

/// A user-defined function value. Capturing `closure` rather than rebinding
/// against `interpreter.globals` each call is what makes closures work:
/// every call gets a fresh scope parented to the environment that existed
/// when the function was declared.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Rc<Vec<Stmt>>,
    pub closure: Rc<RefCell<Environment>>,
}

impl Callable for Function {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        let mut environment = Environment::new(Some(Rc::clone(&self.closure)));

        self.params
            .iter()
            .zip(arguments)
            .for_each(|(param, arg)| {
                environment.define(&param.lexeme, arg);
            });

        let signal = interpreter.execute_block(&self.body, Rc::new(RefCell::new(environment)))?;

        match signal {
            Signal::Return(value) => Ok(value),
            _ => Ok(Object::Nil),
        }
    }

    fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn {}>", self.name.lexeme)
    }
}

#[derive(Clone)]
pub struct NativeFunction {
    pub name: Token,
    pub arity: usize,
    pub function: fn(&mut Interpreter, Vec<Object>) -> Result<Object, RuntimeError>,
}

impl Callable for NativeFunction {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        (self.function)(interpreter, arguments)
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl NativeFunction {
    /// The builtins bound into every interpreter's global scope.
    pub fn get_globals() -> Vec<NativeFunction> {
        vec![NativeFunction {
            name: Token::new(Type::Identifier, "clock".to_owned(), None, Location::new(0, 0)),
            arity: 0,
            function: |_, _| {
                let now = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .expect("system clock is before the Unix epoch")
                    .as_secs_f64();
                Ok(Object::Number(now))
            },
        }]
    }
}

impl Display for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn>")
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<native fn>")
    }
}
