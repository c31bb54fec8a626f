use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::{Error, RuntimeError};
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GroupingData, LiteralValue, LogicalData,
    NodeId, TernaryData, UnaryData, VariableData,
};
use crate::function::{Function, NativeFunction};
use crate::object::{Callable, Object};
use crate::stmt::{
    BlockData, BreakData, ContinueData, ExpressionData, FunctionData, IfData, PrintData,
    ReturnData, Stmt, StmtVisitor, VarData, WhileData,
};
use crate::token::Type;

type EvalResult = Result<Object, RuntimeError>;

/// The outcome of executing a statement: either ordinary fallthrough, or one
/// of the three non-local control signals. These are not errors — `While`
/// consumes `Break`/`Continue`, `Call` consumes `Return`, and none of them
/// ever reach the diagnostic sink.
#[derive(Debug)]
pub enum Signal {
    Normal,
    Break,
    Continue,
    Return(Object),
}

type ExecResult = Result<Signal, RuntimeError>;

/// A tree-walking evaluator. Holds the global scope, the current scope, and
/// the scope-depth table the Resolver populates before `interpret` runs.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    pub locals: HashMap<NodeId, usize>,
    output: Box<dyn Write>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Builds an interpreter writing `print` output to the given sink,
    /// letting tests capture output into an in-memory buffer instead of
    /// stdout.
    pub fn with_output(output: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            let name = native.name.lexeme.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output,
        }
    }

    /// Records the resolved scope depth for a `Variable`/`Assign` node.
    pub fn resolve(&mut self, id: NodeId, depth: usize) {
        self.locals.insert(id, depth);
    }

    pub fn interpret(&mut self, statements: &[Stmt]) {
        for statement in statements {
            if let Err(error) = self.execute(statement) {
                error.throw();
                return;
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        expr.accept(self)
    }

    /// Executes a block's statements in a fresh environment, restoring the
    /// previous environment on every exit path, including an error or a
    /// non-local control signal.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: Rc<RefCell<Environment>>) -> ExecResult {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(Signal::Normal);
        for statement in statements {
            match self.execute(statement) {
                Ok(Signal::Normal) => continue,
                other => {
                    result = other;
                    break;
                },
            }
        }

        self.environment = previous;
        result
    }

    fn lookup_variable(&self, id: NodeId, name: &crate::token::Token) -> EvalResult {
        match self.locals.get(&id) {
            Some(&distance) => Ok(self.environment.borrow().get_at(distance, name)),
            None => self.globals.borrow().get(name),
        }
    }

    fn is_number(operand: &Object) -> bool {
        matches!(operand, Object::Number(_))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprVisitor<EvalResult> for Interpreter {
    fn visit_literal_expr(&mut self, value: &LiteralValue) -> EvalResult {
        Ok(match value {
            LiteralValue::Nil => Object::Nil,
            LiteralValue::Bool(b) => Object::Bool(*b),
            LiteralValue::Number(n) => Object::Number(*n),
            LiteralValue::String(s) => Object::String(s.clone()),
        })
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) -> EvalResult {
        let right = self.evaluate(&data.right)?;

        match data.operator.r#type {
            Type::Minus => match right {
                Object::Number(n) => Ok(Object::Number(-n)),
                _ => Err(RuntimeError {
                    token: data.operator.clone(),
                    message: "Operand must be a number.".to_string(),
                }),
            },
            Type::Bang => Ok(Object::Bool(!right.is_truthy())),
            _ => unreachable!("scanner/parser only produce ! and - as unary operators"),
        }
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) -> EvalResult {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;
        let operator = &data.operator;

        match operator.r#type {
            Type::Minus | Type::Slash | Type::Star => {
                let (Object::Number(l), Object::Number(r)) = (&left, &right) else {
                    return Err(RuntimeError {
                        token: operator.clone(),
                        message: "Operands must be numbers.".to_string(),
                    });
                };

                match operator.r#type {
                    Type::Minus => Ok(Object::Number(l - r)),
                    Type::Star => Ok(Object::Number(l * r)),
                    Type::Slash => {
                        if *r == 0.0 {
                            Err(RuntimeError {
                                token: operator.clone(),
                                message: "It looks like you tried division by 0. Yeah better don't try this at home.".to_string(),
                            })
                        } else {
                            Ok(Object::Number(l / r))
                        }
                    },
                    _ => unreachable!(),
                }
            },
            Type::Plus => match (&left, &right) {
                (Object::String(l), _) => Ok(Object::String(format!("{l}{right}"))),
                (Object::Number(l), Object::Number(r)) => Ok(Object::Number(l + r)),
                _ => Err(RuntimeError {
                    token: operator.clone(),
                    message: "Operands must be two strings or two numbers.".to_string(),
                }),
            },
            Type::Greater | Type::GreaterEqual | Type::Less | Type::LessEqual => {
                if !Self::is_number(&left) || !Self::is_number(&right) {
                    return Err(RuntimeError {
                        token: operator.clone(),
                        message: "Operands must be numbers.".to_string(),
                    });
                }

                let (Object::Number(l), Object::Number(r)) = (&left, &right) else { unreachable!() };

                Ok(Object::Bool(match operator.r#type {
                    Type::Greater => l > r,
                    Type::GreaterEqual => l >= r,
                    Type::Less => l < r,
                    Type::LessEqual => l <= r,
                    _ => unreachable!(),
                }))
            },
            Type::EqualEqual => Ok(Object::Bool(left == right)),
            Type::BangEqual => Ok(Object::Bool(left != right)),
            _ => unreachable!("scanner/parser only produce these operators as binary operators"),
        }
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) -> EvalResult {
        let left = self.evaluate(&data.left)?;

        match data.operator.r#type {
            Type::Or if left.is_truthy() => Ok(left),
            Type::Or => self.evaluate(&data.right),
            Type::And if !left.is_truthy() => Ok(left),
            Type::And => self.evaluate(&data.right),
            _ => unreachable!("scanner/parser only produce and/or as logical operators"),
        }
    }

    fn visit_ternary_expr(&mut self, data: &TernaryData) -> EvalResult {
        if self.evaluate(&data.cond)?.is_truthy() {
            self.evaluate(&data.then_branch)
        } else {
            self.evaluate(&data.else_branch)
        }
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) -> EvalResult {
        self.evaluate(&data.expr)
    }

    fn visit_variable_expr(&mut self, data: &VariableData) -> EvalResult {
        self.lookup_variable(data.id, &data.name)
    }

    fn visit_assign_expr(&mut self, data: &AssignData) -> EvalResult {
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.id) {
            Some(&distance) => {
                self.environment.borrow_mut().assign_at(distance, &data.name, value.clone());
            },
            None => {
                self.globals.borrow_mut().assign(&data.name, value.clone())?;
            },
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, data: &CallData) -> EvalResult {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let callable: &dyn Callable = match &callee {
            Object::Function(function) => function.as_ref(),
            Object::NativeFunction(function) => function.as_ref(),
            _ => {
                return Err(RuntimeError {
                    token: data.paren.clone(),
                    message: "Can only call functions and classes.".to_string(),
                });
            },
        };

        if arguments.len() != callable.arity() {
            return Err(RuntimeError {
                token: data.paren.clone(),
                message: format!("Expected {} arguments but got {}.", callable.arity(), arguments.len()),
            });
        }

        callable.call(self, arguments)
    }
}

impl StmtVisitor<ExecResult> for Interpreter {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) -> ExecResult {
        self.evaluate(&data.expr)?;
        Ok(Signal::Normal)
    }

    fn visit_print_stmt(&mut self, data: &PrintData) -> ExecResult {
        let value = self.evaluate(&data.expr)?;
        let _ = writeln!(self.output, "{value}");
        Ok(Signal::Normal)
    }

    fn visit_var_stmt(&mut self, data: &VarData) -> ExecResult {
        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::Nil,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(Signal::Normal)
    }

    fn visit_block_stmt(&mut self, data: &BlockData) -> ExecResult {
        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
        self.execute_block(&data.statements, environment)
    }

    fn visit_if_stmt(&mut self, data: &IfData) -> ExecResult {
        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(Signal::Normal)
        }
    }

    fn visit_while_stmt(&mut self, data: &WhileData) -> ExecResult {
        while self.evaluate(&data.condition)?.is_truthy() {
            match self.execute(&data.body)? {
                Signal::Normal | Signal::Continue => {
                    if let Some(increment) = &data.increment {
                        self.evaluate(increment)?;
                    }
                },
                Signal::Break => break,
                signal @ Signal::Return(_) => return Ok(signal),
            }
        }

        Ok(Signal::Normal)
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) -> ExecResult {
        let value = match &data.value {
            Some(value) => self.evaluate(value)?,
            None => Object::Nil,
        };

        Ok(Signal::Return(value))
    }

    fn visit_function_stmt(&mut self, data: &FunctionData) -> ExecResult {
        let function = Function {
            name: data.name.clone(),
            params: data.params.clone(),
            body: Rc::clone(&data.body),
            closure: Rc::clone(&self.environment),
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(Signal::Normal)
    }

    fn visit_break_stmt(&mut self, _data: &BreakData) -> ExecResult {
        Ok(Signal::Break)
    }

    fn visit_continue_stmt(&mut self, _data: &ContinueData) -> ExecResult {
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::resolver::Resolver;
    use crate::scanner::Scanner;

    fn run(source: &str) -> String {
        let output = Rc::new(RefCell::new(Vec::new()));

        struct SharedWriter(Rc<RefCell<Vec<u8>>>);
        impl Write for SharedWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.borrow_mut().write(buf)
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut interpreter = Interpreter::with_output(Box::new(SharedWriter(Rc::clone(&output))));

        let tokens = Scanner::new(source).scan_tokens();
        let statements = Parser::new(tokens).parse();
        Resolver::new(&mut interpreter).resolve(&statements);
        interpreter.interpret(&statements);

        let bytes = output.borrow().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn evaluates_arithmetic_precedence() {
        assert_eq!(run("print 1 + 2 * 3;"), "7\n");
    }

    #[test]
    fn block_scoping_shadows_then_restores() {
        assert_eq!(run("var a = 1; { var a = 2; print a; } print a;"), "2\n1\n");
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        assert_eq!(
            run("fun make(x){ fun get(){ return x; } return get; } var g = make(42); print g();"),
            "42\n"
        );
    }

    #[test]
    fn continue_skips_the_print_but_not_the_loop() {
        assert_eq!(
            run("var i = 0; while (i < 3) { if (i == 1) { i = i + 1; continue; } print i; i = i + 1; }"),
            "0\n2\n"
        );
    }

    #[test]
    fn recursion_computes_fibonacci() {
        assert_eq!(run("fun fib(n){ if (n<2) return n; return fib(n-1)+fib(n-2); } print fib(10);"), "55\n");
    }

    #[test]
    fn string_concatenation_stringifies_the_other_operand() {
        assert_eq!(run(r#"print "hi " + 3;"#), "hi 3\n");
    }

    #[test]
    fn ternary_picks_the_matching_branch() {
        assert_eq!(run("print true ? 1 : 2;"), "1\n");
        assert_eq!(run("print false ? 1 : 2;"), "2\n");
    }
}
