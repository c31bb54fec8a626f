use std::collections::HashMap;
use std::mem;

use crate::error::{Error, ResolveError};
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GroupingData, LiteralValue, LogicalData,
    TernaryData, UnaryData, VariableData,
};
use crate::interpreter::Interpreter;
use crate::stmt::{
    BlockData, BreakData, ContinueData, ExpressionData, FunctionData, IfData, PrintData,
    ReturnData, Stmt, StmtVisitor, VarData, WhileData,
};
use crate::token::Token;

#[derive(PartialEq)]
enum FunctionType {
    None,
    Function,
}

/// A static scope-analysis pass run after parsing and before interpretation.
/// Walks the AST once, tracking which names are visible in which lexically
/// nested scope, and publishes a resolved depth for every `Variable`/`Assign`
/// node into the interpreter's side-table.
pub struct Resolver<'a> {
    interpreter: &'a mut Interpreter,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    inside_loop: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(interpreter: &'a mut Interpreter) -> Self {
        Resolver {
            interpreter,
            scopes: vec![],
            current_function: FunctionType::None,
            inside_loop: false,
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        expr.accept(self);
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        stmt.accept(self);
    }

    pub fn resolve(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn resolve_function(&mut self, data: &FunctionData, r#type: FunctionType) {
        let enclosing_function = mem::replace(&mut self.current_function, r#type);
        let enclosing_loop = mem::replace(&mut self.inside_loop, false);

        self.begin_scope();
        for param in &data.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve(&data.body);
        self.end_scope();

        self.current_function = enclosing_function;
        self.inside_loop = enclosing_loop;
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        let scope = self.scopes.last_mut().expect("scope stack to be non-empty");
        if scope.contains_key(&name.lexeme) {
            ResolveError {
                token: name.clone(),
                message: "Variable with this name already exists in this scope.".to_string(),
            }
            .throw();
        }
        scope.insert(name.lexeme.clone(), false);
    }

    fn define(&mut self, name: &Token) {
        if self.scopes.is_empty() {
            return;
        }

        self.scopes
            .last_mut()
            .expect("scope stack to be non-empty")
            .insert(name.lexeme.clone(), true);
    }

    fn resolve_local(&mut self, id: u64, name: &Token) {
        for (i, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(id, i);
                return;
            }
        }
    }
}

impl<'a> ExprVisitor<()> for Resolver<'a> {
    fn visit_literal_expr(&mut self, _value: &LiteralValue) {}

    fn visit_unary_expr(&mut self, data: &UnaryData) {
        self.resolve_expr(&data.right);
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) {
        self.resolve_expr(&data.left);
        self.resolve_expr(&data.right);
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) {
        self.resolve_expr(&data.left);
        self.resolve_expr(&data.right);
    }

    fn visit_ternary_expr(&mut self, data: &TernaryData) {
        self.resolve_expr(&data.cond);
        self.resolve_expr(&data.then_branch);
        self.resolve_expr(&data.else_branch);
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) {
        self.resolve_expr(&data.expr);
    }

    fn visit_variable_expr(&mut self, data: &VariableData) {
        if let Some(scope) = self.scopes.last() {
            if let Some(false) = scope.get(&data.name.lexeme) {
                ResolveError {
                    token: data.name.clone(),
                    message: "Can't read variable in its own initializer.".to_string(),
                }
                .throw();
            }
        }

        self.resolve_local(data.id, &data.name);
    }

    fn visit_assign_expr(&mut self, data: &AssignData) {
        self.resolve_expr(&data.value);
        self.resolve_local(data.id, &data.name);
    }

    fn visit_call_expr(&mut self, data: &CallData) {
        self.resolve_expr(&data.callee);

        for argument in &data.arguments {
            self.resolve_expr(argument);
        }
    }
}

impl<'a> StmtVisitor<()> for Resolver<'a> {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) {
        self.resolve_expr(&data.expr);
    }

    fn visit_print_stmt(&mut self, data: &PrintData) {
        self.resolve_expr(&data.expr);
    }

    fn visit_var_stmt(&mut self, data: &VarData) {
        self.declare(&data.name);
        if let Some(initializer) = &data.initializer {
            self.resolve_expr(initializer);
        }
        self.define(&data.name);
    }

    fn visit_block_stmt(&mut self, data: &BlockData) {
        self.begin_scope();
        self.resolve(&data.statements);
        self.end_scope();
    }

    fn visit_if_stmt(&mut self, data: &IfData) {
        self.resolve_expr(&data.condition);
        self.resolve_stmt(&data.then_branch);
        if let Some(else_branch) = &data.else_branch {
            self.resolve_stmt(else_branch);
        }
    }

    fn visit_while_stmt(&mut self, data: &WhileData) {
        self.resolve_expr(&data.condition);

        let enclosing_loop = mem::replace(&mut self.inside_loop, true);
        self.resolve_stmt(&data.body);
        self.inside_loop = enclosing_loop;

        if let Some(increment) = &data.increment {
            self.resolve_expr(increment);
        }
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) {
        if self.current_function == FunctionType::None {
            ResolveError {
                token: data.keyword.clone(),
                message: "Can't return from top-level.".to_string(),
            }
            .throw();
        }

        if let Some(value) = &data.value {
            self.resolve_expr(value);
        }
    }

    fn visit_function_stmt(&mut self, data: &FunctionData) {
        self.declare(&data.name);
        self.define(&data.name);

        self.resolve_function(data, FunctionType::Function);
    }

    fn visit_break_stmt(&mut self, data: &BreakData) {
        if !self.inside_loop {
            ResolveError {
                token: data.keyword.clone(),
                message: "Can't break outside of a loop.".to_string(),
            }
            .throw();
        }
    }

    fn visit_continue_stmt(&mut self, data: &ContinueData) {
        if !self.inside_loop {
            ResolveError {
                token: data.keyword.clone(),
                message: "Can't continue outside of a loop.".to_string(),
            }
            .throw();
        }
    }
}
