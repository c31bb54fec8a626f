use std::rc::Rc;

use crate::error::{Error, ParseError};
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, GroupingData, LiteralValue, LogicalData, NodeId,
    TernaryData, UnaryData, VariableData,
};
use crate::stmt::{
    BlockData, BreakData, ContinueData, ExpressionData, FunctionData, IfData, PrintData,
    ReturnData, Stmt, VarData, WhileData,
};
use crate::token::{Token, Type};

type ParseResult<T> = Result<T, ParseError>;

/// Returns whether the next token is any of the given types, consuming it if so.
macro_rules! match_any {
    ( $self:ident, $( $type:expr ),+ ) => {
        {
            if $( $self.check($type) ) ||* {
                $self.advance();
                true
            } else {
                false
            }
        }
    }
}

/// A recursive-descent parser over the precedence cascade:
///
/// - Program     -> Declaration* EOF ;
/// - Block       -> "{" Declaration* "}" ;
/// - Declaration -> FunDecl | VarDecl | Statement ;
/// - FunDecl     -> "fun" Function ;
/// - VarDecl     -> "var" IDENTIFIER ( "=" Expression )? ";" ;
/// - Function    -> IDENTIFIER "(" Parameters? ")" Block ;
/// - Parameters  -> IDENTIFIER ( "," IDENTIFIER )* ;
/// - Statement   -> ExprStmt | ForStmt | IfStmt | PrintStmt | ReturnStmt
///                 | WhileStmt | BreakStmt | ContinueStmt | Block ;
/// - ExprStmt    -> Expression ";" ;
/// - ForStmt     -> "for" "(" ( VarDecl | ExprStmt | ";" ) Expression? ";" Expression? ")" Statement ;
/// - IfStmt      -> "if" "(" Expression ")" Statement ( "else" Statement )? ;
/// - PrintStmt   -> "print" Expression ";" ;
/// - ReturnStmt  -> "return" Expression? ";" ;
/// - BreakStmt   -> "break" ";" ;
/// - ContinueStmt -> "continue" ";" ;
/// - WhileStmt   -> "while" "(" Expression ")" Statement ;
/// - Expression  -> Assignment ;
/// - Assignment  -> IDENTIFIER "=" Assignment | Ternary ;
/// - Ternary     -> LogicOr ( "?" Expression ":" Ternary )? ;
/// - LogicOr     -> LogicAnd ( "or" LogicAnd )* ;
/// - LogicAnd    -> Equality ( "and" Equality )* ;
/// - Equality    -> Comparison ( ( "!=" | "==" ) Comparison )* ;
/// - Comparison  -> Term ( ( ">" | ">=" | "<" | "<=" ) Term )* ;
/// - Term        -> Factor ( ( "+" | "-" ) Factor )* ;
/// - Factor      -> Unary ( ( "*" | "/" ) Unary )* ;
/// - Unary       -> ( "!" | "-" ) Unary | Call ;
/// - Call        -> Primary ( "(" Arguments? ")" )* ;
/// - Arguments   -> Expression ( "," Expression )* ;
/// - Primary     -> NUMBER | STRING | "false" | "true" | "nil" | "(" Expression ")" | IDENTIFIER ;
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    loop_level: u32,
    next_id: NodeId,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            current: 0,
            loop_level: 0,
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Parses the whole token stream into a program.
    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        statements
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn is_at_end(&self) -> bool {
        self.peek().r#type == Type::EOF
    }

    fn check(&self, r#type: Type) -> bool {
        if self.is_at_end() {
            return false;
        }

        self.peek().r#type == r#type
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }

        self.previous()
    }

    fn consume(&mut self, r#type: Type, message: &str) -> ParseResult<&Token> {
        if self.check(r#type) {
            return Ok(self.advance());
        }

        Err(ParseError {
            token: self.peek().clone(),
            message: message.to_string(),
        })
    }

    /// Parses a declaration, recovering via synchronization on failure.
    fn declaration(&mut self) -> Option<Stmt> {
        let statement = if match_any!(self, Type::Fun) {
            self.function("function")
        } else if match_any!(self, Type::Var) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match statement {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                error.throw();
                self.synchronize();
                None
            },
        }
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(Type::Identifier, "Expect variable name.")?.clone();

        let initializer = if match_any!(self, Type::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(Type::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var(VarData { name, initializer }))
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        if match_any!(self, Type::For) {
            return self.for_statement();
        }

        if match_any!(self, Type::If) {
            return self.if_statement();
        }

        if match_any!(self, Type::Print) {
            return self.print_statement();
        }

        if match_any!(self, Type::Return) {
            return self.return_statement();
        }

        if match_any!(self, Type::Break) {
            return self.break_statement();
        }

        if match_any!(self, Type::Continue) {
            return self.continue_statement();
        }

        if match_any!(self, Type::While) {
            return self.while_statement();
        }

        if match_any!(self, Type::LeftBrace) {
            return Ok(Stmt::Block(BlockData { statements: self.block()? }));
        }

        self.expression_statement()
    }

    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(Type::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if match_any!(self, Type::Semicolon) {
            None
        } else if match_any!(self, Type::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(Type::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(Type::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if !self.check(Type::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(Type::RightParen, "Expect ')' after for clauses.")?;

        self.loop_level += 1;
        let body = self.statement();
        self.loop_level -= 1;
        let body = body?;

        let mut body = Stmt::While(WhileData {
            condition: condition.unwrap_or(Expr::Literal(LiteralValue::Bool(true))),
            body: Box::new(body),
            increment,
        });

        if let Some(initializer) = initializer {
            body = Stmt::Block(BlockData { statements: vec![initializer, body] });
        }

        Ok(body)
    }

    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(Type::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(Type::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if match_any!(self, Type::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If(IfData { condition, then_branch, else_branch }))
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(Type::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(PrintData { expr }))
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();

        let value = if !self.check(Type::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(Type::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return(ReturnData { keyword, value }))
    }

    fn break_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();

        if self.loop_level == 0 {
            return Err(ParseError {
                token: keyword,
                message: "Can't break outside of a loop.".to_string(),
            });
        }

        self.consume(Type::Semicolon, "Expect ';' after 'break'.")?;
        Ok(Stmt::Break(BreakData { keyword }))
    }

    fn continue_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();

        if self.loop_level == 0 {
            return Err(ParseError {
                token: keyword,
                message: "Can't continue outside of a loop.".to_string(),
            });
        }

        self.consume(Type::Semicolon, "Expect ';' after 'continue'.")?;
        Ok(Stmt::Continue(ContinueData { keyword }))
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(Type::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(Type::RightParen, "Expect ')' after condition.")?;

        self.loop_level += 1;
        let body = self.statement();
        self.loop_level -= 1;

        Ok(Stmt::While(WhileData { condition, body: Box::new(body?), increment: None }))
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(Type::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(ExpressionData { expr }))
    }

    fn function(&mut self, kind: &str) -> ParseResult<Stmt> {
        let name = self.consume(Type::Identifier, &format!("Expect {kind} name."))?.clone();

        self.consume(Type::LeftParen, &format!("Expect '(' after {kind} name."))?;

        let mut params = vec![];

        if !self.check(Type::RightParen) {
            loop {
                if params.len() >= 255 {
                    return Err(ParseError {
                        token: self.peek().clone(),
                        message: "Can't have more than 255 parameters.".to_string(),
                    });
                }

                params.push(self.consume(Type::Identifier, "Expect parameter name.")?.clone());

                if !match_any!(self, Type::Comma) {
                    break;
                }
            }
        }

        self.consume(Type::RightParen, "Expect ')' after parameters.")?;
        self.consume(Type::LeftBrace, &format!("Expect '{{' before {kind} body."))?;

        let body = Rc::new(self.block()?);

        Ok(Stmt::Function(FunctionData { name, params, body }))
    }

    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(Type::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(Type::RightBrace, "Expect '}' after block.")?;

        Ok(statements)
    }

    fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.ternary()?;

        if match_any!(self, Type::Equal) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable(data) = expr {
                return Ok(Expr::Assign(AssignData {
                    id: self.next_id(),
                    name: data.name,
                    value: Box::new(value),
                }));
            }

            return Err(ParseError {
                token: equals,
                message: "Invalid assignment target.".to_string(),
            });
        }

        Ok(expr)
    }

    fn ternary(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if match_any!(self, Type::Question) {
            let then_branch = self.expression()?;
            self.consume(Type::Colon, "Expect ':' after then branch of ternary expression.")?;
            let else_branch = self.ternary()?;

            return Ok(Expr::Ternary(TernaryData {
                cond: Box::new(expr),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            }));
        }

        Ok(expr)
    }

    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;

        while match_any!(self, Type::Or) {
            let operator = self.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical(LogicalData { left: Box::new(expr), operator, right: Box::new(right) });
        }

        Ok(expr)
    }

    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;

        while match_any!(self, Type::And) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical(LogicalData { left: Box::new(expr), operator, right: Box::new(right) });
        }

        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        while match_any!(self, Type::BangEqual, Type::EqualEqual) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary(BinaryData { left: Box::new(expr), operator, right: Box::new(right) });
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;

        while match_any!(self, Type::Greater, Type::GreaterEqual, Type::Less, Type::LessEqual) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary(BinaryData { left: Box::new(expr), operator, right: Box::new(right) });
        }

        Ok(expr)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        while match_any!(self, Type::Minus, Type::Plus) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary(BinaryData { left: Box::new(expr), operator, right: Box::new(right) });
        }

        Ok(expr)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        while match_any!(self, Type::Slash, Type::Star) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary(BinaryData { left: Box::new(expr), operator, right: Box::new(right) });
        }

        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if match_any!(self, Type::Bang, Type::Minus) {
            let operator = self.previous().clone();
            let right = self.unary()?;

            return Ok(Expr::Unary(UnaryData { operator, right: Box::new(right) }));
        }

        self.call()
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments = vec![];

        if !self.check(Type::RightParen) {
            loop {
                if arguments.len() >= 255 {
                    ParseError {
                        token: self.peek().clone(),
                        message: "Can't have more than 255 arguments.".to_string(),
                    }
                    .throw();
                }

                arguments.push(self.expression()?);

                if !match_any!(self, Type::Comma) {
                    break;
                }
            }
        }

        let paren = self.consume(Type::RightParen, "Expect ')' after arguments.")?.clone();

        Ok(Expr::Call(CallData { id: self.next_id(), callee: Box::new(callee), paren, arguments }))
    }

    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        while match_any!(self, Type::LeftParen) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if match_any!(self, Type::False) {
            return Ok(Expr::Literal(LiteralValue::Bool(false)));
        }

        if match_any!(self, Type::True) {
            return Ok(Expr::Literal(LiteralValue::Bool(true)));
        }

        if match_any!(self, Type::Nil) {
            return Ok(Expr::Literal(LiteralValue::Nil));
        }

        if match_any!(self, Type::Number) {
            let crate::literal::Literal::Number(n) = self
                .previous()
                .literal
                .clone()
                .expect("NUMBER token to carry a literal value")
            else {
                unreachable!("NUMBER token literal is always a Literal::Number")
            };
            return Ok(Expr::Literal(LiteralValue::Number(n)));
        }

        if match_any!(self, Type::String) {
            let crate::literal::Literal::String(s) = self
                .previous()
                .literal
                .clone()
                .expect("STRING token to carry a literal value")
            else {
                unreachable!("STRING token literal is always a Literal::String")
            };
            return Ok(Expr::Literal(LiteralValue::String(s)));
        }

        if match_any!(self, Type::Identifier) {
            return Ok(Expr::Variable(VariableData { id: self.next_id(), name: self.previous().clone() }));
        }

        if match_any!(self, Type::LeftParen) {
            let expr = self.expression()?;
            self.consume(Type::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(GroupingData { expr: Box::new(expr) }));
        }

        // Error productions: report a specific message when a binary operator
        // or the ternary's `?` shows up where an operand was expected, then
        // consume the offending operator and its right operand so parsing
        // can continue rather than cascading into "Expect expression." noise.
        if match_any!(self, Type::Question) {
            self.ternary()?;
            return Err(ParseError {
                token: self.previous().clone(),
                message: "Missing left-hand condition of a ternary operator.".to_string(),
            });
        }

        if match_any!(
            self,
            Type::BangEqual,
            Type::EqualEqual,
            Type::Greater,
            Type::GreaterEqual,
            Type::Less,
            Type::LessEqual,
            Type::Plus
        ) {
            let operator = self.previous().clone();
            self.comparison()?;
            return Err(ParseError {
                token: operator,
                message: "Missing left-hand operand.".to_string(),
            });
        }

        Err(ParseError {
            token: self.peek().clone(),
            message: "Expect expression.".to_string(),
        })
    }

    /// Discards tokens until a likely statement boundary so parsing can
    /// resume after an error.
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().r#type == Type::Semicolon {
                return;
            }

            match self.peek().r#type {
                Type::Class
                | Type::Fun
                | Type::Var
                | Type::For
                | Type::If
                | Type::While
                | Type::Print
                | Type::Return => return,
                _ => {
                    self.advance();
                },
            };
        }
    }
}
