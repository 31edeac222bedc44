/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/parser/statements.rs
 * Purpose:  Statement and declaration grammar rules.
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the TOX programming language project.
 * 
 * TOX is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use std::rc::Rc;

use crate::ast::{Expr, FunctionDecl, Stmt};
use crate::error::StaticError;
use crate::lexer::token::{Literal, TokenKind};
use crate::parser::parser::{ParseResult, Parser, MAX_ARITY};

impl Parser<'_> {
    /// statement → forStmt | ifStmt | logStmt | returnStmt | whileStmt
    ///           | doStmt | block | exprStmt
    pub fn statement(&mut self) -> ParseResult<Stmt> {
        self.nested(Self::statement_kind)
    }

    fn statement_kind(&mut self) -> ParseResult<Stmt> {
        if self.match_kind(TokenKind::For) {
            return self.for_statement();
        }
        if self.match_kind(TokenKind::If) {
            return self.if_statement();
        }
        if self.match_kind(TokenKind::Log) {
            return self.log_statement();
        }
        if self.match_kind(TokenKind::Return) {
            return self.return_statement();
        }
        if self.match_kind(TokenKind::While) {
            return self.while_statement();
        }
        if self.match_kind(TokenKind::Do) {
            self.consume(TokenKind::LeftBrace, "Expect '{' after 'do'.")?;
            return Ok(Stmt::Block(self.block()?));
        }
        if self.match_kind(TokenKind::LeftBrace) {
            return Ok(Stmt::Block(self.block()?));
        }

        self.expression_statement()
    }

    /// fnDecl → "fn" IDENTIFIER "(" parameters? ")" block
    pub(crate) fn function(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARITY {
                    let error = StaticError::syntax(self.peek(), "Can't have more than 255 parameters.");
                    self.report(error);
                }

                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.block()?;

        Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body })))
    }

    /// letDecl → "let" IDENTIFIER ( "=" expression )? ";"
    pub(crate) fn let_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_kind(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Let { name, initializer })
    }

    /// forStmt → "for" "(" ( letDecl | exprStmt | ";" ) expression? ";" expression? ")" statement
    ///
    /// Desugared here into a block holding the initializer and a `while`
    /// whose body runs the increment after the original body.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_kind(TokenKind::Semicolon) {
            None
        } else if self.match_kind(TokenKind::Let) {
            Some(self.let_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if !self.check(TokenKind::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition = condition.unwrap_or(Expr::Literal(Literal::Bool(true)));
        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    /// ifStmt → "if" "(" expression ")" statement ( "else" statement )?
    ///
    /// A dangling `else` binds to the nearest `if`.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kind(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn log_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Log(value))
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();

        let value = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return { keyword, value })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// block → "{" declaration* "}"
    ///
    /// Errors inside the block are recovered by `declaration`, so only a
    /// missing `}` fails the block itself.
    pub(crate) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
