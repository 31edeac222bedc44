/*
 * ==========================================================================
 * TOX - A small tree-walking interpreter
 * ==========================================================================
 * 
 * File:     src/parser/expressions.rs
 * Purpose:  Expression grammar rules.
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

/*!
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire TOX expression grammar**.
 *
 * Parsing order follows precedence, lowest to highest:
 *
 *   assignment → or → and → equality → comparison → term → factor
 *              → unary → call → primary
 *
 * Every binary level loops while the next token is one of its operators,
 * which makes all of them left-associative.
 * ==========================================================================
 */

use crate::ast::Expr;
use crate::error::StaticError;
use crate::lexer::token::{Literal, TokenKind};
use crate::parser::parser::{ParseResult, Parser, MAX_ARITY};

impl Parser<'_> {
    /// expression → assignment
    pub fn expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::assignment)
    }

    /// assignment → IDENTIFIER "=" assignment | or
    ///
    /// The target is parsed as an ordinary expression and validated after
    /// the `=` is seen, so no separate l-value grammar is needed.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if self.match_kind(TokenKind::Equal) {
            let equals = self.previous().clone();
            let value = self.nested(Self::assignment)?;

            return match expr {
                Expr::Variable(name) => Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                }),
                _ => Err(StaticError::syntax(&equals, "Invalid assignment target.")
                    .with_help("only a variable name can appear left of '='")),
            };
        }

        Ok(expr)
    }

    /// or → and ( "or" and )*
    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;

        while self.match_kind(TokenKind::Or) {
            let operator = self.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// and → equality ( "and" equality )*
    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;

        while self.match_kind(TokenKind::And) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// equality → comparison ( ( "!=" | "==" ) comparison )*
    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        while self.match_any(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;

        while self.match_any(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// term → factor ( ( "-" | "+" ) factor )*
    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        while self.match_any(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// factor → unary ( ( "/" | "*" ) unary )*
    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        while self.match_any(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// unary → ( "!" | "-" ) unary | call
    fn unary(&mut self) -> ParseResult<Expr> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.nested(Self::unary)?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.call()
    }

    /// call → primary ( "(" arguments? ")" )*
    ///
    /// Each suffix wraps the previous result, so `f()()` calls whatever
    /// `f()` returned.
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        while self.match_kind(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    /// arguments → expression ( "," expression )*
    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if arguments.len() >= MAX_ARITY {
                    let error = StaticError::syntax(self.peek(), "Can't have more than 255 arguments.");
                    self.report(error);
                }

                arguments.push(self.expression()?);

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    /// primary → "true" | "false" | "nil" | NUMBER | STRING | IDENTIFIER
    ///         | "(" expression ")"
    fn primary(&mut self) -> ParseResult<Expr> {
        if self.match_kind(TokenKind::False) {
            return Ok(Expr::Literal(Literal::Bool(false)));
        }
        if self.match_kind(TokenKind::True) {
            return Ok(Expr::Literal(Literal::Bool(true)));
        }
        if self.match_kind(TokenKind::Nil) {
            return Ok(Expr::Literal(Literal::Nil));
        }

        if self.match_any(&[TokenKind::Number, TokenKind::String]) {
            let literal = self.previous().literal.clone().unwrap_or(Literal::Nil);
            return Ok(Expr::Literal(literal));
        }

        if self.match_kind(TokenKind::Identifier) {
            return Ok(Expr::Variable(self.previous().clone()));
        }

        if self.match_kind(TokenKind::LeftParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(StaticError::syntax(self.peek(), "Expect expression."))
    }
}
