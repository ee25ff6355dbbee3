// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Statement parsing.
//!
//! Statements are newline-terminated; block constructs (`if`, `while`,
//! `for`, `function`, `procedure`) span lines and are closed by their end
//! keyword. A statement is dispatched on its leading token: control-flow
//! and declaration keywords pick their construct, everything else is parsed
//! as an expression and becomes either an assignment (when followed by `←`)
//! or an expression statement.

use crate::ast::{
    Assignment, ElseIf, Expression, ForStatement, IfStatement, Parameter, Statement,
    WhileStatement,
};

use super::{Keyword, ParseError, Parser, TokenKind};

impl Parser {
    /// Parses statements until end of input.
    pub(super) fn parse_program(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();
        self.skip_newlines();
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
            self.skip_newlines();
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let leading = match self.current_kind() {
            TokenKind::Keyword(keyword) => Some(*keyword),
            _ => None,
        };
        // Block statements recurse through their bodies; grow the stack
        // rather than overflow it. The nesting limit caps the depth.
        stacker::maybe_grow(32 * 1024, 256 * 1024, || match leading {
            Some(Keyword::If) => self.parse_if(),
            Some(Keyword::While) => self.parse_while(),
            Some(Keyword::For) => self.parse_for(),
            Some(Keyword::Function) => self.parse_function(),
            Some(Keyword::Procedure) => self.parse_procedure(),
            Some(Keyword::Return) => self.parse_return(),
            Some(Keyword::Break) => {
                self.advance();
                self.expect_statement_end()?;
                Ok(Statement::Break)
            }
            Some(Keyword::Constant) => self.parse_constant_declaration(),
            Some(keyword) if keyword.type_name().is_some() => {
                self.parse_variable_declaration()
            }
            _ => self.parse_assignment_or_expression(),
        })
    }

    /// Parses the statements of a block body, stopping at a block-closing
    /// keyword or end of input. The closing keyword is left for the caller.
    fn parse_body(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut body = Vec::new();
        self.skip_newlines();
        while !self.at_block_end() {
            body.push(self.parse_statement()?);
            self.skip_newlines();
        }
        Ok(body)
    }

    fn at_block_end(&self) -> bool {
        match self.current_kind() {
            TokenKind::Eof => true,
            TokenKind::Keyword(keyword) => keyword.closes_block(),
            _ => false,
        }
    }

    fn parse_if(&mut self) -> Result<Statement, ParseError> {
        self.enter_nesting()?;
        self.advance();
        let condition = self.parse_expression()?;
        self.expect_keyword(Keyword::Then, "'then' after the if condition")?;
        let then_body = self.parse_body()?;

        let mut else_ifs = Vec::new();
        while self.match_keyword(Keyword::Elif) {
            let condition = self.parse_expression()?;
            self.expect_keyword(Keyword::Then, "'then' after the elif condition")?;
            let body = self.parse_body()?;
            else_ifs.push(ElseIf { condition, body });
        }

        let else_body = if self.match_keyword(Keyword::Else) {
            Some(self.parse_body()?)
        } else {
            None
        };

        self.expect_keyword(Keyword::Endif, "'endif' to close the if statement")?;
        self.expect_statement_end()?;
        self.exit_nesting();
        Ok(Statement::If(IfStatement {
            condition,
            then_body,
            else_ifs,
            else_body,
        }))
    }

    fn parse_while(&mut self) -> Result<Statement, ParseError> {
        self.enter_nesting()?;
        self.advance();
        let condition = self.parse_expression()?;
        self.expect_keyword(Keyword::Do, "'do' after the while condition")?;
        let body = self.parse_body()?;
        self.expect_keyword(Keyword::Endwhile, "'endwhile' to close the while loop")?;
        self.expect_statement_end()?;
        self.exit_nesting();
        Ok(Statement::While(WhileStatement { condition, body }))
    }

    fn parse_for(&mut self) -> Result<Statement, ParseError> {
        self.enter_nesting()?;
        self.advance();
        let variable = self.expect_identifier("a loop variable after 'for'")?;

        let statement = if self.match_token(&TokenKind::Assign) {
            let start = self.parse_expression()?;
            self.expect_keyword(Keyword::To, "'to' after the loop start value")?;
            let end = self.parse_expression()?;
            let step = if self.match_keyword(Keyword::Step) {
                Some(self.parse_expression()?)
            } else {
                None
            };
            self.expect_keyword(Keyword::Do, "'do' before the loop body")?;
            let body = self.parse_body()?;
            self.expect_keyword(Keyword::Endfor, "'endfor' to close the for loop")?;
            ForStatement::Range {
                variable,
                start,
                end,
                step,
                body,
            }
        } else if self.match_keyword(Keyword::In) {
            let iterable = self.parse_expression()?;
            self.expect_keyword(Keyword::Do, "'do' before the loop body")?;
            let body = self.parse_body()?;
            self.expect_keyword(Keyword::Endfor, "'endfor' to close the for loop")?;
            ForStatement::ForEach {
                variable,
                iterable,
                body,
            }
        } else {
            return Err(self.unexpected("'←' or 'in' after the loop variable"));
        };

        self.expect_statement_end()?;
        self.exit_nesting();
        Ok(Statement::For(statement))
    }

    fn parse_function(&mut self) -> Result<Statement, ParseError> {
        self.enter_nesting()?;
        self.advance();
        let name = self.expect_identifier("a function name after 'function'")?;
        self.expect(&TokenKind::LeftParen, "'(' after the function name")?;
        let parameters = self.parse_parameters()?;

        let return_type = if self.match_token(&TokenKind::Colon) {
            Some(self.expect_type_keyword("a return type after ':'")?)
        } else {
            None
        };

        let body = self.parse_body()?;
        self.expect_keyword(Keyword::Endfunction, "'endfunction' to close the function")?;
        self.expect_statement_end()?;
        self.exit_nesting();
        Ok(Statement::FunctionDeclaration {
            name,
            parameters,
            return_type,
            body,
        })
    }

    fn parse_procedure(&mut self) -> Result<Statement, ParseError> {
        self.enter_nesting()?;
        self.advance();
        let name = self.expect_identifier("a procedure name after 'procedure'")?;
        self.expect(&TokenKind::LeftParen, "'(' after the procedure name")?;
        let parameters = self.parse_parameters()?;

        if self.check(&TokenKind::Colon) {
            return Err(ParseError::malformed(
                "procedures do not declare a return type",
                self.current_position(),
            ));
        }

        let body = self.parse_body()?;
        self.expect_keyword(
            Keyword::Endprocedure,
            "'endprocedure' to close the procedure",
        )?;
        self.expect_statement_end()?;
        self.exit_nesting();
        Ok(Statement::ProcedureDeclaration {
            name,
            parameters,
            body,
        })
    }

    /// Parses a `型: name, 型: name` parameter list up to and including the
    /// closing parenthesis. The opening parenthesis is already consumed.
    fn parse_parameters(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let mut parameters = Vec::new();
        if self.match_token(&TokenKind::RightParen) {
            return Ok(parameters);
        }
        loop {
            let type_name = self.expect_type_keyword("a parameter type")?;
            self.expect(
                &TokenKind::Colon,
                "':' between the parameter type and its name",
            )?;
            let name = self.expect_identifier("a parameter name")?;
            parameters.push(Parameter::new(name, type_name));
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        if !self.match_token(&TokenKind::RightParen) {
            return Err(ParseError::mismatched_paren(self.current_position()));
        }
        Ok(parameters)
    }

    fn parse_return(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        let value = if self.at_statement_end() {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_statement_end()?;
        Ok(Statement::Return(value))
    }

    fn parse_variable_declaration(&mut self) -> Result<Statement, ParseError> {
        let type_name = self.expect_type_keyword("a type keyword")?;
        self.expect(&TokenKind::Colon, "':' after the type")?;
        let name = self.expect_identifier("a variable name after ':'")?;
        let initial_value = if self.match_token(&TokenKind::Assign) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect_statement_end()?;
        Ok(Statement::VariableDeclaration {
            name,
            type_name,
            initial_value,
        })
    }

    fn parse_constant_declaration(&mut self) -> Result<Statement, ParseError> {
        self.advance();
        let type_name = self.expect_type_keyword("a type after '定数'")?;
        self.expect(&TokenKind::Colon, "':' after the type")?;
        let name = self.expect_identifier("a constant name after ':'")?;
        if !self.match_token(&TokenKind::Assign) {
            return Err(ParseError::malformed(
                "a constant declaration requires an initial value",
                self.current_position(),
            ));
        }
        let initial_value = self.parse_expression()?;
        self.expect_statement_end()?;
        Ok(Statement::ConstantDeclaration {
            name,
            type_name,
            initial_value,
        })
    }

    /// Parses a leading expression, then decides between an assignment and
    /// an expression statement based on whether `←` follows.
    fn parse_assignment_or_expression(&mut self) -> Result<Statement, ParseError> {
        let position = self.current_position();
        let expression = self.parse_expression()?;

        if !self.match_token(&TokenKind::Assign) {
            self.expect_statement_end()?;
            return Ok(Statement::Expression(expression));
        }

        let value = self.parse_expression()?;
        let statement = match expression {
            Expression::Identifier(name) => {
                Statement::Assignment(Assignment::Variable { name, value })
            }
            target @ Expression::ArrayAccess { .. } => {
                Statement::Assignment(Assignment::ArrayElement { target, value })
            }
            _ => {
                return Err(ParseError::malformed(
                    "only a variable or an array element can be assigned to",
                    position,
                ));
            }
        };
        self.expect_statement_end()?;
        Ok(statement)
    }
}
