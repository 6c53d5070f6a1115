//! Statement parsing.
//!
//! Every statement parser starts on the statement's first token and leaves
//! the cursor on its last one (the optional `;` included).

use monkey_ir::{
    BlockStatement, ExpressionStatement, Identifier, LetStatement, ReturnStatement, Statement,
    TokenKind,
};
use tracing::trace;

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse the statement starting at the current token, leaving the cursor
    /// on its last token. `None` means an error was recorded.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        trace!(kind = %self.cursor.current_kind(), "parse_statement");
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            TokenKind::LBrace => {
                let block = self.parse_block()?;
                self.skip_optional_semicolon();
                Some(Statement::Block(block))
            }
            _ => self
                .parse_expression_statement()
                .map(Statement::Expression),
        }
    }

    /// `let <ident> = <expr>[;]`
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cursor.current().literal.as_str());

        self.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        self.skip_optional_semicolon();
        Some(LetStatement { name, value })
    }

    /// `return <expr>[;]`
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        self.skip_optional_semicolon();
        Some(ReturnStatement { value })
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        self.skip_optional_semicolon();
        Some(ExpressionStatement { expression })
    }

    /// `{ <stmt>* }`, starting on `{` and ending on `}`.
    ///
    /// Statements that fail inside the block are skipped without
    /// abandoning the block.
    pub(crate) fn parse_block(&mut self) -> Option<BlockStatement> {
        let mut block = BlockStatement::default();
        self.cursor.advance();

        while !self.cursor.current_is(TokenKind::RBrace) {
            if self.cursor.current_is(TokenKind::Eof) {
                self.error(ParseError::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::Eof,
                });
                return None;
            }
            if let Some(stmt) = self.parse_statement() {
                block.statements.push(stmt);
                self.cursor.advance();
            } else {
                self.recover();
            }
        }

        Some(block)
    }

    fn skip_optional_semicolon(&mut self) {
        if self.cursor.peek_is(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }
}
