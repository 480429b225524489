use super::{Runtime, Val};
use crate::error;
use crate::lang::{token::*, Error};

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    /// Precedence climbing. The right-hand side of an operator is read at
    /// that operator's own precedence, so equal operators group right.
    pub(super) fn expr(&mut self, min: usize) -> Result<Val> {
        let mut lhs = self.primary()?;
        loop {
            let op = match self.scanner.token() {
                Token::Operator(op) => op.clone(),
                _ => break,
            };
            let precedence = match op.precedence() {
                Some(p) if p >= min => p,
                _ => break,
            };
            self.advance()?;
            let rhs = self.expr(precedence)?;
            lhs = lhs.binary(rhs, &op)?;
        }
        Ok(lhs)
    }

    fn primary(&mut self) -> Result<Val> {
        let token = self.scanner.token().clone();
        match token {
            Token::Literal(lit) => {
                self.advance()?;
                Ok(Val::from(&lit))
            }
            Token::Ident(name) => {
                self.advance()?;
                self.variable_or_call(&name)
            }
            Token::LParen => {
                self.advance()?;
                let val = self.expr(0)?;
                self.expect(Token::RParen)?;
                Ok(val)
            }
            Token::Operator(op @ Operator::Plus)
            | Token::Operator(op @ Operator::Minus)
            | Token::Operator(op @ Operator::Not) => {
                self.advance()?;
                self.primary()?.unary(&op)
            }
            t => Err(error!(SyntaxError; format!("EXPECTED EXPRESSION GOT {}", t))),
        }
    }

    fn variable_or_call(&mut self, name: &str) -> Result<Val> {
        if let Some(val) = self.vars.get(name) {
            return Ok(val.clone());
        }
        if !self.functions.contains(name) {
            return Err(error!(UndeclaredVariable; name));
        }
        self.expect(Token::LParen)?;
        let mut args: Vec<Val> = vec![];
        if *self.scanner.token() != Token::RParen {
            loop {
                args.push(self.expr(0)?);
                match self.scanner.token() {
                    Token::Comma => self.advance()?,
                    Token::RParen => break,
                    t => {
                        return Err(error!(SyntaxError; format!("EXPECTED , OR ) GOT {}", t)));
                    }
                }
            }
        }
        self.advance()?;
        self.functions.call(name, args)
    }
}
