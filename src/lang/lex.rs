use super::{token::*, Error, Marker};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Tokenize a whole program. The result always ends with `Token::Eof`
/// and every marker's `index` is its position in the returned vector.
pub fn lex(s: &str) -> Result<Vec<(Token, Marker)>> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_alphabetic()
}

fn is_basic_alphanumeric(c: char) -> bool {
    c.is_alphanumeric()
}

trait Tokenizers {
    fn peek(&mut self) -> Option<char>;
    fn bump(&mut self) -> Option<char>;
    fn line(&self) -> usize;

    fn whitespace(&mut self) {
        while let Some(pk) = self.peek() {
            if !is_basic_whitespace(pk) {
                break;
            }
            self.bump();
        }
    }

    fn remark(&mut self) {
        while let Some(pk) = self.peek() {
            if pk == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn number(&mut self) -> Result<Token> {
        let line = self.line();
        let mut s = String::new();
        while let Some(pk) = self.peek() {
            if !is_basic_digit(pk) && pk != '.' {
                break;
            }
            s.push(pk);
            self.bump();
        }
        match s.parse::<f64>() {
            Ok(n) => Ok(Token::Literal(Literal::Number(n))),
            Err(_) => Err(error!(SyntaxError, Some(line); format!("MALFORMED NUMBER {}", s))),
        }
    }

    fn string(&mut self) -> Result<Token> {
        let line = self.line();
        let mut s = String::new();
        self.bump();
        loop {
            let ch = match self.bump() {
                Some(ch) => ch,
                None => return Err(error!(SyntaxError, Some(line); "UNTERMINATED STRING")),
            };
            match ch {
                '"' => return Ok(Token::Literal(Literal::String(s))),
                '\\' => match self.bump().map(|c| c.to_ascii_lowercase()) {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('\\') => s.push('\\'),
                    Some('"') => s.push('"'),
                    Some(other) => {
                        let msg = format!("INVALID ESCAPE \\{}", other);
                        return Err(error!(SyntaxError, Some(self.line()); msg));
                    }
                    None => return Err(error!(SyntaxError, Some(line); "UNTERMINATED STRING")),
                },
                _ => s.push(ch),
            }
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.peek() {
            if !is_basic_alphanumeric(pk) {
                break;
            }
            s.push(pk);
            self.bump();
        }
        match Token::from_string(&s.to_uppercase()) {
            Some(token) => token,
            None => Token::Ident(s),
        }
    }

    fn minutia(&mut self) -> Result<Token> {
        let line = self.line();
        let ch = match self.bump() {
            Some(ch) => ch,
            None => return Ok(Token::Eof),
        };
        let token = match ch {
            '\n' => Token::NewLine,
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            ',' => Token::Comma,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '=' => Token::Operator(Operator::Equal),
            '+' => Token::Operator(Operator::Plus),
            '-' => Token::Operator(Operator::Minus),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '^' => Token::Operator(Operator::Caret),
            '<' => match self.peek() {
                Some('>') => {
                    self.bump();
                    Token::Operator(Operator::NotEqual)
                }
                Some('=') => {
                    self.bump();
                    Token::Operator(Operator::LessEqual)
                }
                _ => Token::Operator(Operator::Less),
            },
            '>' => match self.peek() {
                Some('=') => {
                    self.bump();
                    Token::Operator(Operator::GreaterEqual)
                }
                _ => Token::Operator(Operator::Greater),
            },
            _ => {
                let msg = format!("UNEXPECTED CHARACTER {:?}", ch);
                return Err(error!(SyntaxError, Some(line); msg));
            }
        };
        Ok(token)
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    len: usize,
    line: usize,
    column: usize,
}

impl<'a> Tokenizers for BasicLexer<'a> {
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, ch) = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn line(&self) -> usize {
        self.line
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Result<Vec<(Token, Marker)>> {
        let mut lexer = BasicLexer {
            chars: s.char_indices().peekable(),
            len: s.len(),
            line: 1,
            column: 1,
        };
        let mut tokens: Vec<(Token, Marker)> = vec![];
        loop {
            let (token, mut marker) = lexer.next_token()?;
            marker.index = tokens.len();
            let eof = token == Token::Eof;
            tokens.push((token, marker));
            if eof {
                return Ok(tokens);
            }
        }
    }

    fn marker(&mut self) -> Marker {
        let offset = match self.chars.peek() {
            Some(&(offset, _)) => offset,
            None => self.len,
        };
        Marker::new(0, offset, self.line, self.column)
    }

    fn next_token(&mut self) -> Result<(Token, Marker)> {
        loop {
            self.whitespace();
            let marker = self.marker();
            let pk = match self.peek() {
                Some(pk) => pk,
                None => return Ok((Token::Eof, marker)),
            };
            let token = if is_basic_digit(pk) {
                self.number()?
            } else if is_basic_alphabetic(pk) {
                self.alphabetic()
            } else if pk == '"' {
                self.string()?
            } else if pk == '\'' {
                Token::Word(Word::Rem)
            } else {
                self.minutia()?
            };
            if let Token::Word(Word::Rem) = token {
                self.remark();
                continue;
            }
            return Ok((token, marker));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<Token> {
        lex(s).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_markers() {
        let v = lex("print 1\n  x").unwrap();
        let m: Vec<Marker> = v.iter().map(|(_, m)| *m).collect();
        assert_eq!(m[0], Marker::new(0, 0, 1, 1));
        assert_eq!(m[1], Marker::new(1, 6, 1, 7));
        assert_eq!(m[2], Marker::new(2, 7, 1, 8));
        assert_eq!(m[3], Marker::new(3, 10, 2, 3));
        assert_eq!(m[4], Marker::new(4, 11, 2, 4));
        assert_eq!(v[4].0, Token::Eof);
    }

    #[test]
    fn test_remark_keeps_newline() {
        assert_eq!(
            tokens("a ' note\nREM more\n"),
            vec![
                Token::Ident("a".into()),
                Token::NewLine,
                Token::NewLine,
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_remark_prefix_is_ident() {
        assert_eq!(
            tokens("remark"),
            vec![Token::Ident("remark".into()), Token::Eof]
        );
    }
}
