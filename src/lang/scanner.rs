use super::{lex, token::*, Address, Error, Marker};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

static NEW_LINE: Token = Token::NewLine;

/// ## Token cursor
///
/// The program is lexed once into an indexed sequence. Every jump in the
/// language is a move of the one cursor kept here, so saving and restoring
/// a position is copying a `Marker`.

#[derive(Debug)]
pub struct Scanner {
    source: String,
    tokens: Vec<Token>,
    markers: Vec<Marker>,
    cursor: Address,
    newline: bool,
}

impl Default for Scanner {
    fn default() -> Scanner {
        Scanner {
            source: String::new(),
            tokens: vec![Token::Eof],
            markers: vec![Marker::default()],
            cursor: 0,
            newline: false,
        }
    }
}

impl Scanner {
    pub fn new(source: &str) -> Result<Scanner> {
        let (tokens, markers) = lex(source)?.into_iter().unzip();
        Ok(Scanner {
            source: source.to_string(),
            tokens,
            markers,
            cursor: 0,
            newline: false,
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self) -> &Token {
        if self.newline {
            &NEW_LINE
        } else {
            &self.tokens[self.cursor]
        }
    }

    pub fn next_token(&mut self) -> Result<&Token> {
        if self.newline {
            self.newline = false;
        } else if let Token::Eof = self.tokens[self.cursor] {
            return Err(error!(UnexpectedEof));
        } else {
            self.cursor += 1;
        }
        Ok(&self.tokens[self.cursor])
    }

    pub fn mark(&self) -> Marker {
        self.markers[self.cursor]
    }

    pub fn marker_at(&self, index: Address) -> Marker {
        match self.markers.get(index) {
            Some(marker) => *marker,
            None => self.markers[self.markers.len() - 1],
        }
    }

    /// Jump to a saved position. The current token reads as a newline
    /// until the next advance, so the jump lands on a statement boundary.
    pub fn goto(&mut self, marker: &Marker) {
        self.cursor = marker.index.min(self.tokens.len() - 1);
        self.newline = true;
    }

    /// Continue inline from an address.
    pub fn seek(&mut self, index: Address) {
        self.cursor = index.min(self.tokens.len() - 1);
        self.newline = false;
    }

    pub fn rewind(&mut self) {
        self.seek(0);
    }

    /// Move just past the next `NEXT <name>`. Loops on other variables
    /// are passed through, not counted.
    pub fn skip_to_next(&mut self, name: &str) -> bool {
        let mut index = self.cursor;
        while index + 1 < self.tokens.len() {
            if let (Token::Word(Word::Next), Token::Ident(ident)) =
                (&self.tokens[index], &self.tokens[index + 1])
            {
                if ident == name {
                    self.seek(index + 2);
                    return true;
                }
            }
            index += 1;
        }
        false
    }

    /// The source line containing `marker`, without its line terminator.
    pub fn line_text(&self, marker: &Marker) -> String {
        let offset = marker.offset.min(self.source.len());
        let start = match self.source[..offset].rfind('\n') {
            Some(pos) => pos + 1,
            None => 0,
        };
        let end = match self.source[offset..].find('\n') {
            Some(pos) => offset + pos,
            None => self.source.len(),
        };
        self.source[start..end].trim_end_matches('\r').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_twice() {
        let mut s = Scanner::new("x").unwrap();
        assert_eq!(s.token(), &Token::Ident("x".into()));
        assert_eq!(s.next_token().unwrap(), &Token::Eof);
        assert!(s.next_token().is_err());
    }

    #[test]
    fn test_goto_backwards() {
        let mut s = Scanner::new("a b\nc").unwrap();
        let start = s.mark();
        s.next_token().unwrap();
        s.next_token().unwrap();
        s.next_token().unwrap();
        assert_eq!(s.token(), &Token::Ident("c".into()));
        s.goto(&start);
        assert_eq!(s.token(), &Token::NewLine);
        assert_eq!(s.next_token().unwrap(), &Token::Ident("a".into()));
        assert_eq!(s.next_token().unwrap(), &Token::Ident("b".into()));
    }

    #[test]
    fn test_skip_to_next() {
        let mut s = Scanner::new("next j\nnext i\nend").unwrap();
        assert!(s.skip_to_next("i"));
        assert_eq!(s.token(), &Token::NewLine);
        assert_eq!(s.mark().line, 2);
        assert!(!s.skip_to_next("k"));
    }

    #[test]
    fn test_line_text() {
        let mut s = Scanner::new("print 1\r\n  let x = 2\nend").unwrap();
        for _ in 0..5 {
            s.next_token().unwrap();
        }
        let here = s.mark();
        assert_eq!(s.token(), &Token::Operator(Operator::Equal));
        assert_eq!(s.line_text(&here), "  let x = 2");
        assert_eq!(s.line_text(&s.marker_at(0)), "print 1");
        assert_eq!(s.token(), &Token::Operator(Operator::Equal));
        let eof = s.marker_at(usize::MAX);
        assert_eq!(s.line_text(&eof), "end");
    }
}
