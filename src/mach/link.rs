use crate::error;
use crate::lang::{token::*, Address, Error, Marker, Scanner};
use std::collections::HashMap;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Jump targets
///
/// Built once from the token sequence before anything executes:
/// the label table, for every `IF` and `ELSE` the address where
/// execution resumes when its branch is skipped, and for every `UNTIL`
/// the body of its `REPEAT`.

#[derive(Debug, Default)]
pub struct Link {
    labels: HashMap<String, Marker>,
    blocks: HashMap<Address, Address>,
    repeats: HashMap<Address, Marker>,
}

struct OpenIf {
    addr: Address,
    first_else: Option<Address>,
    elses: Vec<Address>,
}

impl Link {
    pub fn new(scanner: &Scanner) -> Result<Link> {
        let mut link = Link::default();
        link.collect_labels(scanner);
        link.collect_blocks(scanner.tokens());
        link.collect_repeats(scanner);
        link.check_targets(scanner)?;
        debug!(
            labels = link.labels.len(),
            blocks = link.blocks.len(),
            repeats = link.repeats.len(),
            "linked program"
        );
        Ok(link)
    }

    pub fn label(&self, name: &str) -> Option<Marker> {
        self.labels.get(name).copied()
    }

    /// First declaration of a name wins.
    pub fn insert_label(&mut self, name: &str, marker: Marker) {
        if !self.labels.contains_key(name) {
            self.labels.insert(name.to_string(), marker);
        }
    }

    /// Where a skipped `IF` or `ELSE` branch resumes.
    pub fn block_target(&self, addr: Address) -> Option<Address> {
        self.blocks.get(&addr).copied()
    }

    /// Where the block closed by an `UNTIL` starts over.
    pub fn repeat_target(&self, until_addr: Address) -> Option<Marker> {
        self.repeats.get(&until_addr).copied()
    }

    /// Anywhere the interpreter begins a statement.
    fn statement_start(tokens: &[Token], index: Address) -> bool {
        if index == 0 {
            return true;
        }
        matches!(
            tokens[index - 1],
            Token::NewLine
                | Token::Colon
                | Token::Word(Word::Then)
                | Token::Word(Word::Else)
                | Token::Word(Word::EndIf)
                | Token::Word(Word::Repeat)
        )
    }

    fn collect_labels(&mut self, scanner: &Scanner) {
        let tokens = scanner.tokens();
        for (index, tt) in tokens.windows(2).enumerate() {
            if let (Token::Ident(name), Token::Colon) = (&tt[0], &tt[1]) {
                if Link::statement_start(tokens, index) {
                    self.insert_label(name, scanner.marker_at(index));
                }
            }
        }
    }

    fn collect_blocks(&mut self, tokens: &[Token]) {
        let mut open: Vec<OpenIf> = vec![];
        for (index, token) in tokens.iter().enumerate() {
            match token {
                Token::Word(Word::If) => open.push(OpenIf {
                    addr: index,
                    first_else: None,
                    elses: vec![],
                }),
                Token::Word(Word::Else) => {
                    if let Some(block) = open.last_mut() {
                        if block.first_else.is_none() {
                            block.first_else = Some(index);
                        }
                        block.elses.push(index);
                    }
                }
                Token::Word(Word::EndIf) => {
                    if let Some(block) = open.pop() {
                        let after = index + 1;
                        let target = match block.first_else {
                            Some(else_addr) => else_addr + 1,
                            None => after,
                        };
                        self.blocks.insert(block.addr, target);
                        for else_addr in block.elses {
                            self.blocks.insert(else_addr, after);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn collect_repeats(&mut self, scanner: &Scanner) {
        let tokens = scanner.tokens();
        let mut open: Vec<Address> = vec![];
        for (index, token) in tokens.iter().enumerate() {
            match token {
                Token::Word(Word::Repeat) => open.push(index),
                Token::Word(Word::Until) => {
                    if let Some(repeat_addr) = open.pop() {
                        let mut body = repeat_addr + 1;
                        if let Some(Token::Colon) = tokens.get(body) {
                            body += 1;
                        }
                        self.repeats.insert(index, scanner.marker_at(body));
                    }
                }
                _ => {}
            }
        }
    }

    fn check_targets(&self, scanner: &Scanner) -> Result<()> {
        for (index, tt) in scanner.tokens().windows(2).enumerate() {
            if let (Token::Word(Word::Goto), Token::Ident(name))
            | (Token::Word(Word::Gosub), Token::Ident(name)) = (&tt[0], &tt[1])
            {
                if !self.labels.contains_key(name) {
                    let line = scanner.marker_at(index).line;
                    return Err(error!(UndefinedLabel, Some(line); name.as_str()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn linked(s: &str) -> (Scanner, Result<Link>) {
        let scanner = Scanner::new(s).unwrap();
        let link = Link::new(&scanner);
        (scanner, link)
    }

    #[test]
    fn test_labels_at_statement_start() {
        let (_, link) = linked("top:\nprint a: mid:\nx = 1\nlater:");
        let link = link.unwrap();
        assert_eq!(link.label("top").map(|m| m.line), Some(1));
        assert_eq!(link.label("mid").map(|m| m.line), Some(2));
        assert_eq!(link.label("later").map(|m| m.line), Some(4));
        assert_eq!(link.label("a"), None);
    }

    #[test]
    fn test_labels_after_block_words() {
        let (_, link) = linked("if 1 then a: x = 1 else b: x = 2 endif c:\nrepeat d: x = 3");
        let link = link.unwrap();
        for name in &["a", "b", "c", "d"] {
            assert!(link.label(name).is_some(), "{}", name);
        }
        let (_, link) = linked("x = a: y = 1");
        assert_eq!(link.unwrap().label("a"), None);
    }

    #[test]
    fn test_repeat_pairs() {
        // 0:REPEAT 1:: 2:REPEAT 3:NL 4:UNTIL 5:1 6:NL 7:UNTIL 8:1 9:UNTIL 10:0
        let (_, link) = linked("repeat: repeat\nuntil 1\nuntil 1 until 0");
        let link = link.unwrap();
        assert_eq!(link.repeat_target(4).map(|m| m.index), Some(3));
        assert_eq!(link.repeat_target(7).map(|m| m.index), Some(2));
        assert_eq!(link.repeat_target(9), None);
    }

    #[test]
    fn test_first_label_wins() {
        let (_, link) = linked("dup:\ndup:");
        assert_eq!(link.unwrap().label("dup").map(|m| m.line), Some(1));
    }

    #[test]
    fn test_nested_blocks() {
        // 0:IF 1:1 2:THEN 3:IF 4:0 5:THEN 6:ELSE 7:ENDIF 8:ELSE 9:ENDIF
        let (_, link) = linked("if 1 then if 0 then else endif else endif");
        let link = link.unwrap();
        assert_eq!(link.block_target(0), Some(9));
        assert_eq!(link.block_target(3), Some(7));
        assert_eq!(link.block_target(6), Some(8));
        assert_eq!(link.block_target(8), Some(10));
        assert_eq!(link.block_target(1), None);
    }

    #[test]
    fn test_unmatched_if() {
        let (_, link) = linked("if 1 then\nprint 1");
        assert_eq!(link.unwrap().block_target(0), None);
    }

    #[test]
    fn test_undefined_label() {
        let (_, link) = linked("print 1\ngoto nowhere\nsomewhere:");
        let e = link.unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedLabel);
        assert_eq!(e.line_number(), Some(2));
        let (_, link) = linked("gosub sub\nend\nsub:\nreturn");
        assert!(link.is_ok());
    }
}
