use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<std::string::String, Token> = Word::ALL
        .iter()
        .map(|w| Token::Word(w.clone()))
        .chain(
            Operator::ALL
                .iter()
                .filter(|op| op.is_reserved_word())
                .map(|op| Token::Operator(op.clone())),
        )
        .map(|t| (t.to_string(), t))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(String),
    NewLine,
    Colon,
    Semicolon,
    Comma,
    LParen,
    RParen,
    Eof,
}

impl Token {
    /// Looks up a keyword or word operator. `s` must already be upper case.
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    /// Tokens that close a statement without belonging to it.
    pub fn is_end_of_statement(&self) -> bool {
        matches!(self, Token::NewLine | Token::Eof | Token::Colon)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            NewLine => write!(f, "NEW LINE"),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
            Comma => write!(f, ","),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Eof => write!(f, "END OF FILE"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Assert,
    Else,
    End,
    EndIf,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Rem,
    Repeat,
    Return,
    Then,
    To,
    Until,
}

impl Word {
    const ALL: [Word; 18] = [
        Word::Assert,
        Word::Else,
        Word::End,
        Word::EndIf,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Let,
        Word::Next,
        Word::Print,
        Word::Rem,
        Word::Repeat,
        Word::Return,
        Word::Then,
        Word::To,
        Word::Until,
    ];
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Assert => write!(f, "ASSERT"),
            Else => write!(f, "ELSE"),
            End => write!(f, "END"),
            EndIf => write!(f, "ENDIF"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Next => write!(f, "NEXT"),
            Print => write!(f, "PRINT"),
            Rem => write!(f, "REM"),
            Repeat => write!(f, "REPEAT"),
            Return => write!(f, "RETURN"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
            Until => write!(f, "UNTIL"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Not,
    And,
    Or,
}

impl Operator {
    const ALL: [Operator; 14] = [
        Operator::Caret,
        Operator::Multiply,
        Operator::Divide,
        Operator::Plus,
        Operator::Minus,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Less,
        Operator::LessEqual,
        Operator::Greater,
        Operator::GreaterEqual,
        Operator::Not,
        Operator::And,
        Operator::Or,
    ];

    pub fn is_reserved_word(&self) -> bool {
        use Operator::*;
        match self {
            Caret | Multiply | Divide | Plus | Minus | Equal | NotEqual | Less | LessEqual
            | Greater | GreaterEqual => false,
            Not | And | Or => true,
        }
    }

    /// Binding strength for precedence climbing. `NOT` is prefix only.
    pub fn precedence(&self) -> Option<usize> {
        use Operator::*;
        match self {
            Or | And => Some(0),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => Some(1),
            Plus | Minus => Some(2),
            Multiply | Divide => Some(3),
            Caret => Some(4),
            Not => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Not => write!(f, "NOT"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
        }
    }
}
