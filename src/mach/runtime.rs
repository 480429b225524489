use super::{Builtin, Function, Link, Operation, Stack, Val, Var};
use crate::error;
use crate::lang::{token::*, Error, Marker, Scanner};
use std::collections::HashMap;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

type PrintFn = Box<dyn FnMut(&str) -> Result<()>>;
type InputFn = Box<dyn FnMut() -> Result<String>>;

/// ## Interpreter
///
/// Executes statements straight off the token sequence. Every jump
/// moves the scanner cursor; loops never recurse.
///
/// ```
/// use linebasic::mach::Runtime;
/// let mut runtime = Runtime::new("let a = 2\na = a * 21");
/// runtime.run().unwrap();
/// assert_eq!(runtime.var("a").map(|v| v.to_string()), Some("42".to_string()));
/// ```

pub struct Runtime {
    source: String,
    pub(super) scanner: Scanner,
    link: Link,
    linked: bool,
    pub(super) vars: Var,
    loops: HashMap<String, Marker>,
    returns: Stack<Marker>,
    pub(super) functions: Function,
    print: Option<PrintFn>,
    input: Option<InputFn>,
    statement_marker: Marker,
    exit: bool,
}

impl Runtime {
    pub fn new(source: &str) -> Runtime {
        Runtime {
            source: source.to_string(),
            scanner: Scanner::default(),
            link: Link::default(),
            linked: false,
            vars: Var::new(),
            loops: HashMap::new(),
            returns: Stack::new("TOO MANY GOSUBS"),
            functions: Function::with_builtins(),
            print: None,
            input: None,
            statement_marker: Marker::default(),
            exit: false,
        }
    }

    /// Receives the text of every `PRINT`. Without one, output is discarded.
    pub fn on_print<F>(&mut self, f: F)
    where
        F: FnMut(&str) -> Result<()> + 'static,
    {
        self.print = Some(Box::new(f));
    }

    /// Supplies one line per `INPUT` target. Without one, input is empty.
    pub fn on_input<F>(&mut self, f: F)
    where
        F: FnMut() -> Result<String> + 'static,
    {
        self.input = Some(Box::new(f));
    }

    /// Registers a callable. Replaces any function of the same name.
    pub fn add_function<F>(&mut self, name: &str, f: F)
    where
        F: FnMut(Vec<Val>) -> Result<Val> + 'static,
    {
        let function: Builtin = Box::new(f);
        self.functions.insert(name, function);
    }

    pub fn var(&self, name: &str) -> Option<&Val> {
        self.vars.get(name)
    }

    /// Source line of the last statement started.
    pub fn line_text(&self) -> String {
        self.scanner.line_text(&self.statement_marker)
    }

    pub fn run(&mut self) -> Result<()> {
        if self.linked {
            self.scanner.rewind();
        } else {
            self.scanner = Scanner::new(&self.source)?;
            self.link = Link::new(&self.scanner)?;
            self.linked = true;
        }
        self.loops.clear();
        self.returns.clear();
        self.statement_marker = self.scanner.mark();
        self.exit = false;
        debug!(tokens = self.scanner.tokens().len(), "run");
        match self.execute() {
            Ok(()) => {
                debug!(line = self.statement_marker.line, "stopped");
                Ok(())
            }
            Err(error) => {
                let error = error.in_line_number(Some(self.statement_marker.line));
                debug!(%error, "aborted");
                Err(error)
            }
        }
    }

    fn execute(&mut self) -> Result<()> {
        while !self.exit {
            self.line()?;
        }
        Ok(())
    }

    fn line(&mut self) -> Result<()> {
        while let Token::NewLine = self.scanner.token() {
            self.advance()?;
        }
        self.statement()?;
        if self.exit {
            return Ok(());
        }
        match self.scanner.token() {
            Token::NewLine | Token::Eof => Ok(()),
            t => Err(error!(SyntaxError; format!("UNEXPECTED {}", t))),
        }
    }

    fn statement(&mut self) -> Result<()> {
        let marker = self.scanner.mark();
        let keyword = self.scanner.token().clone();
        if let Token::Eof = keyword {
            self.exit = true;
            return Ok(());
        }
        self.statement_marker = marker;
        trace!("{} {}", marker, keyword);
        self.advance()?;
        match keyword {
            Token::Word(word) => self.word(word, marker)?,
            Token::Ident(name) => match self.scanner.token() {
                Token::Operator(Operator::Equal) => self.assign(&name)?,
                Token::Colon => self.r#label(&name, marker)?,
                t => {
                    return Err(error!(SyntaxError;
                        format!("EXPECTED = OR : AFTER {} GOT {}", name, t)));
                }
            },
            t => return Err(error!(SyntaxError; format!("EXPECTED STATEMENT GOT {}", t))),
        }
        self.chain()
    }

    fn word(&mut self, word: Word, marker: Marker) -> Result<()> {
        use Word::*;
        match word {
            Print => self.r#print(),
            Input => self.r#input(),
            Goto => self.r#goto(),
            Gosub => self.r#gosub(),
            Return => self.r#return(),
            If => self.r#if(marker),
            Else => self.r#else(marker),
            EndIf => Ok(()),
            For => self.r#for(marker),
            Next => self.r#next(),
            Repeat => self.r#repeat(),
            Until => self.r#until(marker),
            Let => self.r#let(),
            Assert => self.r#assert(),
            End => {
                self.exit = true;
                Ok(())
            }
            Then | To | Rem => Err(error!(SyntaxError; format!("UNEXPECTED {}", word))),
        }
    }

    /// Statements that may follow on the same line.
    fn chain(&mut self) -> Result<()> {
        if self.exit {
            return Ok(());
        }
        match self.scanner.token() {
            Token::Colon => {
                self.advance()?;
                match self.scanner.token() {
                    Token::NewLine | Token::Eof => Ok(()),
                    _ => self.statement(),
                }
            }
            Token::Word(Word::Else) | Token::Word(Word::EndIf) => self.statement(),
            _ => Ok(()),
        }
    }

    /// Body right after `THEN`, `ELSE`, `REPEAT` or a label.
    fn inline(&mut self) -> Result<()> {
        if self.exit {
            return Ok(());
        }
        match self.scanner.token() {
            Token::NewLine | Token::Eof => Ok(()),
            Token::Colon => self.chain(),
            _ => self.statement(),
        }
    }

    pub(super) fn advance(&mut self) -> Result<()> {
        self.scanner.next_token()?;
        Ok(())
    }

    fn at_statement_end(&self) -> bool {
        let token = self.scanner.token();
        token.is_end_of_statement()
            || matches!(token, Token::Word(Word::Else) | Token::Word(Word::EndIf))
    }

    pub(super) fn expect(&mut self, token: Token) -> Result<()> {
        if *self.scanner.token() == token {
            self.advance()?;
            return Ok(());
        }
        Err(error!(SyntaxError; format!("EXPECTED {} GOT {}", token, self.scanner.token())))
    }

    fn ident(&mut self) -> Result<String> {
        let name = match self.scanner.token() {
            Token::Ident(name) => name.clone(),
            t => return Err(error!(SyntaxError; format!("EXPECTED IDENTIFIER GOT {}", t))),
        };
        self.advance()?;
        Ok(name)
    }

    fn target(&self, name: &str) -> Result<Marker> {
        match self.link.label(name) {
            Some(marker) => Ok(marker),
            None => Err(error!(UndefinedLabel; name)),
        }
    }

    fn jump(&mut self, marker: &Marker) {
        debug!(from = self.statement_marker.line, to = marker.line, "jump");
        self.scanner.goto(marker);
    }

    /// A condition holds unless it compares equal to zero.
    fn condition(&mut self) -> Result<bool> {
        let val = self.expr(0)?;
        Ok(!Operation::is_zero(val)?)
    }

    fn assign(&mut self, name: &str) -> Result<()> {
        self.expect(Token::Operator(Operator::Equal))?;
        let val = self.expr(0)?;
        self.vars.store(name, val);
        Ok(())
    }

    fn r#assert(&mut self) -> Result<()> {
        if self.condition()? {
            Ok(())
        } else {
            Err(error!(AssertionFailed))
        }
    }

    fn r#else(&mut self, marker: Marker) -> Result<()> {
        match self.link.block_target(marker.index) {
            Some(addr) => self.scanner.seek(addr),
            None => return Err(error!(ElseWithoutIf)),
        }
        self.inline()
    }

    fn r#for(&mut self, marker: Marker) -> Result<()> {
        let name = self.ident()?;
        self.expect(Token::Operator(Operator::Equal))?;
        let start = self.expr(0)?;
        match self.loops.get_mut(&name) {
            Some(header) => *header = marker,
            None => {
                self.vars.store(&name, start);
                self.loops.insert(name.clone(), marker);
            }
        }
        self.expect(Token::Word(Word::To))?;
        let bound = self.expr(0)?;
        let val = self.vars.fetch(&name)?;
        if !Operation::is_zero(val.binary(bound, &Operator::Greater)?)? {
            if !self.scanner.skip_to_next(&name) {
                return Err(error!(ForWithoutNext; name));
            }
            self.loops.remove(&name);
        }
        Ok(())
    }

    fn r#gosub(&mut self) -> Result<()> {
        let name = self.ident()?;
        let target = self.target(&name)?;
        self.returns.push(self.scanner.mark())?;
        self.jump(&target);
        Ok(())
    }

    fn r#goto(&mut self) -> Result<()> {
        let name = self.ident()?;
        let target = self.target(&name)?;
        self.jump(&target);
        Ok(())
    }

    fn r#if(&mut self, marker: Marker) -> Result<()> {
        let condition = self.condition()?;
        self.expect(Token::Word(Word::Then))?;
        if !condition {
            match self.link.block_target(marker.index) {
                Some(addr) => self.scanner.seek(addr),
                None => return Err(error!(IfWithoutEndif)),
            }
        }
        self.inline()
    }

    fn r#input(&mut self) -> Result<()> {
        loop {
            let name = self.ident()?;
            let text = match self.input.as_mut() {
                Some(input) => input()?,
                None => String::new(),
            };
            self.vars.store(&name, Val::from_input(text));
            match self.scanner.token() {
                Token::Comma => {
                    self.advance()?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn r#label(&mut self, name: &str, marker: Marker) -> Result<()> {
        self.link.insert_label(name, marker);
        self.expect(Token::Colon)?;
        self.inline()
    }

    fn r#let(&mut self) -> Result<()> {
        let name = self.ident()?;
        self.assign(&name)
    }

    fn r#next(&mut self) -> Result<()> {
        let name = self.ident()?;
        let header = match self.loops.get(&name) {
            Some(marker) => *marker,
            None => return Err(error!(NextWithoutFor; name)),
        };
        let val = self.vars.fetch(&name)?;
        self.vars
            .store(&name, val.binary(Val::from(1.0), &Operator::Plus)?);
        self.scanner.goto(&header);
        Ok(())
    }

    fn r#print(&mut self) -> Result<()> {
        let val = if self.at_statement_end() {
            Val::from("")
        } else {
            self.expr(0)?
        };
        if let Some(print) = self.print.as_mut() {
            print(&val.to_string())?;
        }
        Ok(())
    }

    fn r#repeat(&mut self) -> Result<()> {
        self.inline()
    }

    fn r#return(&mut self) -> Result<()> {
        match self.returns.pop() {
            Some(marker) => {
                debug!(to = marker.line, "return");
                self.scanner.seek(marker.index);
                Ok(())
            }
            None => Err(error!(ReturnWithoutGosub)),
        }
    }

    fn r#until(&mut self, marker: Marker) -> Result<()> {
        let body = match self.link.repeat_target(marker.index) {
            Some(body) => body,
            None => return Err(error!(UntilWithoutRepeat)),
        };
        if !self.condition()? {
            self.scanner.goto(&body);
        }
        Ok(())
    }
}
