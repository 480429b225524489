use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Tags the error with a source line unless it already carries one.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    IllegalFunctionCall = 5,
    OutOfMemory = 7,
    UndefinedLabel = 8,
    TypeMismatch = 13,
    UndeclaredVariable = 18,
    ForWithoutNext = 26,
    IfWithoutEndif = 27,
    ElseWithoutIf = 28,
    UntilWithoutRepeat = 30,
    AssertionFailed = 31,
    InternalError = 51,
    UnexpectedEof = 62,
    Break = 99,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLabel => "UNDEFINED LABEL",
            TypeMismatch => "TYPE MISMATCH",
            UndeclaredVariable => "UNDECLARED VARIABLE",
            ForWithoutNext => "FOR WITHOUT NEXT",
            IfWithoutEndif => "IF WITHOUT ENDIF",
            ElseWithoutIf => "ELSE WITHOUT IF",
            UntilWithoutRepeat => "UNTIL WITHOUT REPEAT",
            AssertionFailed => "ASSERTION FAILED",
            InternalError => "INTERNAL ERROR",
            UnexpectedEof => "UNEXPECTED END OF FILE",
            Break => "BREAK",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(error!(AssertionFailed, Some(3)).to_string(), "ASSERTION FAILED IN 3");
        assert_eq!(
            error!(TypeMismatch, Some(12); "NUMBERS REQUIRED").to_string(),
            "TYPE MISMATCH IN 12; NUMBERS REQUIRED"
        );
        assert_eq!(
            error!(UndefinedLabel; "done").to_string(),
            "UNDEFINED LABEL; done"
        );
    }

    #[test]
    fn test_line_number_is_kept() {
        let e = error!(SyntaxError, Some(4)).in_line_number(Some(9));
        assert_eq!(e.line_number(), Some(4));
        let e = error!(SyntaxError).in_line_number(Some(9));
        assert_eq!(e.line_number(), Some(9));
        assert_eq!(e.code(), ErrorCode::SyntaxError);
    }
}
