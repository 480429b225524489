use super::Address;

/// ## Scan position
///
/// A snapshot of where a token begins. The `index` is the token's
/// address in the lexed program and is all the scanner needs to return
/// there; the rest locates the token in the source text for diagnostics.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub index: Address,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Marker {
    pub fn new(index: Address, offset: usize, line: usize, column: usize) -> Marker {
        Marker {
            index,
            offset,
            line,
            column,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
