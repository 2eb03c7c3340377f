//! Error types for dataconv

use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::format::Format;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

impl Pos {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Compute the line/column of a byte offset within `source`.
    ///
    /// Lines and columns are 1-based; an offset past the end clamps to the end.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (index, ch) in source.char_indices() {
            if index >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// File extension not in the recognized set
    UnsupportedFormat { extension: String },
    /// Input does not conform to the grammar of its format
    Parse { format: Format },
    /// A valid tree that the target format cannot represent
    Structure,
    /// Reading or writing a file failed
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { extension } if extension.is_empty() => {
                write!(f, "unsupported format: missing file extension")
            }
            Self::UnsupportedFormat { extension } => {
                write!(f, "unsupported format: .{extension}")
            }
            Self::Parse { format } => write!(f, "invalid {format} input"),
            Self::Structure => write!(f, "unrepresentable document structure"),
            Self::Io => write!(f, "i/o failure"),
        }
    }
}

/// Main error type for dataconv
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    pos: Option<Pos>,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            pos: None,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            pos: None,
            message: message.into(),
        }
    }

    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedFormat {
            extension: extension.into(),
        })
    }

    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Parse { format }, message)
    }

    pub fn structure(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Structure, message)
    }

    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::with_message(ErrorKind::Io, format!("{}: {err}", path.display()))
    }

    /// Attach a source position
    pub fn at(mut self, pos: Pos) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn pos(&self) -> Option<Pos> {
        self.pos
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Parse { format } => write!(f, "{format} parse error")?,
            ErrorKind::Structure => write!(f, "structure error")?,
            ErrorKind::Io => write!(f, "i/o error")?,
            ErrorKind::UnsupportedFormat { .. } => return write!(f, "{}", self.message),
        }
        if let Some(pos) = &self.pos {
            write!(f, " at {pos}")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Result type alias for dataconv
pub type Result<T> = std::result::Result<T, Error>;
