use std::{fmt, io::BufRead, str::FromStr};

#[derive(Debug)]
pub enum ScanError {
    /// The stream ended before the requested token.
    Exhausted,
    /// A token did not parse as the requested type.
    Malformed { token: String },
    Io(std::io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Exhausted => write!(f, "unexpected end of input"),
            ScanError::Malformed { token } => write!(f, "malformed token {token:?}"),
            ScanError::Io(error) => write!(f, "failed to read input: {error}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(error: std::io::Error) -> Self {
        ScanError::Io(error)
    }
}

/// Whitespace token reader, refilled one line at a time.
pub struct Scanner<R> {
    reader: R,
    buffer: Vec<String>,
    eof: bool,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            eof: false,
        }
    }

    /// Returns whether another token is available, reading further lines as needed.
    pub fn has_more(&mut self) -> Result<bool, ScanError> {
        while self.buffer.is_empty() {
            if self.eof {
                return Ok(false);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                self.eof = true;
                return Ok(false);
            }
            self.buffer = line.split_whitespace().rev().map(String::from).collect();
        }
        Ok(true)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next<T: FromStr>(&mut self) -> Result<T, ScanError> {
        if !self.has_more()? {
            return Err(ScanError::Exhausted);
        }
        let token = self.buffer.pop().ok_or(ScanError::Exhausted)?;
        token
            .parse()
            .map_err(|_| ScanError::Malformed { token })
    }
}
