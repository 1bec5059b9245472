use super::{FunctionTable, MAX_LINE_LEN};
use crate::error;
use crate::lang::{lex, Address, Error};
use std::sync::Arc;

/// Text of a program as it is saved and loaded: one program line per
/// text line. Cloning is cheap so the terminal can hold a copy for
/// completion while the program keeps running.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<Vec<String>>,
    counter: Address,
}

impl Listing {
    pub fn new(lines: Vec<String>, counter: Address) -> Listing {
        Listing {
            source: Arc::new(lines),
            counter,
        }
    }

    pub fn clear(&mut self) {
        self.source = Arc::default();
        self.counter = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn counter(&self) -> Address {
        self.counter
    }

    pub fn line(&self, address: Address) -> Option<&str> {
        self.source.get(address).map(String::as_str)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, String> {
        self.source.iter()
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if line.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        Arc::make_mut(&mut self.source).push(line.to_string());
        Ok(())
    }

    /// Lines the function table cannot make sense of.
    pub fn errors(&self, functions: &FunctionTable) -> Vec<Error> {
        self.lines()
            .enumerate()
            .filter_map(|(address, line)| {
                functions
                    .normalize(line)
                    .err()
                    .map(|error| error.in_address(address))
            })
            .collect()
    }

    /// Numbered listing line, `0005  GOTO 0002`.
    pub fn list_line(&self, address: Address) -> Option<String> {
        self.line(address)
            .map(|line| format!("{}  {}", lex::format_address(address), line))
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
