use super::link::LineSyntax;
use super::{Opcode, Operand, EXTENDED_MEMORY_SIZE, NFUNCTIONS, REGISTER_COUNT};
use crate::error;
use crate::lang::{lex, Error};

type Result<T> = std::result::Result<T, Error>;

/// One registered built-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Function {
    pub id: usize,
    pub opcode: Opcode,
    pub name: &'static str,
    pub io_name: Option<&'static str>,
    pub operand: Operand,
}

impl Function {
    fn new(id: usize, opcode: Opcode) -> Function {
        Function {
            id,
            opcode,
            name: opcode.name(),
            io_name: opcode.io_name(),
            operand: opcode.operand(),
        }
    }

    pub fn check_id(&self, id: usize) -> bool {
        self.id == id
    }

    /// Length of the match against `text` and the byte offset where
    /// the operand starts. Mnemonics compare ASCII case-insensitively;
    /// whole-line kinds match the full text.
    pub fn check_name(&self, text: &str) -> Option<(usize, usize)> {
        match self.opcode {
            Opcode::Empty if text.trim().is_empty() => Some((text.len(), 0)),
            Opcode::Comment if text.trim_start().starts_with('#') => Some((text.len(), 0)),
            Opcode::Number if lex::number(text).is_some() => Some((text.len(), 0)),
            op if op.is_whole_line() => None,
            _ => {
                let lead = text.len() - text.trim_start().len();
                let text = text.trim_start();
                std::iter::once(self.name)
                    .chain(self.io_name)
                    .filter_map(|name| self.mnemonic_len(text, name))
                    .max()
                    .map(|len| (len, lead + len))
            }
        }
    }

    fn mnemonic_len(&self, text: &str, name: &str) -> Option<usize> {
        let head = text.get(..name.len())?;
        if !head.eq_ignore_ascii_case(name) {
            return None;
        }
        let rest = &text[name.len()..];
        if rest.trim().is_empty() || (self.operand != Operand::None && rest.starts_with(' ')) {
            Some(name.len())
        } else {
            None
        }
    }
}

/// ## Function table
///
/// Filled once, in `Opcode::ALL` order, and never changed. The
/// position of a function is its id.

#[derive(Debug, Clone)]
pub struct FunctionTable {
    functions: Vec<Function>,
}

impl Default for FunctionTable {
    fn default() -> FunctionTable {
        FunctionTable::new()
    }
}

impl FunctionTable {
    /// Registers every built-in in `Opcode::ALL` order; the position
    /// is the id.
    pub fn new() -> FunctionTable {
        let mut functions = Vec::with_capacity(NFUNCTIONS);
        functions.extend(
            Opcode::ALL
                .iter()
                .enumerate()
                .map(|(id, opcode)| Function::new(id, *opcode)),
        );
        FunctionTable { functions }
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Function> {
        self.functions.iter()
    }

    pub fn get_function_by_id(&self, id: usize) -> Option<&Function> {
        self.functions.get(id)
    }

    pub fn get_function_by_name(&self, text: &str) -> Option<&Function> {
        self.matched(text).map(|(f, _)| f)
    }

    /// The longest matching name wins; on a tie the first registered.
    fn matched(&self, text: &str) -> Option<(&Function, usize)> {
        let mut best: Option<(&Function, usize, usize)> = None;
        for f in self.functions.iter() {
            if let Some((len, split)) = f.check_name(text) {
                if best.map_or(true, |(_, best_len, _)| len > best_len) {
                    best = Some((f, len, split));
                }
            }
        }
        best.map(|(f, _, split)| (f, split))
    }

    /// Resolves a program line to its function and trimmed operand.
    /// Whole-line kinds hand back the full trimmed line as operand.
    pub fn decode<'a>(&self, text: &'a str) -> Result<(&Function, &'a str)> {
        match self.matched(text) {
            Some((f, split)) => Ok((f, text[split..].trim())),
            None => Err(error!(NotFound; text.trim().to_string())),
        }
    }

    /// Canonical spelling of a line as it should be stored.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let (f, operand) = self.decode(text)?;
        let with = |operand: String| format!("{} {}", f.name, operand);
        match f.operand {
            Operand::None if f.opcode.is_whole_line() => Ok(operand.to_string()),
            Operand::None => Ok(f.name.to_string()),
            Operand::Address => {
                if operand.is_empty() {
                    Err(error!(SyntaxError; "MISSING ADDRESS"))
                } else if let Some(address) = lex::address(operand) {
                    Ok(with(lex::format_address(address)))
                } else {
                    Ok(with(operand.to_string()))
                }
            }
            Operand::Label => {
                if operand.is_empty() || lex::address(operand).is_some() {
                    Err(error!(SyntaxError; "BAD LABEL"))
                } else {
                    Ok(with(operand.to_string()))
                }
            }
            Operand::Register => match lex::register(operand) {
                Some(n) if n < REGISTER_COUNT => Ok(with(lex::register_name(n))),
                _ => Err(error!(AddressingError; "REGISTER")),
            },
            Operand::Extended => match lex::address(operand) {
                Some(n) if n < EXTENDED_MEMORY_SIZE => Ok(with(lex::format_address(n))),
                _ => Err(error!(AddressingError; "EXTENDED MEMORY")),
            },
        }
    }
}

impl LineSyntax for FunctionTable {
    fn address_operand(&self, line: &str) -> Option<usize> {
        match self.matched(line) {
            Some((f, split)) if f.operand == Operand::Address => Some(split),
            _ => None,
        }
    }

    fn label_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.decode(line) {
            Ok((f, name)) if f.operand == Operand::Label && !name.is_empty() => Some(name),
            _ => None,
        }
    }

    fn is_stop(&self, line: &str) -> bool {
        matches!(self.get_function_by_name(line), Some(f) if f.opcode == Opcode::Stop)
    }
}
