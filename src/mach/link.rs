use crate::lang::{lex, Address};

/// How the program store learns about line contents without
/// knowing what any instruction does.
pub trait LineSyntax {
    /// Byte length of the mnemonic when `line` carries a line-address
    /// operand after it.
    fn address_operand(&self, line: &str) -> Option<usize>;
    /// The name defined by a label line.
    fn label_name<'a>(&self, line: &'a str) -> Option<&'a str>;
    fn is_stop(&self, line: &str) -> bool;
}

/// A line moved in or out of the program at an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    /// Everything at or after the address moves down one line.
    Insert(Address),
    /// Everything after the address moves up one line.
    Delete(Address),
}

impl Shift {
    pub fn apply(self, address: Address) -> Address {
        match self {
            Shift::Insert(at) if address >= at => address + 1,
            Shift::Delete(at) if address > at => address - 1,
            _ => address,
        }
    }
}

/// Rewrites the numeric address operand of `line` for `shift`.
/// `None` when the line has nothing to change. Label operands
/// never move.
pub fn relink(syntax: &dyn LineSyntax, line: &str, shift: Shift) -> Option<String> {
    let split = syntax.address_operand(line)?;
    let (mnemonic, operand) = line.split_at(split);
    let address = lex::address(operand)?;
    let moved = shift.apply(address);
    if moved == address {
        return None;
    }
    Some(format!("{} {}", mnemonic.trim_end(), lex::format_address(moved)))
}
