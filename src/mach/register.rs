use super::{Val, EXTENDED_MEMORY_SIZE, REGISTER_COUNT};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    /// Registers 0-9 and A-E.
    Fast,
    /// Extended memory cells.
    Extended,
}

/// ## Register memory
///
/// Two separate address spaces. Nothing is shared between them.

#[derive(Debug, Clone)]
pub struct Registers {
    fast: Vec<Val>,
    extended: Vec<Val>,
}

impl Default for Registers {
    fn default() -> Registers {
        Registers {
            fast: vec![Val::Empty; REGISTER_COUNT],
            extended: vec![Val::Empty; EXTENDED_MEMORY_SIZE],
        }
    }
}

impl Registers {
    pub fn new() -> Registers {
        Registers::default()
    }

    pub fn capacity(&self, bank: Bank) -> usize {
        self.bank(bank).len()
    }

    pub fn read(&self, bank: Bank, index: usize) -> Result<Val> {
        match self.bank(bank).get(index) {
            Some(val) => Ok(*val),
            None => Err(Registers::addressing_error(bank)),
        }
    }

    pub fn write(&mut self, bank: Bank, index: usize, val: Val) -> Result<()> {
        let slots = match bank {
            Bank::Fast => &mut self.fast,
            Bank::Extended => &mut self.extended,
        };
        match slots.get_mut(index) {
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(Registers::addressing_error(bank)),
        }
    }

    pub fn clear_all(&mut self) {
        self.fast.iter_mut().for_each(|v| *v = Val::Empty);
        self.extended.iter_mut().for_each(|v| *v = Val::Empty);
    }

    fn bank(&self, bank: Bank) -> &[Val] {
        match bank {
            Bank::Fast => &self.fast,
            Bank::Extended => &self.extended,
        }
    }

    fn addressing_error(bank: Bank) -> Error {
        match bank {
            Bank::Fast => error!(AddressingError; "REGISTER"),
            Bank::Extended => error!(AddressingError; "EXTENDED MEMORY"),
        }
    }
}
