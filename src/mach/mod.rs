/*!
## Rust Machine Module

This Rust module is the execution engine of the MK-52: values,
the operand stack, register memory, program memory and the
function table that drives them.

*/

pub use crate::lang::Address;

/// Bytes of program memory, line terminators included.
pub const PROGRAM_MEMORY_SIZE: usize = 64000;
pub const MAX_LINE_LEN: usize = 63;
pub const RETURN_STACK_SIZE: usize = 100;
/// X plus four backing slots.
pub const STACK_DEPTH: usize = 5;
pub const REGISTER_COUNT: usize = 15;
pub const EXTENDED_MEMORY_SIZE: usize = 4000;
pub const NFUNCTIONS: usize = 100;

mod function;
mod link;
mod listing;
mod opcode;
mod operand;
mod operation;
mod program;
mod register;
mod runtime;
mod stack;
mod val;

#[cfg(test)]
mod tests;

pub use function::Function;
pub use function::FunctionTable;
pub use link::relink;
pub use link::LineSyntax;
pub use link::Shift;
pub use listing::Listing;
pub use opcode::Opcode;
pub use opcode::Operand;
pub use operand::OperandStack;
pub use operation::AngleMode;
pub use operation::Operation;
pub use program::EditMode;
pub use program::Frame;
pub use program::Program;
pub use register::Bank;
pub use register::Registers;
pub use runtime::Event;
pub use runtime::Halt;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use val::Val;
pub use val::{
    HUGE_NEGATIVE_AS_REAL, HUGE_NEGATIVE_INTEGER, HUGE_POSITIVE_AS_REAL, HUGE_POSITIVE_INTEGER,
};
