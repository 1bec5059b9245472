/*!
# Rust Language Module

This Rust module holds the pieces of the MK-52 program language that
do not depend on machine state: errors and operand scanning.

*/

pub type Address = usize;

#[macro_use]
mod error;
pub mod lex;

pub use error::Error;
pub use error::ErrorCode;
