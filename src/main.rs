//! # MK-52
//!
//! The MK-52 programmable calculator at a terminal.
//!

fn main() {
    mk52::term::main()
}
