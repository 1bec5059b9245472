//! # MK-52
//!
//! The execution engine of the MK-52 programmable RPN calculator,
//! with a terminal to drive it.
//!
//! Begin by opening a terminal and running the executable. If you get
//! the following, you have achieved success.
//! ```text
//! 0000 OVR DEG> █
//! ```
//!
//! A program file can be named on the command line: `mk52 program.txt`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

pub mod lang;
pub mod mach;
pub mod term;
