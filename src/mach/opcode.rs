/// ## Built-in operations
///
/// One variant per function on the keyboard. The order of `ALL` is
/// the registration order of the function table and therefore the
/// numeric id of every function; saved programs depend on it.
///
/// Every operation works on the operand stack. For example the line
/// sequence `2`, `3`, `+` pushes 2, pushes 3 then replaces both with 5.
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // *** Whole-line kinds
    /// Blank line. Does nothing.
    Empty,
    /// Line starting with `#`. Does nothing.
    Comment,
    /// Number literal. Pushes its value.
    Number,

    // *** Branch control
    Stop,
    Goto,
    Gosub,
    Return,
    IfNegative,
    IfZero,
    IfNotNegative,
    IfNotZero,
    /// Decrement register 0 and branch while it stays positive.
    Loop0,
    Loop1,
    Loop2,
    Loop3,
    /// Jump target. Does nothing when executed.
    Label,

    // *** Stack manipulation
    Enter,
    Exchange,
    RotateDown,
    RotateUp,
    LastX,
    ClearX,

    // *** Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Reciprocal,
    Square,
    Sqrt,
    Pow,
    Exp10,
    Exp,
    Lg,
    Ln,
    Sin,
    Cos,
    Tg,
    Arcsin,
    Arccos,
    Arctg,
    Pi,
    Abs,
    Sign,
    IntPart,
    FracPart,
    Max,
    Mod,
    Rand,

    // *** Memory
    RecallRegister,
    StoreRegister,
    RecallExtended,
    StoreExtended,

    // *** Modes
    Degrees,
    Radians,
    Grads,
}

/// What follows the mnemonic on a program line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    /// Line address or label name. Renumbered when lines move.
    Address,
    /// Label definition.
    Label,
    /// Register `0`-`9`, `A`-`E`.
    Register,
    /// Extended memory cell.
    Extended,
}

impl Opcode {
    pub const ALL: [Opcode; 56] = {
        use Opcode::*;
        [
            Empty,
            Comment,
            Number,
            Stop,
            Goto,
            Gosub,
            Return,
            IfNegative,
            IfZero,
            IfNotNegative,
            IfNotZero,
            Loop0,
            Loop1,
            Loop2,
            Loop3,
            Label,
            Enter,
            Exchange,
            RotateDown,
            RotateUp,
            LastX,
            ClearX,
            Add,
            Sub,
            Mul,
            Div,
            Neg,
            Reciprocal,
            Square,
            Sqrt,
            Pow,
            Exp10,
            Exp,
            Lg,
            Ln,
            Sin,
            Cos,
            Tg,
            Arcsin,
            Arccos,
            Arctg,
            Pi,
            Abs,
            Sign,
            IntPart,
            FracPart,
            Max,
            Mod,
            Rand,
            RecallRegister,
            StoreRegister,
            RecallExtended,
            StoreExtended,
            Degrees,
            Radians,
            Grads,
        ]
    };

    pub fn name(self) -> &'static str {
        use Opcode::*;
        match self {
            Empty => "",
            Comment => "#",
            Number => "NUMBER",
            Stop => "STOP",
            Goto => "GOTO",
            Gosub => "GOSUB",
            Return => "RETURN",
            IfNegative => "IF X<0 GOTO",
            IfZero => "IF X=0 GOTO",
            IfNotNegative => "IF X>=0 GOTO",
            IfNotZero => "IF X!=0 GOTO",
            Loop0 => "L0",
            Loop1 => "L1",
            Loop2 => "L2",
            Loop3 => "L3",
            Label => "LBL",
            Enter => "ENTER",
            Exchange => "X<->Y",
            RotateDown => "ROT",
            RotateUp => "ROT UP",
            LastX => "BX",
            ClearX => "CX",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Neg => "NEG",
            Reciprocal => "1/X",
            Square => "X^2",
            Sqrt => "SQRT",
            Pow => "Y^X",
            Exp10 => "10^X",
            Exp => "E^X",
            Lg => "LG",
            Ln => "LN",
            Sin => "SIN",
            Cos => "COS",
            Tg => "TG",
            Arcsin => "ARCSIN",
            Arccos => "ARCCOS",
            Arctg => "ARCTG",
            Pi => "PI",
            Abs => "ABS",
            Sign => "SIGN",
            IntPart => "[X]",
            FracPart => "{X}",
            Max => "MAX",
            Mod => "MOD",
            Rand => "RAND",
            RecallRegister => "M->X",
            StoreRegister => "X->M",
            RecallExtended => "EM->X",
            StoreExtended => "X->EM",
            Degrees => "DEG",
            Radians => "RAD",
            Grads => "GRD",
        }
    }

    /// Printable form on the calculator screen, when it differs.
    pub fn io_name(self) -> Option<&'static str> {
        use Opcode::*;
        match self {
            IfNotNegative => Some("IF X≥0 GOTO"),
            IfNotZero => Some("IF X≠0 GOTO"),
            Enter => Some("↑"),
            Exchange => Some("X↔Y"),
            Neg => Some("/-/"),
            Square => Some("X²"),
            Sqrt => Some("√"),
            Pi => Some("π"),
            RecallRegister => Some("M→X"),
            StoreRegister => Some("X→M"),
            RecallExtended => Some("EM→X"),
            StoreExtended => Some("X→EM"),
            _ => None,
        }
    }

    pub fn operand(self) -> Operand {
        use Opcode::*;
        match self {
            Goto | Gosub | IfNegative | IfZero | IfNotNegative | IfNotZero | Loop0 | Loop1
            | Loop2 | Loop3 => Operand::Address,
            Label => Operand::Label,
            RecallRegister | StoreRegister => Operand::Register,
            RecallExtended | StoreExtended => Operand::Extended,
            _ => Operand::None,
        }
    }

    /// Whole-line kinds are recognized by content, not by mnemonic.
    pub fn is_whole_line(self) -> bool {
        matches!(self, Opcode::Empty | Opcode::Comment | Opcode::Number)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
