use super::Address;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn is_direct(&self) -> bool {
        self.address.is_none()
    }

    /// Tags the error with the program line that raised it.
    /// An address already present is kept.
    pub fn in_address(self, address: Address) -> Error {
        Error {
            address: self.address.or(Some(address)),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    StackUnderflow = 3,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    NotFound = 8,
    AddressingError = 9,
    DivisionByZero = 11,
    TypeMismatch = 13,
    StackOverflow = 14,
    LineBufferOverflow = 23,
    InternalError = 51,
    FileNotFound = 53,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "SYNTAX ERROR",
            StackUnderflow => "STACK UNDERFLOW",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            NotFound => "NOT FOUND",
            AddressingError => "ADDRESSING ERROR",
            DivisionByZero => "DIVISION BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            StackOverflow => "STACK OVERFLOW",
            LineBufferOverflow => "LINE BUFFER OVERFLOW",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code.as_str())?;
        if let Some(address) = self.address {
            write!(f, " IN {:04}", address)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
