use super::{
    AngleMode, Bank, FunctionTable, Listing, Opcode, OperandStack, Operation, Program, Registers,
    Val,
};
use crate::error;
use crate::lang::{lex, Address, Error};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Running,
    Halted,
}

/// Why the machine is no longer running.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    /// A STOP line. The counter rests on it.
    Stop(Address),
    /// Ran off the last line.
    End,
    /// Interrupted from outside.
    Break(Address),
    Error(Error),
}

impl std::fmt::Display for Halt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Halt::Stop(address) => write!(f, "STOP IN {}", lex::format_address(*address)),
            Halt::End => write!(f, "END"),
            Halt::Break(address) => write!(f, "BREAK IN {}", lex::format_address(*address)),
            Halt::Error(error) => write!(f, "{}", error),
        }
    }
}

/// Result of a call to `execute`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Not running; waiting for a command.
    Stopped,
    /// Cycle budget used up, call again.
    Running,
    /// The line about to run, while tracing.
    Trace(String),
    /// The program just halted.
    Halted(Halt),
}

/// What a function did to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Next,
    Jump,
}

/// ## Dispatch engine
///
/// Owns every part of the machine and runs one program line per step.
/// `execute` batches steps for a driver that polls the keyboard in
/// between.
///
/// ```text
/// Idle --run--> Running --STOP, end, error, break--> Halted --reset--> Idle
/// ```
///
/// An error never leaves the machine half changed: operands are only
/// consumed after the result is known.

pub struct Runtime {
    functions: Rc<FunctionTable>,
    stack: OperandStack,
    registers: Registers,
    program: Program,
    angle: AngleMode,
    rng: StdRng,
    state: State,
    halt: Option<Halt>,
    stop: bool,
    tron: bool,
    traced: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        let functions = Rc::new(FunctionTable::new());
        Runtime {
            program: Program::new(functions.clone()),
            functions,
            stack: OperandStack::default(),
            registers: Registers::default(),
            angle: AngleMode::default(),
            rng: StdRng::from_entropy(),
            state: State::Idle,
            halt: None,
            stop: false,
            tron: false,
            traced: false,
        }
    }
}

impl Runtime {
    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Editing access. The driver only edits while nothing runs.
    pub fn program_mut(&mut self) -> &mut Program {
        &mut self.program
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn halt(&self) -> Option<&Halt> {
        self.halt.as_ref()
    }

    pub fn last_error(&self) -> Option<&Error> {
        match &self.halt {
            Some(Halt::Error(error)) => Some(error),
            _ => None,
        }
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle
    }

    pub fn set_angle_mode(&mut self, angle: AngleMode) {
        self.angle = angle;
    }

    pub fn set_trace(&mut self, tron: bool) {
        self.tron = tron;
        self.traced = false;
    }

    pub fn is_tracing(&self) -> bool {
        self.tron
    }

    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn get_listing(&self) -> Listing {
        self.program.listing()
    }

    pub fn set_listing(&mut self, listing: &Listing) -> Result<()> {
        self.reset();
        self.program.set_listing(listing)
    }

    /// Stores `text` at the counter according to the edit mode and
    /// moves on to the next line.
    pub fn enter_line(&mut self, text: &str) -> Result<()> {
        let line = self.functions.normalize(text)?;
        self.program.update_line(&line)?;
        self.program.increment_counter();
        Ok(())
    }

    // *** State machine

    /// Continues from the counter. A program halted on STOP resumes
    /// after the STOP line.
    pub fn run(&mut self) {
        if let Some(Halt::Stop(address)) = self.halt {
            if address == self.program.counter() && self.program.is_at_stop() {
                self.program.increment_counter();
            }
        }
        self.halt = None;
        self.stop = false;
        self.traced = false;
        self.state = State::Running;
    }

    pub fn interrupt(&mut self) {
        if self.state == State::Running {
            self.enter_halt(Halt::Break(self.program.counter()));
        }
    }

    /// Back to Idle. The counter stays where it is.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.halt = None;
        self.stop = false;
    }

    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    pub fn clear_registers(&mut self) {
        self.registers.clear_all();
    }

    fn enter_halt(&mut self, halt: Halt) {
        self.state = State::Halted;
        self.halt = Some(halt);
        self.stop = false;
    }

    /// Runs up to `cycles` lines.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if self.state != State::Running {
                return Event::Stopped;
            }
            if self.tron && !self.traced && !self.program.is_at_end() {
                self.traced = true;
                return Event::Trace(self.program.to_string());
            }
            self.traced = false;
            if self.step() == State::Halted {
                if let Some(halt) = &self.halt {
                    return Event::Halted(halt.clone());
                }
            }
        }
        match self.state {
            State::Running => Event::Running,
            _ => Event::Stopped,
        }
    }

    /// One program line. Does nothing unless running.
    pub fn step(&mut self) -> State {
        if self.state != State::Running {
            return self.state;
        }
        if self.program.is_at_end() {
            self.enter_halt(Halt::End);
            return self.state;
        }
        let counter = self.program.counter();
        match self.execute_line() {
            Err(error) => self.enter_halt(Halt::Error(error.in_address(counter))),
            Ok(_) if self.stop => self.enter_halt(Halt::Stop(counter)),
            Ok(Flow::Next) => {
                self.program.increment_counter();
            }
            Ok(Flow::Jump) => {}
        }
        self.state
    }

    fn execute_line(&mut self) -> Result<Flow> {
        let functions = Rc::clone(&self.functions);
        let line = self.program.current_line().to_string();
        let (function, operand) = functions.decode(&line)?;
        self.dispatch(function.opcode, operand)
    }

    // *** Direct mode

    /// Runs one command typed at the keyboard. Nothing advances the
    /// counter; an error halts the machine without an address.
    pub fn execute_command(&mut self, text: &str) -> State {
        let functions = Rc::clone(&self.functions);
        let result = functions
            .decode(text)
            .and_then(|(function, operand)| self.dispatch(function.opcode, operand));
        self.direct(result)
    }

    pub fn execute_id(&mut self, id: usize, operand: &str) -> State {
        let functions = Rc::clone(&self.functions);
        let result = match functions.get_function_by_id(id) {
            Some(function) => self.dispatch(function.opcode, operand),
            None => Err(error!(NotFound; format!("FUNCTION {}", id))),
        };
        self.direct(result)
    }

    fn direct(&mut self, result: Result<Flow>) -> State {
        self.stop = false;
        if let Err(error) = result {
            self.enter_halt(Halt::Error(error));
        }
        self.state
    }

    // *** Functions

    fn dispatch(&mut self, opcode: Opcode, operand: &str) -> Result<Flow> {
        use Opcode::*;
        match opcode {
            Empty | Comment | Label => Ok(Flow::Next),
            Number => match lex::number(operand) {
                Some(number) => self.push(Val::from(number)),
                None => Err(error!(SyntaxError; "NUMBER")),
            },
            Stop => {
                self.stop = true;
                Ok(Flow::Next)
            }
            Goto => {
                self.program.set_counter_text(operand)?;
                Ok(Flow::Jump)
            }
            Gosub => {
                self.program.go_sub_text(operand)?;
                Ok(Flow::Jump)
            }
            Return => match self.program.return_from_sub()? {
                frame if frame.call_deleted => Ok(Flow::Jump),
                _ => Ok(Flow::Next),
            },
            IfNegative => self.branch_if(operand, |x| x < 0.0),
            IfZero => self.branch_if(operand, |x| x == 0.0),
            IfNotNegative => self.branch_if(operand, |x| x >= 0.0),
            IfNotZero => self.branch_if(operand, |x| x != 0.0),
            Loop0 => self.loop_register(0, operand),
            Loop1 => self.loop_register(1, operand),
            Loop2 => self.loop_register(2, operand),
            Loop3 => self.loop_register(3, operand),
            Enter => self.push(self.stack.x()),
            Exchange => {
                self.stack.exchange_xy();
                Ok(Flow::Next)
            }
            RotateDown => {
                self.stack.rotate_down();
                Ok(Flow::Next)
            }
            RotateUp => {
                self.stack.rotate_up();
                Ok(Flow::Next)
            }
            LastX => {
                self.stack.recall_last_x();
                Ok(Flow::Next)
            }
            ClearX => {
                self.stack.set_x(Val::Empty);
                Ok(Flow::Next)
            }
            Add => self.binary(Operation::sum),
            Sub => self.binary(Operation::subtract),
            Mul => self.binary(Operation::multiply),
            Div => self.binary(Operation::divide),
            Pow => self.binary(Operation::power),
            Max => self.binary(Operation::max),
            Mod => self.binary(Operation::modulo),
            Neg => self.unary(Operation::negate),
            Reciprocal => self.unary(Operation::reciprocal),
            Square => self.unary(Operation::square),
            Sqrt => self.unary(Operation::sqrt),
            Exp10 => self.unary(Operation::exp10),
            Exp => self.unary(Operation::exp),
            Lg => self.unary(Operation::lg),
            Ln => self.unary(Operation::ln),
            Abs => self.unary(Operation::abs),
            Sign => self.unary(Operation::sign),
            IntPart => self.unary(Operation::int_part),
            FracPart => self.unary(Operation::frac_part),
            Sin => self.angular(Operation::sin),
            Cos => self.angular(Operation::cos),
            Tg => self.angular(Operation::tg),
            Arcsin => self.angular(Operation::arcsin),
            Arccos => self.angular(Operation::arccos),
            Arctg => self.angular(Operation::arctg),
            Pi => self.push(Val::Real(std::f64::consts::PI)),
            Rand => {
                let r: f64 = self.rng.gen();
                self.push(Val::Real(r))
            }
            RecallRegister => {
                let val = self.registers.read(Bank::Fast, register(operand)?)?;
                self.push(val)
            }
            StoreRegister => {
                self.registers
                    .write(Bank::Fast, register(operand)?, self.stack.x())?;
                Ok(Flow::Next)
            }
            RecallExtended => {
                let val = self.registers.read(Bank::Extended, extended(operand)?)?;
                self.push(val)
            }
            StoreExtended => {
                self.registers
                    .write(Bank::Extended, extended(operand)?, self.stack.x())?;
                Ok(Flow::Next)
            }
            Degrees => self.angle_mode_to(AngleMode::Degrees),
            Radians => self.angle_mode_to(AngleMode::Radians),
            Grads => self.angle_mode_to(AngleMode::Grads),
        }
    }

    fn push(&mut self, val: Val) -> Result<Flow> {
        self.stack.push(val);
        Ok(Flow::Next)
    }

    fn unary<F: FnOnce(Val) -> Result<Val>>(&mut self, f: F) -> Result<Flow> {
        let val = f(self.stack.x())?;
        self.stack.save_last_x();
        self.stack.pop();
        self.stack.push(val);
        Ok(Flow::Next)
    }

    /// Operands go in as (Y, X).
    fn binary<F: FnOnce(Val, Val) -> Result<Val>>(&mut self, f: F) -> Result<Flow> {
        let val = f(self.stack.y(), self.stack.x())?;
        self.stack.save_last_x();
        self.stack.pop();
        self.stack.pop();
        self.stack.push(val);
        Ok(Flow::Next)
    }

    fn angular<F: FnOnce(Val, AngleMode) -> Result<Val>>(&mut self, f: F) -> Result<Flow> {
        let angle = self.angle;
        self.unary(|val| f(val, angle))
    }

    fn angle_mode_to(&mut self, angle: AngleMode) -> Result<Flow> {
        self.angle = angle;
        Ok(Flow::Next)
    }

    /// An empty X never satisfies the condition.
    fn branch_if<F: FnOnce(f64) -> bool>(&mut self, operand: &str, condition: F) -> Result<Flow> {
        match self.stack.x().as_f64() {
            Some(x) if condition(x) => {
                self.program.set_counter_text(operand)?;
                Ok(Flow::Jump)
            }
            _ => Ok(Flow::Next),
        }
    }

    /// Counts the register down and jumps while it stays above zero.
    /// An empty register falls through.
    fn loop_register(&mut self, index: usize, operand: &str) -> Result<Flow> {
        let count = self.registers.read(Bank::Fast, index)?;
        if count.is_empty() {
            return Ok(Flow::Next);
        }
        let count = Operation::subtract(count, Val::Integer(1))?;
        self.registers.write(Bank::Fast, index, count)?;
        if count.compare(&Val::Integer(0)) == std::cmp::Ordering::Greater {
            self.program.set_counter_text(operand)?;
            Ok(Flow::Jump)
        } else {
            Ok(Flow::Next)
        }
    }
}

fn register(operand: &str) -> Result<usize> {
    lex::register(operand).ok_or_else(|| error!(AddressingError; "REGISTER"))
}

fn extended(operand: &str) -> Result<usize> {
    lex::address(operand).ok_or_else(|| error!(AddressingError; "EXTENDED MEMORY"))
}
