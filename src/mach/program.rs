use super::link::{relink, LineSyntax, Shift};
use super::{Listing, Stack, MAX_LINE_LEN, PROGRAM_MEMORY_SIZE, RETURN_STACK_SIZE};
use crate::error;
use crate::lang::{lex, Address, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Overwrite,
    Insert,
}

impl EditMode {
    pub fn name(self) -> &'static str {
        match self {
            EditMode::Overwrite => "OVR",
            EditMode::Insert => "INS",
        }
    }
}

/// Saved position of a subroutine call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    pub counter: Address,
    pub offset: usize,
    /// The calling line was deleted, so `counter` already names the
    /// line to resume at.
    pub call_deleted: bool,
}

#[derive(Clone, Copy)]
enum Edit<'a> {
    Insert(&'a str),
    Replace(&'a str),
    Delete,
}

/// ## Program memory
///
/// Lines live back to back in one byte buffer, each closed by a zero
/// byte. `starts` holds the offset of every line so edits work on
/// indices. The counter may rest one past the last line, at `bottom`,
/// which is where new lines are appended.
///
/// An edit either completes or leaves memory exactly as it was.

pub struct Program {
    syntax: Rc<dyn LineSyntax>,
    buffer: Vec<u8>,
    starts: Vec<usize>,
    counter: Address,
    mode: EditMode,
    calls: Stack<Frame>,
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("lines", &self.starts.len())
            .field("counter", &self.counter)
            .field("bottom", &self.bottom())
            .field("mode", &self.mode)
            .field("calls", &self.calls)
            .finish()
    }
}

impl Program {
    pub fn new(syntax: Rc<dyn LineSyntax>) -> Program {
        Program {
            syntax,
            buffer: Vec::new(),
            starts: Vec::new(),
            counter: 0,
            mode: EditMode::Overwrite,
            calls: Stack::new(RETURN_STACK_SIZE, "CALLS"),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.starts.clear();
        self.reset_counter();
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
        self.calls.clear();
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn counter(&self) -> Address {
        self.counter
    }

    /// Byte offset of the line under the counter.
    pub fn current(&self) -> usize {
        self.offset_of(self.counter)
    }

    pub fn bottom(&self) -> usize {
        self.buffer.len()
    }

    pub fn free(&self) -> usize {
        PROGRAM_MEMORY_SIZE - self.bottom()
    }

    fn offset_of(&self, address: Address) -> usize {
        match self.starts.get(address) {
            Some(start) => *start,
            None => self.bottom(),
        }
    }

    pub fn line(&self, address: Address) -> Option<&str> {
        let start = *self.starts.get(address)?;
        let end = match self.starts.get(address + 1) {
            Some(next) => next - 1,
            None => self.buffer.len() - 1,
        };
        std::str::from_utf8(&self.buffer[start..end]).ok()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.starts.len()).map(move |address| self.line(address).unwrap_or(""))
    }

    pub fn current_line(&self) -> &str {
        self.line(self.counter).unwrap_or("")
    }

    pub fn is_at_end(&self) -> bool {
        self.current() >= self.bottom()
    }

    pub fn is_at_stop(&self) -> bool {
        !self.is_at_end() && self.syntax.is_stop(self.current_line())
    }

    // *** Counter

    /// Moves the counter to a line, or to `bottom`. Anything past
    /// `bottom` does not exist.
    pub fn set_counter(&mut self, address: Address) -> Result<Address> {
        if address > self.len() {
            return Err(error!(AddressingError; "NO SUCH LINE"));
        }
        self.counter = address;
        Ok(self.counter)
    }

    /// Numeric address or label name.
    pub fn set_counter_text(&mut self, text: &str) -> Result<Address> {
        let address = self.resolve(text)?;
        self.set_counter(address)
    }

    pub fn set_counter_to_bottom(&mut self) -> Address {
        self.counter = self.len();
        self.counter
    }

    pub fn resolve(&self, text: &str) -> Result<Address> {
        let text = text.trim();
        if text.is_empty() {
            return Err(error!(AddressingError; "MISSING ADDRESS"));
        }
        if text.chars().all(|c| c.is_ascii_digit()) {
            return match lex::address(text) {
                Some(address) => Ok(address),
                None => Err(error!(AddressingError; "NO SUCH LINE")),
            };
        }
        self.lines()
            .position(|line| self.syntax.label_name(line) == Some(text))
            .ok_or_else(|| error!(NotFound; format!("LABEL {}", text)))
    }

    /// False when already at `bottom`.
    pub fn increment_counter(&mut self) -> bool {
        if self.counter >= self.len() {
            return false;
        }
        self.counter += 1;
        true
    }

    /// False when already at the first line.
    pub fn decrement_counter(&mut self) -> bool {
        if self.counter == 0 {
            return false;
        }
        self.counter -= 1;
        true
    }

    // *** Subroutines

    pub fn go_sub(&mut self, address: Address) -> Result<Address> {
        if address > self.len() {
            return Err(error!(AddressingError; "NO SUCH LINE"));
        }
        self.push_frame()?;
        self.set_counter(address)
    }

    pub fn go_sub_text(&mut self, text: &str) -> Result<Address> {
        let address = self.resolve(text)?;
        self.go_sub(address)
    }

    fn push_frame(&mut self) -> Result<()> {
        let frame = Frame {
            counter: self.counter,
            offset: self.current(),
            call_deleted: false,
        };
        self.calls.push(frame)
    }

    /// Back to the line that made the call. Stepping past it is the
    /// caller's business unless the frame says the call is gone.
    pub fn return_from_sub(&mut self) -> Result<Frame> {
        let frame = self.calls.pop()?;
        self.set_counter(frame.counter)?;
        Ok(frame)
    }

    pub fn get_call_stack_ptr(&self) -> usize {
        self.calls.len()
    }

    pub fn call_stack_frame(&self, n: usize) -> Option<Frame> {
        self.calls.get(n).copied()
    }

    pub fn get_call_stack_values(&self, n: usize) -> Option<String> {
        self.calls
            .get(n)
            .map(|frame| format!("S{:04}: {}", frame.counter, frame.offset))
    }

    /// Overwrites frame `n` and makes it the top of the call stack.
    /// Missing frames below it are zeroed.
    pub fn set_call_stack_values(&mut self, n: usize, ctr: &str, ptr: &str) -> Result<()> {
        if n >= self.calls.capacity() {
            return Err(error!(AddressingError; "CALLS"));
        }
        let counter = match lex::address(ctr) {
            Some(counter) if counter <= self.len() => counter,
            _ => return Err(error!(AddressingError; "NO SUCH LINE")),
        };
        let offset = match ptr.trim().parse::<usize>() {
            Ok(offset) => offset,
            Err(_) => return Err(error!(SyntaxError; "OFFSET")),
        };
        self.calls.truncate(n);
        while self.calls.len() < n {
            self.calls.push(Frame::default())?;
        }
        self.calls.push(Frame {
            counter,
            offset,
            call_deleted: false,
        })
    }

    // *** Editing

    pub fn edit_mode(&self) -> EditMode {
        self.mode
    }

    pub fn set_edit_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    pub fn toggle_edit_mode(&mut self) -> EditMode {
        self.mode = match self.mode {
            EditMode::Overwrite => EditMode::Insert,
            EditMode::Insert => EditMode::Overwrite,
        };
        self.mode
    }

    fn check_line(line: &str) -> Result<()> {
        if line.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        if line.bytes().any(|b| b == 0 || b == b'\n' || b == b'\r') {
            return Err(error!(SyntaxError; "CONTROL CHARACTER IN LINE"));
        }
        Ok(())
    }

    /// Writes `line` at the counter and drops every line from the
    /// counter on. At `bottom` this simply adds a line.
    pub fn append_line(&mut self, line: &str) -> Result<()> {
        Program::check_line(line)?;
        let start = self.current();
        if start + line.len() + 1 > PROGRAM_MEMORY_SIZE {
            return Err(error!(OutOfMemory));
        }
        self.buffer.truncate(start);
        self.starts.truncate(self.counter);
        self.starts.push(start);
        self.buffer.extend_from_slice(line.as_bytes());
        self.buffer.push(0);
        let len = self.len();
        self.calls.iter_mut().for_each(|frame| {
            if frame.counter > len {
                frame.counter = len;
            }
        });
        self.refresh_frames();
        Ok(())
    }

    pub fn replace_line(&mut self, line: &str) -> Result<()> {
        if self.is_at_end() {
            return self.append_line(line);
        }
        Program::check_line(line)?;
        self.rebuild(Edit::Replace(line), None)
    }

    /// Puts `line` before the line under the counter. Every address
    /// at or after the counter moves down one line.
    pub fn insert_line(&mut self, line: &str) -> Result<()> {
        if self.is_at_end() {
            return self.append_line(line);
        }
        Program::check_line(line)?;
        self.rebuild(Edit::Insert(line), Some(Shift::Insert(self.counter)))
    }

    pub fn update_line(&mut self, line: &str) -> Result<()> {
        match self.mode {
            EditMode::Overwrite => self.replace_line(line),
            EditMode::Insert => self.insert_line(line),
        }
    }

    /// Overwrite mode blanks the line under the counter and nothing
    /// moves. Insert mode removes it and every address after it moves
    /// up one line.
    pub fn delete_line(&mut self) -> Result<()> {
        if self.is_at_end() {
            return Ok(());
        }
        match self.mode {
            EditMode::Overwrite => self.rebuild(Edit::Replace(""), None),
            EditMode::Insert => self.rebuild(Edit::Delete, Some(Shift::Delete(self.counter))),
        }
    }

    /// Toggles a leading `#` on the line under the counter.
    pub fn comment_line(&mut self) -> Result<()> {
        if self.is_at_end() {
            return self.append_line("#");
        }
        let line = self.current_line();
        let toggled = match line.strip_prefix('#') {
            Some(rest) => rest.to_string(),
            None => format!("#{}", line),
        };
        self.replace_line(&toggled)
    }

    /// Lays the buffer out again with `edit` applied at the counter
    /// and addresses moved by `shift`. Memory is only swapped in once
    /// the whole new layout is known to fit.
    fn rebuild(&mut self, edit: Edit<'_>, shift: Option<Shift>) -> Result<()> {
        let at = self.counter;
        let mut buffer: Vec<u8> = Vec::with_capacity(self.buffer.len() + MAX_LINE_LEN + 1);
        let mut starts: Vec<usize> = Vec::with_capacity(self.starts.len() + 1);
        let mut push = |text: &str| {
            starts.push(buffer.len());
            buffer.extend_from_slice(text.as_bytes());
            buffer.push(0);
        };
        for (address, line) in self.lines().enumerate() {
            if address == at {
                match edit {
                    Edit::Insert(text) => push(text),
                    Edit::Replace(text) => {
                        push(text);
                        continue;
                    }
                    Edit::Delete => continue,
                }
            }
            match shift.and_then(|shift| relink(&*self.syntax, line, shift)) {
                Some(moved) => push(&moved),
                None => push(line),
            }
        }
        if buffer.len() > PROGRAM_MEMORY_SIZE {
            return Err(error!(OutOfMemory));
        }
        self.buffer = buffer;
        self.starts = starts;
        if let Some(shift) = shift {
            self.calls.iter_mut().for_each(|frame| {
                if shift == Shift::Delete(frame.counter) {
                    frame.call_deleted = true;
                }
                frame.counter = shift.apply(frame.counter);
            });
        }
        let len = self.len();
        if self.counter > len {
            self.counter = len;
        }
        self.calls.iter_mut().for_each(|frame| {
            if frame.counter > len {
                frame.counter = len;
            }
        });
        self.refresh_frames();
        Ok(())
    }

    fn refresh_frames(&mut self) {
        let starts = &self.starts;
        let bottom = self.buffer.len();
        self.calls.iter_mut().for_each(|frame| {
            frame.offset = starts.get(frame.counter).copied().unwrap_or(bottom);
        });
    }

    // *** Views

    /// The current line first, then up to `n - 1` lines before it.
    pub fn get_previous_lines(&self, n: usize) -> Vec<&str> {
        let mut lines = vec![self.current_line()];
        let mut address = self.counter;
        while lines.len() < n && address > 0 {
            address -= 1;
            lines.push(self.line(address).unwrap_or(""));
        }
        lines
    }

    pub fn to_counter_string(&self) -> String {
        format!("{}> ", lex::format_address(self.counter))
    }

    pub fn listing(&self) -> Listing {
        Listing::new(self.lines().map(String::from).collect(), self.counter)
    }

    /// Replaces the program by replaying every line through
    /// `append_line`. A failing line leaves the old program in place.
    /// Pending calls are dropped either way.
    pub fn set_listing(&mut self, listing: &Listing) -> Result<()> {
        self.calls.clear();
        let buffer = std::mem::take(&mut self.buffer);
        let starts = std::mem::take(&mut self.starts);
        let counter = self.counter;
        self.counter = 0;
        for (address, line) in listing.lines().enumerate() {
            if let Err(error) = self.append_line(line) {
                self.buffer = buffer;
                self.starts = starts;
                self.counter = counter;
                return Err(error.in_address(address));
            }
            self.increment_counter();
        }
        self.counter = listing.counter().min(self.len());
        Ok(())
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.to_counter_string(), self.current_line())
    }
}
