extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Bank, Event, Listing, Runtime, State, REGISTER_COUNT};
use crate::{error, lang::lex, lang::Error};
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const COMMANDS: [&str; 16] = [
    ":run", ":step", ":reset", ":clear", ":list", ":goto", ":prog", ":del", ":comment", ":mode",
    ":new", ":calls", ":regs", ":trace", ":load", ":save",
];

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted, std::env::args().nth(1)) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>, filename: Option<String>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("MK52")?;
    command.set_completer(Arc::new(LineCompleter::new(&runtime)));
    if let Some(filename) = filename {
        let loaded = load(&filename).and_then(|listing| runtime.set_listing(&listing));
        if let Err(error) = loaded {
            command.write_fmt(format_args!("{}\n", Style::new().bold().paint(error.to_string())))?;
        }
    }

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                command.set_prompt(&prompt(&runtime))?;
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                match enter(&mut runtime, &string) {
                    Ok(lines) => {
                        for line in lines {
                            command.write_fmt(format_args!("{}\n", line))?;
                        }
                    }
                    Err(error) => command.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?,
                }
                if !string.trim().is_empty() {
                    command.add_history_unique(string);
                }
            }
            Event::Running => {}
            Event::Trace(line) => {
                command.write_fmt(format_args!("{}\n", Style::new().dimmed().paint(line)))?;
            }
            Event::Halted(halt) => {
                command.write_fmt(format_args!(
                    "{}\n{}\n",
                    Style::new().bold().paint(halt.to_string()),
                    show_x(&runtime)
                ))?;
            }
        }
    }
    Ok(())
}

fn prompt(runtime: &Runtime) -> String {
    format!(
        "{} {} {}> ",
        lex::format_address(runtime.program().counter()),
        runtime.program().edit_mode().name(),
        runtime.angle_mode().name()
    )
}

fn show_x(runtime: &Runtime) -> String {
    format!("X: {}", runtime.stack().x())
}

/// Acts on one line typed at the prompt. Bare text is a keystroke
/// command; text starting with `:` drives the machine itself.
fn enter(runtime: &mut Runtime, text: &str) -> Result<Vec<String>, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(vec![]);
    }
    if !text.starts_with(':') {
        if runtime.state() == State::Halted {
            runtime.reset();
        }
        if runtime.execute_command(text) == State::Halted {
            if let Some(error) = runtime.last_error() {
                return Err(error.clone());
            }
        }
        return Ok(vec![show_x(runtime)]);
    }
    let (verb, arg) = match text.find(' ') {
        Some(at) => (&text[..at], text[at..].trim()),
        None => (text, ""),
    };
    let mut out = vec![];
    match verb.to_ascii_lowercase().as_str() {
        ":run" => runtime.run(),
        ":step" => {
            runtime.run();
            if runtime.step() == State::Running {
                runtime.reset();
            }
            match runtime.halt() {
                Some(halt) => out.push(halt.to_string()),
                None => out.push(runtime.program().to_string()),
            }
            out.push(show_x(runtime));
        }
        ":reset" => {
            runtime.reset();
            runtime.program_mut().reset_counter();
        }
        ":clear" => {
            runtime.clear_stack();
            runtime.clear_registers();
        }
        ":list" => {
            let listing = runtime.get_listing();
            for address in 0..listing.len() {
                let marker = if address == listing.counter() { ">" } else { " " };
                if let Some(line) = listing.list_line(address) {
                    out.push(format!("{}{}", marker, line));
                }
            }
            for error in listing.errors(runtime.functions()) {
                out.push(Style::new().bold().paint(error.to_string()).to_string());
            }
        }
        ":goto" => {
            runtime.program_mut().set_counter_text(arg)?;
            out.push(runtime.program().to_string());
        }
        ":prog" => {
            runtime.enter_line(arg)?;
            out.push(runtime.program().to_string());
        }
        ":del" => {
            runtime.program_mut().delete_line()?;
            out.push(runtime.program().to_string());
        }
        ":comment" => {
            runtime.program_mut().comment_line()?;
            out.push(runtime.program().to_string());
        }
        ":mode" => {
            let mode = runtime.program_mut().toggle_edit_mode();
            out.push(mode.name().to_string());
        }
        ":new" => {
            runtime.reset();
            runtime.program_mut().clear();
        }
        ":calls" => {
            let program = runtime.program();
            for n in 0..program.get_call_stack_ptr() {
                if let Some(frame) = program.get_call_stack_values(n) {
                    out.push(frame);
                }
            }
        }
        ":regs" => {
            for index in 0..REGISTER_COUNT {
                let val = runtime.registers().read(Bank::Fast, index)?;
                out.push(format!("{}: {}", lex::register_name(index), val));
            }
        }
        ":trace" => match arg.to_ascii_lowercase().as_str() {
            "on" => runtime.set_trace(true),
            "off" => runtime.set_trace(false),
            _ => return Err(error!(SyntaxError; "ON OR OFF")),
        },
        ":load" => {
            let listing = load(arg)?;
            runtime.set_listing(&listing)?;
            out.push(format!("{} LINES", listing.len()));
        }
        ":save" => save(&runtime.get_listing(), arg)?,
        _ => return Err(error!(SyntaxError; format!("UNKNOWN COMMAND {}", verb))),
    }
    Ok(out)
}

struct LineCompleter {
    names: Vec<&'static str>,
}

impl LineCompleter {
    fn new(runtime: &Runtime) -> LineCompleter {
        let mut names: Vec<&'static str> = runtime
            .functions()
            .iter()
            .filter(|f| !f.opcode.is_whole_line())
            .map(|f| f.name)
            .collect();
        names.extend(COMMANDS.iter());
        LineCompleter { names }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        start: usize,
        end: usize,
    ) -> Option<Vec<Completion>> {
        let typed = prompter.buffer().get(..end)?;
        let comp_list: Vec<Completion> = self
            .names
            .iter()
            .filter(|name| {
                name.get(..typed.len())
                    .map_or(false, |head| head.eq_ignore_ascii_case(typed))
            })
            .filter_map(|name| name.get(start..))
            .map(|rest| Completion::simple(rest.to_string()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}

fn load(filename: &str) -> Result<Listing, Error> {
    let mut listing = Listing::default();
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    for (index, line) in reader.lines().enumerate() {
        match line {
            Err(error) => return Err(error!(InternalError; error.to_string())),
            Ok(line) => {
                if let Err(error) = listing.load_str(&line) {
                    return Err(error.message(format!("IN LINE {} OF THE FILE", index + 1)));
                }
            }
        }
    }
    Ok(listing)
}

fn save(listing: &Listing, filename: &str) -> Result<(), Error> {
    if listing.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(InternalError; error.to_string())),
    };
    if let Err(error) = write!(file, "{}", listing) {
        return Err(error!(InternalError; error.to_string()));
    }
    Ok(())
}
