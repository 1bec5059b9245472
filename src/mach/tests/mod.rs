use crate::mach::{Event, Runtime};

mod edit_test;
mod scenario_test;

fn program(lines: &[&str]) -> Runtime {
    let mut r = Runtime::default();
    for line in lines {
        r.enter_line(line).unwrap();
    }
    r.program_mut().reset_counter();
    r
}

fn run(runtime: &mut Runtime) -> String {
    runtime.run();
    run_cycles(runtime, 5000)
}

/// Halts and traces as text, one per line.
fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Halted(halt) => {
                s.push_str(&format!("{}\n", halt));
            }
            Event::Trace(line) => {
                s.push_str(&format!("{}\n", line));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
        }
        prev_running = event == Event::Running;
    }
    s
}
