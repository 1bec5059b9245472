use mk52::mach::{Event, Runtime};

#[allow(dead_code)]
pub fn program(lines: &[&str]) -> Runtime {
    let mut runtime = Runtime::default();
    for line in lines {
        runtime.enter_line(line).unwrap();
    }
    runtime.program_mut().reset_counter();
    runtime
}

#[allow(dead_code)]
pub fn direct(runtime: &mut Runtime, commands: &[&str]) -> String {
    let mut s = String::new();
    for command in commands {
        runtime.reset();
        runtime.execute_command(command);
        if let Some(error) = runtime.last_error() {
            s.push_str(&format!("{}\n", error));
        }
    }
    s
}

#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

#[allow(dead_code)]
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    runtime.run();
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
