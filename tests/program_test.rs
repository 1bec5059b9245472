use mk52::lang::ErrorCode;
use mk52::mach::{EditMode, FunctionTable, Program, MAX_LINE_LEN, PROGRAM_MEMORY_SIZE, RETURN_STACK_SIZE};
use std::rc::Rc;

fn new_program(lines: &[&str]) -> Program {
    let mut p = Program::new(Rc::new(FunctionTable::new()));
    for line in lines {
        p.append_line(line).unwrap();
        p.increment_counter();
    }
    p.reset_counter();
    p
}

#[test]
fn test_empty_program() {
    let mut p = new_program(&[]);
    assert!(p.is_at_end());
    assert_eq!(p.bottom(), 0);
    assert_eq!(p.current(), 0);
    assert!(!p.increment_counter());
    assert!(!p.decrement_counter());
    assert_eq!(p.to_string(), "0000> ");
}

#[test]
fn test_go_sub_return_at_every_depth() {
    let mut p = new_program(&["1", "22", "333", "4444"]);
    let mut saved = vec![];
    for depth in 0..RETURN_STACK_SIZE {
        let at = depth % 4;
        p.set_counter(at).unwrap();
        saved.push((p.counter(), p.current()));
        p.go_sub((at + 1) % 4).unwrap();
    }
    let e = p.go_sub(0).unwrap_err();
    assert_eq!(e.code(), ErrorCode::StackOverflow);
    assert_eq!(p.get_call_stack_ptr(), RETURN_STACK_SIZE);
    while let Some((counter, offset)) = saved.pop() {
        p.return_from_sub().unwrap();
        assert_eq!((p.counter(), p.current()), (counter, offset));
    }
    assert_eq!(p.return_from_sub().unwrap_err().code(), ErrorCode::StackUnderflow);
}

#[test]
fn test_memory_is_never_exceeded() {
    let mut p = new_program(&[]);
    let line = "1".repeat(MAX_LINE_LEN);
    loop {
        match p.append_line(&line) {
            Ok(()) => {
                p.increment_counter();
            }
            Err(e) => {
                assert_eq!(e.code(), ErrorCode::OutOfMemory);
                break;
            }
        }
    }
    assert_eq!(p.bottom(), PROGRAM_MEMORY_SIZE);
    assert_eq!(p.free(), 0);
    p.set_counter(3).unwrap();
    let e = p.insert_line("1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::OutOfMemory);
    assert_eq!(p.bottom(), PROGRAM_MEMORY_SIZE);
    p.replace_line("2").unwrap();
    assert_eq!(p.free(), MAX_LINE_LEN - 1);
}

#[test]
fn test_insert_then_delete_restores_text() {
    let text = ["GOTO 0003", "IF X=0 GOTO 0000", "L0 0002", "GOSUB 0001"];
    let mut p = new_program(&text);
    p.set_edit_mode(EditMode::Insert);
    p.set_counter(1).unwrap();
    p.insert_line("7").unwrap();
    assert_eq!(
        p.lines().collect::<Vec<_>>(),
        vec!["GOTO 0004", "7", "IF X=0 GOTO 0000", "L0 0003", "GOSUB 0002"]
    );
    p.delete_line().unwrap();
    assert_eq!(p.lines().collect::<Vec<_>>(), text.to_vec());
}

#[test]
fn test_previous_lines_and_call_views() {
    let mut p = new_program(&["1", "2", "3"]);
    p.set_counter(2).unwrap();
    assert_eq!(p.get_previous_lines(2), vec!["3", "2"]);
    p.go_sub(0).unwrap();
    assert_eq!(p.get_call_stack_values(0), Some("S0002: 4".to_string()));
    assert_eq!(p.get_previous_lines(3), vec!["1"]);
    p.set_call_stack_values(0, "0001", "2").unwrap();
    assert_eq!(p.return_from_sub().map(|frame| frame.counter), Ok(1));
}
