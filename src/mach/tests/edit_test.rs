use super::*;
use crate::mach::{EditMode, Val};

fn lines(r: &Runtime) -> Vec<String> {
    r.program().lines().map(String::from).collect()
}

#[test]
fn test_insert_keeps_branch_target() {
    let mut r = program(&[
        "GOTO 0005", "1", "2", "3", "4", "10", "+", "5", "6", "7",
    ]);
    r.program_mut().set_counter(2).unwrap();
    r.program_mut().insert_line("ENTER").unwrap();
    assert_eq!(r.program().line(0), Some("GOTO 0006"));
    assert_eq!(r.program().line(6), Some("10"));
}

#[test]
fn test_program_still_runs_after_edits() {
    let mut r = program(&["GOSUB 0004", "1", "+", "STOP", "2", "RETURN"]);
    r.program_mut().set_edit_mode(EditMode::Insert);
    r.program_mut().set_counter(1).unwrap();
    r.program_mut().insert_line("3").unwrap();
    r.program_mut().set_counter(3).unwrap();
    r.program_mut().delete_line().unwrap();
    assert_eq!(lines(&r), vec!["GOSUB 0004", "3", "1", "STOP", "2", "RETURN"]);
    r.program_mut().reset_counter();
    assert_eq!(run(&mut r), "STOP IN 0003\n");
    assert_eq!(r.stack().x(), Val::Integer(1));
    assert_eq!(r.stack().y(), Val::Integer(3));
    assert_eq!(r.stack().peek(2), Some(Val::Integer(2)));
}

#[test]
fn test_enter_line_follows_edit_mode() {
    let mut r = program(&["1", "2"]);
    r.enter_line("goto 1").unwrap();
    assert_eq!(lines(&r), vec!["GOTO 0001", "2"]);
    r.program_mut().set_edit_mode(EditMode::Insert);
    r.enter_line("x^2").unwrap();
    assert_eq!(lines(&r), vec!["GOTO 0002", "X^2", "2"]);
    assert_eq!(r.program().counter(), 2);
}

#[test]
fn test_enter_rejects_bad_line() {
    let mut r = program(&["1"]);
    assert!(r.enter_line("FROB").is_err());
    assert!(r.enter_line("X->M Z").is_err());
    assert_eq!(lines(&r), vec!["1"]);
}

#[test]
fn test_edit_between_runs_keeps_pending_return() {
    let mut r = program(&["GOSUB 0003", "9", "STOP", "STOP", "RETURN"]);
    assert_eq!(run(&mut r), "STOP IN 0003\n");
    r.program_mut().set_counter(1).unwrap();
    r.program_mut().insert_line("8").unwrap();
    assert_eq!(r.program().line(0), Some("GOSUB 0004"));
    r.program_mut().set_counter(5).unwrap();
    assert_eq!(run(&mut r), "STOP IN 0003\n");
    assert_eq!(r.stack().x(), Val::Integer(9));
    assert_eq!(r.stack().y(), Val::Integer(8));
}

#[test]
fn test_return_after_deleting_the_call() {
    let mut r = program(&["1", "GOSUB 0004", "2", "STOP", "STOP", "RETURN"]);
    assert_eq!(run(&mut r), "STOP IN 0004\n");
    r.program_mut().set_edit_mode(EditMode::Insert);
    r.program_mut().set_counter(1).unwrap();
    r.program_mut().delete_line().unwrap();
    assert_eq!(lines(&r), vec!["1", "2", "STOP", "STOP", "RETURN"]);
    r.program_mut().set_counter(4).unwrap();
    assert_eq!(run(&mut r), "STOP IN 0002\n");
    assert_eq!(r.stack().x(), Val::Integer(2));
    assert_eq!(r.stack().y(), Val::Integer(1));
}

#[test]
fn test_overwrite_delete_keeps_addresses() {
    let mut r = program(&["GOTO 0002", "5", "6", "STOP"]);
    r.program_mut().set_counter(1).unwrap();
    r.program_mut().delete_line().unwrap();
    assert_eq!(lines(&r), vec!["GOTO 0002", "", "6", "STOP"]);
    r.program_mut().reset_counter();
    assert_eq!(run(&mut r), "STOP IN 0003\n");
    assert_eq!(r.stack().x(), Val::Integer(6));
    assert_eq!(r.stack().y(), Val::Empty);
}

#[test]
fn test_listing_reload() {
    let mut r = program(&["1", "2", "+"]);
    let listing = r.get_listing();
    let mut fresh = Runtime::default();
    fresh.set_listing(&listing).unwrap();
    fresh.program_mut().reset_counter();
    assert_eq!(run(&mut fresh), "END\n");
    assert_eq!(fresh.stack().x(), Val::Integer(3));
    assert_eq!(run(&mut r), "END\n");
}
