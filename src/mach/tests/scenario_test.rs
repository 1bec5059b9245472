use super::*;
use crate::lang::ErrorCode;
use crate::mach::{State, Val};

#[test]
fn test_one_plus_two() {
    let mut r = program(&["1", "2", "+"]);
    assert_eq!(run(&mut r), "END\n");
    assert_eq!(r.stack().x(), Val::Integer(3));
    assert_eq!(r.state(), State::Halted);
}

#[test]
fn test_division_by_zero_halts() {
    let mut r = program(&["5", "0", "/", "7"]);
    assert_eq!(run(&mut r), "DIVISION BY ZERO IN 0002\n");
    assert_eq!(r.last_error().map(|e| e.code()), Some(ErrorCode::DivisionByZero));
    assert_eq!(r.program().counter(), 2);
    assert_eq!(r.stack().x(), Val::Integer(0));
}

#[test]
fn test_saturation_to_real() {
    let mut r = program(&["9000000000000000000", "1", "+"]);
    run(&mut r);
    assert_eq!(r.stack().x(), Val::Real(9e18));
    let mut r = program(&["-9000000000000000000", "ENTER", "*", "NEG"]);
    run(&mut r);
    assert_eq!(r.stack().x(), Val::Real(-9e18));
}

#[test]
fn test_last_x_after_operation() {
    let mut r = program(&["3", "4", "*", "BX"]);
    run(&mut r);
    assert_eq!(r.stack().x(), Val::Integer(4));
    assert_eq!(r.stack().y(), Val::Integer(12));
}

#[test]
fn test_registers() {
    let mut r = program(&["42", "X->M A", "CX", "M->X A", "7", "X->EM 3999", "EM->X 3999", "+"]);
    assert_eq!(run(&mut r), "END\n");
    assert_eq!(r.stack().x(), Val::Integer(14));
    assert_eq!(r.stack().y(), Val::Integer(42));
}

#[test]
fn test_register_out_of_range() {
    let mut r = program(&["1"]);
    r.program_mut().set_counter_to_bottom();
    r.program_mut().append_line("M->X 99").unwrap();
    r.program_mut().reset_counter();
    assert_eq!(run(&mut r), "ADDRESSING ERROR IN 0001; REGISTER\n");
}

#[test]
fn test_modulo_rejects_real() {
    let mut r = program(&["7.5", "2", "MOD"]);
    assert_eq!(run(&mut r), "TYPE MISMATCH IN 0002\n");
    let mut r = program(&["-7", "3", "MOD"]);
    run(&mut r);
    assert_eq!(r.stack().x(), Val::Integer(2));
}

#[test]
fn test_angle_modes() {
    let mut r = program(&["90", "SIN"]);
    run(&mut r);
    assert_eq!(r.stack().x(), Val::Real(1.0));
    let mut r = program(&["RAD", "0", "COS", "GRD", "1", "ARCSIN"]);
    run(&mut r);
    let grads = r.stack().x().as_f64().unwrap();
    assert!((grads - 100.0).abs() < 1e-9);
    assert_eq!(r.stack().y(), Val::Real(1.0));
}

#[test]
fn test_domain_errors() {
    let mut r = program(&["-4", "SQRT"]);
    assert_eq!(run(&mut r), "ILLEGAL FUNCTION CALL IN 0001\n");
    assert_eq!(r.stack().x(), Val::Integer(-4));
    let mut r = program(&["0", "LN"]);
    assert_eq!(run(&mut r), "ILLEGAL FUNCTION CALL IN 0001\n");
}

#[test]
fn test_unknown_line_halts() {
    let mut r = program(&["1"]);
    r.program_mut().set_counter_to_bottom();
    r.program_mut().append_line("FROB").unwrap();
    r.program_mut().reset_counter();
    assert_eq!(run(&mut r), "NOT FOUND IN 0001; FROB\n");
}

#[test]
fn test_trace() {
    let mut r = program(&["1", "2", "+"]);
    r.set_trace(true);
    assert_eq!(run(&mut r), "0000> 1\n0001> 2\n0002> +\nEND\n");
}
