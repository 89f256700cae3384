#![allow(
    clippy::unwrap_used,
    clippy::float_cmp,
    reason = "test code compares exact register values and unwraps for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_register_from_valid_index() {
    for (i, reg) in Register::ALL.iter().enumerate() {
        assert_eq!(Register::new(i), Ok(*reg));
        assert_eq!(reg.index(), i);
    }
}

#[test]
fn test_register_rejects_out_of_range_index() {
    assert_eq!(
        Register::new(4),
        Err(IrError::InvalidRegister { index: 4 })
    );
    assert_eq!(
        Register::try_from(255u8),
        Err(IrError::InvalidRegister { index: 255 })
    );
    assert_eq!(
        Register::try_from(usize::MAX),
        Err(IrError::InvalidRegister { index: usize::MAX })
    );
}

#[test]
fn test_invalid_register_message() {
    let err = Register::new(7).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid register r7: expected an index in 0..=3"
    );
}

#[test]
fn test_register_display() {
    assert_eq!(Register::R0.to_string(), "r0");
    assert_eq!(Register::R3.to_string(), "r3");
}

#[test]
fn test_registers_start_zeroed() {
    let registers = Registers::new();
    assert_eq!(registers.as_array(), &[0.0; 4]);
    assert_eq!(registers, Registers::default());
}

#[test]
fn test_registers_with_input() {
    let registers = Registers::with_input(Register::R2, 9.5);
    assert_eq!(registers.as_array(), &[0.0, 0.0, 9.5, 0.0]);
}

#[test]
fn test_registers_index_write() {
    let mut registers = Registers::new();
    registers[Register::R1] = 3.0;
    registers[Register::R3] += 2.0;
    assert_eq!(registers[Register::R1], 3.0);
    assert_eq!(registers[Register::R3], 2.0);
    assert_eq!(registers[Register::R0], 0.0);
}

#[test]
fn test_registers_is_zero() {
    let mut registers = Registers::new();
    assert!(registers.is_zero(Register::R0));
    registers[Register::R0] = -0.0;
    assert!(registers.is_zero(Register::R0));
    registers[Register::R0] = 1e-300;
    assert!(!registers.is_zero(Register::R0));
}
