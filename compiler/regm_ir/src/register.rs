//! Register identifiers and the register file.
//!
//! `Register` is a four-variant enum rather than a bare index so the
//! register file can be a plain `[f64; 4]` indexed without a runtime check.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::IrError;

/// One of the four machine registers.
///
/// # Layout
/// `#[repr(u8)]` with discriminants 0..=3, so `index()` is a zero-cost cast.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Register {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
}

impl Register {
    /// Number of registers in a register file.
    pub const COUNT: usize = 4;

    /// All registers in index order.
    pub const ALL: [Register; Register::COUNT] =
        [Register::R0, Register::R1, Register::R2, Register::R3];

    /// Create a register from a raw index.
    ///
    /// This is the only place a register index is bounds checked.
    pub const fn new(index: usize) -> Result<Self, IrError> {
        match index {
            0 => Ok(Register::R0),
            1 => Ok(Register::R1),
            2 => Ok(Register::R2),
            3 => Ok(Register::R3),
            _ => Err(IrError::InvalidRegister { index }),
        }
    }

    /// Get the index into a register file.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Register {
    type Error = IrError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Register::new(index)
    }
}

impl TryFrom<u8> for Register {
    type Error = IrError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Register::new(usize::from(index))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.index())
    }
}

/// The register file for a single program run.
///
/// Always starts zeroed. Each run allocates its own and drops it after
/// reading the output register; a `Registers` is never shared between runs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Registers([f64; Register::COUNT]);

impl Registers {
    /// Create a zeroed register file.
    #[inline]
    pub const fn new() -> Self {
        Registers([0.0; Register::COUNT])
    }

    /// Create a zeroed register file with `value` written into `input`.
    #[inline]
    pub fn with_input(input: Register, value: f64) -> Self {
        let mut registers = Registers::new();
        registers[input] = value;
        registers
    }

    /// Check whether a register holds exactly zero.
    ///
    /// This is the loop halting test. `-0.0` counts as zero.
    #[inline]
    pub fn is_zero(&self, reg: Register) -> bool {
        self[reg] == 0.0
    }

    /// View the raw register values in index order.
    pub fn as_array(&self) -> &[f64; Register::COUNT] {
        &self.0
    }
}

impl Index<Register> for Registers {
    type Output = f64;

    #[inline]
    fn index(&self, reg: Register) -> &f64 {
        &self.0[reg.index()]
    }
}

impl IndexMut<Register> for Registers {
    #[inline]
    fn index_mut(&mut self, reg: Register) -> &mut f64 {
        &mut self.0[reg.index()]
    }
}

#[cfg(test)]
mod tests;
