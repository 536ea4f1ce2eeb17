//! Bit-operation schedules applied to a seed by one parameter record.

use crate::table::ParameterRecord;

/// Strategy turning a seed into a key under one record's constants.
pub trait KeySchedule: Send + Sync {
    /// Human-readable name for this schedule
    fn name(&self) -> &'static str;

    /// Transform `seed` using the constants of `record`.
    fn apply(&self, seed: u16, record: &ParameterRecord<'_>) -> u16;
}

/// Operations understood by the GM 2-byte interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    ByteSwap,
    AddHighLow,
    Complement,
    AndLowHigh,
    RotateLeft,
    OrLowHigh,
    RotateRight,
    AddLowHigh,
    SwapAdd,
    SubLowHigh,
    SubHighLow,
}

impl Opcode {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x05 => Some(Opcode::ByteSwap),
            0x14 => Some(Opcode::AddHighLow),
            0x2A => Some(Opcode::Complement),
            0x37 => Some(Opcode::AndLowHigh),
            0x4C => Some(Opcode::RotateLeft),
            0x52 => Some(Opcode::OrLowHigh),
            0x6B => Some(Opcode::RotateRight),
            0x75 => Some(Opcode::AddLowHigh),
            0x7E => Some(Opcode::SwapAdd),
            0x98 => Some(Opcode::SubLowHigh),
            0xF8 => Some(Opcode::SubHighLow),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Opcode::ByteSwap => 0x05,
            Opcode::AddHighLow => 0x14,
            Opcode::Complement => 0x2A,
            Opcode::AndLowHigh => 0x37,
            Opcode::RotateLeft => 0x4C,
            Opcode::OrLowHigh => 0x52,
            Opcode::RotateRight => 0x6B,
            Opcode::AddLowHigh => 0x75,
            Opcode::SwapAdd => 0x7E,
            Opcode::SubLowHigh => 0x98,
            Opcode::SubHighLow => 0xF8,
        }
    }

    /// Apply this operation to `value` with operand bytes `hh` and `ll`.
    #[inline]
    pub fn apply(self, value: u16, hh: u8, ll: u8) -> u16 {
        let high_low = u16::from_be_bytes([hh, ll]);
        let low_high = u16::from_be_bytes([ll, hh]);
        match self {
            Opcode::ByteSwap => value.swap_bytes(),
            Opcode::AddHighLow => value.wrapping_add(high_low),
            Opcode::Complement => {
                let inverted = !value;
                if hh < ll {
                    inverted.wrapping_add(1)
                } else {
                    inverted
                }
            }
            Opcode::AndLowHigh => value & low_high,
            Opcode::RotateLeft => value.rotate_left(u32::from(hh)),
            Opcode::OrLowHigh => value | low_high,
            Opcode::RotateRight => value.rotate_right(u32::from(ll)),
            Opcode::AddLowHigh => value.wrapping_add(low_high),
            Opcode::SwapAdd => {
                let addend = if hh >= ll { high_low } else { low_high };
                value.swap_bytes().wrapping_add(addend)
            }
            Opcode::SubLowHigh => value.wrapping_sub(low_high),
            Opcode::SubHighLow => value.wrapping_sub(high_low),
        }
    }
}

/// The GM 2-byte seed/key opcode interpreter.
///
/// Each record carries four `(opcode, hh, ll)` steps which are applied in
/// order. Unknown opcodes leave the value untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct GmOpcodeSchedule;

impl KeySchedule for GmOpcodeSchedule {
    fn name(&self) -> &'static str {
        "gm-opcode"
    }

    fn apply(&self, seed: u16, record: &ParameterRecord<'_>) -> u16 {
        record.steps().fold(seed, |value, (code, hh, ll)| {
            match Opcode::from_byte(code) {
                Some(op) => op.apply(value, hh, ll),
                None => value,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_swap() {
        assert_eq!(Opcode::ByteSwap.apply(0x0102, 0xAA, 0xBB), 0x0201);
    }

    #[test]
    fn additions_wrap() {
        assert_eq!(Opcode::AddHighLow.apply(0xFFFF, 0x00, 0x02), 0x0001);
        assert_eq!(Opcode::AddHighLow.apply(0x0100, 0x12, 0x34), 0x1334);
        assert_eq!(Opcode::AddLowHigh.apply(0x0100, 0x12, 0x34), 0x3512);
    }

    #[test]
    fn complement_adds_one_when_hh_below_ll() {
        assert_eq!(Opcode::Complement.apply(0x0102, 0x01, 0x02), 0xFEFE);
        assert_eq!(Opcode::Complement.apply(0x0102, 0x02, 0x01), 0xFEFD);
        assert_eq!(Opcode::Complement.apply(0x0102, 0x05, 0x05), 0xFEFD);
        assert_eq!(Opcode::Complement.apply(0x0000, 0x00, 0x01), 0x0000);
    }

    #[test]
    fn masks_use_low_high_order() {
        assert_eq!(Opcode::AndLowHigh.apply(0xFFFF, 0x0F, 0xF0), 0xF00F);
        assert_eq!(Opcode::OrLowHigh.apply(0x0000, 0x0F, 0xF0), 0xF00F);
    }

    #[test]
    fn rotations_are_modulo_sixteen() {
        assert_eq!(Opcode::RotateLeft.apply(0x8001, 1, 0), 0x0003);
        assert_eq!(Opcode::RotateLeft.apply(0x8001, 17, 0), 0x0003);
        assert_eq!(Opcode::RotateRight.apply(0x8001, 0, 1), 0xC000);
        assert_eq!(Opcode::RotateRight.apply(0x1234, 0, 16), 0x1234);
    }

    #[test]
    fn swap_add_picks_operand_order() {
        assert_eq!(Opcode::SwapAdd.apply(0x0102, 0x20, 0x10), 0x0201 + 0x2010);
        assert_eq!(Opcode::SwapAdd.apply(0x0102, 0x10, 0x20), 0x0201 + 0x2010);
        assert_eq!(Opcode::SwapAdd.apply(0x0102, 0x11, 0x11), 0x0201 + 0x1111);
    }

    #[test]
    fn subtractions_wrap() {
        assert_eq!(Opcode::SubLowHigh.apply(0x0000, 0x01, 0x00), 0xFFFF);
        assert_eq!(Opcode::SubHighLow.apply(0x0000, 0x00, 0x01), 0xFFFF);
        assert_eq!(Opcode::SubHighLow.apply(0x5000, 0x10, 0x00), 0x4000);
    }

    #[test]
    fn opcode_bytes_round_trip() {
        for byte in 0..=u8::MAX {
            if let Some(op) = Opcode::from_byte(byte) {
                assert_eq!(op.as_byte(), byte);
            }
        }
        assert_eq!(Opcode::from_byte(0x00), None);
    }
}
