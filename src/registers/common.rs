//! Common configuration registers
//!
//! This module contains the operating mode register and the silicon
//! version register used to probe for the radio.

use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

/// Operating mode of the radio
///
/// Each variant carries its value already positioned in bits 4:2 of
/// [`OpMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Lowest power, all blocks off except the register file (~0.1μA)
    Sleep = 0x00,
    /// Crystal oscillator running (~1.25mA)
    Standby = 0x04,
    /// PLL locked on the carrier frequency
    FrequencySynthesis = 0x08,
    /// Transmitter active
    Transmit = 0x0C,
    /// Receiver active
    Receive = 0x10,
}

impl Mode {
    /// Mask of the mode selector field in [`OpMode`]
    pub const MASK: u8 = 0x1C;

    /// Returns the mode encoded in the mode selector field of an OPMODE value
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & Self::MASK {
            0x00 => Some(Self::Sleep),
            0x04 => Some(Self::Standby),
            0x08 => Some(Self::FrequencySynthesis),
            0x0C => Some(Self::Transmit),
            0x10 => Some(Self::Receive),
            _ => None,
        }
    }

    /// Value of the mode selector field
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Operating mode register (address: 0x01)
///
/// Besides the mode selector this register holds the sequencer and listen
/// mode controls. Those bits must survive a mode change, so the raw value is
/// kept as read.
///
/// # Layout
/// - bit 7: sequencer off
/// - bit 6: listen mode on
/// - bit 5: listen abort
/// - bits 4:2: mode selector
#[register(0x01u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
pub struct OpMode {
    /// Raw register value
    pub bits: u8,
}

impl OpMode {
    /// Returns the register value with the mode selector replaced by `mode`.
    ///
    /// All bits outside the selector field are kept.
    pub fn with_mode(self, mode: Mode) -> Self {
        Self {
            bits: (self.bits & !Mode::MASK) | mode.bits(),
        }
    }

    /// Currently selected mode, if the selector holds a valid value
    pub fn mode(&self) -> Option<Mode> {
        Mode::from_bits(self.bits)
    }

    /// Automatic mode sequencer disabled
    pub fn sequencer_off(&self) -> bool {
        self.bits & 0x80 != 0
    }

    /// Listen mode enabled
    pub fn listen_on(&self) -> bool {
        self.bits & 0x40 != 0
    }
}

/// Silicon version register (address: 0x10)
///
/// Reads 0x24 on current silicon. A zero read means nothing answered on the
/// bus.
#[register(0x10u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister)]
pub struct Version {
    /// Full revision number in the high nibble, metal mask revision in the low
    pub value: u8,
}

impl FromByteArray for OpMode {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { bits: bytes[0] })
    }
}

impl ToByteArray for OpMode {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.bits])
    }
}

impl FromByteArray for Version {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { value: bytes[0] })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const MODES: [Mode; 5] = [
        Mode::Sleep,
        Mode::Standby,
        Mode::FrequencySynthesis,
        Mode::Transmit,
        Mode::Receive,
    ];

    #[test]
    fn with_mode_only_touches_the_selector() {
        for prior in 0..=u8::MAX {
            for mode in MODES {
                let updated = OpMode { bits: prior }.with_mode(mode);
                assert_eq!(updated.bits, (prior & 0xE3) | mode.bits());
                assert_eq!(updated.mode(), Some(mode));
            }
        }
    }

    #[test]
    fn reserved_selector_values_decode_to_none() {
        assert_eq!(Mode::from_bits(0x14), None);
        assert_eq!(Mode::from_bits(0x1C), None);
        assert_eq!(Mode::from_bits(0x90), Some(Mode::Receive));
    }

    #[test]
    fn control_bits_are_decoded() {
        let op_mode = OpMode { bits: 0xC4 };
        assert!(op_mode.sequencer_off());
        assert!(op_mode.listen_on());
        assert_eq!(op_mode.mode(), Some(Mode::Standby));
    }
}
