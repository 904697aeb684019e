//! Transmitter registers
//!
//! This module contains the registers that shape the transmit path:
//! - Power amplifier selection and output level
//! - Over-current protection
//! - High power test registers for the PA1+PA2 boost mode
//!
//! Only the RFM69H(C)W variants carry PA1 and PA2. Enabling the high power
//! settings on a module without them has no effect on output power.

use bitflags::bitflags;
use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

bitflags! {
    /// Power amplifier stages
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Amplifiers: u8 {
        /// PA0, RFIO pin output, up to +13 dBm
        const PA0 = 1 << 7;
        /// PA1, PA_BOOST pin output
        const PA1 = 1 << 6;
        /// PA2, PA_BOOST pin output, only together with PA1
        const PA2 = 1 << 5;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Amplifiers {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Amplifiers({=u8:#x})", self.bits())
    }
}

/// PA level register (address: 0x11)
///
/// Selects the active amplifier stages and sets the output power.
///
/// # Output power
/// - PA0 alone: -18 dBm + `output_power`
/// - PA1+PA2: -14 dBm + `output_power`, plus the high power settings
///   above +17 dBm
///
/// The register is kept as the raw byte. [`PaLevel::new`] ORs the level onto
/// the amplifier bits without masking it, so a level above 31 carries into
/// the PA2 and PA1 bits exactly as written.
#[register(0x11u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
pub struct PaLevel {
    /// Raw register value
    pub bits: u8,
}

impl PaLevel {
    /// Combines the amplifier stages with an output level.
    pub const fn new(amplifiers: Amplifiers, level: u8) -> Self {
        Self {
            bits: amplifiers.bits() | level,
        }
    }

    /// Enabled amplifier stages
    pub fn amplifiers(self) -> Amplifiers {
        Amplifiers::from_bits_truncate(self.bits)
    }

    /// Output power setting, bits 4:0
    pub fn output_power(self) -> u8 {
        self.bits & 0x1F
    }
}

/// Over current protection register (address: 0x13)
///
/// # Current limit
/// Imax = 45 + 5 * `trim` mA
///
/// # Important Notes
/// - Must be disabled while the high power settings are active
/// - Default after reset: enabled with trim 0xA (95mA)
#[register(0x13u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
pub struct Ocp {
    /// Protection enabled
    pub enabled: bool,
    /// Current limit trim, bits 3:0
    pub trim: u8,
}

impl Ocp {
    /// Protection off, used with the PA1+PA2 high power settings
    pub const OFF: Self = Self {
        enabled: false,
        trim: 0x0F,
    };

    /// Protection on with the 95mA reset default trim
    pub const ON_95_MA: Self = Self {
        enabled: true,
        trim: 0x0A,
    };
}

impl Default for Ocp {
    fn default() -> Self {
        Self::ON_95_MA
    }
}

/// High power PA1 test register (address: 0x5A)
///
/// # Values
/// - 0x55: normal mode and receive
/// - 0x5D: +20 dBm on PA_BOOST
#[register(0x5Au8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
pub struct TestPa1 {
    /// Raw setting
    pub value: u8,
}

impl TestPa1 {
    /// Normal operation
    pub const NORMAL: Self = Self { value: 0x55 };
    /// +20 dBm boost
    pub const BOOST: Self = Self { value: 0x5D };
}

impl Default for TestPa1 {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// High power PA2 test register (address: 0x5C)
///
/// # Values
/// - 0x70: normal mode and receive
/// - 0x7C: +20 dBm on PA_BOOST
#[register(0x5Cu8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
pub struct TestPa2 {
    /// Raw setting
    pub value: u8,
}

impl TestPa2 {
    /// Normal operation
    pub const NORMAL: Self = Self { value: 0x70 };
    /// +20 dBm boost
    pub const BOOST: Self = Self { value: 0x7C };
}

impl Default for TestPa2 {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl FromByteArray for PaLevel {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { bits: bytes[0] })
    }
}

impl ToByteArray for PaLevel {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.bits])
    }
}

impl FromByteArray for Ocp {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            enabled: bytes[0] & 0x10 != 0,
            trim: bytes[0] & 0x0F,
        })
    }
}

impl ToByteArray for Ocp {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        let enable = if self.enabled { 0x10 } else { 0x00 };
        Ok([enable | (self.trim & 0x0F)])
    }
}

impl FromByteArray for TestPa1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { value: bytes[0] })
    }
}

impl ToByteArray for TestPa1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.value])
    }
}

impl FromByteArray for TestPa2 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { value: bytes[0] })
    }
}

impl ToByteArray for TestPa2 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.value])
    }
}
