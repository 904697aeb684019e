//! Receiver registers
//!
//! This module contains the RSSI measurement registers and the LNA
//! sensitivity test register.

use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

/// RSSI configuration register (address: 0x23)
///
/// Writing `start` triggers a measurement; `done` is raised by the radio once
/// [`RssiValue`] holds the result.
#[register(0x23u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ReadableRegister, WritableRegister)]
pub struct RssiConfig {
    /// Trigger a measurement (write only)
    pub start: bool,
    /// Measurement finished (read only)
    pub done: bool,
}

impl RssiConfig {
    /// Value that triggers a measurement
    pub const START: Self = Self {
        start: true,
        done: false,
    };
}

/// RSSI value register (address: 0x24)
///
/// Holds -2 * RSSI in dBm, i.e. 0.5 dB steps below 0 dBm.
#[register(0x24u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister)]
pub struct RssiValue {
    /// Raw magnitude, 0.5 dB per step
    pub raw: u8,
}

impl RssiValue {
    /// Signal strength in dBm, truncated towards zero
    pub fn dbm(&self) -> i16 {
        -i16::from(self.raw / 2)
    }
}

/// LNA sensitivity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LnaSensitivity {
    /// Normal sensitivity (reset default)
    Normal,
    /// High sensitivity, about 3 dB better at the cost of ~1mA
    High,
}

/// LNA test register (address: 0x58)
#[register(0x58u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister, WritableRegister)]
pub struct TestLna {
    /// Selected sensitivity
    pub sensitivity: LnaSensitivity,
}

/// Raw LNA test value not matching any documented setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLnaSetting(pub u8);

impl LnaSensitivity {
    /// Convert a raw byte value to an LNA sensitivity
    pub fn from_byte(value: u8) -> Result<Self, InvalidLnaSetting> {
        match value {
            0x1B => Ok(Self::Normal),
            0x2D => Ok(Self::High),
            invalid => Err(InvalidLnaSetting(invalid)),
        }
    }

    /// Convert an LNA sensitivity to its raw byte value
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Normal => 0x1B,
            Self::High => 0x2D,
        }
    }
}

impl FromByteArray for RssiConfig {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            start: bytes[0] & 0x01 != 0,
            done: bytes[0] & 0x02 != 0,
        })
    }
}

impl ToByteArray for RssiConfig {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([if self.start { 0x01 } else { 0x00 }])
    }
}

impl FromByteArray for RssiValue {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { raw: bytes[0] })
    }
}

impl FromByteArray for TestLna {
    type Error = InvalidLnaSetting;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            sensitivity: LnaSensitivity::from_byte(bytes[0])?,
        })
    }
}

impl ToByteArray for TestLna {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.sensitivity.to_byte()])
    }
}
