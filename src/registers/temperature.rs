//! Temperature sensor registers

use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister, ToByteArray, WritableRegister};

/// Temperature control register (address: 0x4E)
///
/// # Important Notes
/// - Measurements only work in standby or frequency synthesis mode
/// - A conversion takes under 100μs
#[register(0x4Eu8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ReadableRegister, WritableRegister)]
pub struct Temp1 {
    /// Trigger a conversion (write only)
    pub start: bool,
    /// Conversion in progress (read only)
    pub running: bool,
}

impl Temp1 {
    /// Value that triggers a conversion
    pub const START: Self = Self {
        start: true,
        running: false,
    };
}

/// Temperature value register (address: 0x4F)
///
/// Raw ADC output, uncalibrated. The reading falls by one step per degree
/// Celsius.
#[register(0x4Fu8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ReadableRegister)]
pub struct Temp2 {
    /// Raw ADC output
    pub raw: u8,
}

impl Temp2 {
    /// Offset between the raw reading and degrees Celsius
    pub const OFFSET: i16 = 161;

    /// Temperature in degrees Celsius
    pub fn celsius(&self) -> i16 {
        Self::OFFSET - i16::from(self.raw)
    }
}

impl FromByteArray for Temp1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self {
            start: bytes[0] & 0x08 != 0,
            running: bytes[0] & 0x04 != 0,
        })
    }
}

impl ToByteArray for Temp1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([if self.start { 0x08 } else { 0x00 }])
    }
}

impl FromByteArray for Temp2 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        Ok(Self { raw: bytes[0] })
    }
}
