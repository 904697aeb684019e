//! RFM69 register transaction layer
//!
//! This module provides the register-level interface to the RFM69 over a
//! [`Transport`]. Every access is one chip-select framed transaction:
//!
//! 1. Assert chip-select
//! 2. Send the register address, with bit 7 set for writes
//! 3. Exchange one or more data bytes; the address auto-increments, except
//!    on the FIFO register which keeps draining or filling the FIFO
//! 4. Deassert chip-select
//!
//! # Example
//! ```no_run
//! use rfm69::{Device, Transport, registers::Version};
//!
//! fn probe<T: Transport>(transport: T) -> Result<u8, rfm69::Error<T::Error>> {
//!     let mut device = Device::new(transport);
//!
//!     let version: Version = device.read_register()?;
//!     Ok(version.value)
//! }
//! ```

use core::convert::Infallible;

use regiface::{ByteArray, ReadableRegister, WritableRegister};

use crate::registers::FIFO;
use crate::transport::{Selected, Transport};
use crate::Error;

/// Bit 7 of the address byte selects a write access
pub const WRITE_MASK: u8 = 0x80;

/// Byte clocked out while reading
const FILLER: u8 = 0xFF;

/// Register-level interface to the RFM69.
///
/// This struct wraps a [`Transport`] and provides single, burst and FIFO
/// accesses, both raw and through the typed registers in
/// [`registers`](crate::registers).
pub struct Device<T> {
    transport: T,
}

impl<T> Device<T> {
    /// Creates a new Device instance wrapping the provided transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Releases the underlying transport.
    pub fn release(self) -> T {
        self.transport
    }

    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T> Device<T>
where
    T: Transport,
{
    /// Reads a single register.
    pub fn read(&mut self, address: u8) -> Result<u8, T::Error> {
        let mut value = [0];
        self.burst_read(address, &mut value)?;
        Ok(value[0])
    }

    /// Writes a single register.
    pub fn write(&mut self, address: u8, value: u8) -> Result<(), T::Error> {
        self.burst_write(address, &[value])
    }

    /// Reads `buf.len()` consecutive bytes starting at `address`.
    ///
    /// Reading from [`FIFO`] drains that many bytes from the FIFO.
    pub fn burst_read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), T::Error> {
        let mut bus = Selected::begin(&mut self.transport)?;
        bus.exchange(address & !WRITE_MASK)?;
        for byte in buf.iter_mut() {
            *byte = bus.exchange(FILLER)?;
        }
        bus.end()
    }

    /// Writes `bytes` to consecutive registers starting at `address`.
    pub fn burst_write(&mut self, address: u8, bytes: &[u8]) -> Result<(), T::Error> {
        let mut bus = Selected::begin(&mut self.transport)?;
        bus.exchange(address | WRITE_MASK)?;
        for &byte in bytes {
            bus.exchange(byte)?;
        }
        bus.end()
    }

    /// Writes a packet into the FIFO, preceded by its length.
    ///
    /// The packet engine reads the length byte to know how many payload bytes
    /// follow. In packet mode the transmission starts on its own once the
    /// FIFO is no longer empty.
    ///
    /// # Errors
    /// * `Error::PayloadTooLong` - The length does not fit the length byte;
    ///   the bus was not touched
    /// * `Error::Transport` - The bus transaction failed
    pub fn fifo_write(&mut self, payload: &[u8]) -> Result<(), Error<T::Error>> {
        let len = u8::try_from(payload.len())
            .map_err(|_| Error::PayloadTooLong { len: payload.len() })?;

        let mut bus = Selected::begin(&mut self.transport)?;
        bus.exchange(FIFO | WRITE_MASK)?;
        bus.exchange(len)?;
        for &byte in payload {
            bus.exchange(byte)?;
        }
        Ok(bus.end()?)
    }

    /// Reads a register value from the device.
    ///
    /// # Type Parameters
    /// * `R` - Register type implementing ReadableRegister with u8 ID
    ///
    /// # Errors
    /// * `Error::Transport` - The bus transaction failed
    /// * `Error::Deserialization` - The register holds an undocumented value
    pub fn read_register<R>(&mut self) -> Result<R, Error<T::Error>>
    where
        R: ReadableRegister<IdType = u8>,
    {
        let mut raw_value = R::Array::new();
        self.burst_read(R::id(), raw_value.as_mut())?;

        R::from_bytes(raw_value).map_err(|_| Error::Deserialization)
    }

    /// Writes a value to a device register.
    ///
    /// # Errors
    /// * `T::Error` - The bus transaction failed
    pub fn write_register<R>(&mut self, register: R) -> Result<(), T::Error>
    where
        R: WritableRegister<IdType = u8, Error = Infallible>,
    {
        let raw_value = match register.to_bytes() {
            Ok(raw_value) => raw_value,
            Err(never) => match never {},
        };

        self.burst_write(R::id(), raw_value.as_ref())
    }

    /// Reads a register, lets `f` change it, and writes it back.
    pub fn modify_register<R, F>(&mut self, f: F) -> Result<(), Error<T::Error>>
    where
        R: ReadableRegister<IdType = u8> + WritableRegister<IdType = u8, Error = Infallible>,
        F: FnOnce(R) -> R,
    {
        let register = self.read_register::<R>()?;
        self.write_register(f(register))?;
        Ok(())
    }
}
