//! Bus transport
//!
//! The RFM69 is driven over a full-duplex, byte-oriented bus with an active
//! low chip-select line. The driver performs all physical I/O through the
//! [`Transport`] trait so that it can run against real hardware through
//! [`SpiTransport`], or against a simulated register file in tests.

use embedded_hal::{digital::OutputPin, spi::SpiBus};

/// Physical link to the radio
///
/// Implementors exchange single bytes and drive the chip-select line. They
/// must not touch chip-select from [`exchange`](Transport::exchange), since
/// one logical transaction spans several exchanges.
pub trait Transport {
    /// Error reported by the underlying hardware
    type Error;

    /// One-time bring-up of the bus peripheral.
    ///
    /// Called by [`Rfm69::init`](crate::Rfm69::init) before the first
    /// register access. The default implementation does nothing.
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Sends `byte` and returns the byte clocked in at the same time
    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Asserts chip-select
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Deasserts chip-select
    fn deselect(&mut self) -> Result<(), Self::Error>;
}

impl<T> Transport for &mut T
where
    T: Transport + ?Sized,
{
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        T::exchange(self, byte)
    }

    fn select(&mut self) -> Result<(), Self::Error> {
        T::select(self)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        T::deselect(self)
    }
}

/// A transport with chip-select asserted
///
/// Created by [`Selected::begin`]. Chip-select is deasserted exactly once:
/// either by [`end`](Selected::end), which reports a deassert failure, or on
/// drop if the transaction was abandoned early through `?`.
pub struct Selected<'a, T>
where
    T: Transport,
{
    transport: &'a mut T,
    active: bool,
}

impl<'a, T> Selected<'a, T>
where
    T: Transport,
{
    /// Asserts chip-select and starts a transaction
    pub fn begin(transport: &'a mut T) -> Result<Self, T::Error> {
        transport.select()?;
        Ok(Self {
            transport,
            active: true,
        })
    }

    /// Exchanges one byte within the transaction
    pub fn exchange(&mut self, byte: u8) -> Result<u8, T::Error> {
        self.transport.exchange(byte)
    }

    /// Deasserts chip-select and finishes the transaction
    pub fn end(mut self) -> Result<(), T::Error> {
        self.active = false;
        self.transport.deselect()
    }
}

impl<T> Drop for Selected<'_, T>
where
    T: Transport,
{
    fn drop(&mut self) {
        if self.active {
            // Reached after a failed exchange; that error takes precedence
            let _ = self.transport.deselect();
        }
    }
}

/// Error of a [`SpiTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiTransportError<SPI, PIN> {
    /// The SPI bus failed
    Spi(SPI),
    /// The chip-select pin failed
    Pin(PIN),
}

/// [`Transport`] over an `embedded-hal` SPI bus and a chip-select pin
///
/// The bus must be configured for SPI mode 0 and at most 10 MHz before it is
/// handed over. Chip-select is driven low to select the radio and the bus is
/// flushed before it is driven high again.
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiTransport<SPI, CS> {
    /// Creates a new transport from a bus and a chip-select pin.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Releases the bus and the chip-select pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = SpiTransportError<SPI::Error, CS::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(SpiTransportError::Pin)
    }

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut buf = [byte];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(SpiTransportError::Spi)?;
        Ok(buf[0])
    }

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(SpiTransportError::Pin)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        let flushed = self.spi.flush().map_err(SpiTransportError::Spi);
        self.cs.set_high().map_err(SpiTransportError::Pin)?;
        flushed
    }
}
