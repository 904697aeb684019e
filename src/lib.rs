#![cfg_attr(not(any(test, feature = "std")), no_std)]
//! RFM69 Radio Driver
//!
//! This crate provides a driver for the HopeRF RFM69 family of sub-GHz packet
//! radio modules, built around the Semtech SX1231(H) transceiver. The radio is
//! controlled through an 8-bit register map over SPI and moves packets
//! through a 66 byte FIFO.
//!
//! # Features
//! - Register table initialization with a presence probe
//! - Variable length packet transmit and receive through the FIFO
//! - Transmit power from +2 to +20 dBm, with the PA1+PA2 high power path
//!   above +17 dBm
//! - On-chip temperature sensor and RSSI sampling
//!
//! The driver is a register and packet framing layer only. It does no
//! retransmission, addressing or encryption.
//!
//! # Architecture
//! The driver is organized into several modules:
//!
//! - [`transport`]: The [`Transport`] trait the driver performs all bus I/O
//!   through, and [`SpiTransport`] implementing it for `embedded-hal`
//! - [`device`]: Register transaction layer
//!   - Single, burst and FIFO accesses framed by chip-select
//!   - Typed register access
//! - [`registers`]: Register definitions
//! - [`radio`]: The [`Rfm69`] driver
//!   - Operating mode control
//!   - Initialization, packet send and receive, measurements
//! - [`config`]: Register table and poll budgets
//!
//! # Timeouts
//! Every wait for a hardware flag is bounded by a [`PollBudget`] from the
//! [`Config`], paced by the `embedded-hal` delay handed to the driver. A radio
//! that never raises a flag makes the call fail with [`Error::Timeout`]
//! instead of hanging.
//!
//! # Example
//! ```no_run
//! use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
//! use rfm69::{Rfm69, SpiTransport};
//!
//! fn beacon<SPI, CS, D>(spi: SPI, cs: CS, delay: D) -> Result<(), ()>
//! where
//!     SPI: SpiBus,
//!     CS: OutputPin,
//!     D: DelayNs,
//! {
//!     let mut radio = Rfm69::new(SpiTransport::new(spi, cs), delay);
//!     radio.init().map_err(|_| ())?;
//!
//!     radio.send(b"3aBEACON[NODE]", 10).map_err(|_| ())?;
//!
//!     let mut buf = [0; rfm69::registers::FIFO_SIZE];
//!     if let Some(packet) = radio.try_receive(&mut buf).map_err(|_| ())? {
//!         let _payload = packet.payload(&buf);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod device;
pub mod error;
pub mod poll;
pub mod radio;
pub mod registers;
pub mod transport;

#[cfg(test)]
mod sim;

pub use config::Config;
pub use device::Device;
pub use error::Error;
pub use poll::PollBudget;
pub use radio::{Reception, Rfm69};
pub use registers::Mode;
pub use transport::{SpiTransport, SpiTransportError, Transport};
