//! IRQ flag registers
//!
//! The radio exposes its events through two read-only flag registers. This
//! driver polls them instead of wiring up the DIO interrupt lines.

use core::convert::Infallible;

use regiface::{register, FromByteArray, ReadableRegister};

/// IRQ flags 1 register (address: 0x27)
#[register(0x27u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ReadableRegister)]
pub struct IrqFlags1 {
    /// The mode requested in OPMODE is ready
    pub mode_ready: bool,
    /// Receiver ready, after RSSI, AGC and AFC
    pub rx_ready: bool,
    /// Transmitter ready, after PA ramp-up
    pub tx_ready: bool,
    /// PLL locked
    pub pll_lock: bool,
    /// RSSI threshold exceeded
    pub rssi: bool,
    /// Timeout in RX
    pub timeout: bool,
    /// Entered the intermediate mode in listen mode
    pub auto_mode: bool,
    /// Sync address matched
    pub sync_address_match: bool,
}

/// IRQ flags 2 register (address: 0x28)
#[register(0x28u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ReadableRegister)]
pub struct IrqFlags2 {
    /// FIFO is full
    pub fifo_full: bool,
    /// FIFO holds at least one byte
    pub fifo_not_empty: bool,
    /// FIFO fill level exceeds the FIFO threshold
    pub fifo_level: bool,
    /// FIFO overrun occurred
    pub fifo_overrun: bool,
    /// Complete packet sent; cleared when leaving TX
    pub packet_sent: bool,
    /// Complete payload received and, if enabled, CRC checked
    pub payload_ready: bool,
    /// CRC of the received payload is valid
    pub crc_ok: bool,
}

impl FromByteArray for IrqFlags1 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        let b = bytes[0];
        Ok(Self {
            mode_ready: b & 0x80 != 0,
            rx_ready: b & 0x40 != 0,
            tx_ready: b & 0x20 != 0,
            pll_lock: b & 0x10 != 0,
            rssi: b & 0x08 != 0,
            timeout: b & 0x04 != 0,
            auto_mode: b & 0x02 != 0,
            sync_address_match: b & 0x01 != 0,
        })
    }
}

impl FromByteArray for IrqFlags2 {
    type Error = Infallible;
    type Array = [u8; 1];

    fn from_bytes(bytes: Self::Array) -> Result<Self, Self::Error> {
        let b = bytes[0];
        Ok(Self {
            fifo_full: b & 0x80 != 0,
            fifo_not_empty: b & 0x40 != 0,
            fifo_level: b & 0x20 != 0,
            fifo_overrun: b & 0x10 != 0,
            packet_sent: b & 0x08 != 0,
            payload_ready: b & 0x04 != 0,
            crc_ok: b & 0x02 != 0,
        })
    }
}
