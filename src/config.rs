//! Driver configuration
//!
//! [`Config`] bundles the register table applied by
//! [`Rfm69::init`](crate::Rfm69::init) with the poll budgets of every wait
//! the driver performs.
//!
//! The default register table sets the radio up for the UKHASnet network:
//! - 869.5 MHz carrier, FSK, 2 kbps, 24 kHz shift
//! - Variable length packets with CRC, sync word 0x2D 0xAA
//! - Transmission starts as soon as the FIFO is not empty

use crate::poll::PollBudget;

/// Register address that terminates a register table
pub const TABLE_END: u8 = 255;

/// Register values applied in order by [`Rfm69::init`](crate::Rfm69::init)
///
/// Entries after a [`TABLE_END`] address are ignored.
pub type RegisterTable = &'static [(u8, u8)];

/// UKHASnet register settings
pub static DEFAULT_REGISTERS: &[(u8, u8)] = &[
    // Sequencer on, listen off, standby
    (0x01, 0x04),
    // Packet mode, FSK, no shaping
    (0x02, 0x00),
    // 2000 bps
    (0x03, 0x3E),
    (0x04, 0x80),
    // 12 kHz deviation
    (0x05, 0x00),
    (0x06, 0xC5),
    // 869.5 MHz
    (0x07, 0xD9),
    (0x08, 0x60),
    (0x09, 0x12),
    // DCC 4%, 125 kHz channel filter
    (0x19, 0x42),
    // DIO0 on PayloadReady / PacketSent, no clock output
    (0x25, 0x40),
    (0x26, 0x07),
    // RSSI threshold -110 dBm
    (0x29, 220),
    // Sync on, two bytes, no tolerance
    (0x2E, 0x88),
    (0x2F, 0x2D),
    (0x30, 0xAA),
    // Variable length, CRC on, CRC auto clear, no address filtering
    (0x37, 0x90),
    (0x38, crate::registers::FIFO_SIZE as u8),
    // Start transmitting on FIFO not empty
    (0x3C, 0x85),
    // Two bit RX restart delay, no auto restart, no AES
    (0x3D, 0x10),
    // Improved DAGC for low modulation index
    (0x6F, 0x30),
    (TABLE_END, 0),
];

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Register table applied during initialization
    pub registers: RegisterTable,
    /// Wait for the PA to ramp up before loading the FIFO
    pub tx_ready: PollBudget,
    /// Wait for the packet to leave the antenna
    pub packet_sent: PollBudget,
    /// Wait for a temperature conversion to start, re-triggering on every miss
    pub temperature_start: PollBudget,
    /// Wait for a temperature conversion to finish
    pub temperature_done: PollBudget,
    /// Wait for an RSSI measurement to finish
    pub rssi_done: PollBudget,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registers: DEFAULT_REGISTERS,
            tx_ready: PollBudget::new(1_000, 100),
            // A full FIFO takes ~300ms at 2 kbps
            packet_sent: PollBudget::new(2_000, 1_000),
            temperature_start: PollBudget::new(50, 1_000),
            temperature_done: PollBudget::new(10, 1_000),
            rssi_done: PollBudget::new(1_000, 10),
        }
    }
}

impl Config {
    /// Replaces the register table applied during initialization.
    pub fn with_registers(self, registers: RegisterTable) -> Self {
        Self { registers, ..self }
    }

    /// Register entries up to, but not including, the end marker
    pub(crate) fn register_entries(&self) -> impl Iterator<Item = (u8, u8)> + 'static {
        let registers = self.registers;
        registers
            .iter()
            .copied()
            .take_while(|(address, _)| *address != TABLE_END)
    }
}
