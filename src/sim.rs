//! Simulated RFM69 register file for unit tests

use std::collections::VecDeque;
use std::vec::Vec;

use crate::Transport;

const OPMODE: u8 = 0x01;
const VERSION: u8 = 0x10;
const RSSI_CONFIG: u8 = 0x23;
const IRQ_FLAGS_1: u8 = 0x27;
const IRQ_FLAGS_2: u8 = 0x28;
const TEMP_1: u8 = 0x4E;

const MODE_MASK: u8 = 0x1C;
const MODE_STANDBY: u8 = 0x04;
const MODE_TX: u8 = 0x0C;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    Init,
    Select,
    Exchange(u8),
    Deselect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u8),
    Write(u8, u8),
}

#[derive(Debug, Clone, Copy)]
enum Thermometer {
    Idle,
    Starting { polls_left: Option<u32> },
    Running { polls_left: Option<u32> },
}

struct Transaction {
    address: Option<u8>,
    write: bool,
}

pub struct SimulatedRadio {
    registers: [u8; 0x80],
    rx_fifo: VecDeque<u8>,
    tx_fifo: Vec<u8>,
    sent: Vec<Vec<u8>>,
    events: Vec<BusEvent>,
    accesses: Vec<Access>,
    transaction: Option<Transaction>,
    fail_after: Option<usize>,

    /// TXREADY is raised as soon as the radio is in transmit mode
    pub tx_ready: bool,
    /// PACKETSENT is raised once a FIFO write completes
    pub packet_sent: bool,
    /// RSSI DONE is raised on the first poll after a start
    pub rssi_done: bool,
    /// TEMP1 polls answering "not running" after a start; `None` never starts
    pub temperature_start_polls: Option<u32>,
    /// TEMP1 polls answering "running"; `None` never finishes
    pub temperature_running_polls: Option<u32>,
    thermometer: Thermometer,
}

impl SimulatedRadio {
    pub fn new() -> Self {
        let mut registers = [0u8; 0x80];
        registers[OPMODE as usize] = MODE_STANDBY;
        registers[VERSION as usize] = 0x24;

        Self {
            registers,
            rx_fifo: VecDeque::new(),
            tx_fifo: Vec::new(),
            sent: Vec::new(),
            events: Vec::new(),
            accesses: Vec::new(),
            transaction: None,
            fail_after: None,
            tx_ready: true,
            packet_sent: true,
            rssi_done: true,
            temperature_start_polls: Some(0),
            temperature_running_polls: Some(0),
            thermometer: Thermometer::Idle,
        }
    }

    /// Lets `successful` more exchanges through, then fails every exchange
    pub fn fail_exchange_after(&mut self, successful: usize) {
        self.fail_after = Some(successful);
    }

    /// Stages a received frame as the radio would store it: length byte first
    pub fn receive_frame(&mut self, length_byte: u8, payload: &[u8]) {
        self.rx_fifo.push_back(length_byte);
        self.rx_fifo.extend(payload.iter().copied());
        self.registers[IRQ_FLAGS_2 as usize] |= 0x04;
    }

    pub fn set_register(&mut self, address: u8, value: u8) {
        self.registers[address as usize] = value;
    }

    pub fn register(&self, address: u8) -> u8 {
        self.registers[address as usize]
    }

    pub fn events(&self) -> &[BusEvent] {
        &self.events
    }

    pub fn accesses(&self) -> &[Access] {
        &self.accesses
    }

    pub fn clear_log(&mut self) {
        self.events.clear();
        self.accesses.clear();
    }

    /// Number of chip-select framed transactions seen so far
    pub fn transactions(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == BusEvent::Select)
            .count()
    }

    pub fn writes_to(&self, address: u8) -> Vec<u8> {
        self.accesses
            .iter()
            .filter_map(|access| match access {
                Access::Write(a, value) if *a == address => Some(*value),
                _ => None,
            })
            .collect()
    }

    pub fn reads_of(&self, address: u8) -> usize {
        self.accesses
            .iter()
            .filter(|access| **access == Access::Read(address))
            .count()
    }

    pub fn sent_frames(&self) -> &[Vec<u8>] {
        &self.sent
    }

    fn mode_bits(&self) -> u8 {
        self.registers[OPMODE as usize] & MODE_MASK
    }

    fn read(&mut self, address: u8) -> u8 {
        self.accesses.push(Access::Read(address));
        match address {
            0x00 => self.rx_fifo.pop_front().unwrap_or(0),
            IRQ_FLAGS_1 if self.tx_ready && self.mode_bits() == MODE_TX => {
                self.registers[address as usize] | 0x20
            }
            TEMP_1 => self.poll_thermometer(),
            _ => self.registers[address as usize],
        }
    }

    fn write(&mut self, address: u8, value: u8) {
        self.accesses.push(Access::Write(address, value));
        match address {
            0x00 => self.tx_fifo.push(value),
            OPMODE => {
                self.registers[OPMODE as usize] = value;
                let mode = value & MODE_MASK;
                if mode == MODE_STANDBY {
                    self.rx_fifo.clear();
                    self.registers[IRQ_FLAGS_2 as usize] &= !0x04;
                }
                if mode != MODE_TX {
                    self.registers[IRQ_FLAGS_2 as usize] &= !0x08;
                }
            }
            RSSI_CONFIG => {
                if value & 0x01 != 0 && self.rssi_done {
                    self.registers[RSSI_CONFIG as usize] = 0x02;
                } else {
                    self.registers[RSSI_CONFIG as usize] = 0x00;
                }
            }
            TEMP_1 => {
                if value & 0x08 != 0 {
                    if let Thermometer::Idle = self.thermometer {
                        self.thermometer = Thermometer::Starting {
                            polls_left: self.temperature_start_polls,
                        };
                    }
                }
            }
            _ => self.registers[address as usize] = value,
        }
    }

    fn poll_thermometer(&mut self) -> u8 {
        match self.thermometer {
            Thermometer::Idle => 0x00,
            Thermometer::Starting { polls_left: None } => 0x00,
            Thermometer::Starting {
                polls_left: Some(0),
            } => {
                self.thermometer = Thermometer::Running {
                    polls_left: self.temperature_running_polls,
                };
                0x04
            }
            Thermometer::Starting {
                polls_left: Some(n),
            } => {
                self.thermometer = Thermometer::Starting {
                    polls_left: Some(n - 1),
                };
                0x00
            }
            Thermometer::Running { polls_left: None } => 0x04,
            Thermometer::Running {
                polls_left: Some(0),
            } => {
                self.thermometer = Thermometer::Idle;
                0x00
            }
            Thermometer::Running {
                polls_left: Some(n),
            } => {
                self.thermometer = Thermometer::Running {
                    polls_left: Some(n - 1),
                };
                0x04
            }
        }
    }
}

impl Transport for SimulatedRadio {
    type Error = SimError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.events.push(BusEvent::Init);
        Ok(())
    }

    fn exchange(&mut self, byte: u8) -> Result<u8, Self::Error> {
        if let Some(left) = self.fail_after.as_mut() {
            if *left == 0 {
                return Err(SimError);
            }
            *left -= 1;
        }
        self.events.push(BusEvent::Exchange(byte));

        let transaction = match self.transaction.as_mut() {
            Some(transaction) => transaction,
            None => panic!("exchange without chip-select"),
        };
        let (address, write) = match transaction.address {
            None => {
                transaction.address = Some(byte & 0x7F);
                transaction.write = byte & 0x80 != 0;
                return Ok(0x00);
            }
            Some(address) => (address, transaction.write),
        };
        // Burst accesses advance the address, except on the FIFO.
        if address != 0x00 {
            transaction.address = Some(address.wrapping_add(1) & 0x7F);
        }

        if write {
            self.write(address, byte);
            Ok(0x00)
        } else {
            Ok(self.read(address))
        }
    }

    fn select(&mut self) -> Result<(), Self::Error> {
        assert!(self.transaction.is_none(), "chip-select asserted twice");
        self.events.push(BusEvent::Select);
        self.transaction = Some(Transaction {
            address: None,
            write: false,
        });
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        let transaction = self.transaction.take();
        assert!(transaction.is_some(), "chip-select released twice");
        self.events.push(BusEvent::Deselect);

        if let Some(Transaction {
            address: Some(0x00),
            write: true,
        }) = transaction
        {
            let frame = core::mem::take(&mut self.tx_fifo);
            self.sent.push(frame);
            if self.packet_sent && self.mode_bits() == MODE_TX {
                self.registers[IRQ_FLAGS_2 as usize] |= 0x08;
            }
        }
        Ok(())
    }
}
