//! Register definitions for the RFM69
//! Generated from the RFM69HCW datasheet (SX1231H register map)

mod common;
mod irq;
mod receiver;
mod temperature;
mod transmitter;

pub use common::*;
pub use irq::*;
pub use receiver::*;
pub use temperature::*;
pub use transmitter::*;

/// Address of the FIFO register
pub const FIFO: u8 = 0x00;

/// Size of the FIFO in bytes
pub const FIFO_SIZE: usize = 66;

