//! High-level interface to the RFM69
//!
//! The entry point to this API is the [`Rfm69`] struct. It owns the
//! [`Device`] it talks through, the delay used to pace polling, and the
//! cached operating mode of the radio.
//!
//! The operations are grouped by concern:
//! - [`mode`]: operating mode control and FIFO clearing
//! - [`init`]: register table application and presence probe
//! - [`receive`]: packet reception
//! - [`transmit`]: packet transmission
//! - [`measure`]: temperature and RSSI measurements
//!
//! Every operation borrows the driver mutably and runs to completion, so
//! calls are serialized by construction. Share a driver between execution
//! contexts only behind a lock.

use core::fmt;

use crate::registers::Mode;
use crate::{Config, Device};

pub mod init;
pub mod measure;
pub mod mode;
pub mod receive;
pub mod transmit;

pub use receive::Reception;

/// Entry point to the RFM69 driver API
pub struct Rfm69<T, D> {
    device: Device<T>,
    delay: D,
    config: Config,
    mode: Mode,
}

impl<T, D> Rfm69<T, D> {
    /// Creates a driver with the default [`Config`].
    ///
    /// No bus traffic happens until [`init`](Rfm69::init) is called.
    pub fn new(transport: T, delay: D) -> Self {
        Self::with_config(transport, delay, Config::default())
    }

    /// Creates a driver with a custom [`Config`].
    pub fn with_config(transport: T, delay: D, config: Config) -> Self {
        Self {
            device: Device::new(transport),
            delay,
            config,
            // Reset default of the radio
            mode: Mode::Standby,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Releases the transport and the delay
    pub fn release(self) -> (T, D) {
        (self.device.release(), self.delay)
    }
}

// Can't be derived without putting requirements on `T` and `D`.
impl<T, D> fmt::Debug for Rfm69<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rfm69 {{ mode: {:?}, .. }}", self.mode)
    }
}

#[cfg(test)]
impl<D> Rfm69<crate::sim::SimulatedRadio, D> {
    pub(crate) fn sim(&mut self) -> &mut crate::sim::SimulatedRadio {
        self.device.transport_mut()
    }
}
