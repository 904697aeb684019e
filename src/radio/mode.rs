//! Operating mode control
//!
//! The driver caches the last mode it wrote to OPMODE and never re-reads it:
//! after an external reset of the radio, call
//! [`init`](crate::Rfm69::init) again to bring the cache back in line.

use crate::registers::{Mode, OpMode};
use crate::{Error, Rfm69, Transport};

impl<T, D> Rfm69<T, D>
where
    T: Transport,
{
    /// Switches the radio to `mode`.
    ///
    /// Only the mode selector bits of OPMODE change; the sequencer and listen
    /// mode bits are preserved. The cached mode is updated once the write
    /// went through.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("set_mode({})", mode);
        self.device
            .modify_register::<OpMode, _>(|op_mode| op_mode.with_mode(mode))?;
        self.mode = mode;
        Ok(())
    }

    /// Clears the FIFO by cycling through standby back to receive.
    ///
    /// Leaves the radio in [`Mode::Receive`].
    pub fn clear_fifo(&mut self) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("clear_fifo()");
        self.set_mode(Mode::Standby)?;
        self.set_mode(Mode::Receive)
    }
}

impl<T, D> Rfm69<T, D> {
    /// Returns the mode last written by [`set_mode`](Rfm69::set_mode).
    ///
    /// This does not touch the bus.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}
