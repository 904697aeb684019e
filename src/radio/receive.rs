//! Packet reception

use crate::registers::{IrqFlags2, LnaSensitivity, RssiValue, TestLna, FIFO, FIFO_SIZE};
use crate::{Error, Rfm69, Transport};

/// A packet drained from the FIFO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reception {
    /// Packet length: the length byte at the head of the FIFO, plus one
    pub len: usize,
    /// Signal strength at the end of reception, in dBm
    pub rssi: i16,
}

impl Reception {
    /// The received bytes within `buf`
    ///
    /// `buf` is the buffer passed to [`Rfm69::try_receive`]. Bytes past
    /// [`len`](Reception::len) are left over from earlier use of the buffer.
    pub fn payload<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[..self.len.min(buf.len())]
    }
}

impl<T, D> Rfm69<T, D>
where
    T: Transport,
{
    /// Drains a received packet from the FIFO, if one is waiting.
    ///
    /// Returns `Ok(None)` without touching the FIFO when PAYLOADREADY is
    /// clear. Otherwise the full FIFO span is read into `buf`, the RSSI is
    /// sampled, and the FIFO is cleared, leaving the radio in receive mode.
    pub fn try_receive(
        &mut self,
        buf: &mut [u8; FIFO_SIZE],
    ) -> Result<Option<Reception>, Error<T::Error>> {
        let flags = self.device.read_register::<IrqFlags2>()?;
        if !flags.payload_ready {
            return Ok(None);
        }

        let len = usize::from(self.device.read(FIFO)?) + 1;
        self.device.burst_read(FIFO, buf)?;
        let rssi = self.device.read_register::<RssiValue>()?.dbm();

        self.clear_fifo()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("received {=usize} bytes at {=i16} dBm", len, rssi);
        Ok(Some(Reception { len, rssi }))
    }

    /// Selects the LNA sensitivity.
    pub fn set_lna_sensitivity(
        &mut self,
        sensitivity: LnaSensitivity,
    ) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("set_lna_sensitivity({})", sensitivity);
        self.device.write_register(TestLna { sensitivity })?;
        Ok(())
    }
}
