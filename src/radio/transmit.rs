//! Packet transmission
//!
//! # Power amplifier paths
//! - 2..=17 dBm: PA0 only, PA level byte `0x80 | (power + 28)`. From 4 dBm
//!   up the level spills past bit 4; the byte is written as is.
//! - 18..=20 dBm: PA1+PA2 with the high power settings, output power
//!   `power + 11`. Over-current protection is switched off for the duration
//!   of the packet and the test registers are boosted; both are put back once
//!   the packet is out.

use core::ops::RangeInclusive;

use crate::poll;
use crate::registers::{
    Amplifiers, IrqFlags1, IrqFlags2, Mode, Ocp, PaLevel, TestPa1, TestPa2, FIFO_SIZE,
};
use crate::{Error, Rfm69, Transport};

use embedded_hal::delay::DelayNs;

/// Transmit power window in dBm
pub const POWER_RANGE_DBM: RangeInclusive<u8> = 2..=20;

/// Highest transmit power served by PA0 alone
pub const MAX_NORMAL_POWER_DBM: u8 = 17;

impl<T, D> Rfm69<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Transmits `payload` at `power_dbm`.
    ///
    /// The radio returns to the mode it was in before the call, on success
    /// and on failure alike.
    ///
    /// # Errors
    /// * `Error::InvalidPower` - `power_dbm` is outside 2..=20; nothing was sent
    ///   to the radio
    /// * `Error::PayloadTooLong` - `payload` does not fit the FIFO; nothing was
    ///   sent to the radio
    /// * `Error::Timeout` - the PA did not ramp up or the packet did not go out
    ///   within the configured budgets
    pub fn send(&mut self, payload: &[u8], power_dbm: u8) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("send({=usize} bytes, {=u8} dBm)", payload.len(), power_dbm);

        if !POWER_RANGE_DBM.contains(&power_dbm) {
            return Err(Error::InvalidPower(power_dbm));
        }
        if payload.len() > FIFO_SIZE {
            return Err(Error::PayloadTooLong { len: payload.len() });
        }

        let previous = self.mode;
        self.set_mode(Mode::Transmit)?;

        let high_power = power_dbm > MAX_NORMAL_POWER_DBM;
        let sent = self.transmit(payload, power_dbm, high_power);

        let mode_restored = self.set_mode(previous);
        let pa_restored = if high_power {
            self.leave_high_power()
        } else {
            Ok(())
        };

        sent.and(mode_restored).and(pa_restored)
    }

    fn transmit(
        &mut self,
        payload: &[u8],
        power_dbm: u8,
        high_power: bool,
    ) -> Result<(), Error<T::Error>> {
        if high_power {
            self.device.write_register(Ocp::OFF)?;
            self.device.write_register(TestPa1::BOOST)?;
            self.device.write_register(TestPa2::BOOST)?;
            self.device.write_register(PaLevel::new(
                Amplifiers::PA1 | Amplifiers::PA2,
                power_dbm + 11,
            ))?;
        } else {
            self.device
                .write_register(PaLevel::new(Amplifiers::PA0, power_dbm + 28))?;
        }

        let device = &mut self.device;
        poll::wait_for(&mut self.delay, self.config.tx_ready, || {
            Ok(device.read_register::<IrqFlags1>()?.tx_ready)
        })?;

        device.fifo_write(payload)?;

        poll::wait_for(&mut self.delay, self.config.packet_sent, || {
            Ok(device.read_register::<IrqFlags2>()?.packet_sent)
        })
    }

    fn leave_high_power(&mut self) -> Result<(), Error<T::Error>> {
        self.device.write_register(TestPa1::NORMAL)?;
        self.device.write_register(TestPa2::NORMAL)?;
        self.device.write_register(Ocp::ON_95_MA)?;
        Ok(())
    }
}
