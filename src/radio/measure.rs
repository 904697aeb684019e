//! Temperature and RSSI measurements

use crate::poll;
use crate::registers::{Mode, RssiConfig, RssiValue, Temp1, Temp2};
use crate::{Error, Rfm69, Transport};

use embedded_hal::delay::DelayNs;

impl<T, D> Rfm69<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Reads the on-chip temperature sensor, in degrees Celsius.
    ///
    /// The sensor only works in standby, so the radio is switched there for
    /// the conversion and put back into its previous mode afterwards, also
    /// when the conversion times out. The sensor is uncalibrated; expect an
    /// offset of a few degrees.
    ///
    /// # Errors
    /// * `Error::Timeout` - The conversion did not start or did not finish
    ///   within the configured budgets
    pub fn read_temperature(&mut self) -> Result<i16, Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("read_temperature()");

        let previous = self.mode;
        self.set_mode(Mode::Standby)?;

        let measured = self.convert_temperature();
        let restored = self.set_mode(previous);

        let celsius = measured?;
        restored?;
        Ok(celsius)
    }

    fn convert_temperature(&mut self) -> Result<i16, Error<T::Error>> {
        let device = &mut self.device;
        device.write_register(Temp1::START)?;

        // The trigger is sometimes missed; write it again after every miss.
        poll::wait_for(&mut self.delay, self.config.temperature_start, || {
            if device.read_register::<Temp1>()?.running {
                return Ok(true);
            }
            device.write_register(Temp1::START)?;
            Ok(false)
        })?;

        poll::wait_for(&mut self.delay, self.config.temperature_done, || {
            Ok(!device.read_register::<Temp1>()?.running)
        })?;

        Ok(device.read_register::<Temp2>()?.celsius())
    }

    /// Samples the current signal strength, in dBm.
    ///
    /// # Errors
    /// * `Error::NotInReceiveMode` - The radio is not receiving; the bus was
    ///   not touched
    /// * `Error::Timeout` - The measurement did not finish within the
    ///   configured budget
    pub fn sample_rssi(&mut self) -> Result<i16, Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("sample_rssi()");

        if self.mode != Mode::Receive {
            return Err(Error::NotInReceiveMode);
        }

        let device = &mut self.device;
        device.write_register(RssiConfig::START)?;
        poll::wait_for(&mut self.delay, self.config.rssi_done, || {
            Ok(device.read_register::<RssiConfig>()?.done)
        })?;

        Ok(device.read_register::<RssiValue>()?.dbm())
    }
}
