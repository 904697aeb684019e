//! Initialization and presence probe

use crate::registers::{Mode, OpMode, Version};
use crate::{Error, Rfm69, Transport};

use regiface::Register;

impl<T, D> Rfm69<T, D>
where
    T: Transport,
{
    /// Brings the radio up and checks that it answers.
    ///
    /// Runs the transport bring-up, writes the configured register table in
    /// order, switches to [`Mode::Receive`] and reads the version register.
    /// Returns the version on success.
    ///
    /// # Errors
    /// * `Error::DeviceNotFound` - The version register read back as zero.
    ///   The register table has been written regardless.
    pub fn init(&mut self) -> Result<u8, Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("init()");
        self.device.transport_mut().init()?;

        for (reg, value) in self.config.register_entries() {
            self.device.write(reg, value)?;
            if reg == OpMode::id() {
                if let Some(mode) = Mode::from_bits(value) {
                    self.mode = mode;
                }
            }
        }

        self.set_mode(Mode::Receive)?;

        let version = self.version()?;
        if version == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("version register reads zero, no radio on the bus");
            return Err(Error::DeviceNotFound);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("found RFM69 version {=u8:#x}", version);
        Ok(version)
    }

    /// Reads the silicon version register.
    pub fn version(&mut self) -> Result<u8, Error<T::Error>> {
        Ok(self.device.read_register::<Version>()?.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{Config, TABLE_END};
    use crate::sim::{Access, BusEvent, SimulatedRadio};

    use embedded_hal_mock::eh1::delay::NoopDelay;

    static TABLE: &[(u8, u8)] = &[
        (0x01, 0x04),
        (0x07, 0xD9),
        (0x08, 0x60),
        (0x09, 0x12),
        (TABLE_END, 0),
        (0x2F, 0xFF),
    ];

    fn radio() -> Rfm69<SimulatedRadio, NoopDelay> {
        Rfm69::with_config(
            SimulatedRadio::new(),
            NoopDelay::new(),
            Config::default().with_registers(TABLE),
        )
    }

    #[test]
    fn init_applies_table_in_order_then_enters_receive() {
        let mut radio = radio();

        assert_eq!(radio.init(), Ok(0x24));

        assert_eq!(radio.sim().events()[0], BusEvent::Init);
        assert_eq!(
            radio.sim().accesses(),
            &[
                Access::Write(0x01, 0x04),
                Access::Write(0x07, 0xD9),
                Access::Write(0x08, 0x60),
                Access::Write(0x09, 0x12),
                Access::Read(0x01),
                Access::Write(0x01, 0x10),
                Access::Read(0x10),
            ]
        );
        assert_eq!(radio.mode(), Mode::Receive);
        assert_eq!(radio.sim().register(0x2F), 0x00);
    }

    #[test]
    fn zero_version_means_no_radio() {
        let mut radio = radio();
        radio.sim().set_register(0x10, 0x00);

        assert_eq!(radio.init(), Err(Error::DeviceNotFound));
        // No rollback of the applied table
        assert_eq!(radio.sim().register(0x07), 0xD9);
    }

    #[test]
    fn any_nonzero_version_is_accepted() {
        let mut radio = radio();
        radio.sim().set_register(0x10, 0x01);

        assert_eq!(radio.init(), Ok(0x01));
    }

    #[test]
    fn default_table_is_written_entry_by_entry() {
        let mut radio = Rfm69::new(SimulatedRadio::new(), NoopDelay::new());

        radio.init().unwrap();

        let entries = crate::config::DEFAULT_REGISTERS.len() - 1;
        // One transaction per entry, two for the mode change, one for the probe
        assert_eq!(radio.sim().transactions(), entries + 3);
        assert_eq!(radio.sim().register(0x38), 66);
    }
}
